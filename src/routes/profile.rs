//! Session-gated profile route. The controller in `features::profile`
//! decides every transition; this component dispatches its effects (fetch,
//! bio writes, session invalidation, redirects) and renders the snapshot.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::profile::client;
use crate::features::profile::controller::{
    BioWriteMethod, ProfileController, ProfileEffect, ProfileEvent,
};
use crate::features::session::SessionStore;
use crate::routes::perform_redirect;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = SessionStore::default();
    let navigate = use_navigate();
    let controller = RwSignal::new(ProfileController::default());

    let fetch_action =
        Action::new_local(move |_: &()| async move { client::fetch_profile(store).await });
    let save_action = Action::new_local(move |input: &(BioWriteMethod, String)| {
        let (method, text) = input.clone();
        async move { client::write_bio(store, method, &text).await }
    });
    let delete_action =
        Action::new_local(move |_: &()| async move { client::remove_bio(store).await });

    let apply = move |event: ProfileEvent| {
        let effects = controller
            .try_update(|state| state.handle(event))
            .unwrap_or_default();
        for effect in effects {
            match effect {
                ProfileEffect::FetchProfile => {
                    fetch_action.dispatch(());
                }
                ProfileEffect::WriteBio { method, text } => {
                    save_action.dispatch((method, text));
                }
                ProfileEffect::RemoveBio => {
                    delete_action.dispatch(());
                }
                ProfileEffect::ClearSession => store.clear(),
                ProfileEffect::ScheduleRedirect(redirect) => {
                    perform_redirect(navigate.clone(), redirect);
                }
            }
        }
    };

    let apply_mount = apply.clone();
    Effect::new(move |_| {
        apply_mount(ProfileEvent::Activated);
    });

    let apply_loaded = apply.clone();
    Effect::new(move |_| {
        if let Some(result) = fetch_action.value().get() {
            apply_loaded(ProfileEvent::ProfileLoaded(result));
        }
    });

    let apply_saved = apply.clone();
    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            apply_saved(ProfileEvent::BioSaved(result));
        }
    });

    let apply_deleted = apply.clone();
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            apply_deleted(ProfileEvent::BioDeleted(result));
        }
    });

    let busy = Signal::derive(move || controller.with(|state| state.busy()));

    let apply_edit = apply.clone();
    let apply_save = apply.clone();
    let apply_delete = apply.clone();
    let apply_cancel = apply.clone();
    let apply_logout = apply.clone();

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="mb-5 text-2xl font-semibold text-gray-900">"Profile"</h1>
                {move || match controller.with(|state| state.profile().cloned()) {
                    Some(profile) => {
                        let has_bio = profile.has_bio();
                        let bio_text = profile
                            .bio
                            .clone()
                            .filter(|bio| !bio.is_empty())
                            .unwrap_or_else(|| "No bio added yet.".to_string());
                        let apply_edit = apply_edit.clone();
                        let apply_save = apply_save.clone();
                        let apply_delete = apply_delete.clone();
                        let apply_cancel = apply_cancel.clone();
                        view! {
                            <div class="space-y-4">
                                <p class="text-sm text-gray-900">
                                    <span class="font-medium">"Username: "</span>
                                    {profile.username.clone()}
                                </p>
                                <p class="text-sm text-gray-900">
                                    <span class="font-medium">"Email: "</span>
                                    {profile.email.clone()}
                                </p>
                                <h2 class="text-lg font-semibold text-gray-900">"Bio"</h2>
                                {move || {
                                    let apply_edit = apply_edit.clone();
                                    let apply_save = apply_save.clone();
                                    let apply_delete = apply_delete.clone();
                                    let apply_cancel = apply_cancel.clone();
                                    let bio_text = bio_text.clone();
                                    if controller.with(|state| state.editing()) {
                                        view! {
                                            <div>
                                                <textarea
                                                    rows="5"
                                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                                                    placeholder="Write something about yourself..."
                                                    prop:value=move || {
                                                        controller.with(|state| state.draft_bio().to_string())
                                                    }
                                                    on:input=move |event| {
                                                        let text = event_target_value(&event);
                                                        controller.update(|state| {
                                                            state.handle(ProfileEvent::BioEdited(text));
                                                        });
                                                    }
                                                ></textarea>
                                                <div class="mt-3 flex items-center gap-4">
                                                    <button
                                                        type="button"
                                                        class="text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm px-5 py-2.5"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| apply_save(ProfileEvent::SaveBio)
                                                    >
                                                        "Save"
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="text-sm font-medium text-gray-700 hover:underline"
                                                        on:click=move |_| apply_cancel(ProfileEvent::CancelEdit)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <div>
                                                <p class="text-sm text-gray-700">{bio_text}</p>
                                                <div class="mt-3 flex items-center gap-4">
                                                    <button
                                                        type="button"
                                                        class="text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm px-5 py-2.5"
                                                        on:click=move |_| apply_edit(ProfileEvent::EditBio)
                                                    >
                                                        "Edit Bio"
                                                    </button>
                                                    {has_bio
                                                        .then(|| {
                                                            let apply_delete = apply_delete.clone();
                                                            view! {
                                                                <button
                                                                    type="button"
                                                                    class="text-white bg-red-600 hover:bg-red-700 font-medium rounded-lg text-sm px-5 py-2.5"
                                                                    disabled=move || busy.get()
                                                                    on:click=move |_| apply_delete(ProfileEvent::DeleteBio)
                                                                >
                                                                    "Delete Bio"
                                                                </button>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        }
                                        .into_any()
                                    }
                                }}
                                <button
                                    type="button"
                                    class="mt-6 text-white bg-gray-600 hover:bg-gray-700 font-medium rounded-lg text-sm px-5 py-2.5"
                                    on:click={
                                        let apply_logout = apply_logout.clone();
                                        move |_| apply_logout(ProfileEvent::Logout)
                                    }
                                >
                                    "Logout"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                    None => view! {
                        <div>
                            {move || {
                                busy.get().then_some(view! { <Spinner /> })
                            }}
                        </div>
                    }
                    .into_any(),
                }}
                {move || {
                    controller.with(|state| state.message()).map(|message| {
                        let kind = if controller.with(|state| state.profile().is_some()) {
                            AlertKind::Info
                        } else {
                            AlertKind::Error
                        };
                        view! {
                            <div class="mt-4">
                                <Alert kind=kind message=message />
                            </div>
                        }
                    })
                }}
            </div>
        </AppShell>
    }
}
