//! Signup route driving the two-phase registration flow. The state machine
//! in `features::auth::flow` owns all transitions; this component binds the
//! forms, dispatches the returned effects, and renders phase status.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::flow::{FlowEffect, FlowEvent, SignupFlow, SignupPhase};
use crate::features::auth::types::{SignupDraft, VerificationAttempt};
use crate::features::session::SessionStore;
use crate::routes::perform_redirect;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let store = SessionStore::default();
    let navigate = use_navigate();
    let flow = RwSignal::new(SignupFlow::default());

    let register_action = Action::new_local(move |draft: &SignupDraft| {
        let draft = draft.clone();
        async move { client::signup_request(store, &draft).await }
    });
    let verify_action = Action::new_local(move |attempt: &VerificationAttempt| {
        let attempt = attempt.clone();
        async move { client::signup_verify(store, &attempt).await }
    });

    let apply = move |event: FlowEvent| {
        let effects = flow
            .try_update(|state| state.handle(event))
            .unwrap_or_default();
        for effect in effects {
            match effect {
                FlowEffect::SendRegistration(draft) => {
                    register_action.dispatch(draft);
                }
                FlowEffect::SendVerification(attempt) => {
                    verify_action.dispatch(attempt);
                }
                FlowEffect::ScheduleRedirect(redirect) => {
                    perform_redirect(navigate.clone(), redirect);
                }
            }
        }
    };

    let apply_registered = apply.clone();
    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            apply_registered(FlowEvent::RegistrationCompleted(result));
        }
    });

    let apply_verified = apply.clone();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            apply_verified(FlowEvent::VerificationCompleted(result));
        }
    });

    let apply_register_submit = apply.clone();
    let on_register_submit = move |event: SubmitEvent| {
        event.prevent_default();
        apply_register_submit(FlowEvent::SubmitRegistration);
    };

    let apply_verify_submit = apply.clone();
    let on_verify_submit = move |event: SubmitEvent| {
        event.prevent_default();
        apply_verify_submit(FlowEvent::SubmitVerification);
    };

    let apply_edit_info = apply.clone();
    let on_edit_info = move |_| {
        apply_edit_info(FlowEvent::EditInfo);
    };

    let pending = Signal::derive(move || flow.with(|state| state.is_pending()));

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="mb-5 text-2xl font-semibold text-gray-900">"Sign Up"</h1>
                {move || match flow.with(|state| state.phase()) {
                    SignupPhase::Registration => view! {
                        <form on:submit=on_register_submit.clone()>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900"
                                    for="username"
                                >
                                    "Username"
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                                    autocomplete="username"
                                    placeholder="Username"
                                    prop:value=move || flow.with(|state| state.draft.username.clone())
                                    on:input=move |event| {
                                        flow.update(|state| state.draft.username = event_target_value(&event));
                                    }
                                />
                            </div>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900"
                                    for="email"
                                >
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                                    autocomplete="email"
                                    placeholder="name@inbox.im"
                                    prop:value=move || flow.with(|state| state.draft.email.clone())
                                    on:input=move |event| {
                                        flow.update(|state| state.draft.email = event_target_value(&event));
                                    }
                                />
                            </div>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900"
                                    for="password"
                                >
                                    "Password"
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                                    autocomplete="new-password"
                                    prop:value=move || flow.with(|state| state.draft.password.clone())
                                    on:input=move |event| {
                                        flow.update(|state| state.draft.password = event_target_value(&event));
                                    }
                                />
                            </div>
                            <Button button_type="submit" disabled=pending>
                                "Sign Up"
                            </Button>
                        </form>
                    }
                    .into_any(),
                    SignupPhase::Verification => view! {
                        <form on:submit=on_verify_submit.clone()>
                            <p class="mb-5 text-sm text-gray-600">
                                "Verifying " <span class="font-medium">
                                    {move || flow.with(|state| state.draft.email.clone())}
                                </span>
                            </p>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900"
                                    for="otp"
                                >
                                    "One-time password"
                                </label>
                                <input
                                    id="otp"
                                    type="text"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                                    autocomplete="one-time-code"
                                    inputmode="numeric"
                                    placeholder="6-digit code"
                                    prop:value=move || flow.with(|state| state.otp.clone())
                                    on:input=move |event| {
                                        flow.update(|state| state.otp = event_target_value(&event));
                                    }
                                />
                            </div>
                            <div class="flex items-center gap-4">
                                <Button button_type="submit" disabled=pending>
                                    "Verify"
                                </Button>
                                <button
                                    type="button"
                                    class="text-sm font-medium text-blue-700 hover:underline"
                                    on:click=on_edit_info.clone()
                                >
                                    "Edit info"
                                </button>
                            </div>
                        </form>
                    }
                    .into_any(),
                }}
                {move || {
                    pending
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    flow.with(|state| state.notice()).map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Success message=message />
                            </div>
                        }
                    })
                }}
                {move || {
                    flow.with(|state| state.error_message()).map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
                }}
            </div>
        </AppShell>
    }
}
