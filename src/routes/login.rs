use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::login::{self, LoginForm, LoginOutcome};
use crate::features::session::SessionStore;
use crate::routes::perform_redirect;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = SessionStore::default();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |form: &LoginForm| {
        let form = form.clone();
        async move { client::login(store, &form.username, &form.password).await }
    });

    let navigate_for_effect = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match login::resolve_login(store, result) {
                LoginOutcome::Success { redirect } => {
                    set_success.set(Some(login::LOGIN_SUCCESSFUL.to_string()));
                    perform_redirect(navigate_for_effect.clone(), redirect);
                }
                LoginOutcome::Failure { message } => set_error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(None);

        if login_action.pending().get_untracked() {
            return;
        }

        let form = LoginForm {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(err) = form.validate() {
            set_error.set(Some(err.to_string()));
            return;
        }

        login_action.dispatch(form);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-5 text-2xl font-semibold text-gray-900">"Login"</h1>
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
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
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
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Login"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
