mod login;
mod not_found;
mod profile;
mod signup;

pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use signup::SignUpPage;

use crate::app_lib::nav;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::{NavigateOptions, path};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=SignUpPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

/// Executes a navigation policy decision. Zero-delay redirects fire
/// immediately; delayed ones let the current banner render first. A
/// scheduled redirect is not cancelled if the user navigates away on their
/// own in the meantime.
pub(crate) fn perform_redirect(
    navigate: impl Fn(&str, NavigateOptions) + 'static,
    redirect: nav::Redirect,
) {
    if redirect.delay_ms == 0 {
        navigate(redirect.destination.path(), NavigateOptions::default());
        return;
    }

    Timeout::new(redirect.delay_ms, move || {
        navigate(redirect.destination.path(), NavigateOptions::default());
    })
    .forget();
}
