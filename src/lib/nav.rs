//! Navigation policy: a pure mapping from terminal flow events to a
//! destination and delay. Delays exist so a success or error banner renders
//! before the view changes. A scheduled redirect is not cancellable and
//! still fires if the user navigates elsewhere first.

/// Delay after a successful login before moving to the profile view.
pub const LOGIN_SUCCESS_DELAY_MS: u32 = 800;
/// Delay after OTP verification before moving to the login view.
pub const SIGNUP_VERIFIED_DELAY_MS: u32 = 1_400;
/// Delay after a failed profile fetch before moving to the login view.
pub const PROFILE_UNAVAILABLE_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Profile,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Profile => "/profile",
        }
    }
}

/// Terminal events that trigger a view change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    LoginSucceeded,
    SignupVerified,
    ProfileUnavailable,
    LoggedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub destination: Destination,
    pub delay_ms: u32,
}

pub fn redirect_for(event: NavEvent) -> Redirect {
    match event {
        NavEvent::LoginSucceeded => Redirect {
            destination: Destination::Profile,
            delay_ms: LOGIN_SUCCESS_DELAY_MS,
        },
        NavEvent::SignupVerified => Redirect {
            destination: Destination::Login,
            delay_ms: SIGNUP_VERIFIED_DELAY_MS,
        },
        NavEvent::ProfileUnavailable => Redirect {
            destination: Destination::Login,
            delay_ms: PROFILE_UNAVAILABLE_DELAY_MS,
        },
        NavEvent::LoggedOut => Redirect {
            destination: Destination::Login,
            delay_ms: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Destination, NavEvent, redirect_for};

    #[test]
    fn login_success_goes_to_profile_after_short_delay() {
        let redirect = redirect_for(NavEvent::LoginSucceeded);
        assert_eq!(redirect.destination, Destination::Profile);
        assert_eq!(redirect.delay_ms, 800);
    }

    #[test]
    fn signup_verification_goes_to_login() {
        let redirect = redirect_for(NavEvent::SignupVerified);
        assert_eq!(redirect.destination, Destination::Login);
        assert_eq!(redirect.delay_ms, 1_400);
    }

    #[test]
    fn profile_failure_goes_to_login() {
        let redirect = redirect_for(NavEvent::ProfileUnavailable);
        assert_eq!(redirect.destination, Destination::Login);
        assert_eq!(redirect.delay_ms, 1_000);
    }

    #[test]
    fn logout_is_immediate() {
        let redirect = redirect_for(NavEvent::LoggedOut);
        assert_eq!(redirect.destination, Destination::Login);
        assert_eq!(redirect.delay_ms, 0);
    }

    #[test]
    fn destinations_map_to_router_paths() {
        assert_eq!(Destination::Login.path(), "/login");
        assert_eq!(Destination::Profile.path(), "/profile");
    }
}
