//! Signup, OTP verification, and login flows. State transitions live in
//! pure modules (`flow`, `login`) so they can be tested without a rendering
//! surface; only the API client is browser-specific. Payloads here carry
//! passwords and tokens and must never be logged.
//!
//! Flow Overview: Signup POSTs the draft to `/signup-request`, then the
//! user-supplied OTP (with the draft's email) to `/signup-verify`. Login is
//! form-encoded and yields a bearer token that is persisted in the session
//! store.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
pub(crate) mod login;
pub(crate) mod types;
