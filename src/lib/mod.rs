//! Shared frontend utilities for API access, configuration, errors, and the
//! navigation policy.
//!
//! ## Core Account Flows
//!
//! ### Signup & OTP Verification
//!
//! 1. **Request:** The client POSTs the signup draft to `/signup-request`;
//!    the service emails a one-time password to the given address.
//! 2. **Verify:** The client POSTs `{email, otp}` to `/signup-verify` to
//!    create the account; the email is carried over from the draft.
//! 3. On success the user is redirected to the login page after a short
//!    delay so the confirmation message stays visible.
//!
//! ### Login & Session
//!
//! `POST /login` is form-encoded and answers with a bearer token, which is
//! persisted in origin-scoped storage (see `features::session`). Every
//! subsequent request attaches `Authorization: Bearer <token>` when a token
//! is held; an unauthorized response invalidates the stored token.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging
//! token material.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod nav;

pub(crate) use errors::AppError;
