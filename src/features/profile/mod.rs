//! Authenticated profile view and the bio sub-resource. The controller is a
//! pure state machine so fetch/save/delete semantics can be tested without
//! a browser; the API client is the only wasm-specific piece.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod controller;
pub(crate) mod types;
