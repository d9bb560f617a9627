//! Client wrappers for the authenticated profile endpoints.

use crate::app_lib::{AppError, api};
use crate::features::profile::controller::BioWriteMethod;
use crate::features::profile::types::{BioPayload, UserProfile};
use crate::features::session::SessionStore;

/// Fetches the authenticated user's profile.
pub async fn fetch_profile(store: SessionStore) -> Result<UserProfile, AppError> {
    api::get_json(store, "/me").await
}

/// Creates or replaces the bio; both verbs target the same resource and
/// answer with the updated profile.
pub async fn write_bio(
    store: SessionStore,
    method: BioWriteMethod,
    text: &str,
) -> Result<UserProfile, AppError> {
    let payload = BioPayload {
        bio: text.to_string(),
    };
    match method {
        BioWriteMethod::Create => api::post_json(store, "/me/bio", &payload).await,
        BioWriteMethod::Update => api::put_json(store, "/me/bio", &payload).await,
    }
}

/// Deletes the bio sub-resource.
pub async fn remove_bio(store: SessionStore) -> Result<(), AppError> {
    api::delete(store, "/me/bio").await
}
