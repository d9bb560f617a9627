//! Types for the profile endpoints.

use serde::{Deserialize, Serialize};

/// Profile returned by `GET /me` and by bio mutations. Replaced wholesale
/// on every successful fetch or mutation response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserProfile {
    /// Whether a bio currently exists; decides create vs. update on save.
    pub fn has_bio(&self) -> bool {
        self.bio.as_deref().is_some_and(|bio| !bio.is_empty())
    }
}

/// Body for `POST`/`PUT /me/bio`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BioPayload {
    pub bio: String,
}
