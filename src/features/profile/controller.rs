//! Controller for the session-gated profile view: exactly one fetch on
//! activation, bio create/update/delete with client-side verb selection,
//! and logout. Transitions return their side effects as data.
//!
//! The write verb is decided once per save from the held profile snapshot:
//! an existing non-empty bio is updated, absence of one is created. If the
//! bio was created concurrently by another session the create can race an
//! existing resource; the service response is trusted either way and the
//! race is not reconciled here.

use crate::app_lib::{AppError, nav};
use crate::features::profile::types::UserProfile;

pub const EMPTY_BIO: &str = "Bio cannot be empty!";
const UNAUTHORIZED: &str = "Unauthorized. Please login.";
const FETCH_FAILED: &str = "Please log in to access profile.";
const BIO_SAVED: &str = "Bio saved successfully!";
const BIO_DELETED: &str = "Bio deleted.";
const BIO_SAVE_FAILED: &str = "Failed to save bio.";
const BIO_DELETE_FAILED: &str = "Failed to delete bio.";

/// HTTP verb for a bio write, decided from the held profile snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BioWriteMethod {
    /// First write: `POST /me/bio`.
    Create,
    /// Idempotent replace: `PUT /me/bio`.
    Update,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingRequest {
    Fetch,
    Save,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileEvent {
    Activated,
    ProfileLoaded(Result<UserProfile, AppError>),
    EditBio,
    BioEdited(String),
    SaveBio,
    BioSaved(Result<UserProfile, AppError>),
    DeleteBio,
    BioDeleted(Result<(), AppError>),
    CancelEdit,
    Logout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileEffect {
    FetchProfile,
    WriteBio { method: BioWriteMethod, text: String },
    RemoveBio,
    ClearSession,
    ScheduleRedirect(nav::Redirect),
}

#[derive(Clone, Debug, Default)]
pub struct ProfileController {
    profile: Option<UserProfile>,
    editing: bool,
    draft_bio: String,
    message: Option<String>,
    pending: Option<PendingRequest>,
    activated: bool,
}

impl ProfileController {
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn editing(&self) -> bool {
        self.editing
    }

    pub fn draft_bio(&self) -> &str {
        &self.draft_bio
    }

    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }

    pub fn busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&mut self, event: ProfileEvent) -> Vec<ProfileEffect> {
        match event {
            ProfileEvent::Activated => self.activated(),
            ProfileEvent::ProfileLoaded(result) => self.profile_loaded(result),
            ProfileEvent::EditBio => self.edit_bio(),
            ProfileEvent::BioEdited(text) => {
                self.draft_bio = text;
                Vec::new()
            }
            ProfileEvent::SaveBio => self.save_bio(),
            ProfileEvent::BioSaved(result) => self.bio_saved(result),
            ProfileEvent::DeleteBio => self.delete_bio(),
            ProfileEvent::BioDeleted(result) => self.bio_deleted(result),
            ProfileEvent::CancelEdit => self.cancel_edit(),
            ProfileEvent::Logout => self.logout(),
        }
    }

    /// Idempotent: the profile is fetched exactly once per activation.
    fn activated(&mut self) -> Vec<ProfileEffect> {
        if self.activated {
            return Vec::new();
        }
        self.activated = true;
        self.pending = Some(PendingRequest::Fetch);
        vec![ProfileEffect::FetchProfile]
    }

    fn profile_loaded(&mut self, result: Result<UserProfile, AppError>) -> Vec<ProfileEffect> {
        if self.pending != Some(PendingRequest::Fetch) {
            return Vec::new();
        }
        self.pending = None;

        match result {
            Ok(profile) => {
                self.draft_bio = profile.bio.clone().unwrap_or_default();
                self.profile = Some(profile);
                self.message = None;
                Vec::new()
            }
            Err(err) => {
                // A previously held profile must not mask the failure.
                self.profile = None;
                let redirect = ProfileEffect::ScheduleRedirect(nav::redirect_for(
                    nav::NavEvent::ProfileUnavailable,
                ));
                if err.is_unauthorized() {
                    self.message = Some(err.display_message(UNAUTHORIZED));
                    vec![ProfileEffect::ClearSession, redirect]
                } else {
                    self.message = Some(err.display_message(FETCH_FAILED));
                    vec![redirect]
                }
            }
        }
    }

    fn edit_bio(&mut self) -> Vec<ProfileEffect> {
        let Some(profile) = &self.profile else {
            return Vec::new();
        };
        self.editing = true;
        self.draft_bio = profile.bio.clone().unwrap_or_default();
        Vec::new()
    }

    fn save_bio(&mut self) -> Vec<ProfileEffect> {
        if self.pending.is_some() {
            return Vec::new();
        }
        let Some(profile) = &self.profile else {
            return Vec::new();
        };

        if self.draft_bio.trim().is_empty() {
            self.message = Some(EMPTY_BIO.to_string());
            return Vec::new();
        }

        let method = if profile.has_bio() {
            BioWriteMethod::Update
        } else {
            BioWriteMethod::Create
        };
        self.pending = Some(PendingRequest::Save);
        vec![ProfileEffect::WriteBio {
            method,
            text: self.draft_bio.clone(),
        }]
    }

    fn bio_saved(&mut self, result: Result<UserProfile, AppError>) -> Vec<ProfileEffect> {
        if self.pending != Some(PendingRequest::Save) {
            return Vec::new();
        }
        self.pending = None;

        match result {
            Ok(profile) => {
                self.draft_bio = profile.bio.clone().unwrap_or_default();
                self.profile = Some(profile);
                self.editing = false;
                self.message = Some(BIO_SAVED.to_string());
            }
            Err(_) => {
                self.message = Some(BIO_SAVE_FAILED.to_string());
            }
        }
        Vec::new()
    }

    fn delete_bio(&mut self) -> Vec<ProfileEffect> {
        if self.pending.is_some() || self.profile.is_none() {
            return Vec::new();
        }
        self.pending = Some(PendingRequest::Delete);
        vec![ProfileEffect::RemoveBio]
    }

    /// The service is trusted to have removed the bio; both the draft and
    /// the held profile's bio are cleared independent of the response body.
    fn bio_deleted(&mut self, result: Result<(), AppError>) -> Vec<ProfileEffect> {
        if self.pending != Some(PendingRequest::Delete) {
            return Vec::new();
        }
        self.pending = None;

        match result {
            Ok(()) => {
                self.draft_bio.clear();
                if let Some(profile) = &mut self.profile {
                    profile.bio = None;
                }
                self.message = Some(BIO_DELETED.to_string());
            }
            Err(_) => {
                self.message = Some(BIO_DELETE_FAILED.to_string());
            }
        }
        Vec::new()
    }

    fn cancel_edit(&mut self) -> Vec<ProfileEffect> {
        self.editing = false;
        self.draft_bio = self
            .profile
            .as_ref()
            .and_then(|profile| profile.bio.clone())
            .unwrap_or_default();
        Vec::new()
    }

    fn logout(&mut self) -> Vec<ProfileEffect> {
        vec![
            ProfileEffect::ClearSession,
            ProfileEffect::ScheduleRedirect(nav::redirect_for(nav::NavEvent::LoggedOut)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BioWriteMethod, EMPTY_BIO, ProfileController, ProfileEffect, ProfileEvent,
    };
    use crate::app_lib::AppError;
    use crate::app_lib::nav::Destination;
    use crate::features::profile::types::UserProfile;

    fn profile_with_bio(bio: Option<&str>) -> UserProfile {
        UserProfile {
            username: "alice".to_string(),
            email: "alice@inbox.im".to_string(),
            bio: bio.map(str::to_string),
        }
    }

    fn loaded_controller(bio: Option<&str>) -> ProfileController {
        let mut controller = ProfileController::default();
        assert_eq!(
            controller.handle(ProfileEvent::Activated),
            vec![ProfileEffect::FetchProfile]
        );
        controller.handle(ProfileEvent::ProfileLoaded(Ok(profile_with_bio(bio))));
        controller
    }

    #[test]
    fn activation_fetches_exactly_once() {
        let mut controller = ProfileController::default();
        assert_eq!(
            controller.handle(ProfileEvent::Activated),
            vec![ProfileEffect::FetchProfile]
        );
        assert!(controller.handle(ProfileEvent::Activated).is_empty());
    }

    #[test]
    fn unauthorized_fetch_clears_session_and_redirects() {
        let mut controller = ProfileController::default();
        controller.handle(ProfileEvent::Activated);

        let effects = controller.handle(ProfileEvent::ProfileLoaded(Err(AppError::Http {
            status: 401,
            body: r#"{"detail":"expired"}"#.to_string(),
        })));

        assert_eq!(controller.message().as_deref(), Some("expired"));
        assert_eq!(effects[0], ProfileEffect::ClearSession);
        match &effects[1] {
            ProfileEffect::ScheduleRedirect(redirect) => {
                assert_eq!(redirect.destination, Destination::Login);
                assert_eq!(redirect.delay_ms, 1_000);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
        assert!(controller.profile().is_none());
    }

    #[test]
    fn unauthorized_without_detail_uses_generic_message() {
        let mut controller = ProfileController::default();
        controller.handle(ProfileEvent::Activated);

        controller.handle(ProfileEvent::ProfileLoaded(Err(AppError::Http {
            status: 401,
            body: String::new(),
        })));

        assert_eq!(
            controller.message().as_deref(),
            Some("Unauthorized. Please login.")
        );
    }

    #[test]
    fn other_fetch_failures_redirect_without_clearing_session() {
        let mut controller = ProfileController::default();
        controller.handle(ProfileEvent::Activated);

        let effects = controller.handle(ProfileEvent::ProfileLoaded(Err(AppError::Network(
            "connection refused".to_string(),
        ))));

        assert_eq!(
            controller.message().as_deref(),
            Some("Please log in to access profile.")
        );
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], ProfileEffect::ScheduleRedirect(_)));
    }

    #[test]
    fn stale_fetch_result_does_not_mask_failure() {
        let mut controller = loaded_controller(Some("old"));

        // No fetch pending, so a late result is dropped.
        let effects = controller.handle(ProfileEvent::ProfileLoaded(Ok(profile_with_bio(None))));

        assert!(effects.is_empty());
        assert_eq!(controller.profile().unwrap().bio.as_deref(), Some("old"));
    }

    #[test]
    fn empty_bio_saves_as_create() {
        let mut controller = loaded_controller(Some(""));
        controller.handle(ProfileEvent::EditBio);
        controller.handle(ProfileEvent::BioEdited("hello".to_string()));

        let effects = controller.handle(ProfileEvent::SaveBio);

        assert_eq!(
            effects,
            vec![ProfileEffect::WriteBio {
                method: BioWriteMethod::Create,
                text: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn existing_bio_saves_as_update() {
        let mut controller = loaded_controller(Some("old"));
        controller.handle(ProfileEvent::EditBio);
        controller.handle(ProfileEvent::BioEdited("new".to_string()));

        let effects = controller.handle(ProfileEvent::SaveBio);

        assert_eq!(
            effects,
            vec![ProfileEffect::WriteBio {
                method: BioWriteMethod::Update,
                text: "new".to_string(),
            }]
        );
    }

    #[test]
    fn whitespace_draft_blocks_save_without_network() {
        let mut controller = loaded_controller(Some("old"));
        controller.handle(ProfileEvent::EditBio);
        controller.handle(ProfileEvent::BioEdited("   ".to_string()));

        let effects = controller.handle(ProfileEvent::SaveBio);

        assert!(effects.is_empty());
        assert_eq!(controller.message().as_deref(), Some(EMPTY_BIO));
    }

    #[test]
    fn save_while_pending_is_ignored() {
        let mut controller = loaded_controller(None);
        controller.handle(ProfileEvent::EditBio);
        controller.handle(ProfileEvent::BioEdited("hello".to_string()));
        assert_eq!(controller.handle(ProfileEvent::SaveBio).len(), 1);

        assert!(controller.handle(ProfileEvent::SaveBio).is_empty());
    }

    #[test]
    fn successful_save_replaces_profile_and_exits_edit_mode() {
        let mut controller = loaded_controller(None);
        controller.handle(ProfileEvent::EditBio);
        controller.handle(ProfileEvent::BioEdited("hello".to_string()));
        controller.handle(ProfileEvent::SaveBio);

        controller.handle(ProfileEvent::BioSaved(Ok(profile_with_bio(Some("hello")))));

        assert!(!controller.editing());
        assert_eq!(
            controller.profile().unwrap().bio.as_deref(),
            Some("hello")
        );
        assert_eq!(controller.message().as_deref(), Some("Bio saved successfully!"));
    }

    #[test]
    fn delete_clears_draft_and_held_bio_regardless_of_body() {
        let mut controller = loaded_controller(Some("old"));
        assert_eq!(
            controller.handle(ProfileEvent::DeleteBio),
            vec![ProfileEffect::RemoveBio]
        );

        controller.handle(ProfileEvent::BioDeleted(Ok(())));

        assert_eq!(controller.draft_bio(), "");
        assert_eq!(controller.profile().unwrap().bio, None);
        assert!(!controller.profile().unwrap().has_bio());
        assert_eq!(controller.message().as_deref(), Some("Bio deleted."));
    }

    #[test]
    fn cancel_restores_draft_from_held_profile() {
        let mut controller = loaded_controller(Some("old"));
        controller.handle(ProfileEvent::EditBio);
        controller.handle(ProfileEvent::BioEdited("scratch".to_string()));

        let effects = controller.handle(ProfileEvent::CancelEdit);

        assert!(effects.is_empty());
        assert!(!controller.editing());
        assert_eq!(controller.draft_bio(), "old");
    }

    #[test]
    fn logout_clears_session_and_redirects_immediately() {
        let mut controller = loaded_controller(Some("old"));

        let effects = controller.handle(ProfileEvent::Logout);

        assert_eq!(effects[0], ProfileEffect::ClearSession);
        match &effects[1] {
            ProfileEffect::ScheduleRedirect(redirect) => {
                assert_eq!(redirect.destination, Destination::Login);
                assert_eq!(redirect.delay_ms, 0);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
    }
}
