//! Two-phase signup state machine: registration request, then OTP
//! verification. Transitions are pure — `handle` mutates the state and
//! returns the side effects to perform as data, so routes only dispatch
//! network calls and redirects.
//!
//! Invariants: a verification request is never emitted before a successful
//! registration response has been observed; a submit while the same phase
//! is pending is ignored; completions that arrive after the phase changed
//! (edit-info, duplicate responses) are dropped.

use crate::app_lib::{AppError, nav};
use crate::features::auth::types::{SignupDraft, VerificationAttempt};

pub const MISSING_FIELDS: &str = "Please fill all fields.";
pub const MISSING_OTP: &str = "Please enter the OTP sent to your email.";
const SIGNUP_FAILED: &str = "Signup failed.";
const VERIFICATION_FAILED: &str = "OTP verification failed.";
const OTP_SENT: &str = "OTP sent to your email. Enter it below to finish signing up.";
const ACCOUNT_VERIFIED: &str = "Account verified! Redirecting to login...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Registration,
    Verification,
}

/// Status overlay for the current phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PhaseStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    SubmitRegistration,
    RegistrationCompleted(Result<Option<String>, AppError>),
    SubmitVerification,
    VerificationCompleted(Result<Option<String>, AppError>),
    EditInfo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEffect {
    SendRegistration(SignupDraft),
    SendVerification(VerificationAttempt),
    ScheduleRedirect(nav::Redirect),
}

#[derive(Clone, Debug, Default)]
pub struct SignupFlow {
    pub draft: SignupDraft,
    pub otp: String,
    phase: SignupPhase,
    status: PhaseStatus,
    notice: Option<String>,
}

impl SignupFlow {
    pub fn phase(&self) -> SignupPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.status == PhaseStatus::Pending
    }

    pub fn succeeded(&self) -> bool {
        self.status == PhaseStatus::Succeeded
    }

    /// Error text for the current phase, if the last submit failed.
    pub fn error_message(&self) -> Option<String> {
        match &self.status {
            PhaseStatus::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Informational text: the "OTP sent" prompt or the terminal success
    /// message, server-supplied when available.
    pub fn notice(&self) -> Option<String> {
        self.notice.clone()
    }

    pub fn handle(&mut self, event: FlowEvent) -> Vec<FlowEffect> {
        match event {
            FlowEvent::SubmitRegistration => self.submit_registration(),
            FlowEvent::RegistrationCompleted(result) => self.registration_completed(result),
            FlowEvent::SubmitVerification => self.submit_verification(),
            FlowEvent::VerificationCompleted(result) => self.verification_completed(result),
            FlowEvent::EditInfo => self.edit_info(),
        }
    }

    fn submit_registration(&mut self) -> Vec<FlowEffect> {
        if self.phase != SignupPhase::Registration || self.status == PhaseStatus::Pending {
            return Vec::new();
        }

        if self.draft.username.trim().is_empty()
            || self.draft.email.trim().is_empty()
            || self.draft.password.trim().is_empty()
        {
            self.status = PhaseStatus::Failed(MISSING_FIELDS.to_string());
            return Vec::new();
        }

        self.status = PhaseStatus::Pending;
        self.notice = None;
        vec![FlowEffect::SendRegistration(self.draft.clone())]
    }

    fn registration_completed(
        &mut self,
        result: Result<Option<String>, AppError>,
    ) -> Vec<FlowEffect> {
        if self.phase != SignupPhase::Registration || self.status != PhaseStatus::Pending {
            return Vec::new();
        }

        match result {
            Ok(message) => {
                self.phase = SignupPhase::Verification;
                self.status = PhaseStatus::Idle;
                self.otp.clear();
                self.notice = Some(message.unwrap_or_else(|| OTP_SENT.to_string()));
            }
            Err(err) => {
                self.status = PhaseStatus::Failed(err.display_message(SIGNUP_FAILED));
            }
        }
        Vec::new()
    }

    fn submit_verification(&mut self) -> Vec<FlowEffect> {
        if self.phase != SignupPhase::Verification
            || matches!(self.status, PhaseStatus::Pending | PhaseStatus::Succeeded)
        {
            return Vec::new();
        }

        if self.otp.trim().is_empty() {
            self.status = PhaseStatus::Failed(MISSING_OTP.to_string());
            return Vec::new();
        }

        self.status = PhaseStatus::Pending;
        self.notice = None;
        vec![FlowEffect::SendVerification(VerificationAttempt {
            email: self.draft.email.clone(),
            otp: self.otp.clone(),
        })]
    }

    fn verification_completed(
        &mut self,
        result: Result<Option<String>, AppError>,
    ) -> Vec<FlowEffect> {
        if self.phase != SignupPhase::Verification || self.status != PhaseStatus::Pending {
            return Vec::new();
        }

        match result {
            Ok(message) => {
                self.status = PhaseStatus::Succeeded;
                self.notice = Some(message.unwrap_or_else(|| ACCOUNT_VERIFIED.to_string()));
                vec![FlowEffect::ScheduleRedirect(nav::redirect_for(
                    nav::NavEvent::SignupVerified,
                ))]
            }
            Err(err) => {
                self.status = PhaseStatus::Failed(err.display_message(VERIFICATION_FAILED));
                Vec::new()
            }
        }
    }

    /// Returns to the registration form, discarding the OTP but keeping the
    /// draft. An in-flight verification result is dropped by the phase
    /// guard in `verification_completed`.
    fn edit_info(&mut self) -> Vec<FlowEffect> {
        if self.phase != SignupPhase::Verification || self.status == PhaseStatus::Succeeded {
            return Vec::new();
        }

        self.phase = SignupPhase::Registration;
        self.status = PhaseStatus::Idle;
        self.otp.clear();
        self.notice = None;
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowEffect, FlowEvent, MISSING_FIELDS, MISSING_OTP, SignupFlow, SignupPhase};
    use crate::app_lib::AppError;
    use crate::app_lib::nav::Destination;

    fn filled_flow() -> SignupFlow {
        let mut flow = SignupFlow::default();
        flow.draft.username = "alice".to_string();
        flow.draft.email = "alice@inbox.im".to_string();
        flow.draft.password = "secret".to_string();
        flow
    }

    fn flow_at_verification() -> SignupFlow {
        let mut flow = filled_flow();
        assert_eq!(flow.handle(FlowEvent::SubmitRegistration).len(), 1);
        flow.handle(FlowEvent::RegistrationCompleted(Ok(None)));
        assert_eq!(flow.phase(), SignupPhase::Verification);
        flow
    }

    #[test]
    fn empty_field_blocks_registration_without_network() {
        let mut flow = filled_flow();
        flow.draft.email.clear();

        let effects = flow.handle(FlowEvent::SubmitRegistration);

        assert!(effects.is_empty());
        assert_eq!(flow.error_message().as_deref(), Some(MISSING_FIELDS));
        assert_eq!(flow.phase(), SignupPhase::Registration);
    }

    #[test]
    fn valid_draft_emits_exactly_one_registration_request() {
        let mut flow = filled_flow();

        let effects = flow.handle(FlowEvent::SubmitRegistration);

        assert_eq!(effects.len(), 1);
        match &effects[0] {
            FlowEffect::SendRegistration(draft) => assert_eq!(draft.username, "alice"),
            other => panic!("unexpected effect: {other:?}"),
        }
        assert!(flow.is_pending());
    }

    #[test]
    fn resubmit_while_pending_is_ignored() {
        let mut flow = filled_flow();
        assert_eq!(flow.handle(FlowEvent::SubmitRegistration).len(), 1);

        let effects = flow.handle(FlowEvent::SubmitRegistration);

        assert!(effects.is_empty());
    }

    #[test]
    fn registration_success_reaches_verification_with_draft_email() {
        let mut flow = filled_flow();
        flow.handle(FlowEvent::SubmitRegistration);
        flow.handle(FlowEvent::RegistrationCompleted(Ok(Some(
            "OTP sent to your email. Please verify to complete signup.".to_string(),
        ))));

        assert_eq!(flow.phase(), SignupPhase::Verification);
        assert!(flow.notice().is_some());

        flow.otp = "123456".to_string();
        let effects = flow.handle(FlowEvent::SubmitVerification);
        match &effects[0] {
            FlowEffect::SendVerification(attempt) => {
                assert_eq!(attempt.email, "alice@inbox.im");
                assert_eq!(attempt.otp, "123456");
            }
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn registration_failure_surfaces_server_detail() {
        let mut flow = filled_flow();
        flow.handle(FlowEvent::SubmitRegistration);
        flow.handle(FlowEvent::RegistrationCompleted(Err(AppError::Http {
            status: 400,
            body: r#"{"detail":"User already exists with this email or username."}"#.to_string(),
        })));

        assert_eq!(flow.phase(), SignupPhase::Registration);
        assert_eq!(
            flow.error_message().as_deref(),
            Some("User already exists with this email or username.")
        );
    }

    #[test]
    fn registration_failure_without_detail_uses_generic_message() {
        let mut flow = filled_flow();
        flow.handle(FlowEvent::SubmitRegistration);
        flow.handle(FlowEvent::RegistrationCompleted(Err(AppError::Network(
            "connection refused".to_string(),
        ))));

        assert_eq!(flow.error_message().as_deref(), Some("Signup failed."));
    }

    #[test]
    fn blank_otp_blocks_verification_without_network() {
        let mut flow = flow_at_verification();
        flow.otp = "   ".to_string();

        let effects = flow.handle(FlowEvent::SubmitVerification);

        assert!(effects.is_empty());
        assert_eq!(flow.error_message().as_deref(), Some(MISSING_OTP));
    }

    #[test]
    fn verification_before_registration_success_is_impossible() {
        let mut flow = filled_flow();
        flow.otp = "123456".to_string();

        // Still in the registration phase, so nothing may be sent.
        assert!(flow.handle(FlowEvent::SubmitVerification).is_empty());

        flow.handle(FlowEvent::SubmitRegistration);
        assert!(flow.handle(FlowEvent::SubmitVerification).is_empty());
    }

    #[test]
    fn verification_success_schedules_login_redirect() {
        let mut flow = flow_at_verification();
        flow.otp = "123456".to_string();
        flow.handle(FlowEvent::SubmitVerification);

        let effects = flow.handle(FlowEvent::VerificationCompleted(Ok(None)));

        assert!(flow.succeeded());
        match &effects[0] {
            FlowEffect::ScheduleRedirect(redirect) => {
                assert_eq!(redirect.destination, Destination::Login);
                assert_eq!(redirect.delay_ms, 1_400);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn verification_failure_stays_in_verification_phase() {
        let mut flow = flow_at_verification();
        flow.otp = "000000".to_string();
        flow.handle(FlowEvent::SubmitVerification);
        flow.handle(FlowEvent::VerificationCompleted(Err(AppError::Http {
            status: 400,
            body: r#"{"detail":"Invalid OTP."}"#.to_string(),
        })));

        assert_eq!(flow.phase(), SignupPhase::Verification);
        assert_eq!(flow.error_message().as_deref(), Some("Invalid OTP."));
    }

    #[test]
    fn edit_info_keeps_draft_and_clears_otp() {
        let mut flow = flow_at_verification();
        flow.otp = "123456".to_string();

        flow.handle(FlowEvent::EditInfo);

        assert_eq!(flow.phase(), SignupPhase::Registration);
        assert!(flow.otp.is_empty());
        assert_eq!(flow.draft.username, "alice");
        assert_eq!(flow.draft.email, "alice@inbox.im");
        assert_eq!(flow.draft.password, "secret");
    }

    #[test]
    fn completion_after_edit_info_is_dropped() {
        let mut flow = flow_at_verification();
        flow.otp = "123456".to_string();
        flow.handle(FlowEvent::SubmitVerification);
        flow.handle(FlowEvent::EditInfo);

        let effects = flow.handle(FlowEvent::VerificationCompleted(Ok(None)));

        assert!(effects.is_empty());
        assert_eq!(flow.phase(), SignupPhase::Registration);
        assert!(!flow.succeeded());
    }

    #[test]
    fn duplicate_registration_completion_is_dropped() {
        let mut flow = filled_flow();
        flow.handle(FlowEvent::SubmitRegistration);
        flow.handle(FlowEvent::RegistrationCompleted(Ok(None)));

        let effects = flow.handle(FlowEvent::RegistrationCompleted(Ok(None)));

        assert!(effects.is_empty());
        assert_eq!(flow.phase(), SignupPhase::Verification);
    }
}
