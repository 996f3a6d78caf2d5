//! Consultation request flow: dialog, form values, validation and submit state
//!
//! `LeadCapture` owns everything the dialog needs so the view only renders it
//! and forwards events. Network I/O stays outside: `begin_submit` hands out a
//! record to send and `finish_submit` takes the result back.

use chrono::{DateTime, Utc};

use super::modal::{CloseReason, ModalController};
use super::notification::Notification;
use super::submission::{SubmissionError, SubmissionRecord};
use super::validation::{ConsultationInput, FormField, ValidationResult, validate_consultation};

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Request Consultation";

/// Submit button label while a request is in flight
pub const SUBMITTING_LABEL: &str = "Processing...";

pub const SUCCESS_MESSAGE: &str =
    "Your consultation request has been received! We will get back to you within 24 hours.";

pub const FAILURE_MESSAGE: &str =
    "Something went wrong while sending your request. Please try again in a moment.";

/// Why a submit attempt did not produce a request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// Validation failed; errors are now set on the form
    Invalid,
    /// A request from this form is still pending
    InFlight,
}

/// Whether the submit control is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Default)]
pub struct LeadCapture {
    modal: ModalController,
    form: ConsultationInput,
    errors: ValidationResult,
    submit: SubmitState,
}

impl LeadCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn form(&self) -> &ConsultationInput {
        &self.form
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn submit_disabled(&self) -> bool {
        self.submit == SubmitState::InFlight
    }

    pub fn submit_label(&self) -> &'static str {
        match self.submit {
            SubmitState::Idle => SUBMIT_LABEL,
            SubmitState::InFlight => SUBMITTING_LABEL,
        }
    }

    /// Open the dialog; `false` if it was already open
    pub fn open(&mut self) -> bool {
        self.modal.open()
    }

    /// Close the dialog, blank every field and drop all errors.
    ///
    /// Returns `false` if it was not open. Escape is ignored while closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if reason == CloseReason::Escape && !self.modal.handles_escape() {
            return false;
        }
        if !self.modal.close() {
            return false;
        }
        self.reset_form();
        true
    }

    pub fn reset_form(&mut self) {
        self.form = ConsultationInput::default();
        self.errors.clear();
    }

    pub fn set_value(&mut self, field: FormField, value: String) {
        if let Some(slot) = self.form.value_mut(field) {
            *slot = value;
        }
    }

    pub fn set_service(&mut self, service: &str, selected: bool) {
        self.form.set_service(service, selected);
    }

    pub fn set_privacy(&mut self, accepted: bool) {
        self.form.privacy = accepted;
    }

    /// Re-run validation over the whole form, replacing previous errors
    pub fn validate(&mut self) -> bool {
        self.errors = validate_consultation(&self.form);
        self.errors.is_valid()
    }

    /// Validate and, if the form is clean and idle, mark the request in flight
    pub fn begin_submit(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<SubmissionRecord, SubmitBlocked> {
        if self.submit == SubmitState::InFlight {
            return Err(SubmitBlocked::InFlight);
        }
        if !self.validate() {
            return Err(SubmitBlocked::Invalid);
        }
        self.submit = SubmitState::InFlight;
        Ok(SubmissionRecord::from_input(&self.form, now))
    }

    /// Apply the endpoint's answer and return the toast to show.
    ///
    /// On success the dialog closes and the form resets; on failure the dialog
    /// stays open with the values intact so the user can retry.
    pub fn finish_submit(&mut self, result: &Result<(), SubmissionError>) -> Notification {
        self.submit = SubmitState::Idle;
        match result {
            Ok(()) => {
                self.close(CloseReason::Submitted);
                self.reset_form();
                Notification::success(SUCCESS_MESSAGE)
            }
            Err(_) => Notification::error(FAILURE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notification::NotificationKind;
    use crate::core::validation::FieldError;

    fn fill(lead: &mut LeadCapture) {
        lead.set_value(FormField::Name, "Kim Minsu".to_string());
        lead.set_value(FormField::Email, "test@example.com".to_string());
        lead.set_value(FormField::Phone, "+82 10 1234 5678".to_string());
        lead.set_value(FormField::Subject, "Inspection".to_string());
        lead.set_value(FormField::Message, "Please call me".to_string());
        lead.set_privacy(true);
    }

    #[test]
    fn test_close_resets_form_and_errors() {
        let mut lead = LeadCapture::new();
        lead.open();
        lead.set_value(FormField::Name, "Kim".to_string());
        lead.validate();
        assert!(!lead.errors().is_valid());

        assert!(lead.close(CloseReason::CloseButton));
        assert_eq!(lead.form(), &ConsultationInput::default());
        assert!(lead.errors().is_valid());
    }

    #[test]
    fn test_escape_ignored_when_closed() {
        let mut lead = LeadCapture::new();
        lead.set_value(FormField::Name, "kept".to_string());
        assert!(!lead.close(CloseReason::Escape));
        assert_eq!(lead.form().name, "kept");
    }

    #[test]
    fn test_invalid_submit_sets_errors() {
        let mut lead = LeadCapture::new();
        lead.open();
        let blocked = lead.begin_submit(Utc::now());
        assert_eq!(blocked, Err(SubmitBlocked::Invalid));
        assert_eq!(lead.submit_state(), SubmitState::Idle);
        assert_eq!(
            lead.errors().error_for(FormField::Privacy),
            Some(FieldError::ConsentRequired)
        );
    }

    #[test]
    fn test_in_flight_blocks_second_submit() {
        let mut lead = LeadCapture::new();
        lead.open();
        fill(&mut lead);

        assert!(lead.begin_submit(Utc::now()).is_ok());
        assert!(lead.submit_disabled());
        assert_eq!(lead.submit_label(), SUBMITTING_LABEL);
        assert_eq!(
            lead.begin_submit(Utc::now()),
            Err(SubmitBlocked::InFlight)
        );
    }

    #[test]
    fn test_success_closes_and_resets() {
        let mut lead = LeadCapture::new();
        lead.open();
        fill(&mut lead);
        lead.begin_submit(Utc::now()).unwrap();

        let toast = lead.finish_submit(&Ok(()));
        assert_eq!(toast.kind, NotificationKind::Success);
        assert!(!lead.is_open());
        assert_eq!(lead.form(), &ConsultationInput::default());
        assert!(!lead.submit_disabled());
        assert_eq!(lead.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_failure_keeps_dialog_open() {
        let mut lead = LeadCapture::new();
        lead.open();
        fill(&mut lead);
        lead.begin_submit(Utc::now()).unwrap();

        let toast = lead.finish_submit(&Err(SubmissionError::Rejected(500)));
        assert_eq!(toast.kind, NotificationKind::Error);
        assert!(lead.is_open());
        assert_eq!(lead.form().name, "Kim Minsu");
        assert!(!lead.submit_disabled());
        assert_eq!(lead.submit_label(), SUBMIT_LABEL);

        // A retry produces a fresh, unrelated request
        assert!(lead.begin_submit(Utc::now()).is_ok());
    }
}
