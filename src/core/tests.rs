#[cfg(test)]
mod tests {
    use crate::core::submission::submit;
    use crate::core::{
        FieldError, FormField, FormTransport, LeadCapture, NotificationKind, NotificationQueue,
        SubmissionError, SubmissionPayload, SubmissionSettings, SubmitBlocked,
    };
    use chrono::Utc;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct CountingTransport {
        status: u16,
        calls: Cell<usize>,
    }

    impl CountingTransport {
        fn new(status: u16) -> Self {
            Self {
                status,
                calls: Cell::new(0),
            }
        }
    }

    impl FormTransport for CountingTransport {
        async fn post_json(
            &self,
            _endpoint: &str,
            _payload: &SubmissionPayload,
        ) -> Result<u16, SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.status)
        }
    }

    fn filled_lead() -> LeadCapture {
        let mut lead = LeadCapture::new();
        lead.open();
        lead.set_value(FormField::Name, "Lee Jiwoo".to_string());
        lead.set_value(FormField::Company, "Daehan Parts".to_string());
        lead.set_value(FormField::Email, "test@example.com".to_string());
        lead.set_value(FormField::Phone, "(02)123-4567".to_string());
        lead.set_value(FormField::Subject, "Weld inspection".to_string());
        lead.set_value(FormField::Message, "Two lines, 3 shifts".to_string());
        lead.set_service("vision", true);
        lead.set_privacy(true);
        lead
    }

    /// Validate, send and apply the answer, returning the toast shown
    fn submit_with(
        lead: &mut LeadCapture,
        toasts: &mut NotificationQueue,
        transport: &CountingTransport,
    ) -> Result<(), SubmitBlocked> {
        let record = lead.begin_submit(Utc::now())?;
        let result = block_on(submit(transport, &SubmissionSettings::default(), &record));
        toasts.push(lead.finish_submit(&result));
        Ok(())
    }

    #[test]
    fn test_successful_submission_flow() {
        let mut lead = filled_lead();
        let mut toasts = NotificationQueue::new();

        let transport = CountingTransport::new(200);
        assert!(submit_with(&mut lead, &mut toasts, &transport).is_ok());

        assert_eq!(transport.calls.get(), 1);
        assert!(!lead.is_open());
        assert!(lead.form().name.is_empty());
        assert!(lead.form().services.is_empty());
        assert!(!lead.form().privacy);
        assert_eq!(
            toasts.latest().map(|t| t.notification.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn test_failed_submission_flow() {
        let mut lead = filled_lead();
        let mut toasts = NotificationQueue::new();

        let transport = CountingTransport::new(503);
        assert!(submit_with(&mut lead, &mut toasts, &transport).is_ok());

        assert!(lead.is_open());
        assert!(!lead.submit_disabled());
        assert_eq!(lead.form().subject, "Weld inspection");
        assert_eq!(
            toasts.latest().map(|t| t.notification.kind),
            Some(NotificationKind::Error)
        );

        // Resubmitting makes a new request
        let retry = CountingTransport::new(201);
        assert!(submit_with(&mut lead, &mut toasts, &retry).is_ok());
        assert_eq!(retry.calls.get(), 1);
        assert!(!lead.is_open());
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_invalid_form_never_reaches_transport() {
        let mut lead = LeadCapture::new();
        lead.open();
        lead.set_value(FormField::Email, "plainstring".to_string());
        let mut toasts = NotificationQueue::new();

        let transport = CountingTransport::new(200);
        assert_eq!(
            submit_with(&mut lead, &mut toasts, &transport),
            Err(SubmitBlocked::Invalid)
        );
        assert_eq!(transport.calls.get(), 0);
        assert!(toasts.is_empty());

        let errors = lead.errors();
        assert_eq!(
            errors.error_for(FormField::Email),
            Some(FieldError::InvalidEmailFormat)
        );
        assert_eq!(
            errors.error_for(FormField::Privacy),
            Some(FieldError::ConsentRequired)
        );
        // name, phone, subject, message, email, privacy
        assert_eq!(errors.error_count(), 6);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_blocked() {
        let mut lead = filled_lead();
        assert!(lead.begin_submit(Utc::now()).is_ok());
        assert_eq!(lead.begin_submit(Utc::now()).err(), Some(SubmitBlocked::InFlight));
        assert!(lead.submit_disabled());
    }
}
