//! Consultation request submission to the external form endpoint
//!
//! The request goes to a hosted form-processing service. Any 2xx status is a
//! success; everything else, including transport errors, is a failure the
//! user can retry by submitting again.

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::validation::ConsultationInput;

/// Hosted form endpoint used when no build-time override is given
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xpzgwqzg";

/// Inbox that receives consultation requests
pub const DEFAULT_REPLY_TO: &str = "jongsu@irda-x.com";

/// Prefix of the notification mail subject
pub const SUBJECT_PREFIX: &str = "[iRDA-X Consultation]";

/// Where and how submissions are delivered
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSettings {
    pub endpoint: String,
    pub reply_to: String,
    pub cc: String,
}

impl SubmissionSettings {
    /// Settings baked into the build.
    ///
    /// `IRDAX_FORM_ENDPOINT`, `IRDAX_FORM_REPLY_TO` and `IRDAX_FORM_CC` are read at
    /// compile time, since the browser bundle has no environment of its own.
    pub fn from_build_env() -> Self {
        let reply_to = option_env!("IRDAX_FORM_REPLY_TO").unwrap_or(DEFAULT_REPLY_TO);
        Self {
            endpoint: option_env!("IRDAX_FORM_ENDPOINT")
                .unwrap_or(DEFAULT_FORM_ENDPOINT)
                .to_string(),
            reply_to: reply_to.to_string(),
            cc: option_env!("IRDAX_FORM_CC").unwrap_or(reply_to).to_string(),
        }
    }
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Form values captured for one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub budget: Option<String>,
    pub services: Vec<String>,
    pub privacy: bool,
    pub timestamp: DateTime<Utc>,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SubmissionRecord {
    pub fn from_input(input: &ConsultationInput, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: input.name.trim().to_string(),
            company: optional(&input.company),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            subject: input.subject.trim().to_string(),
            message: input.message.trim().to_string(),
            budget: optional(&input.budget),
            services: input.services.clone(),
            privacy: input.privacy,
            timestamp,
        }
    }

    /// Subject line of the mail the form service sends out
    pub fn mail_subject(&self) -> String {
        format!("{} {}", SUBJECT_PREFIX, self.subject)
    }
}

/// JSON body posted to the form endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubmissionPayload {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub budget: String,
    pub services: String,
    pub privacy: bool,
    pub timestamp: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    #[serde(rename = "_subject")]
    pub mail_subject: String,
    #[serde(rename = "_cc")]
    pub cc: String,
}

impl SubmissionPayload {
    pub fn new(record: &SubmissionRecord, settings: &SubmissionSettings) -> Self {
        Self {
            name: record.name.clone(),
            company: record.company.clone().unwrap_or_default(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            subject: record.subject.clone(),
            message: record.message.clone(),
            budget: record.budget.clone().unwrap_or_default(),
            services: record.services.join(", "),
            privacy: record.privacy,
            timestamp: record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            reply_to: settings.reply_to.clone(),
            mail_subject: record.mail_subject(),
            cc: settings.cc.clone(),
        }
    }
}

/// Why a submission attempt did not go through
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission failed: endpoint answered with status {0}")]
    Rejected(u16),
    #[error("submission failed: {0}")]
    Network(String),
    #[error("submission failed: could not encode request: {0}")]
    Encode(String),
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// HTTP client used to reach the form endpoint
pub trait FormTransport {
    /// POST `payload` as JSON and resolve to the response status code
    fn post_json(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<u16, SubmissionError>>;
}

/// Send one record. Exactly one request is made; there is no retry.
pub async fn submit<T: FormTransport>(
    transport: &T,
    settings: &SubmissionSettings,
    record: &SubmissionRecord,
) -> Result<(), SubmissionError> {
    let payload = SubmissionPayload::new(record, settings);
    let status = transport.post_json(&settings.endpoint, &payload).await?;
    if is_success_status(status) {
        Ok(())
    } else {
        Err(SubmissionError::Rejected(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeTransport {
        status: Result<u16, SubmissionError>,
        sent: RefCell<Vec<(String, SubmissionPayload)>>,
    }

    impl FakeTransport {
        fn answering(status: Result<u16, SubmissionError>) -> Self {
            Self {
                status,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for FakeTransport {
        async fn post_json(
            &self,
            endpoint: &str,
            payload: &SubmissionPayload,
        ) -> Result<u16, SubmissionError> {
            self.sent
                .borrow_mut()
                .push((endpoint.to_string(), payload.clone()));
            self.status.clone()
        }
    }

    fn settings() -> SubmissionSettings {
        SubmissionSettings {
            endpoint: "https://forms.test/f/abc".to_string(),
            reply_to: "sales@irda-x.test".to_string(),
            cc: "cc@irda-x.test".to_string(),
        }
    }

    fn record() -> SubmissionRecord {
        let input = ConsultationInput {
            name: " Kim Minsu ".to_string(),
            company: "  ".to_string(),
            email: "test@example.com".to_string(),
            phone: "010-1234-5678".to_string(),
            subject: "PCB inspection".to_string(),
            message: "Hello".to_string(),
            budget: "10m-50m".to_string(),
            services: vec!["vision".to_string(), "consulting".to_string()],
            privacy: true,
        };
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        SubmissionRecord::from_input(&input, ts)
    }

    #[test]
    fn test_record_from_input() {
        let record = record();
        assert_eq!(record.name, "Kim Minsu");
        assert_eq!(record.company, None);
        assert_eq!(record.budget.as_deref(), Some("10m-50m"));
        assert_eq!(record.mail_subject(), "[iRDA-X Consultation] PCB inspection");
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = SubmissionPayload::new(&record(), &settings());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["services"], "vision, consulting");
        assert_eq!(json["company"], "");
        assert_eq!(json["_replyto"], "sales@irda-x.test");
        assert_eq!(json["_cc"], "cc@irda-x.test");
        assert_eq!(json["_subject"], "[iRDA-X Consultation] PCB inspection");
        assert_eq!(json["privacy"], true);
        assert_eq!(json["timestamp"], "2025-03-01T09:30:00.000Z");
        assert!(json.get("reply_to").is_none());
    }

    #[test]
    fn test_success_status_range() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(!is_success_status(199));
        assert!(!is_success_status(302));
        assert!(!is_success_status(422));
    }

    #[test]
    fn test_submit_posts_once_to_endpoint() {
        let transport = FakeTransport::answering(Ok(200));
        let result = block_on(submit(&transport, &settings(), &record()));

        assert!(result.is_ok());
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://forms.test/f/abc");
        assert_eq!(sent[0].1.email, "test@example.com");
    }

    #[test]
    fn test_submit_rejected_status() {
        let transport = FakeTransport::answering(Ok(500));
        let result = block_on(submit(&transport, &settings(), &record()));
        assert_eq!(result, Err(SubmissionError::Rejected(500)));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn test_submit_network_error() {
        let transport =
            FakeTransport::answering(Err(SubmissionError::Network("offline".to_string())));
        let result = block_on(submit(&transport, &settings(), &record()));
        assert!(matches!(result, Err(SubmissionError::Network(_))));
    }

    #[test]
    fn test_default_settings() {
        let settings = SubmissionSettings::from_build_env();
        assert!(!settings.endpoint.is_empty());
        assert!(settings.reply_to.contains('@'));
    }
}
