//! Validation for the consultation request form
//!
//! Every field is checked on each pass so that all problems surface at once.
//! A field carries at most one error: a blank required field only reports
//! that it is missing, format rules apply to non-empty values.

use std::collections::BTreeMap;

/// Fields of the consultation form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Company,
    Email,
    Phone,
    Subject,
    Message,
    Budget,
    Services,
    Privacy,
}

impl FormField {
    /// Fields that must contain a non-blank value
    pub const REQUIRED: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Subject,
        FormField::Message,
    ];

    /// The `name` attribute of the corresponding form control
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Company => "company",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Subject => "subject",
            FormField::Message => "message",
            FormField::Budget => "budget",
            FormField::Services => "services",
            FormField::Privacy => "privacy",
        }
    }
}

/// Reasons a single field can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required field is empty after trimming
    RequiredFieldMissing,
    /// Email is not of the `local@domain.tld` shape
    InvalidEmailFormat,
    /// Phone contains characters other than digits, `+`, `-`, spaces and parentheses
    InvalidPhoneFormat,
    /// Privacy policy checkbox is unchecked
    ConsentRequired,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::RequiredFieldMissing => write!(f, "This field is required."),
            FieldError::InvalidEmailFormat => write!(f, "Please enter a valid email address."),
            FieldError::InvalidPhoneFormat => write!(f, "Please enter a valid phone number."),
            FieldError::ConsentRequired => write!(f, "Please agree to the privacy policy."),
        }
    }
}

impl std::error::Error for FieldError {}

/// Outcome of one validation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error for a field, keeping the first one reported
    pub fn add_error(&mut self, field: FormField, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn error_for(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Inline message for a field, if it failed
    pub fn message_for(&self, field: FormField) -> Option<String> {
        self.error_for(field).map(|e| e.to_string())
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Raw values as typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationInput {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub budget: String,
    pub services: Vec<String>,
    pub privacy: bool,
}

impl ConsultationInput {
    /// Text value of a field; empty for the non-text controls
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Company => &self.company,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
            FormField::Budget => &self.budget,
            FormField::Services | FormField::Privacy => "",
        }
    }

    /// Mutable text value of a field, `None` for the non-text controls
    pub fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Company => Some(&mut self.company),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Subject => Some(&mut self.subject),
            FormField::Message => Some(&mut self.message),
            FormField::Budget => Some(&mut self.budget),
            FormField::Services | FormField::Privacy => None,
        }
    }

    /// Add or remove one service from the multi-select
    pub fn set_service(&mut self, service: &str, selected: bool) {
        let present = self.services.iter().any(|s| s == service);
        if selected && !present {
            self.services.push(service.to_string());
        } else if !selected {
            self.services.retain(|s| s != service);
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }
}

/// Check `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Phone numbers may only contain digits, `+`, `-`, whitespace and parentheses
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')') || c.is_whitespace())
}

/// Validate the whole form without short-circuiting
pub fn validate_consultation(input: &ConsultationInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    for field in FormField::REQUIRED {
        if input.value(field).trim().is_empty() {
            result.add_error(field, FieldError::RequiredFieldMissing);
        }
    }

    let email = input.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        result.add_error(FormField::Email, FieldError::InvalidEmailFormat);
    }

    let phone = input.phone.trim();
    if !phone.is_empty() && !is_valid_phone(phone) {
        result.add_error(FormField::Phone, FieldError::InvalidPhoneFormat);
    }

    if !input.privacy {
        result.add_error(FormField::Privacy, FieldError::ConsentRequired);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ConsultationInput {
        ConsultationInput {
            name: "Kim Minsu".to_string(),
            company: String::new(),
            email: "test@example.com".to_string(),
            phone: "010-1234-5678".to_string(),
            subject: "Line inspection".to_string(),
            message: "We need defect detection for our PCB line.".to_string(),
            budget: String::new(),
            services: vec![],
            privacy: true,
        }
    }

    #[test]
    fn test_valid_form() {
        let result = validate_consultation(&filled());
        assert!(result.is_valid());
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_all_required_blank() {
        let input = ConsultationInput {
            privacy: true,
            ..Default::default()
        };
        let result = validate_consultation(&input);

        assert!(!result.is_valid());
        assert_eq!(result.error_count(), FormField::REQUIRED.len());
        for field in FormField::REQUIRED {
            assert_eq!(
                result.error_for(field),
                Some(FieldError::RequiredFieldMissing)
            );
        }
        assert!(result.error_for(FormField::Company).is_none());
        assert!(result.error_for(FormField::Budget).is_none());
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut input = filled();
        input.name = "   \t".to_string();
        let result = validate_consultation(&input);
        assert_eq!(
            result.error_for(FormField::Name),
            Some(FieldError::RequiredFieldMissing)
        );
    }

    #[test]
    fn test_email_formats() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("a.b@mail.example.co.kr"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("plainstring"));
        assert!(!is_valid_email("test@example"));
        assert!(!is_valid_email("test@.com"));
        assert!(!is_valid_email("test@example."));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("te st@example.com"));
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_phone("010-1234-5678"));
        assert!(is_valid_phone("+82 10 1234 5678"));
        assert!(is_valid_phone("(02)123-4567"));
        assert!(!is_valid_phone("abc-1234"));
        assert!(!is_valid_phone("010.1234.5678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_format_errors_on_trimmed_values() {
        let mut input = filled();
        input.email = "  test@example.com  ".to_string();
        input.phone = " 010-1234-5678 ".to_string();
        assert!(validate_consultation(&input).is_valid());

        input.email = "plainstring".to_string();
        input.phone = "abc-1234".to_string();
        let result = validate_consultation(&input);
        assert_eq!(
            result.error_for(FormField::Email),
            Some(FieldError::InvalidEmailFormat)
        );
        assert_eq!(
            result.error_for(FormField::Phone),
            Some(FieldError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn test_blank_email_reports_only_missing() {
        let mut input = filled();
        input.email = String::new();
        let result = validate_consultation(&input);
        assert_eq!(
            result.error_for(FormField::Email),
            Some(FieldError::RequiredFieldMissing)
        );
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_consent_required() {
        let mut input = filled();
        input.privacy = false;
        let result = validate_consultation(&input);
        assert!(!result.is_valid());
        assert_eq!(
            result.error_for(FormField::Privacy),
            Some(FieldError::ConsentRequired)
        );
    }

    #[test]
    fn test_revalidation_after_fix() {
        let mut input = filled();
        input.email = "test@".to_string();
        input.subject = String::new();
        let first = validate_consultation(&input);
        assert_eq!(first.error_count(), 2);

        input.email = "test@example.com".to_string();
        let second = validate_consultation(&input);
        assert!(second.error_for(FormField::Email).is_none());
        assert_eq!(
            second.error_for(FormField::Subject),
            Some(FieldError::RequiredFieldMissing)
        );
        assert_eq!(second.error_count(), 1);
    }

    #[test]
    fn test_set_service() {
        let mut input = ConsultationInput::default();
        input.set_service("vision", true);
        input.set_service("vision", true);
        input.set_service("consulting", true);
        assert_eq!(input.services, vec!["vision", "consulting"]);

        input.set_service("vision", false);
        assert_eq!(input.services, vec!["consulting"]);
        assert!(!input.has_service("vision"));
    }

    #[test]
    fn test_field_error_display() {
        assert_eq!(
            FieldError::RequiredFieldMissing.to_string(),
            "This field is required."
        );
        assert_eq!(
            FieldError::ConsentRequired.to_string(),
            "Please agree to the privacy policy."
        );
    }
}
