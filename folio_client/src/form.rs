use folio_models::contact::EMAIL_PATTERN;

use crate::relay::{ContactRequest, RelayClient, RelayResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

/// Validate a single field against its presence/length/format rule.
///
/// Pure: returns the inline error message, or `None` if the (trimmed) value
/// passes.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    let len = value.chars().count();

    match field {
        Field::Name => {
            if value.is_empty() {
                Some("Name is required")
            } else if len < 2 {
                Some("Name must be at least 2 characters")
            } else if len > 50 {
                Some("Name must be less than 50 characters")
            } else {
                None
            }
        }
        Field::Email => {
            if value.is_empty() {
                Some("Email is required")
            } else if !EMAIL_PATTERN.is_match(value) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Subject => {
            if value.is_empty() {
                Some("Subject is required")
            } else if len < 3 {
                Some("Subject must be at least 3 characters")
            } else if len > 50 {
                Some("Subject must be less than 50 characters")
            } else {
                None
            }
        }
        Field::Message => {
            if value.is_empty() {
                Some("Message is required")
            } else if len < 10 {
                Some("Message must be at least 10 characters")
            } else if len > 1000 {
                Some("Message must be less than 1000 characters")
            } else {
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FieldMap<T>([T; 4]);

impl<T> FieldMap<T> {
    fn get(&self, field: Field) -> &T {
        &self.0[field as usize]
    }

    fn get_mut(&mut self, field: Field) -> &mut T {
        &mut self.0[field as usize]
    }
}

/// State of one contact form instance: value, inline error, and touched flag
/// per field, plus the submitting gate.
///
/// Errors are only rendered for touched fields; blurring a field marks it
/// touched, and subsequent edits re-validate immediately.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: FieldMap<String>,
    errors: FieldMap<Option<&'static str>>,
    touched: FieldMap<bool>,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        *self.errors.get(field)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        *self.touched.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update a field's value, re-validating it if it has been touched.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();

        if *self.touched.get(field) {
            *self.errors.get_mut(field) = validate_field(field, self.values.get(field));
        }
    }

    /// Mark a field as touched and validate it (focus left the input).
    pub fn blur(&mut self, field: Field) {
        *self.touched.get_mut(field) = true;
        *self.errors.get_mut(field) = validate_field(field, self.values.get(field));
    }

    /// Validate every field, marking all of them touched. Returns whether
    /// the form may be submitted.
    pub fn validate_form(&mut self) -> bool {
        for field in Field::ALL {
            *self.touched.get_mut(field) = true;
            *self.errors.get_mut(field) = validate_field(field, self.values.get(field));
        }

        Field::ALL.iter().all(|&field| self.error(field).is_none())
    }

    /// Validate and, if the form is well-formed, post it to the relay.
    ///
    /// On success all field state is reset; on any failure the user's input
    /// is preserved for a manual retry. The submitting flag is cleared in
    /// every terminal case.
    pub async fn submit(&mut self, relay: &impl RelayClient) -> SubmitOutcome {
        if !self.validate_form() {
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;

        let request = ContactRequest {
            name: self.value(Field::Name).to_owned(),
            email: self.value(Field::Email).to_owned(),
            subject: self.value(Field::Subject).to_owned(),
            message: self.value(Field::Message).to_owned(),
        };

        let result = relay.send(&request).await;
        self.submitting = false;

        match result {
            Ok(RelayResponse::Success { message }) => {
                self.reset();
                SubmitOutcome::Sent { message }
            }
            Ok(RelayResponse::Error { error }) => SubmitOutcome::Rejected {
                error: error.unwrap_or_else(|| "Failed to send message".into()),
            },
            Err(_) => SubmitOutcome::Failed,
        }
    }

    fn reset(&mut self) {
        self.values = Default::default();
        self.errors = Default::default();
        self.touched = Default::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; inline errors are populated and no request was
    /// made.
    Invalid,
    /// The relay accepted the submission.
    Sent { message: String },
    /// The relay answered with an error status.
    Rejected { error: String },
    /// The request itself failed (connectivity, malformed answer, ...).
    Failed,
}

/// Toast-style notification for the embedding UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
    pub destructive: bool,
}

impl SubmitOutcome {
    /// The notification to show for this outcome. `Invalid` yields none;
    /// inline field errors are the feedback in that case.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Invalid => None,
            Self::Sent { message } => Some(Notice {
                title: "Message Sent! \u{1f389}",
                description: message.clone(),
                destructive: false,
            }),
            Self::Rejected { error } => Some(Notice {
                title: "Error",
                description: error.clone(),
                destructive: true,
            }),
            Self::Failed => Some(Notice {
                title: "Error",
                description: "Something went wrong. Please try again.".into(),
                destructive: true,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::relay::{MockRelayClient, RelayClientError};

    #[test]
    fn validate_field_rules() {
        for (field, value, expected) in [
            (Field::Name, "Jane Doe", None),
            (Field::Name, "", Some("Name is required")),
            (Field::Name, "  A  ", Some("Name must be at least 2 characters")),
            (Field::Name, "Jo", None),
            (Field::Email, "jane@example.com", None),
            (Field::Email, "", Some("Email is required")),
            (
                Field::Email,
                "not-an-email",
                Some("Please enter a valid email address"),
            ),
            (Field::Subject, "Hi!", None),
            (Field::Subject, "Hi", Some("Subject must be at least 3 characters")),
            (Field::Subject, "", Some("Subject is required")),
            (Field::Message, "This is a test message.", None),
            (Field::Message, "", Some("Message is required")),
            (
                Field::Message,
                "too short",
                Some("Message must be at least 10 characters"),
            ),
        ] {
            assert_eq!(validate_field(field, value), expected, "{field:?} {value:?}");
        }
    }

    #[test]
    fn validate_field_boundaries() {
        assert_eq!(validate_field(Field::Name, &"x".repeat(50)), None);
        assert_eq!(
            validate_field(Field::Name, &"x".repeat(51)),
            Some("Name must be less than 50 characters")
        );
        assert_eq!(validate_field(Field::Subject, &"x".repeat(50)), None);
        assert_eq!(
            validate_field(Field::Subject, &"x".repeat(51)),
            Some("Subject must be less than 50 characters")
        );
        assert_eq!(validate_field(Field::Message, &"x".repeat(1000)), None);
        assert_eq!(
            validate_field(Field::Message, &"x".repeat(1001)),
            Some("Message must be less than 1000 characters")
        );
    }

    #[test]
    fn errors_appear_only_after_blur() {
        let mut form = ContactForm::new();

        form.set_value(Field::Name, "J");
        assert_eq!(form.error(Field::Name), None);

        form.blur(Field::Name);
        assert_eq!(
            form.error(Field::Name),
            Some("Name must be at least 2 characters")
        );

        // touched now, so edits re-validate immediately
        form.set_value(Field::Name, "Jane");
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn validate_form_touches_and_reports_every_field() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Jane Doe");

        assert!(!form.validate_form());

        for field in Field::ALL {
            assert!(form.is_touched(field));
        }
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.error(Field::Email), Some("Email is required"));
        assert_eq!(form.error(Field::Subject), Some("Subject is required"));
        assert_eq!(form.error(Field::Message), Some("Message is required"));
    }

    #[tokio::test]
    async fn submit_aborts_without_network_call_when_invalid() {
        let mut form = ContactForm::new();
        // no expectations: any send panics
        let relay = MockRelayClient::new();

        let outcome = form.submit(&relay).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(outcome.notice(), None);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn submit_success_resets_the_form() {
        let mut form = filled_form();
        let relay = MockRelayClient::new().with_send(
            request(),
            Ok(RelayResponse::Success {
                message: "Email sent successfully! I'll get back to you soon.".into(),
            }),
        );

        let outcome = form.submit(&relay).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Sent {
                message: "Email sent successfully! I'll get back to you soon.".into()
            }
        );
        let notice = outcome.notice().unwrap();
        assert!(!notice.destructive);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
            assert!(!form.is_touched(field));
        }
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn submit_rejection_preserves_input() {
        let mut form = filled_form();
        let relay = MockRelayClient::new().with_send(
            request(),
            Ok(RelayResponse::Error {
                error: Some("Invalid email address".into()),
            }),
        );

        let outcome = form.submit(&relay).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                error: "Invalid email address".into()
            }
        );
        assert!(outcome.notice().unwrap().destructive);
        assert_eq!(form.value(Field::Name), "Jane Doe");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn submit_rejection_without_body_falls_back() {
        let mut form = filled_form();
        let relay = MockRelayClient::new().with_send(
            request(),
            Ok(RelayResponse::Error { error: None }),
        );

        let outcome = form.submit(&relay).await;

        assert_matches!(outcome, SubmitOutcome::Rejected { error } if error == "Failed to send message");
    }

    #[tokio::test]
    async fn submit_transport_failure_preserves_input() {
        let mut form = filled_form();
        let relay = MockRelayClient::new().with_send(
            request(),
            Err(RelayClientError::Other(anyhow::anyhow!(
                "connection refused"
            ))),
        );

        let outcome = form.submit(&relay).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(
            outcome.notice().unwrap().description,
            "Something went wrong. Please try again."
        );
        assert_eq!(form.value(Field::Message), "This is a test message.");
        assert!(!form.is_submitting());
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Jane Doe");
        form.set_value(Field::Email, "jane@example.com");
        form.set_value(Field::Subject, "Hello");
        form.set_value(Field::Message, "This is a test message.");
        form
    }

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "This is a test message.".into(),
        }
    }
}
