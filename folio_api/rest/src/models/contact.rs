use folio_models::contact::{
    ContactSubmission, SubmissionMessage, SubmissionMessageError, SubmissionName,
    SubmissionNameError, SubmissionSubject, SubmissionSubjectError, EMAIL_PATTERN,
};
use serde::Deserialize;

/// Raw contact form payload as posted by the client.
///
/// Fields default to the empty string so that a missing field and an empty
/// field produce the same rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSubmission {
    MissingFields,
    InvalidEmail,
    FieldRule(&'static str),
}

impl InvalidSubmission {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "All fields are required",
            Self::InvalidEmail => "Invalid email address",
            Self::FieldRule(message) => message,
        }
    }
}

impl TryFrom<ApiContactSubmission> for ContactSubmission {
    type Error = InvalidSubmission;

    fn try_from(value: ApiContactSubmission) -> Result<Self, Self::Error> {
        if [&value.name, &value.email, &value.subject, &value.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(InvalidSubmission::MissingFields);
        }

        let email = value.email.trim();
        if !EMAIL_PATTERN.is_match(email) {
            return Err(InvalidSubmission::InvalidEmail);
        }

        Ok(Self {
            name: SubmissionName::try_from(value.name).map_err(|err| {
                InvalidSubmission::FieldRule(match err {
                    SubmissionNameError::LenCharMinViolated => "Name must be at least 2 characters",
                    SubmissionNameError::LenCharMaxViolated => "Name must be less than 50 characters",
                })
            })?,
            email: email.parse().map_err(|_| InvalidSubmission::InvalidEmail)?,
            subject: SubmissionSubject::try_from(value.subject).map_err(|err| {
                InvalidSubmission::FieldRule(match err {
                    SubmissionSubjectError::LenCharMinViolated => {
                        "Subject must be at least 3 characters"
                    }
                    SubmissionSubjectError::LenCharMaxViolated => {
                        "Subject must be less than 50 characters"
                    }
                })
            })?,
            message: SubmissionMessage::try_from(value.message).map_err(|err| {
                InvalidSubmission::FieldRule(match err {
                    SubmissionMessageError::LenCharMinViolated => {
                        "Message must be at least 10 characters"
                    }
                    SubmissionMessageError::LenCharMaxViolated => {
                        "Message must be less than 1000 characters"
                    }
                })
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn payload() -> ApiContactSubmission {
        ApiContactSubmission {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "This is a test message.".into(),
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        let submission = ContactSubmission::try_from(payload()).unwrap();
        assert_eq!(submission.name.as_str(), "Jane Doe");
        assert_eq!(submission.email.as_str(), "jane@example.com");
    }

    #[test]
    fn rejects_missing_field() {
        let mut payload = payload();
        payload.subject = String::new();

        let err = ContactSubmission::try_from(payload).unwrap_err();
        assert_eq!(err, InvalidSubmission::MissingFields);
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn whitespace_only_field_counts_as_missing() {
        let mut payload = payload();
        payload.message = "   ".into();

        let err = ContactSubmission::try_from(payload).unwrap_err();
        assert_eq!(err, InvalidSubmission::MissingFields);
    }

    #[test]
    fn rejects_invalid_email() {
        let mut payload = payload();
        payload.email = "not-an-email".into();

        let err = ContactSubmission::try_from(payload).unwrap_err();
        assert_eq!(err, InvalidSubmission::InvalidEmail);
        assert_eq!(err.message(), "Invalid email address");
    }

    #[test]
    fn rejects_out_of_bounds_lengths() {
        let mut too_short = payload();
        too_short.name = "J".into();
        assert_eq!(
            ContactSubmission::try_from(too_short).unwrap_err().message(),
            "Name must be at least 2 characters"
        );

        let mut too_long = payload();
        too_long.message = "x".repeat(1001);
        assert_eq!(
            ContactSubmission::try_from(too_long).unwrap_err().message(),
            "Message must be less than 1000 characters"
        );
    }

    #[test]
    fn boundary_lengths_pass() {
        let mut payload = payload();
        payload.name = "Jo".into();
        payload.subject = "Hi!".into();
        payload.message = "x".repeat(1000);

        ContactSubmission::try_from(payload).unwrap();
    }
}
