use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

use crate::email_address::EmailAddress;

/// One contact form payload on its way from the site visitor to the owner's
/// inbox. Transient: it exists for a single request/response cycle and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub subject: SubmissionSubject,
    pub message: SubmissionMessage,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2, len_char_max = 50),
    derive(Debug, Display, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 3, len_char_max = 50),
    derive(Debug, Display, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionSubject(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10, len_char_max = 1000),
    derive(Debug, Display, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

/// Canonical email address pattern, applied identically by the client-side
/// form validator and the relay. The relay additionally parses the address
/// for the smtp envelope, which may reject a handful of exotic inputs the
/// pattern admits.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});
