//! Client-side half of the contact submission pipeline: form field state,
//! inline validation, and the submit flow against the relay's HTTP contract.
//!
//! Validation here is a UX optimization only; the relay re-validates every
//! submission authoritatively.

mod form;
mod relay;

pub use form::{validate_field, ContactForm, Field, Notice, SubmitOutcome};
pub use relay::{ContactRequest, HttpRelayClient, RelayClient, RelayClientError, RelayResponse};

#[cfg(feature = "mock")]
pub use relay::MockRelayClient;
