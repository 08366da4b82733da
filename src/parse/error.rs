use thiserror::Error;

/// Errors produced when parsing a rule string.
///
/// Only a missing `FREQ=` prefix is fatal. Malformed rule parts degrade to
/// their defaults instead, since stored rules may already contain them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a recurrence rule: '{input}' does not start with FREQ=")]
    NotARule { input: String },
}
