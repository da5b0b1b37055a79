use thiserror::Error;

/// Precondition failures raised by [`crate::Random`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("cannot choose from an empty list")]
    EmptyChoice,
}
