use thiserror::Error;

/// The ways a wrapped call can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CallError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("arithmetic failure: {0}")]
    Arithmetic(String),
}

/// The kind of a [`CallError`], detached from its message.
///
/// Suppression policies are configured with a set of kinds, so the
/// discriminant needs to be its own comparable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidArgument,
    Arithmetic,
}

impl CallError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CallError::InvalidArgument(_) => FailureKind::InvalidArgument,
            CallError::Arithmetic(_) => FailureKind::Arithmetic,
        }
    }
}
