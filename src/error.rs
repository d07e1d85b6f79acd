use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// The script does not describe a transformation of the given old sequence.
    #[error("invalid script: {0}")]
    InvalidScript(ScriptViolation),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("unexpected token: {0:?}")]
    UnexpectedToken(String),
}

/// Reason a script was rejected by [`crate::patch::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScriptViolation {
    #[error("equal record does not match old line {index}")]
    EqualMismatch { index: usize },
    #[error("record {index} references more old lines than exist ({len})")]
    Overrun { index: usize, len: usize },
    #[error("old sequence not fully consumed ({consumed} of {len} lines)")]
    Underconsumed { consumed: usize, len: usize },
}

impl From<ScriptViolation> for PatchError {
    fn from(v: ScriptViolation) -> Self {
        PatchError::InvalidScript(v)
    }
}
