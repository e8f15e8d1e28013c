//! Errors - construction-time failures. Nothing is broadcast when one of these is returned.

use thiserror::Error;

/// Failures raised while building a command's transaction list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Minimum required operators not reached: required {required}, found {found}")]
    MinimumRequiredOperators { required: usize, found: usize },

    #[error("Invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    #[error("Operation forbidden: {0}")]
    OperationForbidden(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Command execution failure: {0}")]
    CommandExecutionFailure(String),
}

impl CommandError {
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { name: name.into(), reason: reason.into() }
    }
}

/// Failures reported by a [`crate::ledger::LedgerReader`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed ledger response: {0}")]
    Malformed(String),
}

impl From<LedgerError> for CommandError {
    fn from(e: LedgerError) -> Self {
        CommandError::CommandExecutionFailure(e.to_string())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
