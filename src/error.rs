use thiserror::Error;

use crate::status::Status;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("invalid status value: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no transition entry for status {0}")]
    MissingEntry(Status),

    #[error("terminal status {0} must not have outgoing transitions")]
    TerminalHasTransitions(Status),

    #[error("status {from} lists {to} more than once")]
    DuplicateTarget { from: Status, to: Status },

    #[error("unknown table {0:?}, expected \"console\" or \"backend\"")]
    UnknownTable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Carries the localized labels so the message can be shown as-is.
    #[error("transition from {from_label} to {to_label} is not allowed")]
    NotAllowed {
        from: Status,
        to: Status,
        from_label: &'static str,
        to_label: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}
