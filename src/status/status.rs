use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// Lifecycle status of a task. The serialized form is the identifier shared
/// with whatever backend persists tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Draft,
    Pending,
    Approved,
    Scheduled,
    InProgress,
    Completed,
    Rejected,
    Cancelled,
}

impl Default for Status {
    fn default() -> Self {
        Status::FALLBACK
    }
}

impl Status {
    pub const ALL: [Status; 8] = [
        Status::Draft,
        Status::Pending,
        Status::Approved,
        Status::Scheduled,
        Status::InProgress,
        Status::Completed,
        Status::Rejected,
        Status::Cancelled,
    ];

    /// Returned wherever an unrecognized identifier is looked up.
    pub const FALLBACK: Status = Status::Draft;

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Pending => "pending",
            Status::Approved => "approved",
            Status::Scheduled => "scheduled",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Rejected => "rejected",
            Status::Cancelled => "cancelled",
        }
    }

    pub fn lookup(identifier: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.as_str() == identifier)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::lookup(s).ok_or_else(|| StatusError::Unknown(s.to_string()))
    }
}

/// Strict counterpart of the registry lookups: unknown input is an error
/// instead of degrading to draft.
pub fn validate_status(identifier: &str) -> Result<Status, StatusError> {
    identifier.parse()
}

/// Badge category used when rendering a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    Neutral,
    Info,
    Primary,
    Warning,
    Success,
    Danger,
}

impl StyleTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Neutral => "neutral",
            StyleTag::Info => "info",
            StyleTag::Primary => "primary",
            StyleTag::Warning => "warning",
            StyleTag::Success => "success",
            StyleTag::Danger => "danger",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StyleTag::Neutral => "bg-secondary",
            StyleTag::Info => "bg-info",
            StyleTag::Primary => "bg-primary",
            StyleTag::Warning => "bg-warning",
            StyleTag::Success => "bg-success",
            StyleTag::Danger => "bg-danger",
        }
    }
}

impl Display for StyleTag {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_lookup() {
        for s in Status::ALL {
            assert_eq!(Status::lookup(s.as_str()), Some(s));
        }
        assert_eq!(Status::lookup("IN_PROGRESS"), None);
        assert_eq!(Status::lookup(""), None);
    }

    #[test]
    fn validate_rejects_unknown() {
        assert_eq!(validate_status("scheduled"), Ok(Status::Scheduled));
        assert_eq!(
            validate_status("archived"),
            Err(StatusError::Unknown("archived".to_string()))
        );
        assert_eq!(
            validate_status("archived").unwrap_err().to_string(),
            "invalid status value: archived"
        );
    }

    #[test]
    fn serde_uses_wire_identifiers() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: Status = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, Status::Cancelled);
        assert!(serde_json::from_str::<Status>("\"unknown\"").is_err());
    }

    #[test]
    fn declaration_order_matches_all() {
        for (i, s) in Status::ALL.into_iter().enumerate() {
            assert_eq!(s as usize, i, "{s}");
        }
    }

    #[test]
    fn style_tags_map_to_badge_classes() {
        let classes: Vec<_> = [
            StyleTag::Neutral,
            StyleTag::Info,
            StyleTag::Primary,
            StyleTag::Warning,
            StyleTag::Success,
            StyleTag::Danger,
        ]
        .into_iter()
        .map(|t| t.css_class())
        .collect();
        assert_eq!(
            classes,
            vec!["bg-secondary", "bg-info", "bg-primary", "bg-warning", "bg-success", "bg-danger"]
        );
    }

    #[test]
    fn only_completed_and_cancelled_are_terminal() {
        let terminal: Vec<_> = Status::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![Status::Completed, Status::Cancelled]);
        assert_eq!(Status::default(), Status::Draft);
    }
}
