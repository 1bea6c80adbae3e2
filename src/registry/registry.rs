use std::collections::HashMap;

use tracing::debug;

use super::definitions::{builtin_definition, StatusDefinition};
use super::table::TransitionTable;
use crate::error::RegistryError;
use crate::status::{Status, StyleTag};

/// Statuses in which a task can still be edited, deleted or (re)submitted.
const OPEN_STATUSES: [Status; 2] = [Status::Draft, Status::Rejected];

/// Maps each status to its presentation metadata and legal next states.
///
/// Built once at startup and shared by reference; nothing mutates it
/// afterwards, so concurrent readers need no locking. String-keyed lookups
/// never fail: an unrecognized identifier resolves to [`Status::FALLBACK`]
/// (or to an empty transition set).
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    definitions: [StatusDefinition; Status::ALL.len()],
    transitions: HashMap<Status, Vec<Status>>,
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusRegistry {
    pub fn new() -> Self {
        StatusRegistry {
            definitions: Status::ALL.map(builtin_definition),
            transitions: TransitionTable::console().into_entries(),
        }
    }

    pub fn with_table(table: TransitionTable) -> Result<Self, RegistryError> {
        table.validate()?;
        Ok(StatusRegistry {
            transitions: table.into_entries(),
            ..Self::new()
        })
    }

    fn resolve(&self, identifier: &str) -> Status {
        Status::lookup(identifier).unwrap_or_else(|| {
            debug!("unknown status {:?}, using {}", identifier, Status::FALLBACK);
            Status::FALLBACK
        })
    }

    // typed lookups

    pub fn definition_of(&self, status: Status) -> &StatusDefinition {
        // Status::ALL is in declaration order, so the discriminant is the index
        &self.definitions[status as usize]
    }

    pub fn transitions_of(&self, status: Status) -> &[Status] {
        self.transitions
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn allows(&self, from: Status, to: Status) -> bool {
        self.transitions_of(from).contains(&to)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &StatusDefinition> {
        self.definitions.iter()
    }

    // identifier lookups with the draft fallback

    pub fn definition(&self, status: &str) -> &StatusDefinition {
        self.definition_of(self.resolve(status))
    }

    /// Localized display name. Also serves as the identifier-to-label half
    /// of the label mapping; see [`StatusRegistry::status_for_label`].
    pub fn label(&self, status: &str) -> &'static str {
        self.definition(status).label
    }

    pub fn style_tag(&self, status: &str) -> StyleTag {
        self.definition(status).style
    }

    pub fn icon(&self, status: &str) -> &'static str {
        self.definition(status).icon
    }

    pub fn color(&self, status: &str) -> &'static str {
        self.definition(status).color
    }

    pub fn description(&self, status: &str) -> &'static str {
        self.definition(status).description
    }

    pub fn available_transitions(&self, status: &str) -> &[Status] {
        match Status::lookup(status) {
            Some(s) => self.transitions_of(s),
            None => &[],
        }
    }

    pub fn can_transition(&self, from: &str, to: &str) -> bool {
        Status::lookup(to).is_some_and(|to| self.available_transitions(from).contains(&to))
    }

    pub fn is_editable(&self, status: &str) -> bool {
        Status::lookup(status).is_some_and(|s| OPEN_STATUSES.contains(&s))
    }

    pub fn is_deletable(&self, status: &str) -> bool {
        Status::lookup(status).is_some_and(|s| OPEN_STATUSES.contains(&s))
    }

    pub fn is_submittable(&self, status: &str) -> bool {
        Status::lookup(status).is_some_and(|s| OPEN_STATUSES.contains(&s))
    }

    /// Maps a localized display name back to its status.
    pub fn status_for_label(&self, label: &str) -> Status {
        match self.definitions.iter().find(|d| d.label == label) {
            Some(d) => d.status,
            None => {
                debug!("unknown status label {:?}, using {}", label, Status::FALLBACK);
                Status::FALLBACK
            }
        }
    }
}
