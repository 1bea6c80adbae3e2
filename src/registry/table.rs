use std::collections::HashMap;

use crate::error::RegistryError;
use crate::status::{backend_transitions, console_transitions, Status};

/// Ordered next-states for each status. Validated when handed to
/// [`StatusRegistry::with_table`](super::StatusRegistry::with_table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    entries: HashMap<Status, Vec<Status>>,
}

impl TransitionTable {
    pub fn console() -> Self {
        Self::from_fn(console_transitions)
    }

    pub fn backend() -> Self {
        Self::from_fn(backend_transitions)
    }

    pub fn by_name(name: &str) -> Result<Self, RegistryError> {
        match name {
            "console" => Ok(Self::console()),
            "backend" => Ok(Self::backend()),
            other => Err(RegistryError::UnknownTable(other.to_string())),
        }
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Status, Vec<Status>)>,
    {
        TransitionTable {
            entries: entries.into_iter().collect(),
        }
    }

    fn from_fn(f: fn(Status) -> &'static [Status]) -> Self {
        Self::from_entries(Status::ALL.into_iter().map(|s| (s, f(s).to_vec())))
    }

    pub fn get(&self, status: Status) -> Option<&[Status]> {
        self.entries.get(&status).map(Vec::as_slice)
    }

    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        for from in Status::ALL {
            let targets = self.get(from).ok_or(RegistryError::MissingEntry(from))?;
            if from.is_terminal() && !targets.is_empty() {
                return Err(RegistryError::TerminalHasTransitions(from));
            }
            for (i, to) in targets.iter().enumerate() {
                if targets[..i].contains(to) {
                    return Err(RegistryError::DuplicateTarget { from, to: *to });
                }
            }
        }
        Ok(())
    }

    pub(crate) fn into_entries(self) -> HashMap<Status, Vec<Status>> {
        self.entries
    }
}
