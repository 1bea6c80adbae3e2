use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::TransitionError;
use crate::registry::StatusRegistry;
use crate::status::Status;

/// Client-side view of a task. The backend owns the real record; this copy
/// is used to pre-check status changes before they are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    // local id used by the backend to de-duplicate submissions per user
    pub client_id: Option<String>,
    pub name: String,
    pub date: Option<String>,
    pub status: Status,
    pub remark: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Task {
    fn default() -> Self {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4(),
            client_id: None,
            name: "".to_string(),
            date: None,
            status: Status::Draft,
            remark: None,
            created_by: "".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// One accepted status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatusLog {
    pub id: Uuid,
    pub task_id: Uuid,
    pub from_status: Status,
    pub to_status: Status,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub reason: Option<String>,
}

impl TaskStatusLog {
    pub fn from_label(&self, registry: &StatusRegistry) -> &'static str {
        registry.definition_of(self.from_status).label
    }

    pub fn to_label(&self, registry: &StatusRegistry) -> &'static str {
        registry.definition_of(self.to_status).label
    }
}

impl Task {
    pub fn new(name: &str, created_by: &str) -> Self {
        Task {
            name: name.to_string(),
            created_by: created_by.to_string(),
            ..Default::default()
        }
    }

    pub fn can_transition_to(&self, registry: &StatusRegistry, to: Status) -> bool {
        registry.allows(self.status, to)
    }

    pub fn available_statuses<'a>(&self, registry: &'a StatusRegistry) -> &'a [Status] {
        registry.transitions_of(self.status)
    }

    pub fn is_editable(&self, registry: &StatusRegistry) -> bool {
        registry.is_editable(self.status.as_str())
    }

    pub fn is_deletable(&self, registry: &StatusRegistry) -> bool {
        registry.is_deletable(self.status.as_str())
    }

    pub fn is_submittable(&self, registry: &StatusRegistry) -> bool {
        registry.is_submittable(self.status.as_str())
    }

    pub fn transition_to(
        &mut self,
        registry: &StatusRegistry,
        to: Status,
        changed_by: &str,
        reason: Option<String>,
    ) -> Result<TaskStatusLog, TransitionError> {
        let from = self.status;
        if !self.can_transition_to(registry, to) {
            warn!("task {}: rejected transition {} -> {}", self.id, from, to);
            return Err(TransitionError::NotAllowed {
                from,
                to,
                from_label: registry.definition_of(from).label,
                to_label: registry.definition_of(to).label,
            });
        }

        let now = Utc::now();
        self.status = to;
        self.updated_at = now;

        info!("task {}: {} -> {} by {}", self.id, from, to, changed_by);

        Ok(TaskStatusLog {
            id: Uuid::new_v4(),
            task_id: self.id,
            from_status: from,
            to_status: to,
            changed_by: changed_by.to_string(),
            changed_at: now,
            reason,
        })
    }
}
