use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::registry::{StatusDefinition, StatusRegistry};
use crate::status::Status;

type AppState = State<Arc<StatusRegistry>>;

pub struct Api {
    address: String,
    port: u16,
    router: Router,
}

impl Api {
    pub async fn start(self) -> std::io::Result<()> {
        let socket = format!("{}:{}", self.address, self.port);
        let listener = tokio::net::TcpListener::bind(&socket).await?;
        info!("[API] listening on {}", socket);
        axum::serve(listener, self.router).await
    }
}

pub fn setup(address: &str, port: u16, registry: Arc<StatusRegistry>) -> Api {
    let router = Router::new()
        .route("/statuses", get(list_statuses))
        .route("/statuses/{status}", get(get_status))
        .route("/statuses/{status}/transitions", get(get_transitions))
        .route("/transitions/{from}/{to}", get(check_transition))
        .route("/labels/{label}", get(lookup_label))
        .with_state(registry);
    Api {
        address: address.to_string(),
        port,
        router,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionCheck {
    pub from: String,
    pub to: String,
    pub allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLookup {
    pub label: String,
    pub status: Status,
}

async fn list_statuses(State(registry): AppState) -> Json<Vec<StatusDefinition>> {
    Json(registry.definitions().copied().collect())
}

async fn get_status(State(registry): AppState, Path(status): Path<String>) -> Json<StatusDefinition> {
    Json(*registry.definition(&status))
}

async fn get_transitions(
    State(registry): AppState,
    Path(status): Path<String>,
) -> Json<Vec<StatusDefinition>> {
    let next = registry
        .available_transitions(&status)
        .iter()
        .map(|s| *registry.definition_of(*s))
        .collect();
    Json(next)
}

async fn check_transition(
    State(registry): AppState,
    Path((from, to)): Path<(String, String)>,
) -> Json<TransitionCheck> {
    let allowed = registry.can_transition(&from, &to);
    info!("[API] transition check {} -> {}: {}", from, to, allowed);
    Json(TransitionCheck { from, to, allowed })
}

async fn lookup_label(State(registry): AppState, Path(label): Path<String>) -> Json<LabelLookup> {
    let status = registry.status_for_label(&label);
    Json(LabelLookup { label, status })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        State(Arc::new(StatusRegistry::new()))
    }

    #[tokio::test]
    async fn lists_every_status_in_order() {
        let Json(defs) = list_statuses(state()).await;
        let ids: Vec<_> = defs.iter().map(|d| d.status).collect();
        assert_eq!(ids, Status::ALL.to_vec());
    }

    #[tokio::test]
    async fn unknown_status_gets_draft_definition() {
        let Json(def) = get_status(state(), Path("bogus".to_string())).await;
        assert_eq!(def.status, Status::Draft);
    }

    #[tokio::test]
    async fn transitions_carry_definitions() {
        let Json(next) = get_transitions(state(), Path("in_progress".to_string())).await;
        let labels: Vec<_> = next.iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["已完成", "已取消"]);

        let Json(none) = get_transitions(state(), Path("completed".to_string())).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn checks_transition() {
        let Json(check) =
            check_transition(state(), Path(("draft".to_string(), "pending".to_string()))).await;
        assert!(check.allowed);
        let Json(check) =
            check_transition(state(), Path(("draft".to_string(), "completed".to_string()))).await;
        assert!(!check.allowed);
        assert_eq!(check.to, "completed");
    }

    #[tokio::test]
    async fn looks_up_labels() {
        let Json(found) = lookup_label(state(), Path("已驳回".to_string())).await;
        assert_eq!(found.status, Status::Rejected);
        let Json(missing) = lookup_label(state(), Path("???".to_string())).await;
        assert_eq!(missing.status, Status::Draft);
    }
}
