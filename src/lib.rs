pub mod api;
pub mod config;
pub mod error;
pub mod registry;
pub mod status;
pub mod task;

pub use error::{ConfigError, RegistryError, StatusError, TransitionError};
pub use registry::{StatusDefinition, StatusRegistry, TransitionTable};
pub use status::{validate_status, Status, StyleTag};
pub use task::{Task, TaskStatusLog};
