mod state_machine;
mod status;

pub use state_machine::{backend_transitions, console_transitions};
pub use status::{validate_status, Status, StyleTag};
