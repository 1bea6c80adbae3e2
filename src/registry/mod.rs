mod definitions;
mod registry;
mod table;

pub use definitions::{builtin_definition, StatusDefinition};
pub use registry::StatusRegistry;
pub use table::TransitionTable;
