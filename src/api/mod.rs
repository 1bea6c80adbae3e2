mod api;

pub use api::{setup, Api, LabelLookup, TransitionCheck};
