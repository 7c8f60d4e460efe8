//! Shared event types and serialization for the tau truncation simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the simulation crate and anything reading its output.

pub mod event;
pub mod residue;
pub mod snapshot;
pub mod state;

pub use residue::{ParseResidueError, Residue, DEFAULT_TRUNCATION_SITE};

pub use event::{EventKind, ProteinEvent};

pub use state::{AggregationState, BindingState, Isoform};

pub use snapshot::{ProteinSnapshot, RuleSnapshot, RunSnapshot};
