//! Simulation Components
//!
//! State owned by each simulated protein.

pub mod protein;

pub use protein::TauProtein;
pub use tau_events::{AggregationState, BindingState, Isoform};
