//! Protein State Enums
//!
//! Categorical state carried by each protein. Some variants are not reached
//! by any current rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tau isoform, by number of microtubule-binding repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Isoform {
    #[serde(rename = "3R")]
    ThreeRepeat,
    #[default]
    #[serde(rename = "4R")]
    FourRepeat,
}

impl fmt::Display for Isoform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Isoform::ThreeRepeat => write!(f, "3R"),
            Isoform::FourRepeat => write!(f, "4R"),
        }
    }
}

/// Microtubule binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BindingState {
    #[default]
    Bound,
    Unbound,
}

/// Aggregation stage. Only `Monomer` is reachable today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AggregationState {
    #[default]
    Monomer,
    Oligomer,
    Fibril,
}
