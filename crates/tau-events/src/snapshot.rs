//! Snapshot Types
//!
//! Serialization structs for the state of a finished run.
//!
//! A snapshot captures every protein's final state and full history, used for
//! machine-readable output and for comparing runs.

use serde::{Deserialize, Serialize};

use crate::{AggregationState, BindingState, Isoform, ProteinEvent, Residue};

/// Truncation rule in effect for the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSnapshot {
    pub threshold: usize,
    pub probability: f64,
    pub site: Residue,
}

/// Final state of one protein
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinSnapshot {
    pub id: u32,
    pub isoform: Isoform,
    /// Sorted by residue
    #[serde(default)]
    pub modification_sites: Vec<Residue>,
    pub binding_state: BindingState,
    pub aggregation_state: AggregationState,
    pub truncated: bool,
    #[serde(default)]
    pub truncation_site: Option<Residue>,
    pub aggregation_sensitivity: u32,
    pub steps: u64,
    #[serde(default)]
    pub history: Vec<ProteinEvent>,
}

impl ProteinSnapshot {
    /// Number of truncation entries in the history.
    pub fn truncation_count(&self) -> usize {
        self.history.iter().filter(|e| e.is_truncation()).count()
    }
}

/// Complete output of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub seed: u64,
    pub population_size: usize,
    pub step_count: u64,
    pub rule: RuleSnapshot,
    pub proteins: Vec<ProteinSnapshot>,
}

impl RunSnapshot {
    pub fn truncated_count(&self) -> usize {
        self.proteins.iter().filter(|p| p.truncated).count()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventKind;

    fn sample_protein(id: u32, truncated: bool) -> ProteinSnapshot {
        let mut history = vec![ProteinEvent::new(
            0,
            EventKind::Phosphorylated {
                site: Residue::serine(262),
                novel: true,
            },
        )];
        if truncated {
            history.push(ProteinEvent::new(0, EventKind::Truncated { site: Residue::default() }));
            history.push(ProteinEvent::new(0, EventKind::Unbound));
        }
        ProteinSnapshot {
            id,
            isoform: Isoform::default(),
            modification_sites: vec![Residue::serine(262)],
            binding_state: if truncated { BindingState::Unbound } else { BindingState::Bound },
            aggregation_state: AggregationState::Monomer,
            truncated,
            truncation_site: truncated.then(Residue::default),
            aggregation_sensitivity: if truncated { 2 } else { 1 },
            steps: 1,
            history,
        }
    }

    #[test]
    fn test_run_snapshot_counts() {
        let run = RunSnapshot {
            seed: 42,
            population_size: 2,
            step_count: 1,
            rule: RuleSnapshot {
                threshold: 1,
                probability: 1.0,
                site: Residue::default(),
            },
            proteins: vec![sample_protein(0, true), sample_protein(1, false)],
        };
        assert_eq!(run.truncated_count(), 1);
        assert_eq!(run.proteins[0].truncation_count(), 1);
        assert_eq!(run.proteins[1].truncation_count(), 0);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(sample_protein(3, true)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["isoform"], "4R");
        assert_eq!(json["binding_state"], "unbound");
        assert_eq!(json["truncation_site"], "D421");
        assert_eq!(json["modification_sites"][0], "S262");
        assert_eq!(json["history"][1]["type"], "truncated");

        let untouched = serde_json::to_value(sample_protein(4, false)).unwrap();
        assert!(untouched["truncation_site"].is_null());
    }

    #[test]
    fn test_snapshot_parses_back() {
        let original = sample_protein(1, true);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ProteinSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
