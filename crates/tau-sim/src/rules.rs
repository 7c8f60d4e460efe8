//! Truncation Rule
//!
//! Parameters for the per-step truncation check, and the residue range
//! phosphorylation draws from.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tau_events::{Residue, RuleSnapshot, DEFAULT_TRUNCATION_SITE};

/// Serine positions eligible for phosphorylation, inclusive.
pub const PHOSPHO_SITE_RANGE: RangeInclusive<u16> = 200..=450;

/// Distinct marked sites needed before truncation can happen.
pub const DEFAULT_THRESHOLD: usize = 4;

/// Chance of truncation per eligible step.
pub const DEFAULT_PROBABILITY: f64 = 0.1;

/// When and where a protein truncates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncationRule {
    /// Minimum distinct modification sites
    pub threshold: usize,
    /// Per-step chance once the threshold is met, in [0, 1]
    pub probability: f64,
    /// Cleavage site recorded on truncation
    pub site: Residue,
}

impl TruncationRule {
    /// Default threshold and site with the given probability.
    pub fn with_probability(probability: f64) -> Self {
        Self {
            probability,
            ..Self::default()
        }
    }

    /// Whether a protein with `site_count` distinct sites may truncate.
    pub fn is_eligible(&self, site_count: usize) -> bool {
        site_count >= self.threshold
    }

    pub fn to_snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            threshold: self.threshold,
            probability: self.probability,
            site: self.site,
        }
    }
}

impl Default for TruncationRule {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            probability: DEFAULT_PROBABILITY,
            site: DEFAULT_TRUNCATION_SITE,
        }
    }
}
