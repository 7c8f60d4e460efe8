//! Protein Component
//!
//! A single tau protein: its modification sites, binding and truncation state,
//! and the append-only history of everything that happened to it.

use rand::Rng;
use std::collections::BTreeSet;
use tau_events::{
    AggregationState, BindingState, EventKind, Isoform, ProteinEvent, ProteinSnapshot, Residue,
};

use crate::rules::{TruncationRule, PHOSPHO_SITE_RANGE};

/// Sensitivity before truncation; truncation doubles it.
const BASE_AGGREGATION_SENSITIVITY: u32 = 1;

/// One simulated tau protein
#[derive(Debug, Clone)]
pub struct TauProtein {
    id: u32,
    isoform: Isoform,
    modification_sites: BTreeSet<Residue>,
    binding_state: BindingState,
    aggregation_state: AggregationState,
    truncated: bool,
    truncation_site: Option<Residue>,
    aggregation_sensitivity: u32,
    /// Completed `advance_step` calls
    step: u64,
    history: Vec<ProteinEvent>,
}

impl TauProtein {
    pub fn new(id: u32) -> Self {
        Self::with_isoform(id, Isoform::default())
    }

    pub fn with_isoform(id: u32, isoform: Isoform) -> Self {
        Self {
            id,
            isoform,
            modification_sites: BTreeSet::new(),
            binding_state: BindingState::Bound,
            aggregation_state: AggregationState::Monomer,
            truncated: false,
            truncation_site: None,
            aggregation_sensitivity: BASE_AGGREGATION_SENSITIVITY,
            step: 0,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn isoform(&self) -> Isoform {
        self.isoform
    }

    pub fn modification_sites(&self) -> &BTreeSet<Residue> {
        &self.modification_sites
    }

    pub fn is_modified_at(&self, site: &Residue) -> bool {
        self.modification_sites.contains(site)
    }

    pub fn binding_state(&self) -> BindingState {
        self.binding_state
    }

    pub fn aggregation_state(&self) -> AggregationState {
        self.aggregation_state
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn truncation_site(&self) -> Option<Residue> {
        self.truncation_site
    }

    pub fn aggregation_sensitivity(&self) -> u32 {
        self.aggregation_sensitivity
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// History in the order it was recorded.
    pub fn history(&self) -> &[ProteinEvent] {
        &self.history
    }

    fn record(&mut self, kind: EventKind) {
        self.history.push(ProteinEvent::new(self.step, kind));
    }

    /// Marks `site`. The entry is recorded even when the site was already marked.
    pub fn phosphorylate(&mut self, site: Residue) {
        let novel = self.modification_sites.insert(site);
        self.record(EventKind::Phosphorylated { site, novel });
    }

    /// Marks a serine drawn uniformly from the phosphorylation range.
    pub fn add_random_modification<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let position = rng.gen_range(PHOSPHO_SITE_RANGE);
        self.phosphorylate(Residue::serine(position));
    }

    /// Detaches from the microtubule. Records an entry even if already unbound.
    pub fn release_binding(&mut self) {
        self.binding_state = BindingState::Unbound;
        self.record(EventKind::Unbound);
    }

    /// Truncates at the default site.
    pub fn truncate(&mut self) {
        self.apply_truncation(Residue::default());
    }

    /// Truncates at `site`, then releases the binding if still bound.
    /// Does nothing once truncated.
    pub fn apply_truncation(&mut self, site: Residue) {
        if self.truncated {
            return;
        }

        self.truncated = true;
        self.truncation_site = Some(site);
        self.aggregation_sensitivity *= 2;
        self.record(EventKind::Truncated { site });
        tracing::debug!(protein = self.id, step = self.step, %site, "protein truncated");

        if self.binding_state == BindingState::Bound {
            self.release_binding();
        }
    }

    /// Rolls for truncation if the protein is intact and has enough sites.
    /// No random value is drawn when the guard fails.
    pub fn maybe_truncate<R: Rng + ?Sized>(&mut self, rule: &TruncationRule, rng: &mut R) {
        if self.truncated || !rule.is_eligible(self.modification_sites.len()) {
            return;
        }

        if rng.gen::<f64>() < rule.probability {
            self.apply_truncation(rule.site);
        }
    }

    /// One timestep under the default rule.
    pub fn advance_step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.advance_step_with(&TruncationRule::default(), rng);
    }

    /// One timestep: phosphorylate, then check for truncation. The new site
    /// counts toward this step's check.
    pub fn advance_step_with<R: Rng + ?Sized>(&mut self, rule: &TruncationRule, rng: &mut R) {
        self.add_random_modification(rng);
        self.maybe_truncate(rule, rng);
        self.step += 1;
    }

    pub fn to_snapshot(&self) -> ProteinSnapshot {
        ProteinSnapshot {
            id: self.id,
            isoform: self.isoform,
            modification_sites: self.modification_sites.iter().copied().collect(),
            binding_state: self.binding_state,
            aggregation_state: self.aggregation_state,
            truncated: self.truncated,
            truncation_site: self.truncation_site,
            aggregation_sensitivity: self.aggregation_sensitivity,
            steps: self.step,
            history: self.history.clone(),
        }
    }
}
