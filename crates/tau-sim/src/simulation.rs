//! Simulation Driver
//!
//! Creates the population and advances every protein once per round, in
//! creation order, for a fixed number of rounds.

use rand::Rng;
use tau_events::{Isoform, RunSnapshot};

use crate::components::TauProtein;
use crate::config::{ConfigError, SimConfig};
use crate::rules::TruncationRule;
use crate::SimRng;

/// Creates `size` proteins with ids `0..size` and the default isoform.
pub fn initialize_population(size: usize) -> Vec<TauProtein> {
    initialize_population_with(size, Isoform::default())
}

pub fn initialize_population_with(size: usize, isoform: Isoform) -> Vec<TauProtein> {
    (0..size as u32)
        .map(|id| TauProtein::with_isoform(id, isoform))
        .collect()
}

/// Runs `steps` rounds. Each round finishes for every protein before the
/// next begins.
pub fn run<R: Rng + ?Sized>(
    population: &mut [TauProtein],
    steps: u64,
    rule: &TruncationRule,
    rng: &mut R,
) {
    for round in 0..steps {
        for protein in population.iter_mut() {
            protein.advance_step_with(rule, rng);
        }
        tracing::debug!(
            round,
            truncated = population.iter().filter(|p| p.is_truncated()).count(),
            "round complete"
        );
    }
}

/// A configured run: population, rule and random source.
pub struct Simulation {
    config: SimConfig,
    seed: u64,
    rng: SimRng,
    population: Vec<TauProtein>,
    steps_run: u64,
}

impl Simulation {
    /// Validates `config` and builds the population. Without a configured
    /// seed one is drawn from OS entropy.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.simulation.seed.unwrap_or_else(rand::random);
        let population = initialize_population_with(
            config.simulation.population_size,
            config.protein.isoform,
        );

        Ok(Self {
            rng: SimRng::seed_from_u64(seed),
            seed,
            config,
            population,
            steps_run: 0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn population(&self) -> &[TauProtein] {
        &self.population
    }

    /// Runs every configured round.
    pub fn run(&mut self) {
        let steps = self.config.simulation.step_count;
        tracing::info!(
            seed = self.seed,
            population = self.population.len(),
            steps,
            "starting simulation"
        );

        run(
            &mut self.population,
            steps,
            &self.config.truncation,
            &mut self.rng,
        );
        self.steps_run += steps;

        tracing::info!(
            truncated = self.population.iter().filter(|p| p.is_truncated()).count(),
            "simulation complete"
        );
    }

    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            seed: self.seed,
            population_size: self.population.len(),
            step_count: self.steps_run,
            rule: self.config.truncation.to_snapshot(),
            proteins: self.population.iter().map(TauProtein::to_snapshot).collect(),
        }
    }
}
