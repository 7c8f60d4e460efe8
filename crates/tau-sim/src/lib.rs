//! Tau Truncation Simulation Library
//!
//! Per-protein state machine for phosphorylation-driven truncation, and the
//! driver that advances a population of proteins in lockstep.

use rand::rngs::SmallRng;
use rand::{Error as RandError, RngCore, SeedableRng};

pub mod components;
pub mod config;
pub mod output;
pub mod rules;
pub mod simulation;

pub use components::TauProtein;
pub use config::{ConfigError, SimConfig};
pub use rules::TruncationRule;
pub use simulation::{initialize_population, initialize_population_with, run, Simulation};

/// Seeded random number generator shared by every draw in a run
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl RngCore for SimRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.0.try_fill_bytes(dest)
    }
}
