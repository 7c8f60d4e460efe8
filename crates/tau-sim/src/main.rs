//! Tau Truncation Simulation
//!
//! Advances a small population of tau proteins through phosphorylation and
//! probabilistic truncation, then prints each protein's final state and history.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use tau_sim::output::{report, write_json_report, ReportFormat};
use tau_sim::{ConfigError, SimConfig, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "tau_sim")]
#[command(about = "Phosphorylation-driven tau truncation simulation")]
struct Args {
    /// TOML configuration file (defaults to tau_sim.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of proteins
    #[arg(long)]
    population: Option<usize>,

    /// Number of rounds
    #[arg(long)]
    steps: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Distinct sites needed before truncation can occur
    #[arg(long)]
    threshold: Option<usize>,

    /// Per-step truncation chance once the threshold is met
    #[arg(long)]
    probability: Option<f64>,

    /// Report layout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut SimConfig) {
        if let Some(population) = self.population {
            config.simulation.population_size = population;
        }
        if let Some(steps) = self.steps {
            config.simulation.step_count = steps;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(threshold) = self.threshold {
            config.truncation.threshold = threshold;
        }
        if let Some(probability) = self.probability {
            config.truncation.probability = probability;
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<(), ConfigError> {
    let mut config = SimConfig::load(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    if args.print_config {
        config.validate()?;
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let mut sim = Simulation::new(config)?;
    sim.run();

    match args.format {
        ReportFormat::Text => report(sim.population())?,
        ReportFormat::Json => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_json_report(&sim.snapshot(), &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
