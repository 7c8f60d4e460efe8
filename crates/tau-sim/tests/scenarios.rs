//! End-to-end scenarios
//!
//! Full runs through the public driver API.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tau_events::BindingState;
use tau_sim::output::write_report;
use tau_sim::{initialize_population, run, SimConfig, Simulation, TruncationRule};

#[test]
fn test_zero_probability_never_truncates() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut population = initialize_population(5);
    run(&mut population, 10, &TruncationRule::with_probability(0.0), &mut rng);

    for protein in &population {
        assert!(!protein.is_truncated());
        assert_eq!(protein.binding_state(), BindingState::Bound);
        assert_eq!(protein.aggregation_sensitivity(), 1);
        assert_eq!(protein.history().len(), 10);
    }
}

#[test]
fn test_single_protein_forced_truncation() {
    let rule = TruncationRule::with_probability(1.0);
    let mut rng = SmallRng::seed_from_u64(77);
    let mut population = initialize_population(1);

    // Keep stepping until four distinct sites exist; duplicates only delay it
    let mut steps = 0;
    while population[0].modification_sites().len() < 4 {
        run(&mut population, 1, &rule, &mut rng);
        steps += 1;
        assert!(steps < 100);
    }

    let protein = &population[0];
    assert!(steps >= 4);
    assert!(protein.is_truncated());
    assert_eq!(protein.binding_state(), BindingState::Unbound);
    assert_eq!(protein.history().iter().filter(|e| e.is_truncation()).count(), 1);

    run(&mut population, 5, &rule, &mut rng);
    assert_eq!(
        population[0].history().iter().filter(|e| e.is_truncation()).count(),
        1
    );
}

#[test]
fn test_invariants_across_seeds() {
    for seed in 0..50 {
        let mut config = SimConfig::default();
        config.simulation.seed = Some(seed);
        config.simulation.step_count = 30;
        let mut sim = Simulation::new(config).unwrap();
        sim.run();

        for protein in sim.population() {
            let truncated = protein.is_truncated();
            assert_eq!(truncated, protein.truncation_site().is_some());
            assert_eq!(truncated, protein.binding_state() == BindingState::Unbound);
            assert!(matches!(protein.aggregation_sensitivity(), 1 | 2));
            assert_eq!(protein.aggregation_sensitivity() == 2, truncated);
            let extra = if truncated { 2 } else { 0 };
            assert_eq!(protein.history().len(), 30 + extra);
        }
    }
}

#[test]
fn test_report_orders_proteins_and_events() {
    let mut config = SimConfig::default();
    config.simulation.seed = Some(2024);
    config.truncation.probability = 0.5;
    let mut sim = Simulation::new(config).unwrap();
    sim.run();

    let mut buf = Vec::new();
    write_report(sim.population(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("Tau ")).collect();
    assert_eq!(headers.len(), 5);
    for (i, header) in headers.iter().enumerate() {
        assert!(header.starts_with(&format!("Tau {} - Truncated: ", i)));
    }

    let blocks: Vec<&str> = text.split("\nTau ").skip(1).collect();
    for (block, protein) in blocks.iter().zip(sim.population()) {
        let lines: Vec<&str> = block
            .lines()
            .skip(1)
            .filter(|l| !l.is_empty())
            .collect();
        let expected: Vec<String> = protein
            .history()
            .iter()
            .map(|e| format!("  - {}", e))
            .collect();
        assert_eq!(lines, expected);
    }
}
