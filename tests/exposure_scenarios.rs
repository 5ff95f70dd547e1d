//! End-to-end exposure comparisons on synthetic games.

mod common;

use rand::{SeedableRng, rngs::StdRng};

use common::{random_ring_input, record, unanimous_game};
use namegame::{
    DivergenceKind, Game, SimulatorKind, SocialNetwork,
    app::AnalysisConfig,
    exposure::{self, AlternateSources, ExposureContext, MostInformativeSimulator},
    ports::ExposureSimulator,
};

#[test]
fn unanimous_pair_has_zero_divergence_and_empty_best_combination() {
    let game = unanimous_game(&[(0, 1)], &[(0, 1), (1, 0)], 3, "alice");

    for divergence in [DivergenceKind::Kl, DivergenceKind::Js] {
        let config = AnalysisConfig::new(divergence).with_additional_names(0);
        let context = ExposureContext::new(&game, &config).unwrap();
        let record = game.participant(0).unwrap();

        let baseline = context.baseline(record).unwrap();
        assert_eq!(baseline.without_extra, vec![0.0; 3]);
        assert_eq!(baseline.with_extra, vec![0.0; 3]);

        let best = MostInformativeSimulator.search(&context, record).unwrap();
        assert!(best.sources.is_empty());

        let mut rng = StdRng::seed_from_u64(42);
        let outcome = MostInformativeSimulator
            .simulate(&context, 0, &mut rng)
            .unwrap();
        assert_eq!(outcome.differences, vec![0.0, 0.0, 0.0]);
        assert_eq!(outcome.alternates, AlternateSources::Fixed(vec![]));
    }
}

#[test]
fn ratio_is_zero_wherever_the_baseline_is_zero() {
    // Everybody says "alice" throughout, so every baseline divergence is 0.
    let game = unanimous_game(
        &[(0, 1), (1, 2), (2, 3)],
        &[(0, 1), (1, 0), (2, 3), (3, 2)],
        25,
        "alice",
    );
    let config = AnalysisConfig::new(DivergenceKind::Js)
        .with_additional_names(1)
        .with_seed(42);
    let context = ExposureContext::new(&game, &config).unwrap();

    for kind in SimulatorKind::ALL {
        let simulator = kind.simulator(&config);
        let mut rng = StdRng::seed_from_u64(42);
        let report = exposure::run(simulator.as_ref(), &context, &mut rng).unwrap();

        assert_eq!(report.outcomes.len(), 4);
        for outcome in report.outcomes.values() {
            assert!(outcome.baseline.iter().all(|&b| b == 0.0));
            assert_eq!(outcome.ratios, vec![0.0; 25], "{kind}");
        }
    }
}

#[test]
fn tied_combinations_resolve_to_the_first_enumerated() {
    // 0 is paired with 1 only. Non-neighbors 2 and 3 play identical names, so
    // substituting either gives the same total divergence.
    let network = SocialNetwork::from_edges(&[(0, 1), (1, 2), (2, 3)]);
    let game = Game::new(
        [
            record(0, &["ann", "ann"], &["ann", "ann"], &[1, 1]),
            record(1, &["ann", "ann"], &["ann", "ann"], &[0, 0]),
            record(2, &["bo", "cy"], &["bo", "cy"], &[3, 3]),
            record(3, &["bo", "cy"], &["bo", "cy"], &[2, 2]),
        ],
        network,
    )
    .unwrap();
    let config = AnalysisConfig::default().with_additional_names(1);
    let context = ExposureContext::new(&game, &config).unwrap();
    let ego = game.participant(0).unwrap();

    for _ in 0..5 {
        let best = MostInformativeSimulator.search(&context, ego).unwrap();
        assert_eq!(best.sources, vec![2]);
    }

    let with_two = context.substituted_series(ego, &[2]).unwrap();
    let with_three = context.substituted_series(ego, &[3]).unwrap();
    assert_eq!(with_two, with_three);
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut rng = StdRng::seed_from_u64(42);
    let input = random_ring_input(10, 25, 2, &mut rng);
    let game = Game::from_input(&input).unwrap();
    let config = AnalysisConfig::new(DivergenceKind::Kl)
        .with_memory_length(6)
        .with_additional_names(2);
    let context = ExposureContext::new(&game, &config).unwrap();

    for kind in [
        SimulatorKind::WeakestTie,
        SimulatorKind::RandomOthers,
        SimulatorKind::SpareAlter,
    ] {
        let simulator = kind.simulator(&config);
        let first = exposure::run(simulator.as_ref(), &context, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let second = exposure::run(simulator.as_ref(), &context, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(first.outcomes, second.outcomes, "{kind}");
    }
}

#[test]
fn every_strategy_reports_consistent_series() {
    let mut rng = StdRng::seed_from_u64(7);
    let input = random_ring_input(12, 25, 1, &mut rng);
    let game = Game::from_input(&input).unwrap();
    let config = AnalysisConfig::default().with_additional_names(1);
    let context = ExposureContext::new(&game, &config).unwrap();

    for kind in SimulatorKind::ALL {
        let simulator = kind.simulator(&config);
        let report = exposure::run(simulator.as_ref(), &context, &mut rng).unwrap();
        assert_eq!(report.simulator, kind);

        for outcome in report.outcomes.values() {
            let record = game.participant(outcome.participant).unwrap();
            let baseline = context.baseline(record).unwrap();
            assert_eq!(outcome.baseline, baseline.without_extra);
            for round in 0..25 {
                let expected = outcome.alternative[round] - baseline.with_extra[round];
                assert!((outcome.differences[round] - expected).abs() < 1e-12);
                assert!(outcome.alternative[round] >= 0.0);
            }
            match (&outcome.alternates, kind) {
                (AlternateSources::PerRound(rounds), SimulatorKind::SpareAlter) => {
                    assert_eq!(rounds.len(), 25);
                    for (index, sources) in rounds.iter().enumerate() {
                        assert_eq!(sources.len(), 1);
                        assert_ne!(sources[0], record.partners[index]);
                        assert_ne!(sources[0], record.id);
                    }
                }
                (AlternateSources::Fixed(sources), _) => {
                    assert_eq!(sources.len(), 1);
                    assert_ne!(sources[0], record.id);
                }
                (other, kind) => panic!("{kind} reported {other:?}"),
            }
        }
    }
}

#[test]
fn extra_names_gain_is_baseline_difference() {
    let mut rng = StdRng::seed_from_u64(3);
    let input = random_ring_input(8, 25, 3, &mut rng);
    let game = Game::from_input(&input).unwrap();
    let context = ExposureContext::new(&game, &AnalysisConfig::default()).unwrap();

    let gains = context.extra_name_gain().unwrap();
    assert_eq!(gains.len(), 8);
    for (participant, gain) in gains {
        let baseline = context
            .baseline(game.participant(participant).unwrap())
            .unwrap();
        for round in 0..25 {
            let expected = baseline.without_extra[round] - baseline.with_extra[round];
            assert!((gain[round] - expected).abs() < 1e-12);
        }
    }
}
