//! Properties of the reconciler and the divergences over random inputs.

mod common;

use rand::{SeedableRng, rngs::StdRng};

use common::{names, random_counts};
use namegame::{
    CountDistribution, DivergenceKind, Name, ProbabilityDistribution, distribution::reconcile,
    divergence::{js, kl},
};

#[test]
fn self_reconciliation_is_identity_and_normalized() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let counts = random_counts(&mut rng);
        let pair = reconcile(&counts, &counts);

        assert_eq!(pair.seen, pair.truth);
        assert!(pair.anomaly.is_none());
        assert!((pair.seen.total() - 1.0).abs() < 1e-9);
        assert_eq!(pair.seen, ProbabilityDistribution::from_counts(&counts));
    }
}

#[test]
fn kl_of_a_distribution_with_itself_is_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let counts = random_counts(&mut rng);
        let pair = reconcile(&counts, &counts);
        assert!(kl(&pair.seen, &pair.truth).unwrap().abs() < 1e-12);
    }
}

#[test]
fn js_is_symmetric_and_non_negative() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let seen = random_counts(&mut rng);
        let truth = random_counts(&mut rng);
        let pair = reconcile(&seen, &truth);

        let forward = js(&pair.seen, &pair.truth).unwrap();
        let backward = js(&pair.truth, &pair.seen).unwrap();
        assert!((forward - backward).abs() < 1e-12);
        assert!(forward >= 0.0);
    }
}

#[test]
fn reconciled_pairs_share_support_without_zeros() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let seen = random_counts(&mut rng);
        let truth = random_counts(&mut rng);
        let pair = reconcile(&seen, &truth);

        assert!(pair.anomaly.is_none());
        assert!(pair.seen.same_support(&pair.truth));
        assert!(pair.seen.iter().all(|(_, p)| p > 0.0));
        assert!(pair.truth.iter().all(|(_, p)| p > 0.0));
    }
}

#[test]
fn alice_every_round_has_zero_divergence() {
    let seen = CountDistribution::from_names(&names(&["alice", "alice", "alice"]));
    let truth = seen.clone();
    let pair = reconcile(&seen, &truth);

    assert_eq!(kl(&pair.seen, &pair.truth).unwrap(), 0.0);
    assert_eq!(js(&pair.seen, &pair.truth).unwrap(), 0.0);
}

#[test]
fn compared_side_names_are_folded_into_the_supporting_side() {
    // seen has more names, so it defines the support; "dave" only appears in
    // truth and has to be added to seen before smoothing.
    let seen = CountDistribution::from_names(&names(&["alice", "bob", "carol"]));
    let truth = CountDistribution::from_names(&names(&["alice", "dave"]));

    let pair = reconcile(&seen, &truth);

    assert!(pair.anomaly.is_none());
    assert!(pair.seen.same_support(&pair.truth));
    assert_eq!(pair.seen.len(), 4);
    assert!(pair.seen.get("dave").unwrap() > 0.0);
    assert_eq!(pair.truth.get("bob"), Some(0.001));
    assert!(DivergenceKind::Kl.compute(&pair.seen, &pair.truth).is_ok());
}

#[test]
fn equal_sized_supports_are_defined_by_truth() {
    let seen = CountDistribution::from_names(&names(&["alice"]));
    let truth = CountDistribution::from_names(&[Name::new("bob")]);

    let pair = reconcile(&seen, &truth);

    assert!(pair.seen.same_support(&pair.truth));
    assert_eq!(pair.seen.get("bob"), Some(0.001));
    assert!(pair.anomaly.is_none());
}
