//! Count and probability distributions over name tokens, and the reconciler
//! that puts two count distributions onto a common support.
//!
//! Reconciliation treats each distribution's frequencies as counts out of a
//! synthetic sample of [`SYNTHETIC_SAMPLE`] draws. Every name missing from one
//! side is given [`PSEUDO_PROBABILITY`], i.e. as if it had been drawn once in
//! that synthetic sample, and the present names give up mass in proportion to
//! their own frequency.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::identifiers::Name;

/// Probability assigned to a name absent from one side of a reconciled pair.
pub const PSEUDO_PROBABILITY: f64 = 0.001;

/// Size of the synthetic sample frequencies are rescaled against.
pub const SYNTHETIC_SAMPLE: f64 = 1000.0;

/// Frequency count of name tokens.
///
/// The sum of all counts always equals the number of observations added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountDistribution {
    counts: BTreeMap<Name, u64>,
}

impl CountDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every name in `names`.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a Name>,
    {
        let mut distribution = Self::new();
        distribution.extend(names);
        distribution
    }

    /// Record one observation of `name`.
    pub fn add(&mut self, name: &Name) {
        self.add_count(name, 1);
    }

    /// Record `count` observations of `name`. A zero count is ignored.
    pub fn add_count(&mut self, name: &Name, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(name.clone()).or_insert(0) += count;
    }

    /// Record one observation of every name in `names`.
    pub fn extend<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a Name>,
    {
        for name in names {
            self.add(name);
        }
    }

    /// Count recorded for `name` (0 when absent).
    pub fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct names (the support size).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.counts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, u64)> {
        self.counts.iter().map(|(name, &count)| (name, count))
    }

    /// Every observation as its own entry, in name order.
    ///
    /// This is the sampling pool used when drawing names in proportion to
    /// their frequency.
    pub fn flatten(&self) -> Vec<Name> {
        let mut pool = Vec::with_capacity(self.total() as usize);
        for (name, &count) in &self.counts {
            for _ in 0..count {
                pool.push(name.clone());
            }
        }
        pool
    }
}

impl<'a> FromIterator<&'a Name> for CountDistribution {
    fn from_iter<I: IntoIterator<Item = &'a Name>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}

/// Probabilities keyed by name token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    probabilities: BTreeMap<Name, f64>,
}

impl ProbabilityDistribution {
    /// Plain frequency normalization of a count distribution, no smoothing.
    pub fn from_counts(counts: &CountDistribution) -> Self {
        smooth(counts, &[])
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.probabilities.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, f64)> {
        self.probabilities.iter().map(|(name, &p)| (name, p))
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.probabilities.keys()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Whether both distributions are defined over exactly the same names.
    pub fn same_support(&self, other: &ProbabilityDistribution) -> bool {
        self.probabilities.len() == other.probabilities.len()
            && self.names().zip(other.names()).all(|(a, b)| a == b)
    }
}

impl FromIterator<(Name, f64)> for ProbabilityDistribution {
    fn from_iter<I: IntoIterator<Item = (Name, f64)>>(iter: I) -> Self {
        Self {
            probabilities: iter.into_iter().collect(),
        }
    }
}

/// Names present on one side of a reconciled pair but not the other.
///
/// Reconciliation is constructed so this cannot happen; when it does, the
/// pair is still returned and the anomaly travels with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportAnomaly {
    pub only_in_seen: Vec<Name>,
    pub only_in_truth: Vec<Name>,
}

/// Two probability distributions sharing one support.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub seen: ProbabilityDistribution,
    pub truth: ProbabilityDistribution,
    pub anomaly: Option<SupportAnomaly>,
}

/// Align `seen` and `truth` onto a common support with the 1-in-1000
/// smoothing scheme.
///
/// The distribution with more distinct names defines the support (ties go to
/// `truth`). Names the supporting side lacks are added to it with a count of
/// one before smoothing. The result is returned in argument order.
///
/// # Examples
///
/// ```
/// use namegame::distribution::{CountDistribution, reconcile};
/// use namegame::identifiers::Name;
///
/// let seen = CountDistribution::from_names(&[Name::new("ann")]);
/// let truth = CountDistribution::from_names(&[Name::new("ann"), Name::new("bo")]);
/// let pair = reconcile(&seen, &truth);
///
/// assert!(pair.seen.same_support(&pair.truth));
/// assert_eq!(pair.seen.get("bo"), Some(0.001));
/// assert!((pair.seen.get("ann").unwrap() - 0.999).abs() < 1e-12);
/// ```
pub fn reconcile(seen: &CountDistribution, truth: &CountDistribution) -> Reconciled {
    let seen_supports = seen.len() > truth.len();
    let (supporting, compared) = if seen_supports {
        (seen, truth)
    } else {
        (truth, seen)
    };

    let missing_from_compared: Vec<Name> = supporting
        .names()
        .filter(|name| !compared.contains(name.as_str()))
        .cloned()
        .collect();
    let missing_from_supporting: Vec<Name> = compared
        .names()
        .filter(|name| !supporting.contains(name.as_str()))
        .cloned()
        .collect();

    let mut supporting = supporting.clone();
    for name in &missing_from_supporting {
        supporting.add(name);
    }

    let compared_probabilities = smooth(compared, &missing_from_compared);
    let supporting_probabilities = smooth(&supporting, &missing_from_supporting);

    let (seen_probabilities, truth_probabilities) = if seen_supports {
        (supporting_probabilities, compared_probabilities)
    } else {
        (compared_probabilities, supporting_probabilities)
    };

    let anomaly = support_anomaly(&seen_probabilities, &truth_probabilities);
    if let Some(anomaly) = &anomaly {
        warn!(
            only_in_seen = ?anomaly.only_in_seen,
            only_in_truth = ?anomaly.only_in_truth,
            seen = ?seen,
            truth = ?truth,
            "reconciled distributions still differ in support"
        );
    }

    Reconciled {
        seen: seen_probabilities,
        truth: truth_probabilities,
        anomaly,
    }
}

/// Rescale `counts` to make room for `missing` names at the pseudo
/// probability.
fn smooth(counts: &CountDistribution, missing: &[Name]) -> ProbabilityDistribution {
    let mut probabilities: BTreeMap<Name, f64> = missing
        .iter()
        .map(|name| (name.clone(), PSEUDO_PROBABILITY))
        .collect();

    let total = counts.total() as f64;
    let missing_count = missing.len() as f64;
    for (name, count) in counts.iter() {
        let frequency = count as f64 / total;
        let weighted_count = frequency * SYNTHETIC_SAMPLE;
        let adjusted = weighted_count - missing_count * frequency;
        probabilities.insert(name.clone(), adjusted / SYNTHETIC_SAMPLE);
    }

    ProbabilityDistribution { probabilities }
}

fn support_anomaly(
    seen: &ProbabilityDistribution,
    truth: &ProbabilityDistribution,
) -> Option<SupportAnomaly> {
    if seen.same_support(truth) {
        return None;
    }
    let seen_names: BTreeSet<&Name> = seen.names().collect();
    let truth_names: BTreeSet<&Name> = truth.names().collect();
    Some(SupportAnomaly {
        only_in_seen: seen_names
            .difference(&truth_names)
            .map(|name| (*name).clone())
            .collect(),
        only_in_truth: truth_names
            .difference(&seen_names)
            .map(|name| (*name).clone())
            .collect(),
    })
}
