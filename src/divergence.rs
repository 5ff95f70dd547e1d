//! Divergence between a participant's seen distribution and the true one.
//!
//! Both functions take reconciled distributions: the support of `seen` and
//! `truth` must be identical, otherwise they return
//! [`Error::SupportMismatch`].

use crate::{
    Error, Result,
    distribution::{CountDistribution, ProbabilityDistribution, reconcile},
    types::DivergenceKind,
};

/// Kullback-Leibler divergence of `seen` from `truth`.
///
/// Computed as `Σ −truth[k] · ln(seen[k] / truth[k])`, which is
/// `KL(truth ‖ seen)` with the true distribution as the reference.
///
/// # Errors
///
/// Returns [`Error::SupportMismatch`] if the supports differ.
pub fn kl(seen: &ProbabilityDistribution, truth: &ProbabilityDistribution) -> Result<f64> {
    ensure_same_support(seen, truth)?;

    let mut divergence = 0.0;
    for ((_, q), (_, p)) in seen.iter().zip(truth.iter()) {
        divergence -= p * (q / p).ln();
    }
    Ok(divergence)
}

/// Jensen-Shannon divergence between `seen` and `truth`.
///
/// Uses the midpoint `M = (seen + truth) / 2` and averages the two
/// KL-style terms against it. Terms where either probability is exactly zero
/// are skipped.
///
/// # Errors
///
/// Returns [`Error::SupportMismatch`] if the supports differ.
///
/// # Examples
///
/// ```
/// use namegame::divergence::js;
/// use namegame::distribution::ProbabilityDistribution;
/// use namegame::identifiers::Name;
///
/// let p: ProbabilityDistribution = [(Name::new("a"), 0.5), (Name::new("b"), 0.5)]
///     .into_iter()
///     .collect();
/// assert_eq!(js(&p, &p).unwrap(), 0.0);
/// ```
pub fn js(seen: &ProbabilityDistribution, truth: &ProbabilityDistribution) -> Result<f64> {
    ensure_same_support(seen, truth)?;

    let midpoint: Vec<f64> = seen
        .iter()
        .zip(truth.iter())
        .map(|((_, p), (_, q))| (p + q) / 2.0)
        .collect();

    let mut seen_term = 0.0;
    for ((_, p), &m) in seen.iter().zip(&midpoint) {
        if m != 0.0 && p != 0.0 {
            seen_term -= p * (m / p).ln();
        }
    }

    let mut truth_term = 0.0;
    for ((_, p), &m) in truth.iter().zip(&midpoint) {
        if m != 0.0 && p != 0.0 {
            truth_term -= p * (m / p).ln();
        }
    }

    Ok(seen_term * 0.5 + truth_term * 0.5)
}

impl DivergenceKind {
    /// Compute this divergence on an already reconciled pair.
    pub fn compute(
        self,
        seen: &ProbabilityDistribution,
        truth: &ProbabilityDistribution,
    ) -> Result<f64> {
        match self {
            DivergenceKind::Kl => kl(seen, truth),
            DivergenceKind::Js => js(seen, truth),
        }
    }

    /// Reconcile two count distributions and compute this divergence.
    pub fn between_counts(self, seen: &CountDistribution, truth: &CountDistribution) -> Result<f64> {
        let pair = reconcile(seen, truth);
        self.compute(&pair.seen, &pair.truth)
    }
}

fn ensure_same_support(
    seen: &ProbabilityDistribution,
    truth: &ProbabilityDistribution,
) -> Result<()> {
    if seen.same_support(truth) {
        Ok(())
    } else {
        Err(Error::SupportMismatch {
            seen: seen.len(),
            truth: truth.len(),
        })
    }
}
