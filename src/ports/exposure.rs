//! Exposure simulator port - abstraction over alternate-source strategies
//!
//! Every strategy answers the same question for one ego: which names would
//! this participant have seen had the unstructured channel shown names from
//! somebody else, and how far would that leave them from the population?

use rand::RngCore;

use crate::{
    Result,
    exposure::{ExposureContext, ExposureOutcome, SimulatorKind},
    types::ParticipantId,
};

/// Unified interface for the exposure strategies.
///
/// Implementations choose the alternate sources and hand the substituted
/// history to [`ExposureContext`], which owns the shared divergence
/// bookkeeping.
///
/// # Examples
///
/// ```no_run
/// use namegame::exposure::{ExposureContext, run};
/// use namegame::ports::ExposureSimulator;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// fn compare(simulator: &dyn ExposureSimulator, context: &ExposureContext<'_>) {
///     let mut rng = StdRng::seed_from_u64(42);
///     let report = run(simulator, context, &mut rng).unwrap();
///     println!("{} participants", report.outcomes.len());
/// }
/// ```
pub trait ExposureSimulator {
    fn kind(&self) -> SimulatorKind;

    /// Simulate the alternate exposure for `participant`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InsufficientAlternates`] when the strategy
    /// cannot find enough alternate sources, and
    /// [`crate::Error::UnknownParticipant`] when `participant` did not play.
    fn simulate(
        &self,
        context: &ExposureContext<'_>,
        participant: ParticipantId,
        rng: &mut dyn RngCore,
    ) -> Result<ExposureOutcome>;
}
