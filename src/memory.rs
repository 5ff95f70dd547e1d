//! Round-indexed observation histories and the bounded memory window.
//!
//! A participant is modelled as remembering only the names observed in the
//! most recent `W` rounds. Rounds are numbered from 1; series produced here
//! are indexed from 0, so `series[r - 1]` belongs to round `r`.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    distribution::CountDistribution,
    identifiers::Name,
    types::ROUNDS,
};

/// Names a participant could have encountered, per round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationHistory {
    rounds: Vec<Vec<Name>>,
}

impl ObservationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the observations of the next round.
    pub fn push_round(&mut self, names: Vec<Name>) {
        self.rounds.push(names);
    }

    /// Number of rounds recorded.
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Observations of round `round` (1-based).
    pub fn round(&self, round: usize) -> Option<&[Name]> {
        round
            .checked_sub(1)
            .and_then(|index| self.rounds.get(index))
            .map(Vec::as_slice)
    }

    pub fn rounds(&self) -> impl Iterator<Item = &[Name]> {
        self.rounds.iter().map(Vec::as_slice)
    }

    /// A copy of this history with `additions[r]` appended to round `r + 1`.
    ///
    /// Rounds beyond the end of `additions` are copied unchanged.
    pub fn with_additions(&self, additions: &[Vec<Name>]) -> Self {
        let rounds = self
            .rounds
            .iter()
            .enumerate()
            .map(|(index, names)| {
                let mut names = names.clone();
                if let Some(extra) = additions.get(index) {
                    names.extend(extra.iter().cloned());
                }
                names
            })
            .collect();
        Self { rounds }
    }
}

impl FromIterator<Vec<Name>> for ObservationHistory {
    fn from_iter<I: IntoIterator<Item = Vec<Name>>>(iter: I) -> Self {
        Self {
            rounds: iter.into_iter().collect(),
        }
    }
}

/// Bounded-lookback memory over an observation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryWindow {
    length: usize,
}

impl MemoryWindow {
    /// A window remembering the last `length` rounds, current round included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidConfiguration {
                message: "memory window must cover at least one round".to_string(),
            });
        }
        Ok(Self { length })
    }

    /// A window that never forgets within a standard game.
    pub fn full() -> Self {
        Self { length: ROUNDS }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// First round (1-based) remembered at `round`.
    pub fn start(&self, round: usize) -> usize {
        (round + 1).saturating_sub(self.length).max(1)
    }

    /// Count distribution remembered at every round.
    ///
    /// Entry `r - 1` counts all observations in rounds
    /// `max(1, r - W + 1) ..= r`.
    ///
    /// # Examples
    ///
    /// ```
    /// use namegame::identifiers::Name;
    /// use namegame::memory::{MemoryWindow, ObservationHistory};
    ///
    /// let history: ObservationHistory = vec![
    ///     vec![Name::new("a")],
    ///     vec![Name::new("b")],
    ///     vec![Name::new("c")],
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let windows = MemoryWindow::new(2).unwrap().apply(&history);
    /// assert_eq!(windows[2].count("b"), 1);
    /// assert_eq!(windows[2].count("a"), 0);
    /// ```
    pub fn apply(&self, history: &ObservationHistory) -> Vec<CountDistribution> {
        (1..=history.num_rounds())
            .map(|round| {
                let start = self.start(round);
                history.rounds[start - 1..round]
                    .iter()
                    .flatten()
                    .collect()
            })
            .collect()
    }
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(rounds: &[&[&str]]) -> ObservationHistory {
        rounds
            .iter()
            .map(|names| names.iter().map(Name::new).collect())
            .collect()
    }

    #[test]
    fn zero_length_window_is_rejected() {
        assert!(matches!(
            MemoryWindow::new(0),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn window_start_is_clipped_at_round_one() {
        let window = MemoryWindow::new(3).unwrap();
        assert_eq!(window.start(1), 1);
        assert_eq!(window.start(3), 1);
        assert_eq!(window.start(4), 2);
        assert_eq!(window.start(10), 8);
    }

    #[test]
    fn single_round_window_only_sees_current_round() {
        let history = history(&[&["a", "b"], &["b", "c"], &["c", "c"]]);
        let windows = MemoryWindow::new(1).unwrap().apply(&history);
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[1].count("b"), 1);
        assert_eq!(windows[1].count("a"), 0);
        assert_eq!(windows[2].count("c"), 2);
        assert_eq!(windows[2].len(), 1);
    }

    #[test]
    fn full_window_is_cumulative() {
        let history = history(&[&["a"], &["a", "b"], &["c"]]);
        let windows = MemoryWindow::full().apply(&history);
        assert_eq!(windows[2].count("a"), 2);
        assert_eq!(windows[2].total(), 4);
    }

    #[test]
    fn additions_are_appended_per_round() {
        let base = history(&[&["a"], &["b"]]);
        let extended = base.with_additions(&[vec![Name::new("x")]]);
        assert_eq!(extended.round(1).unwrap(), &[Name::new("a"), Name::new("x")]);
        assert_eq!(extended.round(2).unwrap(), &[Name::new("b")]);
        assert!(extended.round(0).is_none());
        assert!(extended.round(3).is_none());
    }
}
