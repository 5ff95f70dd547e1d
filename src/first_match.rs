//! When did participants first see the names they went on to match on?
//!
//! A first match is the first round in which a participant and their partner
//! played the same name. For each one we look back at which channel showed
//! that name earlier: the partner's plays (structured) or the extra names
//! (unstructured).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    game::{Game, ParticipantRecord},
    identifiers::Name,
};

/// Placeholder recorded when a participant did not enter a name.
pub const NO_NAME: &str = "(none)";

/// Earlier sightings of a name a participant first matched on. Rounds are
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorExposure {
    pub round: usize,
    pub name: Name,
    /// Earlier rounds in which the partner played the name.
    pub structured: Vec<usize>,
    /// Earlier rounds in which the name was among the extra names, once per
    /// sighting.
    pub unstructured: Vec<usize>,
}

impl PriorExposure {
    /// Seen through the unstructured channel and never through a partner.
    pub fn only_unstructured(&self) -> bool {
        self.structured.is_empty() && !self.unstructured.is_empty()
    }

    /// Seen through the unstructured channel strictly before any partner
    /// played it. Includes [`Self::only_unstructured`].
    pub fn unstructured_before_structured(&self) -> bool {
        match (self.unstructured.first(), self.structured.first()) {
            (Some(_), None) => true,
            (Some(unstructured), Some(structured)) => unstructured < structured,
            (None, _) => false,
        }
    }
}

/// Rounds (1-based) in which `record` matched on a name for the first time.
pub fn first_matches(record: &ParticipantRecord) -> Vec<(usize, Name)> {
    let mut matched = BTreeSet::new();
    record
        .names_played
        .iter()
        .zip(&record.partner_names)
        .enumerate()
        .filter(|(_, (own, partner))| own == partner && own.as_str() != NO_NAME)
        .filter_map(|(index, (own, _))| {
            matched
                .insert(own.clone())
                .then(|| (index + 1, own.clone()))
        })
        .collect()
}

/// Prior sightings for every first match of `record`.
pub fn prior_exposures(record: &ParticipantRecord) -> Vec<PriorExposure> {
    first_matches(record)
        .into_iter()
        .map(|(round, name)| {
            let earlier = round - 1;
            let structured = record.partner_names[..earlier]
                .iter()
                .enumerate()
                .filter(|(_, partner)| **partner == name)
                .map(|(index, _)| index + 1)
                .collect();
            let target = &name;
            let unstructured = record.extra_names[..earlier]
                .iter()
                .enumerate()
                .flat_map(|(index, names)| {
                    names
                        .iter()
                        .filter(move |extra| *extra == target)
                        .map(move |_| index + 1)
                })
                .collect();
            PriorExposure {
                round,
                name,
                structured,
                unstructured,
            }
        })
        .collect()
}

/// Share of a participant's first matches by exposure pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantTiming {
    pub matches: usize,
    pub unstructured_before_structured: usize,
    pub only_unstructured: usize,
}

impl ParticipantTiming {
    pub fn of(record: &ParticipantRecord) -> Self {
        prior_exposures(record)
            .iter()
            .fold(Self::default(), |mut timing, exposure| {
                timing.matches += 1;
                if exposure.unstructured_before_structured() {
                    timing.unstructured_before_structured += 1;
                }
                if exposure.only_unstructured() {
                    timing.only_unstructured += 1;
                }
                timing
            })
    }
}

/// Game-level exposure timing: the per-participant fractions summed and
/// divided by the number of participants. Participants without a match add
/// nothing to the sum but still count in the denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureTiming {
    pub unstructured_before_structured: f64,
    pub only_unstructured: f64,
}

impl ExposureTiming {
    pub fn of(game: &Game) -> Self {
        let participants = game.num_participants();
        if participants == 0 {
            return Self::default();
        }

        let mut timing = game
            .participants()
            .map(ParticipantTiming::of)
            .filter(|timing| timing.matches > 0)
            .fold(Self::default(), |mut acc, participant| {
                let matches = participant.matches as f64;
                acc.unstructured_before_structured +=
                    participant.unstructured_before_structured as f64 / matches;
                acc.only_unstructured += participant.only_unstructured as f64 / matches;
                acc
            });
        timing.unstructured_before_structured /= participants as f64;
        timing.only_unstructured /= participants as f64;
        timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<Name> {
        values.iter().map(Name::new).collect()
    }

    fn record(played: &[&str], partners: &[&str], extra: &[&[&str]]) -> ParticipantRecord {
        ParticipantRecord {
            id: 0,
            names_played: names(played),
            partner_names: names(partners),
            partners: vec![1; played.len()],
            extra_names: extra.iter().map(|round| names(round)).collect(),
        }
    }

    #[test]
    fn only_the_first_match_per_name_counts() {
        let record = record(
            &["a", "jon", "jon", "(none)", "al"],
            &["b", "jon", "jon", "(none)", "al"],
            &[&[], &[], &[], &[], &[]],
        );
        assert_eq!(
            first_matches(&record),
            vec![(2, Name::new("jon")), (5, Name::new("al"))]
        );
    }

    #[test]
    fn sightings_are_collected_from_earlier_rounds_only() {
        let record = record(
            &["x", "y", "jon"],
            &["jon", "z", "jon"],
            &[&["jon", "jon"], &[], &["jon"]],
        );
        let exposures = prior_exposures(&record);
        assert_eq!(exposures.len(), 1);
        assert_eq!(exposures[0].structured, vec![1]);
        assert_eq!(exposures[0].unstructured, vec![1, 1]);
        assert!(!exposures[0].unstructured_before_structured());
    }

    #[test]
    fn participant_fractions_feed_the_game_average() {
        let timing = ParticipantTiming::of(&record(
            &["x", "jon", "y", "al"],
            &["z", "jon", "al", "al"],
            &[&["jon"], &[], &[], &[]],
        ));
        assert_eq!(
            timing,
            ParticipantTiming {
                matches: 2,
                unstructured_before_structured: 1,
                only_unstructured: 1,
            }
        );
    }
}
