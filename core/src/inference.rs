//! Derives the `potential` status from the positive-artist relation graph.
//!
//! A neutral artist is promoted when exactly two positive artists list it as related
//! and no other neutral artist is listed by that same pair. A potential artist that no
//! longer satisfies this is reverted to neutral.
//!
//! A cycle is planned against one snapshot of the registry and applied afterwards, so the
//! order in which artists are visited never changes the outcome.

use crate::artist::{Artist, Status};
use crate::error::RegistryError;
use crate::registry::Registry;
use rustc_hash::FxHashMap;

type PositivePair = (String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub artist_id: String,
    /// Positive artists listing this artist as related, in registry order
    pub referenced_by: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceReport {
    pub promoted: Vec<StatusChange>,
    pub demoted: Vec<StatusChange>,
}

impl InferenceReport {
    pub fn is_empty(&self) -> bool {
        self.promoted.is_empty() && self.demoted.is_empty()
    }
}

pub fn run_cycle(registry: &mut Registry) -> Result<InferenceReport, RegistryError> {
    let report = plan_cycle(registry);
    apply(registry, &report)?;
    Ok(report)
}

pub fn plan_cycle(registry: &Registry) -> InferenceReport {
    let positives: Vec<&Artist> = registry
        .iter()
        .filter(|artist| artist.status == Status::Positive)
        .collect();

    let neutral_refs: Vec<(&Artist, Vec<String>)> = registry
        .iter()
        .filter(|artist| is_neutral_label(artist.status))
        .map(|artist| (artist, referencing_positives(&positives, &artist.id)))
        .collect();

    let pair_counts = count_pairs(&neutral_refs);
    let mut report = InferenceReport::default();

    for (artist, refs) in neutral_refs {
        let has_unique_pair = pair_key(&refs)
            .and_then(|pair| pair_counts.get(&pair))
            .is_some_and(|&count| count == 1);

        let change = || StatusChange {
            artist_id: artist.id.clone(),
            referenced_by: refs.clone(),
        };

        match artist.status {
            Status::Neutral if has_unique_pair => report.promoted.push(change()),
            Status::Potential if !has_unique_pair => report.demoted.push(change()),
            _ => {}
        }
    }

    report
}

/// Writes a planned cycle. Fails on the first change naming an artist the registry lacks.
pub fn apply(registry: &mut Registry, report: &InferenceReport) -> Result<(), RegistryError> {
    let updates = report
        .promoted
        .iter()
        .map(|change| (change, Status::Potential))
        .chain(report.demoted.iter().map(|change| (change, Status::Neutral)));

    for (change, status) in updates {
        registry.set_status(&change.artist_id, status)?;
        tracing::info!(
            artist = %change.artist_id,
            status = %status,
            referenced_by = ?change.referenced_by,
            "inferred status change"
        );
    }

    Ok(())
}

/// Positive artists whose related set contains `artist_id`, in registry order.
pub fn references(registry: &Registry, artist_id: &str) -> Vec<String> {
    let positives: Vec<&Artist> = registry
        .iter()
        .filter(|artist| artist.status == Status::Positive)
        .collect();
    referencing_positives(&positives, artist_id)
}

fn referencing_positives(positives: &[&Artist], artist_id: &str) -> Vec<String> {
    positives
        .iter()
        .filter(|positive| positive.lists_as_related(artist_id))
        .map(|positive| positive.id.clone())
        .collect()
}

// Potential is a refinement of neutral, so both compete for the same pair.
fn is_neutral_label(status: Status) -> bool {
    matches!(status, Status::Neutral | Status::Potential)
}

fn count_pairs(neutral_refs: &[(&Artist, Vec<String>)]) -> FxHashMap<PositivePair, usize> {
    let mut pair_counts = FxHashMap::default();
    for (_, refs) in neutral_refs {
        if let Some(pair) = pair_key(refs) {
            *pair_counts.entry(pair).or_insert(0) += 1;
        }
    }
    pair_counts
}

fn pair_key(refs: &[String]) -> Option<PositivePair> {
    match refs {
        [first, second] if first <= second => Some((first.clone(), second.clone())),
        [first, second] => Some((second.clone(), first.clone())),
        _ => None,
    }
}
