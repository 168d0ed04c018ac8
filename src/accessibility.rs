//! Accessibility of competing destinations over an OD edge list.
//!
//! For a flow `i → j`, accessibility measures how much opportunity surrounds the
//! destination `j` among the places origin `i` could also have sent flow to:
//!
//! \[
//! A_{ij} = \sum_{k \in C(i),\, k \ne i,\, k \ne j} d_{jk}\, m_k
//! \]
//!
//! where `d_jk` is the distance of edge `j → k`, `m_k` the destination mass on
//! that edge, and `C(i)` the competing destinations of `i`: either every
//! destination listed for `i`, or only those with positive observed flow from `i`.
//!
//! The edge list is expected to be complete (every origin paired with every
//! destination). A missing `j → k` edge contributes nothing.

use crate::marginals::check_nonnegative;
use crate::Result;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

/// One row of an OD edge list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowEdge<Id> {
    pub origin: Id,
    pub destination: Id,
    pub distance: f64,
    /// Observed flow volume on this edge.
    pub weight: f64,
    /// Mass of `destination`.
    pub destination_mass: f64,
}

/// Which destinations count as alternatives for an origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompetingDestinations {
    /// Only destinations the origin actually sends flow to (`weight > 0`).
    #[default]
    Observed,
    /// Every destination listed for the origin.
    All,
}

/// Accessibility `A_ij` for every edge, in input order.
///
/// Errors with [`crate::Error::NegativeInput`] / [`crate::Error::NonFiniteInput`] if
/// any distance, weight or mass is negative or not finite.
pub fn accessibility<Id>(edges: &[FlowEdge<Id>], competing: CompetingDestinations) -> Result<Vec<f64>>
where
    Id: Eq + Hash,
{
    check_nonnegative("edge distances", edges.iter().map(|e| &e.distance))?;
    check_nonnegative("edge weights", edges.iter().map(|e| &e.weight))?;
    check_nonnegative("destination masses", edges.iter().map(|e| &e.destination_mass))?;

    // First occurrence wins for duplicated pairs.
    let mut by_pair: HashMap<(&Id, &Id), &FlowEdge<Id>> = HashMap::with_capacity(edges.len());
    for e in edges {
        by_pair.entry((&e.origin, &e.destination)).or_insert(e);
    }

    // Competing destinations per origin, deduplicated, in first-seen order.
    let mut alternatives: HashMap<&Id, Vec<&Id>> = HashMap::new();
    let mut seen: HashSet<(&Id, &Id)> = HashSet::new();
    for e in edges {
        let counts = match competing {
            CompetingDestinations::All => true,
            CompetingDestinations::Observed => e.weight > 0.0,
        };
        if counts && seen.insert((&e.origin, &e.destination)) {
            alternatives.entry(&e.origin).or_default().push(&e.destination);
        }
    }

    let out: Vec<f64> = edges
        .iter()
        .map(|e| {
            let Some(ks) = alternatives.get(&e.origin) else {
                return 0.0;
            };
            ks.iter()
                .filter(|&&k| k != &e.origin && k != &e.destination)
                .filter_map(|&k| by_pair.get(&(&e.destination, k)))
                .map(|jk| jk.distance * jk.destination_mass)
                .sum::<f64>()
        })
        .collect();

    debug!(edges = edges.len(), origins = alternatives.len(), ?competing, "accessibility computed");
    Ok(out)
}
