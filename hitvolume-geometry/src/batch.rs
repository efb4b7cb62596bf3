//! Parallel evaluation of independent volume queries.
//!
//! Queries never mutate their inputs, so one hit sequence can be shared
//! across threads while several volumes are evaluated against it, and one
//! volume can be evaluated against many events at once.

use hitvolume_core::{Hit, HitCollection};
use rayon::prelude::*;

use crate::solid::Solid;
use crate::summary::{summarize, VolumeSummary};

/// Summarizes each volume against the same hits. Output follows `volumes`.
pub fn summarize_volumes<S, H>(volumes: &[S], hits: &[H]) -> Vec<VolumeSummary>
where
    S: Solid,
    H: Hit,
{
    log::debug!(
        "summarizing {} volumes over {} hits",
        volumes.len(),
        hits.len()
    );
    volumes
        .par_iter()
        .map(|volume| summarize(volume, hits))
        .collect()
}

/// Summarizes one volume against each collection. Output follows `collections`.
pub fn summarize_collections<S, H>(
    volume: &S,
    collections: &[HitCollection<H>],
) -> Vec<VolumeSummary>
where
    S: Solid + ?Sized,
    H: Hit,
{
    log::debug!("summarizing one volume over {} collections", collections.len());
    collections
        .par_iter()
        .map(|hits| summarize(volume, hits))
        .collect()
}

/// Counts the hits inside each volume. Output follows `volumes`.
pub fn count_inside_each<S, H>(volumes: &[S], hits: &[H]) -> Vec<usize>
where
    S: Solid,
    H: Hit,
{
    volumes
        .par_iter()
        .map(|volume| crate::query::count_inside(volume, hits))
        .collect()
}
