//! Single-pass evaluation of every aggregate for one volume.
#![allow(clippy::cast_precision_loss)]

use hitvolume_core::Hit;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solid::Solid;

/// All aggregates of one volume over one hit sequence.
///
/// Each field equals the result of the matching function in
/// [`crate::query`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeSummary {
    /// Number of hits examined.
    pub hits_total: usize,
    /// Number of hits inside the volume.
    pub hits_inside: usize,
    /// Total energy inside the volume.
    pub energy: f64,
    /// Arithmetic mean position of the contained hits.
    pub mean_position: Option<Point3<f64>>,
    /// Smallest wall margin of a contained hit.
    pub closest_to_wall: Option<f64>,
    /// Smallest top-face margin of a contained hit.
    pub closest_to_top: Option<f64>,
    /// Smallest bottom-face margin of a contained hit.
    pub closest_to_bottom: Option<f64>,
}

impl VolumeSummary {
    /// Returns true if at least one hit is inside.
    #[must_use]
    pub fn any_inside(&self) -> bool {
        self.hits_inside > 0
    }

    /// Returns true if there are hits and all of them are inside.
    #[must_use]
    pub fn all_inside(&self) -> bool {
        self.hits_total > 0 && self.hits_inside == self.hits_total
    }
}

fn keep_min(slot: &mut Option<f64>, value: f64) {
    *slot = Some(slot.map_or(value, |current| current.min(value)));
}

/// Evaluates every aggregate of `volume` over `hits` in one pass.
pub fn summarize<S, I>(volume: &S, hits: I) -> VolumeSummary
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    let mut summary = VolumeSummary::default();
    let mut position_sum = Vector3::<f64>::zeros();

    for hit in hits {
        summary.hits_total += 1;
        let position = hit.position();
        let Some(placement) = volume.locate(&position) else {
            continue;
        };
        summary.hits_inside += 1;
        summary.energy += hit.energy();
        position_sum += position.coords;
        keep_min(&mut summary.closest_to_wall, placement.wall);
        keep_min(&mut summary.closest_to_top, placement.top);
        keep_min(&mut summary.closest_to_bottom, placement.bottom);
    }

    if summary.hits_inside > 0 {
        summary.mean_position = Some(Point3::from(position_sum / summary.hits_inside as f64));
    }
    summary
}
