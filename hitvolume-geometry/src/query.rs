//! Containment and aggregation queries over hit sequences.
//!
//! Every query is a single pass over `hits` and a pure function of its
//! arguments. `hits` can be anything that iterates over [`Hit`]s: a slice,
//! a `&Vec`, a `&HitCollection` or an iterator adapter.
//!
//! Distance queries return `None` when no hit is contained. Callers that
//! need the numeric `-1` convention can use [`distance_or_sentinel`].
#![allow(clippy::cast_precision_loss)]

use hitvolume_core::Hit;
use nalgebra::{Point3, Vector3};

use crate::solid::{Placement, Solid};

/// Value reported by [`distance_or_sentinel`] when no hit is contained.
pub const NO_HIT_INSIDE: f64 = -1.0;

/// Folds over the contained hits only.
#[inline]
fn fold_inside<S, I, T, F>(volume: &S, hits: I, init: T, mut f: F) -> T
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
    F: FnMut(T, &I::Item, Placement) -> T,
{
    hits.into_iter().fold(init, |acc, hit| {
        match volume.locate(&hit.position()) {
            Some(placement) => f(acc, &hit, placement),
            None => acc,
        }
    })
}

#[inline]
fn min_margin<S, I>(volume: &S, hits: I, margin: fn(&Placement) -> f64) -> Option<f64>
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    fold_inside(volume, hits, None, |closest: Option<f64>, _, placement| {
        let d = margin(&placement);
        Some(closest.map_or(d, |c| c.min(d)))
    })
}

/// Returns true if `point` lies inside `volume`.
#[inline]
pub fn contains_point<S: Solid + ?Sized>(volume: &S, point: &Point3<f64>) -> bool {
    volume.contains(point)
}

/// Number of hits inside `volume`.
pub fn count_inside<S, I>(volume: &S, hits: I) -> usize
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    fold_inside(volume, hits, 0, |n, _, _| n + 1)
}

/// Returns true if at least one hit is inside `volume`.
pub fn any_inside<S, I>(volume: &S, hits: I) -> bool
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    hits.into_iter().any(|hit| volume.contains(&hit.position()))
}

/// Returns true if `hits` is non-empty and every hit is inside `volume`.
pub fn all_inside<S, I>(volume: &S, hits: I) -> bool
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    let mut seen = false;
    for hit in hits {
        if !volume.contains(&hit.position()) {
            return false;
        }
        seen = true;
    }
    seen
}

/// Total energy of the hits inside `volume`.
pub fn energy_inside<S, I>(volume: &S, hits: I) -> f64
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    fold_inside(volume, hits, 0.0, |sum, hit, _| sum + hit.energy())
}

/// Arithmetic mean position of the hits inside `volume`.
///
/// Returns `None` if no hit is inside.
pub fn mean_position_inside<S, I>(volume: &S, hits: I) -> Option<Point3<f64>>
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    let (sum, n) = fold_inside(
        volume,
        hits,
        (Vector3::<f64>::zeros(), 0_usize),
        |(sum, n), hit, _| (sum + hit.position().coords, n + 1),
    );
    (n > 0).then(|| Point3::from(sum / n as f64))
}

/// Smallest wall margin among the hits inside `volume`.
pub fn closest_distance_to_wall<S, I>(volume: &S, hits: I) -> Option<f64>
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    min_margin(volume, hits, |p| p.wall)
}

/// Smallest distance to the top face among the hits inside `volume`.
pub fn closest_distance_to_top<S, I>(volume: &S, hits: I) -> Option<f64>
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    min_margin(volume, hits, |p| p.top)
}

/// Smallest distance to the bottom face among the hits inside `volume`.
pub fn closest_distance_to_bottom<S, I>(volume: &S, hits: I) -> Option<f64>
where
    S: Solid + ?Sized,
    I: IntoIterator,
    I::Item: Hit,
{
    min_margin(volume, hits, |p| p.bottom)
}

/// Maps an absent distance to [`NO_HIT_INSIDE`].
#[inline]
#[must_use]
pub fn distance_or_sentinel(distance: Option<f64>) -> f64 {
    distance.unwrap_or(NO_HIT_INSIDE)
}
