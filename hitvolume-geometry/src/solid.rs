//! Common interface of the finite solids.

use hitvolume_core::{Error, Result};
use nalgebra::{Point3, Vector3};

/// Where a contained point sits inside a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Distance to the lateral surface, measured in the cross-section.
    pub wall: f64,
    /// Distance along the axis to the top face.
    pub top: f64,
    /// Distance along the axis to the bottom face.
    pub bottom: f64,
}

/// A finite solid bounded by two end faces perpendicular to its axis.
///
/// The bottom face is centered on [`Solid::base`], the top face on
/// [`Solid::top`]. All boundaries are inclusive.
pub trait Solid: Send + Sync {
    /// Center of the bottom face.
    fn base(&self) -> Point3<f64>;

    /// Center of the top face.
    fn top(&self) -> Point3<f64>;

    /// Distance between the two end faces.
    fn length(&self) -> f64;

    /// Largest possible wall margin of a contained point.
    fn max_wall_margin(&self) -> f64;

    /// Locates `point` inside the solid, or returns `None` if it lies outside.
    ///
    /// Points with an undetermined (NaN) coordinate are always outside.
    fn locate(&self, point: &Point3<f64>) -> Option<Placement>;

    /// Containment predicate.
    #[inline]
    fn contains(&self, point: &Point3<f64>) -> bool {
        self.locate(point).is_some()
    }
}

/// Validates the end centers of a solid and returns its unit axis and length.
pub(crate) fn unit_axis(base: &Point3<f64>, top: &Point3<f64>) -> Result<(Vector3<f64>, f64)> {
    if !base.iter().all(|c| c.is_finite()) {
        log::debug!("rejecting volume with non-finite base {base:?}");
        return Err(Error::NonFinite("base"));
    }
    if !top.iter().all(|c| c.is_finite()) {
        log::debug!("rejecting volume with non-finite top {top:?}");
        return Err(Error::NonFinite("top"));
    }

    let axis = top - base;
    let length = axis.norm();
    if length > 0.0 && length.is_finite() {
        Ok((axis / length, length))
    } else {
        log::debug!("rejecting volume with degenerate axis, length {length}");
        Err(Error::DegenerateAxis { length })
    }
}

/// Relative slack on the axial range, absorbing rounding of points that lie
/// exactly on a face of a tilted solid.
const AXIAL_TOLERANCE: f64 = 1e-12;

/// Axial position of `point` and its displacement from `base`, if the
/// point lies between the two end faces.
///
/// The returned position is clamped to `0..=length`.
#[inline]
pub(crate) fn axial_position(
    base: &Point3<f64>,
    axis: &Vector3<f64>,
    length: f64,
    point: &Point3<f64>,
) -> Option<(Vector3<f64>, f64)> {
    let d = point - base;
    let l = d.dot(axis);
    let slack = length * AXIAL_TOLERANCE;
    // NaN fails the range test.
    (-slack..=length + slack)
        .contains(&l)
        .then(|| (d, l.clamp(0.0, length)))
}
