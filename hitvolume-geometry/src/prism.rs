//! Finite rectangular prism with a rotated cross-section.

use hitvolume_core::{Error, Result};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solid::{axial_position, unit_axis, Placement, Solid};

/// Plain prism parameters, validated by [`Prism::try_from`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrismParams {
    /// Center of the bottom face.
    pub base: Point3<f64>,
    /// Center of the top face.
    pub top: Point3<f64>,
    /// Full width of the cross-section along its local u direction.
    pub size_x: f64,
    /// Full width of the cross-section along its local v direction.
    pub size_y: f64,
    /// Rotation of the cross-section about the axis, in radians.
    #[cfg_attr(feature = "serde", serde(default))]
    pub theta: f64,
}

/// Coordinates of a point in a prism's own frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalCoordinates {
    /// Offset along the rotated u direction of the cross-section.
    pub u: f64,
    /// Offset along the rotated v direction of the cross-section.
    pub v: f64,
    /// Offset along the axis, from the bottom face.
    pub axial: f64,
}

/// A finite prism with a `size_x` by `size_y` rectangular cross-section.
///
/// The cross-section frame is built from the axis: `u` is the world +x
/// direction projected onto the cross-section plane (+y when the axis is
/// close to x) and `v = axis × u`. For an axis along +z this is the world
/// (x, y) pair. The rectangle is then rotated counter-clockwise about the
/// axis by `theta`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PrismParams", into = "PrismParams"))]
pub struct Prism {
    base: Point3<f64>,
    top: Point3<f64>,
    size_x: f64,
    size_y: f64,
    theta: f64,
    axis: Vector3<f64>,
    length: f64,
    u: Vector3<f64>,
    v: Vector3<f64>,
    sin_theta: f64,
    cos_theta: f64,
}

impl Prism {
    /// Creates a prism.
    ///
    /// # Errors
    /// Fails if the face centers coincide or are not finite, if either
    /// size is not a positive finite number, or if `theta` is not finite.
    pub fn new(
        base: Point3<f64>,
        top: Point3<f64>,
        size_x: f64,
        size_y: f64,
        theta: f64,
    ) -> Result<Self> {
        let (axis, length) = unit_axis(&base, &top)?;
        let valid = |s: f64| s > 0.0 && s.is_finite();
        if !(valid(size_x) && valid(size_y)) {
            log::debug!("rejecting prism with cross-section {size_x} x {size_y}");
            return Err(Error::InvalidSize { size_x, size_y });
        }
        if !theta.is_finite() {
            log::debug!("rejecting prism with rotation {theta}");
            return Err(Error::NonFinite("theta"));
        }

        let reference = if axis.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let u = (reference - axis * axis.dot(&reference)).normalize();
        let v = axis.cross(&u);
        let (sin_theta, cos_theta) = theta.sin_cos();

        Ok(Self {
            base,
            top,
            size_x,
            size_y,
            theta,
            axis,
            length,
            u,
            v,
            sin_theta,
            cos_theta,
        })
    }

    /// Creates a prism whose cross-section is not rotated.
    ///
    /// # Errors
    /// Same conditions as [`Prism::new`].
    pub fn axis_aligned(
        base: Point3<f64>,
        top: Point3<f64>,
        size_x: f64,
        size_y: f64,
    ) -> Result<Self> {
        Self::new(base, top, size_x, size_y, 0.0)
    }

    /// Returns a copy with the cross-section rotated by `theta` radians.
    ///
    /// # Errors
    /// Fails if `theta` is not finite.
    pub fn with_rotation(self, theta: f64) -> Result<Self> {
        Self::new(self.base, self.top, self.size_x, self.size_y, theta)
    }

    /// Cross-section width along u.
    #[must_use]
    pub fn size_x(&self) -> f64 {
        self.size_x
    }

    /// Cross-section width along v.
    #[must_use]
    pub fn size_y(&self) -> f64 {
        self.size_y
    }

    /// Rotation of the cross-section in radians.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Unit vector from the bottom face center to the top face center.
    #[must_use]
    pub fn axis(&self) -> Vector3<f64> {
        self.axis
    }

    /// Expresses `point` in the prism frame.
    #[must_use]
    pub fn local_coordinates(&self, point: &Point3<f64>) -> LocalCoordinates {
        let d = point - self.base;
        self.rotate_into_frame(&d, d.dot(&self.axis))
    }

    #[inline]
    fn rotate_into_frame(&self, d: &Vector3<f64>, axial: f64) -> LocalCoordinates {
        let su = d.dot(&self.u);
        let sv = d.dot(&self.v);
        LocalCoordinates {
            u: self.cos_theta * su + self.sin_theta * sv,
            v: self.cos_theta * sv - self.sin_theta * su,
            axial,
        }
    }
}

impl Solid for Prism {
    fn base(&self) -> Point3<f64> {
        self.base
    }

    fn top(&self) -> Point3<f64> {
        self.top
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn max_wall_margin(&self) -> f64 {
        (self.size_x / 2.0).max(self.size_y / 2.0)
    }

    /// The wall margin is the smaller of the distances to the two pairs of
    /// side faces, measured in the rotated frame.
    fn locate(&self, point: &Point3<f64>) -> Option<Placement> {
        let (d, l) = axial_position(&self.base, &self.axis, self.length, point)?;
        let local = self.rotate_into_frame(&d, l);
        let dx = self.size_x / 2.0 - local.u.abs();
        let dy = self.size_y / 2.0 - local.v.abs();
        (dx >= 0.0 && dy >= 0.0).then(|| Placement {
            wall: dx.min(dy),
            top: self.length - l,
            bottom: l,
        })
    }
}

impl TryFrom<PrismParams> for Prism {
    type Error = Error;

    fn try_from(params: PrismParams) -> Result<Self> {
        Self::new(
            params.base,
            params.top,
            params.size_x,
            params.size_y,
            params.theta,
        )
    }
}

impl From<Prism> for PrismParams {
    fn from(prism: Prism) -> Self {
        Self {
            base: prism.base,
            top: prism.top,
            size_x: prism.size_x,
            size_y: prism.size_y,
            theta: prism.theta,
        }
    }
}
