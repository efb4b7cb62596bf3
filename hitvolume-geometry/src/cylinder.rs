//! Finite right cylinder.

use hitvolume_core::{Error, Result};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solid::{axial_position, unit_axis, Placement, Solid};

/// Plain cylinder parameters, validated by [`Cylinder::try_from`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CylinderParams {
    /// Center of the bottom face.
    pub base: Point3<f64>,
    /// Center of the top face.
    pub top: Point3<f64>,
    /// Radius of the cross-section.
    pub radius: f64,
}

/// A finite right cylinder between two face centers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CylinderParams", into = "CylinderParams")
)]
pub struct Cylinder {
    base: Point3<f64>,
    top: Point3<f64>,
    radius: f64,
    axis: Vector3<f64>,
    length: f64,
}

impl Cylinder {
    /// Creates a cylinder.
    ///
    /// # Errors
    /// Fails if the face centers coincide or are not finite, or if the
    /// radius is not a positive finite number.
    pub fn new(base: Point3<f64>, top: Point3<f64>, radius: f64) -> Result<Self> {
        let (axis, length) = unit_axis(&base, &top)?;
        if !(radius > 0.0 && radius.is_finite()) {
            log::debug!("rejecting cylinder with radius {radius}");
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self {
            base,
            top,
            radius,
            axis,
            length,
        })
    }

    /// Radius of the cross-section.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit vector from the bottom face center to the top face center.
    #[must_use]
    pub fn axis(&self) -> Vector3<f64> {
        self.axis
    }
}

impl Solid for Cylinder {
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
        self.radius
    }

    /// The wall margin is `sqrt(radius² - |P - base|² + l²)`, where `l` is
    /// the axial position of `P`.
    fn locate(&self, point: &Point3<f64>) -> Option<Placement> {
        let (d, l) = axial_position(&self.base, &self.axis, self.length, point)?;
        let perp2 = d.norm_squared() - l * l;
        let r2 = self.radius * self.radius;
        (perp2 <= r2).then(|| Placement {
            wall: (r2 - perp2).max(0.0).sqrt(),
            top: self.length - l,
            bottom: l,
        })
    }
}

impl TryFrom<CylinderParams> for Cylinder {
    type Error = Error;

    fn try_from(params: CylinderParams) -> Result<Self> {
        Self::new(params.base, params.top, params.radius)
    }
}

impl From<Cylinder> for CylinderParams {
    fn from(cylinder: Cylinder) -> Self {
        Self {
            base: cylinder.base,
            top: cylinder.top,
            radius: cylinder.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vertical() -> Cylinder {
        Cylinder::new(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 5.0).unwrap()
    }

    #[test]
    fn test_center_point() {
        let p = vertical().locate(&Point3::new(0.0, 0.0, 5.0)).unwrap();
        assert_relative_eq!(p.wall, 5.0);
        assert_relative_eq!(p.top, 5.0);
        assert_relative_eq!(p.bottom, 5.0);
    }

    #[test]
    fn test_outside_radially() {
        assert!(!vertical().contains(&Point3::new(10.0, 0.0, 5.0)));
        assert!(!vertical().contains(&Point3::new(3.6, 3.6, 5.0)));
        assert!(vertical().contains(&Point3::new(3.5, 3.5, 5.0)));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let c = vertical();
        assert!(c.contains(&Point3::new(5.0, 0.0, 5.0)));
        assert!(c.contains(&Point3::new(0.0, -5.0, 0.0)));
        assert!(c.contains(&Point3::new(0.0, 0.0, 10.0)));
        assert!(!c.contains(&Point3::new(0.0, 0.0, 10.5)));
        assert!(!c.contains(&Point3::new(0.0, 0.0, -0.5)));

        let on_wall = c.locate(&Point3::new(5.0, 0.0, 2.0)).unwrap();
        assert_relative_eq!(on_wall.wall, 0.0);
        assert_relative_eq!(on_wall.bottom, 2.0);
    }

    #[test]
    fn test_tilted_axis() {
        // Axis along (1, 1, 0), length sqrt(200).
        let c = Cylinder::new(Point3::origin(), Point3::new(10.0, 10.0, 0.0), 1.0).unwrap();
        assert_relative_eq!(c.length(), 200.0_f64.sqrt());
        assert!(c.contains(&Point3::new(5.0, 5.0, 0.9)));
        assert!(!c.contains(&Point3::new(5.0, 5.0, 1.1)));
        assert!(!c.contains(&Point3::new(11.0, 11.0, 0.0)));

        let p = c.locate(&Point3::new(1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(p.bottom, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(p.wall, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_undetermined_coordinate_is_outside() {
        assert!(!vertical().contains(&Point3::new(0.0, f64::NAN, 5.0)));
    }

    #[test]
    fn test_invalid_radius() {
        let (a, b) = (Point3::origin(), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(Cylinder::new(a, b, 0.0).unwrap_err(), Error::InvalidRadius(0.0));
        assert_eq!(Cylinder::new(a, b, -2.0).unwrap_err(), Error::InvalidRadius(-2.0));
        assert!(matches!(
            Cylinder::new(a, b, f64::INFINITY),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            Cylinder::new(a, b, f64::NAN),
            Err(Error::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_degenerate_axis() {
        let a = Point3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            Cylinder::new(a, a, 1.0),
            Err(Error::DegenerateAxis { .. })
        ));
    }

    #[test]
    fn test_params_round_trip() {
        let c = vertical();
        let params = CylinderParams::from(c);
        assert_relative_eq!(params.radius, 5.0);
        assert_eq!(Cylinder::try_from(params).unwrap(), c);
    }
}
