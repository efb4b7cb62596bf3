//! Tagged volume descriptor.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cylinder::Cylinder;
use crate::prism::Prism;
use crate::solid::{Placement, Solid};

/// Any of the supported solids.
///
/// With the `serde` feature this is stored as an internally tagged map,
/// e.g. `{"shape": "cylinder", "base": [0, 0, 0], "top": [0, 0, 10], "radius": 5}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "lowercase"))]
pub enum Volume {
    /// Finite right cylinder.
    Cylinder(Cylinder),
    /// Finite rectangular prism.
    Prism(Prism),
}

impl Volume {
    /// Short name of the shape.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Volume::Cylinder(_) => "cylinder",
            Volume::Prism(_) => "prism",
        }
    }
}

impl Solid for Volume {
    fn base(&self) -> Point3<f64> {
        match self {
            Volume::Cylinder(c) => c.base(),
            Volume::Prism(p) => p.base(),
        }
    }

    fn top(&self) -> Point3<f64> {
        match self {
            Volume::Cylinder(c) => c.top(),
            Volume::Prism(p) => p.top(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Volume::Cylinder(c) => c.length(),
            Volume::Prism(p) => p.length(),
        }
    }

    fn max_wall_margin(&self) -> f64 {
        match self {
            Volume::Cylinder(c) => c.max_wall_margin(),
            Volume::Prism(p) => p.max_wall_margin(),
        }
    }

    #[inline]
    fn locate(&self, point: &Point3<f64>) -> Option<Placement> {
        match self {
            Volume::Cylinder(c) => c.locate(point),
            Volume::Prism(p) => p.locate(point),
        }
    }
}

impl From<Cylinder> for Volume {
    fn from(cylinder: Cylinder) -> Self {
        Volume::Cylinder(cylinder)
    }
}

impl From<Prism> for Volume {
    fn from(prism: Prism) -> Self {
        Volume::Prism(prism)
    }
}
