//! Hit traits and types for detector event data.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value stored in a coordinate that the detector did not measure.
pub const UNDETERMINED: f64 = f64::NAN;

/// Returns true if `value` is a measured coordinate.
#[inline]
#[must_use]
pub fn is_determined(value: f64) -> bool {
    !value.is_nan()
}

/// Which coordinates of a hit carry a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HitType {
    /// X only.
    X,
    /// Y only.
    Y,
    /// Z only.
    Z,
    /// Transverse plane, no drift coordinate.
    XY,
    /// XZ readout plane; Y is undetermined.
    XZ,
    /// YZ readout plane; X is undetermined.
    YZ,
    /// Fully measured.
    #[default]
    XYZ,
}

impl HitType {
    const X_BIT: u8 = 0b001;
    const Y_BIT: u8 = 0b010;
    const Z_BIT: u8 = 0b100;

    /// All hit types, from 1D projections to full 3D.
    pub const ALL: [HitType; 7] = [
        HitType::X,
        HitType::Y,
        HitType::Z,
        HitType::XY,
        HitType::XZ,
        HitType::YZ,
        HitType::XYZ,
    ];

    #[inline]
    fn mask(self) -> u8 {
        match self {
            HitType::X => Self::X_BIT,
            HitType::Y => Self::Y_BIT,
            HitType::Z => Self::Z_BIT,
            HitType::XY => Self::X_BIT | Self::Y_BIT,
            HitType::XZ => Self::X_BIT | Self::Z_BIT,
            HitType::YZ => Self::Y_BIT | Self::Z_BIT,
            HitType::XYZ => Self::X_BIT | Self::Y_BIT | Self::Z_BIT,
        }
    }

    /// Returns true if the X coordinate is measured.
    #[inline]
    #[must_use]
    pub fn has_x(self) -> bool {
        self.mask() & Self::X_BIT != 0
    }

    /// Returns true if the Y coordinate is measured.
    #[inline]
    #[must_use]
    pub fn has_y(self) -> bool {
        self.mask() & Self::Y_BIT != 0
    }

    /// Returns true if the Z coordinate is measured.
    #[inline]
    #[must_use]
    pub fn has_z(self) -> bool {
        self.mask() & Self::Z_BIT != 0
    }

    /// Returns true if every coordinate needed by `projection` is measured.
    ///
    /// `XYZ` satisfies every projection, `XZ` satisfies `X`, `Z` and `XZ`.
    #[inline]
    #[must_use]
    pub fn satisfies(self, projection: HitType) -> bool {
        self.mask() & projection.mask() == projection.mask()
    }

    /// Number of measured coordinates (1, 2 or 3).
    #[must_use]
    pub fn dimensions(self) -> u32 {
        self.mask().count_ones()
    }

    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HitType::X => "X",
            HitType::Y => "Y",
            HitType::Z => "Z",
            HitType::XY => "XY",
            HitType::XZ => "XZ",
            HitType::YZ => "YZ",
            HitType::XYZ => "XYZ",
        }
    }
}

impl fmt::Display for HitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown hit type name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hit type: {0:?}")]
pub struct ParseHitTypeError(String);

impl FromStr for HitType {
    type Err = ParseHitTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HitType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHitTypeError(s.to_string()))
    }
}

/// Core data structure for a single energy deposit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HitData {
    /// Position in mm. Unmeasured coordinates hold [`UNDETERMINED`].
    ///
    /// With the `serde` feature an undetermined coordinate is written as `null`.
    #[cfg_attr(feature = "serde", serde(with = "serde_position"))]
    pub position: Point3<f64>,
    /// Deposited energy (keV by convention).
    pub energy: f64,
    /// Time offset relative to the event trigger.
    pub time: f64,
    /// Which coordinates are measured.
    pub hit_type: HitType,
}

impl HitData {
    /// Creates a hit from raw coordinates.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, energy: f64, time: f64, hit_type: HitType) -> Self {
        Self {
            position: Point3::new(x, y, z),
            energy,
            time,
            hit_type,
        }
    }

    /// Creates a fully measured 3D hit.
    #[inline]
    #[must_use]
    pub fn xyz(position: Point3<f64>, energy: f64, time: f64) -> Self {
        Self {
            position,
            energy,
            time,
            hit_type: HitType::XYZ,
        }
    }

    /// Creates a hit from an XZ readout; Y is undetermined.
    #[inline]
    #[must_use]
    pub fn xz(x: f64, z: f64, energy: f64, time: f64) -> Self {
        Self::new(x, UNDETERMINED, z, energy, time, HitType::XZ)
    }

    /// Creates a hit from a YZ readout; X is undetermined.
    #[inline]
    #[must_use]
    pub fn yz(y: f64, z: f64, energy: f64, time: f64) -> Self {
        Self::new(UNDETERMINED, y, z, energy, time, HitType::YZ)
    }
}

#[cfg(feature = "serde")]
mod serde_position {
    use nalgebra::Point3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{is_determined, UNDETERMINED};

    pub fn serialize<S: Serializer>(
        position: &Point3<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let measured = |c: f64| is_determined(c).then_some(c);
        [measured(position.x), measured(position.y), measured(position.z)].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point3<f64>, D::Error> {
        let [x, y, z] = <[Option<f64>; 3]>::deserialize(deserializer)?;
        Ok(Point3::new(
            x.unwrap_or(UNDETERMINED),
            y.unwrap_or(UNDETERMINED),
            z.unwrap_or(UNDETERMINED),
        ))
    }
}

/// Read interface for hit records.
///
/// Query code is written against this trait so that any hit representation
/// exposing a position, an energy, a time and a type can be used.
pub trait Hit: Send + Sync {
    /// Returns the hit position.
    fn position(&self) -> Point3<f64>;

    /// Returns the deposited energy.
    fn energy(&self) -> f64;

    /// Returns the hit time.
    fn time(&self) -> f64;

    /// Returns which coordinates are measured.
    fn hit_type(&self) -> HitType;

    /// Returns the x coordinate.
    #[inline]
    fn x(&self) -> f64 {
        self.position().x
    }

    /// Returns the y coordinate.
    #[inline]
    fn y(&self) -> f64 {
        self.position().y
    }

    /// Returns the z coordinate.
    #[inline]
    fn z(&self) -> f64 {
        self.position().z
    }
}

impl Hit for HitData {
    #[inline]
    fn position(&self) -> Point3<f64> {
        self.position
    }

    #[inline]
    fn energy(&self) -> f64 {
        self.energy
    }

    #[inline]
    fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    fn hit_type(&self) -> HitType {
        self.hit_type
    }
}

impl<H: Hit> Hit for &H {
    #[inline]
    fn position(&self) -> Point3<f64> {
        (**self).position()
    }

    #[inline]
    fn energy(&self) -> f64 {
        (**self).energy()
    }

    #[inline]
    fn time(&self) -> f64 {
        (**self).time()
    }

    #[inline]
    fn hit_type(&self) -> HitType {
        (**self).hit_type()
    }
}
