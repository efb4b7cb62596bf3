//! Ordered hit collections.
//!
//! `HitCollection` is the event container handed to the volume queries. It
//! owns its hits by value, preserves insertion order and offers the per-event
//! helpers (type filters, energy totals, bounding box, ordering) that sit
//! around the geometric queries.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hit::{is_determined, Hit, HitData, HitType, UNDETERMINED};

/// Axis-aligned extent of the measured coordinates of a collection.
///
/// An axis with no measured coordinate holds [`UNDETERMINED`] in both
/// `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// Lower corner.
    pub min: Point3<f64>,
    /// Upper corner.
    pub max: Point3<f64>,
}

/// An ordered collection of hits belonging to one event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HitCollection<H = HitData> {
    hits: Vec<H>,
}

impl<H> Default for HitCollection<H> {
    fn default() -> Self {
        Self { hits: Vec::new() }
    }
}

impl<H> HitCollection<H> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hits: Vec::with_capacity(capacity),
        }
    }

    /// Appends a hit.
    pub fn push(&mut self, hit: H) {
        self.hits.push(hit);
    }

    /// Returns the number of hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns true if the collection holds no hits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Removes every hit, keeping the allocation.
    pub fn clear(&mut self) {
        self.hits.clear();
    }

    /// Returns the hit at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&H> {
        self.hits.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.hits.len(),
        })
    }

    /// Swaps two hits.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.hits.len();
        if let Some(&index) = [a, b].iter().find(|&&i| i >= len) {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.hits.swap(a, b);
        Ok(())
    }

    /// Returns an iterator over the hits in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, H> {
        self.hits.iter()
    }

    /// Returns the hits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[H] {
        &self.hits
    }

    /// Consumes the collection and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<H> {
        self.hits
    }

    /// Sorts hits with a custom comparator. The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&H, &H) -> Ordering,
    {
        self.hits.sort_by(compare);
    }
}

impl<H: Hit> HitCollection<H> {
    /// Sorts hits by ascending z. Undetermined z values go last.
    pub fn sort_by_z(&mut self) {
        self.hits.sort_by(|a, b| match (a.z().is_nan(), b.z().is_nan()) {
            (false, false) => a.z().total_cmp(&b.z()),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => Ordering::Equal,
        });
    }

    /// Sum of the energy of every hit.
    #[must_use]
    pub fn total_energy(&self) -> f64 {
        self.hits.iter().map(Hit::energy).sum()
    }

    /// Energy-weighted mean position.
    ///
    /// Each axis is averaged independently over the hits where that axis
    /// is measured. An axis with zero total weight yields 0.
    #[must_use]
    pub fn mean_position(&self) -> Point3<f64> {
        let mut sum = [0.0_f64; 3];
        let mut weight = [0.0_f64; 3];

        for hit in &self.hits {
            let p = hit.position();
            let e = hit.energy();
            for axis in 0..3 {
                if is_determined(p[axis]) {
                    sum[axis] += p[axis] * e;
                    weight[axis] += e;
                }
            }
        }

        let mean = |axis: usize| {
            if weight[axis] == 0.0 {
                0.0
            } else {
                sum[axis] / weight[axis]
            }
        };
        Point3::new(mean(0), mean(1), mean(2))
    }

    /// Bounding box of the measured coordinates, or `None` if empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        if self.hits.is_empty() {
            return None;
        }

        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for hit in &self.hits {
            let p = hit.position();
            for axis in 0..3 {
                // f64::min/max ignore NaN, so undetermined values drop out.
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }

        let finish = |lo: f64, hi: f64| {
            if lo > hi {
                (UNDETERMINED, UNDETERMINED)
            } else {
                (lo, hi)
            }
        };
        let (x0, x1) = finish(min[0], max[0]);
        let (y0, y1) = finish(min[1], max[1]);
        let (z0, z1) = finish(min[2], max[2]);
        Some(Bounds {
            min: Point3::new(x0, y0, z0),
            max: Point3::new(x1, y1, z1),
        })
    }

    /// Returns a display adapter that prints at most `limit` hits.
    #[must_use]
    pub fn summary(&self, limit: Option<usize>) -> Summary<'_, H> {
        Summary {
            collection: self,
            limit,
        }
    }
}

impl<H: Hit + Clone> HitCollection<H> {
    /// Copies out the hits whose type is exactly `hit_type`.
    #[must_use]
    pub fn hits_of_type(&self, hit_type: HitType) -> Self {
        self.hits
            .iter()
            .filter(|h| h.hit_type() == hit_type)
            .cloned()
            .collect()
    }

    /// Copies out the hits whose type measures every axis of `projection`.
    #[must_use]
    pub fn hits_satisfying(&self, projection: HitType) -> Self {
        self.hits
            .iter()
            .filter(|h| h.hit_type().satisfies(projection))
            .cloned()
            .collect()
    }

    /// Hits with measured X and Z and undetermined Y.
    #[must_use]
    pub fn xz_hits(&self) -> Self {
        self.hits_of_type(HitType::XZ)
    }

    /// Hits with measured Y and Z and undetermined X.
    #[must_use]
    pub fn yz_hits(&self) -> Self {
        self.hits_of_type(HitType::YZ)
    }

    /// Fully measured 3D hits.
    #[must_use]
    pub fn xyz_hits(&self) -> Self {
        self.hits_of_type(HitType::XYZ)
    }
}

impl HitCollection<HitData> {
    /// Appends a hit built from raw coordinates.
    pub fn add_hit(&mut self, x: f64, y: f64, z: f64, energy: f64, time: f64, hit_type: HitType) {
        self.hits.push(HitData::new(x, y, z, energy, time, hit_type));
    }
}

impl<H> FromIterator<H> for HitCollection<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self {
            hits: iter.into_iter().collect(),
        }
    }
}

impl<H> Extend<H> for HitCollection<H> {
    fn extend<I: IntoIterator<Item = H>>(&mut self, iter: I) {
        self.hits.extend(iter);
    }
}

impl<H> From<Vec<H>> for HitCollection<H> {
    fn from(hits: Vec<H>) -> Self {
        Self { hits }
    }
}

impl<H> AsRef<[H]> for HitCollection<H> {
    fn as_ref(&self) -> &[H] {
        &self.hits
    }
}

impl<'a, H> IntoIterator for &'a HitCollection<H> {
    type Item = &'a H;
    type IntoIter = std::slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

impl<H> IntoIterator for HitCollection<H> {
    type Item = H;
    type IntoIter = std::vec::IntoIter<H>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

/// Text summary of a collection, see [`HitCollection::summary`].
pub struct Summary<'a, H> {
    collection: &'a HitCollection<H>,
    limit: Option<usize>,
}

impl<H: Hit> fmt::Display for Summary<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hits = self.collection;
        let mean = hits.mean_position();
        writeln!(f, "Total energy : {}", hits.total_energy())?;
        writeln!(f, "Mean position : ( {} , {} , {} )", mean.x, mean.y, mean.z)?;
        writeln!(f, "Number of hits : {}", hits.len())?;

        let shown = self.limit.map_or(hits.len(), |n| n.min(hits.len()));
        if let Some(n) = self.limit {
            writeln!(f, "Printing only the first {n} hits")?;
        }
        for (i, hit) in hits.iter().take(shown).enumerate() {
            writeln!(
                f,
                "Hit {i}: X: {} Y: {} Z: {} Energy: {} Time: {} Type: {}",
                hit.x(),
                hit.y(),
                hit.z(),
                hit.energy(),
                hit.time(),
                hit.hit_type()
            )?;
        }
        Ok(())
    }
}

impl<H: Hit> fmt::Display for HitCollection<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(None), f)
    }
}
