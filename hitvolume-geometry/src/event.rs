//! Volume queries as methods on hit collections.

use hitvolume_core::{Hit, HitCollection};
use nalgebra::Point3;

use crate::query;
use crate::solid::Solid;
use crate::summary::{summarize, VolumeSummary};

/// Extension methods that run the volume queries over an event's hits.
///
/// ```
/// use hitvolume_core::{HitCollection, HitType, Point3};
/// use hitvolume_geometry::{Cylinder, EventVolumeQueries};
///
/// let mut event: HitCollection = HitCollection::new();
/// event.add_hit(0.0, 0.0, 5.0, 2.0, 0.0, HitType::XYZ);
/// event.add_hit(10.0, 0.0, 5.0, 1.0, 0.0, HitType::XYZ);
///
/// let cylinder = Cylinder::new(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 5.0).unwrap();
/// assert_eq!(event.hits_inside(&cylinder), 1);
/// assert!(event.any_hit_inside(&cylinder));
/// assert!(!event.all_hits_inside(&cylinder));
/// assert_eq!(event.energy_in(&cylinder), 2.0);
/// ```
pub trait EventVolumeQueries {
    /// Number of hits inside `volume`.
    fn hits_inside<S: Solid + ?Sized>(&self, volume: &S) -> usize;

    /// True if at least one hit is inside `volume`.
    fn any_hit_inside<S: Solid + ?Sized>(&self, volume: &S) -> bool;

    /// True if the event has hits and all are inside `volume`.
    fn all_hits_inside<S: Solid + ?Sized>(&self, volume: &S) -> bool;

    /// Energy deposited inside `volume`.
    fn energy_in<S: Solid + ?Sized>(&self, volume: &S) -> f64;

    /// Mean position of the hits inside `volume`.
    fn mean_position_in<S: Solid + ?Sized>(&self, volume: &S) -> Option<Point3<f64>>;

    /// Wall margin of the contained hit closest to the wall.
    fn closest_hit_distance_to_wall<S: Solid + ?Sized>(&self, volume: &S) -> Option<f64>;

    /// Top-face margin of the contained hit closest to the top face.
    fn closest_hit_distance_to_top<S: Solid + ?Sized>(&self, volume: &S) -> Option<f64>;

    /// Bottom-face margin of the contained hit closest to the bottom face.
    fn closest_hit_distance_to_bottom<S: Solid + ?Sized>(&self, volume: &S) -> Option<f64>;

    /// Every aggregate at once.
    fn volume_summary<S: Solid + ?Sized>(&self, volume: &S) -> VolumeSummary;
}

impl<H: Hit> EventVolumeQueries for HitCollection<H> {
    fn hits_inside<S: Solid + ?Sized>(&self, volume: &S) -> usize {
        query::count_inside(volume, self)
    }

    fn any_hit_inside<S: Solid + ?Sized>(&self, volume: &S) -> bool {
        query::any_inside(volume, self)
    }

    fn all_hits_inside<S: Solid + ?Sized>(&self, volume: &S) -> bool {
        query::all_inside(volume, self)
    }

    fn energy_in<S: Solid + ?Sized>(&self, volume: &S) -> f64 {
        query::energy_inside(volume, self)
    }

    fn mean_position_in<S: Solid + ?Sized>(&self, volume: &S) -> Option<Point3<f64>> {
        query::mean_position_inside(volume, self)
    }

    fn closest_hit_distance_to_wall<S: Solid + ?Sized>(&self, volume: &S) -> Option<f64> {
        query::closest_distance_to_wall(volume, self)
    }

    fn closest_hit_distance_to_top<S: Solid + ?Sized>(&self, volume: &S) -> Option<f64> {
        query::closest_distance_to_top(volume, self)
    }

    fn closest_hit_distance_to_bottom<S: Solid + ?Sized>(&self, volume: &S) -> Option<f64> {
        query::closest_distance_to_bottom(volume, self)
    }

    fn volume_summary<S: Solid + ?Sized>(&self, volume: &S) -> VolumeSummary {
        summarize(volume, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Prism;
    use approx::assert_relative_eq;
    use hitvolume_core::{HitData, HitType};

    #[test]
    fn test_event_prism_queries() {
        let prism =
            Prism::axis_aligned(Point3::origin(), Point3::new(0.0, 0.0, 4.0), 2.0, 2.0).unwrap();
        let mut event: HitCollection = HitCollection::new();
        event.add_hit(0.5, 0.5, 2.0, 3.0, 0.0, HitType::XYZ);
        event.add_hit(-0.8, 0.1, 3.5, 1.0, 0.0, HitType::XYZ);
        event.push(HitData::xz(0.0, 2.0, 7.0, 0.0));

        assert_eq!(event.hits_inside(&prism), 2);
        assert!(event.any_hit_inside(&prism));
        assert!(!event.all_hits_inside(&prism));
        assert_relative_eq!(event.energy_in(&prism), 4.0);
        assert_relative_eq!(
            event.mean_position_in(&prism).unwrap(),
            Point3::new(-0.15, 0.3, 2.75),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            event.closest_hit_distance_to_wall(&prism).unwrap(),
            0.2,
            epsilon = 1e-12
        );
        assert_relative_eq!(event.closest_hit_distance_to_top(&prism).unwrap(), 0.5);
        assert_relative_eq!(event.closest_hit_distance_to_bottom(&prism).unwrap(), 2.0);
        assert_eq!(event.volume_summary(&prism).hits_total, 3);

        // Only the projected hit remains: nothing is contained.
        let xz = event.xz_hits();
        assert!(!xz.any_hit_inside(&prism));
        assert!(xz.closest_hit_distance_to_wall(&prism).is_none());
    }
}
