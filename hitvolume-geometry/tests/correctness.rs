#![allow(clippy::float_cmp, clippy::cast_precision_loss)]
use approx::assert_relative_eq;
use hitvolume_core::{Hit, HitCollection, HitData, HitType};
use hitvolume_geometry::{
    all_inside, any_inside, closest_distance_to_bottom, closest_distance_to_top,
    closest_distance_to_wall, contains_point, count_inside, distance_or_sentinel, energy_inside,
    mean_position_inside, Cylinder, Prism, Solid, Volume, NO_HIT_INSIDE,
};
use nalgebra::Point3;

// The midpoint of every test volume, followed by a deterministic spread of
// hits in a 24 x 24 x 24 box around the origin with projected hits mixed in.
fn generate_hits(n: usize) -> HitCollection {
    let mut hits: HitCollection = test_volumes()
        .iter()
        .map(|v| HitData::xyz(nalgebra::center(&v.base(), &v.top()), 1.0, 0.0))
        .collect();
    for i in 0..n {
        let t = i as f64;
        let x = (t * 0.731).sin() * 12.0;
        let y = (t * 1.379).cos() * 12.0;
        let z = (t * 0.173).sin() * 12.0;
        let energy = 1.0 + (t * 0.5).cos().abs() * 10.0;
        if i % 17 == 0 {
            hits.push(HitData::xz(x, z, energy, t));
        } else {
            hits.add_hit(x, y, z, energy, t, HitType::XYZ);
        }
    }
    hits
}

fn test_volumes() -> Vec<Volume> {
    vec![
        Cylinder::new(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 5.0)
            .unwrap()
            .into(),
        Cylinder::new(Point3::new(-8.0, -3.0, 2.0), Point3::new(6.0, 7.0, -4.0), 4.5)
            .unwrap()
            .into(),
        Prism::axis_aligned(Point3::new(0.0, 0.0, -10.0), Point3::new(0.0, 0.0, 10.0), 8.0, 14.0)
            .unwrap()
            .into(),
        Prism::new(Point3::new(-5.0, 0.0, 0.0), Point3::new(9.0, 2.0, 1.0), 10.0, 4.0, 0.7)
            .unwrap()
            .into(),
    ]
}

#[test]
fn test_cylinder_reference_scenario() {
    let cylinder = Cylinder::new(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 5.0).unwrap();
    let mut hits: HitCollection = HitCollection::new();
    hits.add_hit(0.0, 0.0, 5.0, 2.0, 0.0, HitType::XYZ);
    hits.add_hit(10.0, 0.0, 5.0, 1.0, 0.0, HitType::XYZ);

    assert!(contains_point(&cylinder, &Point3::new(0.0, 0.0, 5.0)));
    assert!(!contains_point(&cylinder, &Point3::new(10.0, 0.0, 5.0)));
    assert_eq!(count_inside(&cylinder, &hits), 1);
    assert_eq!(energy_inside(&cylinder, &hits), 2.0);
    assert_eq!(closest_distance_to_wall(&cylinder, &hits), Some(5.0));
    assert_eq!(closest_distance_to_top(&cylinder, &hits), Some(5.0));
    assert_eq!(closest_distance_to_bottom(&cylinder, &hits), Some(5.0));
}

#[test]
fn test_prism_reference_scenario() {
    let prism =
        Prism::axis_aligned(Point3::origin(), Point3::new(0.0, 0.0, 4.0), 2.0, 2.0).unwrap();
    let hits = [
        HitData::xyz(Point3::new(0.5, 0.5, 2.0), 1.0, 0.0),
        HitData::xyz(Point3::new(1.5, 0.0, 2.0), 1.0, 0.0),
    ];

    assert!(prism.contains(&hits[0].position()));
    assert!(!prism.contains(&hits[1].position()));
    assert_eq!(closest_distance_to_wall(&prism, &hits), Some(0.5));
}

#[test]
fn test_energy_matches_independent_filter() {
    let hits = generate_hits(500);
    for volume in test_volumes() {
        let expected: f64 = hits
            .iter()
            .filter(|h| contains_point(&volume, &h.position()))
            .map(Hit::energy)
            .sum();
        assert_relative_eq!(energy_inside(&volume, &hits), expected);

        let expected_count = hits
            .iter()
            .filter(|h| volume.contains(&h.position()))
            .count();
        assert_eq!(count_inside(&volume, &hits), expected_count);
    }
}

#[test]
fn test_volumes_select_a_proper_subset() {
    let hits = generate_hits(500);
    for volume in test_volumes() {
        let n = count_inside(&volume, &hits);
        assert!(n > 0, "{} selected nothing", volume.shape_name());
        assert!(n < hits.len(), "{} selected everything", volume.shape_name());
    }
}

#[test]
fn test_distances_absent_iff_nothing_inside() {
    let hits = generate_hits(300);
    let far = Cylinder::new(Point3::new(100.0, 0.0, 0.0), Point3::new(100.0, 0.0, 1.0), 1.0)
        .unwrap()
        .into();
    let mut volumes = test_volumes();
    volumes.push(far);

    for volume in &volumes {
        let n = count_inside(volume, &hits);
        let wall = closest_distance_to_wall(volume, &hits);
        let top = closest_distance_to_top(volume, &hits);
        let bottom = closest_distance_to_bottom(volume, &hits);
        assert_eq!(wall.is_none(), n == 0);
        assert_eq!(top.is_none(), n == 0);
        assert_eq!(bottom.is_none(), n == 0);
        assert_eq!(mean_position_inside(volume, &hits).is_none(), n == 0);

        if n == 0 {
            assert_eq!(distance_or_sentinel(wall), NO_HIT_INSIDE);
            assert_eq!(distance_or_sentinel(top), -1.0);
            assert_eq!(distance_or_sentinel(bottom), -1.0);
        } else {
            let wall = wall.unwrap();
            assert!((0.0..=volume.max_wall_margin()).contains(&wall));
            assert!((0.0..=volume.length()).contains(&top.unwrap()));
            assert!((0.0..=volume.length()).contains(&bottom.unwrap()));
        }
    }
}

#[test]
fn test_any_and_all() {
    let hits = generate_hits(200);
    let empty: Vec<HitData> = Vec::new();
    for volume in test_volumes() {
        if all_inside(&volume, &hits) {
            assert!(any_inside(&volume, &hits));
        }
        assert_eq!(any_inside(&volume, &hits), count_inside(&volume, &hits) > 0);
        assert!(!any_inside(&volume, &empty));
        assert!(!all_inside(&volume, &empty));
        assert_eq!(count_inside(&volume, &empty), 0);
    }

    // A volume enclosing every 3D hit.
    let enclosing =
        Prism::axis_aligned(Point3::new(0.0, 0.0, -20.0), Point3::new(0.0, 0.0, 20.0), 40.0, 40.0)
            .unwrap();
    let xyz = hits.xyz_hits();
    assert!(all_inside(&enclosing, &xyz));
    assert!(any_inside(&enclosing, &xyz));
    // Projected hits keep the full collection from being contained.
    assert!(!all_inside(&enclosing, &hits));
}

#[test]
fn test_results_do_not_depend_on_order() {
    let hits = generate_hits(250);
    let mut reversed: Vec<HitData> = hits.as_slice().to_vec();
    reversed.reverse();
    let mut sorted = hits.clone();
    sorted.sort_by_z();

    for volume in test_volumes() {
        let n = count_inside(&volume, &hits);
        assert_eq!(n, count_inside(&volume, &reversed));
        assert_eq!(n, count_inside(&volume, &sorted));
        assert_relative_eq!(
            energy_inside(&volume, &hits),
            energy_inside(&volume, &reversed),
            epsilon = 1e-9
        );
        assert_eq!(
            closest_distance_to_wall(&volume, &hits),
            closest_distance_to_wall(&volume, &sorted)
        );
        assert_eq!(
            closest_distance_to_top(&volume, &hits),
            closest_distance_to_top(&volume, &reversed)
        );
        if let Some(mean) = mean_position_inside(&volume, &hits) {
            assert_relative_eq!(
                mean,
                mean_position_inside(&volume, &reversed).unwrap(),
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn test_queries_leave_inputs_untouched() {
    // Projected hits hold NaN, which never compares equal.
    let hits = generate_hits(100).xyz_hits();
    let snapshot = hits.clone();
    let volume = test_volumes()[0];
    let copy = volume;

    let first = (
        count_inside(&volume, &hits),
        closest_distance_to_wall(&volume, &hits),
    );
    let second = (
        count_inside(&volume, &hits),
        closest_distance_to_wall(&volume, &hits),
    );
    assert_eq!(first, second);
    assert_eq!(hits, snapshot);
    assert_eq!(volume, copy);
}
