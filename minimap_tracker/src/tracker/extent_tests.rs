/// Tests for Extent
///
/// Validates growth monotonicity, the empty state, and normalization
/// bounds including degenerate (zero-width) axes.

use super::*;
use glam::Vec3;

#[test]
fn starts_empty() {
    let extent = Extent::new();
    assert!(extent.is_empty());
    assert_eq!(extent.normalize(Vec3::ZERO), None);
}

#[test]
fn first_observation_initializes_both_corners() {
    let mut extent = Extent::new();
    extent.observe(Vec3::new(3.0, -1.0, 7.0));

    assert!(!extent.is_empty());
    assert_eq!(extent.min(), Vec3::new(3.0, -1.0, 7.0));
    assert_eq!(extent.max(), Vec3::new(3.0, -1.0, 7.0));
}

#[test]
fn grows_monotonically() {
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 5.0, -3.0),
        Vec3::new(-2.0, 1.0, 8.0),
        Vec3::new(4.0, -6.0, 2.0),
        Vec3::new(1.0, 1.0, 1.0),
    ];

    let mut extent = Extent::new();
    extent.observe(positions[0]);

    for position in &positions[1..] {
        let (previous_min, previous_max) = (extent.min(), extent.max());
        extent.observe(*position);

        // min never increases, max never decreases.
        assert!(extent.min().x <= previous_min.x);
        assert!(extent.min().y <= previous_min.y);
        assert!(extent.min().z <= previous_min.z);
        assert!(extent.max().x >= previous_max.x);
        assert!(extent.max().y >= previous_max.y);
        assert!(extent.max().z >= previous_max.z);
    }

    assert_eq!(extent.min(), Vec3::new(-2.0, -6.0, -3.0));
    assert_eq!(extent.max(), Vec3::new(10.0, 5.0, 8.0));
}

#[test]
fn interior_observation_is_idempotent() {
    let mut extent = Extent::new();
    extent.observe(Vec3::new(0.0, 0.0, 0.0));
    extent.observe(Vec3::new(10.0, 10.0, 10.0));

    extent.observe(Vec3::new(5.0, 5.0, 5.0));

    assert_eq!(extent.min(), Vec3::ZERO);
    assert_eq!(extent.max(), Vec3::new(10.0, 10.0, 10.0));
}

#[test]
fn clear_resets_to_empty() {
    let mut extent = Extent::new();
    extent.observe(Vec3::new(1.0, 2.0, 3.0));

    extent.clear();

    assert!(extent.is_empty());
    assert_eq!(extent.normalize(Vec3::new(1.0, 2.0, 3.0)), None);
}

#[test]
fn normalize_stays_within_unit_range() {
    let mut extent = Extent::new();
    extent.observe(Vec3::new(-4.0, 0.0, 2.0));
    extent.observe(Vec3::new(6.0, 12.0, 20.0));

    let samples = [
        Vec3::new(-4.0, 0.0, 2.0),
        Vec3::new(6.0, 12.0, 20.0),
        Vec3::new(1.0, 6.0, 11.0),
        Vec3::new(0.0, 3.0, 5.0),
    ];

    for sample in samples {
        let normalized = extent.normalize(sample).unwrap();
        for axis in 0..3 {
            assert!((0.0..=1.0).contains(&normalized[axis]), "axis {} out of range", axis);
        }
    }
}

#[test]
fn zero_width_axis_maps_to_midpoint() {
    let mut extent = Extent::new();
    // Every observation shares y = 0: the height axis has zero width.
    extent.observe(Vec3::new(0.0, 0.0, 0.0));
    extent.observe(Vec3::new(10.0, 0.0, 10.0));

    let normalized = extent.normalize(Vec3::new(5.0, 0.0, 5.0)).unwrap();

    assert_eq!(normalized.y, 0.5);
    assert!(normalized.is_finite());
}

#[test]
fn single_point_extent_maps_every_axis_to_midpoint() {
    let mut extent = Extent::new();
    extent.observe(Vec3::new(7.0, 7.0, 7.0));

    let normalized = extent.normalize(Vec3::new(7.0, 7.0, 7.0)).unwrap();

    assert_eq!(normalized, Vec3::new(0.5, 0.5, 0.5));
}
