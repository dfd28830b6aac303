/// Tests for Registry
///
/// Validates identity dedup, dynamic pruning, and the per-frame position
/// pass: lazy icon creation, stale-handle cleanup, activity hints.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use glam::{Vec2, Vec3};
use crate::category::Category;
use crate::tracker::{Extent, Registry, TrackedObject};
use crate::world::mock_world::{MockIconProvider, MockWorldObject};
use crate::world::{IconProvider, WorldObject, WorldObjectId};

// ============================================================================
// Helper Functions
// ============================================================================

fn tracked(object: &Arc<MockWorldObject>, category: Category, dynamic: bool) -> TrackedObject {
    let object: Arc<dyn WorldObject> = object.clone();
    TrackedObject::new(category, &object, dynamic, Box::new(|| true))
}

/// Extent spanning a 10x10 ground plane at height 0.
fn ground_extent() -> Extent {
    let mut extent = Extent::new();
    extent.observe(Vec3::new(0.0, 0.0, 0.0));
    extent.observe(Vec3::new(10.0, 0.0, 10.0));
    extent
}

const REFERENCE: Vec3 = Vec3::new(5.0, 0.0, 5.0);

// ============================================================================
// Identity
// ============================================================================

#[test]
fn insert_rejects_duplicate_identity() {
    let object = MockWorldObject::new(1, Vec3::ZERO);
    let mut registry = Registry::new();

    assert!(registry.insert(tracked(&object, Category::Chest, false)));
    assert!(!registry.insert(tracked(&object, Category::Special, false)));

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(WorldObjectId(1)));
}

// ============================================================================
// Dynamic pruning
// ============================================================================

#[test]
fn prune_removes_every_dynamic_record_and_its_icon() {
    let chest = MockWorldObject::new(1, Vec3::new(2.0, 0.0, 2.0));
    let enemy_a = MockWorldObject::new(2, Vec3::new(4.0, 0.0, 4.0));
    let enemy_b = MockWorldObject::new(3, Vec3::new(6.0, 0.0, 6.0));

    let mut registry = Registry::new();
    registry.insert(tracked(&chest, Category::Chest, false));
    registry.insert(tracked(&enemy_a, Category::EnemyMonster, true));
    registry.insert(tracked(&enemy_b, Category::EnemyMonster, true));

    let mut icons = MockIconProvider::new();
    registry.update_positions(&ground_extent(), REFERENCE, &mut icons);
    assert_eq!(icons.icon_count(), 3);

    let removed = registry.prune_dynamic(&mut icons);

    assert_eq!(removed, 2);
    assert_eq!(registry.len(), 1);
    assert_eq!(icons.icon_count(), 1);
    assert_eq!(icons.destroyed_count(), 2);
    // The static record and its icon survive.
    assert!(registry.contains(WorldObjectId(1)));
    assert!(!registry.contains(WorldObjectId(2)));
    assert!(!registry.contains(WorldObjectId(3)));
}

#[test]
fn prune_on_static_only_registry_is_a_no_op() {
    let chest = MockWorldObject::new(1, Vec3::ZERO);
    let mut registry = Registry::new();
    registry.insert(tracked(&chest, Category::Chest, false));

    let mut icons = MockIconProvider::new();
    assert_eq!(registry.prune_dynamic(&mut icons), 0);
    assert_eq!(registry.len(), 1);
}

// ============================================================================
// Position pass
// ============================================================================

#[test]
fn icon_is_created_lazily_exactly_once() {
    let object = MockWorldObject::new(1, Vec3::new(0.0, 0.0, 0.0));
    let mut registry = Registry::new();
    registry.insert(tracked(&object, Category::Chest, false));

    let mut icons = MockIconProvider::new();
    let extent = ground_extent();

    registry.update_positions(&extent, REFERENCE, &mut icons);
    let key = registry.iter().next().unwrap().icon().unwrap();

    registry.update_positions(&extent, REFERENCE, &mut icons);

    assert_eq!(icons.icon_count(), 1);
    assert_eq!(registry.iter().next().unwrap().icon(), Some(key));
    assert_eq!(icons.icon(key).unwrap().category, Category::Chest);
}

#[test]
fn icon_follows_the_world_object() {
    let object = MockWorldObject::new(1, Vec3::new(0.0, 0.0, 0.0));
    let mut registry = Registry::new();
    registry.insert(tracked(&object, Category::Item, true));

    let mut icons = MockIconProvider::new();
    let extent = ground_extent();

    registry.update_positions(&extent, REFERENCE, &mut icons);
    let key = registry.iter().next().unwrap().icon().unwrap();
    assert_eq!(icons.icon(key).unwrap().position, Vec2::new(-0.5, -0.5));

    object.set_position(Vec3::new(10.0, 0.0, 10.0));
    registry.update_positions(&extent, REFERENCE, &mut icons);

    assert_eq!(icons.icon(key).unwrap().position, Vec2::new(0.5, 0.5));
}

#[test]
fn dead_handle_removes_record_and_icon_in_one_pass() {
    let object = MockWorldObject::new(1, Vec3::new(2.0, 0.0, 2.0));
    let mut registry = Registry::new();
    registry.insert(tracked(&object, Category::EnemyMonster, true));

    let mut icons = MockIconProvider::new();
    let extent = ground_extent();
    registry.update_positions(&extent, REFERENCE, &mut icons);
    assert_eq!(icons.icon_count(), 1);

    object.kill();
    registry.update_positions(&extent, REFERENCE, &mut icons);

    assert!(registry.is_empty());
    assert_eq!(icons.icon_count(), 0);
    assert_eq!(icons.destroyed_count(), 1);
    assert!(!registry.contains(WorldObjectId(1)));
}

#[test]
fn activity_hint_reaches_the_icon() {
    let object = MockWorldObject::new(1, Vec3::new(2.0, 0.0, 2.0));
    let available = Arc::new(AtomicBool::new(true));

    let mut registry = Registry::new();
    let dyn_object: Arc<dyn WorldObject> = object.clone();
    let flag = available.clone();
    registry.insert(TrackedObject::new(
        Category::Chest,
        &dyn_object,
        false,
        Box::new(move || flag.load(Ordering::SeqCst)),
    ));

    let mut icons = MockIconProvider::new();
    let extent = ground_extent();

    registry.update_positions(&extent, REFERENCE, &mut icons);
    let key = registry.iter().next().unwrap().icon().unwrap();
    assert!(icons.icon(key).unwrap().active);

    available.store(false, Ordering::SeqCst);
    registry.update_positions(&extent, REFERENCE, &mut icons);
    assert!(!icons.icon(key).unwrap().active);
}

#[test]
fn icons_are_kept_upright() {
    let object = MockWorldObject::new(1, Vec3::new(2.0, 0.0, 2.0));
    let mut registry = Registry::new();
    registry.insert(tracked(&object, Category::Chest, false));

    let mut icons = MockIconProvider::new();
    let extent = ground_extent();
    registry.update_positions(&extent, REFERENCE, &mut icons);
    let key = registry.iter().next().unwrap().icon().unwrap();

    // The host rotated the icon with the map; the next pass resets it.
    icons.set_rotation(key, 1.25);
    registry.update_positions(&extent, REFERENCE, &mut icons);

    assert_eq!(icons.icon(key).unwrap().rotation, 0.0);
}

// ============================================================================
// Bulk reset
// ============================================================================

#[test]
fn clear_destroys_every_icon() {
    let a = MockWorldObject::new(1, Vec3::new(1.0, 0.0, 1.0));
    let b = MockWorldObject::new(2, Vec3::new(9.0, 0.0, 9.0));

    let mut registry = Registry::new();
    registry.insert(tracked(&a, Category::Chest, false));
    registry.insert(tracked(&b, Category::Item, true));

    let mut icons = MockIconProvider::new();
    registry.update_positions(&ground_extent(), REFERENCE, &mut icons);

    registry.clear(&mut icons);

    assert!(registry.is_empty());
    assert_eq!(icons.icon_count(), 0);
    assert_eq!(icons.destroyed_count(), 2);
    assert!(!registry.contains(WorldObjectId(1)));
}
