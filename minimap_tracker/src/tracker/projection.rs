/// World-to-minimap projection.
///
/// The minimap ground plane is world X/Z; world Y is height and does not
/// appear in icon placement. Coordinates are always relative to a moving
/// reference point (the player/camera), so the visible window recenters
/// every call.

use glam::{Vec2, Vec3};
use super::extent::Extent;

/// Project a world position into minimap space relative to a reference.
///
/// Both positions are normalized over the current extent, then the
/// reference is subtracted: the reference itself always projects to
/// (0, 0). Pure function; returns `None` only while the extent is empty.
pub fn to_minimap_space(world: Vec3, extent: &Extent, reference: Vec3) -> Option<Vec2> {
    let world = extent.normalize(world)?;
    let reference = extent.normalize(reference)?;
    Some(Vec2::new(world.x - reference.x, world.z - reference.z))
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
