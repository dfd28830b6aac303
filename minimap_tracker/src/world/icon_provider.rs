/// Icon placement contract.
///
/// Icon visuals (sprites, colors, sizes) belong to the host; the core
/// only places, moves and destroys icons through this seam.

use glam::Vec2;
use slotmap::new_key_type;
use crate::category::Category;

new_key_type! {
    /// Stable key for an on-screen icon placement.
    ///
    /// Owned by the tracked record that created it; valid until
    /// `destroy_icon` is called with it.
    pub struct IconKey;
}

/// Creates and mutates on-screen icon placements.
///
/// Positions are in normalized minimap space relative to the reference
/// point (see `tracker::to_minimap_space`). Rotation is radians;
/// the update pass resets it to 0 every frame so icons stay upright
/// regardless of map rotation.
pub trait IconProvider: Send + Sync {
    /// Create an icon for a category at an initial minimap position.
    fn create_icon(&mut self, category: Category, position: Vec2) -> IconKey;

    /// Destroy an icon. Unknown keys are ignored.
    fn destroy_icon(&mut self, key: IconKey);

    /// Move an icon.
    fn set_position(&mut self, key: IconKey, position: Vec2);

    /// Rotate an icon.
    fn set_rotation(&mut self, key: IconKey, radians: f32);

    /// Presentation hint: whether the entity is currently active
    /// (e.g. an unopened chest) or should render dimmed.
    fn set_active(&mut self, key: IconKey, active: bool);
}
