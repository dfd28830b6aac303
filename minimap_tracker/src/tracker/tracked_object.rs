/// Tracked entity record.
///
/// One record per world object the minimap currently knows about. The
/// record owns its icon placement; it never owns the world object.

use std::sync::Arc;
use crate::category::Category;
use crate::world::{resolve_handle, IconKey, WorldHandle, WorldObject, WorldObjectId};

/// One tracked world entity.
///
/// `category` is set at creation and immutable. The icon is created
/// lazily by the position-update pass, at most once, and persists until
/// the record is removed. Dynamic records are pruned and rescanned every
/// scan cycle; static records survive for the scene lifetime.
pub struct TrackedObject {
    category: Category,
    world: WorldHandle,
    world_id: WorldObjectId,
    icon: Option<IconKey>,
    dynamic: bool,
    activity: Box<dyn Fn() -> bool + Send + Sync>,
}

impl TrackedObject {
    pub(crate) fn new(
        category: Category,
        object: &Arc<dyn WorldObject>,
        dynamic: bool,
        activity: Box<dyn Fn() -> bool + Send + Sync>,
    ) -> Self {
        Self {
            category,
            world: Arc::downgrade(object),
            world_id: object.object_id(),
            icon: None,
            dynamic,
            activity,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn world_id(&self) -> WorldObjectId {
        self.world_id
    }

    /// Icon placement, once the update pass has created one.
    pub fn icon(&self) -> Option<IconKey> {
        self.icon
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Live world object behind this record.
    ///
    /// `None` once the host has destroyed it; the record must then be
    /// removed in the same update pass that noticed.
    pub fn world_object(&self) -> Option<Arc<dyn WorldObject>> {
        resolve_handle(&self.world)
    }

    /// Current presentation hint from the sorter's activity predicate.
    pub fn is_active(&self) -> bool {
        (self.activity)()
    }

    pub(crate) fn set_icon(&mut self, icon: IconKey) {
        debug_assert!(self.icon.is_none(), "icon created twice for {:?}", self.world_id);
        self.icon = Some(icon);
    }

    pub(crate) fn take_icon(&mut self) -> Option<IconKey> {
        self.icon.take()
    }
}
