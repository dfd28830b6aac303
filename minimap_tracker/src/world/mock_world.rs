/// Mock world collaborators for unit tests (no host engine required)
///
/// These mocks let the tracker core be exercised end to end: a world of
/// killable objects, a snapshot query over clonable candidates, an icon
/// store, and a settable reference position.

#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use glam::{Vec2, Vec3};
#[cfg(test)]
use slotmap::SlotMap;

#[cfg(test)]
use crate::category::Category;
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use super::{IconKey, IconProvider, ReferenceProvider, WorldObject, WorldObjectId, WorldQuery};

// ============================================================================
// Mock World Object
// ============================================================================

#[cfg(test)]
pub struct MockWorldObject {
    id: WorldObjectId,
    position: Mutex<Vec3>,
    alive: AtomicBool,
}

#[cfg(test)]
impl MockWorldObject {
    pub fn new(id: u64, position: Vec3) -> Arc<Self> {
        Arc::new(Self {
            id: WorldObjectId(id),
            position: Mutex::new(position),
            alive: AtomicBool::new(true),
        })
    }

    /// Simulate the host destroying this object.
    pub fn kill(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn set_position(&self, position: Vec3) {
        *self.position.lock().unwrap() = position;
    }
}

#[cfg(test)]
impl WorldObject for MockWorldObject {
    fn object_id(&self) -> WorldObjectId {
        self.id
    }

    fn position(&self) -> Vec3 {
        *self.position.lock().unwrap()
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Mock Candidate
// ============================================================================

/// Test candidate in the shape of a host interactable component:
/// a world object plus a context token and an availability flag.
#[cfg(test)]
#[derive(Clone)]
pub struct MockInteractable {
    pub object: Arc<MockWorldObject>,
    pub context_token: &'static str,
    available: Arc<AtomicBool>,
}

#[cfg(test)]
impl MockInteractable {
    pub fn new(object: Arc<MockWorldObject>, context_token: &'static str) -> Self {
        Self {
            object,
            context_token,
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn world_object(&self) -> Arc<dyn WorldObject> {
        self.object.clone()
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

// ============================================================================
// Mock World Query
// ============================================================================

#[cfg(test)]
pub struct MockWorldQuery<C> {
    items: Mutex<Vec<C>>,
    fail: AtomicBool,
}

#[cfg(test)]
impl<C: Clone> MockWorldQuery<C> {
    pub fn new(items: Vec<C>) -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(items),
            fail: AtomicBool::new(false),
        })
    }

    /// Replace the snapshot returned by the next `find_all`.
    pub fn set_items(&self, items: Vec<C>) {
        *self.items.lock().unwrap() = items;
    }

    /// Make `find_all` fail until cleared.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[cfg(test)]
impl<C: Clone + Send + Sync> WorldQuery<C> for MockWorldQuery<C> {
    fn find_all(&self) -> Result<Vec<C>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::ScanFailed("mock world query failure".to_string()));
        }
        Ok(self.items.lock().unwrap().clone())
    }
}

// ============================================================================
// Mock Icon Provider
// ============================================================================

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockIcon {
    pub category: Category,
    pub position: Vec2,
    pub rotation: f32,
    pub active: bool,
}

#[cfg(test)]
#[derive(Default)]
pub struct MockIconProvider {
    icons: SlotMap<IconKey, MockIcon>,
    destroyed: usize,
}

#[cfg(test)]
impl MockIconProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(&self, key: IconKey) -> Option<&MockIcon> {
        self.icons.get(key)
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }
}

#[cfg(test)]
impl IconProvider for MockIconProvider {
    fn create_icon(&mut self, category: Category, position: Vec2) -> IconKey {
        self.icons.insert(MockIcon {
            category,
            position,
            rotation: 0.0,
            active: true,
        })
    }

    fn destroy_icon(&mut self, key: IconKey) {
        if self.icons.remove(key).is_some() {
            self.destroyed += 1;
        }
    }

    fn set_position(&mut self, key: IconKey, position: Vec2) {
        if let Some(icon) = self.icons.get_mut(key) {
            icon.position = position;
        }
    }

    fn set_rotation(&mut self, key: IconKey, radians: f32) {
        if let Some(icon) = self.icons.get_mut(key) {
            icon.rotation = radians;
        }
    }

    fn set_active(&mut self, key: IconKey, active: bool) {
        if let Some(icon) = self.icons.get_mut(key) {
            icon.active = active;
        }
    }
}

// ============================================================================
// Mock Reference Provider
// ============================================================================

#[cfg(test)]
pub struct MockReference {
    position: Mutex<Option<Vec3>>,
}

#[cfg(test)]
impl MockReference {
    pub fn new(position: Vec3) -> Self {
        Self { position: Mutex::new(Some(position)) }
    }

    /// A reference source with no active camera.
    pub fn none() -> Self {
        Self { position: Mutex::new(None) }
    }

    pub fn set(&self, position: Option<Vec3>) {
        *self.position.lock().unwrap() = position;
    }
}

#[cfg(test)]
impl ReferenceProvider for MockReference {
    fn reference_position(&self) -> Option<Vec3> {
        *self.position.lock().unwrap()
    }
}
