/// Contracts required of the host world.
///
/// A world object is anything with a queryable 3D position, a liveness
/// check, and a stable identity. The host may destroy any of them at any
/// time outside this system's control, so every use goes through a
/// validity check first.

use std::sync::{Arc, Weak};
use glam::Vec3;
use crate::error::Result;

// ===== IDENTITY =====

/// Host-supplied stable identity for a world object.
///
/// Used by the registry to match "same object" across scans. Identity
/// comparison, never value comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldObjectId(pub u64);

// ===== WORLD OBJECT =====

/// A world-linkable object owned by the host engine.
///
/// The tracker never manages the lifetime of world objects, only of its
/// own tracked records and icons.
pub trait WorldObject: Send + Sync {
    /// Stable identity across scans.
    fn object_id(&self) -> WorldObjectId;

    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Whether the host still considers this object alive.
    ///
    /// The allocation may outlive the object (a tracked record can keep
    /// the memory reachable); this check is what decides validity.
    fn is_alive(&self) -> bool;
}

/// Non-owning link to a host world object.
pub type WorldHandle = Weak<dyn WorldObject>;

/// Resolve a handle to a live object.
///
/// Returns `None` once the host has dropped or destroyed the object.
pub fn resolve_handle(handle: &WorldHandle) -> Option<Arc<dyn WorldObject>> {
    handle.upgrade().filter(|object| object.is_alive())
}

// ===== WORLD QUERY =====

/// Point-in-time enumeration of live candidate instances.
///
/// A snapshot, not a subscription: no ordering guarantee, may be empty.
/// `Err` models a host-side enumeration failure (e.g. the scene is being
/// torn down); the orchestrator contains it.
pub trait WorldQuery<C>: Send + Sync {
    fn find_all(&self) -> Result<Vec<C>>;
}

impl<C, Q: WorldQuery<C> + ?Sized> WorldQuery<C> for Arc<Q> {
    fn find_all(&self) -> Result<Vec<C>> {
        (**self).find_all()
    }
}

// ===== REFERENCE POSITION =====

/// Supplies the current camera/player world position.
///
/// `None` models transient unavailability (no active camera); the core
/// skips that frame's icon update rather than failing.
pub trait ReferenceProvider: Send + Sync {
    fn reference_position(&self) -> Option<Vec3>;
}
