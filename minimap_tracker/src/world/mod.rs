//! External collaborator contracts
//!
//! The tracker core never owns world objects, icons, the camera, or
//! configuration. The host engine implements these traits; the core only
//! borrows through them.

mod icon_provider;
mod world_object;

pub mod mock_world;

pub use icon_provider::{IconKey, IconProvider};
pub use world_object::{
    resolve_handle, ReferenceProvider, WorldHandle, WorldObject, WorldObjectId, WorldQuery,
};
