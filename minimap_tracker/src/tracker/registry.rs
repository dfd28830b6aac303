/// Tracked-object registry.
///
/// The authoritative ordered collection of everything the minimap
/// currently tracks. An identity set mirrors the entries so a world
/// object can never be tracked twice, no matter how many scanners see
/// it in one pass.

use glam::Vec3;
use rustc_hash::FxHashSet;
use crate::tracker_debug;
use crate::world::{IconProvider, WorldObjectId};
use super::extent::Extent;
use super::projection::to_minimap_space;
use super::tracked_object::TrackedObject;

const LOG_SOURCE: &str = "minimap::Registry";

/// Ordered collection of all currently tracked entities.
#[derive(Default)]
pub struct Registry {
    entries: Vec<TrackedObject>,
    tracked_ids: FxHashSet<WorldObjectId>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            tracked_ids: FxHashSet::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a world object is already tracked. Identity match, not value.
    pub fn contains(&self, id: WorldObjectId) -> bool {
        self.tracked_ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedObject> {
        self.entries.iter()
    }

    /// Append a new record.
    ///
    /// Returns false (dropping the record) if its world object is
    /// already tracked.
    pub(crate) fn insert(&mut self, entry: TrackedObject) -> bool {
        if !self.tracked_ids.insert(entry.world_id()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove every dynamic record and destroy its icon.
    ///
    /// Runs at the start of each scan pass; dynamic scanners repopulate
    /// afterwards. Iterates from the end so removal neither skips nor
    /// double-visits an entry. Returns the removed count.
    pub(crate) fn prune_dynamic(&mut self, icons: &mut dyn IconProvider) -> usize {
        let mut removed = 0;
        for index in (0..self.entries.len()).rev() {
            if !self.entries[index].is_dynamic() {
                continue;
            }
            self.remove_at(index, icons);
            removed += 1;
        }
        removed
    }

    /// Per-frame position pass.
    ///
    /// For every record: a dead world handle removes the record and its
    /// icon in this same pass; otherwise the record is re-projected
    /// through the live extent, its icon lazily created or moved, kept
    /// upright, and given the current activity hint.
    pub(crate) fn update_positions(
        &mut self,
        extent: &Extent,
        reference: Vec3,
        icons: &mut dyn IconProvider,
    ) {
        for index in (0..self.entries.len()).rev() {
            let resolved = self.entries[index].world_object();
            let Some(object) = resolved else {
                tracker_debug!(
                    LOG_SOURCE,
                    "world object {:?} no longer exists, dropping entry",
                    self.entries[index].world_id()
                );
                self.remove_at(index, icons);
                continue;
            };

            // No scale to place icons with until something has been observed.
            let Some(position) = to_minimap_space(object.position(), extent, reference) else {
                continue;
            };

            let entry = &mut self.entries[index];
            match entry.icon() {
                Some(icon) => {
                    icons.set_position(icon, position);
                    // Icons inherit the map's rotation; keep them upright.
                    icons.set_rotation(icon, 0.0);
                }
                None => {
                    let icon = icons.create_icon(entry.category(), position);
                    entry.set_icon(icon);
                }
            }

            if let Some(icon) = entry.icon() {
                icons.set_active(icon, entry.is_active());
            }
        }
    }

    /// Remove everything and destroy all icons.
    pub(crate) fn clear(&mut self, icons: &mut dyn IconProvider) {
        for mut entry in self.entries.drain(..) {
            if let Some(icon) = entry.take_icon() {
                icons.destroy_icon(icon);
            }
        }
        self.tracked_ids.clear();
    }

    fn remove_at(&mut self, index: usize, icons: &mut dyn IconProvider) {
        let mut entry = self.entries.remove(index);
        self.tracked_ids.remove(&entry.world_id());
        if let Some(icon) = entry.take_icon() {
            icons.destroy_icon(icon);
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
