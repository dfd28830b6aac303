/// Category scanners.
///
/// A scanner binds one candidate type to the world query facility and a
/// sorter chain, and reconciles each snapshot against the registry:
/// new objects are appended, known objects are left in place (positions
/// refresh in the per-frame pass), and stale-record removal belongs to
/// the caller's lifecycle rules.

use crate::error::Result;
use crate::tracker_debug;
use crate::config::ConfigSource;
use crate::world::WorldQuery;
use super::extent::Extent;
use super::registry::Registry;
use super::sorter::{Sorter, SorterDesc};
use super::tracked_object::TrackedObject;

const LOG_SOURCE: &str = "minimap::Scanner";

/// A scene scan over one bound candidate type.
///
/// Stateless between invocations except through its effect on the
/// registry and extent.
pub trait TrackedObjectScanner: Send + Sync {
    /// Enumerate live candidates, classify them, and upsert new records
    /// into the registry. Returns the number of newly tracked entries.
    ///
    /// Missing or destroyed world objects are debug-logged skips, never
    /// errors; `Err` only reports a host-side enumeration failure.
    fn scan_scene(&self, registry: &mut Registry, extent: &mut Extent) -> Result<usize>;
}

// ===== SINGLE KIND =====

/// Scanner producing a single fixed category from one candidate type.
pub struct SingleKindScanner<C> {
    query: Box<dyn WorldQuery<C>>,
    sorter: Sorter<C>,
    dynamic: bool,
}

impl<C: Send + Sync + 'static> SingleKindScanner<C> {
    pub fn new(
        query: Box<dyn WorldQuery<C>>,
        desc: SorterDesc<C>,
        dynamic: bool,
        config: &dyn ConfigSource,
    ) -> Self {
        Self {
            query,
            sorter: Sorter::from_desc(desc, config),
            dynamic,
        }
    }
}

impl<C: Send + Sync + 'static> TrackedObjectScanner for SingleKindScanner<C> {
    fn scan_scene(&self, registry: &mut Registry, extent: &mut Extent) -> Result<usize> {
        scan_candidates(
            self.query.as_ref(),
            std::slice::from_ref(&self.sorter),
            self.dynamic,
            registry,
            extent,
        )
    }
}

// ===== MULTI KIND =====

/// Scanner resolving one candidate type through an ordered sorter chain,
/// spanning multiple categories.
///
/// Chain order is the tie-break: the first qualifying sorter decides the
/// candidate's category and the rest are not consulted.
pub struct MultiKindScanner<C> {
    query: Box<dyn WorldQuery<C>>,
    sorters: Vec<Sorter<C>>,
    dynamic: bool,
}

impl<C: Send + Sync + 'static> MultiKindScanner<C> {
    pub fn new(
        query: Box<dyn WorldQuery<C>>,
        descs: Vec<SorterDesc<C>>,
        dynamic: bool,
        config: &dyn ConfigSource,
    ) -> Self {
        let sorters = descs
            .into_iter()
            .map(|desc| Sorter::from_desc(desc, config))
            .collect();
        Self { query, sorters, dynamic }
    }
}

impl<C: Send + Sync + 'static> TrackedObjectScanner for MultiKindScanner<C> {
    fn scan_scene(&self, registry: &mut Registry, extent: &mut Extent) -> Result<usize> {
        scan_candidates(
            self.query.as_ref(),
            &self.sorters,
            self.dynamic,
            registry,
            extent,
        )
    }
}

// ===== SHARED ROUTINE =====

/// First-match classification plus identity-deduplicated insertion.
fn scan_candidates<C: Send + Sync + 'static>(
    query: &dyn WorldQuery<C>,
    sorters: &[Sorter<C>],
    dynamic: bool,
    registry: &mut Registry,
    extent: &mut Extent,
) -> Result<usize> {
    let candidates = query.find_all()?;

    let mut added = 0;
    for candidate in candidates {
        let Some(sorter) = sorters.iter().find(|sorter| sorter.qualifies(&candidate)) else {
            continue;
        };

        let Some(object) = sorter.extract(&candidate) else {
            tracker_debug!(
                LOG_SOURCE,
                "candidate for {} has no world object, skipping",
                sorter.category().name()
            );
            continue;
        };

        if !object.is_alive() {
            tracker_debug!(
                LOG_SOURCE,
                "world object {:?} already destroyed, skipping",
                object.object_id()
            );
            continue;
        }

        // Observed even when already tracked: a moved entity may have
        // left the known bounds.
        extent.observe(object.position());

        if registry.contains(object.object_id()) {
            continue;
        }

        let activity = sorter.activity_thunk(candidate);
        if registry.insert(TrackedObject::new(sorter.category(), &object, dynamic, activity)) {
            added += 1;
        }
    }

    Ok(added)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
