/// Classification rules for scan candidates.
///
/// A Sorter binds exactly one display category to a qualification
/// predicate, a world-object extractor, and an activity predicate.
/// Sorters are built once at startup from static configuration and are
/// immutable afterwards.

use std::sync::Arc;
use crate::category::Category;
use crate::config::ConfigSource;
use crate::world::WorldObject;

/// Predicate over a candidate.
pub type Predicate<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;

/// Extracts the world-linkable object behind a candidate.
///
/// `None` means the candidate has no usable world object (e.g. a modded
/// component without the expected linkage); the scanner skips it.
pub type Extractor<C> = Arc<dyn Fn(&C) -> Option<Arc<dyn WorldObject>> + Send + Sync>;

// ===== DESC =====

/// Construction parameters for a [`Sorter`].
pub struct SorterDesc<C> {
    /// Display category this rule resolves to.
    pub category: Category,
    /// World-object extractor.
    pub extract: Extractor<C>,
    /// Qualification predicate. When absent, every candidate qualifies.
    pub select: Option<Predicate<C>>,
    /// Activity predicate. When absent, always active.
    pub active: Option<Predicate<C>>,
}

impl<C> SorterDesc<C> {
    pub fn new(
        category: Category,
        extract: impl Fn(&C) -> Option<Arc<dyn WorldObject>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            extract: Arc::new(extract),
            select: None,
            active: None,
        }
    }

    pub fn with_select(mut self, select: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        self.select = Some(Arc::new(select));
        self
    }

    pub fn with_active(mut self, active: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        self.active = Some(Arc::new(active));
        self
    }
}

// ===== SORTER =====

/// A single classification rule bound to one display category.
///
/// The config-enabled flag is resolved exactly once, here at
/// construction; configuration is not re-read live.
pub struct Sorter<C> {
    category: Category,
    enabled: bool,
    select: Option<Predicate<C>>,
    extract: Extractor<C>,
    active: Option<Predicate<C>>,
}

impl<C> Sorter<C> {
    pub fn from_desc(desc: SorterDesc<C>, config: &dyn ConfigSource) -> Self {
        Self {
            category: desc.category,
            enabled: config.category_enabled(desc.category),
            select: desc.select,
            extract: desc.extract,
            active: desc.active,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the candidate belongs to this sorter's category.
    ///
    /// A disabled category never qualifies. A missing predicate accepts
    /// every candidate of the bound type.
    pub fn qualifies(&self, candidate: &C) -> bool {
        self.enabled && self.select.as_ref().map_or(true, |select| select(candidate))
    }

    /// The world object behind the candidate, if it has one.
    pub fn extract(&self, candidate: &C) -> Option<Arc<dyn WorldObject>> {
        (self.extract)(candidate)
    }

    /// Activity check for presentation. Defaults to active when no
    /// predicate was supplied.
    pub fn is_active(&self, candidate: &C) -> bool {
        self.active.as_ref().map_or(true, |active| active(candidate))
    }

    /// Capture the candidate into a reusable activity check.
    ///
    /// The tracked record calls this thunk every frame to refresh its
    /// presentation hint.
    pub fn activity_thunk(&self, candidate: C) -> Box<dyn Fn() -> bool + Send + Sync>
    where
        C: Send + Sync + 'static,
    {
        match &self.active {
            Some(active) => {
                let active = Arc::clone(active);
                Box::new(move || active(&candidate))
            }
            None => Box::new(|| true),
        }
    }
}

#[cfg(test)]
#[path = "sorter_tests.rs"]
mod tests;
