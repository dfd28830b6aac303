/// Running world extent: axis-aligned bounds over observed positions.
///
/// Every entity position observed during scanning expands the extent;
/// it only ever grows until `clear()`. Normalization maps world
/// coordinates into [0, 1] per axis over the observed range, which is
/// what puts the least-most tracked coordinate at 0 and the largest at 1
/// on the minimap.

use glam::Vec3;

/// Axis width at or below this is treated as zero for normalization.
const ZERO_WIDTH_EPSILON: f32 = 1e-6;

/// Axis-aligned bounding volume over all observed entity positions.
///
/// Empty until the first observation; an empty extent cannot normalize
/// (there is no scale yet), so `normalize` returns `None` instead of
/// dividing by zero.
#[derive(Debug, Clone, Copy)]
pub struct Extent {
    min: Vec3,
    max: Vec3,
    observed: bool,
}

impl Extent {
    /// Create an empty extent.
    pub fn new() -> Self {
        Self { min: Vec3::ZERO, max: Vec3::ZERO, observed: false }
    }

    /// Expand the extent to contain a position.
    ///
    /// The first observation initializes both corners; later ones only
    /// widen them. Idempotent for positions already inside.
    pub fn observe(&mut self, position: Vec3) {
        if self.observed {
            self.min = self.min.min(position);
            self.max = self.max.max(position);
        } else {
            self.min = position;
            self.max = position;
            self.observed = true;
        }
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Whether no position has been observed yet.
    pub fn is_empty(&self) -> bool {
        !self.observed
    }

    /// Minimum observed corner. Meaningless while empty.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum observed corner. Meaningless while empty.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Map a position into [0, 1] per axis over the observed range.
    ///
    /// Returns `None` while the extent is empty. An axis with zero width
    /// maps to the midpoint 0.5, never NaN or infinity.
    pub fn normalize(&self, position: Vec3) -> Option<Vec3> {
        if !self.observed {
            return None;
        }
        Some(Vec3::new(
            Self::normalize_axis(position.x, self.min.x, self.max.x),
            Self::normalize_axis(position.y, self.min.y, self.max.y),
            Self::normalize_axis(position.z, self.min.z, self.max.z),
        ))
    }

    fn normalize_axis(value: f32, min: f32, max: f32) -> f32 {
        let width = max - min;
        if width <= ZERO_WIDTH_EPSILON {
            0.5
        } else {
            (value - min) / width
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "extent_tests.rs"]
mod tests;
