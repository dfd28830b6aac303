/// Scan orchestration.
///
/// Owns the whole tracking session: registry, extent, scanner sets,
/// timers and the enabled flag. Triggers (entity death, interaction use,
/// the periodic rescan timer) all funnel through `scan_scene`, which
/// enforces the cooldown and contains every failure: callers are often
/// shared event dispatchers, and a propagating failure there would
/// starve later subscribers.

use crate::error::Result;
use crate::{tracker_debug, tracker_error, tracker_info};
use crate::utils::{Seconds, Timer};
use crate::world::{IconProvider, ReferenceProvider};
use super::extent::Extent;
use super::registry::Registry;
use super::scanner::TrackedObjectScanner;

const LOG_SOURCE: &str = "minimap::Orchestrator";

/// Default interval between automatic dynamic rescans.
pub const DEFAULT_RESCAN_INTERVAL_SECS: Seconds = 5.0;

/// Default minimum time between any two scan passes, however many
/// triggers fire in a burst.
pub const DEFAULT_COOLDOWN_SECS: Seconds = 2.0;

// ===== OUTCOME =====

/// Result of a scan request.
///
/// Failures are logged and contained here; callers always observe a
/// normal return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The pass ran; `tracked` records were newly added.
    Completed { tracked: usize },
    /// The cooldown has not expired; the trigger was ignored.
    Throttled,
    /// Tracking is disabled.
    Disabled,
    /// The pass failed; details went to the log.
    Failed,
}

// ===== DESC =====

/// Construction parameters for [`ScanOrchestrator`].
///
/// Static scanners run once per scene lifetime; dynamic scanners run
/// every pass and their records are pruned first.
pub struct ScanOrchestratorDesc {
    pub static_scanners: Vec<Box<dyn TrackedObjectScanner>>,
    pub dynamic_scanners: Vec<Box<dyn TrackedObjectScanner>>,
    pub rescan_interval_secs: Seconds,
    pub cooldown_secs: Seconds,
}

impl Default for ScanOrchestratorDesc {
    fn default() -> Self {
        Self {
            static_scanners: Vec::new(),
            dynamic_scanners: Vec::new(),
            rescan_interval_secs: DEFAULT_RESCAN_INTERVAL_SECS,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        }
    }
}

// ===== ORCHESTRATOR =====

/// Session owner: decides when scans run and drives the per-frame
/// position pass.
///
/// Single-threaded and frame-driven; scans triggered from event
/// callbacks and from the update tick run on the same thread, so the
/// registry and extent are never mutated concurrently.
pub struct ScanOrchestrator {
    registry: Registry,
    extent: Extent,
    static_scanners: Vec<Box<dyn TrackedObjectScanner>>,
    dynamic_scanners: Vec<Box<dyn TrackedObjectScanner>>,
    scanned_static: bool,
    enabled: bool,
    rescan_timer: Timer,
    cooldown: Timer,
}

impl ScanOrchestrator {
    pub fn from_desc(desc: ScanOrchestratorDesc) -> Self {
        let mut rescan_timer = Timer::new(desc.rescan_interval_secs);
        rescan_timer.start();

        Self {
            registry: Registry::new(),
            extent: Extent::new(),
            static_scanners: desc.static_scanners,
            dynamic_scanners: desc.dynamic_scanners,
            scanned_static: false,
            enabled: true,
            rescan_timer,
            cooldown: Timer::new(desc.cooldown_secs),
        }
    }

    // ===== ACCESSORS =====

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether static scanners have completed once this scene.
    pub fn has_scanned_static(&self) -> bool {
        self.scanned_static
    }

    // ===== SCANNING =====

    /// Trigger a scan (entity death, interaction use, rescan timer).
    ///
    /// Cooldown gating: the first trigger starts the cooldown and scans;
    /// triggers inside the window are ignored; a trigger after expiry
    /// rearms the window and scans again.
    pub fn scan_scene(&mut self, icons: &mut dyn IconProvider) -> ScanOutcome {
        if !self.enabled {
            return ScanOutcome::Disabled;
        }

        if !self.cooldown.started() {
            self.cooldown.start();
        } else if !self.cooldown.expired() {
            return ScanOutcome::Throttled;
        }
        self.cooldown.restart();

        match self.run_scan_pass(icons) {
            Ok(tracked) => ScanOutcome::Completed { tracked },
            Err(error) => {
                tracker_error!(LOG_SOURCE, "scan pass failed: {}", error);
                ScanOutcome::Failed
            }
        }
    }

    fn run_scan_pass(&mut self, icons: &mut dyn IconProvider) -> Result<usize> {
        tracker_debug!(LOG_SOURCE, "scanning scene");

        tracker_debug!(LOG_SOURCE, "clearing dynamically tracked objects");
        let pruned = self.registry.prune_dynamic(icons);
        if pruned > 0 {
            tracker_debug!(LOG_SOURCE, "pruned {} dynamic records", pruned);
        }

        let mut tracked = 0;

        if !self.scanned_static {
            tracker_debug!(LOG_SOURCE, "scanning static types");
            for scanner in &self.static_scanners {
                tracked += scanner.scan_scene(&mut self.registry, &mut self.extent)?;
            }
            // Set only once every static scanner succeeded; a failed pass
            // retries them next time.
            self.scanned_static = true;
        }

        tracker_debug!(LOG_SOURCE, "scanning dynamic types");
        for scanner in &self.dynamic_scanners {
            tracked += scanner.scan_scene(&mut self.registry, &mut self.extent)?;
        }

        Ok(tracked)
    }

    // ===== FRAME UPDATE =====

    /// Per-frame tick.
    ///
    /// Advances both timers, runs a due rescan (before the position pass,
    /// so this tick's icons reflect it), then re-projects every record
    /// through the live extent. An unavailable reference position skips
    /// the position pass for this frame only.
    pub fn update(
        &mut self,
        delta_time: Seconds,
        reference: &dyn ReferenceProvider,
        icons: &mut dyn IconProvider,
    ) {
        self.cooldown.update(delta_time);
        self.rescan_timer.update(delta_time);

        if !self.enabled {
            return;
        }

        if self.rescan_timer.expired() {
            self.rescan_timer.restart();
            self.scan_scene(icons);
        }

        let Some(reference_position) = reference.reference_position() else {
            tracker_debug!(LOG_SOURCE, "no reference position this frame, skipping icon update");
            return;
        };

        self.registry.update_positions(&self.extent, reference_position, icons);
    }

    // ===== LIFECYCLE =====

    /// Enable or disable tracking.
    ///
    /// Disabling resets the whole session; re-enabling starts from a
    /// clean slate (static objects will be rescanned).
    pub fn set_enabled(&mut self, enabled: bool, icons: &mut dyn IconProvider) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            tracker_info!(LOG_SOURCE, "tracking disabled, resetting");
            self.reset(icons);
        }
    }

    /// Clear all session state: records, icons, extent, timers, and the
    /// static-scan flag. Called on scene teardown or overlay recreation.
    pub fn reset(&mut self, icons: &mut dyn IconProvider) {
        tracker_debug!(LOG_SOURCE, "clearing tracked objects and extent");
        self.registry.clear(icons);
        self.extent.clear();
        self.rescan_timer.restart();
        self.cooldown.reset();
        self.scanned_static = false;
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
