//! Scanning, classification, tracking and projection
//!
//! The pipeline: scanners enumerate live world candidates, the sorter
//! chain classifies them, the registry keeps the tracked set, the extent
//! normalizes world positions, and the orchestrator decides when any of
//! it runs.

mod extent;
mod orchestrator;
mod projection;
mod registry;
mod scanner;
mod sorter;
mod tracked_object;

pub use extent::Extent;
pub use orchestrator::{
    ScanOrchestrator, ScanOrchestratorDesc, ScanOutcome, DEFAULT_COOLDOWN_SECS,
    DEFAULT_RESCAN_INTERVAL_SECS,
};
pub use projection::to_minimap_space;
pub use registry::Registry;
pub use scanner::{MultiKindScanner, SingleKindScanner, TrackedObjectScanner};
pub use sorter::{Extractor, Predicate, Sorter, SorterDesc};
pub use tracked_object::TrackedObject;
