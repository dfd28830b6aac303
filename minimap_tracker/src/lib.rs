/*!
# Minimap Tracker

Entity classification, incremental tracking, and minimap-space projection
for a real-time overlay. Each scan discovers relevant world entities,
classifies them through ordered sorter chains, and reconciles them against
the tracked set; each frame re-projects every tracked record into
normalized 2D minimap space over a monotonically growing world extent.

## Architecture

- **Extent**: running axis-aligned bounds over all observed positions,
  the normalization basis for projection
- **Sorter**: one classification rule (qualify + extract + activity),
  chained first-match-wins
- **Scanners**: enumerate live world candidates and upsert new records
- **Registry**: the ordered tracked set, with the per-frame position pass
- **ScanOrchestrator**: cooldown-gated scan passes and frame updates

The host engine stays in charge of the world: scene queries, icon
rendering, the camera, and configuration are reached only through the
traits in [`world`] and [`config`]. Backend failures degrade to a skipped
entity or frame with a log line, never a crash.
*/

// Internal modules
mod error;

pub mod category;
pub mod config;
pub mod log;
pub mod tracker;
pub mod utils;
pub mod world;

pub use error::{Error, Result};

// Main minimap namespace module
pub mod minimap {
    // Error types
    pub use crate::error::{Error, Result};

    // Categories and configuration
    pub use crate::category::{Category, CategorySet};
    pub use crate::config::{ConfigSource, StaticConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Host collaborator contracts
    pub mod world {
        pub use crate::world::*;
    }

    // Tracking pipeline
    pub mod tracker {
        pub use crate::tracker::*;
    }
}

// Re-export math library at crate root
pub use glam;
