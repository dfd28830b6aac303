//! Shared utilities

mod timer;

pub use timer::{Seconds, Timer};
