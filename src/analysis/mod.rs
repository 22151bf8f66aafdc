//! Analysis result types
//!
//! Everything the pipeline hands back to callers (visualizers, players,
//! batch tooling) in one serializable struct.

pub mod result;
