//! Dockdrop Core
//!
//! Shared utilities for the dockdrop crates: logging setup, profiling scopes,
//! generational arena storage and the small amount of geometry the drop
//! resolver needs.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
