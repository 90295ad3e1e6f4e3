//! Vector math re-exported from [`glam`].
//!
//! Pointer positions and panel sizes are plain [`Vec2`] values in the same
//! coordinate space as [`crate::geometry::Rect`].
//!
//! ```
//! use dockdrop_core::math::Vec2;
//!
//! let pointer = Vec2::new(120.0, 48.0);
//! assert_eq!(pointer.x, 120.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
