//! Geometry primitives shared across the workspace.
//!
//! ## Modules
//!
//! - [`geometry`]: points, surface normals, mesh bounds, screen coordinates.

pub mod geometry;

pub use geometry::*;
