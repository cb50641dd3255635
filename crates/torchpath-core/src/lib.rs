//! # TorchPath Core
//!
//! Core types, traits, and errors for TorchPath.
//! Provides the fundamental abstractions shared by the view controller,
//! the path store, and the torch simulator: geometry primitives, the mesh
//! collaborator trait, the scene sink trait, and the error taxonomy.

pub mod error;
pub mod mesh;
pub mod scene;
pub mod types;

pub use error::{Error, MeshError, Result, ValidationError};
pub use mesh::MeshSurface;
pub use scene::{OffsetSegment, PathPolyline, SceneSink};
pub use types::{Axis, CameraPose, MeshBounds, PlanePoint, Point3D, ScreenPoint, SurfaceNormal};
