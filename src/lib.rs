//! # TorchPath
//!
//! The geometric and interaction core for authoring robotic torch paths
//! over the surface of a 3D part: pick points on a mesh from a locked
//! orthogonal view, group them into paths, persist them, and step a
//! simulated torch tip along them at an offset above the surface.
//!
//! ## Architecture
//!
//! TorchPath is organized as a workspace:
//!
//! 1. **torchpath-core** - Geometry types, error taxonomy, collaborator traits
//! 2. **torchpath-view** - Camera-lock state machine and surface picker
//! 3. **torchpath-paths** - Path store, persistence, waypoints, torch simulator
//! 4. **torchpath** - This facade: the [`TorchSession`] lifecycle glue
//!
//! The hosting application supplies the mesh (via
//! [`MeshSurface`](torchpath_core::MeshSurface)) and consumes visual state
//! (via [`SceneSink`](torchpath_core::SceneSink)); everything in between
//! is synchronous, single-threaded, and event-driven.

pub mod session;

pub use session::TorchSession;

pub use torchpath_core::{
    Axis, CameraPose, Error, MeshBounds, MeshError, MeshSurface, OffsetSegment, PathPolyline,
    PlanePoint, Point3D, Result, SceneSink, ScreenPoint, SurfaceNormal, ValidationError,
};
pub use torchpath_paths::{
    generate, AnnotatedPoint, PathDocument, PathStore, StepOutcome, TorchSimulator,
    WaypointPattern,
};
pub use torchpath_view::{
    PickSample, RotationDirection, SurfacePicker, ViewController, ViewMode, PICK_DEBOUNCE,
};
