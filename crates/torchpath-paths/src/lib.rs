//! # TorchPath Paths
//!
//! The data side of the authoring session: the multi-path annotated-point
//! store ([`PathStore`]), its versioned JSON persistence, the parametric
//! waypoint generator, and the torch-offset simulator ([`TorchSimulator`]).

pub mod serialization;
pub mod store;
pub mod torch;
pub mod waypoints;

pub use serialization::{PathDocument, PointRecord, ProjectMetadata};
pub use store::{AnnotatedPoint, PathStore};
pub use torch::{StepOutcome, TorchSimulator};
pub use waypoints::{generate, WaypointPattern};
