//! # TorchPath View
//!
//! Interactive-navigation control for the authoring session:
//! the camera-lock state machine ([`ViewController`]) and the ray-based
//! surface picker ([`SurfacePicker`]). Pose math uses `glam`.

pub mod camera;
pub mod controller;
pub mod picker;

pub use camera::CanonicalPoses;
pub use controller::{RotationDirection, ViewController, ViewMode};
pub use picker::{PickSample, SurfacePicker, PICK_DEBOUNCE};
