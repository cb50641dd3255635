//! Camera-lock state machine.
//!
//! Three states: free navigation, top lock, side lock. A lock pins the
//! camera to a canonical pose cached at mesh load and disables free
//! interaction; while locked the view can be stepped in 90-degree
//! increments. Exiting a lock keeps whatever pose the rotations produced
//! (there is no pre-lock pose restore) and only re-enables interaction.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, warn};

use torchpath_core::{CameraPose, MeshBounds, Point3D};

use crate::camera::{rotate_about_axis, CanonicalPoses};

/// Navigation state of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Free rotate/pan/zoom, no picking.
    #[default]
    Free,
    /// Pinned to the canonical top pose.
    TopLocked,
    /// Pinned to the canonical side pose.
    SideLocked,
}

impl ViewMode {
    /// Returns the name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Free => "Free",
            ViewMode::TopLocked => "TopLocked",
            ViewMode::SideLocked => "SideLocked",
        }
    }
}

/// Direction of a 90-degree view rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Cw,
    Ccw,
}

/// Manages the camera lock and the canonical orthogonal poses.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    mode: ViewMode,
    canonical: Option<CanonicalPoses>,
    pose: Option<CameraPose>,
    rotation_index: i32,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly loaded mesh: computes and caches the canonical
    /// poses and resets the controller to free navigation.
    pub fn set_mesh(&mut self, bounds: &MeshBounds, centroid: Point3D) {
        self.canonical = Some(CanonicalPoses::from_bounds(bounds, centroid));
        self.mode = ViewMode::Free;
        self.pose = None;
        self.rotation_index = 0;
        debug!("canonical view poses cached for new mesh");
    }

    /// Drops all mesh-derived state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Free drag interaction is allowed only outside the lock modes.
    pub fn interaction_enabled(&self) -> bool {
        self.mode == ViewMode::Free
    }

    /// Number of 90-degree steps applied since the lock was entered, mod 4.
    /// Meaningful only while a lock is active.
    pub fn rotation_index(&self) -> i32 {
        self.rotation_index
    }

    /// The pose the viewer should display: the live locked pose while a
    /// lock is active, or the pose left behind by the last lock session.
    pub fn pose(&self) -> Option<CameraPose> {
        self.pose
    }

    /// Enters the top lock, leaving the side lock first if it is active.
    pub fn enter_top_lock(&mut self) {
        self.enter_lock(ViewMode::TopLocked);
    }

    /// Enters the side lock, leaving the top lock first if it is active.
    pub fn enter_side_lock(&mut self) {
        self.enter_lock(ViewMode::SideLocked);
    }

    fn enter_lock(&mut self, target: ViewMode) {
        let Some(canonical) = self.canonical else {
            warn!(mode = target.name(), "lock requested before a mesh was loaded");
            return;
        };
        if self.mode != ViewMode::Free && self.mode != target {
            self.exit_lock();
        }
        self.pose = Some(match target {
            ViewMode::TopLocked => canonical.top,
            ViewMode::SideLocked => canonical.side,
            ViewMode::Free => unreachable!("enter_lock is never called with Free"),
        });
        self.mode = target;
        self.rotation_index = 0;
        debug!(mode = target.name(), "camera lock entered");
    }

    /// Returns to free navigation. The displayed pose stays whatever the
    /// locked pose currently is; rotations applied while locked persist.
    pub fn exit_lock(&mut self) {
        if self.mode == ViewMode::Free {
            return;
        }
        debug!(mode = self.mode.name(), "camera lock exited");
        self.mode = ViewMode::Free;
    }

    /// Rotates the locked view by 90 degrees. No-op while free.
    ///
    /// Top lock spins the up vector in-plane about the view axis; side
    /// lock swings the camera position around the centroid about the up
    /// axis. Clockwise steps the rotation index up, counter-clockwise
    /// steps it down, both mod 4.
    pub fn rotate(&mut self, direction: RotationDirection) {
        if self.mode == ViewMode::Free {
            debug!("rotate ignored outside lock mode");
            return;
        }
        let Some(pose) = self.pose.as_mut() else {
            warn!("rotate requested before a mesh was loaded");
            return;
        };

        let (angle, step) = match direction {
            RotationDirection::Cw => (-FRAC_PI_2, 1),
            RotationDirection::Ccw => (FRAC_PI_2, -1),
        };

        match self.mode {
            ViewMode::TopLocked => {
                let axis = pose.view_direction();
                pose.up = rotate_about_axis(pose.up, axis, angle);
            }
            ViewMode::SideLocked => {
                let axis = pose.up;
                let relative = pose.position - pose.focal_point;
                pose.position = pose.focal_point + rotate_about_axis(relative, axis, angle);
            }
            ViewMode::Free => unreachable!("handled above"),
        }

        self.rotation_index = (self.rotation_index + step).rem_euclid(4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_controller() -> ViewController {
        let mut vc = ViewController::new();
        let bounds = MeshBounds::new(Point3D::ZERO, Point3D::new(10.0, 10.0, 10.0));
        vc.set_mesh(&bounds, bounds.center());
        vc
    }

    #[test]
    fn test_lock_before_mesh_is_rejected() {
        let mut vc = ViewController::new();
        vc.enter_top_lock();
        assert_eq!(vc.mode(), ViewMode::Free);
        assert!(vc.pose().is_none());
    }

    #[test]
    fn test_enter_top_lock_applies_canonical_pose() {
        let mut vc = loaded_controller();
        vc.enter_top_lock();
        assert_eq!(vc.mode(), ViewMode::TopLocked);
        assert!(!vc.interaction_enabled());
        assert_eq!(vc.rotation_index(), 0);

        let pose = vc.pose().unwrap();
        assert_eq!(pose.position, Point3D::new(5.0, 5.0, 25.0));
        assert_eq!(pose.up, Point3D::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_locks_are_mutually_exclusive() {
        let mut vc = loaded_controller();
        vc.enter_top_lock();
        vc.rotate(RotationDirection::Cw);
        vc.enter_side_lock();

        assert_eq!(vc.mode(), ViewMode::SideLocked);
        assert_eq!(vc.rotation_index(), 0);
        assert_eq!(vc.pose().unwrap().position, Point3D::new(5.0, 25.0, 5.0));
    }

    #[test]
    fn test_reentering_lock_restores_canonical_pose() {
        let mut vc = loaded_controller();
        vc.enter_top_lock();
        vc.rotate(RotationDirection::Ccw);
        vc.enter_top_lock();

        assert_eq!(vc.rotation_index(), 0);
        assert_eq!(vc.pose().unwrap().up, Point3D::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotate_while_free_is_noop() {
        let mut vc = loaded_controller();
        vc.rotate(RotationDirection::Cw);
        assert_eq!(vc.rotation_index(), 0);
        assert!(vc.pose().is_none());
    }

    #[test]
    fn test_rotation_index_wraps_mod_4() {
        let mut vc = loaded_controller();
        vc.enter_top_lock();
        for _ in 0..5 {
            vc.rotate(RotationDirection::Cw);
        }
        assert_eq!(vc.rotation_index(), 1);

        vc.rotate(RotationDirection::Ccw);
        vc.rotate(RotationDirection::Ccw);
        assert_eq!(vc.rotation_index(), 3);
    }

    #[test]
    fn test_four_rotations_restore_up_vector() {
        let mut vc = loaded_controller();
        vc.enter_top_lock();
        let before = vc.pose().unwrap().up;
        for _ in 0..4 {
            vc.rotate(RotationDirection::Cw);
        }
        let after = vc.pose().unwrap().up;
        assert!((after - before).length() < 1e-9);
    }

    #[test]
    fn test_four_rotations_restore_side_position() {
        let mut vc = loaded_controller();
        vc.enter_side_lock();
        let before = vc.pose().unwrap().position;
        for _ in 0..4 {
            vc.rotate(RotationDirection::Ccw);
        }
        let after = vc.pose().unwrap().position;
        assert!((after - before).length() < 1e-9);
    }

    #[test]
    fn test_exit_lock_keeps_rotated_pose() {
        let mut vc = loaded_controller();
        vc.enter_side_lock();
        vc.rotate(RotationDirection::Cw);
        let rotated = vc.pose().unwrap();

        vc.exit_lock();
        assert_eq!(vc.mode(), ViewMode::Free);
        assert!(vc.interaction_enabled());
        assert_eq!(vc.pose().unwrap(), rotated);
    }
}
