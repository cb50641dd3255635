//! Canonical orthogonal camera poses.
//!
//! A locked view pins the camera to one of two poses derived from the mesh
//! bounds: *top* looks down the part's dominant axis, *side* looks along
//! the secondary axis. Both sit at twice the largest bounding dimension
//! from the centroid so the whole part stays in frame.

use glam::{DQuat, DVec3};
use torchpath_core::{CameraPose, MeshBounds, Point3D};

pub(crate) fn to_dvec3(p: Point3D) -> DVec3 {
    DVec3::new(p.x, p.y, p.z)
}

pub(crate) fn from_dvec3(v: DVec3) -> Point3D {
    Point3D::new(v.x, v.y, v.z)
}

/// Rotates `v` by `angle` radians about `axis` (unit-length).
pub(crate) fn rotate_about_axis(v: Point3D, axis: Point3D, angle: f64) -> Point3D {
    let q = DQuat::from_axis_angle(to_dvec3(axis), angle);
    from_dvec3(q * to_dvec3(v))
}

/// The two orthogonal poses cached once per mesh load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalPoses {
    pub top: CameraPose,
    pub side: CameraPose,
}

impl CanonicalPoses {
    /// Computes both poses from the mesh bounds and centroid.
    ///
    /// Axes are ranked by bounding extent (ties prefer Z, then Y, then X):
    /// top places the camera along the dominant axis with the secondary
    /// axis up; side places it along the secondary axis with the tertiary
    /// axis up. A degenerate (zero-extent) mesh still gets a usable pose
    /// at unit distance.
    pub fn from_bounds(bounds: &MeshBounds, centroid: Point3D) -> Self {
        let [dominant, secondary, tertiary] = bounds.ranked_axes();
        let mut distance = bounds.largest_dimension() * 2.0;
        if distance <= 0.0 {
            distance = 1.0;
        }

        let top = CameraPose::new(
            centroid + dominant.unit() * distance,
            centroid,
            secondary.unit(),
        );
        let side = CameraPose::new(
            centroid + secondary.unit() * distance,
            centroid,
            tertiary.unit(),
        );

        Self { top, side }
    }
}
