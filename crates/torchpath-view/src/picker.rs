//! Ray-based surface picking.
//!
//! Converts a 2D click into a surface point plus its local normal by
//! delegating the ray/surface intersection to the mesh collaborator and
//! reading the nearest vertex's precomputed normal. The picker itself is
//! mode-agnostic; the session only calls it while a camera lock is active.

use std::time::{Duration, Instant};

use tracing::debug;

use torchpath_core::{CameraPose, MeshError, MeshSurface, Point3D, ScreenPoint, SurfaceNormal};

/// Picks closer together than this are duplicate low-level events from one
/// physical click and are dropped.
pub const PICK_DEBOUNCE: Duration = Duration::from_millis(100);

/// A resolved surface sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickSample {
    pub position: Point3D,
    pub normal: SurfaceNormal,
}

/// Resolves screen coordinates to surface samples, with debouncing.
#[derive(Debug, Clone, Default)]
pub struct SurfacePicker {
    last_accepted: Option<Instant>,
}

impl SurfacePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new picking session: clears the debounce timestamp so the
    /// first click after arming always lands.
    pub fn arm(&mut self) {
        self.last_accepted = None;
    }

    /// Resolves one click.
    ///
    /// `Ok(None)` covers both a ray miss and a debounced duplicate; a
    /// collaborator failure aborts only this pick and changes nothing.
    pub fn pick(
        &mut self,
        screen: ScreenPoint,
        camera: &CameraPose,
        mesh: &dyn MeshSurface,
    ) -> Result<Option<PickSample>, MeshError> {
        let now = Instant::now();
        if let Some(previous) = self.last_accepted {
            if now.duration_since(previous) < PICK_DEBOUNCE {
                debug!("pick debounced");
                return Ok(None);
            }
        }

        let Some(position) = mesh.cast_ray(screen, camera)? else {
            debug!(x = screen.x, y = screen.y, "pick missed the surface");
            return Ok(None);
        };
        let normal = mesh.nearest_point_normal(position)?;

        self.last_accepted = Some(now);
        Ok(Some(PickSample { position, normal }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torchpath_core::MeshBounds;

    /// Flat test surface: a click at (x, y) hits (x, y, 0) with a raw
    /// (non-unit) +Z vertex normal.
    struct FlatMesh;

    impl MeshSurface for FlatMesh {
        fn bounds(&self) -> MeshBounds {
            MeshBounds::new(Point3D::ZERO, Point3D::new(100.0, 100.0, 0.0))
        }

        fn centroid(&self) -> Point3D {
            Point3D::new(50.0, 50.0, 0.0)
        }

        fn nearest_point_normal(&self, _point: Point3D) -> Result<SurfaceNormal, MeshError> {
            Ok(SurfaceNormal::from_vector(Point3D::new(0.0, 0.0, 4.0)))
        }

        fn cast_ray(
            &self,
            screen: ScreenPoint,
            _camera: &CameraPose,
        ) -> Result<Option<Point3D>, MeshError> {
            if screen.x < 0.0 {
                Ok(None)
            } else {
                Ok(Some(Point3D::new(screen.x, screen.y, 0.0)))
            }
        }
    }

    struct BrokenMesh;

    impl MeshSurface for BrokenMesh {
        fn bounds(&self) -> MeshBounds {
            MeshBounds::new(Point3D::ZERO, Point3D::ZERO)
        }

        fn centroid(&self) -> Point3D {
            Point3D::ZERO
        }

        fn nearest_point_normal(&self, _point: Point3D) -> Result<SurfaceNormal, MeshError> {
            Err(MeshError::SurfaceQueryFailed {
                reason: "no vertex data".to_string(),
            })
        }

        fn cast_ray(
            &self,
            _screen: ScreenPoint,
            _camera: &CameraPose,
        ) -> Result<Option<Point3D>, MeshError> {
            Err(MeshError::RayCastFailed {
                reason: "camera unavailable".to_string(),
            })
        }
    }

    fn camera() -> CameraPose {
        CameraPose::new(
            Point3D::new(50.0, 50.0, 200.0),
            Point3D::new(50.0, 50.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_first_pick_after_arm_lands() {
        let mut picker = SurfacePicker::new();
        picker.arm();
        let sample = picker
            .pick(ScreenPoint::new(10.0, 20.0), &camera(), &FlatMesh)
            .unwrap()
            .unwrap();
        assert_eq!(sample.position, Point3D::new(10.0, 20.0, 0.0));
        assert!((sample.normal.as_vector().length() - 1.0).abs() < 1e-12);
        assert_eq!(sample.normal.z(), 1.0);
    }

    #[test]
    fn test_duplicate_click_is_debounced() {
        let mut picker = SurfacePicker::new();
        picker.arm();
        let first = picker
            .pick(ScreenPoint::new(10.0, 20.0), &camera(), &FlatMesh)
            .unwrap();
        assert!(first.is_some());

        // Same physical click, microseconds later.
        let second = picker
            .pick(ScreenPoint::new(10.0, 21.0), &camera(), &FlatMesh)
            .unwrap();
        assert!(second.is_none());
    }

    #[test]
    fn test_pick_accepted_once_debounce_elapses() {
        let mut picker = SurfacePicker::new();
        picker.last_accepted = Some(Instant::now() - PICK_DEBOUNCE * 2);
        let sample = picker
            .pick(ScreenPoint::new(1.0, 1.0), &camera(), &FlatMesh)
            .unwrap();
        assert!(sample.is_some());
    }

    #[test]
    fn test_rearming_clears_debounce() {
        let mut picker = SurfacePicker::new();
        picker.arm();
        picker
            .pick(ScreenPoint::new(10.0, 20.0), &camera(), &FlatMesh)
            .unwrap();
        picker.arm();
        let sample = picker
            .pick(ScreenPoint::new(30.0, 40.0), &camera(), &FlatMesh)
            .unwrap();
        assert!(sample.is_some());
    }

    #[test]
    fn test_miss_returns_none_without_accepting() {
        let mut picker = SurfacePicker::new();
        picker.arm();
        let miss = picker
            .pick(ScreenPoint::new(-5.0, 0.0), &camera(), &FlatMesh)
            .unwrap();
        assert!(miss.is_none());

        // A miss must not start the debounce window.
        let hit = picker
            .pick(ScreenPoint::new(5.0, 5.0), &camera(), &FlatMesh)
            .unwrap();
        assert!(hit.is_some());
    }

    #[test]
    fn test_collaborator_failure_surfaces_and_leaves_state() {
        let mut picker = SurfacePicker::new();
        picker.arm();
        let err = picker
            .pick(ScreenPoint::new(0.0, 0.0), &camera(), &BrokenMesh)
            .unwrap_err();
        assert!(matches!(err, MeshError::RayCastFailed { .. }));

        // The failed pick did not consume the debounce window.
        let sample = picker
            .pick(ScreenPoint::new(5.0, 5.0), &camera(), &FlatMesh)
            .unwrap();
        assert!(sample.is_some());
    }
}
