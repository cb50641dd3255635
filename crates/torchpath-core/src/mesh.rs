//! The mesh collaborator interface.
//!
//! The core never owns triangle data. A loaded part is reached through
//! [`MeshSurface`], which the hosting application implements on top of its
//! geometry/rendering stack. Bounds and centroid are cheap cached values;
//! the two query methods may fail and report that through [`MeshError`].

use crate::error::MeshError;
use crate::types::{CameraPose, MeshBounds, Point3D, ScreenPoint, SurfaceNormal};

/// A triangulated part surface supplied by the hosting application.
pub trait MeshSurface {
    /// Axis-aligned bounding box of the part.
    fn bounds(&self) -> MeshBounds;

    /// Centroid of the part, the focal point of every canonical view.
    fn centroid(&self) -> Point3D;

    /// Precomputed normal at the mesh vertex nearest to `point`.
    ///
    /// [`SurfaceNormal::from_vector`] renormalizes, so implementations may
    /// feed it raw per-vertex data.
    fn nearest_point_normal(&self, point: Point3D) -> Result<SurfaceNormal, MeshError>;

    /// Casts a ray from `screen` through the given camera onto the surface.
    ///
    /// `Ok(None)` is an ordinary miss, not a failure.
    fn cast_ray(
        &self,
        screen: ScreenPoint,
        camera: &CameraPose,
    ) -> Result<Option<Point3D>, MeshError>;
}
