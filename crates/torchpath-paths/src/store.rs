//! The annotated-point store.
//!
//! Points arrive one at a time from the surface picker and are grouped
//! into paths by a strictly increasing id. The store is the single source
//! of truth for everything drawn or persisted: markers, per-path
//! polylines, and torch-offset segments are all derived from it wholesale.

use tracing::{debug, warn};

use torchpath_core::{OffsetSegment, PathPolyline, Point3D, SurfaceNormal, ValidationError};

/// One picked surface sample, annotated with its path membership.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedPoint {
    pub position: Point3D,
    pub normal: SurfaceNormal,
    pub path_id: u32,
    /// Count of prior points sharing `path_id`; the first point of a path
    /// has order 0.
    pub order_in_path: u32,
}

/// Ordered collection of annotated points grouped into paths.
///
/// Path ids are assigned in strictly increasing order starting at 1.
/// Appending requires an armed path (`start_path` without a matching
/// `stop_path`). Clearing the store does *not* reset the id counter, so a
/// stale external path reference can never alias a newly recorded path.
#[derive(Debug, Clone, Default)]
pub struct PathStore {
    points: Vec<AnnotatedPoint>,
    last_path_id: u32,
    active_path_id: Option<u32>,
    offset_distance: f64,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next path id and arms it for appending.
    /// Previously recorded paths are untouched.
    pub fn start_path(&mut self) -> u32 {
        self.last_path_id += 1;
        self.active_path_id = Some(self.last_path_id);
        debug!(path_id = self.last_path_id, "path started");
        self.last_path_id
    }

    /// Disarms appending. Recorded points stay.
    pub fn stop_path(&mut self) {
        if let Some(id) = self.active_path_id.take() {
            debug!(path_id = id, "path stopped");
        }
    }

    pub fn active_path_id(&self) -> Option<u32> {
        self.active_path_id
    }

    /// Highest path id handed out so far (0 before the first path).
    pub fn last_path_id(&self) -> u32 {
        self.last_path_id
    }

    /// Appends a picked sample to the armed path.
    ///
    /// Returns `false` (and leaves the store unchanged) when no path is
    /// armed; that is an ordinary outcome, not an error.
    pub fn add_point(&mut self, position: Point3D, normal: SurfaceNormal) -> bool {
        let Some(path_id) = self.active_path_id else {
            warn!("add_point ignored: no active path");
            return false;
        };
        let order_in_path = self.path_len(path_id) as u32;
        self.points.push(AnnotatedPoint {
            position,
            normal,
            path_id,
            order_in_path,
        });
        true
    }

    /// Pops the most recently appended point, whatever path it belongs to.
    pub fn remove_last(&mut self) -> Option<AnnotatedPoint> {
        self.points.pop()
    }

    /// Empties the point collection. The path-id counter keeps counting;
    /// the armed path (if any) stays armed and simply becomes empty.
    pub fn clear_all(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[AnnotatedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points of one path, in insertion order.
    pub fn points_in_path(&self, path_id: u32) -> impl Iterator<Item = &AnnotatedPoint> {
        self.points.iter().filter(move |p| p.path_id == path_id)
    }

    pub fn path_len(&self, path_id: u32) -> usize {
        self.points_in_path(path_id).count()
    }

    /// Distinct path ids in order of first appearance.
    pub fn path_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        for point in &self.points {
            if !ids.contains(&point.path_id) {
                ids.push(point.path_id);
            }
        }
        ids
    }

    /// Torch distance along each point's normal. Persisted with the paths.
    pub fn offset_distance(&self) -> f64 {
        self.offset_distance
    }

    /// Updates the torch distance. Every offset segment is a pure function
    /// of `(position, normal, offset_distance)`, so callers rebuild the
    /// offset visualization after a change.
    pub fn set_offset_distance(&mut self, distance: f64) -> Result<(), ValidationError> {
        if distance < 0.0 {
            return Err(ValidationError::invalid_parameter(
                "offset_distance",
                distance,
                "must be >= 0",
            ));
        }
        self.offset_distance = distance;
        Ok(())
    }

    /// All paths as drawable polylines, wholesale.
    pub fn polylines(&self) -> Vec<PathPolyline> {
        self.path_ids()
            .into_iter()
            .map(|path_id| PathPolyline {
                path_id,
                points: self.points_in_path(path_id).map(|p| p.position).collect(),
            })
            .collect()
    }

    /// One offset segment per stored point, wholesale.
    pub fn offset_segments(&self) -> Vec<OffsetSegment> {
        self.points
            .iter()
            .map(|p| OffsetSegment {
                base: p.position,
                tip: p.position + p.normal.as_vector() * self.offset_distance,
            })
            .collect()
    }

    /// Rebuilds the store from already-annotated points, keeping their
    /// path ids verbatim. Used by deserialization.
    pub(crate) fn from_parts(points: Vec<AnnotatedPoint>, offset_distance: f64) -> Self {
        let last_path_id = points.iter().map(|p| p.path_id).max().unwrap_or(0);
        Self {
            points,
            last_path_id,
            active_path_id: None,
            offset_distance,
        }
    }
}
