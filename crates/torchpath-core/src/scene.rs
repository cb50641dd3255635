//! The scene sink interface.
//!
//! The core never retains renderer handles. Whenever point, path, or
//! offset data changes, it pushes the *whole* visual state to a
//! [`SceneSink`]; the rendering layer owns any add/remove bookkeeping
//! (no incremental diffing).

use crate::types::Point3D;

/// One recorded path, ready to draw as a polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPolyline {
    pub path_id: u32,
    pub points: Vec<Point3D>,
}

/// One torch-offset segment from a surface point to the simulated tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetSegment {
    pub base: Point3D,
    pub tip: Point3D,
}

/// Receiver for wholesale visual-state updates.
pub trait SceneSink {
    /// Replaces all point markers.
    fn set_markers(&mut self, points: &[Point3D]);

    /// Replaces all path polylines.
    fn set_path_lines(&mut self, paths: &[PathPolyline]);

    /// Replaces all torch-offset segments.
    fn set_offset_segments(&mut self, segments: &[OffsetSegment]);
}
