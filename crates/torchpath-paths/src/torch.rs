//! Torch playback over a recorded path.
//!
//! Steps a simulated torch tip point by point along one selected path,
//! holding the tip at the store's offset distance along each point's
//! surface normal. Created when simulation mode is entered and dropped on
//! exit; selection and index are the only state it owns.

use tracing::{debug, warn};

use torchpath_core::Point3D;

use crate::store::{AnnotatedPoint, PathStore};

/// Result of a step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The index moved by one.
    Moved,
    /// The index was already at the path boundary; nothing changed.
    AtBoundary,
}

/// Steps through tool-offset positions along one selected path.
#[derive(Debug, Clone, Default)]
pub struct TorchSimulator {
    selected_path_id: Option<u32>,
    current_index: usize,
}

impl TorchSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_path_id(&self) -> Option<u32> {
        self.selected_path_id
    }

    /// Index of the current point within the selected path.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Selects a path and rewinds to its first point.
    ///
    /// A path with no points is rejected: no-op, logged.
    pub fn select_path(&mut self, path_id: u32, store: &PathStore) -> bool {
        if store.path_len(path_id) == 0 {
            warn!(path_id, "select_path ignored: path has no points");
            return false;
        }
        self.selected_path_id = Some(path_id);
        self.current_index = 0;
        debug!(path_id, "torch path selected");
        true
    }

    /// Advances one point. At the last point, reports the boundary and
    /// stays put.
    pub fn step_forward(&mut self, store: &PathStore) -> StepOutcome {
        let Some(len) = self.selected_len(store) else {
            return StepOutcome::AtBoundary;
        };
        if self.current_index + 1 >= len {
            debug!("step_forward at end of path");
            return StepOutcome::AtBoundary;
        }
        self.current_index += 1;
        StepOutcome::Moved
    }

    /// Steps back one point. At the first point, reports the boundary and
    /// stays put.
    pub fn step_backward(&mut self, _store: &PathStore) -> StepOutcome {
        if self.current_index == 0 {
            debug!("step_backward at start of path");
            return StepOutcome::AtBoundary;
        }
        self.current_index -= 1;
        StepOutcome::Moved
    }

    /// The annotated point the torch currently hovers over.
    pub fn current_point<'a>(&self, store: &'a PathStore) -> Option<&'a AnnotatedPoint> {
        let path_id = self.selected_path_id?;
        store.points_in_path(path_id).nth(self.current_index)
    }

    /// The simulated torch tip: `position + normal * offset_distance`.
    pub fn current_tip(&self, store: &PathStore) -> Option<Point3D> {
        self.current_point(store)
            .map(|p| p.position + p.normal.as_vector() * store.offset_distance())
    }

    fn selected_len(&self, store: &PathStore) -> Option<usize> {
        let path_id = self.selected_path_id?;
        let len = store.path_len(path_id);
        if len == 0 {
            None
        } else {
            Some(len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torchpath_core::SurfaceNormal;

    fn store_with_path() -> PathStore {
        let mut store = PathStore::new();
        store.start_path();
        for x in 0..3 {
            store.add_point(
                Point3D::new(x as f64, 0.0, 1.0),
                SurfaceNormal::from_vector(Point3D::new(0.0, 0.0, 1.0)),
            );
        }
        store.stop_path();
        store.set_offset_distance(2.0).unwrap();
        store
    }

    #[test]
    fn test_select_empty_path_rejected() {
        let store = store_with_path();
        let mut torch = TorchSimulator::new();
        assert!(!torch.select_path(99, &store));
        assert!(torch.selected_path_id().is_none());
        assert!(torch.current_tip(&store).is_none());
    }

    #[test]
    fn test_select_resets_index() {
        let store = store_with_path();
        let mut torch = TorchSimulator::new();
        assert!(torch.select_path(1, &store));
        torch.step_forward(&store);
        assert_eq!(torch.current_index(), 1);

        torch.select_path(1, &store);
        assert_eq!(torch.current_index(), 0);
    }

    #[test]
    fn test_step_forward_saturates_at_last_point() {
        let store = store_with_path();
        let mut torch = TorchSimulator::new();
        torch.select_path(1, &store);

        assert_eq!(torch.step_forward(&store), StepOutcome::Moved);
        assert_eq!(torch.step_forward(&store), StepOutcome::Moved);
        assert_eq!(torch.step_forward(&store), StepOutcome::AtBoundary);
        assert_eq!(torch.step_forward(&store), StepOutcome::AtBoundary);
        assert_eq!(torch.current_index(), 2);
    }

    #[test]
    fn test_step_backward_saturates_at_first_point() {
        let store = store_with_path();
        let mut torch = TorchSimulator::new();
        torch.select_path(1, &store);

        assert_eq!(torch.step_backward(&store), StepOutcome::AtBoundary);
        torch.step_forward(&store);
        assert_eq!(torch.step_backward(&store), StepOutcome::Moved);
        assert_eq!(torch.current_index(), 0);
    }

    #[test]
    fn test_current_tip_offsets_along_normal() {
        let store = store_with_path();
        let mut torch = TorchSimulator::new();
        torch.select_path(1, &store);
        torch.step_forward(&store);

        assert_eq!(torch.current_tip(&store), Some(Point3D::new(1.0, 0.0, 3.0)));
    }

    #[test]
    fn test_tip_follows_offset_changes() {
        let mut store = store_with_path();
        let mut torch = TorchSimulator::new();
        torch.select_path(1, &store);

        store.set_offset_distance(5.0).unwrap();
        assert_eq!(torch.current_tip(&store), Some(Point3D::new(0.0, 0.0, 6.0)));

        // The whole offset visualization follows too.
        let segments = store.offset_segments();
        assert!(segments.iter().all(|s| (s.tip.z - 6.0).abs() < 1e-12));
    }

    #[test]
    fn test_step_without_selection_is_boundary() {
        let store = store_with_path();
        let mut torch = TorchSimulator::new();
        assert_eq!(torch.step_forward(&store), StepOutcome::AtBoundary);
        assert_eq!(torch.step_backward(&store), StepOutcome::AtBoundary);
    }
}
