//! The authoring session.
//!
//! Owns the mesh collaborator and every per-mesh component, and enforces
//! the lifecycle rules: loading a new mesh fully resets the view
//! controller, the path store, and the picker, and discards any running
//! torch simulation. Picking guards (mesh loaded, camera locked, path
//! armed) live here as explicit conditions rather than in UI widget
//! state; guard failures are benign no-ops.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use torchpath_core::{MeshError, MeshSurface, Point3D, SceneSink, ScreenPoint, ValidationError};
use torchpath_paths::{PathDocument, PathStore, StepOutcome, TorchSimulator};
use torchpath_view::{PickSample, RotationDirection, SurfacePicker, ViewController, ViewMode};

/// One annotated-mesh authoring session.
pub struct TorchSession<M: MeshSurface> {
    mesh: Option<M>,
    view: ViewController,
    picker: SurfacePicker,
    store: PathStore,
    torch: Option<TorchSimulator>,
}

impl<M: MeshSurface> Default for TorchSession<M> {
    fn default() -> Self {
        Self {
            mesh: None,
            view: ViewController::new(),
            picker: SurfacePicker::new(),
            store: PathStore::new(),
            torch: None,
        }
    }
}

impl<M: MeshSurface> TorchSession<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new mesh, resetting every per-mesh component before any
    /// further events are accepted.
    pub fn load_mesh(&mut self, mesh: M) {
        self.view.reset();
        self.view.set_mesh(&mesh.bounds(), mesh.centroid());
        self.picker = SurfacePicker::new();
        self.store = PathStore::new();
        self.torch = None;
        self.mesh = Some(mesh);
        debug!("mesh installed, session reset");
    }

    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn store(&self) -> &PathStore {
        &self.store
    }

    pub fn torch(&self) -> Option<&TorchSimulator> {
        self.torch.as_ref()
    }

    // --- view control -----------------------------------------------------

    pub fn enter_top_lock(&mut self) {
        self.view.enter_top_lock();
    }

    pub fn enter_side_lock(&mut self) {
        self.view.enter_side_lock();
    }

    pub fn exit_lock(&mut self) {
        self.view.exit_lock();
    }

    pub fn rotate_view(&mut self, direction: RotationDirection) {
        self.view.rotate(direction);
    }

    // --- path recording ---------------------------------------------------

    /// Starts a new path and arms the picker, so the first click of the
    /// new picking session always lands.
    pub fn start_path(&mut self) -> Option<u32> {
        if self.mesh.is_none() {
            warn!("start_path ignored: no mesh loaded");
            return None;
        }
        self.picker.arm();
        Some(self.store.start_path())
    }

    pub fn stop_path(&mut self) {
        self.store.stop_path();
    }

    /// Resolves a click into an annotated point on the armed path.
    ///
    /// Returns `Ok(None)` for every benign reason nothing was recorded:
    /// no mesh, free camera, no armed path, ray miss, or a debounced
    /// duplicate. A mesh failure aborts just this click.
    pub fn handle_click(&mut self, screen: ScreenPoint) -> Result<Option<PickSample>, MeshError> {
        let Some(mesh) = self.mesh.as_ref() else {
            debug!("click ignored: no mesh loaded");
            return Ok(None);
        };
        if self.view.mode() == ViewMode::Free {
            debug!("click ignored: picking requires a locked view");
            return Ok(None);
        }
        if self.store.active_path_id().is_none() {
            debug!("click ignored: no active path");
            return Ok(None);
        }
        let Some(camera) = self.view.pose() else {
            debug!("click ignored: no camera pose available");
            return Ok(None);
        };

        let Some(sample) = self.picker.pick(screen, &camera, mesh)? else {
            return Ok(None);
        };
        self.store.add_point(sample.position, sample.normal);
        Ok(Some(sample))
    }

    /// Removes the most recently recorded point, whichever path owns it.
    pub fn undo_last_point(&mut self) {
        if self.store.remove_last().is_none() {
            debug!("undo ignored: no points recorded");
        }
    }

    /// Clears every recorded point. Path ids keep counting.
    pub fn clear_points(&mut self) {
        self.store.clear_all();
    }

    /// Updates the torch offset distance; every offset segment follows.
    pub fn set_offset_distance(&mut self, distance: f64) -> Result<(), ValidationError> {
        self.store.set_offset_distance(distance)
    }

    pub fn offset_distance(&self) -> f64 {
        self.store.offset_distance()
    }

    // --- torch simulation -------------------------------------------------

    /// Enters simulation mode over `path_id`. Fails (benignly) when the
    /// path has no points.
    pub fn enter_simulation(&mut self, path_id: u32) -> bool {
        let mut torch = TorchSimulator::new();
        if !torch.select_path(path_id, &self.store) {
            return false;
        }
        self.torch = Some(torch);
        true
    }

    /// Leaves simulation mode, discarding the torch state.
    pub fn exit_simulation(&mut self) {
        self.torch = None;
    }

    pub fn step_torch_forward(&mut self) -> StepOutcome {
        match self.torch.as_mut() {
            Some(torch) => torch.step_forward(&self.store),
            None => {
                debug!("step ignored: not in simulation mode");
                StepOutcome::AtBoundary
            }
        }
    }

    pub fn step_torch_backward(&mut self) -> StepOutcome {
        match self.torch.as_mut() {
            Some(torch) => torch.step_backward(&self.store),
            None => {
                debug!("step ignored: not in simulation mode");
                StepOutcome::AtBoundary
            }
        }
    }

    /// Current simulated torch tip, if simulation mode is active.
    pub fn torch_tip(&self) -> Option<Point3D> {
        self.torch.as_ref()?.current_tip(&self.store)
    }

    // --- scene & persistence ----------------------------------------------

    /// Pushes the whole visual state to the sink: markers, path lines,
    /// and offset segments, recomputed wholesale.
    pub fn refresh_scene(&self, sink: &mut dyn SceneSink) {
        let markers: Vec<Point3D> = self.store.points().iter().map(|p| p.position).collect();
        sink.set_markers(&markers);
        sink.set_path_lines(&self.store.polylines());
        sink.set_offset_segments(&self.store.offset_segments());
    }

    /// Writes the recorded paths to a project file.
    pub fn save_project(&self, name: &str, path: impl AsRef<std::path::Path>) -> Result<()> {
        PathDocument::from_store(name, &self.store)
            .save_to_file(path)
            .context("Failed to save project")
    }

    /// Replaces the recorded paths from a project file. Any running
    /// simulation is discarded; its indices would be stale.
    pub fn load_project(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let document = PathDocument::load_from_file(path).context("Failed to load project")?;
        self.store = document.to_store();
        self.torch = None;
        Ok(())
    }
}
