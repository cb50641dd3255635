//! Integration tests spanning the store, persistence, and the torch.

use torchpath_core::{Point3D, SurfaceNormal};
use torchpath_paths::{PathDocument, PathStore, StepOutcome, TorchSimulator};

fn normal_up() -> SurfaceNormal {
    SurfaceNormal::from_vector(Point3D::new(0.0, 0.0, 1.0))
}

#[test]
fn test_record_persist_simulate() {
    let mut store = PathStore::new();
    store.start_path();
    store.add_point(Point3D::new(0.0, 0.0, 2.0), normal_up());
    store.add_point(Point3D::new(5.0, 0.0, 2.0), normal_up());
    store.add_point(Point3D::new(10.0, 0.0, 2.0), normal_up());
    store.stop_path();
    store.set_offset_distance(3.0).unwrap();

    // Persist and restore through a real file.
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("stroke.torchpath.json");
    PathDocument::from_store("stroke", &store)
        .save_to_file(&file)
        .unwrap();
    let restored = PathDocument::load_from_file(&file).unwrap().to_store();
    assert_eq!(restored.points(), store.points());

    // Walk the torch down the restored path.
    let mut torch = TorchSimulator::new();
    assert!(torch.select_path(1, &restored));
    assert_eq!(torch.current_tip(&restored), Some(Point3D::new(0.0, 0.0, 5.0)));

    let mut tips = vec![torch.current_tip(&restored).unwrap()];
    while torch.step_forward(&restored) == StepOutcome::Moved {
        tips.push(torch.current_tip(&restored).unwrap());
    }
    assert_eq!(tips.len(), 3);
    assert_eq!(tips[2], Point3D::new(10.0, 0.0, 5.0));
}

#[test]
fn test_new_recording_continues_after_reload() {
    let mut store = PathStore::new();
    store.start_path();
    store.add_point(Point3D::new(1.0, 1.0, 0.0), normal_up());
    store.stop_path();
    store.start_path();
    store.add_point(Point3D::new(2.0, 2.0, 0.0), normal_up());
    store.stop_path();

    let mut restored = PathDocument::from_store("part", &store).to_store();

    // The id counter resumes past the persisted paths.
    assert_eq!(restored.start_path(), 3);
    restored.add_point(Point3D::new(3.0, 3.0, 0.0), normal_up());
    assert_eq!(restored.path_ids(), vec![1, 2, 3]);
}

#[test]
fn test_torch_survives_unrelated_edits() {
    let mut store = PathStore::new();
    store.start_path();
    store.add_point(Point3D::new(0.0, 0.0, 0.0), normal_up());
    store.add_point(Point3D::new(1.0, 0.0, 0.0), normal_up());
    store.stop_path();

    let mut torch = TorchSimulator::new();
    torch.select_path(1, &store);
    torch.step_forward(&store);

    // Recording another path elsewhere does not disturb playback.
    store.start_path();
    store.add_point(Point3D::new(9.0, 9.0, 0.0), normal_up());
    store.stop_path();

    assert_eq!(
        torch.current_point(&store).unwrap().position,
        Point3D::new(1.0, 0.0, 0.0)
    );
    assert_eq!(torch.step_forward(&store), StepOutcome::AtBoundary);
}
