//! Persistence for annotated paths.
//!
//! One JSON document per annotated mesh. The flat `all_points` array is
//! the source of truth on load; the grouped `paths` view is derived
//! convenience for downstream consumers and is never read back. Missing
//! optional fields (an absent normal, say) are filled with safe defaults
//! rather than rejecting the whole file.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use torchpath_core::{Point3D, SurfaceNormal};

use crate::store::{AnnotatedPoint, PathStore};

/// Path document format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete persisted project structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathDocument {
    pub version: String,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub offset_distance: f64,
    pub all_points: Vec<PointRecord>,
    /// Derived grouping, written for convenience, ignored on load.
    #[serde(default)]
    pub paths: Vec<PathGroupRecord>,
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: String::new(),
            created: now,
            modified: now,
        }
    }
}

/// One annotated point, flat.
///
/// Normal components default to zero when absent; a zero normal
/// renormalizes to the `(0, 0, 1)` fallback on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointRecord {
    pub index: u32,
    pub path_id: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub normal_x: f64,
    #[serde(default)]
    pub normal_y: f64,
    #[serde(default)]
    pub normal_z: f64,
}

/// One path of the derived grouped view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathGroupRecord {
    pub path_id: u32,
    pub points: Vec<PositionRecord>,
}

/// A bare position inside the grouped view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PathDocument {
    /// Snapshots a store into a document ready to write.
    pub fn from_store(name: impl Into<String>, store: &PathStore) -> Self {
        let all_points = store
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| PointRecord {
                index: index as u32,
                path_id: point.path_id,
                x: point.position.x,
                y: point.position.y,
                z: point.position.z,
                normal_x: point.normal.x(),
                normal_y: point.normal.y(),
                normal_z: point.normal.z(),
            })
            .collect();

        let paths = store
            .path_ids()
            .into_iter()
            .map(|path_id| PathGroupRecord {
                path_id,
                points: store
                    .points_in_path(path_id)
                    .map(|p| PositionRecord {
                        x: p.position.x,
                        y: p.position.y,
                        z: p.position.z,
                    })
                    .collect(),
            })
            .collect();

        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            offset_distance: store.offset_distance(),
            all_points,
            paths,
        }
    }

    /// Reconstructs a store from the flat point list, in its exact order,
    /// with path ids and normals verbatim. The grouped `paths` view plays
    /// no part. The id counter resumes from the highest path id present.
    pub fn to_store(&self) -> PathStore {
        let mut order_so_far: Vec<(u32, u32)> = Vec::new();
        let points = self
            .all_points
            .iter()
            .map(|record| {
                let order_in_path = match order_so_far
                    .iter_mut()
                    .find(|(id, _)| *id == record.path_id)
                {
                    Some((_, count)) => {
                        *count += 1;
                        *count - 1
                    }
                    None => {
                        order_so_far.push((record.path_id, 1));
                        0
                    }
                };
                AnnotatedPoint {
                    position: Point3D::new(record.x, record.y, record.z),
                    normal: SurfaceNormal::from_vector(Point3D::new(
                        record.normal_x,
                        record.normal_y,
                        record.normal_z,
                    )),
                    path_id: record.path_id,
                    order_in_path,
                }
            })
            .collect();

        PathStore::from_parts(points, self.offset_distance)
    }

    /// Saves the document as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize paths")?;
        std::fs::write(path.as_ref(), json).context("Failed to write path file")?;
        Ok(())
    }

    /// Loads a document, refreshing its modified timestamp.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read path file")?;
        let mut document: PathDocument =
            serde_json::from_str(&content).context("Failed to parse path file")?;
        document.metadata.modified = Utc::now();
        Ok(document)
    }
}
