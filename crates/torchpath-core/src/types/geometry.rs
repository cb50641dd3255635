//! Points, normals, and bounds used throughout the workspace.
//!
//! All geometry is `f64`. The view crate converts to `glam` vectors for
//! pose math; everything stored or persisted lives in these types.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point (or free vector) in part space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ZERO: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Point3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Point3D) -> Point3D {
        Point3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        (*other - *self).length()
    }

    /// Unit vector in the same direction, or `None` for a degenerate input.
    pub fn normalized(&self) -> Option<Point3D> {
        let len = self.length();
        if len > f64::EPSILON {
            Some(Point3D::new(self.x / len, self.y / len, self.z / len))
        } else {
            None
        }
    }
}

impl Add for Point3D {
    type Output = Point3D;

    fn add(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    fn sub(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3D {
    type Output = Point3D;

    fn mul(self, rhs: f64) -> Point3D {
        Point3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point3D {
    type Output = Point3D;

    fn neg(self) -> Point3D {
        Point3D::new(-self.x, -self.y, -self.z)
    }
}

/// A point in the waypoint generator's working plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &PlanePoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Lifts the planar point into part space at `z = 0`.
    pub fn to_3d(&self) -> Point3D {
        Point3D::new(self.x, self.y, 0.0)
    }
}

/// A unit-length surface normal.
///
/// Invariant: magnitude is 1 within floating tolerance. Construction always
/// renormalizes; a degenerate source vector falls back to `(0, 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceNormal(Point3D);

impl SurfaceNormal {
    /// The `(0, 0, 1)` fallback used when a source vector is degenerate or
    /// a persisted record carries no normal.
    pub const DEFAULT: SurfaceNormal = SurfaceNormal(Point3D {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    });

    /// Renormalizes `v`; degenerate inputs yield [`SurfaceNormal::DEFAULT`].
    ///
    /// Already-unit vectors pass through bit-for-bit, so persisted normals
    /// survive a load/store round trip unchanged.
    pub fn from_vector(v: Point3D) -> Self {
        let len = v.length();
        if (len - 1.0).abs() < 1e-12 {
            return SurfaceNormal(v);
        }
        match v.normalized() {
            Some(unit) => SurfaceNormal(unit),
            None => SurfaceNormal::DEFAULT,
        }
    }

    pub fn as_vector(&self) -> Point3D {
        self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }
}

impl Default for SurfaceNormal {
    fn default() -> Self {
        SurfaceNormal::DEFAULT
    }
}

/// A 2D input coordinate in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A camera pose: where the camera sits, what it looks at, which way is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Point3D,
    pub focal_point: Point3D,
    pub up: Point3D,
}

impl CameraPose {
    pub fn new(position: Point3D, focal_point: Point3D, up: Point3D) -> Self {
        Self {
            position,
            focal_point,
            up,
        }
    }

    /// Unit view direction from the camera toward the focal point.
    pub fn view_direction(&self) -> Point3D {
        (self.focal_point - self.position)
            .normalized()
            .unwrap_or(Point3D::new(0.0, 0.0, -1.0))
    }
}

/// A part-space coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(&self) -> Point3D {
        match self {
            Axis::X => Point3D::new(1.0, 0.0, 0.0),
            Axis::Y => Point3D::new(0.0, 1.0, 0.0),
            Axis::Z => Point3D::new(0.0, 0.0, 1.0),
        }
    }
}

/// Axis-aligned bounding box of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshBounds {
    pub min: Point3D,
    pub max: Point3D,
}

impl MeshBounds {
    pub fn new(min: Point3D, max: Point3D) -> Self {
        Self { min, max }
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max.x - self.min.x,
            Axis::Y => self.max.y - self.min.y,
            Axis::Z => self.max.z - self.min.z,
        }
    }

    pub fn center(&self) -> Point3D {
        (self.min + self.max) * 0.5
    }

    /// Largest bounding dimension, used for canonical camera distances.
    pub fn largest_dimension(&self) -> f64 {
        self.extent(Axis::X)
            .max(self.extent(Axis::Y))
            .max(self.extent(Axis::Z))
    }

    /// Axes ordered by descending extent.
    ///
    /// Ties keep the `Z, Y, X` preference so a cube produces the
    /// conventional top-down view (camera on +Z, +Y up).
    pub fn ranked_axes(&self) -> [Axis; 3] {
        let mut axes = [Axis::Z, Axis::Y, Axis::X];
        axes.sort_by(|a, b| {
            self.extent(*b)
                .partial_cmp(&self.extent(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        axes
    }
}
