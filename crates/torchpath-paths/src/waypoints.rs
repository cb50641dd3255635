//! Parametric waypoint generation.
//!
//! Pure, stateless generation of planar tool paths between two endpoints:
//! straight, back-and-forth (advance then retreat, net progress per
//! cycle), and zigzag (alternating perpendicular offsets). Output points
//! lie in the working plane at `z = 0`. For identical inputs the output is
//! bit-for-bit identical.

use torchpath_core::{PlanePoint, Point3D, ValidationError};

/// Path pattern between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaypointPattern {
    /// Evenly spaced points along the line.
    Straight,
    /// Advance by `step`, retreat by `back`, repeat.
    BackAndForth,
    /// Advance by `step` while alternating a `width/2` perpendicular
    /// offset side to side.
    Zigzag,
}

impl WaypointPattern {
    /// Returns the name of the pattern.
    pub fn name(&self) -> &'static str {
        match self {
            WaypointPattern::Straight => "straight",
            WaypointPattern::BackAndForth => "backAndForth",
            WaypointPattern::Zigzag => "zigzag",
        }
    }
}

/// Generates the waypoint sequence for `pattern` from `start` to `end`.
///
/// `back` applies only to [`WaypointPattern::BackAndForth`] and `width`
/// only to [`WaypointPattern::Zigzag`]; both must be zero otherwise.
/// Validation runs before any computation and each failure names the
/// offending parameter. A degenerate call with `start == end` yields the
/// single-element sequence `[start]` for every pattern.
pub fn generate(
    start: PlanePoint,
    end: PlanePoint,
    step: f64,
    pattern: WaypointPattern,
    back: f64,
    width: f64,
) -> Result<Vec<Point3D>, ValidationError> {
    validate(step, pattern, back, width)?;

    let total = start.distance_to(&end);
    if total <= 0.0 {
        return Ok(vec![start.to_3d()]);
    }
    let ux = (end.x - start.x) / total;
    let uy = (end.y - start.y) / total;
    let at = |distance: f64, side: f64| -> Point3D {
        // `side` is the signed perpendicular offset, ( -uy, ux ) being +1.
        Point3D::new(
            start.x + ux * distance - uy * side,
            start.y + uy * distance + ux * side,
            0.0,
        )
    };

    let mut points = Vec::new();
    match pattern {
        WaypointPattern::Straight => {
            points.push(start.to_3d());
            let full_steps = (total / step) as u64;
            for i in 1..=full_steps {
                points.push(at(i as f64 * step, 0.0));
            }
            // Close out with the exact end point when the last full step
            // fell short of it.
            if (full_steps as f64) * step < total {
                points.push(end.to_3d());
            }
        }
        WaypointPattern::BackAndForth => {
            points.push(start.to_3d());
            let mut reached = 0.0;
            loop {
                let advance = reached + step;
                if advance >= total {
                    // No trailing retreat once the end is reached.
                    points.push(end.to_3d());
                    break;
                }
                points.push(at(advance, 0.0));
                if back > 0.0 {
                    points.push(at(advance - back, 0.0));
                }
                reached = advance - back;
            }
        }
        WaypointPattern::Zigzag => {
            let half = width / 2.0;
            let mut side = 1.0;
            points.push(at(0.0, half * side));
            let mut travelled = step;
            while travelled < total {
                side = -side;
                points.push(at(travelled, half * side));
                travelled += step;
            }
            // End lands on the side opposite the last emitted point.
            side = -side;
            points.push(Point3D::new(
                end.x - uy * half * side,
                end.y + ux * half * side,
                0.0,
            ));
        }
    }

    Ok(points)
}

fn validate(
    step: f64,
    pattern: WaypointPattern,
    back: f64,
    width: f64,
) -> Result<(), ValidationError> {
    if step <= 0.0 {
        return Err(ValidationError::invalid_parameter(
            "step",
            step,
            "must be > 0",
        ));
    }
    if pattern != WaypointPattern::BackAndForth && back != 0.0 {
        return Err(ValidationError::invalid_parameter(
            "back",
            back,
            format!("must be 0 for pattern '{}'", pattern.name()),
        ));
    }
    if back < 0.0 {
        return Err(ValidationError::invalid_parameter(
            "back",
            back,
            "must be >= 0",
        ));
    }
    if back >= step {
        return Err(ValidationError::invalid_parameter(
            "back",
            back,
            format!("must be smaller than step ({step})"),
        ));
    }
    if pattern != WaypointPattern::Zigzag && width != 0.0 {
        return Err(ValidationError::invalid_parameter(
            "width",
            width,
            format!("must be 0 for pattern '{}'", pattern.name()),
        ));
    }
    if width < 0.0 {
        return Err(ValidationError::invalid_parameter(
            "width",
            width,
            "must be >= 0",
        ));
    }
    Ok(())
}
