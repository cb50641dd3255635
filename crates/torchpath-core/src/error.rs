//! Error handling for TorchPath.
//!
//! Two tiers, deliberately kept apart:
//! - **Validation errors**: a caller passed a bad parameter. Reported with
//!   the offending parameter name and value, never silently corrected.
//! - **Collaborator failures**: a mesh or camera query failed. Fatal to the
//!   triggering operation only; core state is left untouched.
//!
//! Benign misses (a pick that hits nothing, a step at a path boundary, an
//! append with no armed path) are *not* errors. They are ordinary return
//! values, logged at most.
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// A caller-supplied parameter violated its contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter out of range or inconsistent with the requested pattern.
    #[error("invalid parameter '{param}' = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// Convenience constructor used at every validation site.
    pub fn invalid_parameter(
        param: &'static str,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidParameter {
            param,
            value,
            reason: reason.into(),
        }
    }

    /// Name of the parameter this error blames.
    pub fn param(&self) -> &'static str {
        match self {
            ValidationError::InvalidParameter { param, .. } => param,
        }
    }
}

/// A mesh collaborator query failed.
///
/// These abort only the operation that issued the query; no partial state
/// mutation is allowed to survive one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The ray-cast query could not be evaluated.
    #[error("ray cast failed: {reason}")]
    RayCastFailed {
        /// What the collaborator reported.
        reason: String,
    },

    /// The nearest-point/normal query could not be evaluated.
    #[error("surface query failed: {reason}")]
    SurfaceQueryFailed {
        /// What the collaborator reported.
        reason: String,
    },
}

/// Unified error type for TorchPath public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Mesh collaborator failure.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Project file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Project file parse failure.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
