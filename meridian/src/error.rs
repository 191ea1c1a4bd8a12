//! Error types used by the crate.

use meridian_types::geo::GeodesicError;
use thiserror::Error;

/// Meridian error type.
#[derive(Debug, Error)]
pub enum MeridianError {
    /// Geodesic calculation failed.
    #[error("geodesic calculation failed: {0}")]
    Geodesic(#[from] GeodesicError),
    /// Tessellator could not process the polygon.
    #[error("failed to tessellate polygon: {0}")]
    Tessellation(String),
}

impl From<lyon::tessellation::TessellationError> for MeridianError {
    fn from(value: lyon::tessellation::TessellationError) -> Self {
        Self::Tessellation(format!("{value:?}"))
    }
}
