// File: crates/foundry-core/src/export.rs
// Summary: Export boundary: a validated raster request and the trait a raster backend implements.

use crate::chart::ChartSpec;
use crate::error::{ChartError, Result};

/// Spec plus raster parameters, checked before it reaches a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportRequest<'a> {
    pub spec: &'a ChartSpec,
    pub pixel_ratio: f32,
    pub background: String,
}

impl<'a> ExportRequest<'a> {
    pub fn new(spec: &'a ChartSpec, pixel_ratio: f32, background: impl Into<String>) -> Result<Self> {
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidExport { reason: format!("pixel ratio {pixel_ratio} must be positive") });
        }
        let background = background.into();
        if background.trim().is_empty() {
            return Err(ChartError::InvalidExport { reason: "background color is empty".to_string() });
        }
        Ok(Self { spec, pixel_ratio, background })
    }

    /// Request using the spec's own themed background.
    pub fn with_spec_background(spec: &'a ChartSpec, pixel_ratio: f32) -> Result<Self> {
        Self::new(spec, pixel_ratio, spec.background.clone())
    }
}

/// Implemented by the external rendering backend; returns encoded image bytes.
pub trait ChartExporter {
    type Error: std::error::Error;

    fn export(&self, request: &ExportRequest<'_>) -> std::result::Result<Vec<u8>, Self::Error>;
}
