// File: crates/foundry-core/src/lib.rs
// Summary: Core library entry point; exports the chart configuration synthesis API.

pub mod adapter;
pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod export;
pub mod normalize;
pub mod palette;
pub mod reshape;
pub mod samples;
pub mod save;
pub mod series;
pub mod session;
pub mod share;
pub mod stats;
pub mod style;
pub mod theme;
pub mod types;
pub mod variant;

pub use adapter::{adapter_for, ChartAdapter};
pub use axis::{AxisKind, AxisSpec, Axes};
pub use chart::{compose, ChartSpec};
pub use dataset::{Dataset, Record, Scalar};
pub use error::{ChartError, Result};
pub use export::{ChartExporter, ExportRequest};
pub use normalize::{normalize, CanonicalRecord};
pub use palette::{ColorPalette, PaletteManager, PaletteRegistry};
pub use reshape::{reshape, satisfies};
pub use samples::sample_dataset;
pub use save::SaveRecord;
pub use series::{SeriesData, SeriesSpec};
pub use session::{update, EditorState, Event, Updated};
pub use share::{decode_share, encode_share, SharePayload};
pub use stats::{summarize, Summary};
pub use style::{resolve, ResolvedStyle, StyleConfig};
pub use theme::{ChromeTheme, ThemeMode};
pub use variant::{ChartVariant, RequiredShape};
