// File: crates/foundry-core/src/variant.rs
// Summary: Closed set of chart families and the data shape each one requires.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    Bar,
    Line,
    Area,
    Scatter,
    Pie,
    Funnel,
    Radar,
    Gauge,
    Heatmap,
}

/// Shape contract a dataset must meet before an adapter can build series from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredShape {
    /// Ordered categories with one value per category.
    Categorical,
    /// Paired (x, y) per record.
    Paired,
    /// (name, value) pairs.
    Named,
    /// (dimension name, value) pairs.
    Dimensional,
    /// A single aggregate over all values.
    Aggregate,
    /// Records laid onto a two-axis grid.
    Grid,
}

impl ChartVariant {
    pub const ALL: [ChartVariant; 9] = [
        ChartVariant::Bar,
        ChartVariant::Line,
        ChartVariant::Area,
        ChartVariant::Scatter,
        ChartVariant::Pie,
        ChartVariant::Funnel,
        ChartVariant::Radar,
        ChartVariant::Gauge,
        ChartVariant::Heatmap,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ChartVariant::Bar => "bar",
            ChartVariant::Line => "line",
            ChartVariant::Area => "area",
            ChartVariant::Scatter => "scatter",
            ChartVariant::Pie => "pie",
            ChartVariant::Funnel => "funnel",
            ChartVariant::Radar => "radar",
            ChartVariant::Gauge => "gauge",
            ChartVariant::Heatmap => "heatmap",
        }
    }

    pub const fn required_shape(self) -> RequiredShape {
        match self {
            ChartVariant::Bar | ChartVariant::Line | ChartVariant::Area => RequiredShape::Categorical,
            ChartVariant::Scatter => RequiredShape::Paired,
            ChartVariant::Pie | ChartVariant::Funnel => RequiredShape::Named,
            ChartVariant::Radar => RequiredShape::Dimensional,
            ChartVariant::Gauge => RequiredShape::Aggregate,
            ChartVariant::Heatmap => RequiredShape::Grid,
        }
    }

    /// Variants drawn on an x/y plane (these get axes and a grid).
    pub const fn has_axes(self) -> bool {
        matches!(
            self,
            ChartVariant::Bar
                | ChartVariant::Line
                | ChartVariant::Area
                | ChartVariant::Scatter
                | ChartVariant::Heatmap
        )
    }
}

impl fmt::Display for ChartVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartVariant {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        ChartVariant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ChartError::UnknownVariant(token.to_string()))
    }
}
