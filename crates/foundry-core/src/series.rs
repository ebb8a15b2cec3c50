// File: crates/foundry-core/src/series.rs
// Summary: Series model of the composed spec: per-family data layouts, options and overlay mark lines.
// Notes:
// - `SeriesData` serializes untagged, so each family's data is the plain array a
//   renderer expects (numbers, [x, y] pairs, {name, value} objects, [x, y, v] cells).

use serde::{Deserialize, Serialize};

use crate::stats::Summary;
use crate::variant::ChartVariant;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarValue {
    pub name: String,
    pub value: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    /// One slot per category; `None` where a series has no value for that category.
    Values(Vec<Option<f64>>),
    /// (x, y) pairs.
    Points(Vec<[f64; 2]>),
    /// (name, value) pairs (pie, funnel, gauge).
    Named(Vec<NamedValue>),
    /// One value vector per radar polygon.
    Radar(Vec<RadarValue>),
    /// (x index, lane, value) heatmap cells.
    Cells(Vec<[f64; 3]>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Values(v) => v.len(),
            SeriesData::Points(v) => v.len(),
            SeriesData::Named(v) => v.len(),
            SeriesData::Radar(v) => v.len(),
            SeriesData::Cells(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Category slots of a bar/line/area series; empty for other layouts.
    pub fn values(&self) -> &[Option<f64>] {
        match self {
            SeriesData::Values(v) => v,
            _ => &[],
        }
    }

    /// JSON has no encoding for NaN or infinity.
    pub fn is_finite(&self) -> bool {
        match self {
            SeriesData::Values(v) => v.iter().flatten().all(|n| n.is_finite()),
            SeriesData::Points(v) => v.iter().flatten().all(|n| n.is_finite()),
            SeriesData::Named(v) => v.iter().all(|d| d.value.is_finite()),
            SeriesData::Radar(v) => v.iter().flat_map(|d| &d.value).all(|n| n.is_finite()),
            SeriesData::Cells(v) => v.iter().flatten().all(|n| n.is_finite()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Average,
    Min,
    Max,
}

/// Horizontal reference line drawn over a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkLine {
    #[serde(rename = "type")]
    pub kind: MarkKind,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChartVariant,
    pub data: SeriesData,
    #[serde(default)]
    pub smooth: bool,
    /// Fill the area under a line.
    #[serde(default)]
    pub area: bool,
    #[serde(default)]
    pub show_labels: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    /// Inner/outer radius for pie-like series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<[String; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mark_lines: Vec<MarkLine>,
}

impl SeriesSpec {
    pub fn new(kind: ChartVariant, name: impl Into<String>, data: SeriesData) -> Self {
        Self {
            name: name.into(),
            kind,
            data,
            smooth: false,
            area: false,
            show_labels: false,
            line_width: None,
            symbol_size: None,
            radius: None,
            sort: None,
            mark_lines: Vec::new(),
        }
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_area(mut self, area: bool) -> Self {
        self.area = area;
        self
    }

    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_symbol_size(mut self, size: f64) -> Self {
        self.symbol_size = Some(size);
        self
    }

    pub fn with_radius(mut self, inner: &str, outer: &str) -> Self {
        self.radius = Some([inner.to_string(), outer.to_string()]);
        self
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    pub fn is_finite(&self) -> bool {
        self.data.is_finite()
            && self.mark_lines.iter().all(|m| m.value.is_finite())
            && self.line_width.map_or(true, f64::is_finite)
            && self.symbol_size.map_or(true, f64::is_finite)
    }

    /// Attach average/min/max lines from `summary`; kinds without data are skipped.
    pub fn with_mark_lines(mut self, summary: &Summary, kinds: &[MarkKind]) -> Self {
        for &kind in kinds {
            let value = match kind {
                MarkKind::Average => summary.avg,
                MarkKind::Min => summary.min,
                MarkKind::Max => summary.max,
            };
            if let Some(value) = value {
                self.mark_lines.push(MarkLine { kind, value });
            }
        }
        self
    }
}
