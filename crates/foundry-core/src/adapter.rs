// File: crates/foundry-core/src/adapter.rs
// Summary: Per-family adapters that turn canonical records into series, axes and family-specific blocks.
// Notes:
// - `adapter_for` is an exhaustive match over ChartVariant; a new variant fails to compile until
//   it has an adapter.
// - Adapters are stateless and linear in the number of records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::axis::{AxisSpec, Axes};
use crate::error::{ChartError, Result};
use crate::normalize::CanonicalRecord;
use crate::series::{MarkKind, NamedValue, RadarValue, SeriesData, SeriesSpec, SortOrder};
use crate::stats::{summarize, summarize_values};
use crate::style::ResolvedStyle;
use crate::types::TooltipTrigger;
use crate::variant::{ChartVariant, RequiredShape};

/// Headroom applied to the largest radar value.
pub const RADAR_HEADROOM: f64 = 1.2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarSpec {
    pub indicators: Vec<RadarIndicator>,
}

/// Value range mapped onto the heatmap color ramp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualMap {
    pub min: f64,
    pub max: f64,
}

/// What an adapter contributes to the composed spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Adapted {
    pub series: Vec<SeriesSpec>,
    /// Axes before chrome styling; `None` for polar/proportional families.
    pub axes: Option<Axes>,
    pub radar: Option<RadarSpec>,
    pub visual_map: Option<VisualMap>,
    pub legend: Vec<String>,
    pub trigger: TooltipTrigger,
}

impl Adapted {
    fn new(series: Vec<SeriesSpec>, trigger: TooltipTrigger) -> Self {
        Self { series, axes: None, radar: None, visual_map: None, legend: Vec::new(), trigger }
    }
}

/// Builds one chart family's series from canonical records.
pub trait ChartAdapter: Sync {
    fn variant(&self) -> ChartVariant;

    fn required_shape(&self) -> RequiredShape { self.variant().required_shape() }

    /// Fails with `InvalidShape` when the records cannot produce any series.
    fn build(&self, records: &[CanonicalRecord], style: &ResolvedStyle) -> Result<Adapted>;
}

pub struct CartesianAdapter {
    variant: ChartVariant,
}

pub struct ScatterAdapter;

pub struct ProportionAdapter {
    variant: ChartVariant,
}

pub struct RadarAdapter;

pub struct GaugeAdapter;

pub struct HeatmapAdapter;

static BAR: CartesianAdapter = CartesianAdapter { variant: ChartVariant::Bar };
static LINE: CartesianAdapter = CartesianAdapter { variant: ChartVariant::Line };
static AREA: CartesianAdapter = CartesianAdapter { variant: ChartVariant::Area };
static PIE: ProportionAdapter = ProportionAdapter { variant: ChartVariant::Pie };
static FUNNEL: ProportionAdapter = ProportionAdapter { variant: ChartVariant::Funnel };

pub fn adapter_for(variant: ChartVariant) -> &'static dyn ChartAdapter {
    match variant {
        ChartVariant::Bar => &BAR,
        ChartVariant::Line => &LINE,
        ChartVariant::Area => &AREA,
        ChartVariant::Scatter => &ScatterAdapter,
        ChartVariant::Pie => &PIE,
        ChartVariant::Funnel => &FUNNEL,
        ChartVariant::Radar => &RadarAdapter,
        ChartVariant::Gauge => &GaugeAdapter,
        ChartVariant::Heatmap => &HeatmapAdapter,
    }
}

fn require_records(variant: ChartVariant, records: &[CanonicalRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(ChartError::InvalidShape {
            variant: variant.to_string(),
            reason: "dataset is empty".to_string(),
        });
    }
    Ok(())
}

/// Name used for the value series when records carry no series name.
fn value_series_name(style: &ResolvedStyle) -> &str {
    if style.axis.y_name.is_empty() { "value" } else { &style.axis.y_name }
}

/// Categories plus one value slot per category for each series.
struct Slots {
    categories: Vec<String>,
    series: Vec<(String, Vec<Option<f64>>)>,
}

/// Without series names every record is its own slot; with them, categories are the
/// distinct categories in first-appearance order and a repeated category keeps the last value.
fn slot_records<'a>(records: &'a [CanonicalRecord], default_name: &'a str) -> Slots {
    if records.iter().all(|r| r.series_name.is_none()) {
        return Slots {
            categories: records.iter().map(|r| r.category.clone()).collect(),
            series: vec![(default_name.to_string(), records.iter().map(|r| Some(r.value)).collect())],
        };
    }

    let mut categories: Vec<String> = Vec::new();
    let mut category_index: HashMap<&'a str, usize> = HashMap::new();
    for r in records {
        category_index.entry(r.category.as_str()).or_insert_with(|| {
            categories.push(r.category.clone());
            categories.len() - 1
        });
    }

    let mut series: Vec<(String, Vec<Option<f64>>)> = Vec::new();
    let mut series_index: HashMap<&'a str, usize> = HashMap::new();
    for r in records {
        let name = r.series_name.as_deref().unwrap_or(default_name);
        let si = *series_index.entry(name).or_insert_with(|| {
            series.push((name.to_string(), vec![None; categories.len()]));
            series.len() - 1
        });
        if let Some(&ci) = category_index.get(r.category.as_str()) {
            series[si].1[ci] = Some(r.value);
        }
    }
    Slots { categories, series }
}

impl ChartAdapter for CartesianAdapter {
    fn variant(&self) -> ChartVariant { self.variant }

    fn build(&self, records: &[CanonicalRecord], style: &ResolvedStyle) -> Result<Adapted> {
        require_records(self.variant, records)?;
        let Slots { categories, series } = slot_records(records, value_series_name(style));

        let marks: Vec<MarkKind> = [
            (style.analytics.show_average, MarkKind::Average),
            (style.analytics.show_min, MarkKind::Min),
            (style.analytics.show_max, MarkKind::Max),
        ]
        .into_iter()
        .filter_map(|(on, kind)| on.then_some(kind))
        .collect();

        let is_line = matches!(self.variant, ChartVariant::Line | ChartVariant::Area);
        let legend: Vec<String> = series.iter().map(|(name, _)| name.clone()).collect();
        let series: Vec<SeriesSpec> = series
            .into_iter()
            .map(|(name, values)| {
                let mut s = SeriesSpec::new(self.variant, name, SeriesData::Values(values))
                    .with_labels(style.series.show_labels);
                if style.analytics.any() {
                    let summary = summarize_values(s.data.values().iter().flatten().copied());
                    s = s.with_mark_lines(&summary, &marks);
                }
                if is_line {
                    s = s
                        .with_smooth(style.series.smooth)
                        .with_area(self.variant == ChartVariant::Area)
                        .with_line_width(style.series.line_width);
                }
                s
            })
            .collect();

        let mut adapted = Adapted::new(series, TooltipTrigger::Axis);
        adapted.axes = Some(Axes {
            x: AxisSpec::category(style.axis.x_name.clone(), categories),
            y: AxisSpec::value(style.axis.y_name.clone()),
        });
        adapted.legend = legend;
        Ok(adapted)
    }
}

impl ChartAdapter for ScatterAdapter {
    fn variant(&self) -> ChartVariant { ChartVariant::Scatter }

    fn build(&self, records: &[CanonicalRecord], style: &ResolvedStyle) -> Result<Adapted> {
        require_records(ChartVariant::Scatter, records)?;
        let default_name = value_series_name(style);

        let mut groups: Vec<(String, Vec<[f64; 2]>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (i, r) in records.iter().enumerate() {
            let name = r.series_name.as_deref().unwrap_or(default_name);
            let gi = *index.entry(name).or_insert_with(|| {
                groups.push((name.to_string(), Vec::new()));
                groups.len() - 1
            });
            groups[gi].1.push([r.x_number(i), r.y]);
        }

        let legend: Vec<String> = groups.iter().map(|(name, _)| name.clone()).collect();
        let series: Vec<SeriesSpec> = groups
            .into_iter()
            .map(|(name, points)| {
                SeriesSpec::new(ChartVariant::Scatter, name, SeriesData::Points(points))
                    .with_symbol_size(style.series.symbol_size)
                    .with_labels(style.series.show_labels)
            })
            .collect();

        let mut adapted = Adapted::new(series, TooltipTrigger::Item);
        adapted.axes = Some(Axes {
            x: AxisSpec::value(style.axis.x_name.clone()),
            y: AxisSpec::value(style.axis.y_name.clone()),
        });
        adapted.legend = legend;
        Ok(adapted)
    }
}

impl ChartAdapter for ProportionAdapter {
    fn variant(&self) -> ChartVariant { self.variant }

    fn build(&self, records: &[CanonicalRecord], style: &ResolvedStyle) -> Result<Adapted> {
        require_records(self.variant, records)?;
        let data: Vec<NamedValue> = records
            .iter()
            .map(|r| NamedValue { name: r.category.clone(), value: r.value })
            .collect();
        let legend: Vec<String> = data.iter().map(|d| d.name.clone()).collect();

        let mut series = SeriesSpec::new(self.variant, value_series_name(style), SeriesData::Named(data))
            .with_labels(style.series.show_labels);
        series = match self.variant {
            ChartVariant::Funnel => series.with_sort(SortOrder::Descending),
            _ if style.series.donut => series.with_radius("40%", "70%"),
            _ => series.with_radius("0%", "70%"),
        };

        let mut adapted = Adapted::new(vec![series], TooltipTrigger::Item);
        adapted.legend = legend;
        Ok(adapted)
    }
}

impl ChartAdapter for RadarAdapter {
    fn variant(&self) -> ChartVariant { ChartVariant::Radar }

    fn build(&self, records: &[CanonicalRecord], style: &ResolvedStyle) -> Result<Adapted> {
        require_records(ChartVariant::Radar, records)?;
        let Slots { categories, series } = slot_records(records, value_series_name(style));

        let observed = series
            .iter()
            .flat_map(|(_, values)| values.iter().flatten().copied())
            .fold(f64::NEG_INFINITY, f64::max);
        let max = (observed * RADAR_HEADROOM).min(f64::MAX);
        let max = if max > 0.0 { max } else { 1.0 };

        let indicators = categories
            .into_iter()
            .map(|name| RadarIndicator { name, max })
            .collect();
        let legend: Vec<String> = series.iter().map(|(name, _)| name.clone()).collect();
        let polygons = series
            .into_iter()
            .map(|(name, values)| RadarValue {
                name,
                value: values.into_iter().map(|v| v.unwrap_or(0.0)).collect(),
            })
            .collect();

        let series = SeriesSpec::new(ChartVariant::Radar, value_series_name(style), SeriesData::Radar(polygons))
            .with_labels(style.series.show_labels);
        let mut adapted = Adapted::new(vec![series], TooltipTrigger::Item);
        adapted.radar = Some(RadarSpec { indicators });
        adapted.legend = legend;
        Ok(adapted)
    }
}

impl ChartAdapter for GaugeAdapter {
    fn variant(&self) -> ChartVariant { ChartVariant::Gauge }

    fn build(&self, records: &[CanonicalRecord], style: &ResolvedStyle) -> Result<Adapted> {
        let Some(mean) = summarize(records).avg else {
            return Err(ChartError::InvalidShape {
                variant: ChartVariant::Gauge.to_string(),
                reason: "aggregate of an empty dataset is undefined".to_string(),
            });
        };
        let name = value_series_name(style);
        let data = vec![NamedValue { name: name.to_string(), value: mean }];
        let series = SeriesSpec::new(ChartVariant::Gauge, name, SeriesData::Named(data))
            .with_labels(style.series.show_labels);
        Ok(Adapted::new(vec![series], TooltipTrigger::Item))
    }
}

impl ChartAdapter for HeatmapAdapter {
    fn variant(&self) -> ChartVariant { ChartVariant::Heatmap }

    fn build(&self, records: &[CanonicalRecord], style: &ResolvedStyle) -> Result<Adapted> {
        require_records(ChartVariant::Heatmap, records)?;
        let lane = value_series_name(style);
        let cells: Vec<[f64; 3]> = records
            .iter()
            .enumerate()
            .map(|(i, r)| [i as f64, 0.0, r.value])
            .collect();
        let summary = summarize(records);

        let series = SeriesSpec::new(ChartVariant::Heatmap, lane, SeriesData::Cells(cells))
            .with_labels(style.series.show_labels);
        let mut adapted = Adapted::new(vec![series], TooltipTrigger::Item);
        adapted.axes = Some(Axes {
            x: AxisSpec::category(style.axis.x_name.clone(), (0..records.len()).map(|i| i.to_string()).collect()),
            y: AxisSpec::category(style.axis.y_name.clone(), vec![lane.to_string()]),
        });
        adapted.visual_map = Some(VisualMap {
            min: summary.min.unwrap_or(0.0),
            max: summary.max.unwrap_or(0.0),
        });
        adapted.legend = vec![lane.to_string()];
        Ok(adapted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::samples::sample_dataset;
    use crate::style::{resolve, StyleConfig};
    use crate::theme::ThemeMode;

    #[test]
    fn every_variant_has_its_own_adapter() {
        for variant in ChartVariant::ALL {
            let adapter = adapter_for(variant);
            assert_eq!(adapter.variant(), variant);
            assert_eq!(adapter.required_shape(), variant.required_shape());
        }
    }

    #[test]
    fn samples_build_for_their_own_family() {
        let style = resolve(&StyleConfig::default(), ThemeMode::Light);
        for variant in ChartVariant::ALL {
            let records = normalize(sample_dataset(variant).records());
            let adapted = adapter_for(variant).build(&records, &style).unwrap();
            assert!(!adapted.series.is_empty(), "{variant}");
            assert!(adapted.series.iter().all(|s| !s.data.is_empty()), "{variant}");
        }
    }
}
