// File: crates/foundry-core/src/chart.rs
// Summary: ChartSpec output model and the composer pipeline (reshape -> normalize -> adapt -> style -> assemble).
// Notes:
// - `compose` rebuilds the whole spec on every call; nothing is patched in place.
// - An unsatisfiable dataset yields an empty-state spec, never an error or panic.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::adapter::{adapter_for, Adapted, RadarSpec, VisualMap};
use crate::axis::Axes;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::normalize::normalize;
use crate::palette::ColorPalette;
use crate::reshape::{reshape, satisfies};
use crate::series::SeriesSpec;
use crate::style::{resolve, ResolvedStyle, StyleConfig};
use crate::types::{Align, Insets, LegendPosition, Orient, TooltipTrigger};
use crate::variant::ChartVariant;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpec {
    pub text: String,
    pub color: String,
    pub font_size: u32,
    pub font_family: String,
    pub align: Align,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSpec {
    pub show: bool,
    pub trigger: TooltipTrigger,
    pub background: String,
    pub text_color: String,
    pub border_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub position: LegendPosition,
    pub orient: Orient,
    pub text_color: String,
    pub font_size: u32,
    pub data: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    #[serde(flatten)]
    pub margins: Insets,
    pub contain_label: bool,
}

/// Renderer-ready chart description. Derived from inputs; never the source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub variant: ChartVariant,
    pub title: TextSpec,
    pub subtitle: TextSpec,
    pub tooltip: TooltipSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<Axes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSpec>,
    pub series: Vec<SeriesSpec>,
    pub colors: Vec<String>,
    pub animation: bool,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_map: Option<VisualMap>,
    /// Set when the dataset could not produce any series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool { self.empty_state.is_some() }

    /// True when every number in the spec can be written as JSON.
    pub fn is_finite(&self) -> bool {
        self.series.iter().all(SeriesSpec::is_finite)
            && self
                .radar
                .as_ref()
                .map_or(true, |r| r.indicators.iter().all(|i| i.max.is_finite()))
            && self.visual_map.as_ref().map_or(true, |v| v.min.is_finite() && v.max.is_finite())
    }
}

/// Compose a complete spec from the four inputs. Linear in dataset size.
pub fn compose(
    dataset: &Dataset,
    variant: ChartVariant,
    style: &StyleConfig,
    palette: &ColorPalette,
) -> ChartSpec {
    let shaped: Cow<'_, Dataset> = if satisfies(dataset, variant) {
        Cow::Borrowed(dataset)
    } else {
        Cow::Owned(reshape(dataset, variant))
    };
    let records = normalize(shaped.records());
    let resolved = resolve(style, style.theme);
    let adapted = adapter_for(variant).build(&records, &resolved);
    log::debug!("compose {variant}: {} records, theme {:?}", records.len(), resolved.mode);
    assemble(variant, &resolved, palette, adapted)
}

fn assemble(
    variant: ChartVariant,
    style: &ResolvedStyle,
    palette: &ColorPalette,
    adapted: Result<Adapted>,
) -> ChartSpec {
    let typo = &style.typography;
    let title = TextSpec {
        text: style.title.clone(),
        color: typo.title_color.clone(),
        font_size: typo.title_size,
        font_family: typo.font_family.clone(),
        align: typo.title_align,
    };
    let subtitle = TextSpec {
        text: style.subtitle.clone(),
        color: typo.subtitle_color.clone(),
        font_size: typo.subtitle_size,
        font_family: typo.font_family.clone(),
        align: typo.title_align,
    };
    let tooltip = |default_trigger: TooltipTrigger| TooltipSpec {
        show: style.tooltip.show,
        trigger: style.tooltip.trigger.unwrap_or(default_trigger),
        background: style.tooltip.background.clone(),
        text_color: style.tooltip.text_color.clone(),
        border_color: style.tooltip.border_color.clone(),
    };

    let mut spec = ChartSpec {
        variant,
        title,
        subtitle,
        tooltip: tooltip(TooltipTrigger::Item),
        legend: None,
        axes: None,
        grid: None,
        series: Vec::new(),
        colors: palette.colors().to_vec(),
        animation: style.animation,
        background: style.background.clone(),
        radar: None,
        visual_map: None,
        empty_state: None,
    };

    let adapted = match adapted {
        Ok(a) => a,
        Err(e) => {
            log::debug!("compose {variant}: empty state ({e})");
            spec.empty_state = Some(e.to_string());
            return spec;
        }
    };

    spec.tooltip = tooltip(adapted.trigger);
    spec.axes = adapted.axes.map(|Axes { x, y }| Axes {
        x: x.styled(&style.axis, style.axis.show_x, typo.label_size),
        y: y.styled(&style.axis, style.axis.show_y, typo.label_size),
    });
    if spec.axes.is_some() {
        spec.grid = Some(GridSpec {
            margins: style.grid.margins,
            contain_label: style.grid.contain_label,
        });
    }
    if style.legend.show && !adapted.legend.is_empty() {
        spec.legend = Some(LegendSpec {
            position: style.legend.position,
            orient: style.legend.orient,
            text_color: style.legend.text_color.clone(),
            font_size: style.legend.font_size,
            data: adapted.legend,
        });
    }
    spec.series = adapted.series;
    spec.radar = adapted.radar;
    spec.visual_map = adapted.visual_map;
    spec
}
