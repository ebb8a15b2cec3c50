// File: crates/foundry-core/src/style.rs
// Summary: User style configuration (option groups) and the pure resolver that applies chrome theming.
// Notes:
// - Every option has a default and unknown keys are ignored, so partial JSON configs load.
// - In dark mode chrome colors are forced to the dark theme; series colors are never an input here.

use serde::{Deserialize, Serialize};

use crate::theme::{ChromeTheme, ThemeMode};
use crate::types::{Align, Insets, LegendPosition, Orient, TooltipTrigger};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub title_size: u32,
    pub subtitle_size: u32,
    pub label_size: u32,
    pub title_color: String,
    pub subtitle_color: String,
    pub title_align: Align,
}

impl Default for Typography {
    fn default() -> Self {
        let light = ChromeTheme::light();
        Self {
            font_family: "sans-serif".to_string(),
            title_size: 18,
            subtitle_size: 12,
            label_size: 12,
            title_color: light.title.to_string(),
            subtitle_color: light.subtitle.to_string(),
            title_align: Align::Center,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisStyle {
    pub show_x: bool,
    pub show_y: bool,
    pub x_name: String,
    pub y_name: String,
    pub line_color: String,
    pub label_color: String,
    pub show_split_lines: bool,
    pub split_line_color: String,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let light = ChromeTheme::light();
        Self {
            show_x: true,
            show_y: true,
            x_name: String::new(),
            y_name: String::new(),
            line_color: light.axis_line.to_string(),
            label_color: light.axis_label.to_string(),
            show_split_lines: true,
            split_line_color: light.split_line.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendStyle {
    pub show: bool,
    pub position: LegendPosition,
    pub orient: Orient,
    pub text_color: String,
    pub font_size: u32,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            show: true,
            position: LegendPosition::Bottom,
            orient: Orient::Horizontal,
            text_color: ChromeTheme::light().legend_text.to_string(),
            font_size: 12,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipStyle {
    pub show: bool,
    /// `None` lets the chart family pick (axis for cartesian, item otherwise).
    pub trigger: Option<TooltipTrigger>,
    pub background: String,
    pub text_color: String,
    pub border_color: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        let light = ChromeTheme::light();
        Self {
            show: true,
            trigger: None,
            background: light.tooltip_background.to_string(),
            text_color: light.tooltip_text.to_string(),
            border_color: light.tooltip_border.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridStyle {
    #[serde(flatten)]
    pub margins: Insets,
    pub contain_label: bool,
}

impl Default for GridStyle {
    fn default() -> Self { Self { margins: Insets::default(), contain_label: true } }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesStyle {
    pub smooth: bool,
    pub show_labels: bool,
    pub line_width: f64,
    pub symbol_size: f64,
    /// Render pie charts as a ring.
    pub donut: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { smooth: false, show_labels: false, line_width: 2.0, symbol_size: 10.0, donut: false }
    }
}

/// Statistical overlay toggles for bar/line/area series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsStyle {
    pub show_average: bool,
    pub show_min: bool,
    pub show_max: bool,
}

impl AnalyticsStyle {
    pub fn any(&self) -> bool { self.show_average || self.show_min || self.show_max }
}

/// Everything the user can restyle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    pub title: String,
    pub subtitle: String,
    pub theme: ThemeMode,
    pub background: String,
    pub typography: Typography,
    pub axis: AxisStyle,
    pub legend: LegendStyle,
    pub tooltip: TooltipStyle,
    pub grid: GridStyle,
    pub series: SeriesStyle,
    pub analytics: AnalyticsStyle,
    pub animation: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            theme: ThemeMode::Light,
            background: ChromeTheme::light().background.to_string(),
            typography: Typography::default(),
            axis: AxisStyle::default(),
            legend: LegendStyle::default(),
            tooltip: TooltipStyle::default(),
            grid: GridStyle::default(),
            series: SeriesStyle::default(),
            analytics: AnalyticsStyle::default(),
            animation: true,
        }
    }
}

impl StyleConfig {
    /// Parse a JSON style document; missing groups take defaults, unknown keys are ignored.
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Style with chrome colors settled for one theme mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub mode: ThemeMode,
    pub title: String,
    pub subtitle: String,
    pub background: String,
    pub typography: Typography,
    pub axis: AxisStyle,
    pub legend: LegendStyle,
    pub tooltip: TooltipStyle,
    pub grid: GridStyle,
    pub series: SeriesStyle,
    pub analytics: AnalyticsStyle,
    pub animation: bool,
}

/// Merge user style with chrome theming for `mode`. Pure: same input, same output.
pub fn resolve(style: &StyleConfig, mode: ThemeMode) -> ResolvedStyle {
    let mut resolved = ResolvedStyle {
        mode,
        title: style.title.clone(),
        subtitle: style.subtitle.clone(),
        background: style.background.clone(),
        typography: style.typography.clone(),
        axis: style.axis.clone(),
        legend: style.legend.clone(),
        tooltip: style.tooltip.clone(),
        grid: style.grid.clone(),
        series: style.series.clone(),
        analytics: style.analytics,
        animation: style.animation,
    };

    if mode == ThemeMode::Dark {
        let dark = ChromeTheme::dark();
        resolved.background = dark.background.to_string();
        resolved.typography.title_color = dark.title.to_string();
        resolved.typography.subtitle_color = dark.subtitle.to_string();
        resolved.axis.line_color = dark.axis_line.to_string();
        resolved.axis.label_color = dark.axis_label.to_string();
        resolved.axis.split_line_color = dark.split_line.to_string();
        resolved.legend.text_color = dark.legend_text.to_string();
        resolved.tooltip.background = dark.tooltip_background.to_string();
        resolved.tooltip.text_color = dark.tooltip_text.to_string();
        resolved.tooltip.border_color = dark.tooltip_border.to_string();
    }
    resolved
}
