// File: crates/foundry-core/src/theme.rs
// Summary: Light/Dark chrome theming (axes, grid, tooltip, legend, titles). Series colors live in palette.rs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Chrome colors for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChromeTheme {
    pub background: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub split_line: &'static str,
    pub legend_text: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
    pub tooltip_border: &'static str,
}

impl ChromeTheme {
    pub const fn dark() -> Self {
        Self {
            background: "#121214",
            title: "#ebebf5",
            subtitle: "#a0a0aa",
            axis_line: "#b4b4be",
            axis_label: "#d2d2dc",
            split_line: "#28282d",
            legend_text: "#d2d2dc",
            tooltip_background: "#1e1e23",
            tooltip_text: "#ebebf5",
            tooltip_border: "#3c3c46",
        }
    }

    pub const fn light() -> Self {
        Self {
            background: "#fafafc",
            title: "#14141e",
            subtitle: "#6e7079",
            axis_line: "#3c3c46",
            axis_label: "#6e7079",
            split_line: "#e6e6eb",
            legend_text: "#333333",
            tooltip_background: "#ffffff",
            tooltip_text: "#333333",
            tooltip_border: "#cccccc",
        }
    }
}
