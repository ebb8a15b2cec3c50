// File: crates/foundry-core/src/palette.rs
// Summary: Named palette registry and the manager that owns the active series palette.
// Notes:
// - A ColorPalette can never be empty; every constructor and every mutation enforces it.
// - The registry is immutable and handed to the manager, so there is no global palette table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Ordered, non-empty list of series colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl ColorPalette {
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ChartError::PaletteUnderflow { len: 0 });
        }
        if let Some(bad) = colors.iter().find(|c| c.trim().is_empty()) {
            return Err(ChartError::InvalidColor(bad.clone()));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] { &self.colors }

    /// Always at least 1.
    pub fn len(&self) -> usize { self.colors.len() }
}

impl TryFrom<Vec<String>> for ColorPalette {
    type Error = ChartError;
    fn try_from(colors: Vec<String>) -> Result<Self> { Self::new(colors) }
}

impl From<ColorPalette> for Vec<String> {
    fn from(p: ColorPalette) -> Self { p.colors }
}

/// Golden-angle color for a palette that currently holds `n` colors.
pub fn generated_color(n: usize) -> String {
    let hue = (n as f64 * 137.5) % 360.0;
    let saturation = 70 + (n % 20);
    let lightness = 45 + (n % 20);
    format!("hsl({hue}, {saturation}%, {lightness}%)")
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("default", &["#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4", "#ea7ccc"]),
    ("vintage", &["#d87c7c", "#919e8b", "#d7ab82", "#6e7074", "#61a0a8", "#efa18d", "#787464", "#cc7e63", "#724e58", "#4b565b"]),
    ("macarons", &["#2ec7c9", "#b6a2de", "#5ab1ef", "#ffb980", "#d87a80", "#8d98b3", "#e5cf0d", "#97b552", "#95706d", "#dc69aa"]),
    ("westeros", &["#516b91", "#59c4e6", "#edafda", "#93b7e3", "#a5e7f0", "#cbb0e3"]),
    ("wonderland", &["#4ea397", "#22c3aa", "#7bd9a5", "#d0648a", "#f58db2", "#f2b3c9"]),
    ("walden", &["#3fb1e3", "#6be6c1", "#626c91", "#a0a7e6", "#c4ebad", "#96dee8"]),
    ("chalk", &["#fc97af", "#87f7cf", "#f7f494", "#72ccff", "#f7c5a0", "#d4a4eb", "#d2f5a6", "#76f2f2"]),
    ("roma", &["#e01f54", "#001852", "#f5e8c8", "#b8d2c7", "#c6b38e", "#a4d8c2", "#f3d999", "#d3758f", "#dcc392", "#2e4783"]),
];

/// Immutable name -> palette table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteRegistry {
    palettes: BTreeMap<String, ColorPalette>,
}

impl PaletteRegistry {
    pub const DEFAULT: &'static str = "default";

    /// Built-in palette table.
    pub fn builtin() -> Self {
        let palettes = BUILTIN
            .iter()
            .map(|(name, colors)| {
                let colors = colors.iter().map(|c| c.to_string()).collect();
                (name.to_string(), ColorPalette { colors })
            })
            .collect();
        Self { palettes }
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ColorPalette)>,
    {
        Self { palettes: entries.into_iter().collect() }
    }

    pub fn get(&self, name: &str) -> Option<&ColorPalette> { self.palettes.get(name) }

    /// Palette names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> { self.palettes.keys().map(String::as_str) }
}

impl Default for PaletteRegistry {
    fn default() -> Self { Self::builtin() }
}

/// Owns the active palette; the only writer of series colors.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteManager {
    registry: PaletteRegistry,
    active: ColorPalette,
    active_name: Option<String>,
}

impl PaletteManager {
    /// Start with the registry palette `initial`.
    pub fn new(registry: PaletteRegistry, initial: &str) -> Result<Self> {
        let active = registry
            .get(initial)
            .cloned()
            .ok_or_else(|| ChartError::UnknownPalette(initial.to_string()))?;
        Ok(Self { registry, active, active_name: Some(initial.to_string()) })
    }

    /// Start from an explicit palette, e.g. one restored from a saved chart.
    pub fn with_palette(registry: PaletteRegistry, active: ColorPalette) -> Self {
        Self { registry, active, active_name: None }
    }

    pub fn registry(&self) -> &PaletteRegistry { &self.registry }

    pub fn active(&self) -> &ColorPalette { &self.active }

    /// Registry name of the active palette, `None` after any color edit.
    pub fn active_name(&self) -> Option<&str> { self.active_name.as_deref() }

    /// Replace the active palette with a registry palette.
    pub fn apply_theme(&mut self, name: &str) -> Result<()> {
        match self.registry.get(name) {
            Some(p) => {
                self.active = p.clone();
                self.active_name = Some(name.to_string());
                Ok(())
            }
            None => {
                log::warn!("apply_theme: unknown palette '{name}', keeping current colors");
                Err(ChartError::UnknownPalette(name.to_string()))
            }
        }
    }

    /// Append a golden-angle color and return it.
    pub fn add_color(&mut self) -> &str {
        let color = generated_color(self.active.len());
        self.active.colors.push(color);
        self.active_name = None;
        self.active.colors.last().map_or("", String::as_str)
    }

    pub fn remove_color(&mut self, index: usize) -> Result<String> {
        let len = self.active.len();
        if index >= len {
            return Err(ChartError::IndexOutOfRange { index, len });
        }
        if len <= 1 {
            log::warn!("remove_color: refusing to empty the palette");
            return Err(ChartError::PaletteUnderflow { len });
        }
        self.active_name = None;
        Ok(self.active.colors.remove(index))
    }

    pub fn set_color(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let len = self.active.len();
        if index >= len {
            return Err(ChartError::IndexOutOfRange { index, len });
        }
        if value.trim().is_empty() {
            return Err(ChartError::InvalidColor(value));
        }
        self.active.colors[index] = value;
        self.active_name = None;
        Ok(())
    }
}

impl Default for PaletteManager {
    fn default() -> Self {
        let registry = PaletteRegistry::builtin();
        let active = registry
            .get(PaletteRegistry::DEFAULT)
            .cloned()
            .unwrap_or_else(|| ColorPalette { colors: vec!["#5470c6".to_string()] });
        Self { registry, active, active_name: Some(PaletteRegistry::DEFAULT.to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_angle_sequence() {
        assert_eq!(generated_color(0), "hsl(0, 70%, 45%)");
        assert_eq!(generated_color(1), "hsl(137.5, 71%, 46%)");
        assert_eq!(generated_color(3), "hsl(52.5, 73%, 48%)");
        assert_eq!(generated_color(21), "hsl(7.5, 71%, 46%)");
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = ColorPalette::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, ChartError::PaletteUnderflow { len: 0 });
        assert!(serde_json::from_str::<ColorPalette>("[]").is_err());
    }

    #[test]
    fn custom_registry_backs_the_manager() {
        let mono = ColorPalette::new(["#000", "#777", "#fff"]).unwrap();
        let registry = PaletteRegistry::from_entries([("mono".to_string(), mono.clone())]);
        let pm = PaletteManager::new(registry, "mono").unwrap();
        assert_eq!(pm.active(), &mono);
        assert_eq!(pm.registry().names().collect::<Vec<_>>(), vec!["mono"]);
        assert!(PaletteManager::new(PaletteRegistry::from_entries(Vec::<(String, ColorPalette)>::new()), "default").is_err());
    }
}
