// File: crates/foundry-core/tests/style.rs
// Purpose: Style resolution forces dark chrome, honors user chrome in light mode, loads partial JSON.

use foundry_core::{compose, resolve, ChartVariant, ChromeTheme, Dataset, PaletteManager, Record, StyleConfig, ThemeMode};

fn custom_style() -> StyleConfig {
    let mut style = StyleConfig::default();
    style.background = "#ffeecc".to_string();
    style.typography.title_color = "#ff0000".to_string();
    style.axis.line_color = "#00ff00".to_string();
    style.legend.text_color = "#0000ff".to_string();
    style.tooltip.background = "#123456".to_string();
    style
}

#[test]
fn dark_mode_forces_chrome_colors() {
    let r = resolve(&custom_style(), ThemeMode::Dark);
    let dark = ChromeTheme::dark();
    assert_eq!(r.mode, ThemeMode::Dark);
    assert_eq!(r.background, dark.background);
    assert_eq!(r.typography.title_color, dark.title);
    assert_eq!(r.typography.subtitle_color, dark.subtitle);
    assert_eq!(r.axis.line_color, dark.axis_line);
    assert_eq!(r.axis.label_color, dark.axis_label);
    assert_eq!(r.axis.split_line_color, dark.split_line);
    assert_eq!(r.legend.text_color, dark.legend_text);
    assert_eq!(r.tooltip.background, dark.tooltip_background);
    assert_eq!(r.tooltip.text_color, dark.tooltip_text);
    assert_eq!(r.tooltip.border_color, dark.tooltip_border);
}

#[test]
fn light_mode_keeps_user_chrome() {
    let style = custom_style();
    let r = resolve(&style, ThemeMode::Light);
    assert_eq!(r.background, "#ffeecc");
    assert_eq!(r.typography.title_color, "#ff0000");
    assert_eq!(r.axis.line_color, "#00ff00");
    assert_eq!(r.legend.text_color, "#0000ff");
    assert_eq!(r.tooltip.background, "#123456");
}

#[test]
fn non_chrome_options_survive_dark_mode() {
    let mut style = custom_style();
    style.title = "Revenue".to_string();
    style.typography.title_size = 24;
    style.series.smooth = true;
    style.grid.margins.left = 12;
    let r = resolve(&style, ThemeMode::Dark);
    assert_eq!(r.title, "Revenue");
    assert_eq!(r.typography.title_size, 24);
    assert!(r.series.smooth);
    assert_eq!(r.grid.margins.left, 12);
}

#[test]
fn resolve_is_pure() {
    let style = custom_style();
    assert_eq!(resolve(&style, ThemeMode::Dark), resolve(&style, ThemeMode::Dark));
    assert_eq!(resolve(&style, ThemeMode::Light), resolve(&style, ThemeMode::Light));
}

#[test]
fn theme_toggle_leaves_series_colors_alone() {
    let data = Dataset::new(vec![Record::new().with("name", "A").with("value", 1)]);
    let palette = PaletteManager::default();
    let mut style = StyleConfig::default();
    let light = compose(&data, ChartVariant::Bar, &style, palette.active());
    style.theme = ThemeMode::Dark;
    let dark = compose(&data, ChartVariant::Bar, &style, palette.active());
    assert_eq!(light.colors, dark.colors);
    assert_eq!(light.series, dark.series);
    assert_ne!(light.background, dark.background);
    assert_eq!(dark.background, ChromeTheme::dark().background);
}

#[test]
fn partial_json_fills_defaults_and_ignores_unknown_keys() {
    let raw = r##"{
        "title": "Sales",
        "theme": "dark",
        "typography": { "titleSize": 30 },
        "grid": { "left": 10 },
        "legend": { "position": "top" },
        "tooltip": { "trigger": "axis" },
        "sparkles": true
    }"##;
    let style = StyleConfig::from_json_str(raw).expect("partial style parses");
    let defaults = StyleConfig::default();
    assert_eq!(style.title, "Sales");
    assert_eq!(style.theme, ThemeMode::Dark);
    assert_eq!(style.typography.title_size, 30);
    assert_eq!(style.typography.subtitle_size, defaults.typography.subtitle_size);
    assert_eq!(style.grid.margins.left, 10);
    assert_eq!(style.grid.margins.right, defaults.grid.margins.right);
    assert_eq!(style.series, defaults.series);
    assert!(style.animation);
}

#[test]
fn empty_json_object_is_the_default_style() {
    assert_eq!(StyleConfig::from_json_str("{}").unwrap(), StyleConfig::default());
}
