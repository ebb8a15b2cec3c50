// File: crates/foundry-core/tests/palette.rs
// Purpose: Palette manager operations keep the palette non-empty and deterministic.

use foundry_core::{ChartError, ColorPalette, PaletteManager, PaletteRegistry};

fn single() -> PaletteManager {
    let palette = ColorPalette::new(["#112233"]).unwrap();
    PaletteManager::with_palette(PaletteRegistry::builtin(), palette)
}

#[test]
fn removing_the_last_color_is_rejected() {
    let mut pm = single();
    let before = pm.active().clone();
    let err = pm.remove_color(0).unwrap_err();
    assert_eq!(err, ChartError::PaletteUnderflow { len: 1 });
    assert_eq!(pm.active(), &before);
}

#[test]
fn length_stays_positive_through_any_sequence() {
    let mut pm = single();
    // add, remove, remove, add, remove x3 ...
    let ops = [true, false, false, true, true, false, false, false, false, true, false];
    for add in ops {
        if add {
            pm.add_color();
        } else {
            let _ = pm.remove_color(0);
        }
        assert!(pm.active().len() >= 1);
    }
}

#[test]
fn add_color_uses_golden_angle_of_current_length() {
    let mut pm = PaletteManager::new(PaletteRegistry::builtin(), "westeros").unwrap();
    assert_eq!(pm.active().len(), 6);
    let added = pm.add_color().to_string();
    // n = 6: hue 825 mod 360 = 105, s = 76, l = 51
    assert_eq!(added, "hsl(105, 76%, 51%)");
    assert_eq!(pm.active().colors().last().map(String::as_str), Some("hsl(105, 76%, 51%)"));
    assert_eq!(pm.active_name(), None);
}

#[test]
fn apply_theme_swaps_whole_palette_and_rejects_unknown_names() {
    let mut pm = PaletteManager::default();
    pm.apply_theme("roma").unwrap();
    assert_eq!(pm.active(), PaletteManager::new(PaletteRegistry::builtin(), "roma").unwrap().active());
    assert_eq!(pm.active_name(), Some("roma"));

    let before = pm.active().clone();
    let err = pm.apply_theme("neon").unwrap_err();
    assert_eq!(err, ChartError::UnknownPalette("neon".into()));
    assert_eq!(pm.active(), &before);
}

#[test]
fn set_color_is_bounds_checked() {
    let mut pm = PaletteManager::default();
    let len = pm.active().len();
    pm.set_color(0, "#000000").unwrap();
    assert_eq!(pm.active().colors()[0], "#000000");
    assert_eq!(pm.set_color(len, "#fff"), Err(ChartError::IndexOutOfRange { index: len, len }));
    assert!(matches!(pm.set_color(0, "  "), Err(ChartError::InvalidColor(_))));
    assert_eq!(pm.active().colors()[0], "#000000");
}

#[test]
fn remove_out_of_range_is_reported() {
    let mut pm = PaletteManager::default();
    let len = pm.active().len();
    assert_eq!(pm.remove_color(len + 3), Err(ChartError::IndexOutOfRange { index: len + 3, len }));
    let removed = pm.remove_color(0).unwrap();
    assert_eq!(removed, "#5470c6");
    assert_eq!(pm.active().len(), len - 1);
}

#[test]
fn registry_lists_builtin_names() {
    let registry = PaletteRegistry::builtin();
    let names: Vec<&str> = registry.names().collect();
    assert!(names.contains(&"default"));
    assert!(names.contains(&"macarons"));
    assert_eq!(names.len(), 8);
}
