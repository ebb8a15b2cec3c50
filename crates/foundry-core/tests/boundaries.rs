// File: crates/foundry-core/tests/boundaries.rs
// Purpose: Share links, save snapshots and export requests at the engine boundary.

use chrono::{TimeZone, Utc};
use foundry_core::{
    compose, decode_share, encode_share, sample_dataset, ChartError, ChartExporter, ChartVariant, Dataset,
    EditorState, ExportRequest, PaletteManager, Record, SaveRecord, SeriesData, SharePayload, StyleConfig,
};

#[test]
fn share_link_round_trips() -> anyhow::Result<()> {
    let payload = SharePayload {
        data: sample_dataset(ChartVariant::Scatter),
        query: "fuel vs weight".to_string(),
        variant: ChartVariant::Scatter,
    };
    let token = encode_share(&payload)?;
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(decode_share(&token)?, payload);
    Ok(())
}

#[test]
fn share_json_shape() {
    let payload = SharePayload {
        data: sample_dataset(ChartVariant::Gauge),
        query: String::new(),
        variant: ChartVariant::Gauge,
    };
    let v = serde_json::to_value(&payload).unwrap();
    assert_eq!(v["type"], "gauge");
    assert_eq!(v["data"][0]["name"], "Score");
}

#[test]
fn corrupt_share_links_are_rejected() {
    assert!(matches!(decode_share("not base64!!"), Err(ChartError::InvalidShareLink { .. })));
    // valid base64, not a payload
    assert!(matches!(decode_share("e30"), Err(ChartError::InvalidShareLink { .. })));
}

#[test]
fn save_record_round_trips_and_updates() {
    let state = EditorState::with_sample(ChartVariant::Line);
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap();

    let saved = SaveRecord::new("chart-1", "Monthly", state.spec().clone(), state.dataset().clone(), "q", t0);
    assert_eq!(saved.variant, ChartVariant::Line);
    let json = saved.to_json().expect("serialize");
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"type\":\"line\""));
    assert_eq!(SaveRecord::from_json(&json).expect("parse"), saved);

    let bar = EditorState::with_sample(ChartVariant::Bar);
    let next = saved.clone().updated(bar.spec().clone(), bar.dataset().clone(), t1);
    assert_eq!(next.id, "chart-1");
    assert_eq!(next.created_at, t0);
    assert_eq!(next.updated_at, t1);
    assert_eq!(next.variant, ChartVariant::Bar);
}

#[test]
fn save_round_trips_for_every_family() {
    let mut style = StyleConfig::default();
    style.analytics.show_average = true;
    style.analytics.show_min = true;
    let palette = PaletteManager::default();
    let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    for variant in ChartVariant::ALL {
        let data = sample_dataset(variant);
        let spec = compose(&data, variant, &style, palette.active());
        let saved = SaveRecord::new(format!("chart-{variant}"), variant.as_str(), spec, data, "", t0);
        let json = saved.to_json().expect("serialize");
        assert_eq!(SaveRecord::from_json(&json).expect("parse"), saved, "{variant}");
    }
}

#[test]
fn huge_values_keep_a_finite_mean_and_save_cleanly() {
    let data = Dataset::new(vec![Record::new().with("value", 1e308), Record::new().with("value", 1e308)]);
    let mut style = StyleConfig::default();
    style.analytics.show_average = true;
    let palette = PaletteManager::default();

    let gauge = compose(&data, ChartVariant::Gauge, &style, palette.active());
    let SeriesData::Named(values) = &gauge.series[0].data else {
        panic!("gauge data should be a named value");
    };
    assert_eq!(values[0].value, 1e308);

    for variant in [ChartVariant::Gauge, ChartVariant::Bar, ChartVariant::Radar] {
        let spec = compose(&data, variant, &style, palette.active());
        assert!(spec.is_finite(), "{variant}");
        let saved = SaveRecord::new("big", "Big", spec, data.clone(), "", Utc::now());
        let json = saved.to_json().expect("serialize");
        assert!(!json.contains("null"), "{variant}");
        assert_eq!(SaveRecord::from_json(&json).expect("parse"), saved, "{variant}");
    }
}

#[test]
fn non_finite_numbers_are_refused_at_save() {
    let data = Dataset::new(vec![Record::new().with("name", "A").with("value", f64::INFINITY)]);
    let spec = compose(&data, ChartVariant::Bar, &StyleConfig::default(), PaletteManager::default().active());
    let saved = SaveRecord::new("inf", "Inf", spec, data, "", Utc::now());
    assert!(matches!(saved.to_json(), Err(ChartError::Serialization { .. })));
}

#[test]
fn save_over_quota_is_a_serialization_error() {
    let state = EditorState::with_sample(ChartVariant::Pie);
    let saved = SaveRecord::new("id", "Pie", state.spec().clone(), state.dataset().clone(), "", Utc::now());
    let size = saved.to_json().unwrap().len();
    assert!(saved.to_json_within(size).is_ok());
    assert!(matches!(saved.to_json_within(size - 1), Err(ChartError::Serialization { .. })));
    assert!(matches!(SaveRecord::from_json("{}"), Err(ChartError::Serialization { .. })));
}

#[derive(Debug, thiserror::Error)]
#[error("backend unavailable")]
struct Offline;

/// Records what it was asked to rasterize.
struct FakeExporter {
    fail: bool,
}

impl ChartExporter for FakeExporter {
    type Error = Offline;

    fn export(&self, request: &ExportRequest<'_>) -> Result<Vec<u8>, Offline> {
        if self.fail {
            return Err(Offline);
        }
        Ok(format!("{}@{}x:{}", request.spec.variant, request.pixel_ratio, request.background).into_bytes())
    }
}

#[test]
fn export_request_is_validated() {
    let state = EditorState::with_sample(ChartVariant::Bar);
    let spec = state.spec();
    for ratio in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(ExportRequest::new(spec, ratio, "#fff"), Err(ChartError::InvalidExport { .. })));
    }
    assert!(matches!(ExportRequest::new(spec, 2.0, " "), Err(ChartError::InvalidExport { .. })));

    let req = ExportRequest::with_spec_background(spec, 2.0).expect("valid request");
    assert_eq!(req.background, spec.background);
    let bytes = FakeExporter { fail: false }.export(&req).expect("export");
    assert_eq!(String::from_utf8(bytes).unwrap(), format!("bar@2x:{}", spec.background));
    assert!(FakeExporter { fail: true }.export(&req).is_err());
}
