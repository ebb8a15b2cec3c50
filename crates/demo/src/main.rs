// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV/JSON dataset (or a sample), walks it through every chart variant and writes JSON specs.

use anyhow::{Context, Result};
use foundry_core::{
    normalize, sample_dataset, summarize, update, ChartVariant, Dataset, EditorState, Event, PaletteManager,
    PaletteRegistry, StyleConfig,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: foundry-demo [data.csv|data.json|sample] [variant|all] [style.json]
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "sample".to_string());
    let variant_arg = args.next().unwrap_or_else(|| "all".to_string());
    let style_path = args.next();

    let variants: Vec<ChartVariant> = if variant_arg.eq_ignore_ascii_case("all") {
        ChartVariant::ALL.to_vec()
    } else {
        vec![variant_arg.parse::<ChartVariant>()?]
    };

    let dataset = if input == "sample" {
        sample_dataset(variants[0])
    } else {
        load_dataset(Path::new(&input)).with_context(|| format!("failed to load dataset '{input}'"))?
    };
    log::info!("Loaded {} records", dataset.len());
    if dataset.is_empty() {
        anyhow::bail!("no records loaded - check headers/delimiter.");
    }

    let style = match style_path {
        Some(p) => load_style(Path::new(&p)).with_context(|| format!("failed to load style '{p}'"))?,
        None => StyleConfig { title: "Chart Foundry demo".to_string(), ..StyleConfig::default() },
    };

    let summary = summarize(&normalize(dataset.records()));
    log::info!("Value summary: {summary}");

    let palette = PaletteManager::new(PaletteRegistry::builtin(), PaletteRegistry::DEFAULT)?;
    let mut state = EditorState::new(dataset, variants[0], style, palette);

    let stem = if input == "sample" {
        "sample".to_string()
    } else {
        Path::new(&input).file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string()
    };

    let summary_out = out_file(&format!("summary_{stem}.json"));
    std::fs::write(&summary_out, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("writing {}", summary_out.display()))?;

    for variant in variants {
        let updated = update(state, Event::SwitchVariant(variant));
        updated.outcome?;
        state = updated.state;

        let spec = state.spec();
        if let Some(reason) = &spec.empty_state {
            log::warn!("{variant}: empty chart ({reason})");
        }
        let out = out_file(&format!("spec_{stem}_{variant}.json"));
        let json = serde_json::to_string_pretty(spec)?;
        std::fs::write(&out, json).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {} ({} series)", out.display(), spec.series.len());
    }

    Ok(())
}

/// Load CSV or JSON depending on the file extension.
fn load_dataset(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let dataset = match ext.as_str() {
        "json" => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
            Dataset::from_json_str(&raw)?
        }
        _ => {
            let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Dataset::from_csv_reader(file)?
        }
    };
    Ok(dataset)
}

fn load_style(path: &Path) -> Result<StyleConfig> {
    let raw = std::fs::read_to_string(path)?;
    Ok(StyleConfig::from_json_str(&raw)?)
}

/// Output path under target/out, e.g. target/out/spec_<stem>_<variant>.json
fn out_file(name: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(name);
    out
}
