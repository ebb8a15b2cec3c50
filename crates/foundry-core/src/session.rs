// File: crates/foundry-core/src/session.rs
// Summary: Editor session state and the single update entry point every user edit goes through.
// Notes:
// - `update` applies one event and recomputes the spec before returning, so callers never
//   observe a spec that lags behind its inputs.
// - Rejected events keep the prior inputs and report why in `Updated::outcome`.

use crate::chart::{compose, ChartSpec};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::palette::PaletteManager;
use crate::reshape::{reshape, satisfies};
use crate::samples::sample_dataset;
use crate::style::StyleConfig;
use crate::variant::ChartVariant;

#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    dataset: Dataset,
    variant: ChartVariant,
    style: StyleConfig,
    palette: PaletteManager,
    query: String,
    spec: ChartSpec,
}

impl EditorState {
    pub fn new(dataset: Dataset, variant: ChartVariant, style: StyleConfig, palette: PaletteManager) -> Self {
        let dataset = reshape(&dataset, variant);
        let spec = compose(&dataset, variant, &style, palette.active());
        Self { dataset, variant, style, palette, query: String::new(), spec }
    }

    /// Session opened on the sample data for `variant` with default style and palette.
    pub fn with_sample(variant: ChartVariant) -> Self {
        Self::new(sample_dataset(variant), variant, StyleConfig::default(), PaletteManager::default())
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }

    pub fn variant(&self) -> ChartVariant { self.variant }

    pub fn style(&self) -> &StyleConfig { &self.style }

    /// Read-only; palette edits go through `Event::ApplyPalette` and friends.
    pub fn palette(&self) -> &PaletteManager { &self.palette }

    pub fn query(&self) -> &str { &self.query }

    /// Spec for the current inputs.
    pub fn spec(&self) -> &ChartSpec { &self.spec }

    fn recompose(mut self) -> Self {
        self.spec = compose(&self.dataset, self.variant, &self.style, self.palette.active());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    ReplaceDataset(Dataset),
    /// Raw JSON text from the data editor.
    EditRaw(String),
    LoadSample,
    SwitchVariant(ChartVariant),
    UpdateStyle(StyleConfig),
    ToggleTheme,
    ApplyPalette(String),
    AddColor,
    RemoveColor(usize),
    SetColor(usize, String),
    SetQuery(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Updated {
    pub state: EditorState,
    pub outcome: Result<()>,
}

/// Apply `event` to `prior` and return the new state with a freshly composed spec.
pub fn update(prior: EditorState, event: Event) -> Updated {
    let mut state = prior;
    let outcome = match event {
        Event::ReplaceDataset(dataset) => {
            state.dataset = reshape(&dataset, state.variant);
            Ok(())
        }
        Event::EditRaw(raw) => Dataset::from_json_str(&raw).map(|dataset| {
            state.dataset = reshape(&dataset, state.variant);
        }),
        Event::LoadSample => {
            state.dataset = sample_dataset(state.variant);
            Ok(())
        }
        Event::SwitchVariant(variant) => {
            if !satisfies(&state.dataset, variant) {
                state.dataset = reshape(&state.dataset, variant);
            }
            state.variant = variant;
            Ok(())
        }
        Event::UpdateStyle(style) => {
            state.style = style;
            Ok(())
        }
        Event::ToggleTheme => {
            state.style.theme = state.style.theme.toggled();
            Ok(())
        }
        Event::ApplyPalette(name) => state.palette.apply_theme(&name),
        Event::AddColor => {
            state.palette.add_color();
            Ok(())
        }
        Event::RemoveColor(index) => state.palette.remove_color(index).map(|_| ()),
        Event::SetColor(index, value) => state.palette.set_color(index, value),
        Event::SetQuery(query) => {
            state.query = query;
            Ok(())
        }
    };
    if let Err(e) = &outcome {
        log::warn!("edit rejected: {e}");
    }
    Updated { state: state.recompose(), outcome }
}
