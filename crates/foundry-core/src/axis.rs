// File: crates/foundry-core/src/axis.rs
// Summary: Axis model of the composed spec (category/value axes with chrome styling).

use serde::{Deserialize, Serialize};

use crate::style::AxisStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub name: String,
    /// Category labels; `None` for value axes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    pub show: bool,
    pub line_color: String,
    pub label_color: String,
    pub label_size: u32,
    pub split_line: bool,
    pub split_line_color: String,
}

impl AxisSpec {
    pub fn new(kind: AxisKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            data: None,
            show: true,
            line_color: String::new(),
            label_color: String::new(),
            label_size: 12,
            split_line: false,
            split_line_color: String::new(),
        }
    }

    pub fn category(name: impl Into<String>, categories: Vec<String>) -> Self {
        let mut a = Self::new(AxisKind::Category, name);
        a.data = Some(categories);
        a
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self::new(AxisKind::Value, name)
    }

    /// Apply resolved chrome styling. Split lines are drawn on value axes only.
    pub fn styled(mut self, style: &AxisStyle, show: bool, label_size: u32) -> Self {
        self.show = show;
        self.line_color = style.line_color.clone();
        self.label_color = style.label_color.clone();
        self.label_size = label_size;
        self.split_line = style.show_split_lines && self.kind == AxisKind::Value;
        self.split_line_color = style.split_line_color.clone();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: AxisSpec,
    pub y: AxisSpec,
}
