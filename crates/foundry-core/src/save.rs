// File: crates/foundry-core/src/save.rs
// Summary: Save snapshot handed to the persistence collaborator; ids come from the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::variant::ChartVariant;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub variant: ChartVariant,
    pub config: ChartSpec,
    pub data: Dataset,
    pub query: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SaveRecord {
    /// Snapshot a composed chart. Uniqueness of `id` is the persistence layer's concern.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        config: ChartSpec,
        data: Dataset,
        query: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            variant: config.variant,
            config,
            data,
            query: query.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the snapshot contents, keeping id and creation time.
    pub fn updated(self, config: ChartSpec, data: Dataset, now: DateTime<Utc>) -> Self {
        Self { variant: config.variant, config, data, updated_at: now, ..self }
    }

    /// Fails on NaN or infinite numbers, which JSON would silently turn into `null`.
    pub fn to_json(&self) -> Result<String> {
        if !self.config.is_finite() || !self.data.is_finite() {
            log::warn!("save '{}' rejected: payload holds a non-finite number", self.id);
            return Err(ChartError::Serialization {
                reason: "payload holds a NaN or infinite number".to_string(),
            });
        }
        serde_json::to_string(self).map_err(|e| ChartError::Serialization { reason: e.to_string() })
    }

    /// Serialize and refuse payloads larger than `quota` bytes.
    pub fn to_json_within(&self, quota: usize) -> Result<String> {
        let json = self.to_json()?;
        if json.len() > quota {
            log::warn!("save '{}' rejected: {} bytes exceeds quota of {quota}", self.id, json.len());
            return Err(ChartError::Serialization {
                reason: format!("payload of {} bytes exceeds quota of {quota} bytes", json.len()),
            });
        }
        Ok(json)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ChartError::Serialization { reason: e.to_string() })
    }
}
