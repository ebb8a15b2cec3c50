// File: crates/foundry-core/src/share.rs
// Summary: Share-link payload {data, query, type} encoded as URL-safe base64 JSON.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::variant::ChartVariant;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    pub data: Dataset,
    pub query: String,
    #[serde(rename = "type")]
    pub variant: ChartVariant,
}

/// Encode for use as a URL query parameter.
pub fn encode_share(payload: &SharePayload) -> Result<String> {
    let json = serde_json::to_vec(payload).map_err(|e| ChartError::Serialization { reason: e.to_string() })?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_share(token: &str) -> Result<SharePayload> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| ChartError::InvalidShareLink { reason: e.to_string() })?;
    serde_json::from_slice(&bytes).map_err(|e| ChartError::InvalidShareLink { reason: e.to_string() })
}
