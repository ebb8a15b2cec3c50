// File: crates/foundry-core/src/dataset.rs
// Summary: Raw record/dataset model plus JSON and CSV import for whole-dataset edits.
// Notes:
// - Records keep their fields in a sorted map so serialization is deterministic
//   and nothing downstream can depend on user key order.
// - Imports either produce a complete Dataset or fail; there is no partial apply.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// A single cell value of a raw record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric view used by normalization: text is parsed, booleans map to 1/0,
    /// anything unusable becomes 0.
    pub fn as_number(&self) -> f64 {
        let n = match self {
            Scalar::Number(n) => *n,
            Scalar::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Scalar::Bool(b) => {
                if *b { 1.0 } else { 0.0 }
            }
        };
        if n.is_finite() { n } else { 0.0 }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self { Scalar::Number(v) }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self { Scalar::Number(f64::from(v)) }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self { Scalar::Bool(v) }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self { Scalar::Text(v.to_string()) }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self { Scalar::Text(v) }
}

/// Open mapping from field name to scalar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Scalar>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Builder-style field setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> { self.fields.get(key) }

    pub fn contains(&self, key: &str) -> bool { self.fields.contains_key(key) }

    /// First present field among `keys`, in the given order.
    pub fn first_of(&self, keys: &[&str]) -> Option<&Scalar> {
        keys.iter().find_map(|k| self.fields.get(*k))
    }

    pub fn len(&self) -> usize { self.fields.len() }

    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Ordered sequence of records; replaced wholesale on edit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self { Self { records } }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }

    /// False when some numeric field is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.records
            .iter()
            .flat_map(|r| r.fields.values())
            .all(|v| !matches!(v, Scalar::Number(n) if !n.is_finite()))
    }

    /// Parse a raw JSON edit: an array of flat objects whose values are
    /// strings, numbers or booleans. `null` fields are dropped.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ChartError::malformed(e.to_string()))?;
        let serde_json::Value::Array(rows) = value else {
            return Err(ChartError::malformed("expected a JSON array of records"));
        };

        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let serde_json::Value::Object(obj) = row else {
                return Err(ChartError::malformed(format!("record {i} is not an object")));
            };
            let mut fields = BTreeMap::new();
            for (key, v) in obj {
                let scalar = match v {
                    serde_json::Value::Null => continue,
                    serde_json::Value::Bool(b) => Scalar::Bool(b),
                    serde_json::Value::Number(n) => match n.as_f64() {
                        Some(f) => Scalar::Number(f),
                        None => {
                            return Err(ChartError::malformed(format!(
                                "field '{key}' of record {i} is not a representable number"
                            )))
                        }
                    },
                    serde_json::Value::String(s) => Scalar::Text(s),
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        return Err(ChartError::malformed(format!(
                            "field '{key}' of record {i} is not a scalar"
                        )))
                    }
                };
                fields.insert(key, scalar);
            }
            records.push(Record { fields });
        }
        Ok(Self { records })
    }

    /// Read CSV with a header row. Cells become numbers, then booleans, then
    /// text; empty cells are left out of the record.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| ChartError::malformed(e.to_string()))?
            .clone();
        if headers.iter().all(str::is_empty) {
            return Err(ChartError::malformed("CSV header row is empty"));
        }

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row.map_err(|e| ChartError::malformed(e.to_string()))?;
            let record = headers
                .iter()
                .zip(row.iter())
                .filter(|(h, cell)| !h.is_empty() && !cell.is_empty())
                .map(|(h, cell)| (h.to_string(), parse_cell(cell)))
                .collect::<Record>();
            if record.is_empty() {
                log::debug!("csv: skipping row {} with no values", records.len() + 1);
                continue;
            }
            records.push(record);
        }
        Ok(Self { records })
    }

    pub fn from_csv_str(raw: &str) -> Result<Self> {
        Self::from_csv_reader(raw.as_bytes())
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self { Self { records } }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

fn parse_cell(cell: &str) -> Scalar {
    if let Ok(n) = cell.parse::<f64>() {
        if n.is_finite() {
            return Scalar::Number(n);
        }
    }
    if cell.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if cell.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    Scalar::Text(cell.to_string())
}
