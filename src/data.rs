//! The persisted application data aggregate
//!
//! [`AppData`] mirrors the JSON blob the simulator persists: a `config`
//! object with simulation parameters plus one ordered record sequence per
//! settings page. The record sequences are owned by other pages and treated
//! as opaque JSON here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::macros::date;
use time::Date;

use crate::error::{Error, Result};

time::serde::format_description!(birth_date_format, Date, "[year]-[month]-[day]");

/// Core simulation parameters, persisted under the `config` top-level key.
///
/// Missing fields fall back to their defaults when a blob from an older
/// version is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Simulation horizon in years
    pub period: u32,

    /// Number of Monte-Carlo trials per run
    pub times: u32,

    /// Birth date, used to convert simulation months into ages
    #[serde(with = "birth_date_format")]
    pub birth_date: Date,

    /// Starting cash position
    pub cash: f64,

    /// Annual inflation rate in percent
    pub inflation_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            period: 20,
            times: 100,
            birth_date: date!(2000 - 01 - 01),
            cash: 0.0,
            inflation_rate: 2.0,
        }
    }
}

/// The full persisted aggregate for the simulator.
///
/// `config` is always present. The remaining sequences hold records whose
/// shape is defined by their own settings pages; this crate stores and
/// round-trips them without interpreting them. Unknown top-level keys from
/// a newer version land in `extra` and survive save/export verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub config: SimConfig,

    #[serde(default)]
    pub stocks: Vec<Value>,

    #[serde(default)]
    pub soukan: Vec<Value>,

    #[serde(default)]
    pub tuika: Vec<Value>,

    #[serde(default)]
    pub life_cost: Vec<Value>,

    #[serde(default)]
    pub big_expense: Vec<Value>,

    #[serde(default)]
    pub income: Vec<Value>,

    #[serde(default)]
    pub tax: Vec<Value>,

    /// Forward-compatible carry-through of unrecognized top-level keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppData {
    /// Shallow-merge a loaded JSON object into this aggregate.
    ///
    /// Only top-level keys present in `incoming` are replaced; keys absent
    /// from it keep their current values. Nested structures are replaced
    /// wholesale, never merged field-by-field.
    ///
    /// The merge is atomic: if the merged document does not deserialize
    /// back into [`AppData`], `self` is left unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a merged top-level key holds a value the
    /// aggregate cannot represent (e.g. `config` is not an object).
    pub fn shallow_merge(&mut self, incoming: &Map<String, Value>) -> Result<()> {
        let mut doc = serde_json::to_value(&*self)?;
        let obj = doc
            .as_object_mut()
            .ok_or_else(|| Error::Parse("Settings root is not an object".into()))?;

        for (key, value) in incoming {
            obj.insert(key.clone(), value.clone());
        }

        let merged: AppData =
            serde_json::from_value(doc).map_err(|e| Error::Parse(e.to_string()))?;
        *self = merged;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
