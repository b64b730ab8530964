//! Field-to-column mapping for the tabular artifact.
//!
//! The layout is data: an ordered table of [`Column`] entries, each naming
//! the source field, the header label and the fallback used when the field
//! is absent or null.

use recovery_store_client::Row;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub source: &'static str,
    pub label: &'static str,
    /// Explicit default. `None` means a missing field renders as an empty cell.
    pub default: Option<&'static str>,
    /// Replace embedded newlines with a single space.
    pub single_line: bool,
}

const fn col(source: &'static str, label: &'static str) -> Column {
    Column {
        source,
        label,
        default: None,
        single_line: false,
    }
}

pub static COLUMNS: [Column; 15] = [
    col("date", "Date"),
    col("m_ready", "MorpheusReady"),
    col("m_hrv", "MorpheusHRV"),
    col("oura_rec", "OuraRecovery"),
    col("whoop_rec", "WhoopRecovery"),
    col("whoop_rhr", "WhoopRHR"),
    col("oura_rhr", "OuraRHR"),
    col("oura_hrv", "OuraHRV"),
    col("whoop_hrv", "WhoopHRV"),
    Column {
        default: Some(""),
        ..col("oura_hrv_status", "OuraHRVStatus")
    },
    col("steps", "Steps"),
    col("fatigue", "Fatigue"),
    col("resistance", "Resistance"),
    col("joint", "JointWarn"),
    Column {
        default: Some(""),
        single_line: true,
        ..col("notes", "Notes")
    },
];

pub fn headers() -> impl Iterator<Item = &'static str> {
    COLUMNS.iter().map(|c| c.label)
}

impl Column {
    /// Render this column's cell for `row`.
    pub fn cell(&self, row: &Row) -> String {
        let text = row
            .get(self.source)
            .and_then(render_value)
            .or_else(|| self.default.map(str::to_string))
            .unwrap_or_default();
        if self.single_line {
            flatten_newlines(&text)
        } else {
            text
        }
    }
}

/// Cells for one row, in header order.
pub fn record(row: &Row) -> Vec<String> {
    COLUMNS.iter().map(|c| c.cell(row)).collect()
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn flatten_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
