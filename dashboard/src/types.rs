//! Data types for the KPI dashboard and its export pipeline.
//!
//! These types define the data model shared by the SSR renderer and the
//! browser-side enrichment crate. They're designed to be:
//!
//! - **Serializable** - the JSON export is a straight serde dump
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - a card without a variation is just `variation: ""`
//!
//! # Example
//!
//! ```rust
//! use dashboard_leptos::types::{ExportFormat, ExportPayload, KpiRecord};
//!
//! let payload = ExportPayload {
//!     timestamp: "2025-06-01T12:00:00.000Z".into(),
//!     kpis: vec![KpiRecord {
//!         label: "Revenue".into(),
//!         value: "$10,000.00".into(),
//!         variation: "+5%".into(),
//!     }],
//!     format: ExportFormat::Json,
//! };
//! assert_eq!(payload.kpis[0].label, "Revenue");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One KPI card's currently displayed state.
///
/// All three fields carry rendered *text*, not numbers: values arrive
/// pre-computed from the server and may already include a currency symbol
/// and grouping. An extraction is a snapshot of what is on screen, not a
/// live binding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiRecord {
    /// Display name of the metric. Stable per card across its lifetime.
    pub label: String,
    /// Displayed value text (e.g. `"$10,000.00"`).
    pub value: String,
    /// Displayed change indicator, optionally with a leading sign and a
    /// `%` suffix. Empty when the card has no variation element.
    #[serde(default)]
    pub variation: String,
}

/// Requested serialization for an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON, `application/json`.
    Json,
    /// Quoted CSV with a fixed Spanish header, `text/csv`.
    Csv,
}

impl ExportFormat {
    /// File extension for the generated download.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// MIME type declared on the download payload.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Parses `"json"` / `"csv"` (case-insensitive, surrounding whitespace
    /// ignored). Anything else is rejected with
    /// [`ExportError::UnsupportedFormat`] - the original dashboard silently
    /// did nothing for unknown formats, which hid caller bugs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// The exportable representation of a KPI set at a point in time.
///
/// Constructed fresh on every export call, handed to the serializer, then
/// discarded once the download is triggered. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    /// ISO-8601 instant of export invocation.
    pub timestamp: String,
    /// Records in DOM order at extraction time.
    pub kpis: Vec<KpiRecord>,
    /// Requested serialization.
    pub format: ExportFormat,
}

/// Errors from the export pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The caller asked for a format the serializer doesn't speak.
    #[error("unsupported export format: {0:?} (expected \"json\" or \"csv\")")]
    UnsupportedFormat(String),
    /// JSON serialization failed.
    #[error("failed to serialize export payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_parses_known_names() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    }

    #[test]
    fn format_rejects_unknown_names() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(ref f) if f == "xml"));
    }

    #[test]
    fn format_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ExportFormat::Json).unwrap(), "\"json\"");
        assert_eq!(serde_json::to_string(&ExportFormat::Csv).unwrap(), "\"csv\"");
    }

    #[test]
    fn record_variation_defaults_to_empty() {
        let record: KpiRecord =
            serde_json::from_str(r#"{"label":"Revenue","value":"100"}"#).unwrap();
        assert_eq!(record.variation, "");
    }
}
