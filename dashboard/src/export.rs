//! Export serializer: turns an [`ExportPayload`] into downloadable bytes.
//!
//! Output is fully determined by the payload - no hidden state, byte-for-byte
//! reproducible given an identical timestamp. The browser-side crate feeds
//! the result straight into a Blob download.

use crate::types::{ExportError, ExportFormat, ExportPayload, KpiRecord};

/// Fixed CSV header row. Column names are kept in Spanish to stay
/// wire-compatible with files produced by the original dashboard.
pub const CSV_HEADER: &str = "KPI,Valor,Variación";

/// Filename stem for generated downloads.
pub const FILENAME_STEM: &str = "cashflow-dashboard";

/// A serialized export ready to be materialized as a file download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializedExport {
    /// File body.
    pub body: String,
    /// MIME type to declare on the download.
    pub content_type: &'static str,
    /// File extension matching the format.
    pub extension: &'static str,
}

/// Serialize `payload` into the format it requests.
///
/// - [`ExportFormat::Json`]: pretty-printed JSON (2-space indent) of the
///   full payload structure.
/// - [`ExportFormat::Csv`]: [`CSV_HEADER`] followed by one row per record in
///   sequence order, every field double-quoted.
///
/// Known limitation: CSV fields are quoted unconditionally but embedded `"`
/// characters are NOT escaped. The dashboard displays simple server-rendered
/// text, so quotes in labels or values are not expected; a record containing
/// one would produce a malformed row.
pub fn serialize(payload: &ExportPayload) -> Result<SerializedExport, ExportError> {
    let body = match payload.format {
        ExportFormat::Json => serde_json::to_string_pretty(payload)?,
        ExportFormat::Csv => to_csv(&payload.kpis),
    };
    Ok(SerializedExport {
        body,
        content_type: payload.format.content_type(),
        extension: payload.format.extension(),
    })
}

/// Download filename: `cashflow-dashboard-<unix-epoch-millis>.<ext>`.
pub fn export_filename(format: ExportFormat, epoch_millis: u64) -> String {
    format!("{FILENAME_STEM}-{epoch_millis}.{ext}", ext = format.extension())
}

fn to_csv(kpis: &[KpiRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + kpis.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for kpi in kpis {
        out.push_str(&format!(
            "\"{}\",\"{}\",\"{}\"\n",
            kpi.label, kpi.value, kpi.variation
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_kpis() -> Vec<KpiRecord> {
        vec![
            KpiRecord {
                label: "Revenue".into(),
                value: "$10,000.00".into(),
                variation: "+5%".into(),
            },
            KpiRecord {
                label: "Expenses".into(),
                value: "$8,000.00".into(),
                variation: "-2%".into(),
            },
        ]
    }

    fn payload(format: ExportFormat) -> ExportPayload {
        ExportPayload {
            timestamp: "2025-06-01T12:00:00.000Z".into(),
            kpis: sample_kpis(),
            format,
        }
    }

    #[test]
    fn csv_matches_the_expected_document() {
        let out = serialize(&payload(ExportFormat::Csv)).unwrap();
        assert_eq!(
            out.body,
            "KPI,Valor,Variación\n\
             \"Revenue\",\"$10,000.00\",\"+5%\"\n\
             \"Expenses\",\"$8,000.00\",\"-2%\"\n"
        );
        assert_eq!(out.content_type, "text/csv");
        assert_eq!(out.extension, "csv");
    }

    #[test]
    fn csv_has_one_line_per_record_plus_header() {
        // Comma-free values so field splitting is unambiguous; grouped
        // values embed commas inside their quotes.
        let kpis: Vec<KpiRecord> = (1..=4)
            .map(|i| KpiRecord {
                label: format!("Metric {i}"),
                value: format!("{i}00"),
                variation: format!("+{i}%"),
            })
            .collect();
        let payload = ExportPayload {
            timestamp: "2025-06-01T12:00:00.000Z".into(),
            kpis: kpis.clone(),
            format: ExportFormat::Csv,
        };

        let out = serialize(&payload).unwrap();
        let lines: Vec<&str> = out.body.lines().collect();
        assert_eq!(lines.len(), kpis.len() + 1);
        for line in &lines[1..] {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 3);
            for field in fields {
                assert!(field.starts_with('"') && field.ends_with('"'), "{field}");
            }
        }
    }

    #[test]
    fn empty_extraction_yields_a_header_only_csv() {
        let payload = ExportPayload {
            timestamp: "2025-06-01T12:00:00.000Z".into(),
            kpis: vec![],
            format: ExportFormat::Csv,
        };
        let out = serialize(&payload).unwrap();
        assert_eq!(out.body, "KPI,Valor,Variación\n");
    }

    #[test]
    fn json_round_trips_the_kpi_sequence() {
        let original = payload(ExportFormat::Json);
        let out = serialize(&original).unwrap();
        assert_eq!(out.content_type, "application/json");

        let parsed: ExportPayload = serde_json::from_str(&out.body).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.kpis, sample_kpis());
    }

    #[test]
    fn json_is_pretty_printed_with_two_space_indent() {
        let out = serialize(&payload(ExportFormat::Json)).unwrap();
        assert!(out.body.starts_with("{\n  \"timestamp\""));
        assert!(out.body.contains("\n  \"kpis\": [\n    {\n      \"label\": \"Revenue\""));
        assert!(out.body.contains("\"format\": \"json\""));
    }

    #[test]
    fn serialization_is_reproducible() {
        let a = serialize(&payload(ExportFormat::Json)).unwrap();
        let b = serialize(&payload(ExportFormat::Json)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn filename_carries_stem_epoch_and_extension() {
        assert_eq!(
            export_filename(ExportFormat::Json, 1_700_000_000_123),
            "cashflow-dashboard-1700000000123.json"
        );
        assert_eq!(
            export_filename(ExportFormat::Csv, 42),
            "cashflow-dashboard-42.csv"
        );
    }
}
