use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single timestamped overlay record as delivered by the content agent.
///
/// Wire field names (`type`, `timeStart`) are part of the cross-context
/// contract and are honored verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "timeStart", default, skip_serializing_if = "Option::is_none")]
    pub time_start: Option<f64>,
}

/// Parses a JSON array of annotation records.
pub fn parse_annotation_list(json: &str) -> Result<Vec<AnnotationRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// One row of the popup's annotation table.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRowView {
    /// Display style; falls back to the record type, then to `"???"`.
    pub style: String,
    /// Annotation text; renderers substitute a "No text" placeholder.
    pub text: Option<String>,
    /// Seek target for the row's time cell.
    pub start_seconds: f64,
    /// `MM:SS` label for the time cell.
    pub start_label: String,
}

/// Builds display rows: records without a start time are dropped and the
/// remainder is sorted ascending by start time, stable for ties.
pub fn annotation_rows(records: &[AnnotationRecord]) -> Vec<AnnotationRowView> {
    let mut displayable: Vec<&AnnotationRecord> = records
        .iter()
        .filter(|record| record.time_start.is_some())
        .collect();
    displayable.sort_by(|a, b| {
        a.time_start
            .partial_cmp(&b.time_start)
            .unwrap_or(Ordering::Equal)
    });
    displayable
        .into_iter()
        .map(|record| {
            let kind = record.kind.as_deref().unwrap_or("???");
            let style = record.style.as_deref().unwrap_or(kind).to_owned();
            let start_seconds = record.time_start.unwrap_or_default();
            AnnotationRowView {
                style,
                text: record.text.clone(),
                start_seconds,
                start_label: format_seconds(start_seconds),
            }
        })
        .collect()
}

/// Formats a playback position as `MM:SS`, truncating fractional seconds.
pub fn format_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
