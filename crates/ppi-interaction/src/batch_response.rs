//! Interpretation of `POST /api/predict/batch` responses.

use ppi_core::batch::BatchMetadata;
use reqwest::header::HeaderMap;
use std::str::FromStr;

const HEADER_MODEL: &str = "x-model";
const HEADER_THRESHOLD: &str = "x-threshold";
const HEADER_TIMESTAMP: &str = "x-timestamp";
const HEADER_TOTAL_PAIRS: &str = "x-total-pairs";
const HEADER_SUCCESSFUL: &str = "x-successful-predictions";
const HEADER_FAILED: &str = "x-failed-predictions";

/// Whether a `Content-Type` value denotes a JSON body.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Reads the six optional summary headers of a text batch response.
///
/// Absent headers, and numeric headers that do not parse, are `None`.
pub fn metadata_from_headers(headers: &HeaderMap) -> BatchMetadata {
    BatchMetadata {
        model: header_str(headers, HEADER_MODEL),
        threshold: header_parse(headers, HEADER_THRESHOLD),
        timestamp: header_str(headers, HEADER_TIMESTAMP),
        total_pairs: header_parse(headers, HEADER_TOTAL_PAIRS),
        successful_predictions: header_parse(headers, HEADER_SUCCESSFUL),
        failed_predictions: header_parse(headers, HEADER_FAILED),
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn header_parse<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    header_str(headers, name).and_then(|value| value.parse().ok())
}
