//! Prediction request/result models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::validation::Validator;

/// One protein of the pair: identifier plus amino-acid sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub id: String,
    pub sequence: String,
}

impl ProteinRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// A request to score one protein pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub protein1: ProteinRecord,
    pub protein2: ProteinRecord,
}

impl PredictionRequest {
    pub fn new(protein1: ProteinRecord, protein2: ProteinRecord) -> Self {
        Self { protein1, protein2 }
    }

    /// Every field must be non-empty; all missing fields are reported at once.
    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .require("id1", &self.protein1.id)
            .require("seq1", &self.protein1.sequence)
            .require("id2", &self.protein2.id)
            .require("seq2", &self.protein2.sequence)
            .finish()
    }
}

/// Result returned by the prediction endpoint.
///
/// Decoded as-is: the score is expected in `0.0..=1.0` but is not checked,
/// and a field of the wrong type decodes to its default instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(
        default,
        alias = "metadata",
        deserialize_with = "lenient_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub meta: Option<Map<String, Value>>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold: Option<f64>,
    /// ISO-8601 timestamp as sent by the server.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    Ok(lenient_opt_f64(deserializer)?.unwrap_or_default())
}

fn lenient_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<f64>, D::Error> {
    Ok(value_as_f64(&Value::deserialize(deserializer)?))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(value_as_string(&Value::deserialize(deserializer)?))
}

fn lenient_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Map<String, Value>>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Ok(None),
    }
}

impl PredictionResult {
    pub fn new(score: f64, label: impl Into<String>) -> Self {
        Self {
            score,
            label: label.into(),
            meta: None,
            model: None,
            threshold: None,
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_request() {
        let request = PredictionRequest::new(
            ProteinRecord::new("P1", "MKLLV"),
            ProteinRecord::new("P2", "MKAAV"),
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_sequence() {
        let request = PredictionRequest::new(
            ProteinRecord::new("P1", "MKLLV"),
            ProteinRecord::new("P2", "   "),
        );
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("seq2 is required"));
    }

    #[test]
    fn result_decodes_minimal_body() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"score":0.91,"label":"interaction"}"#).unwrap();
        assert_eq!(result, PredictionResult::new(0.91, "interaction"));
    }

    #[test]
    fn result_decodes_optional_fields() {
        let body = r#"{
            "score": 0.12,
            "label": "no_interaction",
            "meta": {"latency_ms": 42, "features": [1, 2]},
            "model": "ppi-transformer-v2",
            "threshold": 0.5,
            "timestamp": "2024-05-01T10:00:00Z"
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.model.as_deref(), Some("ppi-transformer-v2"));
        assert_eq!(result.threshold, Some(0.5));
        let meta = result.meta.unwrap();
        assert_eq!(meta["latency_ms"], 42);
    }

    #[test]
    fn result_tolerates_malformed_fields() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"score":null,"label":"interaction"}"#).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, "interaction");

        let body = r#"{
            "score": "0.9",
            "label": null,
            "meta": "n/a",
            "model": 7,
            "threshold": {"value": 0.5},
            "timestamp": false
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.score, 0.9);
        assert_eq!(result.label, "");
        assert_eq!(result.meta, None);
        assert_eq!(result.model.as_deref(), Some("7"));
        assert_eq!(result.threshold, None);
        assert_eq!(result.timestamp.as_deref(), Some("false"));
    }
}
