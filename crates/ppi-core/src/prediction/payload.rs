//! Wire body variants for `POST /api/predict`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::model::{PredictionRequest, ProteinRecord};

/// Which JSON shape to send to the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PayloadStyle {
    /// `{id1, seq1, id2, seq2}`
    #[default]
    Flat,
    /// `{protein1: {id, sequence}, protein2: {id, sequence}}`
    Nested,
}

/// Serialized body of a single prediction call.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PredictPayload<'a> {
    Flat {
        id1: &'a str,
        seq1: &'a str,
        id2: &'a str,
        seq2: &'a str,
    },
    Nested {
        protein1: &'a ProteinRecord,
        protein2: &'a ProteinRecord,
    },
}

impl<'a> PredictPayload<'a> {
    pub fn build(request: &'a PredictionRequest, style: PayloadStyle) -> Self {
        match style {
            PayloadStyle::Flat => Self::Flat {
                id1: &request.protein1.id,
                seq1: &request.protein1.sequence,
                id2: &request.protein2.id,
                seq2: &request.protein2.sequence,
            },
            PayloadStyle::Nested => Self::Nested {
                protein1: &request.protein1,
                protein2: &request.protein2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> PredictionRequest {
        PredictionRequest::new(
            ProteinRecord::new("P1", "MKL"),
            ProteinRecord::new("P2", "MKA"),
        )
    }

    #[test]
    fn flat_payload_shape() {
        let request = request();
        let body = serde_json::to_value(PredictPayload::build(&request, PayloadStyle::Flat)).unwrap();
        assert_eq!(
            body,
            json!({"id1": "P1", "seq1": "MKL", "id2": "P2", "seq2": "MKA"})
        );
    }

    #[test]
    fn nested_payload_shape() {
        let request = request();
        let body =
            serde_json::to_value(PredictPayload::build(&request, PayloadStyle::Nested)).unwrap();
        assert_eq!(
            body,
            json!({
                "protein1": {"id": "P1", "sequence": "MKL"},
                "protein2": {"id": "P2", "sequence": "MKA"}
            })
        );
    }

    #[test]
    fn payload_style_parses_from_str() {
        assert_eq!("nested".parse::<PayloadStyle>().unwrap(), PayloadStyle::Nested);
        assert_eq!(PayloadStyle::Flat.to_string(), "flat");
    }
}
