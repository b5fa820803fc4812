//! `PredictionService` over HTTP.

use async_trait::async_trait;
use ppi_core::batch::{BatchPredictionResult, BatchUpload, UploadFile};
use ppi_core::error::Result;
use ppi_core::prediction::{PredictPayload, PredictionRequest, PredictionResult, PredictionService};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};

use crate::batch_response::{is_json_content_type, metadata_from_headers};
use crate::client::{PpiApiClient, endpoints, ensure_success, map_reqwest_error};

const PREDICT_CONTEXT: &str = "Predict";
const BATCH_CONTEXT: &str = "Batch predict";

fn file_part(file: &UploadFile) -> Part {
    Part::bytes(file.bytes.clone()).file_name(file.file_name.clone())
}

#[async_trait]
impl PredictionService for PpiApiClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let url = self.url(endpoints::PREDICT);
        let payload = PredictPayload::build(request, self.config.payload_style);
        tracing::debug!(
            %url,
            id1 = %request.protein1.id,
            id2 = %request.protein2.id,
            style = %self.config.payload_style,
            "Sending prediction request"
        );

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| map_reqwest_error(PREDICT_CONTEXT, e))?;

        ensure_success(PREDICT_CONTEXT, response.status())?;

        response
            .json::<PredictionResult>()
            .await
            .map_err(|e| map_reqwest_error(PREDICT_CONTEXT, e))
    }

    async fn predict_batch(&self, upload: &BatchUpload) -> Result<BatchPredictionResult> {
        let url = self.url(endpoints::PREDICT_BATCH);
        tracing::debug!(
            %url,
            fasta = %upload.fasta.file_name,
            pairs = %upload.pairs.file_name,
            "Uploading batch prediction files"
        );

        let form = Form::new()
            .part("fasta_file", file_part(&upload.fasta))
            .part("pairs_file", file_part(&upload.pairs));

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| map_reqwest_error(BATCH_CONTEXT, e))?;

        ensure_success(BATCH_CONTEXT, response.status())?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if is_json_content_type(content_type.as_deref()) {
            let results = response
                .json::<Vec<PredictionResult>>()
                .await
                .map_err(|e| map_reqwest_error(BATCH_CONTEXT, e))?;
            tracing::debug!(count = results.len(), "Batch returned JSON results");
            return Ok(BatchPredictionResult::Json(results));
        }

        let metadata = metadata_from_headers(response.headers());
        let text = response
            .text()
            .await
            .map_err(|e| map_reqwest_error(BATCH_CONTEXT, e))?;
        tracing::debug!(bytes = text.len(), "Batch returned text results");
        Ok(BatchPredictionResult::Text { text, metadata })
    }
}
