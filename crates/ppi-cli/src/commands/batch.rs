use std::path::Path;

use anyhow::{Context, Result};
use ppi_core::batch::BatchPredictionResult;

use crate::context::AppContext;
use crate::render;

pub async fn run(
    ctx: &AppContext,
    fasta: Option<&Path>,
    pairs: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let outcome = ctx.prediction().predict_batch_files(fasta, pairs).await?;
    let palette = ctx.palette().await;

    match &outcome.result {
        BatchPredictionResult::Json(results) => {
            println!("{}", palette.heading("Results"));
            println!("{}", render::batch_json_results(results));
        }
        BatchPredictionResult::Text { metadata, .. } => {
            if let Some(summary) = render::batch_metadata(metadata) {
                println!("{}", palette.heading("Summary"));
                println!("{}", summary);
                println!();
            }
            println!("{}", palette.heading("Preview"));
            println!("{}", render::batch_rows(&outcome.rows));
        }
    }

    if let Some(path) = output {
        let content = match &outcome.result {
            BatchPredictionResult::Json(results) => serde_json::to_string_pretty(results)?,
            BatchPredictionResult::Text { text, .. } => text.clone(),
        };
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "{}",
            palette.success(&format!("Saved results to {}", path.display()))
        );
    }
    Ok(())
}
