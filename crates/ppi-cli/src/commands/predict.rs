use anyhow::Result;
use ppi_core::prediction::{PredictionRequest, ProteinRecord};

use crate::context::AppContext;
use crate::render;

pub async fn run(
    ctx: &AppContext,
    id1: String,
    seq1: String,
    id2: String,
    seq2: String,
    json: bool,
) -> Result<()> {
    let request = PredictionRequest::new(ProteinRecord::new(id1, seq1), ProteinRecord::new(id2, seq2));
    let result = ctx.prediction().predict(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let palette = ctx.palette().await;
    println!(
        "{}",
        palette.heading(&format!(
            "{} x {}",
            request.protein1.id, request.protein2.id
        ))
    );
    println!("{}", render::prediction_result(&result));
    Ok(())
}
