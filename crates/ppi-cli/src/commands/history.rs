use anyhow::Result;

use crate::context::AppContext;
use crate::render;

pub async fn list(ctx: &AppContext) -> Result<()> {
    let entries = ctx.history().list().await?;
    println!("{}", render::history(&entries));
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: &str) -> Result<()> {
    let history = ctx.history();
    let before = history.list().await?.len();
    let remaining = history.delete(id).await?;

    let palette = ctx.palette().await;
    if remaining.len() == before {
        println!("{}", palette.muted(&format!("No history entry with id {}", id)));
    } else {
        println!("{}", palette.success("Entry deleted"));
    }
    println!("{}", render::history(&remaining));
    Ok(())
}

pub async fn clear(ctx: &AppContext) -> Result<()> {
    ctx.history().clear().await?;
    println!("{}", ctx.palette().await.success("History cleared"));
    Ok(())
}
