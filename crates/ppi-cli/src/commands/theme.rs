use anyhow::Result;
use ppi_core::session::{SessionRepository, Theme};

use crate::context::AppContext;

pub async fn show(ctx: &AppContext) {
    println!("{}", ctx.session.get_theme().await);
}

pub async fn toggle(ctx: &AppContext) -> Result<()> {
    let theme = ctx.session.toggle_theme().await?;
    println!("Theme set to {}", theme);
    Ok(())
}

pub async fn set(ctx: &AppContext, theme: Theme) -> Result<()> {
    ctx.session.set_theme(theme).await?;
    println!("Theme set to {}", theme);
    Ok(())
}
