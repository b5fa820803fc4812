use ppi_core::session::SessionRepository;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext) {
    let session = ctx.auth().session().await;
    let palette = ctx.palette().await;

    match (session.is_authenticated(), &session.user) {
        (true, Some(user)) if !user.full_name.is_empty() => println!(
            "{} as {} <{}>",
            palette.success("Logged in"),
            user.full_name,
            user.email
        ),
        (true, Some(user)) => println!("{} as {}", palette.success("Logged in"), user.email),
        (true, None) => println!("{}", palette.success("Logged in")),
        (false, _) => println!("{}", palette.muted("Not logged in")),
    }
    println!("Theme: {}", ctx.session.get_theme().await);
    println!("API:   {}", ctx.config.api.base_url);
    println!("Home:  {}", ctx.paths.root().display());
}
