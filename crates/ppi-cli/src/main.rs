use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ppi_core::session::Theme;
use ppi_infrastructure::{ConfigService, PpiPaths};

mod commands;
mod context;
mod logging;
mod render;

use context::AppContext;

#[derive(Parser)]
#[command(name = "ppi")]
#[command(about = "PPI Predictor - protein-protein interaction prediction client", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the prediction API (overrides config.toml and PPI_API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<String>,

    /// Directory holding config, history and session files (overrides PPI_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    home: Option<PathBuf>,

    /// Log at debug level unless PPI_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the interaction of a single protein pair
    Predict {
        #[arg(long)]
        id1: String,
        #[arg(long)]
        seq1: String,
        #[arg(long)]
        id2: String,
        #[arg(long)]
        seq2: String,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Upload a FASTA file and a pairs file for batch prediction
    Batch {
        /// Sequences (.fasta or .fa)
        #[arg(long)]
        fasta: Option<PathBuf>,
        /// Pairs to score (.txt, .csv or .tsv)
        #[arg(long)]
        pairs: Option<PathBuf>,
        /// Save the full result; defaults to ppi_results.txt when given without a value
        #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "ppi_results.txt")]
        output: Option<PathBuf>,
    },
    /// Show or edit the local prediction history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Account management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Show or change the colour theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Show login state, theme and API endpoint
    Status,
    /// Manage config.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List entries, newest first
    List,
    /// Delete one entry by id
    Delete { id: String },
    /// Delete every entry
    Clear,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Create an account
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Log in and store the access token
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored access token
    Logout,
    /// Request a one-time reset code by email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Set a new password using the emailed code
    ResetPassword {
        #[arg(long)]
        email: String,
        #[arg(long)]
        otp_code: String,
        #[arg(long)]
        new_password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Change the password of the logged-in account
    ChangePassword {
        #[arg(long)]
        old_password: Option<String>,
        #[arg(long)]
        new_password: Option<String>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    Show,
    Toggle,
    /// Set the theme explicitly (light or dark)
    Set { theme: Theme },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config.toml if none exists
    Init,
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Commands::Config { action } = cli.command {
        let paths = PpiPaths::new(cli.home.as_deref())?;
        let service = ConfigService::new(&paths);
        return match action {
            ConfigAction::Init => commands::config::init(&service),
            ConfigAction::Show => commands::config::show(&service, cli.api_base),
        };
    }

    let ctx = AppContext::load(cli.home.as_deref(), cli.api_base).await?;

    match cli.command {
        Commands::Predict {
            id1,
            seq1,
            id2,
            seq2,
            json,
        } => commands::predict::run(&ctx, id1, seq1, id2, seq2, json).await?,
        Commands::Batch {
            fasta,
            pairs,
            output,
        } => {
            commands::batch::run(&ctx, fasta.as_deref(), pairs.as_deref(), output.as_deref())
                .await?
        }
        Commands::History { action } => match action.unwrap_or(HistoryAction::List) {
            HistoryAction::List => commands::history::list(&ctx).await?,
            HistoryAction::Delete { id } => commands::history::delete(&ctx, &id).await?,
            HistoryAction::Clear => commands::history::clear(&ctx).await?,
        },
        Commands::Auth { action } => match action {
            AuthAction::Register {
                full_name,
                email,
                password,
                confirm_password,
            } => commands::auth::register(&ctx, &full_name, &email, password, confirm_password)
                .await?,
            AuthAction::Login { email, password } => {
                commands::auth::login(&ctx, &email, password).await?
            }
            AuthAction::Logout => commands::auth::logout(&ctx).await?,
            AuthAction::ForgotPassword { email } => {
                commands::auth::forgot_password(&ctx, &email).await?
            }
            AuthAction::ResetPassword {
                email,
                otp_code,
                new_password,
                confirm_password,
            } => {
                commands::auth::reset_password(
                    &ctx,
                    &email,
                    &otp_code,
                    new_password,
                    confirm_password,
                )
                .await?
            }
            AuthAction::ChangePassword {
                old_password,
                new_password,
            } => commands::auth::change_password(&ctx, old_password, new_password).await?,
        },
        Commands::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => commands::theme::show(&ctx).await,
            ThemeAction::Toggle => commands::theme::toggle(&ctx).await?,
            ThemeAction::Set { theme } => commands::theme::set(&ctx, theme).await?,
        },
        Commands::Status => commands::status::run(&ctx).await,
        // Dispatched before the context is loaded.
        Commands::Config { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_predict_with_global_flags() {
        let cli = Cli::try_parse_from([
            "ppi", "predict", "--id1", "P1", "--seq1", "MKL", "--id2", "P2", "--seq2", "MKA",
            "--api-base", "http://api:9000", "-v",
        ])
        .unwrap();

        assert_eq!(cli.api_base.as_deref(), Some("http://api:9000"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Predict { ref id2, .. } if id2 == "P2"));
    }

    #[test]
    fn batch_output_defaults_file_name() {
        let cli = Cli::try_parse_from([
            "ppi", "batch", "--fasta", "a.fasta", "--pairs", "p.csv", "--output",
        ])
        .unwrap();

        let Commands::Batch { output, .. } = cli.command else {
            panic!("expected batch command");
        };
        assert_eq!(output, Some(PathBuf::from("ppi_results.txt")));
    }

    #[test]
    fn theme_set_parses_case_insensitively() {
        let cli = Cli::try_parse_from(["ppi", "theme", "set", "Dark"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeAction::Set { theme: Theme::Dark })
            }
        ));

        assert!(Cli::try_parse_from(["ppi", "theme", "set", "neon"]).is_err());
    }

    #[test]
    fn config_show_keeps_api_base_flag() {
        let cli = Cli::try_parse_from(["ppi", "config", "show", "--api-base", "http://x"]).unwrap();
        assert_eq!(cli.api_base.as_deref(), Some("http://x"));
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Show
            }
        ));
    }

    #[test]
    fn history_defaults_to_list() {
        let cli = Cli::try_parse_from(["ppi", "history"]).unwrap();
        assert!(matches!(cli.command, Commands::History { action: None }));
    }
}
