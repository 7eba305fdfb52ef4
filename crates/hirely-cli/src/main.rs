use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::context::AppContext;

#[derive(Parser)]
#[command(name = "hirely")]
#[command(about = "Hirely CLI - manage your job-seeker profile", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the profile overview and usage stats
    Show {
        /// Print the full view state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set one profile field and save
    Set {
        /// Field name, e.g. job_title or show_salary
        field: String,
        /// New value; flags take true/false
        value: String,
    },
    /// Upload a resume (PDF, DOC or DOCX, up to 5MB)
    UploadResume { path: PathBuf },
    /// Email a password reset link to the signed-in user
    ResetPassword,
    /// Create the resume storage bucket if it does not exist
    EnsureBucket,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hirely=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let context = AppContext::load(cli.config.as_deref())?;
    tracing::debug!("[hirely] Using backend {}", context.client.base_url());

    match cli.command {
        Commands::Show { json } => commands::profile::show(&context, json).await?,
        Commands::Set { field, value } => commands::profile::set(&context, &field, value).await?,
        Commands::UploadResume { path } => commands::profile::upload_resume(&context, &path).await?,
        Commands::ResetPassword => commands::profile::reset_password(&context).await?,
        Commands::EnsureBucket => commands::bucket::ensure(&context).await?,
    }

    Ok(())
}
