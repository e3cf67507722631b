use anyhow::Result;
use clap::{Parser, Subcommand};
use marquee_core::MarqueeError;
use marquee_application::SignInError;
use marquee_infrastructure::ConfigService;
use marquee_infrastructure::paths::{MarqueePaths, ServiceType};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

use commands::bootstrap::AppContext;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Marquee - browse the movie catalog and manage your account", long_about = None)]
struct Cli {
    /// Use DIR instead of the platform config directory
    #[arg(long, value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies from the catalog
    Movies {
        /// Only titles containing this text
        #[arg(long)]
        search: Option<String>,
        /// Only movies with a genre containing this text
        #[arg(long, conflicts_with_all = ["top", "saved"])]
        genre: Option<String>,
        /// The N highest rated movies
        #[arg(long, value_name = "N", conflicts_with = "saved")]
        top: Option<usize>,
        /// Only saved movies
        #[arg(long)]
        saved: bool,
    },
    /// Show top picks and the featured genre rails
    Browse {
        #[arg(long)]
        search: Option<String>,
    },
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Save a movie, or remove it if already saved
    Save {
        movie_id: String,
    },
    /// Edit the signed-in profile; omitted fields keep their current value
    Profile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Change the signed-in user's password
    Password {
        new_password: String,
    },
}

fn init_tracing(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "marquee.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}

/// Text printed for a failed command.
fn user_message(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<MarqueeError>() {
        return e.user_message();
    }
    if let Some(e) = err.downcast_ref::<SignInError>() {
        return e.to_string();
    }
    err.to_string()
}

async fn run(cli: Cli) -> Result<()> {
    let paths = MarqueePaths::new(cli.config_dir.as_deref());
    let config = ConfigService::new(&paths)?.load()?;

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    let _guard = init_tracing(&paths.get_path(ServiceType::Logs)?, default_level)?;

    let app = AppContext::bootstrap(&paths, &config).await?;

    match cli.command {
        Commands::Movies {
            search,
            genre,
            top,
            saved,
        } => commands::catalog::movies(&app, search, genre, top, saved).await,
        Commands::Browse { search } => commands::catalog::browse(&app, search).await,
        Commands::Login { email, password } => {
            commands::account::login(&app, &email, &password).await
        }
        Commands::Logout => commands::account::logout(&app).await,
        Commands::Whoami => commands::account::whoami(&app).await,
        Commands::Save { movie_id } => commands::catalog::toggle_save(&app, &movie_id).await,
        Commands::Profile {
            first_name,
            last_name,
            image_url,
        } => commands::account::profile(&app, first_name, last_name, image_url).await,
        Commands::Password { new_password } => {
            commands::account::password(&app, &new_password).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Command failed: {:?}", err);
            eprintln!("Error: {}", user_message(&err));
            ExitCode::FAILURE
        }
    }
}
