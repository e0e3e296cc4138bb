use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use tutoradmin_core::session::SessionStore;
use tutoradmin_infrastructure::{AdminPaths, ConfigService, FileKeyValueStore};
use tutoradmin_interaction::ApiClient;

mod commands;

use commands::{
    analytics::AnalyticsAction, auth::PasswordAction, mail::MailAction,
    payments::PaymentsAction, students::StudentsAction, tutors::TutorsAction,
};

#[derive(Parser)]
#[command(name = "tutoradmin")]
#[command(about = "tutoradmin - manage tutors, students and payouts from the terminal", long_about = None)]
struct Cli {
    /// Override the API base URL (e.g. https://admin.example.com/api)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding config.toml and session.json
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        remember_me: bool,
    },
    /// Log out on the server and clear the local session
    Logout,
    /// Print the locally stored admin
    Whoami,
    /// Ask the server whether the stored token is still valid
    Verify,
    /// Exchange a refresh token for a new session
    Refresh { refresh_token: String },
    /// Update the locally stored admin profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        profile_picture: Option<String>,
    },
    /// Password management
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },
    /// Student accounts
    Students {
        #[command(subcommand)]
        action: StudentsAction,
    },
    /// Tutor accounts
    Tutors {
        #[command(subcommand)]
        action: TutorsAction,
    },
    /// Payout requests and history
    Payments {
        #[command(subcommand)]
        action: PaymentsAction,
    },
    /// Outgoing email
    Mail {
        #[command(subcommand)]
        action: MailAction,
    },
    /// Dashboard figures and announcements
    Analytics {
        #[command(subcommand)]
        action: AnalyticsAction,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(cli: &Cli) -> Result<ApiClient> {
    let paths = AdminPaths::new(cli.config_dir.as_deref());

    let mut config = ConfigService::new(&paths)
        .context("Failed to locate configuration")?
        .load()
        .context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    tracing::debug!("[CLI] Using API at {}", config.api_base_url);

    let storage = FileKeyValueStore::open(&paths).context("Failed to open session storage")?;
    let session = Arc::new(SessionStore::new(Arc::new(storage)));

    ApiClient::from_config(&config, session).context("Failed to build HTTP client")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("[CLI] Interrupted, cancelling request");
            ctrl_c.cancel();
        }
    });

    let client = build_client(&cli)?.with_cancellation(cancel);

    match cli.command {
        Commands::Login {
            email,
            password,
            remember_me,
        } => commands::auth::login(&client, email, password, remember_me).await?,
        Commands::Logout => commands::auth::logout(&client).await?,
        Commands::Whoami => commands::auth::whoami(&client)?,
        Commands::Verify => commands::auth::verify(&client).await?,
        Commands::Refresh { refresh_token } => {
            commands::auth::refresh(&client, &refresh_token).await?
        }
        Commands::Profile {
            name,
            email,
            profile_picture,
        } => commands::auth::update_profile(&client, name, email, profile_picture)?,
        Commands::Password { action } => commands::auth::password(&client, action).await?,
        Commands::Students { action } => commands::students::run(&client, action).await?,
        Commands::Tutors { action } => commands::tutors::run(&client, action).await?,
        Commands::Payments { action } => commands::payments::run(&client, action).await?,
        Commands::Mail { action } => commands::mail::run(&client, action).await?,
        Commands::Analytics { action } => commands::analytics::run(&client, action).await?,
    }

    Ok(())
}
