use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet_client::api::{Envelope, LoginRequest, TransactionFilter};
use wallet_client::{ApiClient, Config, Router, TracingNotifier, endpoints};

#[derive(Parser)]
#[command(name = "wallet-client", about = "Command-line client for the wallet API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in with an email address or phone number
    Login {
        identifier: String,
        #[arg(env = "WALLET_PASSWORD")]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in user's profile
    Profile,
    /// Show the dashboard overview
    Overview,
    /// List transactions
    Transactions {
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Check whether a view may be opened with the stored session
    Navigate { path: String },
}

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Defaults when RUST_LOG is not set
        tracing_subscriber::EnvFilter::new("info,wallet_client=debug,reqwest=warn,hyper_util=warn")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_envelope(envelope: &Envelope) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let session = config
        .open_session()
        .context("Failed to open the session store")?;
    let router = Arc::new(Router::wallet(session.clone()));
    let client = ApiClient::new(&config, session, Arc::new(TracingNotifier), router.clone())?;

    match cli.command {
        Command::Login {
            identifier,
            password,
        } => {
            let login =
                endpoints::auth::login(&client, &LoginRequest { identifier, password }).await?;
            println!("{}", serde_json::to_string_pretty(&login.user)?);
        }
        Command::Logout => print_envelope(&endpoints::auth::logout(&client).await?)?,
        Command::Profile => print_envelope(&endpoints::user::profile(&client).await?)?,
        Command::Overview => print_envelope(&endpoints::dashboard::overview(&client).await?)?,
        Command::Transactions { status, kind } => {
            let filter = TransactionFilter {
                kind,
                status,
                ..TransactionFilter::default()
            };
            print_envelope(&endpoints::transactions::list(&client, &filter).await?)?;
        }
        Command::Navigate { path } => {
            let navigation = router.push(&path)?;
            println!("{}", navigation.location());
        }
    }

    if let Some(location) = router.current() {
        tracing::info!(location, "Current view");
    }

    Ok(())
}
