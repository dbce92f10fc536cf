/// CoinsExtra API - read-only JSON endpoints for accounts and users
use clap::{Parser, Subcommand};
use coinsextra_api::{cli, config::ApiConfig, create_router};
use coinsextra_core::{queries, Statement};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coinsextra-api")]
#[command(about = "CoinsExtra read-only accounts API", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "COINSEXTRA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print accounts as JSON
    Accounts {
        /// Only accounts owned by this user
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Print users as JSON
    Users,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinsextra_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();

    let config = ApiConfig::load(args.config.as_deref())?;
    config.validate()?;

    match args.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::Accounts { user } => {
            print_rows(&config, &cli::accounts_statement(user)).await?;
        }
        Commands::Users => {
            print_rows(&config, &queries::all_users()).await?;
        }
    }

    Ok(())
}

async fn serve(config: &ApiConfig) -> anyhow::Result<()> {
    tracing::info!("Starting CoinsExtra API");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let env = cli::open_env(config).await?;
    let app = create_router(env);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn print_rows(config: &ApiConfig, statement: &Statement) -> anyhow::Result<()> {
    let env = cli::open_env(config).await?;
    println!("{}", cli::render_rows(&env, statement).await?);
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
