//! fvs-server - face validity survey service
//!
//! Serves the survey page and stores each submission in the `faceValidity`
//! collection of the `Forms-data` database.

use anyhow::Result;
use clap::Parser;
use fvs_common::config::{
    default_config_file, CliOverrides, RootFolderInitializer, ServerSettings, TomlConfig,
};
use fvs_common::db::init_database;
use fvs_common::SurveyVariant;
use fvs_server::{build_router, AppState};
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "fvs-server", version, about = "Face validity survey service")]
struct Args {
    /// Folder holding the database
    #[arg(long, env = "FVS_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "FVS_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "FVS_PORT")]
    port: Option<u16>,

    /// Question set to serve (section-a, section-b, section-c)
    #[arg(long, env = "FVS_SURVEY")]
    survey: Option<SurveyVariant>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting face validity survey (fvs-server) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config_path = args.config.clone().or_else(default_config_file);
    let toml = TomlConfig::load_or_default(config_path.as_deref());

    let settings = ServerSettings::resolve(
        CliOverrides {
            root_folder: args.root_folder,
            host: args.host,
            port: args.port,
            survey: args.survey,
        },
        &toml,
    );

    let initializer = RootFolderInitializer::new(settings.root_folder.clone());
    initializer.ensure_directory_exists()?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());

    let pool = match init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let survey = settings.survey.config();
    info!(
        "Serving survey '{}' ({}, {} questions)",
        survey.title,
        settings.survey,
        survey.question_count()
    );

    let state = AppState::new(pool.clone(), survey);
    let app = build_router(state);

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("fvs-server listening on http://{}", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
