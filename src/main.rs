mod app;
mod modules;
mod types;
mod utils;

use crate::{
    app::App,
    types::{AppEnvironment, Config, Context, ToContext},
    utils::logfile::LogFile,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(environment: &AppEnvironment, log_file: Option<Arc<LogFile>>) {
    let stdout = match environment {
        AppEnvironment::Production => fmt::layer().json().boxed(),
        AppEnvironment::Development => fmt::layer().boxed(),
    };
    let file = log_file.map(|file| fmt::layer().with_ansi(false).with_writer(file));

    tracing_subscriber::registry()
        .with(stdout)
        .with(file)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!("Failed to listen for SIGTERM: {}", err),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    token.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let (log_file, log_file_error) = match config.log.open() {
        Ok(log_file) => (log_file, None),
        Err(err) => (None, Some(err)),
    };

    init_tracing(&config.app.environment, log_file.clone());

    if let Some(err) = log_file_error {
        tracing::error!("Failed to create log file: {}", err);
    }
    if let Some(file) = &log_file {
        tracing::debug!("Writing logs to {}", file.path().display());
    }

    tracing::info!("Starting server....");

    let ctx: Arc<Context> = Arc::new(config.to_context().await);
    let shutdown = CancellationToken::new();

    tokio::spawn(shutdown_signal(shutdown.clone()));

    let served = App::new(ctx).serve(shutdown).await;

    if let Err(err) = &served {
        tracing::error!("Server error: {}", err);
    }

    if let Some(file) = log_file {
        if let Err(err) = file.close() {
            tracing::error!("Failed to close log file: {}", err);
        }
    }

    served?;
    Ok(())
}
