use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod config;
mod error;
mod metrics;
mod models;
mod routes;

use adapters::{prefetch_models, FastEmbedLoader};
use application::{EmbeddingService, Lifecycle, ModelRegistry};
use config::{ModelCatalog, ServerArgs};
use metrics::EncodeMetrics;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub embedding_service: Arc<EmbeddingService>,
    pub lifecycle: Arc<Lifecycle>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ServerArgs::parse();
    let catalog = args.catalog()?;

    if let Some(dir) = args.save_models_to.clone() {
        return save_models(catalog, dir, args.show_download_progress).await;
    }

    serve(args, catalog).await
}

/// Offline pre-fetch: download every catalog model into `dir` and exit
async fn save_models(
    catalog: ModelCatalog,
    dir: std::path::PathBuf,
    show_download_progress: bool,
) -> Result<()> {
    tracing::info!("💾 Saving models to {:?} and exiting...", dir);

    tokio::task::spawn_blocking(move || {
        prefetch_models(&catalog.models, &dir, show_download_progress)
    })
    .await
    .context("Model prefetch task panicked")?
    .context("Failed to save models")?;

    tracing::info!("✅ All models saved");
    Ok(())
}

async fn serve(args: ServerArgs, catalog: ModelCatalog) -> Result<()> {
    tracing::info!("🧬 Vecserve initializing...");

    let addr = args.bind_addr()?;
    tracing::info!("📋 Model catalog: {}", catalog.names().join(", "));
    let lifecycle = Arc::new(Lifecycle::new());

    let mut loader = FastEmbedLoader::new().with_download_progress(args.show_download_progress);
    match &args.load_models_from {
        Some(dir) => {
            tracing::info!("📂 Loading models from {:?}", dir);
            loader = loader.with_cache_dir(dir);
        }
        None => tracing::info!("🌐 Loading models from local cache and/or network"),
    }

    // Population failure is fatal: never serve with a partial registry
    let registry = Arc::new(
        ModelRegistry::populate(&catalog.models, Arc::new(loader))
            .await
            .context("Failed to populate model registry")?,
    );

    let metrics = EncodeMetrics::new().context("Failed to register metrics")?;
    let state = AppState {
        embedding_service: Arc::new(EmbeddingService::new(registry.clone(), metrics)),
        lifecycle: lifecycle.clone(),
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    lifecycle.begin_serving();
    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!(
        "✅ Vecserve ready on http://{} - {} models loaded",
        addr,
        registry.len()
    );

    axum::serve(listener, routes::app(state))
        .with_graceful_shutdown(shutdown_signal(lifecycle))
        .await
        .context("Server error")?;

    teardown(registry);
    tracing::info!("👋 Vecserve stopped");

    Ok(())
}

/// Wait for Ctrl-C or SIGTERM, then stop accepting API requests
async fn shutdown_signal(lifecycle: Arc<Lifecycle>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown requested - draining in-flight requests");
    lifecycle.begin_shutdown();
}

/// Drop every loaded model once no request can reach the registry
fn teardown(registry: Arc<ModelRegistry>) {
    match Arc::try_unwrap(registry) {
        Ok(registry) => {
            let released = registry.teardown();
            tracing::info!("🧹 Released {} models", released);
        }
        Err(registry) => {
            tracing::warn!(
                "⚠️  Model registry still referenced at shutdown ({} refs); released on exit",
                Arc::strong_count(&registry)
            );
        }
    }
}
