//! Explicit assembly: settings -> connection -> database -> repository -> router.

use crate::config::{
    ConfigurationRoot, ConfigurationService, ConnectionDescriptor, ConnectionResolver,
    EnvironmentName, PRODUCTS_DB, ProcessEnv, ResolutionStrategy,
};
use crate::db::Db;
use crate::error::{Error, Result};
use crate::http;
use crate::repository::{PgProductRepository, ProductRepository};
use axum::Router;
use std::path::Path;
use std::sync::Arc;

/// Settings loaded for the running application.
pub struct LoadedSettings {
    pub environment: EnvironmentName,
    pub root: ConfigurationRoot,
}

/// Resolve the environment and build the application's own settings.
///
/// Fails if the base settings file is missing or malformed.
pub fn load_settings(app_dir: &Path, env: &ProcessEnv) -> Result<LoadedSettings> {
    let environment = EnvironmentName::resolve(env);
    let root = ConfigurationService::new(app_dir, env.clone()).build(Some(&environment))?;
    Ok(LoadedSettings { environment, root })
}

/// A fully wired application, ready to serve.
pub struct App {
    pub router: Router,
    pub bind_address: String,
    pub db: Arc<Db>,
}

/// Wire the application for runtime mode from its already-loaded settings.
///
/// The connection string is resolved before anything connects, so a missing
/// value aborts startup instead of surfacing on the first request.
pub async fn build_app(settings: &LoadedSettings) -> Result<App> {
    let descriptor =
        ConnectionResolver::resolve_runtime(&settings.root, &settings.environment, PRODUCTS_DB)?;
    let db = Arc::new(Db::connect(&descriptor).await?);
    let repository: Arc<dyn ProductRepository> =
        Arc::new(PgProductRepository::new(Arc::clone(&db)));

    Ok(App {
        router: http::router(repository),
        bind_address: settings.root.server_settings()?.bind_address,
        db,
    })
}

/// Serve until Ctrl-C.
pub async fn serve(app: App) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&app.bind_address)
        .await
        .map_err(|e| Error::Other(format!("failed to bind {}: {e}", app.bind_address)))?;
    tracing::info!(address = %app.bind_address, "product-api listening");

    axum::serve(listener, app.router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutdown requested");
        })
        .await
        .map_err(|e| Error::Other(format!("server error: {e}")))?;
    Ok(())
}

/// Resolve a connection with `strategy` and connect, for out-of-band tooling.
pub async fn connect_with(
    strategy: ResolutionStrategy,
    env: ProcessEnv,
) -> Result<(Db, ConnectionDescriptor)> {
    let descriptor = ConnectionResolver::new(strategy, env).resolve(PRODUCTS_DB)?;
    let db = Db::connect(&descriptor).await?;
    Ok((db, descriptor))
}
