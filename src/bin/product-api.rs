//! product-api CLI: serve the API, apply migrations, inspect products.

use clap::{Parser, Subcommand};
use product_api::app;
use product_api::config::{ProcessEnv, ResolutionStrategy, StrategyKind};
use product_api::repository::{PgProductRepository, ProductRepository};
use product_api::telemetry::{TelemetryConfig, init_telemetry};
use std::path::PathBuf;
use std::sync::Arc;

const SERVICE_NAME: &str = "product-api";

#[derive(Parser)]
#[command(name = "product-api", about = "Product lookup API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Directory containing settings.toml
        #[arg(long, default_value = ".")]
        app_dir: PathBuf,
    },
    /// Apply schema migrations out-of-band
    Migrate {
        /// runtime | sibling-app | standalone | command-line | local-developer
        #[arg(long, default_value = "sibling-app")]
        strategy: StrategyKind,
        /// Settings directory of the application whose database is migrated
        #[arg(long, default_value = ".")]
        app_dir: PathBuf,
        /// Raw tool arguments after `--`, searched for `--environment <name>`
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Product operations
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Show a product by id
    Show {
        id: i32,
        #[arg(long, default_value = ".")]
        app_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env = ProcessEnv::capture();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { app_dir } => cmd_serve(app_dir, env).await,
        Command::Migrate {
            strategy,
            app_dir,
            args,
        } => cmd_migrate(strategy.into_strategy(app_dir, args), env).await,
        Command::Product { action } => match action {
            ProductAction::Show { id, app_dir } => cmd_product_show(id, app_dir, env).await,
        },
    }
}

async fn cmd_serve(app_dir: PathBuf, env: ProcessEnv) -> anyhow::Result<()> {
    let settings = app::load_settings(&app_dir, &env)?;

    let _guard = init_telemetry(TelemetryConfig::from_settings(
        &settings.root.telemetry_settings()?,
        SERVICE_NAME,
    ))?;
    tracing::info!(environment = %settings.environment, "starting product-api");

    let app = app::build_app(&settings).await?;
    app.db.health_check().await?;
    app::serve(app).await?;
    Ok(())
}

async fn cmd_migrate(strategy: ResolutionStrategy, env: ProcessEnv) -> anyhow::Result<()> {
    let _guard = init_telemetry(TelemetryConfig {
        endpoint: None,
        service_name: SERVICE_NAME.to_string(),
    })?;

    let (db, descriptor) = app::connect_with(strategy, env).await?;
    db.migrate().await?;

    println!(
        "Migrations applied (strategy: {}, environment: {}, owner: {})",
        descriptor.strategy,
        descriptor
            .environment
            .as_ref()
            .map(|e| e.as_str())
            .unwrap_or("-"),
        descriptor.migrations_owner
    );
    Ok(())
}

async fn cmd_product_show(id: i32, app_dir: PathBuf, env: ProcessEnv) -> anyhow::Result<()> {
    let strategy = ResolutionStrategy::Runtime { app_dir };
    let (db, _) = app::connect_with(strategy, env).await?;
    let repository = PgProductRepository::new(Arc::new(db));

    match repository.get_by_id(id).await? {
        Some(product) => {
            println!("ID:         {}", product.id);
            println!(
                "Name:       {}",
                product.product_name.as_deref().unwrap_or("-")
            );
            println!("Unit Price: {}", product.unit_price);
        }
        None => anyhow::bail!("no product with id {id}"),
    }
    Ok(())
}
