//! Job Board Seeder - Main Entry Point
//! Provisions the GridDB containers and loads demo data

mod config;
mod seed;

use anyhow::{Context, Result};
use config::{LogFormat, SeederConfig};
use jobboard_infra_griddb::GridDbClient;
use seed::Seeder;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobboard=info"))
        .expect("Failed to create env filter");

    match LogFormat::from_env() {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Job Board Seeder v{} starting...", VERSION);

    // 2. Load configuration
    let config = SeederConfig::from_env()?;
    info!(
        base_url = %config.griddb.base_url,
        seed_jobs = config.seed_jobs,
        "Configuration loaded"
    );

    // 3. Connect (fail fast when the service is unreachable)
    let client = GridDbClient::connect(config.griddb.clone())
        .await
        .context("GridDB connection check failed")?;

    // 4. Provision and seed
    let seeder = Seeder::new(Arc::new(client));
    seeder.run(config.seed_jobs).await?;

    info!("Seeding complete");
    Ok(())
}
