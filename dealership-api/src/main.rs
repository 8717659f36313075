use std::net::SocketAddr;
use dealership_api::{app, AppState};
use dealership_store::{app_config::Config, ContractFileManager, DealershipFileManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealership_api=debug,dealership_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let dealership_files = DealershipFileManager::new(&config.storage.dealership_file);
    let dealership = dealership_files.load_dealership()?;
    let contract_files = ContractFileManager::new(&config.storage.contracts_file);

    tracing::info!(
        "Serving {} ({} vehicles), contracts in {}",
        dealership.name,
        dealership.len(),
        contract_files.path().display()
    );

    let state = AppState::new(dealership, dealership_files, contract_files, config.contract_terms);
    let app = app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
