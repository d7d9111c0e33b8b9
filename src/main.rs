mod chain;
mod config;
mod poller;
mod price;
mod routines;
mod sheets;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::chain::ChainClient;
use crate::config::app_config::AppConfig;
use crate::poller::Poller;
use crate::price::{CoinGeckoApi, TokenTable};
use crate::routines::{AddLiquidityRoutine, RemoveLiquidityRoutine, Routine};
use crate::sheets::SpreadsheetManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;

    let chain = Arc::new(ChainClient::new(&config.chain)?);
    let prices = Arc::new(CoinGeckoApi::default());
    let tokens = Arc::new(TokenTable::from_config(&config.tokens)?);
    let spreadsheet_manager = Arc::new(
        SpreadsheetManager::new(config.sheets.clone())
            .await
            .map_err(|report| anyhow::anyhow!("spreadsheet setup failed: {report:?}"))?,
    );

    let routines: Vec<Box<dyn Routine>> = vec![
        Box::new(AddLiquidityRoutine::new(
            Arc::clone(&spreadsheet_manager),
            Arc::clone(&chain),
            Arc::clone(&prices),
            Arc::clone(&tokens),
        )),
        Box::new(RemoveLiquidityRoutine::new(
            Arc::clone(&spreadsheet_manager),
            Arc::clone(&chain),
            Arc::clone(&prices),
            Arc::clone(&tokens),
        )),
    ];

    tracing::info!(
        tick_seconds = config.poller.tick_seconds,
        refresh_interval_seconds = config.poller.refresh_interval_seconds,
        "starting poller"
    );
    Poller::new(routines, &config.poller).run().await;

    Ok(())
}
