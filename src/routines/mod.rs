pub mod add_liquidity;
pub mod remove_liquidity;
pub mod routine;

pub use add_liquidity::AddLiquidityRoutine;
pub use remove_liquidity::RemoveLiquidityRoutine;
pub use routine::{Routine, RoutineError};

use error_stack::{report, ResultExt};
use ethers::types::Address;

use crate::chain::client::checksum;
use crate::chain::PoolReader;
use crate::price::{PriceSource, TokenTable};

pub(crate) const STATUS_FETCHING: &str = "fetching info...";
pub(crate) const FLAG_SET: &str = "TRUE";
pub(crate) const FLAG_CLEARED: &str = "FALSE";

/// Everything the sheet wants to know about one side of a pool.
#[derive(Debug, Clone)]
pub(crate) struct TokenReport {
    pub symbol: String,
    pub decimals: u8,
    pub address: String,
    pub price_usd: f64,
}

pub(crate) async fn fetch_token_report<C, P>(
    chain: &C,
    prices: &P,
    tokens: &TokenTable,
    token: Address,
) -> error_stack::Result<TokenReport, RoutineError>
where
    C: PoolReader + ?Sized,
    P: PriceSource + ?Sized,
{
    let metadata = chain
        .token_metadata(token)
        .await
        .change_context_lazy(|| {
            RoutineError::routine_failure(format!("failed to read token {}", checksum(token)))
        })?;

    let price_id = tokens.price_id(token).ok_or_else(|| {
        report!(RoutineError::routine_failure(format!(
            "no price id configured for token {}",
            checksum(token)
        )))
    })?;

    let price_usd = prices.usd_price(price_id).await.change_context_lazy(|| {
        RoutineError::routine_failure(format!("failed to fetch price for '{}'", price_id))
    })?;

    Ok(TokenReport {
        symbol: metadata.symbol,
        decimals: metadata.decimals,
        address: checksum(token),
        price_usd,
    })
}
