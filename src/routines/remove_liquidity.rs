use std::sync::Arc;

use error_stack::ResultExt;
use google_sheets4::api::ValueRange;

use crate::chain::{PoolReader, PoolV2Snapshot};
use crate::price::{PriceSource, TokenTable};
use crate::sheets::ranges;
use crate::sheets::value_range_factory::ValueRangeFactory;
use crate::sheets::SheetStore;

use super::routine::{Routine, RoutineError};
use super::{fetch_token_report, TokenReport, FLAG_CLEARED, FLAG_SET, STATUS_FETCHING};

/// Watches the removeLiquidity flag; when armed, publishes a full snapshot of
/// a constant-product pair as one eleven-row block.
pub struct RemoveLiquidityRoutine<S, C, P> {
    spreadsheet_manager: Arc<S>,
    chain: Arc<C>,
    prices: Arc<P>,
    tokens: Arc<TokenTable>,
}

impl<S, C, P> RemoveLiquidityRoutine<S, C, P>
where
    S: SheetStore,
    C: PoolReader,
    P: PriceSource,
{
    pub fn new(
        spreadsheet_manager: Arc<S>,
        chain: Arc<C>,
        prices: Arc<P>,
        tokens: Arc<TokenTable>,
    ) -> Self {
        Self {
            spreadsheet_manager,
            chain,
            prices,
            tokens,
        }
    }
}

/// Per side: symbol / decimals / address / reserve / price, then the pool's
/// total supply as the final row. Written atomically as one range update.
fn result_block_rows(
    side0: &TokenReport,
    side1: &TokenReport,
    pool: &PoolV2Snapshot,
) -> Vec<String> {
    vec![
        side0.symbol.clone(),
        side0.decimals.to_string(),
        side0.address.clone(),
        pool.reserve0.to_string(),
        side0.price_usd.to_string(),
        side1.symbol.clone(),
        side1.decimals.to_string(),
        side1.address.clone(),
        pool.reserve1.to_string(),
        side1.price_usd.to_string(),
        pool.total_supply.to_string(),
    ]
}

#[async_trait::async_trait]
impl<S, C, P> Routine for RemoveLiquidityRoutine<S, C, P>
where
    S: SheetStore,
    C: PoolReader,
    P: PriceSource,
{
    fn name(&self) -> &str {
        "RemoveLiquidityRoutine"
    }

    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        let (flag, pool_address) = self
            .spreadsheet_manager
            .read_flag_and_address(ranges::remove_liquidity::RO_FLAG_AND_ADDRESS)
            .await
            .change_context(RoutineError::routine_failure(
                "failed to read removeLiquidity trigger cells",
            ))?;

        if flag != FLAG_SET {
            return Ok(());
        }
        let Some(pool_address) = pool_address else {
            tracing::warn!("removeLiquidity flag is set but the address cell is empty");
            return Ok(());
        };

        tracing::info!(pool = %pool_address, "removeLiquidity armed, fetching pool info");
        self.spreadsheet_manager
            .write_status(ranges::remove_liquidity::RW_STATUS, STATUS_FETCHING)
            .await
            .change_context(RoutineError::routine_failure("failed to write status cell"))?;

        let pool = self
            .chain
            .pool_v2_snapshot(&pool_address)
            .await
            .change_context_lazy(|| {
                RoutineError::routine_failure(format!("failed to read v2 pool {}", pool_address))
            })?;

        let side0 = fetch_token_report(
            self.chain.as_ref(),
            self.prices.as_ref(),
            &self.tokens,
            pool.token0,
        )
        .await?;
        let side1 = fetch_token_report(
            self.chain.as_ref(),
            self.prices.as_ref(),
            &self.tokens,
            pool.token1,
        )
        .await?;

        self.spreadsheet_manager
            .write_range(
                ranges::remove_liquidity::RW_RESULT_BLOCK,
                ValueRange::from_rows(&result_block_rows(&side0, &side1, &pool)),
            )
            .await
            .change_context(RoutineError::routine_failure("failed to write result block"))?;

        self.spreadsheet_manager
            .write_status(ranges::remove_liquidity::RW_FLAG, FLAG_CLEARED)
            .await
            .change_context(RoutineError::routine_failure("failed to clear the flag"))?;
        self.spreadsheet_manager
            .write_status(ranges::remove_liquidity::RW_STATUS, "")
            .await
            .change_context(RoutineError::routine_failure("failed to clear the status"))?;

        tracing::info!("✅ removeLiquidity block updated");
        Ok(())
    }
}
