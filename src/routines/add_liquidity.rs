use std::sync::Arc;

use error_stack::ResultExt;
use google_sheets4::api::ValueRange;

use crate::chain::PoolReader;
use crate::price::{PriceSource, TokenTable};
use crate::sheets::ranges;
use crate::sheets::value_range_factory::ValueRangeFactory;
use crate::sheets::SheetStore;

use super::routine::{Routine, RoutineError};
use super::{fetch_token_report, TokenReport, FLAG_CLEARED, FLAG_SET, STATUS_FETCHING};

/// Watches the addLiquidity flag; when armed, publishes the token pairing of
/// a concentrated-liquidity pool (one four-row block per side).
pub struct AddLiquidityRoutine<S, C, P> {
    spreadsheet_manager: Arc<S>,
    chain: Arc<C>,
    prices: Arc<P>,
    tokens: Arc<TokenTable>,
}

impl<S, C, P> AddLiquidityRoutine<S, C, P>
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

/// symbol / decimals / address / price, the column block for one pool side.
fn token_block_rows(report: &TokenReport) -> Vec<String> {
    vec![
        report.symbol.clone(),
        report.decimals.to_string(),
        report.address.clone(),
        report.price_usd.to_string(),
    ]
}

#[async_trait::async_trait]
impl<S, C, P> Routine for AddLiquidityRoutine<S, C, P>
where
    S: SheetStore,
    C: PoolReader,
    P: PriceSource,
{
    fn name(&self) -> &str {
        "AddLiquidityRoutine"
    }

    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        let (flag, pool_address) = self
            .spreadsheet_manager
            .read_flag_and_address(ranges::add_liquidity::RO_FLAG_AND_ADDRESS)
            .await
            .change_context(RoutineError::routine_failure(
                "failed to read addLiquidity trigger cells",
            ))?;

        if flag != FLAG_SET {
            return Ok(());
        }
        let Some(pool_address) = pool_address else {
            tracing::warn!("addLiquidity flag is set but the address cell is empty");
            return Ok(());
        };

        tracing::info!(pool = %pool_address, "addLiquidity armed, fetching pool info");
        self.spreadsheet_manager
            .write_status(ranges::add_liquidity::RW_STATUS, STATUS_FETCHING)
            .await
            .change_context(RoutineError::routine_failure("failed to write status cell"))?;

        let pool = self
            .chain
            .pool_v3_tokens(&pool_address)
            .await
            .change_context_lazy(|| {
                RoutineError::routine_failure(format!("failed to read v3 pool {}", pool_address))
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
                ranges::add_liquidity::RW_TOKEN0_BLOCK,
                ValueRange::from_rows(&token_block_rows(&side0)),
            )
            .await
            .change_context(RoutineError::routine_failure("failed to write token0 block"))?;
        self.spreadsheet_manager
            .write_range(
                ranges::add_liquidity::RW_TOKEN1_BLOCK,
                ValueRange::from_rows(&token_block_rows(&side1)),
            )
            .await
            .change_context(RoutineError::routine_failure("failed to write token1 block"))?;

        self.spreadsheet_manager
            .write_status(ranges::add_liquidity::RW_FLAG, FLAG_CLEARED)
            .await
            .change_context(RoutineError::routine_failure("failed to clear the flag"))?;
        self.spreadsheet_manager
            .write_status(ranges::add_liquidity::RW_STATUS, "")
            .await
            .change_context(RoutineError::routine_failure("failed to clear the status"))?;

        tracing::info!("✅ addLiquidity block updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::routines::testing::{token_table, FakeChain, FakePrices, FakeSheet, DAI, POOL};

    #[test]
    fn token_block_is_ordered_symbol_decimals_address_price() {
        let report = TokenReport {
            symbol: "DAI".to_owned(),
            decimals: 18,
            address: DAI.to_owned(),
            price_usd: 0.9998,
        };
        assert_eq!(
            token_block_rows(&report),
            vec![
                "DAI".to_owned(),
                "18".to_owned(),
                DAI.to_owned(),
                "0.9998".to_owned(),
            ]
        );
    }

    #[tokio::test]
    async fn a_cleared_flag_touches_nothing() {
        let sheet = Arc::new(FakeSheet::idle());
        let chain = Arc::new(FakeChain::new());
        let prices = Arc::new(FakePrices::ok());
        let routine = AddLiquidityRoutine::new(
            Arc::clone(&sheet),
            Arc::clone(&chain),
            Arc::clone(&prices),
            Arc::new(token_table()),
        );

        routine.run().await.unwrap();

        assert!(sheet.writes.lock().unwrap().is_empty());
        assert_eq!(chain.calls.load(Ordering::SeqCst), 0);
        assert_eq!(prices.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn a_price_failure_leaves_the_flag_and_status_alone() {
        let sheet = Arc::new(FakeSheet::armed(POOL));
        let chain = Arc::new(FakeChain::new());
        let prices = Arc::new(FakePrices::failing());
        let routine = AddLiquidityRoutine::new(
            Arc::clone(&sheet),
            chain,
            prices,
            Arc::new(token_table()),
        );

        routine.run().await.unwrap_err();

        // The status was set when the run started; nothing after that, so the
        // flag stays TRUE and the status stays on-screen until a retry clears
        // them.
        let writes = sheet.writes.lock().unwrap();
        assert_eq!(
            *writes,
            vec![(
                ranges::add_liquidity::RW_STATUS.to_owned(),
                vec![STATUS_FETCHING.to_owned()],
            )]
        );
    }
}
