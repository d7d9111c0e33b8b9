use std::sync::Arc;

use ethers::contract::ContractError;
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use ethers::utils::to_checksum;
use thiserror::Error;

use crate::config::chain_config::ChainConfig;

use super::contracts::{Erc20, IUniswapV2Pair, IUniswapV3Pool};

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("invalid rpc endpoint: {url}")]
    InvalidEndpoint { url: String },
    #[error("invalid contract address: {address}")]
    InvalidAddress { address: String },
    #[error("contract call failed: {0}")]
    Call(#[from] ContractError<Provider<Http>>),
}

/// State of a constant-product pair, fetched fresh on every poll.
#[derive(Debug, Clone)]
pub struct PoolV2Snapshot {
    pub token0: Address,
    pub token1: Address,
    pub reserve0: U256,
    pub reserve1: U256,
    pub total_supply: U256,
}

/// Token pairing of a concentrated-liquidity pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolV3Tokens {
    pub token0: Address,
    pub token1: Address,
}

#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub symbol: String,
    pub decimals: u8,
}

/// The read-only contract calls the routines depend on, as a seam for tests.
#[async_trait::async_trait]
pub trait PoolReader: Send + Sync {
    /// token0/token1/getReserves/totalSupply of a V2 pair. Either the whole
    /// snapshot comes back or the first failing call aborts it.
    async fn pool_v2_snapshot(&self, address: &str) -> Result<PoolV2Snapshot, ChainError>;

    async fn pool_v3_tokens(&self, address: &str) -> Result<PoolV3Tokens, ChainError>;

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, ChainError>;
}

/// Read-only JSON-RPC client around a single long-lived provider.
pub struct ChainClient {
    provider: Arc<Provider<Http>>,
}

impl ChainClient {
    pub fn new(config: &ChainConfig) -> Result<Self, ChainError> {
        let provider =
            Provider::<Http>::try_from(config.rpc_url.as_str()).map_err(|_| {
                ChainError::InvalidEndpoint {
                    url: config.rpc_url.clone(),
                }
            })?;

        Ok(Self {
            provider: Arc::new(provider),
        })
    }
}

#[async_trait::async_trait]
impl PoolReader for ChainClient {
    async fn pool_v2_snapshot(&self, address: &str) -> Result<PoolV2Snapshot, ChainError> {
        let address = parse_address(address)?;
        let pair = IUniswapV2Pair::new(address, Arc::clone(&self.provider));

        let token0 = pair.token_0().call().await?;
        let token1 = pair.token_1().call().await?;
        let (reserve0, reserve1, _) = pair.get_reserves().call().await?;
        let total_supply = pair.total_supply().call().await?;

        Ok(PoolV2Snapshot {
            token0,
            token1,
            reserve0: U256::from(reserve0),
            reserve1: U256::from(reserve1),
            total_supply,
        })
    }

    async fn pool_v3_tokens(&self, address: &str) -> Result<PoolV3Tokens, ChainError> {
        let address = parse_address(address)?;
        let pool = IUniswapV3Pool::new(address, Arc::clone(&self.provider));

        let token0 = pool.token_0().call().await?;
        let token1 = pool.token_1().call().await?;

        Ok(PoolV3Tokens { token0, token1 })
    }

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, ChainError> {
        let contract = Erc20::new(token, Arc::clone(&self.provider));

        let symbol = contract.symbol().call().await?;
        let decimals = contract.decimals().call().await?;

        Ok(TokenMetadata { symbol, decimals })
    }
}

pub fn parse_address(address: &str) -> Result<Address, ChainError> {
    address
        .trim()
        .parse::<Address>()
        .map_err(|_| ChainError::InvalidAddress {
            address: address.to_owned(),
        })
}

/// EIP-55 checksummed rendering, the form written back to the sheet.
pub fn checksum(address: Address) -> String {
    to_checksum(&address, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    #[test]
    fn parses_addresses_case_insensitively() {
        let lower = parse_address(&DAI.to_lowercase()).unwrap();
        let mixed = parse_address(DAI).unwrap();
        assert_eq!(lower, mixed);
    }

    #[test]
    fn normalizes_to_checksummed_form() {
        let address = parse_address(&DAI.to_lowercase()).unwrap();
        assert_eq!(checksum(address), DAI);
    }

    #[test]
    fn rejects_garbage_addresses() {
        assert!(matches!(
            parse_address("not-an-address"),
            Err(ChainError::InvalidAddress { .. })
        ));
        assert!(matches!(
            parse_address("0x1234"),
            Err(ChainError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let padded = format!("  {} ", DAI);
        assert_eq!(parse_address(&padded).unwrap(), parse_address(DAI).unwrap());
    }
}
