pub mod coingecko;
pub mod token_table;

pub use coingecko::{CoinGeckoApi, PriceError, PriceSource};
pub use token_table::TokenTable;
