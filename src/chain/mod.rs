pub mod client;
pub mod contracts;

pub use client::{ChainClient, ChainError, PoolReader, PoolV2Snapshot, PoolV3Tokens, TokenMetadata};
