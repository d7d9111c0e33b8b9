use std::collections::HashMap;

use thiserror::Error;

const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("price request failed")]
    Request(#[from] reqwest::Error),
    #[error("malformed price response")]
    Malformed(#[from] serde_json::Error),
    #[error("asset '{id}' unknown to the price service")]
    UnknownAsset { id: String },
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct PriceResponse {
    pub usd: Option<f64>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct PricesResponse(pub HashMap<String, PriceResponse>);

/// The single price lookup the routines depend on, as a seam for tests.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Current USD price of a single asset. An id the service does not know
    /// is an error, never a default value.
    async fn usd_price(&self, id: &str) -> Result<f64, PriceError>;
}

pub struct CoinGeckoApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for CoinGeckoApi {
    fn default() -> Self {
        Self::new(COINGECKO_BASE_URL.to_owned())
    }
}

impl CoinGeckoApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn prices(&self, ids: &[&str]) -> Result<PricesResponse, PriceError> {
        let url = format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies=usd",
            self.base_url,
            ids.join(",")
        );
        let response = self.client.get(&url).send().await?.text().await?;
        let prices: PricesResponse = serde_json::from_str(&response)?;
        Ok(prices)
    }
}

#[async_trait::async_trait]
impl PriceSource for CoinGeckoApi {
    async fn usd_price(&self, id: &str) -> Result<f64, PriceError> {
        let prices = self.prices(&[id]).await?;
        prices
            .0
            .get(id)
            .and_then(|price| price.usd)
            .ok_or_else(|| PriceError::UnknownAsset { id: id.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{mock, Matcher};

    #[tokio::test]
    async fn fetches_a_usd_price() {
        let _m = mock("GET", "/api/v3/simple/price")
            .match_query(Matcher::UrlEncoded("ids".into(), "dai".into()))
            .match_query(Matcher::UrlEncoded("vs_currencies".into(), "usd".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"dai":{"usd":0.9998}}"#)
            .create();

        let api = CoinGeckoApi::new(mockito::server_url());
        let price = api.usd_price("dai").await.unwrap();
        assert_eq!(price, 0.9998);
    }

    #[tokio::test]
    async fn unknown_asset_is_an_error() {
        let _m = mock("GET", "/api/v3/simple/price")
            .match_query(Matcher::UrlEncoded(
                "ids".into(),
                "definitely-not-a-coin".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create();

        let api = CoinGeckoApi::new(mockito::server_url());
        let result = api.usd_price("definitely-not-a-coin").await;
        assert!(matches!(result, Err(PriceError::UnknownAsset { .. })));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let _m = mock("GET", "/api/v3/simple/price")
            .match_query(Matcher::UrlEncoded("ids".into(), "frax".into()))
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create();

        let api = CoinGeckoApi::new(mockito::server_url());
        let result = api.usd_price("frax").await;
        assert!(matches!(result, Err(PriceError::Malformed(_))));
    }
}
