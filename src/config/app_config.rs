use std::collections::HashMap;

use config::Config;

use super::{
    chain_config::ChainConfig, poller_config::PollerConfig, sheets_config::SpreadsheetConfig,
};

/// Default address -> CoinGecko id table. Only tokens listed here can have a
/// price resolved; everything else aborts the routine run.
fn default_token_table() -> HashMap<String, String> {
    HashMap::from([
        (
            "0x64aa3364F17a4D01c6f1751Fd97C2BD3D7e7f1D5".to_owned(),
            "olympus".to_owned(),
        ),
        (
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".to_owned(),
            "ethereum".to_owned(),
        ),
        (
            "0x853d955aCEf822Db058eb8505911ED77F175b99e".to_owned(),
            "frax".to_owned(),
        ),
        (
            "0x6B175474E89094C44Da98b954EedeAC495271d0F".to_owned(),
            "dai".to_owned(),
        ),
    ])
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub sheets: SpreadsheetConfig,
    #[serde(default)]
    pub poller: PollerConfig,
    #[serde(default = "default_token_table")]
    pub tokens: HashMap<String, String>,
}

impl AppConfig {
    /// Loads the optional `Config` file, then applies the two environment
    /// overrides the deployment relies on.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut app_config: AppConfig = Config::builder()
            .add_source(config::File::with_name("Config").required(false))
            .build()?
            .try_deserialize()?;

        if let Ok(token) = std::env::var("WEB3_INFURA_TOKEN_4") {
            app_config.chain.rpc_url = format!("https://mainnet.infura.io/v3/{}", token);
        }
        if let Ok(spreadsheet_id) = std::env::var("LIQUIDITY_SPREADSHEET_ID") {
            app_config.sheets.spreadsheet_id = spreadsheet_id.into_boxed_str();
        }

        Ok(app_config)
    }
}
