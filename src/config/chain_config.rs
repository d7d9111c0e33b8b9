fn default_rpc_url() -> String {
    "http://localhost:8545".to_owned()
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ChainConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
        }
    }
}
