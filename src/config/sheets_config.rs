fn default_priv_key() -> Box<str> {
    "client_secret.json".into()
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    #[serde(default = "default_priv_key")]
    pub priv_key: Box<str>,
    #[serde(default)]
    pub spreadsheet_id: Box<str>,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            priv_key: default_priv_key(),
            spreadsheet_id: Box::default(),
        }
    }
}
