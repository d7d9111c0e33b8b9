use error_stack::{Context, Result, ResultExt};
use google_sheets4::{api::ValueRange, Sheets};

use crate::config::sheets_config::SpreadsheetConfig;

use super::into::MyInto;
use super::value_range_factory::ValueRangeFactory;
use super::{auth, http_client};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
}

#[derive(Debug)]
pub enum SpreadsheetManagerError {
    BadCredentials,
    FailedToFetchRange,
    FailedToWriteRange,
}

impl std::fmt::Display for SpreadsheetManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Context for SpreadsheetManagerError {}

/// The sheet operations the routines depend on, as a seam for tests.
#[async_trait::async_trait]
pub trait SheetStore: Send + Sync {
    /// Reads the two-row trigger block: row 0 is the TRUE/FALSE flag, row 1
    /// the pool address. An empty or missing address cell maps to None.
    async fn read_flag_and_address(
        &self,
        range: &str,
    ) -> Result<(String, Option<String>), SpreadsheetManagerError>;

    async fn write_range(
        &self,
        range: &str,
        value_range: ValueRange,
    ) -> Result<(), SpreadsheetManagerError>;

    /// Single-cell convenience write, used for the status message and the
    /// flag cell.
    async fn write_status(&self, range: &str, text: &str)
        -> Result<(), SpreadsheetManagerError>;
}

impl SpreadsheetManager {
    pub async fn new(config: SpreadsheetConfig) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone())
            .await
            .change_context(SpreadsheetManagerError::BadCredentials)
            .attach_printable_lazy(|| {
                format!("service account key expected at '{}'", config.priv_key)
            })?;
        let hub = Sheets::new(client.clone(), auth);

        Ok(SpreadsheetManager { config, hub })
    }

    pub async fn read_range(&self, range: &str) -> Result<ValueRange, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("range: {}", range))?;

        let value_range = response.1;
        Ok(value_range)
    }

}

#[async_trait::async_trait]
impl SheetStore for SpreadsheetManager {
    async fn read_flag_and_address(
        &self,
        range: &str,
    ) -> Result<(String, Option<String>), SpreadsheetManagerError> {
        let rows: Vec<String> = self
            .read_range(range)
            .await?
            .values
            .unwrap_or_default()
            .my_into();

        let flag = rows.first().cloned().unwrap_or_else(|| "FALSE".to_owned());
        let address = rows.get(1).cloned().filter(|cell| !cell.is_empty());
        Ok((flag, address))
    }

    async fn write_range(
        &self,
        range: &str,
        value_range: ValueRange,
    ) -> Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, range)
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("range: {}", range))
    }

    async fn write_status(
        &self,
        range: &str,
        text: &str,
    ) -> Result<(), SpreadsheetManagerError> {
        self.write_range(range, ValueRange::from_str(text)).await
    }
}
