use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};

use crate::config::sheets_config::SpreadsheetConfig;

pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
) -> std::io::Result<Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>> {
    let secret: oauth2::ServiceAccountKey =
        oauth2::read_service_account_key(config.priv_key.as_ref()).await?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client.clone())
        .build()
        .await
}
