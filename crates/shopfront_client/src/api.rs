use reqwest::{Client, RequestBuilder};
use tracing::debug;

use shopfront_common::{ShopEnvelope, ShopInfo};

use crate::config::ApiConfig;
use crate::error::ShopApiError;

/// Endpoint serving the signed-in user's shop metadata.
const MY_SHOP_PATH: &str = "/api/v1/shop/my-shop";

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for the shop backend.
///
/// The bearer credential is attached per request rather than baked into the
/// client, because the session can rotate tokens while the client lives.
pub struct ShopApi {
    base_url: String,
    http: Client,
}

impl ShopApi {
    /// Builds the HTTP client for a validated configuration.
    ///
    /// Native targets get a 30 second timeout; the browser fetch layer has
    /// no builder timeout and relies on the browser's own limits.
    pub fn new(config: ApiConfig) -> Result<Self, ShopApiError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(30));
        let http = builder.build()?;

        Ok(Self {
            base_url: config.base_url().to_owned(),
            http,
        })
    }

    /// Build the GET request for the my-shop endpoint with `token` as the
    /// bearer credential.
    pub fn my_shop_request(&self, token: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, MY_SHOP_PATH);
        debug!(%url, "building my-shop request");

        self.http.get(url).bearer_auth(token)
    }

    /// Fetches the shop metadata for the session holding `token`.
    ///
    /// Any non-success status is a uniform failure; only the envelope's
    /// `data` field is decoded and returned.
    pub async fn fetch_my_shop(&self, token: &str) -> Result<ShopInfo, ShopApiError> {
        let response = self.my_shop_request(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShopApiError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: ShopEnvelope = response.json().await?;
        Ok(envelope.data)
    }
}
