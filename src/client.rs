//! The HTTP client for the ledger backend's asset routes.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use crate::{Error, asset::Asset};

/// The default base URL of the ledger backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// The collection route on the backend.
const ASSETS_PATH: &str = "assets";

/// Read and write access to the backend's asset collection.
///
/// Responses to writes are ignored beyond success or failure.
#[async_trait]
pub trait AssetApi: Send + Sync {
    /// Get every asset in the order the backend returns them.
    async fn list(&self) -> Result<Vec<Asset>, Error>;

    /// Create a new asset.
    async fn create(&self, asset: &Asset) -> Result<(), Error>;

    /// Replace the asset with the same dealer ID as `asset`.
    async fn update(&self, asset: &Asset) -> Result<(), Error>;

    /// Delete the asset with `dealer_id`.
    async fn delete(&self, dealer_id: &str) -> Result<(), Error>;
}

/// An [AssetApi] that talks JSON to the backend over HTTP.
///
/// Requests have no timeout and carry no authentication.
#[derive(Debug, Clone)]
pub struct HttpAssetApi {
    client: Client,
    base_url: Url,
}

impl HttpAssetApi {
    /// Create a client for the backend at `base_url`, e.g. "http://localhost:8080".
    ///
    /// # Errors
    /// Returns [Error::InvalidBaseUrl] if `base_url` does not parse or cannot
    /// have path segments appended to it.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let url =
            Url::parse(base_url).map_err(|_| Error::InvalidBaseUrl(base_url.to_owned()))?;

        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_owned()));
        }

        Ok(Self {
            client: Client::new(),
            base_url: url,
        })
    }

    /// The URL of the asset collection, or of a single asset if `dealer_id` is given.
    ///
    /// The dealer ID is percent-encoded as a single path segment.
    fn assets_url(&self, dealer_id: Option<&str>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push(ASSETS_PATH);

            if let Some(dealer_id) = dealer_id {
                segments.push(dealer_id);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl AssetApi for HttpAssetApi {
    async fn list(&self) -> Result<Vec<Asset>, Error> {
        let url = self.assets_url(None)?;
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let response = check_status(response)?;

        // The backend sends `null` instead of `[]` when it has no assets.
        let assets: Option<Vec<Asset>> = response
            .json()
            .await
            .map_err(|error| Error::Decode(error.to_string()))?;

        Ok(assets.unwrap_or_default())
    }

    async fn create(&self, asset: &Asset) -> Result<(), Error> {
        let url = self.assets_url(None)?;
        tracing::debug!("POST {url} for dealer {}", asset.dealer_id);

        let response = self.client.post(url).json(asset).send().await?;
        check_status(response)?;

        Ok(())
    }

    async fn update(&self, asset: &Asset) -> Result<(), Error> {
        let url = self.assets_url(Some(&asset.dealer_id))?;
        tracing::debug!("PUT {url}");

        let response = self.client.put(url).json(asset).send().await?;
        check_status(response)?;

        Ok(())
    }

    async fn delete(&self, dealer_id: &str) -> Result<(), Error> {
        let url = self.assets_url(Some(dealer_id))?;
        tracing::debug!("DELETE {url}");

        let response = self.client.delete(url).send().await?;
        check_status(response)?;

        Ok(())
    }
}

fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status(status.as_u16()))
    }
}
