//! The cached asset list and the writes that keep it in sync with the backend.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Error, asset::Asset, client::AssetApi};

/// The state of an [AssetStore] at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    /// The assets from the last successful refresh, in backend order.
    pub assets: Vec<Asset>,
    /// Whether a refresh is in flight.
    pub loading: bool,
    /// Why the most recent refresh failed, if it did.
    pub error: Option<String>,
}

impl Default for StoreSnapshot {
    /// A store starts out loading since the first refresh is expected to be
    /// started straight away.
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Holds the asset list and mediates every call to the backend.
///
/// Writes never patch the cached list. A successful write is followed by a
/// full refresh, so the list only ever holds what the backend last returned.
/// Concurrent refreshes are not de-duplicated and whichever settles last
/// decides the cached list.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct AssetStore {
    api: Arc<dyn AssetApi>,
    state: Arc<Mutex<StoreSnapshot>>,
}

impl AssetStore {
    /// Create a store with an empty list that is marked as loading.
    pub fn new(api: Arc<dyn AssetApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(StoreSnapshot::default())),
        }
    }

    /// The cached asset list, empty until the first refresh succeeds.
    pub fn list(&self) -> Vec<Asset> {
        self.lock_state().assets.clone()
    }

    /// Whether a refresh is in flight.
    pub fn loading(&self) -> bool {
        self.lock_state().loading
    }

    /// The error message from the most recent refresh, if it failed.
    pub fn error(&self) -> Option<String> {
        self.lock_state().error.clone()
    }

    /// The list, loading flag and error, read together.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock_state().clone()
    }

    /// Get a copy of the cached asset with `dealer_id`.
    pub fn find(&self, dealer_id: &str) -> Option<Asset> {
        self.lock_state()
            .assets
            .iter()
            .find(|asset| asset.dealer_id == dealer_id)
            .cloned()
    }

    /// Replace the cached list with the backend's current list.
    ///
    /// On failure the error message is stored and the previous list is kept.
    /// The loading flag is cleared either way.
    pub async fn refresh(&self) {
        {
            let mut state = self.lock_state();
            state.loading = true;
            state.error = None;
        }

        let result = self.api.list().await;

        let mut state = self.lock_state();

        match result {
            Ok(assets) => {
                tracing::debug!("Fetched {} assets", assets.len());
                state.assets = assets;
            }
            Err(error) => {
                tracing::error!("Error fetching assets: {error}");
                state.error = Some(error.to_string());
            }
        }

        state.loading = false;
    }

    /// Create `draft` on the backend, then refresh.
    ///
    /// # Errors
    /// Returns the backend error after logging it. The list is not refreshed
    /// and the store's refresh error is left alone.
    pub async fn create(&self, draft: &Asset) -> Result<(), Error> {
        self.api
            .create(draft)
            .await
            .inspect_err(|error| {
                tracing::error!("Error creating asset {}: {error}", draft.dealer_id)
            })?;

        self.refresh().await;

        Ok(())
    }

    /// Replace the asset addressed by `draft`'s dealer ID, then refresh.
    ///
    /// # Errors
    /// Same as [AssetStore::create].
    pub async fn update(&self, draft: &Asset) -> Result<(), Error> {
        self.api
            .update(draft)
            .await
            .inspect_err(|error| {
                tracing::error!("Error updating asset {}: {error}", draft.dealer_id)
            })?;

        self.refresh().await;

        Ok(())
    }

    /// Delete the asset with `dealer_id`, then refresh.
    ///
    /// # Errors
    /// Same as [AssetStore::create].
    pub async fn delete(&self, dealer_id: &str) -> Result<(), Error> {
        self.api
            .delete(dealer_id)
            .await
            .inspect_err(|error| tracing::error!("Error deleting asset {dealer_id}: {error}"))?;

        self.refresh().await;

        Ok(())
    }

    // A panic while holding the lock cannot leave the snapshot half-written,
    // every write is a plain field assignment.
    fn lock_state(&self) -> MutexGuard<'_, StoreSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
