//! Test doubles for the ledger backend.

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use tokio::{net::TcpListener, sync::Notify};

use crate::{Error, asset::Asset, client::AssetApi};

/// An asset with every field filled in from `dealer_id`.
pub(crate) fn test_asset(dealer_id: &str) -> Asset {
    Asset {
        dealer_id: dealer_id.to_owned(),
        msisdn: format!("021{dealer_id}"),
        mpin: "1234".to_owned(),
        balance: "100".to_owned(),
        status: "active".to_owned(),
        transaction_amount: "0".to_owned(),
        transaction_type: "init".to_owned(),
        remarks: format!("remarks for {dealer_id}"),
    }
}

/// An in-memory [AssetApi] that can be told to fail and counts its calls.
///
/// Every call yields to the runtime once so that concurrent calls interleave.
#[derive(Debug, Default)]
pub(crate) struct FakeAssetApi {
    assets: Mutex<Vec<Asset>>,
    list_error: Mutex<Option<Error>>,
    write_error: Mutex<Option<Error>>,
    calls: AtomicUsize,
    list_gate: Mutex<Option<Arc<Notify>>>,
    list_held: Notify,
}

impl FakeAssetApi {
    pub(crate) fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets: Mutex::new(assets),
            ..Default::default()
        }
    }

    /// Make every following `list` call fail with `error`.
    pub(crate) fn fail_list(&self, error: Error) {
        *self.list_error.lock().unwrap() = Some(error);
    }

    pub(crate) fn succeed_list(&self) {
        *self.list_error.lock().unwrap() = None;
    }

    /// Make every following write fail with `error`.
    pub(crate) fn fail_writes(&self, error: Error) {
        *self.write_error.lock().unwrap() = Some(error);
    }

    /// Make the next `list` call wait until the returned gate is notified.
    pub(crate) fn hold_next_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.list_gate.lock().unwrap() = Some(gate.clone());

        gate
    }

    /// Wait until a `list` call is parked on the gate from [Self::hold_next_list].
    pub(crate) async fn list_held(&self) {
        self.list_held.notified().await;
    }

    /// The number of calls made so far, reads and writes.
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn assets(&self) -> Vec<Asset> {
        self.assets.lock().unwrap().clone()
    }

    /// Add an asset behind the store's back, as another client would.
    pub(crate) fn create_directly(&self, asset: Asset) {
        self.assets.lock().unwrap().push(asset);
    }

    async fn begin_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
    }

    fn write_error(&self) -> Option<Error> {
        self.write_error.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetApi for FakeAssetApi {
    async fn list(&self) -> Result<Vec<Asset>, Error> {
        self.begin_call().await;

        let gate = self.list_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            self.list_held.notify_one();
            gate.notified().await;
        }

        let error = self.list_error.lock().unwrap().clone();
        match error {
            Some(error) => Err(error),
            None => Ok(self.assets()),
        }
    }

    async fn create(&self, asset: &Asset) -> Result<(), Error> {
        self.begin_call().await;

        if let Some(error) = self.write_error() {
            return Err(error);
        }

        self.assets.lock().unwrap().push(asset.clone());
        Ok(())
    }

    async fn update(&self, asset: &Asset) -> Result<(), Error> {
        self.begin_call().await;

        if let Some(error) = self.write_error() {
            return Err(error);
        }

        let mut assets = self.assets.lock().unwrap();
        let existing = assets
            .iter_mut()
            .find(|existing| existing.dealer_id == asset.dealer_id)
            .ok_or(Error::Status(404))?;
        *existing = asset.clone();

        Ok(())
    }

    async fn delete(&self, dealer_id: &str) -> Result<(), Error> {
        self.begin_call().await;

        if let Some(error) = self.write_error() {
            return Err(error);
        }

        let mut assets = self.assets.lock().unwrap();
        let index = assets
            .iter()
            .position(|asset| asset.dealer_id == dealer_id)
            .ok_or(Error::Status(404))?;
        assets.remove(index);

        Ok(())
    }
}

#[derive(Debug, Clone)]
struct StubState {
    assets: Arc<Mutex<Vec<Asset>>>,
    null_list: bool,
}

/// A ledger backend served over HTTP on a loopback port.
pub(crate) struct StubBackend {
    addr: SocketAddr,
    assets: Arc<Mutex<Vec<Asset>>>,
}

impl StubBackend {
    pub(crate) async fn start(assets: Vec<Asset>) -> Self {
        Self::start_with(assets, false).await
    }

    /// Start a backend that answers `null` to list requests.
    pub(crate) async fn start_with_null_list() -> Self {
        Self::start_with(Vec::new(), true).await
    }

    async fn start_with(assets: Vec<Asset>, null_list: bool) -> Self {
        let assets = Arc::new(Mutex::new(assets));
        let router = Router::new()
            .route("/assets", get(list_assets).post(create_asset))
            .route("/assets/{dealer_id}", put(update_asset).delete(delete_asset))
            .with_state(StubState {
                assets: assets.clone(),
                null_list,
            });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind stub backend");
        let addr = listener
            .local_addr()
            .expect("could not get stub backend address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("stub backend stopped unexpectedly");
        });

        Self { addr, assets }
    }

    /// A URL on which nothing is listening.
    pub(crate) async fn unused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind a free port");
        let addr = listener.local_addr().expect("could not get address");
        drop(listener);

        format!("http://{addr}")
    }

    pub(crate) fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub(crate) fn assets(&self) -> Vec<Asset> {
        self.assets.lock().unwrap().clone()
    }
}

async fn list_assets(State(state): State<StubState>) -> Json<Option<Vec<Asset>>> {
    if state.null_list {
        return Json(None);
    }

    Json(Some(state.assets.lock().unwrap().clone()))
}

async fn create_asset(
    State(state): State<StubState>,
    Json(asset): Json<Asset>,
) -> (StatusCode, Json<Asset>) {
    state.assets.lock().unwrap().push(asset.clone());

    (StatusCode::CREATED, Json(asset))
}

async fn update_asset(
    State(state): State<StubState>,
    Path(dealer_id): Path<String>,
    Json(asset): Json<Asset>,
) -> StatusCode {
    if dealer_id != asset.dealer_id {
        return StatusCode::BAD_REQUEST;
    }

    let mut assets = state.assets.lock().unwrap();

    match assets.iter_mut().find(|existing| existing.dealer_id == dealer_id) {
        Some(existing) => {
            *existing = asset;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_asset(State(state): State<StubState>, Path(dealer_id): Path<String>) -> StatusCode {
    let mut assets = state.assets.lock().unwrap();

    match assets.iter().position(|asset| asset.dealer_id == dealer_id) {
        Some(index) => {
            assets.remove(index);
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
