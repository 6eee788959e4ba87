//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{client::AssetApi, editor::Editor, store::AssetStore};

/// The state of the web server.
///
/// Each instance owns its own store and editor, nothing is shared between
/// two instances.
#[derive(Clone)]
pub struct AppState {
    /// The cached asset list and the backend it is synced with.
    pub store: AssetStore,

    /// The asset form's draft.
    pub editor: Arc<Mutex<Editor>>,
}

impl AppState {
    /// Create a new [AppState] backed by `api`.
    ///
    /// The store starts out empty and loading, call [AssetStore::refresh] to
    /// fetch the first list.
    pub fn new(api: Arc<dyn AssetApi>) -> Self {
        Self {
            store: AssetStore::new(api),
            editor: Arc::new(Mutex::new(Editor::new())),
        }
    }
}
