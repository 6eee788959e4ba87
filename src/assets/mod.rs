//! The asset editor: a page listing every asset next to a form for creating
//! or editing one.
//!
//! Every action route responds with the re-rendered editor so htmx can swap
//! it in place.

mod asset_endpoints;
mod draft_endpoints;
mod page;
mod view;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::FromRef,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{AppState, Error, alert::Alert, editor::Editor, store::AssetStore};

pub use asset_endpoints::{delete_asset_endpoint, edit_asset_endpoint, refresh_assets_endpoint};
pub use draft_endpoints::{cancel_draft_endpoint, submit_draft_endpoint, update_draft_endpoint};
pub use page::get_assets_page;

/// The state needed by the asset editor's route handlers.
#[derive(Clone)]
pub struct AssetEditorState {
    /// The cached asset list.
    pub store: AssetStore,
    /// The form's draft.
    pub editor: Arc<Mutex<Editor>>,
}

impl FromRef<AppState> for AssetEditorState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            editor: state.editor.clone(),
        }
    }
}

impl AssetEditorState {
    fn lock_editor(&self) -> Result<MutexGuard<'_, Editor>, Error> {
        self.editor
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire editor lock: {error}"))
            .map_err(|_| Error::LockError)
    }

    /// Render the editor from the store's and the form's current state.
    fn render_editor(&self) -> Result<Markup, Error> {
        let editor = self.lock_editor()?.clone();
        let snapshot = self.store.snapshot();

        Ok(view::asset_editor_view(&snapshot, &editor))
    }

    fn editor_response(&self) -> Response {
        match self.render_editor() {
            Ok(markup) => markup.into_response(),
            Err(error) => error.into_alert_response(),
        }
    }

    /// Render the editor along with an alert saying how a write went.
    ///
    /// A failed write does not block the form, the alert is swapped in out of
    /// band and the refresh error shown above the form is left alone.
    fn write_response(
        &self,
        action: WriteAction,
        dealer_id: &str,
        result: Result<(), Error>,
    ) -> Response {
        let (message, details) = match &result {
            Ok(()) => (format!("Asset {dealer_id} {}", action.past_tense()), String::new()),
            Err(error) => (
                format!("Could not {} asset {dealer_id}", action.verb()),
                error.to_string(),
            ),
        };

        let alert = match result {
            Ok(()) => Alert::success(&message, &details),
            Err(_) => Alert::error(&message, &details),
        };

        match self.render_editor() {
            Ok(markup) => html!((markup) (alert.into_oob_html())).into_response(),
            Err(error) => error.into_alert_response(),
        }
    }
}

/// The backend writes the editor can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
enum WriteAction {
    Create,
    Update,
    Delete,
}

impl WriteAction {
    fn verb(self) -> &'static str {
        match self {
            WriteAction::Create => "create",
            WriteAction::Update => "update",
            WriteAction::Delete => "delete",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            WriteAction::Create => "created",
            WriteAction::Update => "updated",
            WriteAction::Delete => "deleted",
        }
    }
}
