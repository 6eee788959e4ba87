//! Defines the per-row actions of the asset table and the reload action.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    assets::{AssetEditorState, WriteAction},
};

/// A route handler that starts editing the listed asset with `dealer_id`.
///
/// Whatever draft was in progress is discarded.
pub async fn edit_asset_endpoint(
    State(state): State<AssetEditorState>,
    Path(dealer_id): Path<String>,
) -> Response {
    let Some(asset) = state.store.find(&dealer_id) else {
        tracing::warn!("Tried to edit asset {dealer_id} which is not in the cached list");
        return Error::AssetNotFound(dealer_id).into_alert_response();
    };

    match state.lock_editor() {
        Ok(mut editor) => editor.start_edit(&asset),
        Err(error) => return error.into_alert_response(),
    }

    state.editor_response()
}

/// A route handler for deleting an asset, responds with the refreshed editor.
///
/// There is no confirmation step.
pub async fn delete_asset_endpoint(
    State(state): State<AssetEditorState>,
    Path(dealer_id): Path<String>,
) -> Response {
    let result = state.store.delete(&dealer_id).await;

    state.write_response(WriteAction::Delete, &dealer_id, result)
}

/// A route handler that re-fetches the asset list.
pub async fn refresh_assets_endpoint(State(state): State<AssetEditorState>) -> Response {
    state.store.refresh().await;

    state.editor_response()
}
