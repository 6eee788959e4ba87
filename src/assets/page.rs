//! Defines the route handler for the asset editor page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;

use crate::{
    Error,
    assets::{AssetEditorState, view::assets_page_view},
};

/// Renders the page listing every asset with the create/edit form.
///
/// htmx requests, such as the poll made while the list is loading, only get
/// the editor fragment.
pub async fn get_assets_page(
    State(state): State<AssetEditorState>,
    HxRequest(is_htmx_request): HxRequest,
) -> Result<Response, Error> {
    if is_htmx_request {
        return state.render_editor().map(IntoResponse::into_response);
    }

    let editor = state.lock_editor()?.clone();
    let snapshot = state.store.snapshot();

    Ok(assets_page_view(&snapshot, &editor).into_response())
}
