//! Defines the endpoints that drive the asset form: field edits, submitting
//! and cancelling.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    asset::AssetForm,
    assets::{AssetEditorState, WriteAction},
    editor::Submission,
};

/// A route handler that applies the posted fields to the current draft.
///
/// Responds with no content, the form already shows what was typed.
pub async fn update_draft_endpoint(
    State(state): State<AssetEditorState>,
    Form(form): Form<AssetForm>,
) -> Response {
    match state.lock_editor() {
        Ok(mut editor) => {
            editor.apply_form(&form);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// A route handler that submits the draft, creating or updating an asset.
///
/// The form is reset before the write is sent. The response is the
/// re-rendered editor with an alert saying whether the write succeeded.
pub async fn submit_draft_endpoint(
    State(state): State<AssetEditorState>,
    Form(form): Form<AssetForm>,
) -> Response {
    let submission = match state.lock_editor() {
        Ok(mut editor) => {
            editor.apply_form(&form);
            editor.submit()
        }
        Err(error) => return error.into_alert_response(),
    };

    match submission {
        Submission::Create(asset) => {
            let result = state.store.create(&asset).await;
            state.write_response(WriteAction::Create, &asset.dealer_id, result)
        }
        Submission::Update(asset) => {
            let result = state.store.update(&asset).await;
            state.write_response(WriteAction::Update, &asset.dealer_id, result)
        }
    }
}

/// A route handler that abandons an edit and returns the form to create mode.
///
/// Nothing is sent to the backend.
pub async fn cancel_draft_endpoint(State(state): State<AssetEditorState>) -> Response {
    match state.lock_editor() {
        Ok(mut editor) => editor.cancel(),
        Err(error) => return error.into_alert_response(),
    }

    state.editor_response()
}
