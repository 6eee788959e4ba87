//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};

use crate::{
    AppState,
    assets::{
        cancel_draft_endpoint, delete_asset_endpoint, edit_asset_endpoint, get_assets_page,
        refresh_assets_endpoint, submit_draft_endpoint, update_draft_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::ASSETS_VIEW, get(get_assets_page))
        .route(endpoints::DRAFT, put(update_draft_endpoint))
        .route(endpoints::SUBMIT_DRAFT, post(submit_draft_endpoint))
        .route(endpoints::CANCEL_DRAFT, post(cancel_draft_endpoint))
        .route(endpoints::REFRESH_ASSETS, post(refresh_assets_endpoint))
        .route(endpoints::EDIT_ASSET, post(edit_asset_endpoint))
        .route(endpoints::DELETE_ASSET, delete(delete_asset_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the assets page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::ASSETS_VIEW)
}
