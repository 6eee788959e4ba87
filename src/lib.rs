//! Asset Tracker is a web front end for managing dealer asset records held by
//! a ledger REST backend.
//!
//! The server keeps a cached copy of the backend's asset list and renders
//! HTML pages for viewing, creating, editing and deleting assets. Every write
//! is followed by a full re-fetch of the list instead of patching the cache.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod asset;
mod assets;
mod client;
mod editor;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod routing;
mod store;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use asset::{Asset, AssetField, AssetForm};
pub use client::{AssetApi, DEFAULT_API_URL, HttpAssetApi};
pub use editor::{Draft, Editor, Submission};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use store::{AssetStore, StoreSnapshot};

use crate::{alert::Alert, html::error_view, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend could not be reached or the connection failed mid-request.
    #[error("could not reach the asset backend: {0}")]
    Transport(String),

    /// The backend answered with a status code outside of 2xx.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The backend's response body was not the expected JSON.
    #[error("could not decode the backend response: {0}")]
    Decode(String),

    /// The configured backend URL cannot be used as a base for asset routes.
    #[error("invalid backend URL \"{0}\"")]
    InvalidBaseUrl(String),

    /// No cached asset has the requested dealer ID.
    ///
    /// The client should refresh the asset list, the asset may have been
    /// deleted since the page was rendered.
    #[error("no asset with the dealer ID \"{0}\"")]
    AssetNotFound(String),

    /// Could not acquire the lock on shared state.
    #[error("could not acquire the state lock")]
    LockError,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => Error::Status(status.as_u16()),
            None if value.is_decode() => Error::Decode(value.to_string()),
            None => Error::Transport(value.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::AssetNotFound(_) => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_view(
                        "Internal Server Error",
                        "500",
                        "Sorry, something went wrong.",
                        "Try again later or check the server logs",
                    ),
                )
                    .into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::AssetNotFound(dealer_id) => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not find asset",
                    &format!(
                        "The asset {dealer_id} could not be found. \
                        Try refreshing the page to see if the asset has been deleted."
                    ),
                )
                .into_html(),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_html(),
            )
                .into_response(),
        }
    }
}
