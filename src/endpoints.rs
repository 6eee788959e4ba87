//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/assets/{dealer_id}', use [format_endpoint].

use reqwest::Url;

/// The root route which redirects to the assets page.
pub const ROOT: &str = "/";
/// The page for listing, creating and editing assets.
pub const ASSETS_VIEW: &str = "/assets";

/// The route for pushing field edits to the current draft.
pub const DRAFT: &str = "/api/draft";
/// The route for submitting the current draft.
pub const SUBMIT_DRAFT: &str = "/api/draft/submit";
/// The route for cancelling an edit.
pub const CANCEL_DRAFT: &str = "/api/draft/cancel";
/// The route for re-fetching the asset list.
pub const REFRESH_ASSETS: &str = "/api/refresh";
/// The route for starting to edit an asset.
pub const EDIT_ASSET: &str = "/api/assets/{dealer_id}/edit";
/// The route for deleting an asset.
pub const DELETE_ASSET: &str = "/api/assets/{dealer_id}";

/// Only used to borrow [Url]'s path segment encoding.
const SEGMENT_ENCODING_BASE: &str = "http://localhost";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a path segment that starts with a left brace and ends with
/// a right brace. For example, in the endpoint path '/assets/{dealer_id}',
/// '{dealer_id}' is the parameter.
///
/// `id` is percent-encoded by [Url] so that it stays a single path segment,
/// the same way the backend client encodes it.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Ok(mut url) = Url::parse(SEGMENT_ENCODING_BASE) else {
        return endpoint_path.to_owned();
    };

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear();

        for segment in endpoint_path.trim_start_matches('/').split('/') {
            if segment.starts_with('{') && segment.ends_with('}') {
                segments.push(id);
            } else {
                segments.push(segment);
            }
        }
    }

    url.path().to_owned()
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::ASSETS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DRAFT);
        assert_endpoint_is_valid_uri(endpoints::SUBMIT_DRAFT);
        assert_endpoint_is_valid_uri(endpoints::CANCEL_DRAFT);
        assert_endpoint_is_valid_uri(endpoints::REFRESH_ASSETS);
        assert_endpoint_is_valid_uri(endpoints::EDIT_ASSET);
        assert_endpoint_is_valid_uri(endpoints::DELETE_ASSET);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", "D1");

        assert_eq!(formatted_path, "/hello/D1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", "D1");

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::EDIT_ASSET, "D1");

        assert_eq!(formatted_path, "/api/assets/D1/edit");
    }

    #[test]
    fn encodes_reserved_characters() {
        let formatted_path = format_endpoint(endpoints::DELETE_ASSET, "D 1/ü");

        assert_eq!(formatted_path, "/api/assets/D%201%2F%C3%BC");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn encodes_like_backend_client() {
        let mut url = reqwest::Url::parse("http://localhost").unwrap();
        url.path_segments_mut()
            .unwrap()
            .clear()
            .extend(["api", "assets", "a?b#c%d"]);

        assert_eq!(format_endpoint(endpoints::DELETE_ASSET, "a?b#c%d"), url.path());
    }

    #[test]
    fn root_is_unchanged() {
        assert_eq!(format_endpoint(endpoints::ROOT, "D1"), "/");
    }
}
