//! Middleware for logging requests and responses.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of bytes of a request or response body to log at the `info`
/// level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The form fields whose values are never written to the logs.
const REDACTED_FIELDS: [&str; 1] = ["MPIN"];

const REDACTED_VALUE: &str = "********";

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
/// The MPIN field is redacted from form bodies and from the inputs of
/// rendered HTML.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = match extract_request_body_text(request).await {
        Ok(extracted) => extracted,
        Err(response) => return response,
    };

    if is_form_write(&parts) {
        let display_text = REDACTED_FIELDS
            .iter()
            .fold(body_text.clone(), |text, field| redact_field(&text, field));
        log_request(&parts, &display_text);
    } else {
        log_request(&parts, &body_text);
    }

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            log_response(&parts, &response_display_text(&String::from_utf8_lossy(&bytes)));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            Response::from_parts(parts, Body::empty())
        }
    }
}

fn is_form_write(parts: &axum::http::request::Parts) -> bool {
    let is_write = parts.method == Method::POST || parts.method == Method::PUT;
    let is_form = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    is_write && is_form
}

/// Replace the value of every `field_name` entry in the url-encoded form text.
fn redact_field(form_text: &str, field_name: &str) -> String {
    let prefix = format!("{field_name}=");

    form_text
        .split('&')
        .map(|pair| {
            if pair.starts_with(&prefix) {
                format!("{prefix}{REDACTED_VALUE}")
            } else {
                pair.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// The response body as it is written to the logs.
fn response_display_text(body: &str) -> String {
    REDACTED_FIELDS
        .iter()
        .fold(body.to_owned(), |text, field| redact_input_value(&text, field))
}

/// Replace the `value` attribute of every HTML input named `field_name`.
fn redact_input_value(html: &str, field_name: &str) -> String {
    let name_attribute = format!(" name=\"{field_name}\"");
    let mut redacted = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find("<input") {
        let Some(length) = rest[start..].find('>') else {
            break;
        };
        let end = start + length + 1;
        let tag = &rest[start..end];

        redacted.push_str(&rest[..start]);
        if tag.contains(&name_attribute) {
            redacted.push_str(&mask_value_attribute(tag));
        } else {
            redacted.push_str(tag);
        }

        rest = &rest[end..];
    }

    redacted.push_str(rest);
    redacted
}

// Attribute values are escaped when rendered, so the first quote after
// `value="` closes the value.
fn mask_value_attribute(tag: &str) -> String {
    const VALUE_ATTRIBUTE: &str = " value=\"";

    let Some(start) = tag.find(VALUE_ATTRIBUTE) else {
        return tag.to_owned();
    };
    let value_start = start + VALUE_ATTRIBUTE.len();
    let Some(value_length) = tag[value_start..].find('"') else {
        return tag.to_owned();
    };

    format!(
        "{}{REDACTED_VALUE}{}",
        &tag[..value_start],
        &tag[value_start + value_length..]
    )
}

async fn extract_request_body_text(
    request: Request,
) -> Result<(axum::http::request::Parts, String), Response> {
    let (parts, body) = request.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => Ok((parts, String::from_utf8_lossy(&bytes).to_string())),
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            Err(StatusCode::BAD_REQUEST.into_response())
        }
    }
}

/// Cut `body` to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a
/// character.
fn truncate(body: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(body.len());
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("Received request: {parts:#?}\nbody: {:}...", truncate(body));
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("Sending response: {parts:#?}\nbody: {:}...", truncate(body));
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}
