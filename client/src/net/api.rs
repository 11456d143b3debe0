//! HTTP helpers for the school REST backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since every call site runs
//! behind a browser-only spawn.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified as one `FetchError` variant. Non-2xx
//! responses carry the body's `message` field when the backend provided
//! one; transport and decode failures carry their own description.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::result::FetchError;
#[cfg(any(test, feature = "hydrate"))]
use records::result::error_message_from_body;
#[cfg(feature = "hydrate")]
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fetch the startup session from this app's own server.
/// Returns `None` on the server or when the endpoint is unreachable; the
/// caller falls back to the default session.
pub async fn fetch_session() -> Option<records::session::Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/session").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<records::session::Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn generic_failure(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Classify a non-2xx response from its status and body text.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> FetchError {
    FetchError::Http { status, message: error_message_from_body(body, &generic_failure(status)) }
}

#[cfg(feature = "hydrate")]
async fn check_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, FetchError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

/// GET a JSON document.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let resp = check_ok(resp).await?;
        resp.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(FetchError::Network("not available on server".to_owned()))
    }
}

/// GET a collection and project every record into its view row.
pub async fn fetch_rows<Raw, Row>(
    url: &str,
    project: impl Fn(Raw) -> Row,
) -> Result<Vec<Row>, FetchError>
where
    Raw: DeserializeOwned,
{
    let raw: Vec<Raw> = fetch_json(url).await?;
    Ok(raw.into_iter().map(project).collect())
}

/// POST a JSON payload. 2xx is success; anything else is an error with the
/// backend's message.
#[cfg(feature = "hydrate")]
pub async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<(), FetchError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check_ok(resp).await.map(|_| ())
}

#[cfg(not(feature = "hydrate"))]
pub async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<(), FetchError> {
    let _ = (url, payload);
    Err(FetchError::Network("not available on server".to_owned()))
}

/// PUT a JSON payload.
#[cfg(feature = "hydrate")]
pub async fn put_json<T: Serialize>(url: &str, payload: &T) -> Result<(), FetchError> {
    let resp = gloo_net::http::Request::put(url)
        .json(payload)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check_ok(resp).await.map(|_| ())
}

#[cfg(not(feature = "hydrate"))]
pub async fn put_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<(), FetchError> {
    let _ = (url, payload);
    Err(FetchError::Network("not available on server".to_owned()))
}

/// The image part of a multipart submit. Only the browser has real files;
/// the SSR stub keeps one signature across both feature sets.
#[cfg(feature = "hydrate")]
pub type ImageFile = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type ImageFile = ();

/// POST multipart form data: the text fields plus an optional image part.
/// Used by the student and teacher forms.
#[cfg(feature = "hydrate")]
pub async fn post_multipart(
    url: &str,
    fields: &[(&'static str, String)],
    image: Option<ImageFile>,
) -> Result<(), FetchError> {
    let form = web_sys::FormData::new()
        .map_err(|_| FetchError::Network("could not build form data".to_owned()))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| FetchError::Network("could not build form data".to_owned()))?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("img", &file, &file.name())
            .map_err(|_| FetchError::Network("could not attach image".to_owned()))?;
    }
    let resp = gloo_net::http::Request::post(url)
        .body(form)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check_ok(resp).await.map(|_| ())
}

#[cfg(not(feature = "hydrate"))]
pub async fn post_multipart(
    url: &str,
    fields: &[(&'static str, String)],
    image: Option<ImageFile>,
) -> Result<(), FetchError> {
    let _ = (url, fields, image);
    Err(FetchError::Network("not available on server".to_owned()))
}
