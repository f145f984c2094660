//! API utilities for frontend-backend communication
//!
//! Builds API URLs, attaches the cookie credentials every call needs and maps
//! transport failures into [`ApiError`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::RequestCredentials;

/// Port the REST backend listens on when no `API_BASE` was baked in.
pub const BACKEND_PORT: u16 = 8000;

pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Get the base URL for API requests
///
/// A compile-time `API_BASE` wins; otherwise the current window location is
/// used with [`BACKEND_PORT`].
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/areas/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Raw `document.cookie`, empty outside a browser.
pub fn document_cookies() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Decoded value of `name` in a `k=v; k2=v2` cookie header.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name || value.is_empty() {
            return None;
        }
        urlencoding::decode(value).ok().map(|v| v.into_owned())
    })
}

/// User-facing text for a failed response: the body's `message` when the
/// backend sent one, a generic line per status class otherwise.
pub fn status_message(status: u16, body: &str) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["message", "error", "detail"]
            .iter()
            .find_map(|k| v.get(*k).and_then(Value::as_str).map(str::to_string))
    });
    if let Some(message) = from_body.filter(|m| !m.trim().is_empty()) {
        return message;
    }
    match status {
        401 => "La sesión no es válida".to_string(),
        403 => "No tiene permiso para realizar esta acción".to_string(),
        404 => "El recurso no existe".to_string(),
        419 => "La sesión expiró, recargue la página".to_string(),
        422 => "Los datos enviados no son válidos".to_string(),
        s if s >= 500 => "Error interno del servidor".to_string(),
        _ => "La solicitud no pudo completarse".to_string(),
    }
}

fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include);
    match cookie_value(&document_cookies(), XSRF_COOKIE) {
        Some(token) => builder.header(XSRF_HEADER, &token),
        None => builder,
    }
}

/// Mutations succeed on any 2xx. The body may be empty, a bare message or
/// the stored entity; it is only logged.
async fn read_ack(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(ApiError::from)?;
    if !response.ok() {
        return Err(ApiError::Status {
            status,
            message: status_message(status, &text),
        });
    }
    if let Some(message) = ack_message(&text) {
        log::debug!("{}: {}", status, message);
    }
    Ok(())
}

/// `message` of a successful mutation reply, if the body is JSON and has one.
pub fn ack_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(ApiError::from)?;
    if !response.ok() {
        return Err(ApiError::Status {
            status,
            message: status_message(status, &text),
        });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

pub async fn get_json(path: &str) -> Result<Value, ApiError> {
    let response = with_defaults(Request::get(&api_url(path))).send().await?;
    read_body(response).await
}

/// GET with a serde_qs-encoded query string.
pub async fn get_json_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<Value, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    get_json(&format!("{}?{}", path, qs)).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_defaults(Request::post(&api_url(path))).json(body)?;
    read_ack(request.send().await?).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_defaults(Request::put(&api_url(path))).json(body)?;
    read_ack(request.send().await?).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_defaults(Request::delete(&api_url(path))).send().await?;
    read_ack(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_values_are_url_decoded() {
        let cookies = "theme=dark; XSRF-TOKEN=abc%3D%3D; user=%7B%22id%22%3A1%7D";
        assert_eq!(cookie_value(cookies, XSRF_COOKIE).as_deref(), Some("abc=="));
        assert_eq!(cookie_value(cookies, "user").as_deref(), Some("{\"id\":1}"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn empty_cookie_is_absent() {
        assert_eq!(cookie_value("user=; other=1", "user"), None);
    }

    #[test]
    fn status_message_prefers_backend_text() {
        assert_eq!(
            status_message(422, r#"{"message": "El nombre ya existe"}"#),
            "El nombre ya existe"
        );
        assert_eq!(status_message(500, "<html>"), "Error interno del servidor");
        assert_eq!(status_message(404, ""), "El recurso no existe");
    }

    #[test]
    fn any_successful_mutation_body_is_accepted() {
        assert_eq!(
            ack_message(r#"{"message": "Área creada correctamente"}"#).as_deref(),
            Some("Área creada correctamente")
        );
        assert_eq!(ack_message(r#"{"id": 4, "nombre_area": "Taller"}"#), None);
        assert_eq!(ack_message(""), None);
        assert_eq!(ack_message("OK"), None);
    }

    #[test]
    fn status_error_display_includes_code() {
        let err = ApiError::Status {
            status: 403,
            message: "No tiene permiso para realizar esta acción".into(),
        };
        assert_eq!(
            err.to_string(),
            "No tiene permiso para realizar esta acción (HTTP 403)"
        );
    }
}
