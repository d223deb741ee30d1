use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{mime, FromRequest, HttpMessage, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Upper bound on accepted request bodies
const MAX_BODY_BYTES: usize = 64 * 1024;

/// JSON body extractor with the service's error contract.
///
/// A body declared as anything but JSON (`application/json` or a `+json`
/// type) is rejected with 415 `UNSUPPORTED_MEDIA_TYPE`; a request without a
/// `Content-Type` is parsed as JSON. Bodies that are not JSON at all are
/// rejected with 400 `BAD_REQUEST`. Well-formed JSON that does not fit `T`
/// (missing field, wrong type, unparseable date, number out of range) is
/// rejected with 422 `VALIDATION_ERROR` naming the offending field where
/// it can be found.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let media_type = check_media_type(req);
        let mut payload = payload.take();

        Box::pin(async move {
            media_type?;

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    debug!(trace_id = %trace_ctx::trace_id(), error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_ctx::trace_id(),
                    error = %e,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                json_error_to_app_error(&e, &body)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn check_media_type(req: &HttpRequest) -> Result<(), AppError> {
    let is_json = match req.mime_type() {
        Ok(None) => true,
        Ok(Some(m)) => {
            m.type_() == mime::APPLICATION
                && (m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        }
        Err(_) => false,
    };

    if is_json {
        Ok(())
    } else {
        let declared = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("<invalid>");
        Err(AppError::unsupported_media_type(format!(
            "Expected application/json, got '{declared}'"
        )))
    }
}

fn json_error_to_app_error(error: &JsonError, body: &[u8]) -> AppError {
    match error.classify() {
        Category::Data => AppError::invalid(ErrorCode::ValidationError, data_error_detail(error)),
        Category::Syntax if error.to_string().starts_with("number out of range") => {
            let detail = match key_before(body, error.line(), error.column()) {
                Some(field) => format!("{field}: number out of range"),
                None => "number out of range".to_string(),
            };
            AppError::invalid(ErrorCode::ValidationError, detail)
        }
        _ => AppError::bad_request(ErrorCode::BadRequest, classify_json_error(error)),
    }
}

/// Name of the nearest object key before `line`/`column` (serde_json's
/// 1-based line, byte column within that line).
fn key_before(body: &[u8], line: usize, column: usize) -> Option<String> {
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    let end = (line_start + column).min(body.len());
    let prefix = std::str::from_utf8(body.get(..end)?).ok()?;

    let before_colon = prefix[..prefix.rfind(':')?].trim_end();
    let quoted = before_colon.strip_suffix('"')?;
    let open = quoted.rfind('"')?;
    Some(quoted[open + 1..].to_string())
}

/// serde's own message ("missing field `amount`"), without the position suffix
fn data_error_detail(error: &JsonError) -> String {
    let msg = error.to_string();
    match msg.rfind(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}

/// Classify a serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => "Invalid JSON: wrong types for one or more fields".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
