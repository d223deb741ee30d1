//! Request logging.
//!
//! Opens a `request` span around the downstream service (so handler and
//! repository logs carry the trace id) and emits one `request_completed`
//! event inside it once the response status is known. Must be wrapped inside
//! `RequestTrace`, which stores the [`TraceId`] this middleware reads:
//!
//! App::new()
//!     .wrap(RequestLog)
//!     .wrap(RequestTrace)   // outermost: runs first

use std::time::{Duration, Instant};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{error, info, info_span, warn, Instrument, Level, Span};

use super::request_trace::TraceId;

pub struct RequestLog;

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware { service }))
    }
}

pub struct RequestLogMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = request_span(&req);
        let started = Instant::now();
        let fut = self.service.call(req);

        Box::pin(
            async move {
                let result = fut.await;
                let status = match &result {
                    Ok(res) => res.status(),
                    Err(err) => err.as_response_error().status_code(),
                };
                log_completion(status, started.elapsed());
                result
            }
            .instrument(span),
        )
    }
}

fn request_span(req: &ServiceRequest) -> Span {
    let trace_id = req
        .extensions()
        .get::<TraceId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "untraced".to_owned());

    info_span!(
        "request",
        trace_id = %trace_id,
        http.method = %req.method(),
        url.path = %req.path(),
        url.query = %req.query_string()
    )
}

/// Server errors log at ERROR, client errors at WARN, everything else at INFO.
pub fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

fn log_completion(status: StatusCode, elapsed: Duration) {
    let status_code = status.as_u16();
    let duration_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    let level = completion_level(status);

    if level == Level::ERROR {
        error!(http.status_code = status_code, duration_us, "request_completed");
    } else if level == Level::WARN {
        warn!(http.status_code = status_code, duration_us, "request_completed");
    } else {
        info!(http.status_code = status_code, duration_us, "request_completed");
    }
}
