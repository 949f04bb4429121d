use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::Instrument;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Inbound id when present and non-blank, otherwise `req-<unix nanos>`.
fn resolve_request_id(inbound: Option<&HeaderValue>) -> HeaderValue {
    if let Some(v) = inbound {
        if v.to_str().is_ok_and(|s| !s.trim().is_empty()) {
            return v.clone();
        }
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    HeaderValue::from_str(&format!("req-{nanos}"))
        .unwrap_or_else(|_| HeaderValue::from_static("req-unknown"))
}

/// Tags every response with `X-Request-Id` and scopes handler logs to it.
pub async fn request_id(req: Request<Body>, next: Next) -> Response {
    let id = resolve_request_id(req.headers().get(&REQUEST_ID_HEADER));
    let span = tracing::info_span!(
        "request",
        request_id = id.to_str().unwrap_or_default(),
        method = %req.method(),
        path = %req.uri().path()
    );

    let mut res = next.run(req).instrument(span).await;
    res.headers_mut().insert(REQUEST_ID_HEADER.clone(), id);
    res
}
