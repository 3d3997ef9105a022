//! Request instrumentation middleware.
//!
//! Times the wrapped handler, derives tags from the request and response,
//! and hands one `request` point to the [`Recorder`]. The recorder spawns the
//! write, so the response goes back to the client without waiting on the
//! backend.

use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};

use monit_core::{FieldValue, Recorder, Tags};

/// Measurement name for per-request points.
pub const REQUEST_MEASUREMENT: &str = "request";

/// Layer [`request_monitor`] onto every route of `router`.
pub fn with_request_monitor<S>(router: Router<S>, recorder: Recorder) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(recorder, request_monitor))
}

/// `from_fn_with_state` middleware body.
pub async fn request_monitor(
    State(recorder): State<Recorder>,
    request: Request,
    next: Next,
) -> Response {
    // The request moves into the handler; keep what tagging needs.
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    if recorder.is_enabled() {
        let tags = tags_for(&path, &method, response.status().as_u16());
        // Float field, like every other `request` point.
        let value = FieldValue::Float(duration_millis(elapsed) as f64);
        recorder.record_with_tags(REQUEST_MEASUREMENT, value, tags);
    }

    response
}

/// Whole milliseconds, truncated.
pub fn duration_millis(d: Duration) -> u64 {
    (d.as_nanos() / 1_000_000) as u64
}

/// `path`, `request_method` and `response_code` tags for one request.
pub fn tags_for(path: &str, method: &str, status: u16) -> Tags {
    let mut tags = Tags::new();
    tags.insert("path".to_string(), scrub_path(path));
    tags.insert("request_method".to_string(), method.to_string());
    tags.insert("response_code".to_string(), status.to_string());
    tags
}

/// Replace every run of ASCII digits with `:id`.
///
/// `/users/42` and `/users/7` both become `/users/:id`; digits inside a
/// segment are replaced in place (`/v2/item99x` -> `/v:id/item:idx`).
pub fn scrub_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_digits = false;
    for c in path.chars() {
        if c.is_ascii_digit() {
            if !in_digits {
                out.push_str(":id");
                in_digits = true;
            }
        } else {
            out.push(c);
            in_digits = false;
        }
    }
    out
}
