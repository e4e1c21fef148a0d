//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets a `DEBUG` span carrying method, URI and HTTP version, so
/// lines logged by the auth gate and handlers are tagged with the request they
/// belong to. Status and latency are recorded at `DEBUG` when the response is
/// produced; the pipeline's own `INFO`/`WARN`/`ERROR` lines stay the primary
/// record at the default threshold.
///
/// # Example Logs
///
/// ```text
/// DEBUG request{method=GET uri=/user?id=42 version=HTTP/1.1}: started processing request
/// INFO  request{method=GET uri=/user?id=42 version=HTTP/1.1}: GET /user
/// DEBUG request{method=GET uri=/user?id=42 version=HTTP/1.1}: finished processing request latency=1 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::DEBUG)
                .latency_unit(LatencyUnit::Millis),
        )
}
