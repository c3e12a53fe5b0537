//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Trace layer with the default server-error classifier.
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates the tracing middleware for HTTP requests.
///
/// Opens a span per request (method, URI, version) and logs the response
/// status with latency in milliseconds, both at `INFO`.
///
/// ```text
/// INFO request{method=POST uri=/api/shorten version=HTTP/1.1}: Response 200 OK in 3ms
/// ```
pub fn layer() -> HttpTraceLayer {
    let make_span = DefaultMakeSpan::new().level(Level::INFO);
    let on_response = DefaultOnResponse::new()
        .level(Level::INFO)
        .latency_unit(LatencyUnit::Millis);

    TraceLayer::new_for_http()
        .make_span_with(make_span)
        .on_response(on_response)
}
