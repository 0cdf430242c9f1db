//! Span helpers for calls to the proxy.

/// Create a span for an outgoing HTTP call to an external service.
///
/// `http.status_code` and `request_id` start empty and are recorded once
/// known.
///
/// # Example
/// ```ignore
/// let span = external_http_span!("identicole-proxy", "POST", url.as_str());
/// async {
///     // send request
/// }.instrument(span).await;
/// ```
#[macro_export]
macro_rules! external_http_span {
    ($service:expr, $method:expr, $url:expr) => {
        tracing::info_span!(
            "http.client",
            service.name = $service,
            http.method = $method,
            http.url = $url,
            http.status_code = tracing::field::Empty,
            request_id = tracing::field::Empty
        )
    };
}
