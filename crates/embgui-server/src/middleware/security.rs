//! Response headers guarding the rendered pages.

use axum::http::HeaderValue;
use axum::http::header::{
    CONTENT_SECURITY_POLICY, HeaderName, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::set_header::SetResponseHeaderLayer;

/// Pages carry inline `style` attributes on buttons and may link their
/// stylesheet from a CDN. Forms built by the page helpers only post back to
/// the serving origin.
pub(crate) const PAGE_POLICY: &str = "default-src 'self'; \
                                      style-src 'self' 'unsafe-inline' https:; \
                                      img-src 'self' data:; \
                                      form-action 'self'; \
                                      frame-ancestors 'none'";

type HeaderLayer = SetResponseHeaderLayer<HeaderValue>;

/// Layer stack applied to every response from the router.
pub(crate) type SecurityHeaders =
    ServiceBuilder<Stack<HeaderLayer, Stack<HeaderLayer, Stack<HeaderLayer, Identity>>>>;

fn header(name: HeaderName, value: &'static str) -> HeaderLayer {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Build the page policy, nosniff and frame-deny header layers.
pub(crate) fn security_headers() -> SecurityHeaders {
    ServiceBuilder::new()
        .layer(header(CONTENT_SECURITY_POLICY, PAGE_POLICY))
        .layer(header(X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(header(X_FRAME_OPTIONS, "DENY"))
}
