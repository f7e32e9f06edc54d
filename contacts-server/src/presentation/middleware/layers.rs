use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

pub(crate) fn apply_trace(router: Router) -> Router {
    router.layer(TraceLayer::new_for_http())
}

/// Oversized bodies surface as JSON extractor rejections, which become a
/// logged `bad_request`. The concurrency limit is shared by every route.
pub(crate) fn apply_limits(router: Router, body_limit_bytes: usize, concurrency: usize) -> Router {
    router
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(GlobalConcurrencyLimitLayer::new(concurrency))
}
