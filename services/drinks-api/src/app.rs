//! Router construction

use axum::handler::Handler;
use axum::routing::{get, patch};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use roastery_auth_core::RequiredPermission;
use roastery_axum::PermissionLayer;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{self, health, method_not_allowed, not_found, ready};
use crate::permissions::{DELETE_DRINKS, GET_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};
use crate::state::AppState;

/// Build the HTTP router.
///
/// Each drinks handler is wrapped in its own `PermissionLayer`, so a path
/// serving several methods checks a different permission per method.
pub fn build_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let request_timeout = state.request_timeout();
    let guard = |permission: RequiredPermission| {
        PermissionLayer::new(state.verifier.clone(), permission)
    };

    let drinks_routes = Router::new()
        .route(
            "/drinks",
            get(handlers::list_drinks.layer(guard(GET_DRINKS)))
                .post(handlers::create_drink.layer(guard(POST_DRINKS))),
        )
        .route(
            "/drinks-detail",
            get(handlers::list_drinks_detail.layer(guard(GET_DRINKS_DETAIL))),
        )
        .route(
            "/drinks/{id}",
            patch(handlers::update_drink.layer(guard(PATCH_DRINKS)))
                .delete(handlers::delete_drink.layer(guard(DELETE_DRINKS))),
        );

    // Health routes (no timeout - must always respond quickly)
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    // Metrics route (no timeout)
    let metrics_route = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    // Build middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::new(request_timeout));

    // Fallbacks go on the merged router so every route answers with the envelope
    drinks_routes
        .layer(middleware)
        .merge(health_routes)
        .merge(metrics_route)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}
