use crate::{
    AppState, create_request, delete_request, get_request, health, list_negotiations,
    list_purchase_orders, list_requests, list_suppliers, login, procurement, recent_requests,
    request_logging, summary, top_vendors, update_request,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Purchase requests
        .route("/api/requests", get(list_requests).post(create_request))
        .route(
            "/api/requests/{id}",
            get(get_request).put(update_request).delete(delete_request),
        )
        // Dashboard
        .route("/api/dashboard/summary", get(summary))
        .route("/api/dashboard/procurement", get(procurement))
        .route("/api/dashboard/vendors", get(top_vendors))
        .route("/api/dashboard/requests", get(recent_requests))
        // Catalog
        .route("/api/vendors", get(top_vendors))
        .route("/api/negotiations", get(list_negotiations))
        .route("/api/purchase-orders", get(list_purchase_orders))
        .route("/api/suppliers", get(list_suppliers))
        // Auth
        .route("/api/auth/login", post(login))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check));

    // Front-end assets (index.html for directory paths)
    let router = match state.static_dir {
        Some(ref dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_request))
        // Browser front-ends may be served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
