use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use persistence::{HandoverStore, Stores};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, security_headers_middleware, trace_id};
use crate::routes::{alerts, handovers, health, log_entries, machines, shifts};
use crate::services::HandoverService;

#[derive(Clone)]
pub struct AppState {
    pub handovers: HandoverService,
    pub stores: Stores,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, stores: Stores) -> Router {
    let config = Arc::new(config);

    let handover_store: Arc<dyn HandoverStore> = stores.handovers.clone();
    let handovers_service = HandoverService::new(handover_store, config.approval.clone());

    let state = AppState {
        handovers: handovers_service,
        stores,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Versioned API routes
    let api_routes = Router::new()
        // Handover lifecycle (v1)
        .route(
            "/api/v1/handovers",
            post(handovers::create_handover).get(handovers::list_handovers),
        )
        .route(
            "/api/v1/handovers/:id",
            get(handovers::get_handover).patch(handovers::transition_handover),
        )
        // Shift log entries (v1)
        .route(
            "/api/v1/log-entries",
            get(log_entries::list_log_entries).post(log_entries::create_log_entry),
        )
        // Machines (v1)
        .route("/api/v1/machines", get(machines::list_machines))
        .route("/api/v1/machines/:id", patch(machines::update_machine))
        // Alerts (v1)
        .route(
            "/api/v1/alerts",
            get(alerts::list_alerts).post(alerts::create_alert),
        )
        .route("/api/v1/alerts/:id/resolve", post(alerts::resolve_alert))
        // Shifts (v1)
        .route("/api/v1/shifts", get(shifts::list_shifts))
        .route("/api/v1/shifts/current", get(shifts::current_shift));

    // Public routes (no versioning)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
