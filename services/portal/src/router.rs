use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use portico_core::health::{healthz, readyz};
use portico_core::middleware::request_id_layer;

use crate::handlers::{
    access::validate_code,
    invoice::{create_invoice, delete_invoice, get_invoice},
    proposal::{create_proposal, delete_proposal, get_proposal},
    public::{get_public_invoice, get_public_proposal},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Public access gateway
        .route("/access/validate", post(validate_code))
        .route("/public/proposals/{id}", get(get_public_proposal))
        .route("/public/invoices/{id}", get(get_public_invoice))
        // Proposals (staff)
        .route("/proposals", post(create_proposal))
        .route("/proposals/{id}", get(get_proposal))
        .route("/proposals/{id}", delete(delete_proposal))
        // Invoices (staff)
        .route("/invoices", post(create_invoice))
        .route("/invoices/{id}", get(get_invoice))
        .route("/invoices/{id}", delete(delete_invoice))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
