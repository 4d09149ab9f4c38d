use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use tailmate_core::error::fallback;
use tailmate_core::health::healthz;
use tailmate_core::middleware::{cors_layer, propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    doctor_status::{create_doctor_status, get_doctor_status},
    donation::{create_donation_request, list_donation_requests, update_donation_request},
    health::readyz,
    profile::{create_profile, get_profile, update_profile},
    store::clear_store,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Profiles
        .route("/profiles", post(create_profile))
        .route("/profiles/{profile_id}", get(get_profile))
        .route("/profiles/{profile_id}", put(update_profile))
        // Donation requests
        .route("/donation_requests", post(create_donation_request))
        .route("/donation_requests", get(list_donation_requests))
        .route("/donation_requests/{donation_id}", put(update_donation_request))
        // Doctor status
        .route("/doctor_status", post(create_doctor_status))
        .route("/doctor_status/{doctor_id}", get(get_doctor_status))
        // Test support
        .route("/test/clear", post(clear_store))
        .fallback(fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(propagate_request_id_layer()),
        )
}
