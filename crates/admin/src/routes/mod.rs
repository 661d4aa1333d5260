//! HTTP routes for the admin service.

mod assistant;
mod auth;
mod case_studies;
mod facts;
mod health;
mod logos;
mod seo;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the complete admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .route(
            "/auth/session",
            get(auth::current_session).post(auth::login),
        )
        .route("/auth/logout", post(auth::logout))
        .route("/api/logos", get(logos::list).post(logos::create))
        .route(
            "/api/logos/{id}",
            get(logos::get_one).put(logos::update).delete(logos::delete),
        )
        .route(
            "/api/case-studies",
            get(case_studies::list).post(case_studies::create),
        )
        .route(
            "/api/case-studies/{id}",
            get(case_studies::get_one)
                .put(case_studies::update)
                .delete(case_studies::delete),
        )
        .route("/api/facts", get(facts::list).post(facts::create))
        .route("/api/facts/{id}", axum::routing::delete(facts::delete))
        .route("/api/ai/facts/approve", post(facts::approve))
        .route("/api/assistant/generate", post(assistant::generate))
        .route("/api/seo/check", post(seo::check))
}
