pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Generate Questions tab
        .route(
            "/api/v1/questions/round",
            post(handlers::handle_round_questions),
        )
        .route("/api/v1/questions/all", post(handlers::handle_all_rounds))
        // Practice & Feedback tab
        .route(
            "/api/v1/practice/question",
            get(handlers::handle_current_question).post(handlers::handle_random_question),
        )
        .route(
            "/api/v1/practice/feedback",
            post(handlers::handle_feedback),
        )
        .with_state(state)
}
