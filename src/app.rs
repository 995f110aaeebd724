use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/goals", get(handlers::list_goals).post(handlers::add_goal))
        .route(
            "/api/goals/:id",
            put(handlers::edit_goal).delete(handlers::remove_goal),
        )
        .route("/api/goals/:id/toggle", post(handlers::toggle_goal))
        .route("/api/notes", get(handlers::list_notes).post(handlers::add_note))
        .route("/api/notes/tags", get(handlers::list_note_tags))
        .route(
            "/api/notes/:id",
            put(handlers::edit_note).delete(handlers::remove_note),
        )
        .route("/api/habits", get(handlers::list_habits).post(handlers::add_habit))
        .route("/api/habits/heatmap", get(handlers::get_heatmap))
        .route(
            "/api/habits/:id",
            put(handlers::edit_habit).delete(handlers::remove_habit),
        )
        .route("/api/habits/:id/check", post(handlers::check_habit))
        .route("/api/export", get(handlers::export_data))
        .route("/api/import", post(handlers::import_data))
        .route("/api/data", delete(handlers::clear_data))
        .with_state(state)
}
