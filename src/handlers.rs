use crate::errors::AppError;
use crate::goals::{create_goal, delete_goal, filter_goals, parse_status_filter, toggle_goal_status, update_goal};
use crate::habits::{create_habit, delete_habit, habit_summaries, toggle_check, update_habit};
use crate::models::{
    CheckResponse, ExportBundle, Goal, GoalInput, GoalQuery, HabitInput, HabitSummary,
    HeatmapQuery, HeatmapResponse, ImportSummary, Note, NoteInput, NoteQuery, OverviewResponse,
};
use crate::notes::{all_tags, create_note, delete_note, filter_notes, update_note};
use crate::overview::build_overview;
use crate::state::AppState;
use crate::streak::{build_heatmap, compute_streak, max_checks};
use crate::transfer::{apply_import, clear_all, export_bundle, export_file_name, validate_import};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use chrono::{Datelike, Local, NaiveDate, SecondsFormat, Utc};
use serde_json::Value;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let overview = state.read(build_overview).await;
    Html(render_index(&overview))
}

pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    Json(state.read(build_overview).await)
}

pub async fn list_goals(
    State(state): State<AppState>,
    Query(query): Query<GoalQuery>,
) -> Result<Json<Vec<Goal>>, AppError> {
    let status = parse_status_filter(query.status.as_deref())?;
    Ok(Json(state.read(|data| filter_goals(&data.goals, status)).await))
}

pub async fn add_goal(
    State(state): State<AppState>,
    Json(input): Json<GoalInput>,
) -> Result<(StatusCode, Json<Goal>), AppError> {
    let stamp = timestamp_now();
    let goal = state.mutate(|data| create_goal(data, input, &stamp)).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn edit_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<GoalInput>,
) -> Result<Json<Goal>, AppError> {
    let stamp = timestamp_now();
    let goal = state.mutate(|data| update_goal(data, &id, input, &stamp)).await?;
    Ok(Json(goal))
}

pub async fn remove_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.mutate(|data| delete_goal(data, &id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Goal>, AppError> {
    let stamp = timestamp_now();
    let goal = state.mutate(|data| toggle_goal_status(data, &id, &stamp)).await?;
    Ok(Json(goal))
}

pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<NoteQuery>,
) -> Json<Vec<Note>> {
    let notes = state
        .read(|data| filter_notes(&data.notes, query.q.as_deref(), query.tag.as_deref()))
        .await;
    Json(notes)
}

pub async fn list_note_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.read(|data| all_tags(&data.notes)).await)
}

pub async fn add_note(
    State(state): State<AppState>,
    Json(input): Json<NoteInput>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let stamp = timestamp_now();
    let note = state.mutate(|data| create_note(data, input, &stamp)).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn edit_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<NoteInput>,
) -> Result<Json<Note>, AppError> {
    let stamp = timestamp_now();
    let note = state.mutate(|data| update_note(data, &id, input, &stamp)).await?;
    Ok(Json(note))
}

pub async fn remove_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.mutate(|data| delete_note(data, &id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitSummary>> {
    let today = today();
    Json(state.read(|data| habit_summaries(&data.habits, today)).await)
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(input): Json<HabitInput>,
) -> Result<(StatusCode, Json<HabitSummary>), AppError> {
    let stamp = timestamp_now();
    let habit = state.mutate(|data| create_habit(data, input, &stamp)).await?;
    Ok((StatusCode::CREATED, Json(crate::habits::summarize(&habit, today()))))
}

pub async fn edit_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<HabitInput>,
) -> Result<Json<HabitSummary>, AppError> {
    let stamp = timestamp_now();
    let habit = state.mutate(|data| update_habit(data, &id, input, &stamp)).await?;
    Ok(Json(crate::habits::summarize(&habit, today())))
}

pub async fn remove_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.mutate(|data| delete_habit(data, &id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn check_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CheckResponse>, AppError> {
    let today = today();
    let stamp = timestamp_now();
    let (habit, checked) = state
        .mutate(|data| toggle_check(data, &id, today, &stamp))
        .await?;

    Ok(Json(CheckResponse {
        streak: compute_streak(&habit.check_dates),
        id: habit.id,
        checked,
    }))
}

/// Month view over all habits; `month` is zero based and both parameters
/// default to the current month.
pub async fn get_heatmap(
    State(state): State<AppState>,
    Query(query): Query<HeatmapQuery>,
) -> Result<Json<HeatmapResponse>, AppError> {
    let today = today();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month0());
    if month > 11 {
        return Err(AppError::bad_request("month must be between 0 and 11"));
    }

    let cells = state
        .read(|data| {
            build_heatmap(
                data.habits.iter().map(|habit| habit.check_dates.as_slice()),
                year,
                month,
            )
        })
        .await;
    if cells.is_empty() {
        return Err(AppError::bad_request(format!("year {year} is out of range")));
    }

    Ok(Json(HeatmapResponse {
        year,
        month,
        max_checks: max_checks(&cells),
        cells,
    }))
}

pub async fn export_data(State(state): State<AppState>) -> impl IntoResponse {
    let stamp = timestamp_now();
    let bundle: ExportBundle = state.read(|data| export_bundle(data, &stamp)).await;
    let disposition = format!("attachment; filename=\"{}\"", export_file_name(Local::now()));
    ([(header::CONTENT_DISPOSITION, disposition)], Json(bundle))
}

pub async fn import_data(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ImportSummary>, AppError> {
    let bundle = validate_import(payload)?;
    let summary = state.mutate(|data| Ok(apply_import(data, bundle))).await?;
    Ok(Json(summary))
}

pub async fn clear_data(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .mutate(|data| {
            clear_all(data);
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
