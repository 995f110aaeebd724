use crate::errors::AppError;
use crate::models::{AppData, GOAL_CATEGORIES, Goal, GoalInput, GoalStats, GoalStatus};
use tracing::info;
use uuid::Uuid;

/// Labels written by the browser version of the tracker.
const LEGACY_CATEGORIES: [(&str, &str); 5] = [
    ("学习", "study"),
    ("工作", "work"),
    ("健康", "health"),
    ("生活", "life"),
    ("其他", "other"),
];

pub fn create_goal(data: &mut AppData, input: GoalInput, stamp: &str) -> Result<Goal, AppError> {
    let input = validate(input)?;
    let goal = Goal {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        category: input.category,
        priority: input.priority,
        status: input.status,
        description: input.description,
        created_at: stamp.to_string(),
        updated_at: stamp.to_string(),
    };
    data.goals.push(goal.clone());
    info!(id = %goal.id, "goal created");
    Ok(goal)
}

pub fn update_goal(
    data: &mut AppData,
    id: &str,
    input: GoalInput,
    stamp: &str,
) -> Result<Goal, AppError> {
    let input = validate(input)?;
    let goal = find_goal_mut(data, id)?;
    goal.title = input.title;
    goal.category = input.category;
    goal.priority = input.priority;
    goal.status = input.status;
    goal.description = input.description;
    goal.updated_at = stamp.to_string();
    info!(id, "goal updated");
    Ok(goal.clone())
}

pub fn delete_goal(data: &mut AppData, id: &str) -> Result<(), AppError> {
    let before = data.goals.len();
    data.goals.retain(|goal| goal.id != id);
    if data.goals.len() == before {
        return Err(AppError::not_found("goal", id));
    }
    info!(id, "goal deleted");
    Ok(())
}

/// Advances the goal one step: pending, in-progress, completed, then back to pending.
pub fn toggle_goal_status(data: &mut AppData, id: &str, stamp: &str) -> Result<Goal, AppError> {
    let goal = find_goal_mut(data, id)?;
    goal.status = goal.status.next();
    goal.updated_at = stamp.to_string();
    info!(id, status = goal.status.label(), "goal status changed");
    Ok(goal.clone())
}

/// `None` or `"all"` keeps every goal; anything else must name a status.
pub fn parse_status_filter(raw: Option<&str>) -> Result<Option<GoalStatus>, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some("pending") => Ok(Some(GoalStatus::Pending)),
        Some("in-progress") => Ok(Some(GoalStatus::InProgress)),
        Some("completed") => Ok(Some(GoalStatus::Completed)),
        Some(other) => Err(AppError::bad_request(format!("unknown goal status '{other}'"))),
    }
}

pub fn filter_goals(goals: &[Goal], status: Option<GoalStatus>) -> Vec<Goal> {
    goals
        .iter()
        .filter(|goal| status.is_none_or(|wanted| goal.status == wanted))
        .cloned()
        .collect()
}

pub fn goal_stats(goals: &[Goal]) -> GoalStats {
    let count = |status: GoalStatus| goals.iter().filter(|goal| goal.status == status).count();
    GoalStats {
        total: goals.len(),
        pending: count(GoalStatus::Pending),
        in_progress: count(GoalStatus::InProgress),
        completed: count(GoalStatus::Completed),
    }
}

/// Maps a category slug or a legacy label to its slug.
pub fn canonical_category(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    GOAL_CATEGORIES
        .iter()
        .copied()
        .find(|slug| *slug == raw)
        .or_else(|| {
            LEGACY_CATEGORIES
                .iter()
                .find(|(label, _)| *label == raw)
                .map(|(_, slug)| *slug)
        })
}

fn find_goal_mut<'a>(data: &'a mut AppData, id: &str) -> Result<&'a mut Goal, AppError> {
    data.goals
        .iter_mut()
        .find(|goal| goal.id == id)
        .ok_or_else(|| AppError::not_found("goal", id))
}

fn validate(mut input: GoalInput) -> Result<GoalInput, AppError> {
    input.title = input.title.trim().to_string();
    input.description = input.description.trim().to_string();

    if input.title.is_empty() {
        return Err(AppError::bad_request("goal title must not be empty"));
    }
    let Some(category) = canonical_category(&input.category) else {
        return Err(AppError::bad_request(format!(
            "category must be one of {}",
            GOAL_CATEGORIES.join(", ")
        )));
    };
    input.category = category.to_string();
    Ok(input)
}
