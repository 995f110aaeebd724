use crate::errors::AppError;
use crate::models::{
    AppData, DEFAULT_HABIT_COLOR, DEFAULT_HABIT_ICON, Habit, HabitInput, HabitStats, HabitSummary,
};
use crate::streak::{compute_streak_at, date_key, parse_day};
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

pub fn create_habit(data: &mut AppData, input: HabitInput, stamp: &str) -> Result<Habit, AppError> {
    let (title, icon, color) = validate(input)?;
    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        title,
        icon,
        color,
        check_dates: Vec::new(),
        created_at: stamp.to_string(),
        updated_at: stamp.to_string(),
    };
    data.habits.push(habit.clone());
    info!(id = %habit.id, "habit created");
    Ok(habit)
}

/// Edits the presentation fields; check-ins and creation time stay as they are.
pub fn update_habit(
    data: &mut AppData,
    id: &str,
    input: HabitInput,
    stamp: &str,
) -> Result<Habit, AppError> {
    let (title, icon, color) = validate(input)?;
    let habit = find_habit_mut(data, id)?;
    habit.title = title;
    habit.icon = icon;
    habit.color = color;
    habit.updated_at = stamp.to_string();
    info!(id, "habit updated");
    Ok(habit.clone())
}

pub fn delete_habit(data: &mut AppData, id: &str) -> Result<(), AppError> {
    let before = data.habits.len();
    data.habits.retain(|habit| habit.id != id);
    if data.habits.len() == before {
        return Err(AppError::not_found("habit", id));
    }
    info!(id, "habit deleted");
    Ok(())
}

/// Checks the habit in for `today`, or undoes today's check if it already
/// exists. Returns the updated habit and whether it is now checked.
pub fn toggle_check(
    data: &mut AppData,
    id: &str,
    today: NaiveDate,
    stamp: &str,
) -> Result<(Habit, bool), AppError> {
    let habit = find_habit_mut(data, id)?;
    let before = habit.check_dates.len();
    habit.check_dates.retain(|raw| parse_day(raw) != Some(today));

    let checked = habit.check_dates.len() == before;
    if checked {
        habit.check_dates.push(date_key(today));
    }
    habit.updated_at = stamp.to_string();
    info!(id, checked, "habit check toggled");
    Ok((habit.clone(), checked))
}

pub fn is_checked_on(habit: &Habit, day: NaiveDate) -> bool {
    habit
        .check_dates
        .iter()
        .any(|raw| parse_day(raw) == Some(day))
}

pub fn summarize(habit: &Habit, today: NaiveDate) -> HabitSummary {
    HabitSummary {
        streak: compute_streak_at(today, &habit.check_dates),
        checked_today: is_checked_on(habit, today),
        habit: habit.clone(),
    }
}

pub fn habit_summaries(habits: &[Habit], today: NaiveDate) -> Vec<HabitSummary> {
    habits.iter().map(|habit| summarize(habit, today)).collect()
}

pub fn habit_stats(habits: &[Habit], today: NaiveDate) -> HabitStats {
    HabitStats {
        total: habits.len(),
        today_checks: habits.iter().filter(|habit| is_checked_on(habit, today)).count(),
    }
}

fn find_habit_mut<'a>(data: &'a mut AppData, id: &str) -> Result<&'a mut Habit, AppError> {
    data.habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or_else(|| AppError::not_found("habit", id))
}

fn validate(input: HabitInput) -> Result<(String, String, String), AppError> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::bad_request("habit title must not be empty"));
    }

    let icon = match input.icon.trim() {
        "" => DEFAULT_HABIT_ICON.to_string(),
        icon => icon.to_string(),
    };
    let color = match input.color.trim() {
        "" => DEFAULT_HABIT_COLOR.to_string(),
        color if is_hex_color(color) => color.to_string(),
        color => return Err(AppError::bad_request(format!("invalid color '{color}'"))),
    };
    Ok((title, icon, color))
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
