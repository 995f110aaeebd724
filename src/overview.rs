use crate::goals::goal_stats;
use crate::habits::{habit_stats, summarize};
use crate::models::{AppData, GoalStatus, OverviewResponse, TotalStats};
use crate::notes::note_stats;
use crate::streak::date_key;
use chrono::{Local, NaiveDate};

const PREVIEW_LEN: usize = 3;

pub fn build_overview(data: &AppData) -> OverviewResponse {
    build_overview_at(data, Local::now().date_naive())
}

pub fn build_overview_at(data: &AppData, today: NaiveDate) -> OverviewResponse {
    let goals = goal_stats(&data.goals);
    let progress_percent = if goals.total == 0 {
        0
    } else {
        ((goals.completed as f64 / goals.total as f64) * 100.0).round() as u32
    };

    OverviewResponse {
        date: date_key(today),
        progress_percent,
        active_goals: data
            .goals
            .iter()
            .filter(|goal| goal.status != GoalStatus::Completed)
            .take(PREVIEW_LEN)
            .cloned()
            .collect(),
        recent_notes: data.notes.iter().take(PREVIEW_LEN).cloned().collect(),
        habits: data
            .habits
            .iter()
            .take(PREVIEW_LEN)
            .map(|habit| summarize(habit, today))
            .collect(),
        stats: TotalStats {
            goals,
            notes: note_stats(&data.notes),
            habits: habit_stats(&data.habits, today),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, GoalPriority, Habit};

    fn goal(id: &str, status: GoalStatus) -> Goal {
        Goal {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: "work".to_string(),
            priority: GoalPriority::Medium,
            status,
            description: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn habit(id: &str, dates: &[&str]) -> Habit {
        Habit {
            id: id.to_string(),
            title: id.to_string(),
            icon: "📚".to_string(),
            color: "#4CAF50".to_string(),
            check_dates: dates.iter().map(|d| d.to_string()).collect(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn live_overview_is_dated_today() {
        let overview = build_overview(&AppData::default());
        assert_eq!(overview.date, date_key(Local::now().date_naive()));
    }

    #[test]
    fn empty_data_has_zero_progress() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let overview = build_overview_at(&AppData::default(), today);
        assert_eq!(overview.date, "2026-03-10");
        assert_eq!(overview.progress_percent, 0);
        assert!(overview.active_goals.is_empty());
        assert_eq!(overview.stats.habits.total, 0);
    }

    #[test]
    fn overview_previews_and_progress() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let data = AppData {
            goals: vec![
                goal("a", GoalStatus::Completed),
                goal("b", GoalStatus::Pending),
                goal("c", GoalStatus::InProgress),
                goal("d", GoalStatus::Pending),
                goal("e", GoalStatus::Pending),
                goal("f", GoalStatus::Completed),
            ],
            notes: Vec::new(),
            habits: vec![
                habit("h1", &["2026-03-10", "2026-03-09"]),
                habit("h2", &["2026-03-09"]),
                habit("h3", &[]),
                habit("h4", &["2026-03-10"]),
            ],
        };

        let overview = build_overview_at(&data, today);
        assert_eq!(overview.progress_percent, 33);
        let active: Vec<&str> = overview.active_goals.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(active, vec!["b", "c", "d"]);

        assert_eq!(overview.habits.len(), 3);
        assert_eq!(overview.habits[0].streak, 2);
        assert!(overview.habits[0].checked_today);
        assert_eq!(overview.habits[1].streak, 1);
        assert_eq!(overview.stats.habits.total, 4);
        assert_eq!(overview.stats.habits.today_checks, 2);
        assert_eq!(overview.stats.goals.completed, 2);
    }
}
