use serde::{Deserialize, Serialize};

pub const DEFAULT_HABIT_ICON: &str = "✅";
pub const DEFAULT_HABIT_COLOR: &str = "#FF8C42";
pub const GOAL_CATEGORIES: [&str; 5] = ["study", "work", "health", "life", "other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl GoalStatus {
    pub fn next(self) -> Self {
        match self {
            GoalStatus::Pending => GoalStatus::InProgress,
            GoalStatus::InProgress => GoalStatus::Completed,
            GoalStatus::Completed => GoalStatus::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalStatus::Pending => "pending",
            GoalStatus::InProgress => "in-progress",
            GoalStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub priority: GoalPriority,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A tracked habit. `check_dates` holds one `YYYY-MM-DD` stamp per checked day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub check_dates: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

fn default_icon() -> String {
    DEFAULT_HABIT_ICON.to_string()
}

fn default_color() -> String {
    DEFAULT_HABIT_COLOR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
pub struct GoalInput {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub priority: GoalPriority,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteInput {
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Comma separated, as typed into the note form.
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitInput {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct GoalQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NoteQuery {
    pub q: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HeatmapQuery {
    pub year: Option<i32>,
    /// Zero based, January is 0.
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: String,
    pub checks: u32,
    pub level: u8,
    pub is_today: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapResponse {
    pub year: i32,
    pub month: u32,
    pub max_checks: u32,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HabitSummary {
    #[serde(flatten)]
    pub habit: Habit,
    pub streak: u32,
    pub checked_today: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub id: String,
    pub checked: bool,
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub total: usize,
    pub tags: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub total: usize,
    pub today_checks: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalStats {
    pub goals: GoalStats,
    pub notes: NoteStats,
    pub habits: HabitStats,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub date: String,
    pub stats: TotalStats,
    pub progress_percent: u32,
    pub active_goals: Vec<Goal>,
    pub recent_notes: Vec<Note>,
    pub habits: Vec<HabitSummary>,
}

/// Backup container. Collections are optional on the way in so a partial
/// backup only replaces what it carries.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub export_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<Goal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habits: Option<Vec<Habit>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub goals: Option<usize>,
    pub notes: Option<usize>,
    pub habits: Option<usize>,
}
