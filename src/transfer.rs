//! Backup export and import.
//!
//! The bundle carries a format version and export time next to the three
//! collections. Importing replaces each collection the bundle contains and
//! leaves the others alone.

use crate::errors::AppError;
use crate::goals::canonical_category;
use crate::models::{AppData, ExportBundle, ImportSummary};
use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::info;

pub const EXPORT_VERSION: &str = "1.0";

pub fn export_bundle(data: &AppData, stamp: &str) -> ExportBundle {
    ExportBundle {
        version: EXPORT_VERSION.to_string(),
        export_date: stamp.to_string(),
        goals: Some(data.goals.clone()),
        notes: Some(data.notes.clone()),
        habits: Some(data.habits.clone()),
    }
}

pub fn export_file_name(now: DateTime<Local>) -> String {
    format!("growth_space_backup_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Accepts a JSON object carrying at least one of the collections as an array.
pub fn validate_import(value: Value) -> Result<ExportBundle, AppError> {
    let Value::Object(ref fields) = value else {
        return Err(AppError::bad_request("backup must be a JSON object"));
    };
    let has_collection = ["goals", "notes", "habits"]
        .iter()
        .any(|key| fields.get(*key).is_some_and(Value::is_array));
    if !has_collection {
        return Err(AppError::bad_request(
            "backup must contain a goals, notes or habits array",
        ));
    }

    serde_json::from_value(value)
        .map_err(|err| AppError::bad_request(format!("malformed backup: {err}")))
}

pub fn apply_import(data: &mut AppData, bundle: ExportBundle) -> ImportSummary {
    let summary = ImportSummary {
        goals: bundle.goals.as_ref().map(Vec::len),
        notes: bundle.notes.as_ref().map(Vec::len),
        habits: bundle.habits.as_ref().map(Vec::len),
    };

    if let Some(mut goals) = bundle.goals {
        for goal in &mut goals {
            if let Some(slug) = canonical_category(&goal.category) {
                goal.category = slug.to_string();
            }
        }
        data.goals = goals;
    }
    if let Some(notes) = bundle.notes {
        data.notes = notes;
    }
    if let Some(habits) = bundle.habits {
        data.habits = habits;
    }

    info!(
        version = %bundle.version,
        goals = ?summary.goals,
        notes = ?summary.notes,
        habits = ?summary.habits,
        "backup imported"
    );
    summary
}

pub fn clear_all(data: &mut AppData) {
    *data = AppData::default();
    info!("all data cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn habit_json(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Read",
            "icon": "📚",
            "color": "#FF8C42",
            "checkDates": ["2026-03-09", "2026-03-10"],
            "createdAt": "2026-03-01T00:00:00.000Z",
            "updatedAt": "2026-03-10T00:00:00.000Z"
        })
    }

    #[test]
    fn rejects_non_objects_and_missing_collections() {
        assert!(validate_import(json!([1, 2])).is_err());
        assert!(validate_import(json!({ "version": "1.0" })).is_err());
        assert!(validate_import(json!({ "goals": "nope" })).is_err());
    }

    #[test]
    fn partial_import_leaves_other_collections() {
        let mut data = AppData::default();
        data.habits = serde_json::from_value(json!([habit_json("old")])).unwrap();
        data.notes = serde_json::from_value(json!([{
            "id": "n1", "title": "keep me", "content": "", "tags": [],
            "createdAt": "x", "updatedAt": "x"
        }]))
        .unwrap();

        let bundle = validate_import(json!({
            "version": "1.0",
            "exportDate": "2026-03-10T12:00:00.000Z",
            "habits": [habit_json("a"), habit_json("b")]
        }))
        .unwrap();
        let summary = apply_import(&mut data, bundle);

        assert_eq!(summary, ImportSummary { goals: None, notes: None, habits: Some(2) });
        assert_eq!(data.habits.len(), 2);
        assert_eq!(data.habits[0].check_dates.len(), 2);
        assert_eq!(data.notes[0].title, "keep me");
    }

    #[test]
    fn export_then_import_restores_everything() {
        let mut data = AppData::default();
        data.habits = serde_json::from_value(json!([habit_json("h")])).unwrap();

        let exported = serde_json::to_value(export_bundle(&data, "2026-03-10T12:00:00.000Z")).unwrap();
        assert_eq!(exported["version"], "1.0");
        assert_eq!(exported["exportDate"], "2026-03-10T12:00:00.000Z");
        assert!(exported["goals"].as_array().unwrap().is_empty());

        let mut restored = AppData::default();
        apply_import(&mut restored, validate_import(exported).unwrap());
        assert_eq!(restored.habits, data.habits);
    }

    #[test]
    fn imported_legacy_goals_stay_editable() {
        let bundle = validate_import(json!({
            "goals": [{
                "id": "g1",
                "title": "每天读书",
                "category": "学习",
                "priority": "high",
                "status": "in-progress",
                "description": "",
                "createdAt": "2025-01-01T00:00:00.000Z",
                "updatedAt": "2025-01-01T00:00:00.000Z"
            }]
        }))
        .unwrap();
        let mut data = AppData::default();
        apply_import(&mut data, bundle);
        assert_eq!(data.goals[0].category, "study");

        let edit = crate::models::GoalInput {
            title: "Read daily".to_string(),
            category: data.goals[0].category.clone(),
            priority: crate::models::GoalPriority::High,
            status: crate::models::GoalStatus::InProgress,
            description: String::new(),
        };
        let updated = crate::goals::update_goal(&mut data, "g1", edit, "later").unwrap();
        assert_eq!(updated.created_at, "2025-01-01T00:00:00.000Z");
    }

    #[test]
    fn clear_all_empties_every_collection() {
        let mut data = AppData::default();
        data.habits = serde_json::from_value(json!([habit_json("h")])).unwrap();
        clear_all(&mut data);
        assert!(data.habits.is_empty() && data.goals.is_empty() && data.notes.is_empty());
    }

    #[test]
    fn export_file_name_uses_local_timestamp() {
        let now = Local.with_ymd_and_hms(2026, 3, 10, 7, 5, 9).unwrap();
        assert_eq!(export_file_name(now), "growth_space_backup_20260310_070509.json");
    }
}
