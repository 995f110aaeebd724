use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub const DATA_PATH_ENV: &str = "APP_DATA_PATH";
pub const DEFAULT_DATA_PATH: &str = "data/state.json";

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    match env::var(DATA_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(PathBuf::from(DEFAULT_DATA_PATH)),
    }
}

pub async fn ensure_parent_dir(path: &Path) -> Result<(), std::io::Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}

/// Reads the data file. A missing file starts empty; an unreadable or corrupt
/// one is logged and also starts empty so the service still comes up.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<AppData>(&bytes) {
            Ok(data) => {
                info!(
                    goals = data.goals.len(),
                    notes = data.notes.len(),
                    habits = data.habits.len(),
                    "loaded data from {}",
                    path.display()
                );
                data
            }
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("no data file at {}, starting empty", path.display());
            AppData::default()
        }
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            AppData::default()
        }
    }
}

/// Writes through a sibling temp file so a crash mid-write keeps the old file.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habit;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("growth_space_storage_{}_{name}", std::process::id()));
        path.push("state.json");
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&scratch_path("missing")).await;
        assert!(data.goals.is_empty() && data.notes.is_empty() && data.habits.is_empty());
    }

    #[tokio::test]
    async fn persist_then_load_keeps_habits() {
        let path = scratch_path("roundtrip");
        ensure_parent_dir(&path).await.unwrap();

        let mut data = AppData::default();
        data.habits.push(Habit {
            id: "h1".to_string(),
            title: "Read".to_string(),
            icon: "📚".to_string(),
            color: "#FF8C42".to_string(),
            check_dates: vec!["2026-03-10".to_string()],
            created_at: "2026-03-01T00:00:00.000Z".to_string(),
            updated_at: "2026-03-10T00:00:00.000Z".to_string(),
        });
        persist_data(&path, &data).await.unwrap();

        let raw = fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"checkDates\""));
        let loaded = load_data(&path).await;
        assert_eq!(loaded.habits, data.habits);

        let _ = fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = scratch_path("corrupt");
        ensure_parent_dir(&path).await.unwrap();
        fs::write(&path, b"{ not json").await.unwrap();

        let data = load_data(&path).await;
        assert!(data.habits.is_empty());

        let _ = fs::remove_dir_all(path.parent().unwrap()).await;
    }
}
