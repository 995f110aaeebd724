use crate::errors::AppError;
use crate::models::AppData;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn read<R>(&self, view: impl FnOnce(&AppData) -> R) -> R {
        let data = self.data.lock().await;
        view(&data)
    }

    /// Applies `change` under the lock and writes the result to disk before
    /// releasing it. Nothing is written when `change` fails.
    pub async fn mutate<R>(
        &self,
        change: impl FnOnce(&mut AppData) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut data = self.data.lock().await;
        let result = change(&mut data)?;
        persist_data(&self.data_path, &data).await?;
        Ok(result)
    }
}
