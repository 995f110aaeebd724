pub mod app;
pub mod errors;
pub mod goals;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod notes;
pub mod overview;
pub mod state;
pub mod storage;
pub mod streak;
pub mod transfer;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{ensure_parent_dir, load_data, resolve_data_path};
pub use streak::{build_heatmap, compute_streak};
