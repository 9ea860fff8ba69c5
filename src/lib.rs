pub mod app;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod session;
pub mod sheets;
pub mod state;
pub mod summary;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use sheets::SheetsClient;
pub use state::AppState;
