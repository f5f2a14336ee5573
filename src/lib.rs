pub mod app;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod errors;
pub mod fetcher;
pub mod format;
pub mod handlers;
pub mod models;
pub mod region;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use app::router;
pub use config::Config;
pub use dashboard::Dashboard;
pub use fetcher::CovidApi;
pub use state::AppState;
