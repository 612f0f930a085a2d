pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::{Chain, ConfigKind, LedgerProvider, RateProvider, StatsProvider};
pub use infra::config::AppConfig;
pub use storage::{AdminStore, InMemoryAdminStore, InMemorySettingsStore, PostgresSettingsStore, SettingsStore};
pub use transport::http::{create_router, ApiDoc, AppState};
