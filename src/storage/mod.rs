pub mod admins;
pub mod settings;

pub use admins::{Admin, AdminRole, AdminStore, InMemoryAdminStore, NewAdmin};
pub use settings::{InMemorySettingsStore, PostgresSettingsStore, SettingsStore};
