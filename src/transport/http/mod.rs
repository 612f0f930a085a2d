pub mod error;
pub mod middleware;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod admins;
    pub mod common;
    pub mod config;
    pub mod crypto;
    pub mod health;
    pub mod settings;
    pub mod stats;
}

pub use error::{ApiError, ApiResult};
pub use router::{create_router, ApiDoc};
pub use types::AppState;
