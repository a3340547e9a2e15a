pub mod config;
pub mod cors;
pub mod router;

pub use config::Config;
pub use cors::CorsSettings;
pub use router::{build_router, AppState};
