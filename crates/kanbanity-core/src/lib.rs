pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::AppConfig;
pub use error::KanbanError;
pub use logging::init_tracing;
pub use result::KanbanResult;
