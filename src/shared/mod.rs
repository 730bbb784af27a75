pub mod config;
pub mod error;
pub mod json_fields;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use validation::ValidationFailureKind;
