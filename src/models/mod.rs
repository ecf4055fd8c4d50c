pub mod email;
pub mod health;

pub use email::{EmailQuery, ErrorResponse, ValidationResult};
pub use health::HealthResponse;
