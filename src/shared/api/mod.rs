pub mod json_config;
pub mod payload_errors;
pub mod response;

pub use json_config::custom_json_config;
pub use payload_errors::payload_error_handlers;
pub use response::{ApiError, ApiResponse};
