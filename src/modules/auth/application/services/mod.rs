pub mod admin_login_service;
pub mod admin_session_service;

pub use admin_login_service::AdminLoginService;
pub use admin_session_service::AdminSessionService;
