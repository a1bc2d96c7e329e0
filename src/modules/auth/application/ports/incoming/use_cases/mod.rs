mod admin_login;
mod admin_session;

pub use admin_login::{AdminLoginError, AdminLoginRequest, AdminLoginUseCase};
pub use admin_session::{AdminLogoutUseCase, AdminSessionError, AdminSessionUseCase};
