pub mod admin_login;
pub mod admin_logout;
pub mod admin_session;
pub mod gate_status;

pub use admin_login::{admin_login_handler, AdminLoginRequestDto, AdminLoginResponse};
pub use admin_logout::{admin_logout_handler, AdminLogoutResponse};
pub use admin_session::{admin_session_handler, AdminSessionResponse};
pub use gate_status::{gate_status_handler, GateStatusResponse};
