pub mod gate;
pub mod session_token;
