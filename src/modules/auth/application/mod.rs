pub mod admin_use_cases;
pub mod domain;
pub mod gate_config;
pub mod ports;
pub mod services;
