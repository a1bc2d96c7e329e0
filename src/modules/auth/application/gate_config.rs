use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::modules::auth::application::domain::gate::GatePolicy;

/// Where the admin secret comes from. A PHC hash is preferred; a plaintext
/// secret is hashed once at startup and then dropped.
#[derive(Clone, PartialEq, Eq)]
pub enum AdminSecret {
    Hash(String),
    Plaintext(String),
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminSecret::Hash(_) => f.write_str("AdminSecret::Hash(..)"),
            AdminSecret::Plaintext(_) => f.write_str("AdminSecret::Plaintext(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GateConfig {
    pub policy: GatePolicy,
    pub secret: Option<AdminSecret>,
}

impl GateConfig {
    pub fn from_env() -> Self {
        let defaults = GatePolicy::default();

        let policy = GatePolicy {
            max_attempts: parse_or("ADMIN_MAX_ATTEMPTS", defaults.max_attempts).max(1),
            lockout: Duration::from_secs(parse_or(
                "ADMIN_LOCKOUT_SECS",
                defaults.lockout.as_secs(),
            )),
            verify_steps: parse_or("ADMIN_VERIFY_STEPS", defaults.verify_steps).max(1),
            verify_duration: Duration::from_millis(parse_or(
                "ADMIN_VERIFY_MS",
                defaults.verify_duration.as_millis() as u64,
            )),
        };

        let secret = non_empty("ADMIN_SECRET_HASH")
            .map(AdminSecret::Hash)
            .or_else(|| non_empty("ADMIN_SECRET").map(AdminSecret::Plaintext));

        if secret.is_none() {
            warn!("Neither ADMIN_SECRET_HASH nor ADMIN_SECRET is set, admin login is disabled");
        }

        Self { policy, secret }
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        env::set_var("GATE_CONFIG_TEST_GARBAGE", "five");
        assert_eq!(parse_or("GATE_CONFIG_TEST_GARBAGE", 5u32), 5);

        env::set_var("GATE_CONFIG_TEST_VALID", " 7 ");
        assert_eq!(parse_or("GATE_CONFIG_TEST_VALID", 5u32), 7);

        assert_eq!(parse_or("GATE_CONFIG_TEST_MISSING", 30u64), 30);
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = AdminSecret::Plaintext("hunter2".to_string());
        assert!(!format!("{secret:?}").contains("hunter2"));
    }
}
