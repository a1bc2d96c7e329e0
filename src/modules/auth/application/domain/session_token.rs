use chrono::Utc;

pub const SESSION_TOKEN_KEY: &str = "admin_session_token";
pub const SESSION_TOKEN_PREFIX: &str = "AUTH_OK_";

/// Opaque marker that the panel was unlocked in this process session.
/// Not a credential: it only carries the unlock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn issue() -> Self {
        Self::issued_at(Utc::now().timestamp_millis())
    }

    pub fn issued_at(millis: i64) -> Self {
        Self(format!("{SESSION_TOKEN_PREFIX}{millis}"))
    }

    /// Accepts only well-formed markers.
    pub fn parse(raw: &str) -> Option<Self> {
        let millis = raw.strip_prefix(SESSION_TOKEN_PREFIX)?;
        if millis.is_empty() || !millis.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_has_prefix() {
        let token = SessionToken::issued_at(1_700_000_000_000);
        assert_eq!(token.as_str(), "AUTH_OK_1700000000000");
    }

    #[test]
    fn test_parse() {
        assert!(SessionToken::parse("AUTH_OK_123").is_some());
        assert!(SessionToken::parse("AUTH_OK_").is_none());
        assert!(SessionToken::parse("AUTH_OK_12a").is_none());
        assert!(SessionToken::parse("TOKEN_123").is_none());
    }
}
