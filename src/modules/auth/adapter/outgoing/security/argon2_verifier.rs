use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;
use tracing::info;

use crate::modules::auth::application::gate_config::AdminSecret;
use crate::modules::auth::application::ports::outgoing::{SecretVerifier, SecretVerifierError};

/// Holds the admin secret only as an Argon2 PHC string.
#[derive(Clone)]
pub struct Argon2SecretVerifier {
    phc: Option<String>,
}

impl Argon2SecretVerifier {
    pub fn from_phc(phc: impl Into<String>) -> Result<Self, SecretVerifierError> {
        let phc = phc.into();
        PasswordHash::new(&phc).map_err(|_| SecretVerifierError::VerifyFailed)?;
        Ok(Self { phc: Some(phc) })
    }

    /// Hashes `secret` with low-memory parameters.
    pub fn from_plaintext(secret: &str) -> Result<Self, SecretVerifierError> {
        let params =
            Params::new(4 * 1024, 3, 1, None).map_err(|_| SecretVerifierError::VerifyFailed)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);

        let phc = argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|_| SecretVerifierError::VerifyFailed)?
            .to_string();

        Ok(Self { phc: Some(phc) })
    }

    pub fn disabled() -> Self {
        Self { phc: None }
    }

    pub fn from_config(secret: Option<&AdminSecret>) -> Result<Self, SecretVerifierError> {
        match secret {
            Some(AdminSecret::Hash(phc)) => {
                info!("Using configured admin secret hash");
                Self::from_phc(phc.as_str())
            }
            Some(AdminSecret::Plaintext(plain)) => {
                info!("Hashing plaintext admin secret");
                Self::from_plaintext(plain)
            }
            None => Ok(Self::disabled()),
        }
    }
}

#[async_trait]
impl SecretVerifier for Argon2SecretVerifier {
    async fn verify(&self, candidate: &str) -> Result<bool, SecretVerifierError> {
        let Some(phc) = self.phc.clone() else {
            return Err(SecretVerifierError::NotConfigured);
        };
        let candidate = candidate.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&phc).map_err(|_| SecretVerifierError::VerifyFailed)?;

            match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(SecretVerifierError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| SecretVerifierError::TaskFailed)?
    }
}
