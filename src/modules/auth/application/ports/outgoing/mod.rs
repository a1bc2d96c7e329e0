pub mod secret_verifier;

pub use secret_verifier::{SecretVerifier, SecretVerifierError};
