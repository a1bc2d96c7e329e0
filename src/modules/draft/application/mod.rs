pub mod domain;
pub mod draft_service;
pub mod workspace;

pub use draft_service::{CommitOutcome, DraftError, DraftService};
