use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;

use crate::modules::draft::application::workspace::WorkspaceError;
use crate::modules::draft::application::DraftError;
use crate::shared::api::ApiResponse;

/// Body for edits that may turn out to be no-ops.
#[derive(Debug, Serialize)]
pub struct EditOutcome {
    pub changed: bool,
}

pub fn map_draft_error(err: DraftError) -> HttpResponse {
    let message = err.to_string();
    match err {
        DraftError::NotOpen => ApiResponse::conflict("DRAFT_NOT_OPEN", &message),
        DraftError::Workspace(WorkspaceError::NotCreatable(_)) => {
            ApiResponse::bad_request("NOT_CREATABLE", &message)
        }
        DraftError::Workspace(WorkspaceError::InvalidEdit(_)) => {
            ApiResponse::bad_request("INVALID_EDIT", &message)
        }
        DraftError::Workspace(WorkspaceError::DuplicateId(..)) => {
            ApiResponse::bad_request("DUPLICATE_ID", &message)
        }
        DraftError::Workspace(WorkspaceError::ApprovalIsFinal(_)) => {
            ApiResponse::conflict("APPROVAL_IS_FINAL", &message)
        }
        DraftError::UnknownTarget(_) => ApiResponse::not_found("UNKNOWN_SLOT", &message),
        DraftError::Store(ref e) => {
            error!(error = %e, "Failed to persist draft");
            ApiResponse::internal_error()
        }
    }
}
