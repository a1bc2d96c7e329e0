use actix_web::{http::header, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLoginError, AdminLoginRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequestDto {
    /// Admin secret
    #[schema(example = "correct horse battery staple")]
    pub secret: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    /// Session marker, sent back as `Authorization: Bearer <token>`
    #[schema(example = "AUTH_OK_1718000000000")]
    pub token: String,
}

/// Admin login
///
/// Runs one attempt through the access gate. Resolves once the verification
/// sequence has finished.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequestDto,
    responses(
        (
            status = 200,
            description = "Secret accepted, session opened",
            body = inline(SuccessResponse<AdminLoginResponse>),
            example = json!({
                "success": true,
                "data": { "token": "AUTH_OK_1718000000000" }
            })
        ),
        (
            status = 401,
            description = "Wrong secret",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_SECRET",
                    "message": "Invalid secret, 4 attempts remaining"
                }
            })
        ),
        (
            status = 409,
            description = "Another attempt is being verified",
            body = ErrorResponse
        ),
        (
            status = 429,
            description = "Locked out after too many failed attempts",
            body = ErrorResponse,
            headers(("Retry-After" = u64, description = "Seconds until the lockout ends"))
        ),
        (
            status = 503,
            description = "No admin secret is configured",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    data: web::Data<AppState>,
    payload: web::Json<AdminLoginRequestDto>,
) -> impl Responder {
    let request = AdminLoginRequest::new(payload.into_inner().secret);

    match data.admin.login.execute(request).await {
        Ok(token) => {
            info!("Admin session opened");
            ApiResponse::success(AdminLoginResponse {
                token: token.into_inner(),
            })
        }
        Err(e) => map_login_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_login_error(err: AdminLoginError) -> HttpResponse {
    let message = err.to_string();
    match err {
        AdminLoginError::InvalidSecret { remaining_attempts } => {
            warn!(remaining_attempts, "Admin login rejected");
            ApiResponse::unauthorized("INVALID_SECRET", &message)
        }
        AdminLoginError::LockedOut { retry_after_secs } => {
            warn!(retry_after_secs, "Admin login attempted during lockout");
            let mut response = ApiResponse::too_many_requests("LOCKED_OUT", &message);
            response.headers_mut().insert(
                header::RETRY_AFTER,
                header::HeaderValue::from(retry_after_secs),
            );
            response
        }
        AdminLoginError::VerificationInProgress => {
            ApiResponse::conflict("VERIFICATION_IN_PROGRESS", &message)
        }
        AdminLoginError::NotConfigured => {
            warn!("Admin login attempted without a configured secret");
            ApiResponse::service_unavailable("ADMIN_DISABLED", &message)
        }
        AdminLoginError::VerifierError(ref e) => {
            error!(error = %e, "Secret verification failed");
            ApiResponse::internal_error()
        }
        AdminLoginError::SessionStoreError(ref e) => {
            error!(error = %e, "Failed to store admin session");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::auth::application::domain::gate::{AccessGate, GatePolicy, GateStatus};
    use crate::modules::auth::application::domain::session_token::SessionToken;
    use crate::modules::auth::application::ports::incoming::use_cases::AdminLoginUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct FixedLogin(Result<SessionToken, AdminLoginError>);

    #[async_trait]
    impl AdminLoginUseCase for FixedLogin {
        async fn execute(
            &self,
            _request: AdminLoginRequest,
        ) -> Result<SessionToken, AdminLoginError> {
            self.0.clone()
        }

        async fn status(&self) -> GateStatus {
            AccessGate::new(GatePolicy::default()).status(tokio::time::Instant::now())
        }
    }

    async fn login(builder: TestAppStateBuilder, body: Value) -> (StatusCode, Option<String>, Value) {
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(custom_json_config())
                .service(admin_login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let retry_after = resp
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        (status, retry_after, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn admin_login_success_returns_token() {
        let builder = TestAppStateBuilder::default()
            .with_admin_login(FixedLogin(Ok(SessionToken::parse("AUTH_OK_42").unwrap())));

        let (status, _, json) = login(builder, json!({ "secret": "s3cret" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["token"], "AUTH_OK_42");
    }

    #[actix_web::test]
    async fn admin_login_with_real_gate_accepts_configured_secret() {
        let (status, _, json) = login(
            TestAppStateBuilder::default(),
            json!({ "secret": TestAppStateBuilder::ADMIN_SECRET }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["token"]
            .as_str()
            .unwrap()
            .starts_with("AUTH_OK_"));
    }

    #[actix_web::test]
    async fn admin_login_wrong_secret_returns_unauthorized() {
        let builder = TestAppStateBuilder::default().with_admin_login(FixedLogin(Err(
            AdminLoginError::InvalidSecret {
                remaining_attempts: 4,
            },
        )));

        let (status, _, json) = login(builder, json!({ "secret": "nope" })).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "INVALID_SECRET");
    }

    #[actix_web::test]
    async fn admin_login_locked_out_sets_retry_after() {
        let builder = TestAppStateBuilder::default().with_admin_login(FixedLogin(Err(
            AdminLoginError::LockedOut {
                retry_after_secs: 27,
            },
        )));

        let (status, retry_after, json) = login(builder, json!({ "secret": "nope" })).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(retry_after.as_deref(), Some("27"));
        assert_eq!(json["error"]["code"], "LOCKED_OUT");
    }

    #[actix_web::test]
    async fn admin_login_not_configured_returns_unavailable() {
        let builder = TestAppStateBuilder::default()
            .with_admin_login(FixedLogin(Err(AdminLoginError::NotConfigured)));

        let (status, _, json) = login(builder, json!({ "secret": "x" })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"]["code"], "ADMIN_DISABLED");
    }

    #[actix_web::test]
    async fn admin_login_empty_secret_goes_through_gate() {
        let (status, _, json) = login(TestAppStateBuilder::default(), json!({ "secret": "" })).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "INVALID_SECRET");
    }

    #[actix_web::test]
    async fn admin_login_empty_secrets_trip_the_lockout() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(custom_json_config())
                .service(admin_login_handler),
        )
        .await;
        let empty = || {
            test::TestRequest::post()
                .uri("/api/admin/login")
                .set_json(json!({ "secret": "" }))
                .to_request()
        };

        for _ in 0..4 {
            let resp = test::call_service(&app, empty()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
        let resp = test::call_service(&app, empty()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

        let resp = test::call_service(&app, empty()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(resp.headers().contains_key(header::RETRY_AFTER));
    }
}
