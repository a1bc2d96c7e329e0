use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Proof that the request carries the current admin session marker.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let Some(state) = state else {
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )));
            };

            match state.admin.session.authorize(&token).await {
                Ok(true) => Ok(AdminSession { token }),
                Ok(false) => Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_SESSION",
                    "Admin session is missing or has ended",
                ))),
                Err(e) => {
                    error!(error = %e, "Failed to check admin session");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[get("/guarded")]
    async fn guarded(session: AdminSession) -> impl Responder {
        ApiResponse::success(session.token)
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(guarded),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/guarded").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn stale_token_is_unauthorized() {
        let builder = TestAppStateBuilder::default().unlock("AUTH_OK_1").await;
        let app = test::init_service(App::new().app_data(builder.build()).service(guarded)).await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer AUTH_OK_2"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_SESSION");
    }

    #[actix_web::test]
    async fn current_token_is_accepted() {
        let builder = TestAppStateBuilder::default().unlock("AUTH_OK_1").await;
        let app = test::init_service(App::new().app_data(builder.build()).service(guarded)).await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer AUTH_OK_1"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
