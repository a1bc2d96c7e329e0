use actix_web::{get, post, web, Responder};
use serde::Serialize;
use tracing::info;

use super::errors::map_draft_error;
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DiscardOutcome {
    pub discarded: bool,
}

#[post("/api/admin/draft/open")]
pub async fn open_draft_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = data.draft.open().await;
    ApiResponse::success(draft)
}

#[get("/api/admin/draft")]
pub async fn get_draft_handler(_session: AdminSession, data: web::Data<AppState>) -> impl Responder {
    match data.draft.current().await {
        Ok(draft) => ApiResponse::success(draft),
        Err(e) => map_draft_error(e),
    }
}

#[post("/api/admin/draft/commit")]
pub async fn commit_draft_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.draft.commit().await {
        Ok(outcome) => {
            info!(
                abandoned_imports = outcome.abandoned_imports,
                "Portfolio updated from draft"
            );
            ApiResponse::success(outcome)
        }
        Err(e) => map_draft_error(e),
    }
}

#[post("/api/admin/draft/discard")]
pub async fn discard_draft_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let discarded = data.draft.discard().await;
    ApiResponse::success(DiscardOutcome { discarded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    const TOKEN: &str = "AUTH_OK_7";

    fn authed(req: test::TestRequest) -> test::TestRequest {
        req.insert_header(("Authorization", format!("Bearer {TOKEN}")))
    }

    #[actix_web::test]
    async fn draft_routes_require_session() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(open_draft_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/draft/open")
            .insert_header(("Authorization", "Bearer AUTH_OK_999"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn open_get_discard_cycle() {
        let state = TestAppStateBuilder::default().unlock(TOKEN).await.build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(open_draft_handler)
                .service(get_draft_handler)
                .service(discard_draft_handler),
        )
        .await;

        let req = authed(test::TestRequest::get().uri("/api/admin/draft")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let json: Value = test::call_and_read_body_json(
            &app,
            authed(test::TestRequest::post().uri("/api/admin/draft/open")).to_request(),
        )
        .await;
        assert_eq!(json["data"]["name"], "Rafid Studio");

        let req = authed(test::TestRequest::get().uri("/api/admin/draft")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::call_and_read_body_json(
            &app,
            authed(test::TestRequest::post().uri("/api/admin/draft/discard")).to_request(),
        )
        .await;
        assert_eq!(json["data"]["discarded"], true);
        assert!(!state.draft.is_open().await);
    }

    #[actix_web::test]
    async fn commit_writes_committed_store() {
        let builder = TestAppStateBuilder::default().unlock(TOKEN).await;
        let store = builder.store();
        let state = builder.build();
        state.draft.open().await;
        state.draft.add_category("Motion").await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(commit_draft_handler),
        )
        .await;

        let json: Value = test::call_and_read_body_json(
            &app,
            authed(test::TestRequest::post().uri("/api/admin/draft/commit")).to_request(),
        )
        .await;

        assert_eq!(json["data"]["abandonedImports"], 0);
        assert!(store
            .snapshot()
            .await
            .project_categories
            .contains(&"Motion".to_string()));
    }
}
