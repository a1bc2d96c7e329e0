use actix_web::{delete, patch, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::errors::{map_draft_error, EditOutcome};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::draft::application::domain::collection::Collection;
use crate::modules::draft::application::domain::edits::{DraftField, ItemEdit};
use crate::modules::draft::application::DraftError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub struct CreatedItem {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    pub label: String,
}

fn parse_collection(raw: &str) -> Result<Collection, HttpResponse> {
    raw.parse::<Collection>()
        .map_err(|e| ApiResponse::not_found("UNKNOWN_COLLECTION", &e.to_string()))
}

fn outcome(result: Result<bool, DraftError>) -> HttpResponse {
    match result {
        Ok(changed) => ApiResponse::success(EditOutcome { changed }),
        Err(e) => map_draft_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Fields
// ──────────────────────────────────────────────────────────
//

/// Body: `{ "field": "<name>", "value": <json> }`.
#[put("/api/admin/draft/fields")]
pub async fn set_draft_field_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<DraftField>,
) -> impl Responder {
    match data.draft.set_field(payload.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_draft_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Items
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/draft/{collection}")]
pub async fn add_draft_item_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let collection = match parse_collection(&path) {
        Ok(collection) => collection,
        Err(resp) => return resp,
    };

    match data.draft.add_item(collection).await {
        Ok(id) => ApiResponse::created(CreatedItem { id }),
        Err(e) => map_draft_error(e),
    }
}

/// Body: `{ "field": "<name>", "value": <json> }`, checked against the
/// collection's own field set.
#[patch("/api/admin/draft/{collection}/{id}")]
pub async fn update_draft_item_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
    payload: web::Json<Value>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    let collection = match parse_collection(&collection) {
        Ok(collection) => collection,
        Err(resp) => return resp,
    };

    let edit = match ItemEdit::parse(collection, payload.into_inner()) {
        Ok(edit) => edit,
        Err(e) => return ApiResponse::bad_request("INVALID_EDIT", &e.to_string()),
    };

    let result = data.draft.update_item(collection, &id, edit).await;
    if let Ok(false) = result {
        debug!(collection = %collection, id = %id, "Update matched no item");
    }
    outcome(result)
}

#[delete("/api/admin/draft/{collection}/{id}")]
pub async fn remove_draft_item_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    let collection = match parse_collection(&collection) {
        Ok(collection) => collection,
        Err(resp) => return resp,
    };

    outcome(data.draft.remove_item(collection, &id).await)
}

//
// ──────────────────────────────────────────────────────────
// Categories
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/draft/categories")]
pub async fn add_draft_category_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CategoryDto>,
) -> impl Responder {
    let label = payload.into_inner().label.trim().to_string();
    if label.is_empty() {
        return ApiResponse::bad_request("EMPTY_LABEL", "Category label cannot be empty");
    }

    let result = data.draft.add_category(&label).await;
    if let Ok(true) = result {
        info!(label = %label, "Added project category");
    }
    outcome(result)
}

#[delete("/api/admin/draft/categories/{label}")]
pub async fn remove_draft_category_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    label: web::Path<String>,
) -> impl Responder {
    outcome(data.draft.remove_category(&label).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::modules::portfolio::application::domain::entities::{Rating, Review};
    use crate::modules::portfolio::application::domain::views::PublicPortfolio;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    const TOKEN: &str = "AUTH_OK_3";

    fn authed(req: test::TestRequest) -> test::TestRequest {
        req.insert_header(("Authorization", format!("Bearer {TOKEN}")))
    }

    async fn open_state() -> web::Data<AppState> {
        let state = TestAppStateBuilder::default().unlock(TOKEN).await.build();
        state.draft.open().await;
        state
    }

    macro_rules! edit_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .app_data(custom_json_config())
                    .service(set_draft_field_handler)
                    .service(add_draft_category_handler)
                    .service(remove_draft_category_handler)
                    .service(add_draft_item_handler)
                    .service(update_draft_item_handler)
                    .service(remove_draft_item_handler),
            )
            .await
        };
    }

    // ==================== fields ====================

    #[actix_web::test]
    async fn set_field_updates_draft_only() {
        let state = open_state().await;
        let app = edit_app!(state);

        let req = authed(test::TestRequest::put().uri("/api/admin/draft/fields"))
            .set_json(json!({ "field": "heroMainText", "value": "Builder" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.draft.current().await.unwrap().hero_main_text, "Builder");
        assert_eq!(state.store.snapshot().await.hero_main_text, "Designer");
    }

    #[actix_web::test]
    async fn set_unknown_field_fails_fast() {
        let state = open_state().await;
        let app = edit_app!(state);
        let before = state.draft.current().await.unwrap();

        let req = authed(test::TestRequest::put().uri("/api/admin/draft/fields"))
            .set_json(json!({ "field": "heroTitle", "value": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.draft.current().await.unwrap(), before);
    }

    #[actix_web::test]
    async fn set_collection_with_duplicate_ids_is_rejected() {
        let state = open_state().await;
        let app = edit_app!(state);
        let before = state.draft.current().await.unwrap();
        let mut skills = serde_json::to_value(&before.skills).unwrap();
        let first = skills[0].clone();
        skills.as_array_mut().unwrap().push(first);

        let req = authed(test::TestRequest::put().uri("/api/admin/draft/fields"))
            .set_json(json!({ "field": "skills", "value": skills }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "DUPLICATE_ID");
        assert_eq!(state.draft.current().await.unwrap(), before);
    }

    // ==================== items ====================

    #[actix_web::test]
    async fn add_update_remove_project() {
        let state = open_state().await;
        let app = edit_app!(state);

        let req = authed(test::TestRequest::post().uri("/api/admin/draft/projects")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json: Value = test::read_body_json(resp).await;
        let id = json["data"]["id"].as_str().unwrap().to_string();

        let req = authed(test::TestRequest::patch().uri(&format!("/api/admin/draft/projects/{id}")))
            .set_json(json!({ "field": "title", "value": "Motion Reel" }))
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["changed"], true);
        assert_eq!(state.draft.current().await.unwrap().projects[0].title, "Motion Reel");

        let req = authed(test::TestRequest::delete().uri(&format!("/api/admin/draft/projects/{id}")))
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["changed"], true);

        let req = authed(test::TestRequest::delete().uri(&format!("/api/admin/draft/projects/{id}")))
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["changed"], false);
    }

    #[actix_web::test]
    async fn item_edits_validate_collection_and_field() {
        let state = open_state().await;
        let app = edit_app!(state);

        let req = authed(test::TestRequest::post().uri("/api/admin/draft/widgets")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = authed(test::TestRequest::post().uri("/api/admin/draft/reviews")).to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["error"]["code"], "NOT_CREATABLE");

        let req = authed(test::TestRequest::patch().uri("/api/admin/draft/skills/1"))
            .set_json(json!({ "field": "isRead", "value": true }))
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["error"]["code"], "INVALID_EDIT");
    }

    #[actix_web::test]
    async fn approving_submitted_review_publishes_it() {
        let state = TestAppStateBuilder::default().unlock(TOKEN).await.build();
        state
            .store
            .update(|data| {
                data.reviews.push(Review {
                    id: "p1".into(),
                    client_name: "Ada".into(),
                    client_role: "Engineer".into(),
                    content: "Great work".into(),
                    rating: Rating::try_new(4).unwrap(),
                    date: "2024-05-01".into(),
                    is_approved: false,
                })
            })
            .await
            .unwrap();
        state.draft.open().await;
        let app = edit_app!(state);

        let req = authed(test::TestRequest::patch().uri("/api/admin/draft/reviews/p1"))
            .set_json(json!({ "field": "isApproved", "value": true }))
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["changed"], true);

        let req = authed(test::TestRequest::patch().uri("/api/admin/draft/reviews/p1"))
            .set_json(json!({ "field": "isApproved", "value": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        state.draft.commit().await.unwrap();
        let public = PublicPortfolio::from(&state.store.snapshot().await);
        let ada = public
            .reviews
            .iter()
            .find(|r| r.review.client_name == "Ada")
            .unwrap();
        assert_eq!(ada.stars, [true, true, true, true, false]);
    }

    // ==================== categories ====================

    #[actix_web::test]
    async fn categories_add_dedup_and_remove() {
        let state = open_state().await;
        let app = edit_app!(state);

        let add = || {
            authed(test::TestRequest::post().uri("/api/admin/draft/categories"))
                .set_json(json!({ "label": "Motion" }))
                .to_request()
        };

        let json: Value = test::call_and_read_body_json(&app, add()).await;
        assert_eq!(json["data"]["changed"], true);
        let json: Value = test::call_and_read_body_json(&app, add()).await;
        assert_eq!(json["data"]["changed"], false);

        let req = authed(test::TestRequest::delete().uri("/api/admin/draft/categories/App%20Design"))
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["changed"], true);

        let draft = state.draft.current().await.unwrap();
        assert!(!draft.project_categories.contains(&"App Design".to_string()));
        assert_eq!(draft.projects[0].category, "App Design");
    }
}
