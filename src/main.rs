pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::security::Argon2SecretVerifier;
use crate::modules::auth::application::admin_use_cases::AdminUseCases;
use crate::modules::auth::application::gate_config::GateConfig;
use crate::modules::auth::application::services::{AdminLoginService, AdminSessionService};
use crate::modules::draft::application::DraftService;
use crate::modules::multimedia::adapter::outgoing::encoding::DataUriEncoder;
use crate::modules::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::multimedia::application::media_use_cases::MediaUseCases;
use crate::modules::multimedia::application::services::{ImportAssetService, PreviewRegistry};
use crate::modules::portfolio::adapter::outgoing::{FileKeyValueStore, MemoryKeyValueStore};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::services::{
    GetPublicPortfolioService, SubmitContactService, SubmitReviewService,
};
use crate::modules::portfolio::application::store::PortfolioStore;
use crate::shared::api::{custom_json_config, payload_error_handlers};

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub admin: AdminUseCases,
    pub draft: Arc<DraftService>,
    pub media: MediaUseCases,
    pub store: Arc<PortfolioStore>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Storage
    let durable = FileKeyValueStore::from_env();
    info!(data_dir = %durable.root().display(), "Using file storage");
    let store = Arc::new(PortfolioStore::load(Arc::new(durable)).await);
    let session = Arc::new(MemoryKeyValueStore::new());

    // Admin gate
    let gate = GateConfig::from_env();
    let verifier = Argon2SecretVerifier::from_config(gate.secret.as_ref()).unwrap_or_else(|e| {
        warn!(error = %e, "Admin secret is unusable, admin login is disabled");
        Argon2SecretVerifier::disabled()
    });

    let login = AdminLoginService::new(gate.policy, Arc::new(verifier), session.clone());
    let admin_session = Arc::new(AdminSessionService::new(session));

    // Draft + media
    let policy = UploadPolicy::from_env();
    let max_payload = policy.max_payload_bytes();
    let previews = Arc::new(PreviewRegistry::new());
    let drafts = Arc::new(DraftService::new(Arc::clone(&store), Arc::clone(&previews)));
    let import_asset = ImportAssetService::new(
        Arc::clone(&drafts),
        Arc::clone(&previews),
        Arc::new(DataUriEncoder),
        policy,
    );

    let state = AppState {
        portfolio: PortfolioUseCases {
            get_public: Arc::new(GetPublicPortfolioService::new(Arc::clone(&store))),
            submit_contact: Arc::new(SubmitContactService::new(Arc::clone(&store))),
            submit_review: Arc::new(SubmitReviewService::new(Arc::clone(&store))),
        },
        admin: AdminUseCases {
            login: Arc::new(login),
            logout: admin_session.clone(),
            session: admin_session,
        },
        draft: drafts,
        media: MediaUseCases {
            import_asset: Arc::new(import_asset),
            previews,
        },
        store,
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(max_payload))
            .wrap(payload_error_handlers())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Portfolio
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_projects_handler,
    );
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::submit_review_handler);
    // Admin
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::admin_logout_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::admin_session_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::gate_status_handler);
    // Draft: fixed paths before `{collection}`
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::open_draft_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::commit_draft_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::discard_draft_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::get_draft_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::set_draft_field_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::add_draft_category_handler);
    cfg.service(
        crate::modules::draft::adapter::incoming::web::routes::remove_draft_category_handler,
    );
    cfg.service(
        crate::modules::multimedia::adapter::incoming::web::routes::list_asset_slots_handler,
    );
    cfg.service(crate::modules::multimedia::adapter::incoming::web::routes::import_asset_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::add_draft_item_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::update_draft_item_handler);
    cfg.service(crate::modules::draft::adapter::incoming::web::routes::remove_draft_item_handler);
    // Previews
    cfg.service(crate::modules::multimedia::adapter::incoming::web::routes::get_preview_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
