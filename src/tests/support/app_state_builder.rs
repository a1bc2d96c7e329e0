use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::admin_use_cases::AdminUseCases;
use crate::modules::auth::application::domain::gate::GatePolicy;
use crate::modules::auth::application::domain::session_token::SESSION_TOKEN_KEY;
use crate::modules::auth::application::ports::incoming::use_cases::AdminLoginUseCase;
use crate::modules::auth::application::services::{AdminLoginService, AdminSessionService};
use crate::modules::draft::application::DraftService;
use crate::modules::multimedia::adapter::outgoing::encoding::DataUriEncoder;
use crate::modules::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::multimedia::application::media_use_cases::MediaUseCases;
use crate::modules::multimedia::application::ports::incoming::use_cases::ImportAssetUseCase;
use crate::modules::multimedia::application::services::{ImportAssetService, PreviewRegistry};
use crate::modules::portfolio::adapter::outgoing::MemoryKeyValueStore;
use crate::modules::portfolio::application::domain::entities::PortfolioData;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SubmitContactUseCase, SubmitReviewUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;
use crate::modules::portfolio::application::services::{
    GetPublicPortfolioService, SubmitContactService, SubmitReviewService,
};
use crate::modules::portfolio::application::store::PortfolioStore;
use crate::tests::support::fixtures::memory_store;
use crate::tests::support::stubs::PlainSecretVerifier;
use crate::AppState;

/// Real services over in-memory storage; individual use cases can be
/// swapped for stubs.
pub struct TestAppStateBuilder {
    store: Arc<PortfolioStore>,
    session: Arc<MemoryKeyValueStore>,
    previews: Arc<PreviewRegistry>,
    drafts: Arc<DraftService>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    submit_review: Arc<dyn SubmitReviewUseCase + Send + Sync>,
    admin_login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    import_asset: Arc<dyn ImportAssetUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let store = memory_store(PortfolioData::default());
        let session = Arc::new(MemoryKeyValueStore::new());
        let previews = Arc::new(PreviewRegistry::new());
        let drafts = Arc::new(DraftService::new(
            Arc::clone(&store),
            Arc::clone(&previews),
        ));

        Self {
            submit_contact: Arc::new(SubmitContactService::new(Arc::clone(&store))),
            submit_review: Arc::new(SubmitReviewService::new(Arc::clone(&store))),
            admin_login: Arc::new(AdminLoginService::new(
                GatePolicy::default(),
                Arc::new(PlainSecretVerifier::new(Self::ADMIN_SECRET)),
                session.clone(),
            )),
            import_asset: Arc::new(ImportAssetService::new(
                Arc::clone(&drafts),
                Arc::clone(&previews),
                Arc::new(DataUriEncoder),
                UploadPolicy::default(),
            )),
            store,
            session,
            previews,
            drafts,
        }
    }
}

impl TestAppStateBuilder {
    pub const ADMIN_SECRET: &'static str = "open-sesame";

    pub fn store(&self) -> Arc<PortfolioStore> {
        Arc::clone(&self.store)
    }

    /// Stores `token` as the live admin session.
    pub async fn unlock(self, token: &str) -> Self {
        self.session
            .set(SESSION_TOKEN_KEY, token)
            .await
            .expect("memory session store");
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_submit_review(
        mut self,
        uc: impl SubmitReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_review = Arc::new(uc);
        self
    }

    pub fn with_admin_login(mut self, uc: impl AdminLoginUseCase + Send + Sync + 'static) -> Self {
        self.admin_login = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let session = Arc::new(AdminSessionService::new(self.session));

        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get_public: Arc::new(GetPublicPortfolioService::new(Arc::clone(&self.store))),
                submit_contact: self.submit_contact,
                submit_review: self.submit_review,
            },
            admin: AdminUseCases {
                login: self.admin_login,
                logout: session.clone(),
                session,
            },
            draft: self.drafts,
            media: MediaUseCases {
                import_asset: self.import_asset,
                previews: self.previews,
            },
            store: self.store,
        })
    }
}
