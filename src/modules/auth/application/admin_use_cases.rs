use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLoginUseCase, AdminLogoutUseCase, AdminSessionUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    pub logout: Arc<dyn AdminLogoutUseCase + Send + Sync>,
    pub session: Arc<dyn AdminSessionUseCase + Send + Sync>,
}
