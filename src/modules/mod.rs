pub mod auth;
pub mod draft;
pub mod multimedia;
pub mod portfolio;
