pub mod import_asset_service;
pub mod preview_registry;

pub use import_asset_service::ImportAssetService;
pub use preview_registry::{Preview, PreviewRegistry, PREVIEW_ROUTE};
