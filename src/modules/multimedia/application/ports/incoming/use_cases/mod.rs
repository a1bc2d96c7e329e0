mod import_asset;

pub use import_asset::{ImportAssetError, ImportAssetRequest, ImportAssetUseCase, ImportTicket};
