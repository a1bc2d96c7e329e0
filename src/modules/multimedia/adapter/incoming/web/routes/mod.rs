mod get_preview;
mod import_asset;

pub use get_preview::get_preview_handler;
pub use import_asset::{import_asset_handler, list_asset_slots_handler, ImportTicketResponse};
