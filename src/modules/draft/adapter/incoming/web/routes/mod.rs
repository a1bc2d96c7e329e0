mod draft_edits;
mod draft_lifecycle;
mod errors;

pub use draft_edits::{
    add_draft_category_handler, add_draft_item_handler, remove_draft_category_handler,
    remove_draft_item_handler, set_draft_field_handler, update_draft_item_handler,
};
pub use draft_lifecycle::{
    commit_draft_handler, discard_draft_handler, get_draft_handler, open_draft_handler,
};
