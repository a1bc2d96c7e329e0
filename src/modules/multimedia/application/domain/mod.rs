pub mod entities;
pub mod import_handle;
pub mod policies;
