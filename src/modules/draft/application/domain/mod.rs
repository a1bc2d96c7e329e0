pub mod collection;
pub mod edits;
