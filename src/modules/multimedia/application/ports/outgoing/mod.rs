pub mod asset_encoder;

pub use asset_encoder::{AssetEncodeError, AssetEncoder};
