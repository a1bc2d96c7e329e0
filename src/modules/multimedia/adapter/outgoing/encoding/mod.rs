pub mod data_uri_encoder;

pub use data_uri_encoder::DataUriEncoder;
