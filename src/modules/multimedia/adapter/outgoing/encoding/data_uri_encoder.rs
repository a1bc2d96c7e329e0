use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::modules::multimedia::application::ports::outgoing::{AssetEncodeError, AssetEncoder};

/// Encodes files as self-contained `data:<mime>;base64,<payload>` URIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriEncoder;

impl AssetEncoder for DataUriEncoder {
    fn encode(&self, mime: &str, bytes: &[u8]) -> Result<String, AssetEncodeError> {
        if mime.is_empty() {
            return Err(AssetEncodeError::EncodeFailed(
                "missing MIME type".to_string(),
            ));
        }
        Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_data_uri() {
        let encoded = DataUriEncoder.encode("image/png", b"hello").unwrap();
        assert_eq!(encoded, "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_rejects_missing_mime() {
        assert!(DataUriEncoder.encode("", b"x").is_err());
    }
}
