use crate::modules::multimedia::application::domain::entities::{AssetFile, AssetKind};

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_image_bytes: usize,
    pub max_video_bytes: usize,
    pub allowed_image_types: &'static [&'static str],
    pub allowed_video_types: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("File is empty")]
    Empty,

    #[error("File is {actual} bytes, the limit for this slot is {max}")]
    TooLarge { max: usize, actual: usize },

    #[error("{mime} is not accepted for {kind} slots")]
    UnsupportedType { mime: String, kind: AssetKind },

    #[error("File content does not match declared type {declared}")]
    ContentMismatch { declared: String },
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_image_bytes: Self::DEFAULT_MAX_IMAGE_BYTES,
            max_video_bytes: Self::DEFAULT_MAX_VIDEO_BYTES,
            allowed_image_types: Self::DEFAULT_IMAGE_TYPES,
            allowed_video_types: Self::DEFAULT_VIDEO_TYPES,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
    pub const DEFAULT_MAX_VIDEO_BYTES: usize = 25 * 1024 * 1024;
    pub const DEFAULT_IMAGE_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
    pub const DEFAULT_VIDEO_TYPES: &'static [&'static str] =
        &["video/mp4", "video/webm", "video/quicktime"];

    /// Size caps from `ASSET_MAX_IMAGE_BYTES` / `ASSET_MAX_VIDEO_BYTES`.
    pub fn from_env() -> Self {
        let read = |key: &str, default: usize| {
            std::env::var(key)
                .ok()
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        Self {
            max_image_bytes: read("ASSET_MAX_IMAGE_BYTES", Self::DEFAULT_MAX_IMAGE_BYTES),
            max_video_bytes: read("ASSET_MAX_VIDEO_BYTES", Self::DEFAULT_MAX_VIDEO_BYTES),
            ..Self::default()
        }
    }

    /// Largest body any slot accepts.
    pub fn max_payload_bytes(&self) -> usize {
        self.max_image_bytes.max(self.max_video_bytes)
    }

    pub fn check(&self, kind: AssetKind, file: &AssetFile) -> Result<(), UploadRejection> {
        if file.is_empty() {
            return Err(UploadRejection::Empty);
        }

        let (max, allowed) = match kind {
            AssetKind::Image => (self.max_image_bytes, self.allowed_image_types),
            AssetKind::Video => (self.max_video_bytes, self.allowed_video_types),
        };

        if file.len() > max {
            return Err(UploadRejection::TooLarge {
                max,
                actual: file.len(),
            });
        }

        if !allowed.contains(&file.mime()) {
            return Err(UploadRejection::UnsupportedType {
                mime: file.mime().to_string(),
                kind,
            });
        }

        if kind == AssetKind::Image && sniff_image_type(file.bytes()) != Some(file.mime()) {
            return Err(UploadRejection::ContentMismatch {
                declared: file.mime().to_string(),
            });
        }

        Ok(())
    }
}

pub fn sniff_image_type(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn small_policy() -> UploadPolicy {
        UploadPolicy {
            max_image_bytes: 16,
            max_video_bytes: 32,
            ..UploadPolicy::default()
        }
    }

    #[test]
    fn test_accepts_matching_image() {
        let file = AssetFile::new("image/png", PNG.to_vec());
        assert_eq!(small_policy().check(AssetKind::Image, &file), Ok(()));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        let policy = small_policy();

        let empty = AssetFile::new("image/png", vec![]);
        assert_eq!(policy.check(AssetKind::Image, &empty), Err(UploadRejection::Empty));

        let big = AssetFile::new("video/mp4", vec![0; 33]);
        assert_eq!(
            policy.check(AssetKind::Video, &big),
            Err(UploadRejection::TooLarge {
                max: 32,
                actual: 33
            })
        );
    }

    #[test]
    fn test_rejects_type_not_allowed_for_kind() {
        let video_as_image = AssetFile::new("video/mp4", vec![0; 4]);
        assert!(matches!(
            small_policy().check(AssetKind::Image, &video_as_image),
            Err(UploadRejection::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_rejects_disguised_image() {
        let fake = AssetFile::new("image/jpeg", PNG.to_vec());
        assert_eq!(
            small_policy().check(AssetKind::Image, &fake),
            Err(UploadRejection::ContentMismatch {
                declared: "image/jpeg".to_string()
            })
        );
    }

    #[test]
    fn test_sniff_webp() {
        let webp = b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert_eq!(sniff_image_type(webp), Some("image/webp"));
        assert_eq!(sniff_image_type(b"GIF89a"), Some("image/gif"));
        assert_eq!(sniff_image_type(&[0xFF, 0xD8]), None);
    }

    #[test]
    fn test_max_payload_bytes() {
        assert_eq!(UploadPolicy::default().max_payload_bytes(), 25 * 1024 * 1024);
    }
}
