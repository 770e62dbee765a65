//! Source image loading and mime-type sniffing.

use std::path::Path;

use crate::error::AdaptError;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// A source image held in memory, ready for inline transport.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Raw bytes as read from disk.
    pub data: Vec<u8>,
    /// Sniffed mime type.
    pub mime_type: &'static str,
}

impl SourceImage {
    /// Read a source image from disk, sniffing its format from magic bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AdaptError::Encoding`] when the file cannot be read or is
    /// not a recognized image format.
    pub async fn read(path: &Path) -> Result<Self, AdaptError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| AdaptError::Encoding(format!("{}: {e}", path.display())))?;
        let mime_type = sniff_mime(&data).ok_or_else(|| {
            AdaptError::Encoding(format!("{}: unrecognized image format", path.display()))
        })?;
        Ok(Self { data, mime_type })
    }
}

/// Detect an image mime type from magic bytes.
///
/// Recognizes PNG, JPEG, and `WebP`, the formats accepted inline by the model.
#[must_use]
pub fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&PNG_MAGIC) {
        Some("image/png")
    } else if data.starts_with(&JPEG_MAGIC) {
        Some("image/jpeg")
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_png() {
        let mut data = PNG_MAGIC.to_vec();
        data.extend_from_slice(&[0; 16]);
        assert_eq!(sniff_mime(&data), Some("image/png"));
    }

    #[test]
    fn sniffs_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(sniff_mime(&data), Some("image/jpeg"));
    }

    #[test]
    fn sniffs_webp() {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        data.extend_from_slice(b"WEBP");
        assert_eq!(sniff_mime(&data), Some("image/webp"));
    }

    #[test]
    fn rejects_unknown_bytes() {
        assert_eq!(sniff_mime(b"GIF89a"), None);
        assert_eq!(sniff_mime(&[]), None);
        assert_eq!(sniff_mime(&[0x89]), None);
    }

    #[tokio::test]
    async fn read_sniffs_file_on_disk() {
        let path = std::env::temp_dir().join("reframe_source_read_test.png");
        let mut data = PNG_MAGIC.to_vec();
        data.extend_from_slice(b"payload");
        std::fs::write(&path, &data).unwrap();

        let source = SourceImage::read(&path).await.unwrap();
        assert_eq!(source.mime_type, "image/png");
        assert_eq!(source.data, data);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn read_missing_file_is_an_encoding_error() {
        let path = std::env::temp_dir().join("reframe_source_missing_test.png");
        let err = SourceImage::read(&path).await.unwrap_err();
        assert!(matches!(err, AdaptError::Encoding(_)));
        assert!(err.to_string().contains("Failed to read source image"));
    }

    #[tokio::test]
    async fn read_unrecognized_format_is_an_encoding_error() {
        let path = std::env::temp_dir().join("reframe_source_notimage_test.bin");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = SourceImage::read(&path).await.unwrap_err();
        assert!(err.to_string().contains("unrecognized image format"));

        std::fs::remove_file(&path).ok();
    }
}
