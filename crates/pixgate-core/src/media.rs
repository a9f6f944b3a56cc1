//! In-memory file payload passed between the resizer and the gateways.

use bytes::Bytes;

/// A file as received at the boundary: raw bytes plus the metadata needed
/// for validation and multipart assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl MediaFile {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        MediaFile {
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_type() {
        let file = MediaFile::new("photo.jpg", "image/jpeg", vec![0u8; 128]);
        assert_eq!(file.size_bytes(), 128);
        assert!(file.is_image());

        let file = MediaFile::new("notes.txt", "text/plain", vec![0u8; 4]);
        assert!(!file.is_image());
    }
}
