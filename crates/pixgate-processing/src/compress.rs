//! Compress-if-large policy.
//!
//! Files under the threshold pass through untouched. Files at or above it
//! are resized to the target preset; when that fails the original file is
//! kept, since a failed shrink should never block an upload.

use pixgate_core::{format_file_size, MediaFile, SizePreset};

use crate::resize::ImageResizer;

pub const COMPRESS_THRESHOLD_BYTES: u64 = 1024 * 1024;

impl ImageResizer {
    /// Shrink the file to the preset when it reaches the 1 MiB threshold,
    /// otherwise return it unchanged.
    pub fn compress_if_large(&self, file: MediaFile, target: SizePreset) -> MediaFile {
        if file.size_bytes() < COMPRESS_THRESHOLD_BYTES {
            return file;
        }

        match self.resize(&file, &target.resize_options()) {
            Ok(compressed) => {
                tracing::info!(
                    filename = %file.filename,
                    from = %format_file_size(file.size_bytes()),
                    to = %format_file_size(compressed.size_bytes()),
                    preset = target.name(),
                    "Compressed image before upload"
                );
                compressed
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    filename = %file.filename,
                    "Compression failed, uploading original"
                );
                file
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ImageCodec, NativeCodec};
    use bytes::Bytes;
    use image::{DynamicImage, Rgba, RgbaImage};
    use pixgate_core::{GatewayError, OutputFormat};
    use std::io::Cursor;

    // Per-pixel LCG noise defeats PNG filtering, so the encoded file
    // comfortably clears the threshold.
    fn noisy_png(width: u32, height: u32) -> MediaFile {
        let mut state: u32 = 0x12345678;
        let img = RgbaImage::from_fn(width, height, |_, _| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            let [a, b, c, _] = state.to_le_bytes();
            Rgba([a, b, c, 255])
        });
        let mut buffer = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        MediaFile::new("noise.png", "image/png", buffer)
    }

    // Trailing padding after IEND is ignored by the decoder, so the file
    // stays a valid PNG while hitting an exact byte size.
    fn padded_png(target_bytes: usize) -> MediaFile {
        let file = noisy_png(400, 300);
        assert!(file.size_bytes() < target_bytes as u64);
        let mut data = file.data.to_vec();
        data.resize(target_bytes, 0);
        MediaFile::new("padded.png", "image/png", data)
    }

    #[test]
    fn test_small_file_passes_through() {
        let resizer = ImageResizer::new();
        let file = MediaFile::new("tiny.png", "image/png", vec![0u8; 512]);

        let out = resizer.compress_if_large(file.clone(), SizePreset::Medium);
        assert_eq!(out.filename, file.filename);
        assert_eq!(out.data, file.data);
    }

    #[test]
    fn test_large_file_is_compressed() {
        let resizer = ImageResizer::new();
        let file = noisy_png(1600, 1200);
        assert!(file.size_bytes() > COMPRESS_THRESHOLD_BYTES);

        let out = resizer.compress_if_large(file.clone(), SizePreset::Medium);
        assert_eq!(out.filename, "resized_noise.png");
        assert!(out.size_bytes() < file.size_bytes());

        let decoded = NativeCodec.decode(&out.data).unwrap();
        assert!(decoded.width() <= 1280);
        assert!(decoded.height() <= 720);
    }

    #[test]
    fn test_file_at_exact_threshold_is_compressed() {
        let resizer = ImageResizer::new();
        let file = padded_png(COMPRESS_THRESHOLD_BYTES as usize);

        let out = resizer.compress_if_large(file.clone(), SizePreset::Medium);
        assert_ne!(out.data, file.data);
        assert_eq!(out.filename, "resized_padded.png");
    }

    #[test]
    fn test_file_one_byte_under_threshold_passes_through() {
        let resizer = ImageResizer::new();
        let file = padded_png(COMPRESS_THRESHOLD_BYTES as usize - 1);

        let out = resizer.compress_if_large(file.clone(), SizePreset::Medium);
        assert_eq!(out.filename, file.filename);
        assert_eq!(out.data, file.data);
    }

    struct FailingCodec;

    impl ImageCodec for FailingCodec {
        fn decode(&self, _data: &[u8]) -> Result<DynamicImage, GatewayError> {
            Err(GatewayError::ImageProcessing("injected".to_string()))
        }

        fn encode(
            &self,
            _img: &DynamicImage,
            _format: OutputFormat,
            _quality: u8,
        ) -> Result<Bytes, GatewayError> {
            Err(GatewayError::EncodeFailed("injected".to_string()))
        }
    }

    #[test]
    fn test_failed_compression_keeps_original() {
        let resizer = ImageResizer::with_codec(Box::new(FailingCodec));
        let file = noisy_png(1600, 1200);

        let out = resizer.compress_if_large(file.clone(), SizePreset::Medium);
        assert_eq!(out.filename, file.filename);
        assert_eq!(out.data, file.data);
    }
}
