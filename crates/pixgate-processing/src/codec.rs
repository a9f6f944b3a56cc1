//! Image codec capability.
//!
//! The resizer needs decode and encode, nothing more, so both sit behind
//! a trait. The native implementation uses the `image` crate (plus the
//! `webp` crate for lossy WebP); tests inject failing codecs to exercise
//! the error paths.

use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, ImageReader};
use pixgate_core::{GatewayError, OutputFormat};

pub trait ImageCodec: Send + Sync {
    /// Decode raw bytes into a bitmap, guessing the format from content.
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, GatewayError>;

    /// Encode a bitmap at the requested quality (0-100, lossy formats).
    fn encode(
        &self,
        img: &DynamicImage,
        format: OutputFormat,
        quality: u8,
    ) -> Result<Bytes, GatewayError>;
}

/// Native codec backed by the `image` crate.
pub struct NativeCodec;

impl ImageCodec for NativeCodec {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, GatewayError> {
        ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| GatewayError::ImageProcessing(format!("unreadable image data: {}", e)))?
            .decode()
            .map_err(|e| GatewayError::ImageProcessing(format!("failed to decode image: {}", e)))
    }

    fn encode(
        &self,
        img: &DynamicImage,
        format: OutputFormat,
        quality: u8,
    ) -> Result<Bytes, GatewayError> {
        match format {
            OutputFormat::Jpeg => {
                // JPEG has no alpha channel
                let rgb = img.to_rgb8();
                let mut buffer = Vec::new();
                let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                    Cursor::new(&mut buffer),
                    quality,
                );
                rgb.write_with_encoder(encoder)
                    .map_err(|e| GatewayError::EncodeFailed(format!("jpeg: {}", e)))?;
                Ok(Bytes::from(buffer))
            }
            OutputFormat::Png => {
                let mut buffer = Vec::new();
                img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
                    .map_err(|e| GatewayError::EncodeFailed(format!("png: {}", e)))?;
                Ok(Bytes::from(buffer))
            }
            OutputFormat::WebP => {
                let rgba = img.to_rgba8();
                let encoder = webp::Encoder::from_rgba(&rgba, rgba.width(), rgba.height());
                let encoded = encoder.encode(quality as f32);
                if encoded.is_empty() {
                    return Err(GatewayError::EncodeFailed(
                        "webp encoder produced no output".to_string(),
                    ));
                }
                Ok(Bytes::copy_from_slice(&encoded))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([255, 0, 0, 255]),
        ))
    }

    #[test]
    fn test_decode_invalid_data() {
        let err = NativeCodec.decode(b"not an image").unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_PROCESSING_ERROR");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let img = test_image(32, 16);
        let encoded = NativeCodec
            .encode(&img, OutputFormat::Png, 80)
            .unwrap();
        let decoded = NativeCodec.decode(&encoded).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn test_encode_jpeg_drops_alpha() {
        let img = test_image(8, 8);
        let encoded = NativeCodec
            .encode(&img, OutputFormat::Jpeg, 80)
            .unwrap();
        assert!(!encoded.is_empty());
        let decoded = NativeCodec.decode(&encoded).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }

    #[test]
    fn test_encode_webp() {
        let img = test_image(8, 8);
        let encoded = NativeCodec
            .encode(&img, OutputFormat::WebP, 75)
            .unwrap();
        // RIFF container magic
        assert_eq!(&encoded[0..4], b"RIFF");
    }
}
