//! Aspect-preserving resize to a bounding box.

use image::imageops::FilterType;
use pixgate_core::{GatewayError, MediaFile, ResizeOptions};

use crate::codec::{ImageCodec, NativeCodec};

/// Scale (width, height) to fit inside the box while keeping the aspect
/// ratio. Landscape images are fitted to the box width first, portrait
/// images to the box height first; if the other dimension overflows, the
/// image is re-fitted along it. Images smaller than the box are scaled up
/// to it.
pub fn fit_within(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if src_w == 0 || src_h == 0 {
        return (max_w.max(1), max_h.max(1));
    }

    let aspect = src_w as f64 / src_h as f64;

    let (mut width, mut height) = if src_w >= src_h {
        let w = max_w as f64;
        (w, w / aspect)
    } else {
        let h = max_h as f64;
        (h * aspect, h)
    };

    if height > max_h as f64 {
        height = max_h as f64;
        width = height * aspect;
    }
    if width > max_w as f64 {
        width = max_w as f64;
        height = width / aspect;
    }

    ((width.round() as u32).max(1), (height.round() as u32).max(1))
}

/// Heavier downscales tolerate cheaper filters.
fn select_filter(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> FilterType {
    let ratio_w = src_w as f64 / dst_w.max(1) as f64;
    let ratio_h = src_h as f64 / dst_h.max(1) as f64;
    let ratio = ratio_w.max(ratio_h);

    if ratio > 2.0 {
        FilterType::Triangle
    } else if ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

pub struct ImageResizer {
    codec: Box<dyn ImageCodec>,
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageResizer {
    pub fn new() -> Self {
        Self {
            codec: Box::new(NativeCodec),
        }
    }

    pub fn with_codec(codec: Box<dyn ImageCodec>) -> Self {
        Self { codec }
    }

    /// Decode, fit into the option's bounding box, and re-encode.
    #[tracing::instrument(
        skip(self, file, options),
        fields(filename = %file.filename, size_bytes = file.size_bytes())
    )]
    pub fn resize(
        &self,
        file: &MediaFile,
        options: &ResizeOptions,
    ) -> Result<MediaFile, GatewayError> {
        let img = self.codec.decode(&file.data)?;

        let (src_w, src_h) = (img.width(), img.height());
        let (dst_w, dst_h) = fit_within(src_w, src_h, options.width, options.height);

        let resized = if (dst_w, dst_h) != (src_w, src_h) {
            let filter = select_filter(src_w, src_h, dst_w, dst_h);
            img.resize_exact(dst_w, dst_h, filter)
        } else {
            img
        };

        let encoded = self
            .codec
            .encode(&resized, options.format, options.quality)?;

        tracing::debug!(
            from = format!("{}x{}", src_w, src_h),
            to = format!("{}x{}", dst_w, dst_h),
            output_bytes = encoded.len(),
            "Image resized"
        );

        Ok(MediaFile::new(
            format!("resized_{}", file.filename),
            options.format.mime_type(),
            encoded,
        ))
    }
}
