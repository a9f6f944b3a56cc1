//! Pixgate Processing Library
//!
//! Pre-upload image processing: decode, fit-within scaling, and re-encode
//! at a target quality, plus the compress-if-large policy wrapper that
//! shrinks oversized files before they reach the upload gateway.

pub mod codec;
pub mod compress;
pub mod resize;

pub use codec::{ImageCodec, NativeCodec};
pub use compress::COMPRESS_THRESHOLD_BYTES;
pub use resize::{fit_within, ImageResizer};
