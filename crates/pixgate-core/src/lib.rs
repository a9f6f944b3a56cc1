//! Pixgate Core Library
//!
//! This crate provides the shared domain types for the pixgate image
//! gateway: CDN configuration, error types, size presets, media file
//! payloads, and the transformation URL builder.

pub mod config;
pub mod error;
pub mod folder;
pub mod media;
pub mod presets;
pub mod transform_url;

// Re-export commonly used types
pub use config::CdnConfig;
pub use error::{GatewayError, LogLevel};
pub use folder::{format_file_size, generate_folder_path};
pub use media::MediaFile;
pub use presets::{OutputFormat, ResizeOptions, SizePreset};
pub use transform_url::{TransformUrlBuilder, TransformationSpec};
