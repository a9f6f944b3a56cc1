//! Pixgate Gateway Library
//!
//! Signed HTTP gateways to the image host: request signing, multipart
//! upload with pre-network validation, and best-effort deletion. The
//! provider SDK is deliberately not used; the wire contract is a plain
//! signed multipart POST, reproduced here with a generic HTTP client.

pub mod delete;
pub mod signature;
pub mod types;
pub mod upload;

pub use delete::DeleteGateway;
pub use signature::sign;
pub use types::{UploadOptions, UploadResult};
pub use upload::UploadGateway;
