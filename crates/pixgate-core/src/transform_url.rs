//! Image transformation URL builder
//!
//! Builds cacheable display URLs of the form
//! `{cdn_base}/{cloud_name}/image/upload/{transforms}/{public_id}`, where
//! `{transforms}` is a comma-joined list of `key_value` directives. Pure
//! string construction: no network call, no validation of `public_id`
//! (its provenance is the caller's concern; a malformed id simply yields
//! a malformed URL).

use std::collections::HashMap;

use crate::config::CdnConfig;
use crate::presets::SizePreset;

/// A set of transformation directives (width, height, crop mode, quality,
/// format), rendered in insertion order.
///
/// # Example
///
/// ```rust
/// use pixgate_core::TransformationSpec;
///
/// let spec = TransformationSpec::new().width(100).height(50).crop("fill");
/// assert_eq!(spec.render(), "w_100,h_50,c_fill");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationSpec {
    entries: Vec<(String, String)>,
}

impl TransformationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target width in pixels
    pub fn width(self, width: u32) -> Self {
        self.set("w", width.to_string())
    }

    /// Target height in pixels
    pub fn height(self, height: u32) -> Self {
        self.set("h", height.to_string())
    }

    /// Crop mode (e.g., "fill", "fit", "scale")
    pub fn crop(self, mode: &str) -> Self {
        self.set("c", mode.to_string())
    }

    /// Quality directive ("auto" or a numeric value)
    pub fn quality(self, quality: &str) -> Self {
        self.set("q", quality.to_string())
    }

    /// Delivery format directive ("auto" or an explicit format)
    pub fn format(self, format: &str) -> Self {
        self.set("f", format.to_string())
    }

    /// Arbitrary directive for transformations without a dedicated method
    pub fn set(mut self, key: &str, value: String) -> Self {
        // Repeated keys overwrite in place, keeping the original position.
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as the URL segment: `key_value` pairs joined by commas
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}_{}", k, v))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Builder for delivery URLs of stored assets.
#[derive(Debug, Clone)]
pub struct TransformUrlBuilder {
    cdn_base_url: String,
    cloud_name: String,
}

impl TransformUrlBuilder {
    pub fn new(config: &CdnConfig) -> Self {
        TransformUrlBuilder {
            cdn_base_url: config.cdn_base_url.trim_end_matches('/').to_string(),
            cloud_name: config.cloud_name.clone(),
        }
    }

    /// Build the display URL for `public_id` with the given transformations.
    pub fn build(&self, public_id: &str, spec: &TransformationSpec) -> String {
        if spec.is_empty() {
            format!(
                "{}/{}/image/upload/{}",
                self.cdn_base_url, self.cloud_name, public_id
            )
        } else {
            format!(
                "{}/{}/image/upload/{}/{}",
                self.cdn_base_url,
                self.cloud_name,
                spec.render(),
                public_id
            )
        }
    }

    /// Build the five responsive variants for `public_id`, keyed by preset
    /// name (`large`, `medium`, `small`, `thumbnail`, `icon`).
    ///
    /// Dimensions come from [`SizePreset`], the same table the pre-upload
    /// resizer targets.
    pub fn responsive_set(&self, public_id: &str) -> HashMap<&'static str, String> {
        SizePreset::ALL
            .iter()
            .map(|preset| {
                let opts = preset.resize_options();
                let spec = TransformationSpec::new()
                    .width(opts.width)
                    .height(opts.height)
                    .crop("fill")
                    .quality("auto")
                    .format("auto");
                (preset.name(), self.build(public_id, &spec))
            })
            .collect()
    }
}
