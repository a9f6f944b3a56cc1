//! Size presets shared by the transformation URL builder and the
//! pre-upload resizer.
//!
//! The display URLs and the client-side resizer must agree on these
//! dimensions, so both read from this single table.

/// Output format for encoded images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }
}

/// Resize target: bounding box plus encoding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOptions {
    pub width: u32,
    pub height: u32,
    /// JPEG/WebP quality, 0-100
    pub quality: u8,
    pub format: OutputFormat,
}

/// Named size presets for responsive delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizePreset {
    Large,
    Medium,
    Small,
    Thumbnail,
    Icon,
}

impl SizePreset {
    /// All presets, largest first. This is also the key order of
    /// responsive URL sets.
    pub const ALL: [SizePreset; 5] = [
        SizePreset::Large,
        SizePreset::Medium,
        SizePreset::Small,
        SizePreset::Thumbnail,
        SizePreset::Icon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SizePreset::Large => "large",
            SizePreset::Medium => "medium",
            SizePreset::Small => "small",
            SizePreset::Thumbnail => "thumbnail",
            SizePreset::Icon => "icon",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "large" => Some(SizePreset::Large),
            "medium" => Some(SizePreset::Medium),
            "small" => Some(SizePreset::Small),
            "thumbnail" => Some(SizePreset::Thumbnail),
            "icon" => Some(SizePreset::Icon),
            _ => None,
        }
    }

    pub fn resize_options(&self) -> ResizeOptions {
        match self {
            SizePreset::Large => ResizeOptions {
                width: 1920,
                height: 1080,
                quality: 80,
                format: OutputFormat::Jpeg,
            },
            SizePreset::Medium => ResizeOptions {
                width: 1280,
                height: 720,
                quality: 80,
                format: OutputFormat::Jpeg,
            },
            SizePreset::Small => ResizeOptions {
                width: 640,
                height: 360,
                quality: 80,
                format: OutputFormat::Jpeg,
            },
            SizePreset::Thumbnail => ResizeOptions {
                width: 320,
                height: 180,
                quality: 70,
                format: OutputFormat::Jpeg,
            },
            SizePreset::Icon => ResizeOptions {
                width: 64,
                height: 64,
                quality: 70,
                format: OutputFormat::Jpeg,
            },
        }
    }
}
