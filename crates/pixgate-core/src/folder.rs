//! Small shared helpers for destination folders and display sizes.

/// Destination folder for an entity's assets: `{model}/{entity_slug}`.
pub fn generate_folder_path(model: &str, entity_slug: &str) -> String {
    format!("{}/{}", model, entity_slug)
}

/// Human-readable file size, e.g. "1.5 MB".
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    // Two decimals with trailing zeros trimmed: 1.50 -> "1.5", 2.00 -> "2".
    let rendered = format!("{:.2}", value);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", rendered, UNITS[exponent])
}
