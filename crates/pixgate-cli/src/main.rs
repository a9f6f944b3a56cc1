//! Pixgate CLI — command-line client for the image CDN gateway.
//!
//! Set PIXGATE_CLOUD_NAME, PIXGATE_API_KEY, and PIXGATE_API_SECRET.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pixgate_cli::{content_type_from_extension, init_tracing};
use pixgate_core::{CdnConfig, MediaFile, SizePreset, TransformUrlBuilder, TransformationSpec};
use pixgate_gateway::{DeleteGateway, UploadGateway, UploadOptions};
use pixgate_processing::ImageResizer;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "pixgate", about = "Image CDN gateway CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image file
    Upload {
        /// Path to the image to upload
        file: std::path::PathBuf,
        /// Target folder, e.g. "blog/my-post"
        #[arg(long)]
        folder: Option<String>,
        /// Skip provider-side quality/format compression
        #[arg(long)]
        no_compress: bool,
    },
    /// Delete assets by public id
    Delete {
        /// Public ids to delete
        #[arg(required = true)]
        public_ids: Vec<String>,
    },
    /// Build a transformation URL for a stored asset
    Url {
        /// Public id of the asset
        public_id: String,
        /// Width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Height in pixels
        #[arg(long)]
        height: Option<u32>,
        /// Crop mode: fill, fit, scale
        #[arg(long)]
        crop: Option<String>,
    },
    /// Build the five responsive variant URLs for a stored asset
    Responsive {
        /// Public id of the asset
        public_id: String,
    },
    /// Resize an image locally to a named preset
    Resize {
        /// Path to the image to resize
        file: std::path::PathBuf,
        /// Preset: large, medium, small, thumbnail, icon
        #[arg(long, default_value = "medium")]
        preset: String,
        /// Output path; defaults to resized_<input name> next to the input
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn read_media_file(path: &std::path::Path) -> anyhow::Result<MediaFile> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(MediaFile::new(
        filename,
        content_type_from_extension(path),
        data,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CdnConfig::from_env().context(
        "Failed to load configuration. Set PIXGATE_CLOUD_NAME, PIXGATE_API_KEY, and PIXGATE_API_SECRET",
    )?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            folder,
            no_compress,
        } => {
            let media = read_media_file(&file)?;
            let gateway = UploadGateway::new(config.clone())?;
            let options = UploadOptions {
                folder,
                compression: !no_compress,
                max_file_size_mb: config.max_file_size_mb,
            };
            let result = gateway.upload(&media, &options).await?;
            print_json(&result)?;
        }
        Commands::Delete { public_ids } => {
            let gateway = DeleteGateway::new(config)?;
            let ids: Vec<&str> = public_ids.iter().map(String::as_str).collect();
            let results = gateway.delete_batch(&ids).await;
            let report: Vec<_> = results
                .into_iter()
                .map(|(public_id, removed)| serde_json::json!({
                    "public_id": public_id,
                    "removed": removed,
                }))
                .collect();
            print_json(&report)?;
        }
        Commands::Url {
            public_id,
            width,
            height,
            crop,
        } => {
            let mut spec = TransformationSpec::new();
            if let Some(width) = width {
                spec = spec.width(width);
            }
            if let Some(height) = height {
                spec = spec.height(height);
            }
            if let Some(crop) = crop {
                spec = spec.crop(&crop);
            }
            let url = TransformUrlBuilder::new(&config).build(&public_id, &spec);
            print_json(&serde_json::json!({ "url": url }))?;
        }
        Commands::Responsive { public_id } => {
            let urls = TransformUrlBuilder::new(&config).responsive_set(&public_id);
            print_json(&urls)?;
        }
        Commands::Resize { file, preset, out } => {
            let preset = SizePreset::from_name(&preset)
                .with_context(|| format!("Unknown preset: {}", preset))?;
            let media = read_media_file(&file)?;

            let resized = ImageResizer::new().resize(&media, &preset.resize_options())?;

            let out_path = out.unwrap_or_else(|| file.with_file_name(&resized.filename));
            std::fs::write(&out_path, &resized.data)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;

            print_json(&serde_json::json!({
                "output": out_path.display().to_string(),
                "bytes": resized.size_bytes(),
                "content_type": resized.content_type,
            }))?;
        }
    }

    Ok(())
}
