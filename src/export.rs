//! PNG export with white background and watermark.
//!
//! The canvas keeps erased pixels transparent, so exporting composites it
//! over an opaque white surface first, then stamps the watermark text in the
//! bottom-right corner and writes the result as a date-named PNG file.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ExportConfig;
use crate::draw::{Canvas, DrawError};

/// Inset of the watermark from the right and bottom canvas edges.
const WATERMARK_INSET: f64 = 20.0;
/// Watermark font size in pixels.
const WATERMARK_FONT_SIZE: f64 = 14.0;
/// Watermark opacity (black at 20%).
const WATERMARK_ALPHA: f64 = 0.2;

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render export image: {0}")]
    Draw(#[from] DrawError),

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("cairo i/o error: {0}")]
    CairoIo(#[from] cairo::IoError),

    #[error("failed to save drawing: {0}")]
    Save(#[from] std::io::Error),
}

/// Renders the canvas onto an opaque white background with the watermark and
/// returns the encoded PNG bytes.
///
/// The output surface has the same dimensions as the canvas, so erased
/// (transparent) regions come out white rather than transparent.
pub fn render_export(canvas: &Canvas, watermark: &str) -> Result<Vec<u8>, ExportError> {
    let surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, canvas.width(), canvas.height())?;
    let ctx = cairo::Context::new(&surface)?;

    // Opaque white background
    ctx.set_source_rgb(1.0, 1.0, 1.0);
    ctx.paint()?;

    // Drawing content on top
    ctx.set_source_surface(canvas.surface(), 0.0, 0.0)?;
    ctx.paint()?;

    if !watermark.is_empty() {
        render_watermark(&ctx, canvas.width() as f64, canvas.height() as f64, watermark);
    }

    drop(ctx);

    let mut bytes = Vec::new();
    surface.write_to_png(&mut bytes)?;
    Ok(bytes)
}

/// Stamps semi-transparent watermark text, right-aligned against the
/// bottom-right corner inset.
fn render_watermark(ctx: &cairo::Context, width: f64, height: f64, text: &str) {
    let _ = ctx.save();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let mut font_desc = pango::FontDescription::from_string("Sans");
    font_desc.set_absolute_size(WATERMARK_FONT_SIZE * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (text_width, text_height) = layout.pixel_size();

    ctx.set_source_rgba(0.0, 0.0, 0.0, WATERMARK_ALPHA);
    ctx.move_to(
        width - WATERMARK_INSET - text_width as f64,
        height - WATERMARK_INSET - text_height as f64,
    );
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}

/// Generate a filename from the template and the current local date.
///
/// The default template produces names like `sketch_2026-8-30.png` (month
/// and day unpadded).
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded PNG bytes to the configured export directory.
///
/// # Returns
/// Path to the saved file.
pub fn save_drawing(image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.directory))?;

    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::info!("Drawing saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
