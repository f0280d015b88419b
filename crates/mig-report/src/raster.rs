//! SVG rasterization and file output.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::{ImageBuffer, RgbaImage};
use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::{Options, Tree};
use tracing::{debug, info, warn};

use crate::chart::UNITS_PER_INCH;
use crate::error::{ReportError, Result};

/// Default output resolution.
pub const DEFAULT_DPI: u32 = 300;

const METERS_PER_INCH: f64 = 0.0254;

/// Font sources for text rendering.
#[derive(Debug, Clone)]
pub struct FontOptions {
    /// Extra font files loaded before system fonts.
    pub files: Vec<PathBuf>,
    /// Whether to fall back to installed system fonts.
    pub system_fonts: bool,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            system_fonts: true,
        }
    }
}

/// Renders SVG bytes at `dpi` onto a white canvas.
pub fn rasterize(svg: &[u8], dpi: u32, fonts: &FontOptions) -> Result<RgbaImage> {
    let start = Instant::now();
    let mut options = Options::default();
    for path in &fonts.files {
        options
            .fontdb_mut()
            .load_font_file(path)
            .map_err(|source| ReportError::FontLoad {
                path: path.clone(),
                source,
            })?;
    }
    if fonts.system_fonts {
        options.fontdb_mut().load_system_fonts();
    }
    if options.fontdb.is_empty() {
        warn!("no fonts available, chart text will not be drawn");
    }

    let tree = Tree::from_data(svg, &options).map_err(|err| ReportError::SvgParse {
        message: err.to_string(),
    })?;

    let scale = dpi as f32 / UNITS_PER_INCH;
    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(ReportError::Canvas { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let image: RgbaImage = ImageBuffer::from_raw(width, height, pixmap.take())
        .ok_or(ReportError::Canvas { width, height })?;
    info!(
        dpi,
        width,
        height,
        fonts = options.fontdb.len(),
        duration_ms = start.elapsed().as_millis(),
        "rasterization complete"
    );
    Ok(image)
}

/// Pixels per meter for a DPI, as stored in the PNG `pHYs` chunk.
pub fn pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

/// Writes an RGBA image as PNG with its physical resolution recorded.
pub fn write_png(image: &RgbaImage, path: &Path, dpi: u32) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = pixels_per_meter(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    debug!(path = %path.display(), dpi, "png written");
    Ok(())
}

/// Writes the composed SVG document as-is.
pub fn write_svg(svg: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, svg).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = svg.len(), "svg written");
    Ok(())
}
