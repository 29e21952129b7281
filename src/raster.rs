//! Rasterization of preview scenes into RGBA images.
//!
//! Text is rendered with ab_glyph into an anti-aliased coverage mask which is
//! blended onto the canvas. The canvas starts fully transparent; anything not
//! painted by the scene stays transparent.

use crate::colour::Colour;
use crate::config::{Config, FontSource};
use crate::layout::{Element, Scene, TextRun};
use crate::rect::Rect;
use crate::style::{FontFamily, FontWeight};
use crate::units::Px;
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("failed to read font {path}: {source}")]
    FontIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not a valid TrueType / OpenType font")]
    InvalidFont { path: PathBuf },

    #[error("no fonts are loaded, cannot render text")]
    NoFonts,

    #[error("failed to load logo: {0}")]
    Logo(#[from] image::ImageError),

    #[error("raster scale must be positive and finite, got {0}")]
    InvalidScale(f32),
}

/// Converts a laid-out scene into pixels
pub trait Rasterizer {
    /// Render `scene` at `scale` device pixels per preview pixel
    fn rasterize(&self, scene: &Scene, scale: f32) -> Result<RgbaImage, RasterError>;
}

static SERIF_REGULAR: &[u8] = include_bytes!("fonts/DejaVuSerif.ttf");
static SERIF_BOLD: &[u8] = include_bytes!("fonts/DejaVuSerif-Bold.ttf");

/// The fonts available for rendering, keyed by family and weight
#[derive(Default, Clone)]
pub struct FontBook {
    fonts: BTreeMap<(FontFamily, FontWeight), FontArc>,
}

impl FontBook {
    pub fn load(sources: &[FontSource]) -> Result<FontBook, RasterError> {
        let mut book = FontBook::default();
        for source in sources {
            let bytes = std::fs::read(&source.path).map_err(|source_err| RasterError::FontIo {
                path: source.path.clone(),
                source: source_err,
            })?;
            let font = FontArc::try_from_vec(bytes).map_err(|_| RasterError::InvalidFont {
                path: source.path.clone(),
            })?;
            debug!(family = ?source.family, weight = ?source.weight, path = %source.path.display(), "loaded font");
            book.insert(source.family, source.weight, font);
        }
        Ok(book)
    }

    /// The serif faces compiled into the binary, used when no fonts are configured.
    /// Every other family falls back to them.
    pub fn builtin() -> Result<FontBook, RasterError> {
        let face = |bytes: &'static [u8], name: &str| {
            FontArc::try_from_slice(bytes).map_err(|_| RasterError::InvalidFont {
                path: PathBuf::from(name),
            })
        };
        let mut book = FontBook::default();
        book.insert(
            FontFamily::Serif,
            FontWeight::Regular,
            face(SERIF_REGULAR, "DejaVuSerif.ttf")?,
        );
        book.insert(
            FontFamily::Serif,
            FontWeight::Bold,
            face(SERIF_BOLD, "DejaVuSerif-Bold.ttf")?,
        );
        Ok(book)
    }

    pub fn insert(&mut self, family: FontFamily, weight: FontWeight, font: FontArc) {
        self.fonts.insert((family, weight), font);
    }

    /// Find the best available font: the exact face, then the family's regular face,
    /// then the regular serif, then whatever is loaded.
    pub fn resolve(&self, family: FontFamily, weight: FontWeight) -> Option<&FontArc> {
        self.fonts
            .get(&(family, weight))
            .or_else(|| self.fonts.get(&(family, FontWeight::Regular)))
            .or_else(|| self.fonts.get(&(FontFamily::Serif, FontWeight::Regular)))
            .or_else(|| self.fonts.values().next())
    }
}

/// Rasterizer drawing text with ab_glyph and images with the image crate
#[derive(Default, Clone)]
pub struct GlyphRasterizer {
    pub fonts: FontBook,
    pub logo: Option<RgbaImage>,
}

impl GlyphRasterizer {
    pub fn new(fonts: FontBook) -> GlyphRasterizer {
        GlyphRasterizer { fonts, logo: None }
    }

    pub fn with_logo(mut self, logo: RgbaImage) -> GlyphRasterizer {
        self.logo = Some(logo);
        self
    }

    /// Load the configured fonts and logo. Without any configured fonts the
    /// built-in serif faces are used.
    pub fn from_config(config: &Config) -> Result<GlyphRasterizer, RasterError> {
        let fonts = if config.fonts.is_empty() {
            debug!("no fonts configured, using built-in serif");
            FontBook::builtin()?
        } else {
            FontBook::load(&config.fonts)?
        };
        let rasterizer = GlyphRasterizer::new(fonts);
        match &config.logo {
            Some(path) => Ok(rasterizer.with_logo(image::open(path)?.to_rgba8())),
            None => Ok(rasterizer),
        }
    }

    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        run: &TextRun,
        scale: f32,
    ) -> Result<(), RasterError> {
        if run.text.is_empty() {
            return Ok(());
        }
        let font = self
            .fonts
            .resolve(run.family, run.weight)
            .ok_or(RasterError::NoFonts)?;

        // ab_glyph scales by line height (ascent - descent), CSS by em size
        let em = run.size.0 * scale;
        let units_per_em = font.units_per_em().unwrap_or(1000.0);
        let px_scale = PxScale::from(em * font.height_unscaled() / units_per_em);
        let scaled = font.as_scaled(px_scale);
        let letter_spacing = run.tracking * em;

        let width: f32 = run
            .text
            .chars()
            .map(|ch| scaled.h_advance(font.glyph_id(ch)) + letter_spacing)
            .sum();
        let mut caret = run.center_x.0 * scale - width / 2.0;

        // half-leading: the glyph box is centred vertically in the line box
        let content_height = scaled.ascent() - scaled.descent();
        let baseline =
            run.top.0 * scale + (run.line_height.0 * scale - content_height) / 2.0 + scaled.ascent();

        let [r, g, b] = run.colour.to_rgb8();
        for ch in run.text.chars() {
            let id = font.glyph_id(ch);
            let glyph = id.with_scale_and_position(px_scale, ab_glyph::point(caret, baseline));
            caret += scaled.h_advance(id) + letter_spacing;

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let x = px as i64 + bounds.min.x as i64;
                    let y = py as i64 + bounds.min.y as i64;
                    blend_pixel(canvas, x, y, [r, g, b], coverage);
                });
            }
        }

        trace!(text = %run.text, width, "drew text run");
        Ok(())
    }

    fn draw_logo(&self, canvas: &mut RgbaImage, slot: Rect<Px>, scale: f32) {
        let Some(logo) = &self.logo else {
            return;
        };
        if logo.width() == 0 || logo.height() == 0 {
            return;
        }

        let height = (slot.height().0 * scale).round().max(1.0);
        let width = (logo.width() as f32 * height / logo.height() as f32)
            .round()
            .max(1.0);
        let resized = imageops::resize(logo, width as u32, height as u32, FilterType::Lanczos3);

        let x = (slot.x1.0 + slot.width().0 / 2.0) * scale - width / 2.0;
        let y = slot.y1.0 * scale;
        imageops::overlay(canvas, &resized, x.round() as i64, y.round() as i64);
    }
}

/// Paint `rgb` over the pixel at (x, y) with the given coverage, using
/// source-over compositing. Out of bounds pixels are ignored.
fn blend_pixel(canvas: &mut RgbaImage, x: i64, y: i64, rgb: [u8; 3], coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }

    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    let dst_alpha = dst.0[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let src = rgb[i] as f32 / 255.0;
        let prev = dst.0[i] as f32 / 255.0;
        let value = (src * alpha + prev * dst_alpha * (1.0 - alpha)) / out_alpha;
        out[i] = (value * 255.0).round() as u8;
    }
    out[3] = (out_alpha * 255.0).round() as u8;
    *dst = Rgba(out);
}

fn fill_rect(canvas: &mut RgbaImage, rect: Rect<Px>, scale: f32, colour: Colour) {
    let x1 = (rect.x1.0 * scale).round().max(0.0) as i64;
    let y1 = (rect.y1.0 * scale).round().max(0.0) as i64;
    let x2 = ((rect.x2.0 * scale).round() as i64).min(canvas.width() as i64);
    let y2 = ((rect.y2.0 * scale).round() as i64).min(canvas.height() as i64);
    let rgb = colour.to_rgb8();
    for y in y1..y2 {
        for x in x1..x2 {
            blend_pixel(canvas, x, y, rgb, 1.0);
        }
    }
}

impl Rasterizer for GlyphRasterizer {
    fn rasterize(&self, scene: &Scene, scale: f32) -> Result<RgbaImage, RasterError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RasterError::InvalidScale(scale));
        }

        // rounded like fill edges, so a full-page fill covers every pixel
        let width = (scene.width.0 * scale).round().max(1.0) as u32;
        let height = (scene.height.0 * scale).round().max(1.0) as u32;
        let mut canvas = RgbaImage::new(width, height);

        for element in scene.elements.iter() {
            match element {
                Element::Fill { rect, colour } => fill_rect(&mut canvas, *rect, scale, *colour),
                Element::Text(run) => self.draw_text(&mut canvas, run, scale)?,
                Element::Logo { slot } => self.draw_logo(&mut canvas, *slot, scale),
            }
        }

        debug!(width, height, scale, "rasterized scene");
        Ok(canvas)
    }
}
