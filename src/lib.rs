//! Fill in, style and export letter-size diplomas.
//!
//! A [Studio](editor::Studio) holds the text of a diploma, the selected
//! [TemplateVariant] and the per-field [ScaleSettings]. The
//! [PreviewRenderer](layout::PreviewRenderer) lays those out as a [layout::Scene],
//! which an [Exporter](export::Exporter) rasterizes and wraps in a single page,
//! letter landscape PDF.

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

mod page;
pub use page::*;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

pub(crate) mod content;
pub(crate) mod refs;

pub mod config;
pub mod diploma;
pub mod editor;
pub mod export;
/// Lays a diploma out on the preview surface
pub mod layout;
pub mod pagesize;
pub mod raster;
pub mod settings;
pub mod sizing;
pub mod store;
pub mod style;

pub use config::Config;
pub use diploma::{DiplomaDocument, FieldRole};
pub use editor::Studio;
pub use export::Exporter;
pub use settings::ScaleSettings;
pub use style::TemplateVariant;

/// Re-export PDF-writer functionality
pub use pdf_writer;

/// Install a `tracing` subscriber that logs to stderr, filtered by `RUST_LOG`
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
