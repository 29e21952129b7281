//! Preview layout: turns a diploma into a [Scene] that can be rasterized.
//!
//! Layout works in preview pixels on an 896 pixel wide page with letter landscape
//! proportions. Font sizes come from [crate::sizing], so the preview always reflects
//! the current template variant and scale multipliers.
//!
//! # Example
//!
//! ```
//! use diploma_gen::layout::PreviewRenderer;
//! use diploma_gen::{DiplomaDocument, FieldRole, ScaleSettings, TemplateVariant};
//!
//! let mut doc = DiplomaDocument::default();
//! doc.set(FieldRole::StudentName, "Juan Pérez");
//!
//! let scene = PreviewRenderer::default().render(
//!     &doc,
//!     TemplateVariant::Formal,
//!     &ScaleSettings::default(),
//! );
//! assert_eq!(scene.field(FieldRole::StudentName).unwrap().text, "JUAN PÉREZ  ");
//! ```

mod diploma;
mod margins;
mod scene;

pub use diploma::*;
pub use margins::*;
pub use scene::*;
