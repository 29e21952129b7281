//! Turns a rendered preview into a downloadable PDF.

use crate::document::Document;
use crate::image::Image;
use crate::info::Info;
use crate::layout::Scene;
use crate::page::Page;
use crate::pagesize::{PageOrientation, LETTER};
use crate::raster::Rasterizer;
use crate::DiplomaError;
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

/// Preview pixels are rendered at this many device pixels for print quality
pub const DEFAULT_RASTER_SCALE: f32 = 4.0;

pub const LABEL_IDLE: &str = "Descargar PDF";
pub const LABEL_BUSY: &str = "Generando PDF...";

/// The file name an exported diploma is saved under. Spaces (and path separators)
/// become underscores; everything else is kept verbatim.
pub fn export_filename(student_name: &str) -> String {
    let name: String = student_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("Diploma-{name}.pdf")
}

/// Build a single page, letter landscape PDF with `image` stretched over the
/// whole page
pub fn render_pdf(image: RgbaImage, info: Info) -> Result<Vec<u8>, DiplomaError> {
    let mut doc = Document::default();
    doc.set_info(info);

    let image_id = doc.add_image(Image::new_raster(DynamicImage::ImageRgba8(image)));
    let mut page = Page::new(LETTER.landscape());
    page.add_full_bleed_image(image_id);
    doc.add_page(page);

    doc.to_bytes()
}

/// Clears the busy flag when dropped
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<BusyGuard<'a>> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs exports, one at a time
pub struct Exporter<R: Rasterizer> {
    rasterizer: R,
    scale: f32,
    issuer: String,
    busy: AtomicBool,
}

impl<R: Rasterizer> Exporter<R> {
    pub fn new(rasterizer: R) -> Exporter<R> {
        Exporter {
            rasterizer,
            scale: DEFAULT_RASTER_SCALE,
            issuer: String::new(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Exporter<R> {
        self.scale = scale;
        self
    }

    /// Who the PDF metadata names as the author
    pub fn with_issuer<S: Into<String>>(mut self, issuer: S) -> Exporter<R> {
        self.issuer = issuer.into();
        self
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.is_busy() {
            LABEL_BUSY
        } else {
            LABEL_IDLE
        }
    }

    /// Export `scene` as `Diploma-<student name>.pdf` in `out_dir`, returning the
    /// path written. Fails with [DiplomaError::Busy] if another export is running.
    pub fn export(
        &self,
        scene: &Scene,
        student_name: &str,
        out_dir: &Path,
    ) -> Result<PathBuf, DiplomaError> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or(DiplomaError::Busy)?;

        let path = out_dir.join(export_filename(student_name));
        match self.export_to(scene, student_name, &path) {
            Ok(()) => {
                info!(path = %path.display(), "exported diploma");
                Ok(path)
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "failed to export diploma");
                Err(e)
            }
        }
    }

    fn export_to(&self, scene: &Scene, student_name: &str, path: &Path) -> Result<(), DiplomaError> {
        let image = self.rasterizer.rasterize(scene, self.scale)?;
        let bytes = render_pdf(image, Info::for_diploma(student_name, &self.issuer))?;

        if let Err(e) = std::fs::write(path, &bytes) {
            // don't leave a truncated file behind
            let _ = std::fs::remove_file(path);
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::config::Config;
    use crate::layout::PreviewRenderer;
    use crate::raster::{GlyphRasterizer, RasterError};
    use crate::store::MemoryStore;
    use crate::{FieldRole, Studio};
    use crate::units::Px;
    use image::Rgba;
    use std::sync::mpsc::{channel, Receiver, Sender};
    use std::sync::{Arc, Mutex};

    struct SolidRasterizer;

    impl Rasterizer for SolidRasterizer {
        fn rasterize(&self, scene: &Scene, scale: f32) -> Result<RgbaImage, RasterError> {
            let w = (scene.width.0 * scale).round() as u32;
            let h = (scene.height.0 * scale).round() as u32;
            Ok(RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255])))
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize(&self, _: &Scene, _: f32) -> Result<RgbaImage, RasterError> {
            Err(RasterError::NoFonts)
        }
    }

    /// Signals when rasterization starts, then waits to be released
    struct BlockingRasterizer {
        started: Mutex<Sender<()>>,
        release: Mutex<Receiver<()>>,
    }

    impl Rasterizer for BlockingRasterizer {
        fn rasterize(&self, scene: &Scene, scale: f32) -> Result<RgbaImage, RasterError> {
            self.started.lock().unwrap().send(()).unwrap();
            self.release.lock().unwrap().recv().unwrap();
            SolidRasterizer.rasterize(scene, scale)
        }
    }

    fn scene() -> Scene {
        let mut scene = Scene::new(Px(11.0), Px(8.5));
        scene.fill(scene.bounds(), colours::WHITE);
        scene
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn filename_replaces_spaces() {
        assert_eq!(export_filename("Juan Pérez"), "Diploma-Juan_Pérez.pdf");
        assert_eq!(export_filename("  Ana  "), "Diploma-__Ana__.pdf");
        assert_eq!(export_filename(""), "Diploma-.pdf");
        assert_eq!(export_filename("a/b"), "Diploma-a_b.pdf");
    }

    #[test]
    fn pdf_is_one_landscape_letter_page_with_one_image() {
        let image = RgbaImage::from_pixel(44, 34, Rgba([10, 20, 30, 255]));
        let bytes = render_pdf(image, Info::for_diploma("Ana", "Instituto")).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Type /Page\n"), 1);
        assert_eq!(count(&bytes, b"/Subtype /Image"), 1);
        assert_eq!(count(&bytes, b"/MediaBox [0 0 792 612]"), 1);
        assert_eq!(count(&bytes, b"/Width 44"), 1);
        assert_eq!(count(&bytes, b"/SMask"), 0);
    }

    #[test]
    fn transparent_pixels_get_a_soft_mask() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        let bytes = render_pdf(image, Info::new()).unwrap();
        assert_eq!(count(&bytes, b"/SMask"), 1);
        assert_eq!(count(&bytes, b"/Subtype /Image"), 2);
    }

    #[test]
    fn export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(SolidRasterizer).with_scale(2.0);

        let path = exporter.export(&scene(), "Juan Pérez", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("Diploma-Juan_Pérez.pdf"));

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Width 22"), 1);
        assert!(!exporter.is_busy());
        assert_eq!(exporter.trigger_label(), "Descargar PDF");
    }

    #[test]
    fn failed_export_produces_no_file_and_clears_busy() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(FailingRasterizer);

        let result = exporter.export(&scene(), "Ana", dir.path());
        assert!(matches!(result, Err(DiplomaError::Raster(RasterError::NoFonts))));
        assert!(!exporter.is_busy());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn unwritable_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let exporter = Exporter::new(SolidRasterizer).with_scale(1.0);

        let result = exporter.export(&scene(), "Ana", &missing);
        assert!(matches!(result, Err(DiplomaError::Io(_))));
        assert!(!exporter.is_busy());
    }

    #[test]
    fn second_export_while_busy_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let (started_tx, started_rx) = channel();
        let (release_tx, release_rx) = channel();
        let exporter = Arc::new(
            Exporter::new(BlockingRasterizer {
                started: Mutex::new(started_tx),
                release: Mutex::new(release_rx),
            })
            .with_scale(1.0),
        );

        let first = {
            let exporter = Arc::clone(&exporter);
            let out = dir.path().to_path_buf();
            std::thread::spawn(move || exporter.export(&scene(), "Ana", &out))
        };

        started_rx.recv().unwrap();
        assert!(exporter.is_busy());
        assert_eq!(exporter.trigger_label(), "Generando PDF...");
        assert!(matches!(
            exporter.export(&scene(), "Ana", dir.path()),
            Err(DiplomaError::Busy)
        ));

        release_tx.send(()).unwrap();
        let path = first.join().unwrap().unwrap();
        assert!(path.exists());
        assert!(!exporter.is_busy());
    }

    #[test]
    fn default_config_exports_a_diploma_with_text() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();

        let mut studio = Studio::open(MemoryStore::new());
        studio.edit(FieldRole::StudentName, "Juan Pérez");
        let scene = studio.preview(&PreviewRenderer::new(config.letterhead.clone()));

        let exporter = Exporter::new(GlyphRasterizer::from_config(&config).unwrap())
            .with_scale(1.0)
            .with_issuer(config.letterhead.institution.as_str());
        let path = exporter
            .export(&scene, &studio.document().student_name, dir.path())
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(path.ends_with("Diploma-Juan_Pérez.pdf"));
        assert_eq!(count(&bytes, b"/Subtype /Image"), 1);
        assert_eq!(count(&bytes, b"/Width 896"), 1);
        // the white page covers the whole canvas
        assert_eq!(count(&bytes, b"/SMask"), 0);
    }
}
