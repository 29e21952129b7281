//! Content stream rendering for pages.

use crate::page::PageContents;
use std::io::Write;

/// Renders page contents to a PDF content stream, converting high-level
/// content items into low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width().0,
                    image.position.height().0,
                    image.position.x1.0,
                    image.position.y1.0
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use crate::page::ImageLayout;
    use crate::rect::Rect;
    use crate::units::Pt;
    use id_arena::Arena;
    use image::{DynamicImage, RgbaImage};

    #[test]
    fn empty_contents_render_nothing() {
        assert!(render_contents(&[]).unwrap().is_empty());
    }

    #[test]
    fn image_is_scaled_onto_its_position() {
        let mut images: Arena<Image> = Arena::new();
        let id = images.alloc(Image::new_raster(DynamicImage::ImageRgba8(RgbaImage::new(
            1, 1,
        ))));
        let contents = vec![PageContents::Image(ImageLayout {
            image_id: id,
            position: Rect::new(Pt(0.0), Pt(0.0), Pt(792.0), Pt(612.0)),
        })];

        let rendered = String::from_utf8(render_contents(&contents).unwrap()).unwrap();
        assert_eq!(rendered, "q\n792 0 0 612 0 0 cm\n/I0 Do\nQ\n");
    }
}
