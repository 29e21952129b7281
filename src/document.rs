use crate::{
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    DiplomaError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Pdf, Ref};

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it into memory with [Document::to_bytes]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add an image to the document structure. Images are stored "globally" within the
    /// document, such that any page can place them by referring to the returned id.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Render the entire document into memory
    pub fn to_bytes(self) -> Result<Vec<u8>, DiplomaError> {
        let Document {
            info,
            pages,
            page_order,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, image) in images.iter() {
            image.write(&mut refs, i.index(), &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(DiplomaError::PageMissing)?;
            page.write(&mut refs, page_index, &images, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{PageOrientation, LETTER};
    use image::{DynamicImage, Rgba, RgbaImage};

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|w| *w == needle)
            .count()
    }

    #[test]
    fn writes_a_single_page_with_one_image() {
        let mut doc = Document::default();
        doc.set_info(Info::new().title("test").clone());
        let image = doc.add_image(Image::new_raster(DynamicImage::ImageRgba8(
            RgbaImage::from_pixel(8, 6, Rgba([255, 255, 255, 255])),
        )));
        let mut page = Page::new(LETTER.landscape());
        page.add_full_bleed_image(image);
        doc.add_page(page);

        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Type /Page\n"), 1);
        assert_eq!(count(&bytes, b"/Subtype /Image"), 1);
        assert_eq!(count(&bytes, b"/SMask"), 0);
    }

    #[test]
    fn placing_an_unknown_image_fails() {
        let mut other = Document::default();
        let foreign = other.add_image(Image::new_raster(DynamicImage::ImageRgba8(
            RgbaImage::new(1, 1),
        )));

        let mut doc = Document::default();
        let mut page = Page::new(LETTER.landscape());
        page.add_full_bleed_image(foreign);
        doc.add_page(page);

        assert!(matches!(doc.to_bytes(), Err(DiplomaError::ImageMissing)));
    }
}
