use crate::content::render_contents;
use crate::image::Image;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::DiplomaError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

/// Placement of a document image on a page
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Image(ImageLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The content placed on the page, in painting order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect::new(Pt(0.0), Pt(0.0), size.0, size.1),
            contents: Vec::default(),
        }
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    /// Place an image so that it covers the whole page with no margin
    pub fn add_full_bleed_image(&mut self, image_id: Id<Image>) {
        self.add_image(ImageLayout {
            image_id,
            position: self.media_box,
        });
    }

    fn images(&self) -> impl Iterator<Item = Id<Image>> + '_ {
        self.contents.iter().map(|c| match c {
            PageContents::Image(layout) => layout.image_id,
        })
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), DiplomaError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(DiplomaError::PageMissing)?;
        let page_tree = refs
            .get(RefType::PageTree)
            .ok_or(DiplomaError::PageMissing)?;

        let mut image_refs = Vec::new();
        for image_id in self.images() {
            if images.get(image_id).is_none() {
                return Err(DiplomaError::ImageMissing);
            }
            let image_ref = refs
                .get(RefType::Image(image_id.index()))
                .ok_or(DiplomaError::ImageMissing)?;
            image_refs.push((image_id.index(), image_ref));
        }

        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree);

        let mut resources = page.resources();
        let mut resource_xobjects = resources.x_objects();
        for (index, image_ref) in image_refs {
            resource_xobjects.pair(Name(format!("I{index}").as_bytes()), image_ref);
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
