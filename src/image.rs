use crate::refs::{ObjectReferences, RefType};
use image::{DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

/// A raster image to be embedded in the document. Pixels are stored as-is and
/// flate-compressed when the document is written.
pub struct Image {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
}

struct EncodeOutput {
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    pub fn new_raster(image: DynamicImage) -> Image {
        let (width, height) = image.dimensions();
        Image {
            image,
            width,
            height,
        }
    }

    /// Whether any pixel is less than fully opaque, i.e. whether a soft mask is needed
    pub fn has_transparency(&self) -> bool {
        self.image.color().has_alpha() && self.image.pixels().any(|p| (p.2).0[3] < u8::MAX)
    }

    fn encode(&self) -> EncodeOutput {
        let level = CompressionLevel::DefaultLevel as u8;

        let mask = self.has_transparency().then(|| {
            let alphas: Vec<u8> = self.image.pixels().map(|p| (p.2).0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });

        let bytes = compress_to_vec_zlib(self.image.to_rgb8().as_raw(), level);

        EncodeOutput { bytes, mask }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn opaque_rgba_needs_no_mask() {
        let img = RgbaImage::from_pixel(4, 3, Rgba([255, 255, 255, 255]));
        let image = Image::new_raster(DynamicImage::ImageRgba8(img));
        assert_eq!((image.width, image.height), (4, 3));
        assert!(!image.has_transparency());
        assert!(image.encode().mask.is_none());
    }

    #[test]
    fn transparent_pixels_produce_a_mask() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
        let image = Image::new_raster(DynamicImage::ImageRgba8(img));
        assert!(image.has_transparency());
        assert!(image.encode().mask.is_some());
    }
}
