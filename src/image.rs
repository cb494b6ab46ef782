use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::{ColorType, DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::{Path, PathBuf};

/// Where the pixel data of an [`Image`] comes from when it is written
#[derive(Debug)]
pub enum ImageSource {
    /// An RGB JPEG on disk, embedded as-is
    DirectlyEmbeddableJpeg(PathBuf),
    /// A decoded image, re-encoded with Flate when written
    Decoded(DynamicImage),
}

/// A raster image that can be placed on pages. Width and height are in pixels.
#[derive(Debug)]
pub struct Image {
    pub source: ImageSource,
    pub width: f32,
    pub height: f32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load an image from disk. RGB JPEGs are passed straight through to the PDF; anything
    /// else the `image` crate can decode is re-encoded.
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let path = path.as_ref();
        let is_tga = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("tga"))
            .unwrap_or(false);

        let data = std::fs::read(path)?;

        let format = if is_tga {
            image::ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };
        let image = image::load_from_memory_with_format(&data, format)?;

        match (format, image.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => {
                // we can embed it directly!
                Ok(Image {
                    width: image.width() as f32,
                    height: image.height() as f32,
                    source: ImageSource::DirectlyEmbeddableJpeg(path.to_owned()),
                })
            }
            _ => Ok(Image::new(image)),
        }
    }

    /// Wrap an already decoded image
    pub fn new(image: DynamicImage) -> Image {
        Image {
            width: image.width() as f32,
            height: image.height() as f32,
            source: ImageSource::Decoded(image),
        }
    }

    fn encode(&self) -> Result<EncodeOutput, PDFError> {
        match &self.source {
            ImageSource::DirectlyEmbeddableJpeg(path) => {
                let bytes = std::fs::read(path)?;
                Ok(EncodeOutput {
                    filter: Filter::DctDecode,
                    bytes,
                    mask: None,
                })
            }
            ImageSource::Decoded(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                Ok(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                })
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode()?;

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
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

        Ok(())
    }
}
