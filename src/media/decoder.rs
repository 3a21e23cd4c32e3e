use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::path::Path;

/// Decodes an image file into an owned image resource.
///
/// The session holds at most one `Image` at a time and drops it
/// before asking for the next one.
pub trait ImageDecoder {
    type Image;

    fn decode(&self, path: &Path) -> Result<Self::Image>;
}

/// A decoded image ready for display
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// RGBA pixels wrapped for the iced image widget
    pub handle: Handle,
}

/// Decoder backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    type Image = DecodedImage;

    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let img = image::open(path).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        // iced expects RGBA8
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("🖼️  Decoded {}: {}x{}", path.display(), width, height);

        Ok(DecodedImage {
            width,
            height,
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
        })
    }
}
