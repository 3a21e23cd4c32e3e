/// Media access module
///
/// This module wraps the two filesystem collaborators of the viewer:
/// - Listing the image files of a folder (lister.rs)
/// - Decoding an image file into a displayable handle (decoder.rs)

pub mod decoder;
pub mod lister;
