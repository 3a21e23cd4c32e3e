/// Shared data structures for the browsing state
///
/// These types flow from the session to whoever observes it
/// (the window, the log).

/// An observable property of `BrowseSession` that just changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The decoded image was replaced or cleared
    CurrentImage,
    /// The display name (file name or placeholder) changed
    ImageName,
    /// The "Image n of m" string changed
    ImageInfo,
}
