use std::path::{Path, PathBuf};

use crate::media::decoder::ImageDecoder;
use crate::media::lister::{is_image_file, DirectoryLister};

use super::data::Change;

/// Shown as the image name while no folder with images is loaded
pub const NO_IMAGE_NAME: &str = "No image loaded";

/// Callback invoked for every observable change
pub type Listener = Box<dyn FnMut(Change)>;

/// The browsing state of the viewer: the images of one folder, a cursor
/// into them and the decoded image under the cursor.
///
/// The session is EMPTY while `image_paths` is empty and BROWSING
/// otherwise. Only `load_folder` moves between the two; `next` and
/// `previous` just move the cursor.
///
/// Listeners are boxed `FnMut` closures, so the session is not `Send` and
/// stays on the thread that drives the UI. Every mutation and every
/// notification happens there.
pub struct BrowseSession<L: DirectoryLister, D: ImageDecoder> {
    lister: L,
    decoder: D,
    image_paths: Vec<PathBuf>,
    /// Valid index into `image_paths` whenever it is non-empty
    current_index: usize,
    current_image: Option<D::Image>,
    listeners: Vec<Listener>,
}

impl<L: DirectoryLister, D: ImageDecoder> BrowseSession<L, D> {
    /// Create an empty session
    pub fn new(lister: L, decoder: D) -> Self {
        Self {
            lister,
            decoder,
            image_paths: Vec::new(),
            current_index: 0,
            current_image: None,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for image/name/info changes.
    /// Listeners run synchronously, in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the image list with the images found directly in `folder`
    /// and show the first one.
    ///
    /// An empty path, a missing folder or an unreadable folder all leave
    /// the session EMPTY. Nothing is reported to the caller.
    pub fn load_folder(&mut self, folder: &Path) {
        self.image_paths.clear();
        self.current_index = 0;

        if folder.as_os_str().is_empty() || !folder.is_dir() {
            log::info!("📂 Not a folder, clearing session: {}", folder.display());
            self.clear_image();
            return;
        }

        let files = match self.lister.list_files(folder) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("⚠️  {}", e);
                Vec::new()
            }
        };

        self.image_paths = files.into_iter().filter(|path| is_image_file(path)).collect();

        log::info!(
            "📁 Found {} images in {}",
            self.image_paths.len(),
            folder.display()
        );

        if self.image_paths.is_empty() {
            self.clear_image();
        } else {
            self.display_current();
        }
    }

    /// Move to the next image, wrapping from the last to the first
    pub fn next(&mut self) {
        let len = self.image_paths.len();
        if len == 0 {
            return;
        }

        self.current_index = (self.current_index + 1) % len;
        self.display_current();
    }

    /// Move to the previous image, wrapping from the first to the last
    pub fn previous(&mut self) {
        let len = self.image_paths.len();
        if len == 0 {
            return;
        }

        self.current_index = (self.current_index + len - 1) % len;
        self.display_current();
    }

    /// Paths of the loaded images, in enumeration order
    #[cfg(test)]
    pub fn image_paths(&self) -> &[PathBuf] {
        &self.image_paths
    }

    /// Cursor position, `None` while EMPTY
    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        (!self.image_paths.is_empty()).then_some(self.current_index)
    }

    /// Path under the cursor, `None` while EMPTY
    pub fn current_path(&self) -> Option<&Path> {
        self.image_paths
            .get(self.current_index)
            .map(PathBuf::as_path)
    }

    /// The decoded image under the cursor, if decoding succeeded
    pub fn current_image(&self) -> Option<&D::Image> {
        self.current_image.as_ref()
    }

    pub fn len(&self) -> usize {
        self.image_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_paths.is_empty()
    }

    /// File name of the current image, or a placeholder while EMPTY
    pub fn image_name(&self) -> String {
        match self.current_path() {
            Some(path) => path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            None => NO_IMAGE_NAME.to_string(),
        }
    }

    /// "Image 3 of 12" style position, empty while EMPTY
    pub fn image_info(&self) -> String {
        if self.image_paths.is_empty() {
            String::new()
        } else {
            format!(
                "Image {} of {}",
                self.current_index + 1,
                self.image_paths.len()
            )
        }
    }

    /// Decode the image under the cursor and publish it.
    /// Failures leave the session BROWSING with no image.
    fn display_current(&mut self) {
        let Some(path) = self.image_paths.get(self.current_index).cloned() else {
            return;
        };

        // Release the old image before decoding the new one
        drop(self.current_image.take());

        if !path.exists() {
            log::warn!("⚠️  Image vanished before it could be shown: {}", path.display());
            self.notify_all();
            return;
        }

        match self.decoder.decode(&path) {
            Ok(image) => {
                self.current_image = Some(image);
            }
            Err(e) => {
                log::error!("❌ Error loading image: {}", e);
            }
        }

        self.notify_all();
    }

    /// Drop the held image and publish the empty state
    fn clear_image(&mut self) {
        drop(self.current_image.take());
        self.notify_all();
    }

    fn notify_all(&mut self) {
        for change in [Change::CurrentImage, Change::ImageName, Change::ImageInfo] {
            for listener in &mut self.listeners {
                listener(change);
            }
        }
    }
}

impl<L: DirectoryLister, D: ImageDecoder> std::fmt::Debug for BrowseSession<L, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowseSession")
            .field("image_paths", &self.image_paths)
            .field("current_index", &self.current_index)
            .field("has_image", &self.current_image.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
