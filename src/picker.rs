use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by a `FolderPicker`
pub type PickFuture = Pin<Box<dyn Future<Output = Option<PathBuf>> + Send>>;

/// Asks the user for one folder. `None` means the user cancelled.
pub trait FolderPicker: Send + Sync {
    fn pick_folder(&self) -> PickFuture;
}

/// Native folder dialog via rfd
#[derive(Debug, Clone)]
pub struct RfdFolderPicker {
    title: String,
}

impl RfdFolderPicker {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for RfdFolderPicker {
    fn default() -> Self {
        Self::new("Select Image Folder")
    }
}

impl FolderPicker for RfdFolderPicker {
    fn pick_folder(&self) -> PickFuture {
        let title = self.title.clone();

        Box::pin(async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        })
    }
}

/// Run the picker on a background task and return the chosen folder.
///
/// The whole interaction, including building the dialog future, runs on
/// the spawned task. A failure there (panic or cancellation) is logged and
/// reported as `None`, exactly like a cancelled dialog.
pub async fn request_folder(picker: Arc<dyn FolderPicker>) -> Option<PathBuf> {
    log::info!("📂 Opening folder picker dialog...");

    match tokio::spawn(async move { picker.pick_folder().await }).await {
        Ok(Some(folder)) => {
            log::info!("📁 Selected folder: {}", folder.display());
            Some(folder)
        }
        Ok(None) => {
            log::info!("No folder selected");
            None
        }
        Err(e) => {
            log::error!("❌ Error opening folder: {}", e);
            log::debug!("Picker task failure details: {:?}", e);
            None
        }
    }
}
