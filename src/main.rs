use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, column, container, image, row, text, Column};
use iced::{Alignment, ContentFit, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod error;
mod media;
mod picker;
mod state;

use config::Config;
use media::decoder::FileDecoder;
use media::lister::FsLister;
use picker::{FolderPicker, RfdFolderPicker};
use state::session::BrowseSession;

/// Main application state
struct ImageViewer {
    /// Folder, cursor and decoded image
    session: BrowseSession<FsLister, FileDecoder>,
    /// Injected folder picker
    picker: Arc<dyn FolderPicker>,
    /// Persistent settings
    config: Config,
    /// Where `config` is saved; `None` disables saving
    config_path: Option<PathBuf>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User asked to open a folder
    OpenFolder,
    /// Folder picker finished (None = cancelled or failed)
    FolderPicked(Option<PathBuf>),
    /// Show the next image
    Next,
    /// Show the previous image
    Previous,
}

impl ImageViewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let explicit = std::env::args_os().nth(1).map(PathBuf::from);

        let mut viewer = Self::with_picker(
            config,
            Config::default_path(),
            Arc::new(RfdFolderPicker::default()),
        );

        if let Some(folder) = viewer.config.startup_folder(explicit) {
            viewer.session.load_folder(&folder);
        }

        log::info!("🎨 Image viewer initialized");

        (viewer, Task::none())
    }

    /// Build the application around an explicit picker and config location
    fn with_picker(
        config: Config,
        config_path: Option<PathBuf>,
        picker: Arc<dyn FolderPicker>,
    ) -> Self {
        let mut session = BrowseSession::new(FsLister, FileDecoder);
        session.subscribe(|change| log::debug!("session changed: {:?}", change));

        Self {
            session,
            picker,
            config,
            config_path,
        }
    }

    /// Handle application messages and update state.
    /// Runs on the UI thread; this is the only place the session is mutated.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolder => {
                // The dialog runs in the background, its answer comes back as FolderPicked
                Task::perform(
                    picker::request_folder(Arc::clone(&self.picker)),
                    Message::FolderPicked,
                )
            }
            Message::FolderPicked(Some(folder)) => {
                self.session.load_folder(&folder);

                self.config.last_folder = Some(folder);
                if let Some(path) = &self.config_path {
                    if let Err(e) = self.config.save_to(path) {
                        log::warn!("⚠️  Could not save settings: {}", e);
                    }
                }

                Task::none()
            }
            Message::FolderPicked(None) => Task::none(),
            Message::Next => {
                self.session.next();
                Task::none()
            }
            Message::Previous => {
                self.session.previous();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let display: Element<Message> = match self.session.current_image() {
            Some(decoded) => image(decoded.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => container(text("No image to display").size(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        let dimensions = self
            .session
            .current_image()
            .map(|decoded| format!("{} × {}", decoded.width, decoded.height))
            .unwrap_or_default();

        // Paging needs at least two images
        let can_page = self.session.len() > 1;

        let controls = row![
            button("Open Folder")
                .on_press(Message::OpenFolder)
                .padding(10),
            button("Previous")
                .on_press_maybe(can_page.then_some(Message::Previous))
                .padding(10),
            button("Next")
                .on_press_maybe(can_page.then_some(Message::Next))
                .padding(10),
        ]
        .spacing(10);

        let content: Column<Message> = column![
            display,
            text(self.session.image_name()).size(18),
            text(self.session.image_info()).size(14),
            text(dimensions).size(12),
            controls,
        ]
        .spacing(12)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window title follows the current image
    fn title(&self) -> String {
        if self.session.is_empty() {
            String::from("Image Viewer")
        } else {
            format!("{} - Image Viewer", self.session.image_name())
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Arrow keys page through the folder
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }
}

/// Map a key press to a navigation message
fn handle_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        _ => None,
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(ImageViewer::title, ImageViewer::update, ImageViewer::view)
        .theme(ImageViewer::theme)
        .subscription(ImageViewer::subscription)
        .centered()
        .run_with(ImageViewer::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker::PickFuture;
    use std::fs;

    struct NeverPicker;

    impl FolderPicker for NeverPicker {
        fn pick_folder(&self) -> PickFuture {
            Box::pin(std::future::pending::<Option<PathBuf>>())
        }
    }

    fn write_png(path: &std::path::Path) {
        ::image::RgbImage::from_pixel(2, 2, ::image::Rgb([200, 100, 50]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let modifiers = keyboard::Modifiers::default();

        assert!(matches!(
            handle_key(Key::Named(Named::ArrowRight), modifiers),
            Some(Message::Next)
        ));
        assert!(matches!(
            handle_key(Key::Named(Named::ArrowLeft), modifiers),
            Some(Message::Previous)
        ));
        assert!(handle_key(Key::Named(Named::Enter), modifiers).is_none());
    }

    #[test]
    fn test_messages_drive_the_session() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("a.png"));
        write_png(&dir.path().join("b.png"));
        fs::write(dir.path().join("broken.gif"), b"nope").unwrap();

        let mut viewer = ImageViewer::with_picker(Config::default(), None, Arc::new(NeverPicker));
        let _ = viewer.update(Message::FolderPicked(Some(dir.path().to_path_buf())));

        assert_eq!(viewer.session.len(), 3);
        assert_eq!(viewer.session.image_info(), "Image 1 of 3");

        for _ in 0..3 {
            let _ = viewer.update(Message::Next);
        }
        assert_eq!(viewer.session.current_index(), Some(0));

        let _ = viewer.update(Message::Previous);
        assert_eq!(viewer.session.current_index(), Some(2));
        assert_eq!(viewer.session.image_info(), "Image 3 of 3");
    }

    #[test]
    fn test_picked_folder_is_remembered() {
        let photos = tempfile::tempdir().unwrap();
        write_png(&photos.path().join("only.png"));
        let settings = tempfile::tempdir().unwrap();
        let config_path = settings.path().join("config.json");

        let mut viewer = ImageViewer::with_picker(
            Config::default(),
            Some(config_path.clone()),
            Arc::new(NeverPicker),
        );
        let _ = viewer.update(Message::FolderPicked(Some(photos.path().to_path_buf())));

        assert_eq!(viewer.session.image_name(), "only.png");
        assert_eq!(viewer.title(), "only.png - Image Viewer");
        assert_eq!(viewer.config.last_folder.as_deref(), Some(photos.path()));

        let saved = Config::load_from(&config_path).unwrap();
        assert_eq!(saved.last_folder.as_deref(), Some(photos.path()));
    }

    #[test]
    fn test_cancelled_pick_changes_nothing() {
        let settings = tempfile::tempdir().unwrap();
        let config_path = settings.path().join("config.json");
        let mut viewer = ImageViewer::with_picker(
            Config::default(),
            Some(config_path.clone()),
            Arc::new(NeverPicker),
        );

        let _ = viewer.update(Message::FolderPicked(None));

        assert!(viewer.session.is_empty());
        assert_eq!(viewer.title(), "Image Viewer");
        assert!(!config_path.exists());
        assert_eq!(viewer.config.last_folder, None);
    }
}
