use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions the viewer treats as images (compared lowercase)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// Lists the files directly inside a folder.
///
/// Implementations must not recurse and must keep the enumeration order
/// they observe; the session preserves it as the browsing order.
pub trait DirectoryLister {
    fn list_files(&self, folder: &Path) -> Result<Vec<PathBuf>>;
}

/// Lister backed by `std::fs::read_dir`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list_files(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(folder).map_err(|source| Error::ListDirectory {
            path: folder.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ListDirectory {
                path: folder.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            // Only regular files (symlinks are followed)
            if path.is_file() {
                files.push(path);
            }
        }

        Ok(files)
    }
}

/// Check whether a path has one of the recognized image extensions.
///
/// The extension is whatever follows the last `.` of the file name, so a
/// bare `.png` counts as a PNG even though `Path::extension` ignores it.
pub fn is_image_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();

    match name.rfind('.') {
        Some(dot) => {
            let ext = name[dot + 1..].to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
