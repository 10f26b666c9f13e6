//! The image loader and exporter collaborators: drag-and-drop and
//! dialog-based file open, decode to RGBA, and PNG export. The editor
//! core never does file I/O; everything here hands it a decoded image
//! or receives a flattened one.

use std::path::{Path, PathBuf};

use eframe::egui;
use image::RgbaImage;

use crate::error::LoadError;

/// File name offered in the save dialog.
const EXPORT_FILE_NAME: &str = "censored-image.png";

pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            dropped_files: Vec::new(),
        }
    }

    /// Collect any newly dropped files from the UI context. Returns
    /// true if there is something to process.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decode the first dropped image file, if any. Non-image drops
    /// produce `UnsupportedFormat` so the UI can report them; the
    /// editor is left untouched either way.
    pub fn take_dropped_image(&mut self) -> Option<Result<RgbaImage, LoadError>> {
        if self.dropped_files.is_empty() {
            return None;
        }
        let file = self.dropped_files.remove(0);
        self.dropped_files.clear();

        if !Self::is_image_file(&file) {
            log::warn!("dropped file is not a supported type: {}", file.name);
            return Some(Err(LoadError::UnsupportedFormat));
        }

        if let Some(bytes) = &file.bytes {
            Some(load_from_bytes(bytes))
        } else if let Some(path) = &file.path {
            Some(load_from_path(path))
        } else {
            Some(Err(LoadError::NoData))
        }
    }

    /// Show a native open dialog and decode the chosen image. None if
    /// the dialog was cancelled.
    pub fn pick_image(&self) -> Option<Result<RgbaImage, LoadError>> {
        let path = rfd::FileDialog::new()
            .add_filter("image", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_file()?;
        Some(load_from_path(&path))
    }

    /// Show a native save dialog and write the flattened image as PNG.
    /// Returns the path written, or None if the dialog was cancelled.
    pub fn save_flattened(&self, image: &RgbaImage) -> Result<Option<PathBuf>, image::ImageError> {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return Ok(None);
        };
        image.save(&path)?;
        log::info!("exported {}", path.display());
        Ok(Some(path))
    }

    /// Check if a file is an image based on MIME type or extension.
    fn is_image_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            file.mime.starts_with("image/")
        } else if let Some(path) = &file.path {
            has_image_extension(path)
        } else {
            false
        }
    }
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn has_image_extension(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
        }
        None => false,
    }
}

/// Decode an in-memory image file into RGBA8.
pub fn load_from_bytes(bytes: &[u8]) -> Result<RgbaImage, LoadError> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(decoded.to_rgba8())
}

/// Read and decode an image file from disk into RGBA8.
pub fn load_from_path(path: &Path) -> Result<RgbaImage, LoadError> {
    let bytes = std::fs::read(path)?;
    load_from_bytes(&bytes)
}
