//! Welcome page

use std::path::{Path, PathBuf};
use egui::{RichText, Ui};

use crate::ViewerContext;

pub const TITLE: &str = "Welcome to the Starbucks EDA App! ☕";
pub const INTRO: &str = "Explore insights derived from Starbucks nutrition information. \
Dive into the data, discover trends, and visualize key metrics.";

/// Static welcome text and an image
pub struct HomePage {
    image_path: PathBuf,
    image_available: bool,
}

impl HomePage {
    pub fn new(image_path: &Path) -> Self {
        let image_available = image_path.is_file();
        if !image_available {
            tracing::warn!("Home page image not found at {:?}", image_path);
        }

        Self {
            image_path: image_path.to_path_buf(),
            image_available,
        }
    }

    /// URI the image loaders resolve, or `None` when the file is missing
    pub fn image_uri(&self) -> Option<String> {
        self.image_available
            .then(|| format!("file://{}", self.image_path.display()))
    }

    pub fn ui(&mut self, _ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading(RichText::new(TITLE).size(24.0));
        ui.add_space(8.0);
        ui.label(INTRO);
        ui.add_space(12.0);

        match self.image_uri() {
            Some(uri) => {
                ui.add(egui::Image::new(uri).max_width(ui.available_width().min(800.0)));
            }
            None => {
                ui.label(
                    RichText::new(format!("Image not available: {}", self.image_path.display())).weak(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_has_no_uri() {
        let page = HomePage::new(Path::new("definitely/not/here.jpg"));
        assert!(page.image_uri().is_none());
    }

    #[test]
    fn test_existing_image_uses_file_uri() {
        // Any existing file works; loaders are only consulted when drawing
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let page = HomePage::new(&path);
        assert_eq!(page.image_uri(), Some(format!("file://{}", path.display())));
    }

    #[test]
    fn test_bundled_image_is_found() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(nutri_data::DashboardConfig::default().image_path);
        assert!(HomePage::new(&path).image_uri().is_some(), "{:?}", path);
    }
}
