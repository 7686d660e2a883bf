//! Structural pattern: Proxy
//! Example: a virtual proxy that loads an image on first display
//!
//! The proxy has the same interface as the real image but defers the
//! expensive load until someone actually looks at it.

use std::cell::OnceCell;

use crate::console::Console;
use crate::error::Result;

pub trait Image {
    /// Returns the lines produced by displaying the image.
    fn display(&self) -> Vec<String>;
}

pub struct RealImage {
    path: String,
}

impl RealImage {
    /// Loading is the expensive part; the message records that it happened.
    pub fn load(path: &str) -> (Self, String) {
        tracing::debug!(path, "loading image");
        let image = RealImage {
            path: path.to_string(),
        };
        let message = format!("Loading image from disk: {path}");
        (image, message)
    }
}

impl Image for RealImage {
    fn display(&self) -> Vec<String> {
        vec![format!("Displaying image: {}", self.path)]
    }
}

pub struct ImageProxy {
    path: String,
    real: OnceCell<RealImage>,
}

impl ImageProxy {
    pub fn new(path: impl Into<String>) -> Self {
        ImageProxy {
            path: path.into(),
            real: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Image for ImageProxy {
    fn display(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let real = self.real.get_or_init(|| {
            let (image, message) = RealImage::load(&self.path);
            lines.push(message);
            image
        });
        lines.extend(real.display());
        lines
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let first: Box<dyn Image> = Box::new(ImageProxy::new("photo1.png"));
    let second: Box<dyn Image> = Box::new(ImageProxy::new("photo2.png"));

    console.line("Displaying image 1...")?;
    console.lines(first.display())?;

    console.line("Displaying image 1 again...")?;
    console.lines(first.display())?;

    console.line("Displaying image 2...")?;
    console.lines(second.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_lazily_once() {
        let proxy = ImageProxy::new("a.png");
        assert!(!proxy.is_loaded());

        assert_eq!(
            proxy.display(),
            vec!["Loading image from disk: a.png", "Displaying image: a.png"]
        );
        assert!(proxy.is_loaded());

        assert_eq!(proxy.display(), vec!["Displaying image: a.png"]);
    }

    #[test]
    fn test_narration() {
        let expected = "\
Displaying image 1...
Loading image from disk: photo1.png
Displaying image: photo1.png
Displaying image 1 again...
Displaying image: photo1.png
Displaying image 2...
Loading image from disk: photo2.png
Displaying image: photo2.png
";
        assert_eq!(Console::capture(run).unwrap(), expected);
    }
}
