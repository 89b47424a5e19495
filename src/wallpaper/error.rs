use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a wallpaper run.
///
/// A single display failing is not in here: those are reported and counted,
/// and only become fatal as `AllDisplaysFailed`.
#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("No image path given")]
    MissingArgument,

    #[error("Image file not found at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Image path {} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to list screens: {0:#}")]
    Enumeration(anyhow::Error),

    #[error("No screens found.")]
    NoDisplaysFound,

    #[error("Failed to set wallpaper on all {failures} screen(s)")]
    AllDisplaysFailed { failures: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            WallpaperError::FileNotFound(PathBuf::from("/tmp/missing.jpg")).to_string(),
            "Image file not found at /tmp/missing.jpg"
        );
        assert_eq!(
            WallpaperError::NotAFile(PathBuf::from("/home/me/Pictures")).to_string(),
            "Image path /home/me/Pictures is not a file"
        );
        assert_eq!(WallpaperError::NoDisplaysFound.to_string(), "No screens found.");

        let err = WallpaperError::Enumeration(
            anyhow::anyhow!("exit status 1").context("swaymsg failed"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to list screens: swaymsg failed: exit status 1"
        );
    }
}
