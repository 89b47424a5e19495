use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::DisplayService;
use crate::common::display::Display;

const PICTURE_KEYS: [&str; 2] = [
    "/org/gnome/desktop/background/picture-uri",
    "/org/gnome/desktop/background/picture-uri-dark",
];

/// GNOME keeps one background for all monitors, so it is exposed as a
/// single display.
pub struct GnomeBackground;

impl DisplayService for GnomeBackground {
    fn name(&self) -> &str {
        "GNOME"
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        Ok(vec![Display::new(
            "org.gnome.desktop.background",
            "GNOME desktop (all monitors)",
        )])
    }

    fn set_background(&self, _display: &Display, image: &Path) -> Result<()> {
        let uri = dconf_file_uri(image);

        for key in PICTURE_KEYS {
            let output = Command::new("dconf")
                .args(["write", key, uri.as_str()])
                .output()
                .with_context(|| format!("Failed to set {} with dconf", key))?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                anyhow::bail!("dconf write {} failed: {}", key, stderr.trim());
            }
        }

        Ok(())
    }
}

/// GVariant string literal holding a file:// URI
fn dconf_file_uri(image: &Path) -> String {
    let uri = format!("file://{}", image.display());
    format!("'{}'", uri.replace('\\', "\\\\").replace('\'', "\\'"))
}
