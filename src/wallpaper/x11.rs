use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::DisplayService;
use crate::common::display::Display;
use crate::common::shell;

/// X11 monitors from xrandr, set with xwallpaper (per output) or feh
pub struct XrandrMonitors;

impl DisplayService for XrandrMonitors {
    fn name(&self) -> &str {
        "X11"
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        let stdout = shell::capture(
            Command::new("xrandr").arg("--listmonitors"),
            "xrandr --listmonitors",
        )?;
        Ok(parse_monitors(&stdout)
            .into_iter()
            .map(|name| Display::new(name.clone(), name))
            .collect())
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        if which::which("xwallpaper").is_ok() {
            let output = Command::new("xwallpaper")
                .arg("--output")
                .arg(&display.id)
                .arg("--zoom")
                .arg(image)
                .output()
                .context("Failed to set wallpaper with xwallpaper")?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                anyhow::bail!("xwallpaper failed: {}", stderr.trim());
            }
            return Ok(());
        }

        if which::which("feh").is_ok() {
            // feh cannot target a single output; this paints every monitor
            let output = Command::new("feh")
                .arg("--bg-fill")
                .arg(image)
                .output()
                .context("Failed to set wallpaper with feh")?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                anyhow::bail!("feh failed: {}", stderr.trim());
            }
            return Ok(());
        }

        anyhow::bail!("Neither xwallpaper nor feh is installed")
    }
}

/// Output names from `xrandr --listmonitors`.
///
/// ```text
/// Monitors: 2
///  0: +*eDP-1 1920/344x1080/194+0+0  eDP-1
///  1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1
/// ```
fn parse_monitors(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.trim_start().starts_with("Monitors:"))
        .filter_map(|line| line.split_whitespace().last())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monitors() {
        let stdout = "Monitors: 2\n 0: +*eDP-1 1920/344x1080/194+0+0  eDP-1\n 1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1\n";
        assert_eq!(parse_monitors(stdout), vec!["eDP-1", "HDMI-1"]);
    }

    #[test]
    fn test_parse_no_monitors() {
        assert!(parse_monitors("Monitors: 0\n").is_empty());
        assert!(parse_monitors("").is_empty());
    }
}
