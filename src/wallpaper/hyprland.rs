use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use super::DisplayService;
use crate::common::compositor::hyprland;
use crate::common::display::Display;

const DAEMON_START_ATTEMPTS: u32 = 50;
const DAEMON_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Per-monitor backgrounds on Hyprland using swww
pub struct HyprlandMonitors;

impl DisplayService for HyprlandMonitors {
    fn name(&self) -> &str {
        "Hyprland"
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        let monitors = hyprland::monitors()?;
        Ok(monitors
            .iter()
            .filter(|monitor| !monitor.disabled)
            .map(|monitor| Display::new(monitor.name.clone(), monitor.display_label()))
            .collect())
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        ensure_swww_daemon()?;

        let output = Command::new("swww")
            .arg("img")
            .arg("--outputs")
            .arg(&display.id)
            .arg(image)
            .output()
            .context("Failed to set wallpaper with swww")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("swww failed to set wallpaper: {}", stderr.trim());
        }

        Ok(())
    }
}

fn ensure_swww_daemon() -> Result<()> {
    if which::which("swww").is_err() {
        anyhow::bail!(
            "swww is not installed. Install it with: pacman -S swww\n\
             swww is required for wallpaper support on Hyprland."
        );
    }

    if swww_query() {
        return Ok(());
    }

    // The daemon outlives this process, so it must not hold our stdio open
    Command::new("swww-daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to start swww-daemon")?;

    if !wait_until_ready(swww_query, DAEMON_START_ATTEMPTS, DAEMON_POLL_INTERVAL) {
        anyhow::bail!(
            "swww-daemon did not answer within {}ms",
            DAEMON_START_ATTEMPTS as u128 * DAEMON_POLL_INTERVAL.as_millis()
        );
    }

    Ok(())
}

/// Whether a swww daemon answers queries
fn swww_query() -> bool {
    Command::new("swww")
        .arg("query")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Poll `ready` up to `attempts` times, sleeping `interval` before each try
fn wait_until_ready<F>(mut ready: F, attempts: u32, interval: Duration) -> bool
where
    F: FnMut() -> bool,
{
    for _ in 0..attempts {
        std::thread::sleep(interval);
        if ready() {
            return true;
        }
    }
    false
}
