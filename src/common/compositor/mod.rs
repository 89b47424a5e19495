use std::env;
use std::process::Command;

pub mod hyprland;
pub mod sway;

/// Desktop environments with a wallpaper backend
#[derive(Debug, Clone, PartialEq)]
pub enum CompositorType {
    /// Sway compositor (i3-compatible Wayland compositor)
    Sway,
    /// Hyprland compositor (dynamic tiling Wayland compositor)
    Hyprland,
    /// KDE Plasma (KWin)
    Kwin,
    /// GNOME Shell (Mutter)
    Gnome,
    /// Plain X11 session without a recognised desktop
    X11,
    /// macOS (System Events desktops)
    MacOs,
    /// Other/unknown compositor
    Other(String),
}

impl CompositorType {
    /// Detect the current window compositor
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            return CompositorType::MacOs;
        }

        if let Some(found) = Self::from_session(|key| env::var(key).ok()) {
            return found;
        }

        // Check for Wayland display server
        if env::var_os("WAYLAND_DISPLAY").is_some() {
            if CompositorType::is_process_running("sway") {
                return CompositorType::Sway;
            }
            if CompositorType::is_process_running("Hyprland") {
                return CompositorType::Hyprland;
            }
            if CompositorType::is_process_running("plasmashell") {
                return CompositorType::Kwin;
            }
            if CompositorType::is_process_running("gnome-shell") {
                return CompositorType::Gnome;
            }
            return CompositorType::Other("wayland".to_string());
        }

        if env::var_os("DISPLAY").is_some() {
            return CompositorType::X11;
        }

        CompositorType::Other("unknown".to_string())
    }

    /// Identify the desktop from session variables alone.
    ///
    /// `lookup` returns the value of an environment variable, if set.
    pub fn from_session<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in ["XDG_SESSION_DESKTOP", "XDG_CURRENT_DESKTOP", "DESKTOP_SESSION"] {
            let Some(value) = lookup(key) else {
                continue;
            };
            // XDG_CURRENT_DESKTOP is a colon separated list, e.g. "ubuntu:GNOME"
            if let Some(found) = value.split(':').find_map(Self::from_desktop_name) {
                return Some(found);
            }
        }
        None
    }

    fn from_desktop_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "sway" => Some(CompositorType::Sway),
            "hyprland" => Some(CompositorType::Hyprland),
            "kde" | "plasma" | "plasmawayland" | "plasmax11" => Some(CompositorType::Kwin),
            "gnome" | "gnome-xorg" | "gnome-wayland" | "gnome-classic" | "ubuntu"
            | "ubuntu-xorg" | "ubuntu-wayland" => Some(CompositorType::Gnome),
            _ => None,
        }
    }

    /// Check if a process with the given name is running
    fn is_process_running(process_name: &str) -> bool {
        Command::new("pgrep")
            .arg("-x")
            .arg(process_name)
            .output()
            .map(|output| !output.stdout.is_empty())
            .unwrap_or(false)
    }

    /// Get a human-readable name for the compositor
    pub fn name(&self) -> String {
        match self {
            CompositorType::Sway => "Sway".to_string(),
            CompositorType::Hyprland => "Hyprland".to_string(),
            CompositorType::Kwin => "KDE Plasma".to_string(),
            CompositorType::Gnome => "GNOME".to_string(),
            CompositorType::X11 => "X11".to_string(),
            CompositorType::MacOs => "macOS".to_string(),
            CompositorType::Other(name) => name.clone(),
        }
    }
}
