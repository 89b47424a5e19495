//! Desktop wallpaper backends and the all-screens setter.

use anyhow::Result;
use std::path::Path;

use crate::common::compositor::CompositorType;
use crate::common::display::Display;

pub mod error;
pub mod gnome;
pub mod hyprland;
pub mod kwin;
pub mod macos;
pub mod setter;
pub mod sway;
pub mod x11;

pub use error::WallpaperError;
pub use setter::set_wallpaper_for_all_screens;

/// The host capability a wallpaper run needs: list the attached displays and
/// set the background of one of them.
pub trait DisplayService {
    /// Name of the desktop this service drives
    fn name(&self) -> &str;

    /// Displays currently attached, in the order the host reports them
    fn list_displays(&self) -> Result<Vec<Display>>;

    /// Set the desktop background of `display` to the image at `image`
    /// (an absolute path), with the desktop's default scaling.
    fn set_background(&self, display: &Display, image: &Path) -> Result<()>;
}

impl<T: DisplayService + ?Sized> DisplayService for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        (**self).list_displays()
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        (**self).set_background(display, image)
    }
}

impl<T: DisplayService + ?Sized> DisplayService for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        (**self).list_displays()
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        (**self).set_background(display, image)
    }
}

/// Pick the backend for the running desktop
pub fn detect_service() -> Box<dyn DisplayService> {
    match CompositorType::detect() {
        CompositorType::MacOs => Box::new(macos::MacDesktops),
        CompositorType::Sway => Box::new(sway::SwayOutputs),
        CompositorType::Hyprland => Box::new(hyprland::HyprlandMonitors),
        CompositorType::Kwin => Box::new(kwin::PlasmaScreens),
        CompositorType::Gnome => Box::new(gnome::GnomeBackground),
        CompositorType::X11 => Box::new(x11::XrandrMonitors),
        other => Box::new(Unsupported { desktop: other.name() }),
    }
}

/// Stand-in for desktops without a backend; enumeration always fails.
pub struct Unsupported {
    desktop: String,
}

impl DisplayService for Unsupported {
    fn name(&self) -> &str {
        &self.desktop
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        anyhow::bail!(
            "Unsupported desktop environment '{}' (supported: macOS, Sway, Hyprland, KDE Plasma, GNOME, X11)",
            self.desktop
        )
    }

    fn set_background(&self, display: &Display, _image: &Path) -> Result<()> {
        anyhow::bail!(
            "Unsupported desktop environment '{}' cannot set {}",
            self.desktop,
            display.label
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_desktop_fails_enumeration() {
        let service = Unsupported {
            desktop: "xfce".to_string(),
        };
        assert_eq!(service.name(), "xfce");
        let err = service.list_displays().unwrap_err();
        assert!(err.to_string().contains("Unsupported desktop environment 'xfce'"));
    }
}
