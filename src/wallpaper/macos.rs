use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::DisplayService;
use crate::common::display::Display;
use crate::common::shell;

const LIST_DESKTOPS_SCRIPT: &str = r#"tell application "System Events"
    set desktopNames to display name of every desktop
end tell
set AppleScript's text item delimiters to linefeed
return desktopNames as text"#;

/// macOS desktops through System Events, one per screen
pub struct MacDesktops;

impl DisplayService for MacDesktops {
    fn name(&self) -> &str {
        "macOS"
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        let stdout = osascript(LIST_DESKTOPS_SCRIPT)?;
        Ok(parse_desktop_names(&stdout)
            .into_iter()
            .enumerate()
            .map(|(i, name)| Display::new((i + 1).to_string(), name))
            .collect())
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        let index: usize = display
            .id
            .parse()
            .with_context(|| format!("Invalid desktop index '{}'", display.id))?;
        osascript(&set_picture_script(index, image))?;
        Ok(())
    }
}

fn set_picture_script(index: usize, image: &Path) -> String {
    format!(
        r#"tell application "System Events" to set picture of desktop {} to {}"#,
        index,
        shell::double_quote(&image.to_string_lossy())
    )
}

fn parse_desktop_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn osascript(script: &str) -> Result<String> {
    shell::capture(Command::new("osascript").arg("-e").arg(script), "osascript")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_desktop_names() {
        assert_eq!(
            parse_desktop_names("Built-in Retina Display\nExternal Monitor\n"),
            vec!["Built-in Retina Display", "External Monitor"]
        );
        assert!(parse_desktop_names("\n").is_empty());
    }

    #[test]
    fn test_set_picture_script() {
        assert_eq!(
            set_picture_script(2, Path::new("/Users/me/wall.jpg")),
            r#"tell application "System Events" to set picture of desktop 2 to "/Users/me/wall.jpg""#
        );
    }
}
