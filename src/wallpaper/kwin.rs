use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::DisplayService;
use crate::common::display::Display;
use crate::common::shell;

const QDBUS_CANDIDATES: [&str; 3] = ["qdbus6", "qdbus", "qdbus-qt5"];

const LIST_SCREENS_SCRIPT: &str = r#"
var screens = [];
desktops().forEach(d => {
    if (d.screen >= 0 && screens.indexOf(d.screen) < 0) {
        screens.push(d.screen);
    }
});
print(screens.join("\n"));
"#;

/// Per-screen backgrounds through the PlasmaShell scripting API
pub struct PlasmaScreens;

impl DisplayService for PlasmaScreens {
    fn name(&self) -> &str {
        "KDE Plasma"
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        let stdout = evaluate_script(LIST_SCREENS_SCRIPT)?;
        Ok(parse_screens(&stdout)
            .into_iter()
            .map(|screen| Display::new(screen.to_string(), format!("Screen {}", screen)))
            .collect())
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        let screen: u32 = display
            .id
            .parse()
            .with_context(|| format!("Invalid Plasma screen index '{}'", display.id))?;
        evaluate_script(&set_screen_script(screen, image))?;
        Ok(())
    }
}

fn set_screen_script(screen: u32, image: &Path) -> String {
    let uri = format!("file://{}", image.display());
    format!(
        r#"
desktops().filter(d => d.screen == {screen}).forEach(d => {{
    d.wallpaperPlugin = "org.kde.image";
    d.currentConfigGroup = Array("Wallpaper", "org.kde.image", "General");
    d.writeConfig("Image", {uri});
    d.reloadConfig();
}});
"#,
        screen = screen,
        uri = shell::double_quote(&uri)
    )
}

/// Screen indices printed by the listing script, first occurrence order
fn parse_screens(stdout: &str) -> Vec<u32> {
    let mut screens = Vec::new();
    for screen in stdout.lines().filter_map(|l| l.trim().parse::<u32>().ok()) {
        if !screens.contains(&screen) {
            screens.push(screen);
        }
    }
    screens
}

fn find_qdbus() -> Result<&'static str> {
    // Plasma 6 ships qdbus6, Plasma 5 ships qdbus or qdbus-qt5
    QDBUS_CANDIDATES
        .into_iter()
        .find(|exe| which::which(exe).is_ok())
        .ok_or_else(|| anyhow::anyhow!("qdbus not found (tried qdbus6, qdbus, qdbus-qt5)"))
}

fn evaluate_script(script: &str) -> Result<String> {
    let qdbus = find_qdbus()?;
    shell::capture(
        Command::new(qdbus).args([
            "org.kde.plasmashell",
            "/PlasmaShell",
            "org.kde.PlasmaShell.evaluateScript",
            script,
        ]),
        &format!("{} PlasmaShell.evaluateScript", qdbus),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_screens_dedupes_in_order() {
        assert_eq!(parse_screens("1\n0\n1\n"), vec![1, 0]);
        assert_eq!(parse_screens(""), Vec::<u32>::new());
        assert_eq!(parse_screens("0\nnot-a-number\n2"), vec![0, 2]);
    }

    #[test]
    fn test_set_screen_script_targets_one_screen() {
        let script = set_screen_script(1, Path::new("/home/me/wall.jpg"));
        assert!(script.contains("d.screen == 1"));
        assert!(script.contains(r#"d.writeConfig("Image", "file:///home/me/wall.jpg");"#));
    }
}
