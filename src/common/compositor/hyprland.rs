use anyhow::{Context, Result};
use serde::Deserialize;
use std::process::Command;

use crate::common::shell;

/// Monitor information from hyprctl monitors -j
#[derive(Debug, Clone, Deserialize)]
pub struct HyprlandMonitor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub disabled: bool,
}

impl HyprlandMonitor {
    pub fn display_label(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.description)
        }
    }
}

/// List monitors known to Hyprland
pub fn monitors() -> Result<Vec<HyprlandMonitor>> {
    let stdout = shell::capture(
        Command::new("hyprctl").args(["monitors", "-j"]),
        "hyprctl monitors",
    )?;
    parse_monitors(&stdout)
}

pub fn parse_monitors(json: &str) -> Result<Vec<HyprlandMonitor>> {
    serde_json::from_str(json).context("Failed to parse hyprctl monitors JSON output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monitors() {
        let json = r#"[
            {"id": 0, "name": "eDP-1", "description": "BOE 0x095F", "disabled": false, "width": 2256},
            {"id": 1, "name": "DP-2", "description": "", "width": 2560}
        ]"#;
        let monitors = parse_monitors(json).unwrap();
        assert_eq!(monitors.len(), 2);
        assert_eq!(monitors[0].display_label(), "eDP-1 (BOE 0x095F)");
        assert_eq!(monitors[1].display_label(), "DP-2");
        assert!(!monitors[1].disabled);
    }

    #[test]
    fn test_parse_monitors_rejects_garbage() {
        assert!(parse_monitors("not json").is_err());
    }
}
