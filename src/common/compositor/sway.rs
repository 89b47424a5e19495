use anyhow::Result;
use std::process::Command;

use crate::common::shell;

/// Execute swaymsg command
pub fn swaymsg(command: &str) -> Result<String> {
    shell::capture(Command::new("swaymsg").arg(command), "swaymsg")
}

/// Execute swaymsg -t get_outputs
pub fn swaymsg_get_outputs() -> Result<String> {
    shell::capture(
        Command::new("swaymsg").args(["-t", "get_outputs"]),
        "swaymsg -t get_outputs",
    )
}

/// Build the command that sets the background of one output
pub fn output_bg_command(output_name: &str, image: &str) -> String {
    format!(
        "output {} bg {} fill",
        shell::double_quote(output_name),
        shell::double_quote(image)
    )
}
