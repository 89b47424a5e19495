//! Shell utility functions
//!
//! Helpers for running desktop tools and quoting arguments embedded in their
//! command languages.

use anyhow::{Context, Result};
use std::process::Command;

/// Run `cmd` to completion and return its stdout.
///
/// Fails when the program cannot be spawned or exits unsuccessfully; the
/// error carries `tool` and the program's stderr.
pub fn capture(cmd: &mut Command, tool: &str) -> Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("Failed to execute {}", tool))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("{} failed: {}", tool, stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Quote a string as a double-quoted literal (sway commands, AppleScript,
/// PlasmaShell JavaScript all share this escaping).
pub fn double_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quote() {
        assert_eq!(double_quote("plain"), "\"plain\"");
        assert_eq!(double_quote("/a b/c.jpg"), "\"/a b/c.jpg\"");
        assert_eq!(double_quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(double_quote(r"C:\x"), r#""C:\\x""#);
    }

    #[test]
    fn test_capture_reports_missing_program() {
        let err = capture(
            &mut Command::new("definitely-not-a-real-tool-xyz"),
            "definitely-not-a-real-tool-xyz",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }
}
