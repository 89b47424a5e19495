use anyhow::Result;
use std::env;
use std::process::Command;

use super::common::TestEnvironment;

#[allow(dead_code)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn from_output(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}

/// Run the compiled `wallpaper` binary with `args`
#[allow(dead_code)]
pub fn run_wallpaper_command(args: &[&str]) -> Result<CommandOutput> {
    let output = Command::new(env!("CARGO_BIN_EXE_wallpaper"))
        .args(args)
        .output()?;
    Ok(CommandOutput::from_output(output))
}

/// Run the binary inside `test_env`: its fake tools come first on PATH, the
/// working directory is the temp dir, and the session looks like `desktop`.
#[allow(dead_code)]
pub fn run_wallpaper_in(
    test_env: &TestEnvironment,
    desktop: &str,
    args: &[&str],
) -> Result<CommandOutput> {
    let mut paths = vec![test_env.bin_dir()];
    if let Some(path) = env::var_os("PATH") {
        paths.extend(env::split_paths(&path));
    }

    let output = Command::new(env!("CARGO_BIN_EXE_wallpaper"))
        .args(args)
        .current_dir(test_env.path())
        .env("PATH", env::join_paths(paths)?)
        .env("XDG_SESSION_DESKTOP", desktop)
        .output()?;
    Ok(CommandOutput::from_output(output))
}
