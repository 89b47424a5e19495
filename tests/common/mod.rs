use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir(temp_dir.path().join("bin"))?;
        Ok(Self { temp_dir })
    }

    /// Get the temp directory path for test images
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory prepended to PATH when running the binary
    pub fn bin_dir(&self) -> PathBuf {
        self.path().join("bin")
    }

    /// Write a placeholder image file and return its path
    pub fn create_image(&self, name: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, b"\xFF\xD8\xFF\xE0 not a real jpeg")?;
        Ok(path)
    }

    /// Install an executable shell script named `name` in the fake bin dir
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn fake_tool(&self, name: &str, script: &str) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", script))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }
}
