//! Apply one image to every attached display.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{DisplayService, WallpaperError};
use crate::ui::prelude::*;

/// Tally of per-display outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub successes: usize,
    pub failures: usize,
}

impl Summary {
    fn record(mut self, outcome: &Result<()>) -> Self {
        match outcome {
            Ok(()) => self.successes += 1,
            Err(_) => self.failures += 1,
        }
        self
    }

    pub fn total(&self) -> usize {
        self.successes + self.failures
    }

    /// At least one display succeeded and at least one failed
    pub fn is_partial(&self) -> bool {
        self.successes > 0 && self.failures > 0
    }
}

/// Set `image_path` as the wallpaper of every display the backend reports.
///
/// The file is checked once up front; `connect` builds the backend only
/// after that check passes. A display that fails is reported and skipped;
/// the run fails only if no display could be set.
pub fn set_wallpaper_for_all_screens<S, W, F>(
    image_path: &Path,
    reporter: &mut Reporter<W>,
    connect: F,
) -> Result<Summary, WallpaperError>
where
    S: DisplayService,
    W: Write,
    F: FnOnce() -> S,
{
    let image = check_image(image_path).map_err(|e| fail(reporter, e))?;
    let service = connect();

    let displays = service
        .list_displays()
        .with_context(|| format!("{} backend", service.name()))
        .map_err(|e| fail(reporter, WallpaperError::Enumeration(e)))?;
    if displays.is_empty() {
        return Err(fail(reporter, WallpaperError::NoDisplaysFound));
    }

    let summary = displays.iter().fold(Summary::default(), |summary, display| {
        let outcome = service.set_background(display, &image);
        match &outcome {
            Ok(()) => reporter.emit(
                Level::Success,
                &format!("Successfully set wallpaper for screen: {}", display.label),
            ),
            Err(e) => reporter.emit(
                Level::Error,
                &format!("Error setting wallpaper for screen {}: {:#}", display.label, e),
            ),
        }
        summary.record(&outcome)
    });

    if summary.failures == 0 {
        reporter.emit(
            Level::Success,
            &format!(
                "Successfully set wallpaper for all {} screen(s).",
                summary.total()
            ),
        );
        return Ok(summary);
    }

    let level = if summary.is_partial() {
        Level::Warn
    } else {
        Level::Error
    };
    reporter.emit(
        level,
        &format!(
            "Finished setting wallpapers with {} error(s) and {} success(es).",
            summary.failures, summary.successes
        ),
    );

    if summary.successes == 0 {
        return Err(WallpaperError::AllDisplaysFailed {
            failures: summary.failures,
        });
    }
    Ok(summary)
}

/// Absolute path of an existing image file
fn check_image(image_path: &Path) -> Result<PathBuf, WallpaperError> {
    if !image_path.exists() {
        return Err(WallpaperError::FileNotFound(image_path.to_path_buf()));
    }
    if !image_path.is_file() {
        return Err(WallpaperError::NotAFile(image_path.to_path_buf()));
    }
    // Backends hand the path to other processes, so make it absolute
    Ok(image_path
        .canonicalize()
        .unwrap_or_else(|_| image_path.to_path_buf()))
}

fn fail<W: Write>(reporter: &mut Reporter<W>, err: WallpaperError) -> WallpaperError {
    reporter.emit(Level::Error, &format!("Error: {}", err));
    err
}
