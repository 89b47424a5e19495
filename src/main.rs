mod common;
mod ui;
mod wallpaper;

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::ui::prelude::*;
use crate::wallpaper::{DisplayService, WallpaperError};

/// Set the desktop wallpaper on every connected display
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the wallpaper image
    #[arg(allow_hyphen_values = true)]
    image_path: Option<PathBuf>,
}

impl Cli {
    fn image(self) -> Result<PathBuf, WallpaperError> {
        self.image_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(WallpaperError::MissingArgument)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Success,
    Failure,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::Failure => ExitCode::from(1),
        }
    }
}

/// Parse `args` and set the wallpaper on every display `connect` exposes.
///
/// `connect` is only called once the arguments are valid and the image
/// file exists.
fn run<I, T, W, F>(args: I, reporter: &mut Reporter<W>, connect: F) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
    F: FnOnce() -> Box<dyn DisplayService>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Exit::Success;
        }
        Err(_) => {
            print_usage(reporter, &program);
            return Exit::Failure;
        }
    };

    let image = match cli.image() {
        Ok(image) => image,
        Err(_) => {
            print_usage(reporter, &program);
            return Exit::Failure;
        }
    };

    match wallpaper::set_wallpaper_for_all_screens(&image, reporter, connect) {
        Ok(_) => Exit::Success,
        Err(_) => Exit::Failure,
    }
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "wallpaper".to_string())
}

fn print_usage<W: Write>(reporter: &mut Reporter<W>, program: &str) {
    reporter.emit(Level::Info, &format!("Usage: {} <image_path>", program));
    reporter.emit(
        Level::Info,
        &format!("Example: {} /path/to/your/image.jpg", program),
    );
}

fn main() -> ExitCode {
    let mut reporter = Reporter::stdout();
    run(std::env::args_os(), &mut reporter, wallpaper::detect_service).into()
}
