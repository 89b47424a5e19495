use anyhow::Result;
use std::path::Path;

use super::DisplayService;
use crate::common::compositor::sway;
use crate::common::display::{Display, SwayDisplayProvider};

/// Per-output backgrounds through swaymsg
pub struct SwayOutputs;

impl DisplayService for SwayOutputs {
    fn name(&self) -> &str {
        "Sway"
    }

    fn list_displays(&self) -> Result<Vec<Display>> {
        let outputs = SwayDisplayProvider::get_outputs_sync()?;
        Ok(outputs
            .iter()
            .filter(|output| output.active)
            .map(Display::from)
            .collect())
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        let command = sway::output_bg_command(&display.id, &image.to_string_lossy());
        sway::swaymsg(&command)?;
        Ok(())
    }
}
