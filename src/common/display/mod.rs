//! Display types shared by the wallpaper backends.

mod sway;

pub use sway::SwayDisplayProvider;

/// One attached screen a wallpaper can be applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    /// Backend-specific target (output name, screen index, desktop number)
    pub id: String,
    /// Human-readable name used in diagnostics
    pub label: String,
}

impl Display {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Information about a display output
#[derive(Debug, Clone)]
pub struct OutputInfo {
    /// Display name (e.g., "eDP-1", "HDMI-A-1")
    pub name: String,
    /// Display make/manufacturer
    pub make: String,
    /// Display model
    pub model: String,
    /// Whether the output is currently enabled
    pub active: bool,
}

impl OutputInfo {
    /// Get a human-readable display label
    pub fn display_label(&self) -> String {
        let model_info = if !self.model.is_empty() && self.model != "Unknown" {
            format!(" ({})", self.model)
        } else if !self.make.is_empty() && self.make != "Unknown" {
            format!(" ({})", self.make)
        } else {
            String::new()
        };
        format!("{}{}", self.name, model_info)
    }
}

impl From<&OutputInfo> for Display {
    fn from(output: &OutputInfo) -> Self {
        Display::new(output.name.clone(), output.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(make: &str, model: &str) -> OutputInfo {
        OutputInfo {
            name: "HDMI-A-1".to_string(),
            make: make.to_string(),
            model: model.to_string(),
            active: true,
        }
    }

    #[test]
    fn test_display_label_prefers_model() {
        assert_eq!(output("Dell", "U2720Q").display_label(), "HDMI-A-1 (U2720Q)");
        assert_eq!(output("Dell", "Unknown").display_label(), "HDMI-A-1 (Dell)");
        assert_eq!(output("Unknown", "").display_label(), "HDMI-A-1");
    }

    #[test]
    fn test_display_from_output() {
        let display = Display::from(&output("Dell", "U2720Q"));
        assert_eq!(display, Display::new("HDMI-A-1", "HDMI-A-1 (U2720Q)"));
    }
}
