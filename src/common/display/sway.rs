//! Sway-specific display provider
//!
//! Uses swaymsg to query display outputs.

use super::OutputInfo;
use crate::common::compositor::sway;
use anyhow::{Context, Result};

/// Sway display provider for querying outputs
pub struct SwayDisplayProvider;

impl SwayDisplayProvider {
    /// Get all connected outputs
    pub fn get_outputs_sync() -> Result<Vec<OutputInfo>> {
        let stdout = sway::swaymsg_get_outputs()?;
        Self::parse_outputs(&stdout)
    }

    /// Parse swaymsg -t get_outputs JSON
    pub(crate) fn parse_outputs(json_str: &str) -> Result<Vec<OutputInfo>> {
        let outputs: Vec<serde_json::Value> =
            serde_json::from_str(json_str).context("Failed to parse swaymsg output JSON")?;

        outputs
            .into_iter()
            .map(Self::parse_output_info)
            .collect::<Result<Vec<_>>>()
    }

    fn parse_output_info(output: serde_json::Value) -> Result<OutputInfo> {
        let name = output
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Missing output name"))?
            .to_string();

        let make = output
            .get("make")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string();

        let model = output
            .get("model")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string();

        // Older sway releases omit "active" for enabled outputs
        let active = output
            .get("active")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        Ok(OutputInfo {
            name,
            make,
            model,
            active,
        })
    }
}
