//! Configuration handling for the TUI

use crate::state::FormProfile;
use crate::validation::PhoneLength;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Accepted phone number length
    pub phone_length: Option<PhoneLength>,
    /// Collect a city after the region
    pub collect_city: Option<bool>,
    /// Require the whole PAN value to be the 10-character code
    pub anchor_pan: Option<bool>,
    /// Let the visibility toggle mask PAN and Aadhar too
    pub mask_identity_numbers: Option<bool>,
    /// Disable submit until every field would pass
    pub strict_submit_gate: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "registration", "registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the form variant, using the defaults for unset switches
    pub fn profile(&self) -> FormProfile {
        let defaults = FormProfile::default();
        FormProfile {
            phone_length: self.phone_length.unwrap_or(defaults.phone_length),
            collect_city: self.collect_city.unwrap_or(defaults.collect_city),
            anchor_pan: self.anchor_pan.unwrap_or(defaults.anchor_pan),
            mask_identity_numbers: self
                .mask_identity_numbers
                .unwrap_or(defaults.mask_identity_numbers),
            strict_submit_gate: self
                .strict_submit_gate
                .unwrap_or(defaults.strict_submit_gate),
        }
    }
}
