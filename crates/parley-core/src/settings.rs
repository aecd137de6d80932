//! Persisted generation settings.
//!
//! One JSON document holds the region, model and sampling parameters. It is
//! read on every request and replaced wholesale on update. A missing or
//! corrupt file never fails a request: readers get the defaults instead.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CoreError;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-7-sonnet-20250219-v1:0";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

pub const MAX_OUTPUT_TOKENS: u32 = 200_000;
pub const MAX_TOP_K: u32 = 500;

/// Generation settings shared by every chat request.
///
/// Fields absent from the file take their default individually, so an older
/// or hand-edited file still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub region: String,
    pub model_id: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
    pub system_prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            temperature: 1.0,
            max_tokens: 4096,
            top_p: 0.999,
            top_k: 250,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl Settings {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.region.trim().is_empty() {
            return Err(invalid("region", "must not be empty"));
        }
        if self.model_id.trim().is_empty() {
            return Err(invalid("model_id", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(invalid("temperature", "must be between 0 and 1"));
        }
        if !(1..=MAX_OUTPUT_TOKENS).contains(&self.max_tokens) {
            return Err(invalid(
                "max_tokens",
                format!("must be between 1 and {MAX_OUTPUT_TOKENS}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(invalid("top_p", "must be between 0 and 1"));
        }
        if self.top_k > MAX_TOP_K {
            return Err(invalid("top_k", format!("must be between 0 and {MAX_TOP_K}")));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> CoreError {
    CoreError::InvalidSetting {
        field,
        reason: reason.into(),
    }
}

/// File-backed settings storage.
///
/// Not locked: concurrent writers race and the last rename wins.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current settings, falling back to [`Settings::default`] when
    /// the file is absent, unreadable or not valid JSON.
    pub fn load(&self) -> Settings {
        match self.read() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to load settings, using defaults");
                Settings::default()
            }
        }
    }

    fn read(&self) -> Result<Option<Settings>, CoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&self.path, e)),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Replace the stored settings with `settings`.
    ///
    /// The whole object is written; there is no field-level merge.
    pub fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        self.write(settings).inspect_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to save settings");
        })
    }

    fn write(&self, settings: &Settings) -> Result<(), CoreError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
        }

        let json = serde_json::to_string_pretty(settings)?;

        // Write to a sibling temp file then rename so readers never see a
        // partial document.
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp_path = PathBuf::from(tmp);
        std::fs::write(&tmp_path, json.as_bytes()).map_err(|e| io_error(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| io_error(&self.path, e))?;

        info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
