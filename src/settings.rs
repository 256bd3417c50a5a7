use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::card::CardContext;
use crate::error::CardError;
use crate::services::datefmt::{short_pattern_for_locale, utc_offset, PatternDateFormatter};
use crate::services::{MessageCatalog, StateRegistry};

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "PV_CARD_SETTINGS";

/// Display settings for persistent volume cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSettings {
    pub locale: String,
    /// chrono strftime pattern for the tooltip date. Unset means the
    /// locale's short pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_date_pattern: Option<String>,
    pub utc_offset_minutes: i32,
    /// Prepended to every route path, "#!" for hashbang routing.
    pub href_prefix: String,
    /// Message id → localized template.
    pub messages: HashMap<String, String>,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            short_date_pattern: None,
            utc_offset_minutes: 0,
            href_prefix: "#!".to_string(),
            messages: HashMap::new(),
        }
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Returns the settings file to read.
/// Respects PV_CARD_SETTINGS, then <config dir>/kubedash/pvcard.yaml.
/// A blank PV_CARD_SETTINGS counts as unset.
pub fn settings_path() -> Option<PathBuf> {
    std::env::var(SETTINGS_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("kubedash").join("pvcard.yaml")))
}

// ── loading ───────────────────────────────────────────────────────────────────

impl CardSettings {
    /// Loads settings from the resolved settings path.
    ///
    /// Returns defaults, not an error, when no settings file exists.
    pub fn load() -> Result<Self, CardError> {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("settings: cannot determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, CardError> {
        if !path.exists() {
            log::info!("settings: skip (not found) — {}", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| CardError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&raw)?;
        log::info!(
            "settings: ok   (locale {}, {} message override(s)) — {}",
            settings.locale,
            settings.messages.len(),
            path.display()
        );
        Ok(settings)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, CardError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn router(&self) -> StateRegistry {
        StateRegistry::with_default_states(self.href_prefix.clone())
    }

    /// The configured pattern, else the locale's short pattern.
    pub fn effective_date_pattern(&self) -> &str {
        self.short_date_pattern
            .as_deref()
            .unwrap_or_else(|| short_pattern_for_locale(&self.locale))
    }

    pub fn date_formatter(&self) -> Result<PatternDateFormatter, CardError> {
        PatternDateFormatter::new(
            self.effective_date_pattern(),
            utc_offset(self.utc_offset_minutes)?,
        )
    }

    pub fn translator(&self) -> MessageCatalog {
        MessageCatalog::new(self.locale.clone(), self.messages.clone())
    }

    /// Builds the default collaborators, validating pattern and offset.
    pub fn context(&self) -> Result<CardContext, CardError> {
        Ok(CardContext::new(
            self.router(),
            self.date_formatter()?,
            self.translator(),
        ))
    }
}
