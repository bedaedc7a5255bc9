//! Tunable limits and delays for the form controller.
//!
//! Every field has a default matching the stock page, so an empty object
//! (or no config at all) behaves identically to [`FormConfig::default`].
//! The browser build reads overrides from the form's `data-config`
//! attribute.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::consts::{
    BANNER_CLEAR_MS, BANNER_FADE_MS, FLASH_MS, MAX_COMMENTS_LENGTH, MIN_COMMENTS_LENGTH, SUBMIT_DELAY_MS,
    WARNING_THRESHOLD,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub max_comments_length: usize,
    pub warning_threshold: usize,
    pub min_comments_length: usize,
    pub banner_fade_ms: u64,
    pub banner_clear_ms: u64,
    pub flash_ms: u64,
    pub submit_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_comments_length: MAX_COMMENTS_LENGTH,
            warning_threshold: WARNING_THRESHOLD,
            min_comments_length: MIN_COMMENTS_LENGTH,
            banner_fade_ms: BANNER_FADE_MS,
            banner_clear_ms: BANNER_CLEAR_MS,
            flash_ms: FLASH_MS,
            submit_delay_ms: SUBMIT_DELAY_MS,
        }
    }
}

impl FormConfig {
    /// Parse a JSON object of overrides and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON and
    /// [`Error::InvalidLimits`] / [`Error::InvalidThreshold`] when the
    /// comment limits contradict each other.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the comment limits are coherent.
    ///
    /// # Errors
    ///
    /// See [`FormConfig::from_json`].
    pub fn validate(&self) -> Result<()> {
        if self.min_comments_length > self.max_comments_length {
            return Err(Error::InvalidLimits { min: self.min_comments_length, max: self.max_comments_length });
        }
        if self.warning_threshold > self.max_comments_length {
            return Err(Error::InvalidThreshold { threshold: self.warning_threshold, max: self.max_comments_length });
        }
        Ok(())
    }

    #[must_use]
    pub fn banner_fade(&self) -> Duration {
        Duration::from_millis(self.banner_fade_ms)
    }

    #[must_use]
    pub fn banner_clear(&self) -> Duration {
        Duration::from_millis(self.banner_clear_ms)
    }

    #[must_use]
    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Banner text for a comment that exceeds the maximum length.
    #[must_use]
    pub fn max_length_message(&self) -> String {
        format!("Maximum {} characters allowed", self.max_comments_length)
    }

    /// Banner text for a comment outside the accepted length range.
    #[must_use]
    pub fn length_range_message(&self) -> String {
        format!(
            "Please make your message between {} and {} characters",
            self.min_comments_length, self.max_comments_length
        )
    }
}
