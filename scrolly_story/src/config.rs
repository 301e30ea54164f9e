// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-page contract and tuning knobs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::StoryError;
use crate::benign::{BenignErrors, DEFAULT_BENIGN_MESSAGES};

/// Story configuration.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Id of the element charts are drawn into.
    pub visualization_id: String,
    /// Id of the floating tooltip element.
    pub tooltip_id: String,
    /// Id of the element narrative blocks are appended to.
    pub narrative_id: String,
    /// Class carried by every narrative block.
    pub step_class: String,
    /// Class added to the active block.
    pub active_class: String,
    /// Activation line as a fraction of the viewport height, from the top.
    pub offset: f64,
    /// Delay before the first render, in milliseconds.
    pub startup_delay_ms: u64,
    /// Smallest side of the square drawing area.
    pub min_side: f64,
    /// Side used when the visualization element cannot be measured.
    pub fallback_side: u32,
    /// Error messages swallowed by the global error listeners.
    pub benign_errors: Vec<String>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            visualization_id: "visualization".to_owned(),
            tooltip_id: "tooltip".to_owned(),
            narrative_id: "narrative-container".to_owned(),
            step_class: "scrollama-step".to_owned(),
            active_class: "is-active".to_owned(),
            offset: 0.5,
            startup_delay_ms: 300,
            min_side: 100.0,
            fallback_side: 400,
            benign_errors: DEFAULT_BENIGN_MESSAGES.iter().map(|m| (*m).to_owned()).collect(),
        }
    }
}

impl StoryConfig {
    /// Parses a JSON object over the defaults.
    pub fn from_json(json: &str) -> Result<Self, StoryError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// The startup delay as a [`Duration`].
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    /// The matcher for [`Self::benign_errors`].
    pub fn benign(&self) -> BenignErrors {
        BenignErrors::new(self.benign_errors.iter().cloned())
    }

    /// Clamps out-of-range values back into their valid ranges.
    ///
    /// The offset is kept within `[0, 1]`; a non-finite offset or minimum side falls back to
    /// the default.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.offset = if self.offset.is_finite() {
            self.offset.clamp(0.0, 1.0)
        } else {
            defaults.offset
        };
        if !self.min_side.is_finite() || self.min_side < 0.0 {
            self.min_side = defaults.min_side;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_page() {
        let config = StoryConfig::default();
        assert_eq!(config.visualization_id, "visualization", "chart container");
        assert_eq!(config.narrative_id, "narrative-container", "narrative container");
        assert_eq!(config.step_class, "scrollama-step", "step class");
        assert_eq!(config.offset, 0.5, "activation offset");
        assert_eq!(config.startup_delay(), Duration::from_millis(300), "startup delay");
        assert_eq!(config.benign_errors.len(), 3, "benign messages");
    }

    #[test]
    fn partial_json_overrides_named_fields() {
        let config =
            StoryConfig::from_json(r#"{ "offset": 0.6, "narrative_id": "story" }"#).unwrap();
        assert_eq!(config.offset, 0.6, "offset overridden");
        assert_eq!(config.narrative_id, "story", "narrative id overridden");
        assert_eq!(config.tooltip_id, "tooltip", "tooltip id kept");
        assert_eq!(config.fallback_side, 400, "fallback kept");
    }

    #[test]
    fn out_of_range_offset_is_clamped() {
        let config = StoryConfig::from_json(r#"{ "offset": 3.0, "min_side": -5 }"#).unwrap();
        assert_eq!(config.offset, 1.0, "offset clamped");
        assert_eq!(config.min_side, 100.0, "negative min side replaced");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = StoryConfig::from_json("{ offset: }").unwrap_err();
        assert!(matches!(err, StoryError::Config(_)), "unexpected error {err:?}");
    }
}
