// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of visualizations a story can show.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::StoryError;

/// One of the six story visualizations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    /// Two figures compared by fill level.
    Intro,
    /// Horizontal parity bars per country.
    Global,
    /// Earnings by age for men and women.
    Age,
    /// Grouped earnings bars per degree.
    Education,
    /// Wage gap per sector.
    Industry,
    /// Cumulative lifetime earnings and the gap between them.
    Conclusion,
}

impl VisualizationType {
    /// Every variant in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Intro,
        Self::Global,
        Self::Age,
        Self::Education,
        Self::Industry,
        Self::Conclusion,
    ];

    /// The lowercase name used in markup and configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Global => "global",
            Self::Age => "age",
            Self::Education => "education",
            Self::Industry => "industry",
            Self::Conclusion => "conclusion",
        }
    }

    /// Position in [`Self::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Global => 1,
            Self::Age => 2,
            Self::Education => 3,
            Self::Industry => 4,
            Self::Conclusion => 5,
        }
    }

    /// Looks up an exact lowercase name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// Resolves a possibly missing name, falling back to [`Self::Intro`].
    pub fn parse_or_intro(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or(Self::Intro)
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisualizationType {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StoryError::UnknownVisualization { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for ty in VisualizationType::ALL {
            assert_eq!(VisualizationType::parse(ty.name()), Some(ty), "{ty}");
            assert_eq!(VisualizationType::ALL[ty.index()], ty, "index of {ty}");
        }
    }

    #[test]
    fn unknown_names_fall_back_to_intro() {
        assert_eq!(VisualizationType::parse_or_intro(None), VisualizationType::Intro, "missing");
        assert_eq!(
            VisualizationType::parse_or_intro(Some("unknown")),
            VisualizationType::Intro,
            "unknown"
        );
        assert_eq!(
            VisualizationType::parse_or_intro(Some("Global")),
            VisualizationType::Intro,
            "names are case sensitive"
        );
        assert_eq!(
            VisualizationType::parse_or_intro(Some("age")),
            VisualizationType::Age,
            "known"
        );
    }

    #[test]
    fn strict_parse_reports_the_name() {
        let err = "radar".parse::<VisualizationType>().unwrap_err();
        assert!(
            matches!(&err, StoryError::UnknownVisualization { name } if name == "radar"),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&VisualizationType::Education).unwrap();
        assert_eq!(json, "\"education\"", "serde name");
        let back: VisualizationType = serde_json::from_str("\"conclusion\"").unwrap();
        assert_eq!(back, VisualizationType::Conclusion, "deserialize");
    }
}
