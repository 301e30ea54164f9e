// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors raised while building or mounting a story.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// A required host element does not exist.
    #[error("element `#{id}` not found")]
    MissingElement {
        /// The element id that was looked up.
        id: String,
    },

    /// A story must have at least one step.
    #[error("story has no steps")]
    EmptyStory,

    /// Two steps share an id.
    #[error("duplicate step id `{id}`")]
    DuplicateStep {
        /// The repeated id.
        id: String,
    },

    /// A visualization name outside the fixed set.
    #[error("unknown visualization `{name}`")]
    UnknownVisualization {
        /// The name as given.
        name: String,
    },

    /// Configuration JSON failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
