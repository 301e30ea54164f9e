// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Narrative steps and the ordered story they form.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{StoryError, VisualizationType};

/// One block of narrative text and the visualization it shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeStep {
    /// Unique id, written to the block's `data-step` attribute.
    pub id: String,
    /// Visualization rendered while this step is active.
    pub visualization: VisualizationType,
    /// Heading.
    pub title: String,
    /// Body text.
    pub description: String,
}

impl NarrativeStep {
    /// Creates a step.
    pub fn new(
        id: impl Into<String>,
        visualization: VisualizationType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            visualization,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A validated, ordered list of steps.
///
/// Ids are unique and there is at least one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Story {
    steps: Vec<NarrativeStep>,
}

impl Story {
    /// Validates and wraps `steps`.
    pub fn new(steps: Vec<NarrativeStep>) -> Result<Self, StoryError> {
        if steps.is_empty() {
            return Err(StoryError::EmptyStory);
        }
        if let Some(id) = first_duplicate(&steps) {
            return Err(StoryError::DuplicateStep { id: id.to_owned() });
        }
        Ok(Self { steps })
    }

    /// The gender pay gap story, one step per visualization.
    pub fn builtin() -> Self {
        Self {
            steps: BUILTIN
                .iter()
                .map(|(ty, title, description)| {
                    NarrativeStep::new(ty.name(), *ty, *title, *description)
                })
                .collect(),
        }
    }

    /// Steps in order.
    pub fn steps(&self) -> &[NarrativeStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there are no steps; never true for a validated story.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`.
    pub fn get(&self, index: usize) -> Option<&NarrativeStep> {
        self.steps.get(index)
    }

    /// Finds a step by id, with its index.
    pub fn find(&self, id: &str) -> Option<(usize, &NarrativeStep)> {
        self.steps.iter().enumerate().find(|(_, s)| s.id == id)
    }
}

fn first_duplicate(steps: &[NarrativeStep]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(steps.len());
    steps
        .iter()
        .map(|s| s.id.as_str())
        .find(|id| !seen.insert(*id))
}

const BUILTIN: [(VisualizationType, &str, &str); 6] = [
    (
        VisualizationType::Intro,
        "82 Cents on the Dollar",
        "In 2024, the gap remains a structural reality. For every dollar a man takes home, a woman \
         earns roughly 82 cents. This isn't just a static number\u{2014}it's the baseline of a \
         life-long economic diversion.",
    ),
    (
        VisualizationType::Global,
        "No Country is Equal",
        "Even in the most progressive economies, parity is elusive. While countries like Iceland \
         lead the charge, the average global disparity continues to depress economic potential \
         by trillions.",
    ),
    (
        VisualizationType::Age,
        "The Divergent Path",
        "While careers often begin near parity, life events and systemic biases cause earnings to \
         drift apart over decades. By the time workers reach their peak earning years, the gap \
         has often widened to its greatest extent.",
    ),
    (
        VisualizationType::Education,
        "Education vs. Income",
        "Higher education is often sold as the ultimate equalizer. However, data shows that at \
         every degree level\u{2014}from high school to PhD\u{2014}the wage gap persists, and in \
         many cases, the absolute dollar gap increases with education.",
    ),
    (
        VisualizationType::Industry,
        "Sector Intensity",
        "The gap is not uniform across industries. High-growth sectors like Technology and \
         Finance exhibit significantly higher disparities than more service-oriented fields, \
         often due to 'glass ceilings' in leadership.",
    ),
    (
        VisualizationType::Conclusion,
        "The Lifetime Deficit",
        "The daily cents add up to a monumental loss. Over a 40-year career, an 18% gap results \
         in nearly $1.2 million in lost wealth for the average woman. This missing capital \
         affects retirement, housing, and multi-generational security.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_story_has_one_step_per_visualization() {
        let story = Story::builtin();
        let ids: Vec<_> = story.steps().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["intro", "global", "age", "education", "industry", "conclusion"],
            "ids follow presentation order"
        );
        for (step, ty) in story.steps().iter().zip(VisualizationType::ALL) {
            assert_eq!(step.visualization, ty, "{} shows its own type", step.id);
        }
        assert_eq!(story.steps()[0].title, "82 Cents on the Dollar", "intro title");
        let validated = Story::new(story.steps().to_vec()).unwrap();
        assert_eq!(validated, story, "builtin validates");
    }

    #[test]
    fn find_returns_index() {
        let story = Story::builtin();
        let (index, step) = story.find("education").unwrap();
        assert_eq!(index, 3, "education index");
        assert_eq!(step.visualization, VisualizationType::Education, "education step");
        assert!(story.find("missing").is_none(), "unknown id");
    }

    #[test]
    fn empty_story_is_rejected() {
        assert!(matches!(Story::new(Vec::new()), Err(StoryError::EmptyStory)), "empty");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let steps = vec![
            NarrativeStep::new("a", VisualizationType::Intro, "A", ""),
            NarrativeStep::new("b", VisualizationType::Age, "B", ""),
            NarrativeStep::new("a", VisualizationType::Global, "A again", ""),
        ];
        let err = Story::new(steps).unwrap_err();
        assert!(
            matches!(&err, StoryError::DuplicateStep { id } if id == "a"),
            "unexpected error {err:?}"
        );
    }
}
