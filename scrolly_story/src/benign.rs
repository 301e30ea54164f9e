// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognition of harmless browser errors.

/// Messages browsers report for layout-observer churn and opaque cross-origin scripts.
pub const DEFAULT_BENIGN_MESSAGES: [&str; 3] = [
    "ResizeObserver loop completed with undelivered notifications.",
    "ResizeObserver loop limit exceeded",
    "Script error.",
];

/// A fixed list of error messages that global error handlers swallow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenignErrors {
    messages: Vec<String>,
}

impl Default for BenignErrors {
    fn default() -> Self {
        Self::new(DEFAULT_BENIGN_MESSAGES)
    }
}

impl BenignErrors {
    /// Creates a matcher for `messages`. Empty messages are dropped.
    pub fn new(messages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            messages: messages
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    /// Whether `message` contains one of the known messages.
    pub fn matches(&self, message: &str) -> bool {
        self.messages.iter().any(|m| message.contains(m.as_str()))
    }

    /// Like [`Self::matches`], treating a missing message as not benign.
    pub fn matches_opt(&self, message: Option<&str>) -> bool {
        message.is_some_and(|m| self.matches(m))
    }

    /// The known messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_by_substring() {
        let benign = BenignErrors::default();
        assert!(
            benign.matches("Uncaught: ResizeObserver loop limit exceeded (at line 1)"),
            "embedded message"
        );
        assert!(benign.matches("Script error."), "exact message");
        assert!(!benign.matches("TypeError: x is undefined"), "real error");
        assert!(!benign.matches(""), "empty message");
        assert!(!benign.matches_opt(None), "missing message");
    }

    #[test]
    fn empty_patterns_never_match_everything() {
        let benign = BenignErrors::new(["", "quota"]);
        assert_eq!(benign.messages().len(), 1, "empty pattern dropped");
        assert!(!benign.matches("anything"), "no catch-all");
        assert!(benign.matches("storage quota exceeded"), "kept pattern");
    }
}
