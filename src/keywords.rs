// SPDX-License-Identifier: MIT
// Copyright 2026 Tunisia Travel Magic contributors

//! Shared keyword matching for name-based classification.
//!
//! The attraction categorizer, the POI type classifier, and the special-region
//! detector all classify by case-insensitive substring matching against small
//! keyword lists. This module is the single implementation they share.

/// Returns true if `text` contains any of `keywords`, case-insensitively.
///
/// Keywords are expected in lowercase. Lowercasing the input also covers the
/// Arabic keyword sets (Arabic script has no case, so it passes through
/// unchanged).
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// An ordered first-match-wins keyword classifier.
///
/// Each rule pairs a keyword list with a result tag; `classify` returns the
/// tag of the first rule whose keywords match. Rule order is precedence.
/// Rule tables are static so classifiers can live in `const`s.
pub struct KeywordClassifier<T: 'static> {
    rules: &'static [(&'static [&'static str], T)],
}

impl<T: Copy + 'static> KeywordClassifier<T> {
    pub const fn new(rules: &'static [(&'static [&'static str], T)]) -> Self {
        Self { rules }
    }

    /// Classify `text`, returning the tag of the first matching rule.
    pub fn classify(&self, text: &str) -> Option<T> {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, tag)| *tag)
    }
}
