//! Builtin subject index
//!
//! Offline stand-in for the hosted index: a fixed subject catalog ranked
//! with fzf-style fuzzy matching. An empty query returns the whole catalog.

use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Subject catalog used when no hosted index is configured
const DEFAULT_SUBJECTS: &[&str] = &[
    "Algebra",
    "Art",
    "Biology",
    "Calculus",
    "Chemistry",
    "Computer Science",
    "Economics",
    "English",
    "French",
    "Geography",
    "Geometry",
    "History",
    "Latin",
    "Math",
    "Mathematics",
    "Music",
    "Physics",
    "Spanish",
    "Statistics",
    "Trigonometry",
    "Writing",
];

pub struct BuiltinIndex {
    subjects: Vec<String>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for BuiltinIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinIndex")
            .field("subjects", &self.subjects.len())
            .finish_non_exhaustive()
    }
}

impl Default for BuiltinIndex {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect())
    }
}

impl BuiltinIndex {
    pub fn new(subjects: Vec<String>) -> Self {
        Self {
            subjects,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Rank the catalog against the query, best match first. Ties keep
    /// catalog order.
    pub fn search(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.subjects.clone();
        }

        let mut scored: Vec<(i64, &String)> = self
            .subjects
            .iter()
            .filter_map(|subject| {
                self.matcher
                    .fuzzy_match(subject, query)
                    .map(|score| (score, subject))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored.into_iter().map(|(_, subject)| subject.clone()).collect()
    }
}
