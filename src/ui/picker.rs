//! Quicksearch candidate building.
//!
//! The host owns the picker widget and its ranking; the plugin only decides
//! which labels are offered for a query and which characters to highlight.
//! Candidates keep file order.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A label offered to the host's quicksearch picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text shown in the picker and returned when chosen.
    pub label: String,
    /// Character indices of `label` matched by the query.
    pub highlight: Vec<usize>,
}

/// Subsequence matcher used to filter and highlight candidates.
pub trait Matcher {
    /// Returns the matched character indices, or `None` if `text` does not match.
    fn highlight(&self, text: &str, query: &str) -> Option<Vec<usize>>;
}

/// Default matcher backed by the skim fuzzy algorithm, case-insensitive.
#[derive(Default)]
pub struct SkimMatcher {
    inner: SkimMatcherV2,
}

impl Matcher for SkimMatcher {
    fn highlight(&self, text: &str, query: &str) -> Option<Vec<usize>> {
        self.inner
            .fuzzy_indices(&text.to_lowercase(), &query.to_lowercase())
            .map(|(_score, indices)| indices)
    }
}

impl std::fmt::Debug for SkimMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkimMatcher").finish_non_exhaustive()
    }
}

/// Builds picker candidates for `query`.
///
/// An empty query offers every label unhighlighted. Otherwise only labels the
/// matcher accepts are offered, carrying their highlight indices.
///
/// # Examples
///
/// ```
/// use pathmarks::ui::{suggest, SkimMatcher};
///
/// let labels = vec!["Home".to_string(), "Work".to_string(), "Photos".to_string()];
/// let matcher = SkimMatcher::default();
///
/// assert_eq!(suggest(&labels, "", &matcher).len(), 3);
///
/// let hits = suggest(&labels, "wk", &matcher);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].label, "Work");
/// assert_eq!(hits[0].highlight, vec![0, 3]);
/// ```
pub fn suggest(labels: &[String], query: &str, matcher: &dyn Matcher) -> Vec<Suggestion> {
    let _span = tracing::trace_span!("suggest", labels = labels.len(), query_len = query.len()).entered();

    labels
        .iter()
        .filter(|label| !label.trim().is_empty())
        .filter_map(|label| {
            if query.is_empty() {
                return Some(Suggestion {
                    label: label.clone(),
                    highlight: Vec::new(),
                });
            }
            matcher.highlight(label, query).map(|highlight| Suggestion {
                label: label.clone(),
                highlight,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn matching_is_case_insensitive() {
        let hits = suggest(&labels(&["Downloads", "docs"]), "DO", &SkimMatcher::default());
        let names: Vec<_> = hits.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(names, ["Downloads", "docs"]);
    }

    #[test]
    fn non_subsequence_labels_are_dropped() {
        let hits = suggest(&labels(&["Home", "Work"]), "zz", &SkimMatcher::default());
        assert!(hits.is_empty());
    }

    #[test]
    fn custom_matcher_is_respected() {
        struct Prefix;
        impl Matcher for Prefix {
            fn highlight(&self, text: &str, query: &str) -> Option<Vec<usize>> {
                text.starts_with(query).then(|| (0..query.chars().count()).collect())
            }
        }

        let hits = suggest(&labels(&["proj", "oproj"]), "pr", &Prefix);
        assert_eq!(hits, vec![Suggestion { label: "proj".into(), highlight: vec![0, 1] }]);
    }
}
