use nucleo_matcher::{pattern::Pattern, Matcher};
use pedigree_model::Dataset;
use serde::Serialize;

/// One scored hit from a name lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameMatch {
    /// Individual id
    pub id: String,

    /// Display name, when the record carries one
    pub name: Option<String>,

    /// Normalized match score in `[0, 1]`
    pub score: f32,
}

/// Fuzzy name lookup over a dataset's individuals using nucleo-matcher
pub struct NameSearch {
    matcher: Matcher,
}

impl NameSearch {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Search individuals by fuzzy-matching against names and ids
    ///
    /// Each individual is scored on its display name and its id, keeping the
    /// better of the two, so unnamed records are still findable by id.
    /// Results are sorted by score descending (ties keep dataset order) and
    /// truncated to `limit`.
    pub fn search(&mut self, query: &str, dataset: &Dataset, limit: usize) -> Vec<NameMatch> {
        let pattern = Pattern::parse(
            query,
            nucleo_matcher::pattern::CaseMatching::Smart,
            nucleo_matcher::pattern::Normalization::Smart,
        );

        let mut scored: Vec<(&str, Option<&str>, u32)> = dataset
            .names()
            .filter_map(|(id, name)| {
                let name_score = name.and_then(|name| {
                    let haystack = nucleo_matcher::Utf32String::from(name);
                    pattern.score(haystack.slice(..), &mut self.matcher)
                });

                let id_haystack = nucleo_matcher::Utf32String::from(id);
                let id_score = pattern.score(id_haystack.slice(..), &mut self.matcher);

                // Take best score
                let best = name_score.max(id_score)?;
                Some((id, name, best))
            })
            .collect();

        // Sort by score descending
        scored.sort_by(|a, b| b.2.cmp(&a.2));
        scored.truncate(limit);

        // Normalize scores to 0-1 range (nucleo scores are u32)
        let max_score = scored.first().map(|(_, _, s)| *s as f32).unwrap_or(1.0);

        scored
            .into_iter()
            .map(|(id, name, score)| NameMatch {
                id: id.to_string(),
                name: name.map(String::from),
                score: if max_score > 0.0 {
                    score as f32 / max_score
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Best single hit for a query, if anything matches at all
    pub fn best(&mut self, query: &str, dataset: &Dataset) -> Option<NameMatch> {
        self.search(query, dataset, 1).into_iter().next()
    }
}

impl Default for NameSearch {
    fn default() -> Self {
        Self::new()
    }
}
