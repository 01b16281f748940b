//! Word-frequency scoring used to recommend an assignee.
//!
//! A developer's history is the set of issues they fixed. Words are the
//! pieces of a title or description split on single spaces, compared
//! verbatim. Every target word found in the history earns its historical
//! occurrence count multiplied by the title or description weight. Scores
//! saturate rather than overflow.

use super::RecommendationConfig;
use crate::issue::domain::Issue;
use std::collections::HashMap;

/// Splits text into the words compared by the scorer.
///
/// Empty pieces between consecutive spaces are kept, trailing empty pieces
/// are dropped. Text without any space, including the empty string, is a
/// single word.
///
/// # Examples
///
/// ```
/// use issue_tracker::issue::services::recommendation::tokenize;
///
/// assert_eq!(tokenize("null  pointer "), ["null", "", "pointer"]);
/// assert_eq!(tokenize(""), [""]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    if !text.contains(' ') {
        return vec![text];
    }
    let mut words: Vec<&str> = text.split(' ').collect();
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
}

/// Occurrence count of every word across `texts`.
#[must_use]
pub fn word_frequencies<'a>(texts: impl IntoIterator<Item = &'a str>) -> HashMap<&'a str, u64> {
    let mut frequencies = HashMap::new();
    for word in texts.into_iter().flat_map(tokenize) {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}

/// Words of the issue being matched against developer histories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTokens<'a> {
    title: Vec<&'a str>,
    description: Vec<&'a str>,
}

impl<'a> IssueTokens<'a> {
    /// Tokenizes the issue's title and description.
    #[must_use]
    pub fn from_issue(issue: &'a Issue) -> Self {
        Self::from_text(issue.title().as_str(), issue.description())
    }

    /// Tokenizes a raw title and description.
    #[must_use]
    pub fn from_text(title: &'a str, description: &'a str) -> Self {
        Self {
            title: tokenize(title),
            description: tokenize(description),
        }
    }
}

/// Scores a developer's fixed issues against the target issue's words.
#[must_use]
pub fn score_developer(
    fixed_issues: &[Issue],
    target: &IssueTokens<'_>,
    config: &RecommendationConfig,
) -> u64 {
    let title_words = word_frequencies(fixed_issues.iter().map(|issue| issue.title().as_str()));
    let description_words = word_frequencies(fixed_issues.iter().map(Issue::description));

    let title_score = weighted_matches(&target.title, &title_words, config.title_weight);
    let description_score = weighted_matches(
        &target.description,
        &description_words,
        config.description_weight,
    );

    title_score.saturating_add(description_score)
}

fn weighted_matches<'a>(
    words: &[&'a str],
    frequencies: &HashMap<&'a str, u64>,
    weight: u64,
) -> u64 {
    words
        .iter()
        .filter_map(|word| frequencies.get(word))
        .fold(0, |score: u64, count| {
            score.saturating_add(count.saturating_mul(weight))
        })
}

/// Picks the highest-scoring candidate.
///
/// Only a strictly greater score replaces the current best, so the earliest
/// candidate wins a tie, and a candidate scoring zero is never picked.
#[must_use]
pub fn select_candidate<T>(scored: impl IntoIterator<Item = (T, u64)>) -> Option<T> {
    let mut best_score = 0;
    let mut best = None;
    for (candidate, score) in scored {
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }
    best
}
