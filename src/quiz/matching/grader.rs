use super::{AnswerKey, MatchSet};

/// All-or-nothing comparison of the learner's pairs against the key.
///
/// Every pair must appear verbatim in the key, and every key entry must be matched.
pub fn grade(matches: &MatchSet, key: &AnswerKey) -> bool {
    matches.entries().iter().all(|pair| key.contains(pair)) && matches.len() == key.len()
}
