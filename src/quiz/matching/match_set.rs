use super::{AnswerKey, Pair};

/// Confirmed pairs, in the order they were made.
///
/// Holds at most one pair per left id. The same right id may be claimed by several
/// left ids at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    pairs: Vec<Pair>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops any pair sharing `pair.left`, then appends `pair`.
    pub fn upsert(&mut self, pair: Pair) {
        self.pairs.retain(|existing| existing.left != pair.left);
        self.pairs.push(pair);
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn entries(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn from_answer_key(key: &AnswerKey) -> Self {
        Self {
            pairs: key.pairs().collect(),
        }
    }
}
