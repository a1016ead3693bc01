use std::collections::BTreeMap;

use super::Pair;

/// Canonical left → right pairings of a matching question.
///
/// Fixed at construction; nothing in the engine mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AnswerKey {
    pairs: BTreeMap<String, String>,
}

impl AnswerKey {
    pub fn new<L, R>(pairs: impl IntoIterator<Item = (L, R)>) -> Self
    where
        L: Into<String>,
        R: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(left, right)| (left.into(), right.into()))
                .collect(),
        }
    }

    pub fn right_for(&self, left: &str) -> Option<&str> {
        self.pairs.get(left).map(String::as_str)
    }

    /// True when `pair` appears verbatim in the key.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.right_for(&pair.left) == Some(pair.right.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs
            .iter()
            .map(|(left, right)| Pair::new(left.clone(), right.clone()))
    }

    pub fn left_ids(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    /// Distinct right ids, in key order of first appearance.
    pub fn right_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for right in self.pairs.values() {
            if !ids.contains(&right.as_str()) {
                ids.push(right);
            }
        }
        ids
    }
}
