//! Drag-and-drop categorization: sort loose items into labelled zones.

use std::collections::BTreeMap;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::Feedback;

/// Expected items per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Categorization {
    pub expected: BTreeMap<String, Vec<String>>,
}

/// A drop zone as currently filled by the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub category: String,
    pub items: Vec<String>,
}

impl Zone {
    pub fn new(category: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            category: category.into(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizationReport {
    /// Per zone, in the order given: category and whether it holds exactly the expected items.
    pub zones: Vec<(String, bool)>,
    pub all_correct: bool,
}

impl CategorizationReport {
    pub fn feedback(&self) -> Feedback {
        if self.all_correct {
            Feedback::AllCategorized
        } else {
            Feedback::SomeMisplaced
        }
    }
}

impl Categorization {
    pub fn new(expected: BTreeMap<String, Vec<String>>) -> Self {
        Self { expected }
    }

    fn expected_sorted(&self, category: &str) -> Vec<&str> {
        let mut items: Vec<&str> = self
            .expected
            .get(category)
            .map(|items| items.iter().map(String::as_str).collect())
            .unwrap_or_default();
        items.sort_unstable();
        items
    }

    /// Judges each zone on its own. A category missing from the key expects no items.
    pub fn check(&self, zones: &[Zone]) -> CategorizationReport {
        let verdicts: Vec<(String, bool)> = zones
            .iter()
            .map(|zone| {
                let mut actual: Vec<&str> = zone.items.iter().map(String::as_str).collect();
                actual.sort_unstable();
                (
                    zone.category.clone(),
                    actual == self.expected_sorted(&zone.category),
                )
            })
            .collect();

        let all_correct = verdicts.iter().all(|(_, ok)| *ok);
        CategorizationReport {
            zones: verdicts,
            all_correct,
        }
    }

    /// The expected contents of the given zones, for showing the answer.
    pub fn answer_layout(&self, categories: &[&str]) -> Vec<Zone> {
        categories
            .iter()
            .map(|category| {
                Zone::new(
                    *category,
                    self.expected.get(*category).cloned().unwrap_or_default(),
                )
            })
            .collect()
    }
}

/// Empties every zone back into one shuffled pool.
pub fn return_to_pool<R: Rng + ?Sized>(zones: &mut [Zone], pool: &mut Vec<String>, rng: &mut R) {
    for zone in zones.iter_mut() {
        pool.append(&mut zone.items);
    }
    pool.shuffle(rng);
}

/// The learner's drop zones and the pool of items not sorted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingBoard {
    pub zones: Vec<Zone>,
    pub pool: Vec<String>,
    pub feedback: Option<Feedback>,
}

impl SortingBoard {
    /// One empty zone per category with every expected item in the pool.
    pub fn new(categorization: &Categorization) -> Self {
        Self {
            zones: categorization
                .expected
                .keys()
                .map(|category| Zone::new(category.as_str(), Vec::new()))
                .collect(),
            pool: categorization.expected.values().flatten().cloned().collect(),
            feedback: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.zones.iter().all(|zone| zone.items.is_empty())
    }

    /// Moves `item` from the pool or another zone into `category`. Returns false when
    /// either is unknown.
    pub fn place(&mut self, item: &str, category: &str) -> bool {
        let Some(target) = self.zones.iter().position(|z| z.category == category) else {
            warn!("No drop zone for category {}", category);
            return false;
        };

        if !take_item(&mut self.pool, item)
            && !self.zones.iter_mut().any(|zone| take_item(&mut zone.items, item))
        {
            warn!("No item {} to sort", item);
            return false;
        }

        self.zones[target].items.push(item.to_string());
        debug!("Moved item {} to {}", item, category);
        true
    }

    pub fn check(&mut self, categorization: &Categorization) -> CategorizationReport {
        let report = categorization.check(&self.zones);
        self.feedback = Some(report.feedback());
        report
    }

    pub fn reveal(&mut self, categorization: &Categorization) {
        let mut items = std::mem::take(&mut self.pool);
        for zone in self.zones.iter_mut() {
            items.append(&mut zone.items);
        }

        let layout = {
            let categories: Vec<&str> = self.zones.iter().map(|z| z.category.as_str()).collect();
            categorization.answer_layout(&categories)
        };
        self.zones = layout;
        self.pool = items
            .into_iter()
            .filter(|item| !self.zones.iter().any(|zone| zone.items.contains(item)))
            .collect();
        self.feedback = Some(Feedback::PlacementsShown);
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        return_to_pool(&mut self.zones, &mut self.pool, rng);
        self.feedback = None;
    }
}

fn take_item(items: &mut Vec<String>, item: &str) -> bool {
    match items.iter().position(|i| i == item) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
