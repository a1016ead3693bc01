//! Number-line placement: drop each number onto its tick.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::Feedback;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLine {
    /// Number value → position it belongs at.
    pub correct_positions: BTreeMap<String, String>,
}

/// One tick on the line and the number currently dropped on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub position: String,
    pub value: Option<String>,
}

impl Slot {
    pub fn empty(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            value: None,
        }
    }

    pub fn holding(position: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLineReport {
    /// Occupied slots only: position and whether its number belongs there.
    pub slots: Vec<(String, bool)>,
    pub placed: usize,
    pub total: usize,
}

impl NumberLineReport {
    pub fn is_correct(&self) -> bool {
        self.placed == self.total && self.slots.iter().all(|(_, ok)| *ok)
    }

    pub fn feedback(&self) -> Feedback {
        if self.placed == 0 {
            Feedback::NothingPlaced
        } else if self.placed < self.total {
            Feedback::NotAllPlaced { total: self.total }
        } else if self.is_correct() {
            Feedback::AllPlaced
        } else {
            Feedback::WrongPositions
        }
    }
}

impl NumberLine {
    pub fn new(correct_positions: BTreeMap<String, String>) -> Self {
        Self { correct_positions }
    }

    pub fn check(&self, slots: &[Slot]) -> NumberLineReport {
        let verdicts: Vec<(String, bool)> = slots
            .iter()
            .filter_map(|slot| {
                let value = slot.value.as_deref()?;
                let ok = self.correct_positions.get(value) == Some(&slot.position);
                debug!(
                    "{} {} at position {}",
                    if ok { "Correct:" } else { "Incorrect:" },
                    value,
                    slot.position
                );
                Some((slot.position.clone(), ok))
            })
            .collect();

        NumberLineReport {
            placed: verdicts.len(),
            slots: verdicts,
            total: self.correct_positions.len(),
        }
    }

    /// Distinct target positions, left to right along the line.
    pub fn ticks(&self) -> Vec<&str> {
        let mut ticks: Vec<&str> = self.correct_positions.values().map(String::as_str).collect();
        ticks.sort_by(|a, b| compare_positions(a, b));
        ticks.dedup();
        ticks
    }

    /// Every given tick filled with the number that belongs there, if any.
    pub fn answer_layout(&self, positions: &[&str]) -> Vec<Slot> {
        positions
            .iter()
            .map(|position| Slot {
                position: position.to_string(),
                value: self
                    .correct_positions
                    .iter()
                    .find(|(_, target)| target.as_str() == *position)
                    .map(|(value, _)| value.clone()),
            })
            .collect()
    }
}

/// Numeric order; positions that are not numbers go last, by text.
fn compare_positions(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// The learner's number line: ticks with whatever was dropped on them, and the
/// collection of numbers not placed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberLineBoard {
    pub slots: Vec<Slot>,
    pub collection: Vec<String>,
    pub feedback: Option<Feedback>,
}

impl NumberLineBoard {
    pub fn new(line: &NumberLine) -> Self {
        Self {
            slots: line.ticks().into_iter().map(Slot::empty).collect(),
            collection: line.correct_positions.keys().cloned().collect(),
            feedback: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.value.is_none())
    }

    /// Drops `value` on the tick at `position`. A number already there goes back to the
    /// collection. Returns false when the tick or the number is unknown.
    pub fn place(&mut self, value: &str, position: &str) -> bool {
        let Some(target) = self.slots.iter().position(|slot| slot.position == position) else {
            warn!("No tick at position {}", position);
            return false;
        };

        if let Some(index) = self.collection.iter().position(|v| v == value) {
            self.collection.remove(index);
        } else if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.value.as_deref() == Some(value))
        {
            slot.value = None;
        } else {
            warn!("No number {} to place", value);
            return false;
        }

        if let Some(previous) = self.slots[target].value.replace(value.to_string()) {
            self.collection.push(previous);
        }
        debug!("Placed {} at position {}", value, position);
        true
    }

    pub fn check(&mut self, line: &NumberLine) -> NumberLineReport {
        let report = line.check(&self.slots);
        self.feedback = Some(report.feedback());
        report
    }

    pub fn reveal(&mut self, line: &NumberLine) {
        let mut numbers: Vec<String> = std::mem::take(&mut self.collection);
        numbers.extend(self.slots.iter_mut().filter_map(|slot| slot.value.take()));

        let layout = {
            let positions: Vec<&str> = self.slots.iter().map(|s| s.position.as_str()).collect();
            line.answer_layout(&positions)
        };
        self.slots = layout;
        self.collection = numbers
            .into_iter()
            .filter(|n| !self.slots.iter().any(|slot| slot.value.as_ref() == Some(n)))
            .collect();
        self.feedback = Some(Feedback::PlacementShown);
    }

    /// Every placed number goes back to the collection, which is then shuffled.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in self.slots.iter_mut() {
            if let Some(value) = slot.value.take() {
                self.collection.push(value);
            }
        }
        self.collection.shuffle(rng);
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line() -> NumberLine {
        NumberLine::new(
            ["-5", "-2", "0", "1", "4"]
                .iter()
                .map(|v| (v.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn ticks() -> Vec<Slot> {
        ["-5", "-2", "0", "1", "4"].iter().map(|p| Slot::empty(*p)).collect()
    }

    #[test]
    fn empty_line_asks_for_placements() {
        let report = line().check(&ticks());

        assert_eq!(report.feedback(), Feedback::NothingPlaced);
        assert!(!report.is_correct());
    }

    #[test]
    fn partial_line_names_the_total() {
        let mut slots = ticks();
        slots[0].value = Some("-5".to_string());

        let report = line().check(&slots);
        assert_eq!(report.placed, 1);
        assert_eq!(
            report.feedback().text(),
            "❌ Please place all 5 numbers on the line."
        );
    }

    #[test]
    fn swapped_numbers_are_wrong_positions() {
        let mut slots = line().answer_layout(&["-5", "-2", "0", "1", "4"]);
        slots[3].value = Some("4".to_string());
        slots[4].value = Some("1".to_string());

        let report = line().check(&slots);
        assert_eq!(report.feedback(), Feedback::WrongPositions);
        assert_eq!(report.slots[3], ("1".to_string(), false));
        assert_eq!(report.slots[0], ("-5".to_string(), true));
    }

    #[test]
    fn revealed_layout_is_perfect() {
        let layout = line().answer_layout(&["4", "1", "0", "-2", "-5"]);

        assert_eq!(layout[0], Slot::holding("4", "4"));
        let report = line().check(&layout);
        assert!(report.is_correct());
        assert_eq!(report.feedback(), Feedback::AllPlaced);
    }

    #[test]
    fn ticks_run_in_numeric_order() {
        assert_eq!(line().ticks(), vec!["-5", "-2", "0", "1", "4"]);

        let mixed = NumberLine::new(BTreeMap::from([
            ("ten".to_string(), "10".to_string()),
            ("half".to_string(), "0.5".to_string()),
            ("pi".to_string(), "pi".to_string()),
            ("neg".to_string(), "-10".to_string()),
        ]));
        assert_eq!(mixed.ticks(), vec!["-10", "0.5", "10", "pi"]);
    }

    #[test]
    fn placing_on_an_occupied_tick_returns_the_old_number() {
        let mut board = NumberLineBoard::new(&line());

        assert!(board.place("1", "4"));
        assert!(board.place("4", "4"));
        assert_eq!(board.slots[4], Slot::holding("4", "4"));
        assert!(board.collection.contains(&"1".to_string()));

        assert!(board.place("4", "1"));
        assert_eq!(board.slots[4], Slot::empty("4"));
        assert_eq!(board.slots[3], Slot::holding("1", "4"));

        assert!(!board.place("7", "0"));
        assert!(!board.place("0", "3"));
    }

    #[test]
    fn board_check_records_feedback() {
        let mut board = NumberLineBoard::new(&line());
        board.place("0", "0");

        assert!(!board.check(&line()).is_correct());
        assert_eq!(board.feedback, Some(Feedback::NotAllPlaced { total: 5 }));

        board.reveal(&line());
        assert!(board.collection.is_empty());
        assert!(board.check(&line()).is_correct());
    }

    #[test]
    fn reset_returns_every_number_to_the_collection() {
        let mut board = NumberLineBoard::new(&line());
        board.reveal(&line());

        board.reset(&mut StdRng::seed_from_u64(3));

        assert!(board.is_empty());
        assert_eq!(board.feedback, None);
        let mut collection = board.collection.clone();
        collection.sort();
        assert_eq!(collection, vec!["-2", "-5", "0", "1", "4"]);
    }

    #[test]
    fn deserializes_camel_case() {
        let parsed: NumberLine =
            serde_json::from_str(r#"{"correctPositions": {"0": "0"}}"#).unwrap();

        assert_eq!(parsed.correct_positions.get("0").map(String::as_str), Some("0"));
    }
}
