//! Matching questions: pair every item of the left column with one of the right column.
//!
//! [`MatchingQuestion`] owns the per-question state (pending pick and confirmed pairs)
//! and drives a [`ViewAdapter`] for highlights, connector lines and feedback.

mod answer_key;
mod grader;
mod lines;
mod match_set;
mod selection;

#[cfg(test)]
pub(crate) mod test_view;

pub use answer_key::AnswerKey;
pub use grader::grade;
pub use lines::{redraw, segment_for};
pub use match_set::MatchSet;
pub use selection::{SelectionMachine, SelectionState, Transition};

use log::{debug, info, warn};

use crate::quiz::Feedback;
use crate::view::{AnnouncementSink, Side, ViewAdapter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl Pair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.left, self.right)
    }
}

/// Keys that activate a focused item, alongside a pointer click.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Debug, Clone, Default)]
pub struct MatchingQuestion {
    key: AnswerKey,
    selection: SelectionMachine,
    matches: MatchSet,
}

impl MatchingQuestion {
    pub fn new(key: AnswerKey) -> Self {
        Self {
            key,
            selection: SelectionMachine::new(),
            matches: MatchSet::new(),
        }
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.key
    }

    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Handles a click on an item. Returns the pair it completed, if any.
    ///
    /// Ids the view cannot resolve are ignored.
    pub fn activate<V: ViewAdapter + ?Sized>(
        &mut self,
        view: &mut V,
        id: &str,
        side: Side,
    ) -> Option<Pair> {
        let Some(item) = view.resolve_item(id, side) else {
            warn!("No {} item with id {:?}", side, id);
            return None;
        };

        match self.selection.activate(&item.id, item.side) {
            Transition::Pending { replaced } => {
                clear_highlights(view);
                view.set_selected(&item, true);
                match replaced {
                    Some(previous) => debug!("Reselected {} in place of {}", item.id, previous),
                    None => debug!("Selected {} ({})", item.id, item.side),
                }
                None
            }
            Transition::Paired(pair) => {
                debug!("Matched {}", pair);
                self.matches.upsert(pair.clone());
                clear_highlights(view);
                redraw(view, &self.matches);
                Some(pair)
            }
        }
    }

    /// Keyboard counterpart of [`activate`](Self::activate); keys other than Enter and
    /// Space are ignored.
    pub fn handle_key<V: ViewAdapter + ?Sized>(
        &mut self,
        view: &mut V,
        id: &str,
        side: Side,
        key: &str,
    ) -> Option<Pair> {
        if !is_activation_key(key) {
            return None;
        }
        self.activate(view, id, side)
    }

    pub fn grade<V, A>(&self, view: &mut V, sink: &mut A) -> bool
    where
        V: ViewAdapter + ?Sized,
        A: AnnouncementSink + ?Sized,
    {
        let is_correct = grade(&self.matches, &self.key);
        info!(
            "Graded {} of {} pairs: {}",
            self.matches.len(),
            self.key.len(),
            if is_correct { "correct" } else { "incorrect" }
        );

        let feedback = Feedback::verdict(is_correct);
        view.set_feedback(&feedback.text(), feedback.is_correct());
        sink.announce(is_correct);
        is_correct
    }

    /// Replaces the learner's pairs with the answer key and draws them.
    pub fn reveal_answer<V: ViewAdapter + ?Sized>(&mut self, view: &mut V) {
        self.matches = MatchSet::from_answer_key(&self.key);
        redraw(view, &self.matches);

        let feedback = Feedback::MatchesShown;
        view.set_feedback(&feedback.text(), feedback.is_correct());
        info!("Revealed {} matches", self.matches.len());
    }

    /// Clears pairs, pending pick, highlights, lines and feedback.
    pub fn reset<V: ViewAdapter + ?Sized>(&mut self, view: &mut V) {
        clear_highlights(view);
        self.matches.clear();
        self.selection.reset();
        redraw(view, &self.matches);
        view.clear_feedback();
        info!("Matching question reset");
    }

    /// Redraws connectors, e.g. after the layout moved.
    pub fn redraw<V: ViewAdapter + ?Sized>(&self, view: &mut V) -> usize {
        redraw(view, &self.matches)
    }
}

fn clear_highlights<V: ViewAdapter + ?Sized>(view: &mut V) {
    for side in [Side::Left, Side::Right] {
        for item in view.list_items(side) {
            if view.is_pending(&item) {
                view.set_selected(&item, false);
            }
        }
    }
}
