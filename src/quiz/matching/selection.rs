use crate::view::Side;

use super::Pair;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Pending {
        id: String,
        side: Side,
    },
}

/// Result of feeding one activation into the selection machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The activated item is now the pending pick. `replaced` is the pick it displaced,
    /// if any (a reselection on the same side).
    Pending { replaced: Option<String> },
    /// A left and a right pick met; the machine is idle again.
    Paired(Pair),
}

#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Any activation is legal in any state.
    pub fn activate(&mut self, id: &str, side: Side) -> Transition {
        match std::mem::take(&mut self.state) {
            SelectionState::Pending {
                id: pending_id,
                side: pending_side,
            } if pending_side != side => {
                let pair = match side {
                    Side::Right => Pair::new(pending_id, id),
                    Side::Left => Pair::new(id, pending_id),
                };
                Transition::Paired(pair)
            }
            previous => {
                let replaced = match previous {
                    SelectionState::Pending { id, .. } => Some(id),
                    SelectionState::Idle => None,
                };
                self.state = SelectionState::Pending {
                    id: id.to_string(),
                    side,
                };
                Transition::Pending { replaced }
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }
}
