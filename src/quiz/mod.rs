pub mod categorize;
pub mod choice;
pub mod matching;
pub mod number_line;

use rand::Rng;

use crate::config::QuizConfig;
use crate::view::{AnnouncementSink, ViewAdapter};
use categorize::{Categorization, SortingBoard, Zone};
use choice::{Highlights, Question, TrueFalse};
use matching::MatchingQuestion;
use number_line::{NumberLine, NumberLineBoard, Slot};

pub const ALL_ANSWERS_REVEALED: &str = "✅ All correct answers revealed!";

/// The questions of one page, each owning its own state.
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    pub matching: MatchingQuestion,
    pub categorization: Categorization,
    pub sorting: SortingBoard,
    pub number_line: NumberLine,
    pub line: NumberLineBoard,
    pub multiple_choice: Vec<Question>,
    pub multiple_select: Vec<Question>,
    pub true_false: Vec<TrueFalse>,
}

/// Expected layouts handed back by [`Quiz::show_all_answers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    pub zones: Vec<Zone>,
    pub slots: Vec<Slot>,
    /// Feedback for the categorization and number-line questions, in that order.
    pub feedback: [Feedback; 2],
    /// Multiple choice questions first, then multiple select.
    pub choices: Vec<Highlights>,
    /// Each true/false statement and the label of its correct button.
    pub true_false: Vec<(String, &'static str)>,
    pub message: &'static str,
}

impl Quiz {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            matching: MatchingQuestion::new(config.matching.clone()),
            categorization: config.drag_drop.clone(),
            sorting: SortingBoard::new(&config.drag_drop),
            number_line: config.number_line.clone(),
            line: NumberLineBoard::new(&config.number_line),
            multiple_choice: config.multiple_choice.clone(),
            multiple_select: config.multiple_select.clone(),
            true_false: config.true_false.clone(),
        }
    }

    /// Checks the drop zones, records the feedback and announces the result.
    pub fn grade_sorting<A: AnnouncementSink + ?Sized>(&mut self, sink: &mut A) -> bool {
        let correct = self.sorting.check(&self.categorization).all_correct;
        log::info!("Categorization graded: {}", correct);
        sink.announce(correct);
        correct
    }

    /// Checks the number line, records the feedback and announces the result.
    pub fn grade_number_line<A: AnnouncementSink + ?Sized>(&mut self, sink: &mut A) -> bool {
        let correct = self.line.check(&self.number_line).is_correct();
        log::info!("Number line graded: {}", correct);
        sink.announce(correct);
        correct
    }

    /// Empties every question: matches and lines, drop zones and the number line.
    pub fn reset_all<V, R>(&mut self, view: &mut V, rng: &mut R)
    where
        V: ViewAdapter + ?Sized,
        R: Rng + ?Sized,
    {
        self.matching.reset(view);
        self.sorting.reset(rng);
        self.line.reset(rng);
        log::info!("Quiz reset");
    }

    /// Reveals every question: matching in `view`, the boards in place, and the
    /// highlights of the choice questions in the returned sheet.
    pub fn show_all_answers<V: ViewAdapter + ?Sized>(&mut self, view: &mut V) -> AnswerSheet {
        self.matching.reveal_answer(view);
        self.sorting.reveal(&self.categorization);
        self.line.reveal(&self.number_line);

        let choices = self
            .multiple_choice
            .iter()
            .chain(self.multiple_select.iter())
            .map(Question::reveal)
            .collect();
        let true_false = self
            .true_false
            .iter()
            .map(|statement| (statement.text.clone(), statement.answer_label()))
            .collect();

        log::info!("Showing all correct answers");
        AnswerSheet {
            zones: self.sorting.zones.clone(),
            slots: self.line.slots.clone(),
            feedback: [Feedback::PlacementsShown, Feedback::PlacementShown],
            choices,
            true_false,
            message: ALL_ANSWERS_REVEALED,
        }
    }
}

/// What a question shows in its feedback area after a check or a reveal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Feedback {
    Correct,
    Incorrect,
    MatchesShown,
    AllCategorized,
    SomeMisplaced,
    PlacementsShown,
    NothingPlaced,
    NotAllPlaced { total: usize },
    AllPlaced,
    WrongPositions,
    PlacementShown,
}

impl Feedback {
    pub fn verdict(is_correct: bool) -> Self {
        if is_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        }
    }

    pub fn text(&self) -> String {
        match self {
            Feedback::Correct => "✅ Correct!".to_string(),
            Feedback::Incorrect => "❌ Incorrect.".to_string(),
            Feedback::MatchesShown => "✅ Correct matches shown.".to_string(),
            Feedback::AllCategorized => "✅ All correctly categorized!".to_string(),
            Feedback::SomeMisplaced => "❌ Some items are misplaced.".to_string(),
            Feedback::PlacementsShown => "✅ Correct placements shown.".to_string(),
            Feedback::NothingPlaced => "❌ Please place the numbers on the line first.".to_string(),
            Feedback::NotAllPlaced { total } => {
                format!("❌ Please place all {} numbers on the line.", total)
            }
            Feedback::AllPlaced => "✅ Perfect! All numbers are correctly placed.".to_string(),
            Feedback::WrongPositions => "❌ Some numbers are in the wrong positions.".to_string(),
            Feedback::PlacementShown => "✅ Correct placement shown.".to_string(),
        }
    }

    /// Whether the feedback is styled as correct.
    pub fn is_correct(&self) -> bool {
        matches!(
            self,
            Feedback::Correct
                | Feedback::MatchesShown
                | Feedback::AllCategorized
                | Feedback::PlacementsShown
                | Feedback::AllPlaced
                | Feedback::PlacementShown
        )
    }

    pub fn style_class(&self) -> &'static str {
        if self.is_correct() {
            "correct"
        } else {
            "incorrect"
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
