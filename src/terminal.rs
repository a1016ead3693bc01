//! Text front-end: a two-column board on stdout driven by typed commands.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::QuizConfig;
use crate::error::CommandError;
use crate::quiz::matching::AnswerKey;
use crate::quiz::number_line::Slot;
use crate::quiz::{Feedback, Quiz};
use crate::view::{
    announcement_text, AnnouncementSink, Item, Point, Rect, Segment, Side, ViewAdapter,
};

const ROW_HEIGHT: f64 = 2.0;
const COLUMN_WIDTH: f64 = 16.0;
const GUTTER: f64 = 12.0;

pub const HELP_TEXT: &str = "Commands:
  left <id> / right <id>        pick an item
  key <left|right> <id> <key>   press a key on an item (Enter, Space, ...)
  sort <item> <category>        drop an item into a category zone
  place <number> <position>     drop a number on a tick of the number line
  grade [sort|line]             check the matches, the zones or the number line
  reveal                        show the correct matches
  reset                         clear every question and shuffle
  answers                       show the answers of every question
  show                          print the board
  help                          print this text
  quit                          leave";

#[derive(Debug, Default)]
pub struct TerminalView {
    left: Vec<Item>,
    right: Vec<Item>,
    selected: HashSet<(Side, String)>,
    lines: Vec<Segment>,
    feedback: Option<(String, bool)>,
}

impl TerminalView {
    pub fn new(left: Vec<Item>, right: Vec<Item>) -> Self {
        Self {
            left,
            right,
            ..Default::default()
        }
    }

    /// One item per left id and per distinct right id, labelled by id.
    pub fn from_answer_key(key: &AnswerKey) -> Self {
        Self::new(
            key.left_ids()
                .map(|id| Item::new(id, Side::Left, id))
                .collect(),
            key.right_ids()
                .into_iter()
                .map(|id| Item::new(id, Side::Right, id))
                .collect(),
        )
    }

    pub fn shuffle_columns<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.left.shuffle(rng);
        self.right.shuffle(rng);
    }

    pub fn lines(&self) -> &[Segment] {
        &self.lines
    }

    pub fn feedback(&self) -> Option<(&str, bool)> {
        self.feedback
            .as_ref()
            .map(|(text, is_correct)| (text.as_str(), *is_correct))
    }

    fn column(&self, side: Side) -> &[Item] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn rect(&self, item: &Item) -> Option<Rect> {
        let row = self.column(item.side).iter().position(|i| i.id == item.id)?;
        let left = match item.side {
            Side::Left => 0.0,
            Side::Right => COLUMN_WIDTH + GUTTER,
        };
        Some(Rect::new(left, row as f64 * ROW_HEIGHT, COLUMN_WIDTH, ROW_HEIGHT))
    }

    /// Label of the right item the connector starting at `from` ends on.
    fn connected_label(&self, from: Point) -> Option<&str> {
        let segment = self.lines.iter().find(|segment| segment.from == from)?;
        self.right
            .iter()
            .find(|item| self.anchor_point(item) == Some(segment.to))
            .map(|item| item.label.as_str())
    }

    fn marked(&self, item: &Item) -> String {
        let mark = if self.is_pending(item) { '*' } else { ' ' };
        format!("{}{}", mark, item.label)
    }

    pub fn render(&self) -> String {
        let mut board = String::new();
        let rows = self.left.len().max(self.right.len());
        for row in 0..rows {
            let left = self.left.get(row);
            let link = left
                .and_then(|item| self.anchor_point(item))
                .and_then(|from| self.connected_label(from))
                .map(|label| format!("--> {}", label))
                .unwrap_or_default();
            let _ = writeln!(
                board,
                "{:<18}{:<20}{}",
                left.map(|item| self.marked(item)).unwrap_or_default(),
                link,
                self.right
                    .get(row)
                    .map(|item| self.marked(item))
                    .unwrap_or_default()
            );
        }
        if let Some((text, _)) = &self.feedback {
            let _ = writeln!(board, "{}", text);
        }
        board
    }
}

impl ViewAdapter for TerminalView {
    fn list_items(&self, side: Side) -> Vec<Item> {
        self.column(side).to_vec()
    }

    fn resolve_item(&self, id: &str, side: Side) -> Option<Item> {
        self.column(side).iter().find(|item| item.id == id).cloned()
    }

    fn set_selected(&mut self, item: &Item, selected: bool) {
        let key = (item.side, item.id.clone());
        if selected {
            self.selected.insert(key);
        } else {
            self.selected.remove(&key);
        }
    }

    fn is_pending(&self, item: &Item) -> bool {
        self.selected.contains(&(item.side, item.id.clone()))
    }

    fn anchor_point(&self, item: &Item) -> Option<Point> {
        self.rect(item)
            .map(|rect| rect.connection_anchor(item.side, Point::default()))
    }

    fn render_lines(&mut self, lines: &[Segment]) {
        self.lines = lines.to_vec();
    }

    fn set_feedback(&mut self, text: &str, is_correct: bool) {
        self.feedback = Some((text.to_string(), is_correct));
    }

    fn clear_feedback(&mut self) {
        self.feedback = None;
    }
}

#[derive(Debug, Default)]
struct LiveRegion {
    generation: u64,
    message: Option<&'static str>,
}

/// Screen-reader style live region. Each announcement is removed again after `ttl`,
/// unless a newer one replaced it first.
#[derive(Debug, Clone)]
pub struct TerminalAnnouncer {
    live: Arc<Mutex<LiveRegion>>,
    ttl: Duration,
}

impl TerminalAnnouncer {
    pub fn new(ttl: Duration) -> Self {
        Self {
            live: Arc::new(Mutex::new(LiveRegion::default())),
            ttl,
        }
    }

    pub fn current(&self) -> Option<&'static str> {
        self.live.lock().ok().and_then(|region| region.message)
    }
}

impl AnnouncementSink for TerminalAnnouncer {
    fn announce(&mut self, is_correct: bool) {
        let text = announcement_text(is_correct);
        let generation = match self.live.lock() {
            Ok(mut region) => {
                region.generation += 1;
                region.message = Some(text);
                region.generation
            }
            Err(_) => return,
        };
        info!("Announced: {}", text);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            debug!("No runtime to schedule removal of the announcement");
            return;
        };
        let live = Arc::clone(&self.live);
        let ttl = self.ttl;
        runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Ok(mut region) = live.lock() {
                if region.generation == generation {
                    region.message = None;
                }
            }
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pick(Side, String),
    Key { side: Side, id: String, key: String },
    Sort { item: String, category: String },
    Place { value: String, position: String },
    Grade,
    GradeSorting,
    GradeLine,
    Reveal,
    Reset,
    Answers,
    Show,
    Help,
    Quit,
}

fn key_name(key: &str) -> String {
    match key.to_ascii_lowercase().as_str() {
        "space" => " ".to_string(),
        "enter" | "return" => "Enter".to_string(),
        _ => key.to_string(),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let mut argument = |expected: &'static str| {
            words.next().ok_or_else(|| CommandError::MissingArgument {
                command: name.to_string(),
                expected,
            })
        };

        match name.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Command::Pick(Side::Left, argument("an item id")?.to_string())),
            "right" | "r" => Ok(Command::Pick(Side::Right, argument("an item id")?.to_string())),
            "key" => {
                let side_text = argument("a side")?;
                let side = Side::parse(side_text)
                    .ok_or_else(|| CommandError::InvalidSide(side_text.to_string()))?;
                let id = argument("an item id")?.to_string();
                let key = key_name(argument("a key name")?);
                Ok(Command::Key { side, id, key })
            }
            "sort" => {
                let item = argument("an item")?.to_string();
                let category = argument("a category")?.to_string();
                Ok(Command::Sort { item, category })
            }
            "place" => {
                let value = argument("a number")?.to_string();
                let position = argument("a position")?.to_string();
                Ok(Command::Place { value, position })
            }
            "grade" | "check" => match words.next() {
                None | Some("match") => Ok(Command::Grade),
                Some("sort") => Ok(Command::GradeSorting),
                Some("line") => Ok(Command::GradeLine),
                Some(other) => Err(CommandError::Unknown(format!("{} {}", name, other))),
            },
            "reveal" => Ok(Command::Reveal),
            "reset" => Ok(Command::Reset),
            "answers" => Ok(Command::Answers),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// One learner working through the page.
pub struct Session {
    quiz: Quiz,
    view: TerminalView,
    announcer: TerminalAnnouncer,
}

impl Session {
    pub fn new(config: &QuizConfig) -> Self {
        let mut view = TerminalView::from_answer_key(&config.matching);
        view.shuffle_columns(&mut rand::thread_rng());

        Self::with_view(config, view)
    }

    /// Same as [`Session::new`] but keeps the columns in the given order.
    pub fn with_view(config: &QuizConfig, view: TerminalView) -> Self {
        Self {
            quiz: Quiz::new(config),
            view,
            announcer: TerminalAnnouncer::new(config.announcement_ttl()),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn view(&self) -> &TerminalView {
        &self.view
    }

    pub fn announcer(&self) -> &TerminalAnnouncer {
        &self.announcer
    }

    fn board(&self) -> String {
        let mut board = self.view.render();

        let sorting = &self.quiz.sorting;
        for zone in &sorting.zones {
            let _ = writeln!(board, "{}: {}", zone.category, zone.items.join(", "));
        }
        let _ = writeln!(board, "to sort: {}", sorting.pool.join(", "));
        write_feedback(&mut board, sorting.feedback.as_ref());

        let line = &self.quiz.line;
        let _ = writeln!(board, "number line: {}", placements(&line.slots));
        let _ = writeln!(board, "to place: {}", line.collection.join(", "));
        write_feedback(&mut board, line.feedback.as_ref());

        if let Some(message) = self.announcer.current() {
            let _ = writeln!(board, "(announced: {})", message);
        }
        board
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        let matching = &mut self.quiz.matching;
        match command {
            Command::Sort { item, category } => {
                self.quiz.sorting.place(&item, &category);
            }
            Command::Place { value, position } => {
                self.quiz.line.place(&value, &position);
            }
            Command::GradeSorting => {
                self.quiz.grade_sorting(&mut self.announcer);
            }
            Command::GradeLine => {
                self.quiz.grade_number_line(&mut self.announcer);
            }
            Command::Pick(side, id) => {
                matching.activate(&mut self.view, &id, side);
            }
            Command::Key { side, id, key } => {
                matching.handle_key(&mut self.view, &id, side, &key);
            }
            Command::Grade => {
                matching.grade(&mut self.view, &mut self.announcer);
            }
            Command::Reveal => matching.reveal_answer(&mut self.view),
            Command::Reset => {
                let mut rng = rand::thread_rng();
                self.quiz.reset_all(&mut self.view, &mut rng);
                self.view.shuffle_columns(&mut rng);
            }
            Command::Answers => {
                let sheet = self.quiz.show_all_answers(&mut self.view);
                let mut text = format!("{}\n", sheet.message);
                for zone in &sheet.zones {
                    let _ = writeln!(text, "  {}: {}", zone.category, zone.items.join(", "));
                }
                let _ = writeln!(text, "  number line: {}", placements(&sheet.slots));
                for feedback in &sheet.feedback {
                    let _ = writeln!(text, "  {}", feedback);
                }
                for choice in &sheet.choices {
                    let correct: Vec<&str> = choice.correct_options().collect();
                    let _ = writeln!(text, "  {} {}", choice.question, correct.join(", "));
                }
                for (statement, label) in &sheet.true_false {
                    let _ = writeln!(text, "  {} {}", statement, label);
                }
                text.push_str(&self.board());
                return Outcome::Continue(text);
            }
            Command::Show => {}
            Command::Help => return Outcome::Continue(HELP_TEXT.to_string()),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue(self.board())
    }
}

/// `value@position` per tick, `_` for an empty one.
fn placements(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|slot| {
            let value = slot.value.as_deref().unwrap_or("_");
            format!("{}@{}", value, slot.position)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_feedback(board: &mut String, feedback: Option<&Feedback>) {
    if let Some(feedback) = feedback {
        let _ = writeln!(board, "[{}] {}", feedback.style_class(), feedback);
    }
}
