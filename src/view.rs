//! Seams between the quiz engine and whatever presents it.
//!
//! The engine never touches a rendered tree directly. It asks a [`ViewAdapter`] to
//! enumerate, resolve, highlight and measure items, and hands it finished line
//! geometry and feedback text. Results are also pushed to an [`AnnouncementSink`]
//! for assistive technology.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Side::Left),
            "right" | "r" => Some(Side::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A selectable entry in one of the two matching columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: String,
    pub side: Side,
    pub label: String,
}

impl Item {
    pub fn new(id: impl Into<String>, side: Side, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            side,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One connector, from the left item's anchor to the right item's anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Axis-aligned bounds of a rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Midpoint of the edge facing the other column, relative to `origin`.
    ///
    /// Left items connect on their right edge, right items on their left edge.
    pub fn connection_anchor(&self, side: Side, origin: Point) -> Point {
        let x = match side {
            Side::Left => self.right(),
            Side::Right => self.left,
        };
        Point::new(x - origin.x, self.top + self.height / 2.0 - origin.y)
    }
}

pub trait ViewAdapter {
    /// Items of one column in the order they are currently rendered.
    fn list_items(&self, side: Side) -> Vec<Item>;

    fn resolve_item(&self, id: &str, side: Side) -> Option<Item>;

    /// Toggles the pressed/selected indicator of an item.
    fn set_selected(&mut self, item: &Item, selected: bool);

    fn is_pending(&self, item: &Item) -> bool;

    fn anchor_point(&self, item: &Item) -> Option<Point>;

    /// Replaces every connector currently drawn.
    fn render_lines(&mut self, lines: &[Segment]);

    fn set_feedback(&mut self, text: &str, is_correct: bool);

    fn clear_feedback(&mut self);
}

/// Receives the outcome of a grade for assistive announcement. Fire and forget.
pub trait AnnouncementSink {
    fn announce(&mut self, is_correct: bool);
}

pub fn announcement_text(is_correct: bool) -> &'static str {
    if is_correct {
        "Correct answer"
    } else {
        "Incorrect answer"
    }
}
