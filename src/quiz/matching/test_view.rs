use std::collections::HashSet;

use crate::view::{AnnouncementSink, Item, Point, Rect, Segment, Side, ViewAdapter};

const ROW_HEIGHT: f64 = 20.0;

/// In-memory two-column view: left items at x 0..100, right items at x 200..300.
#[derive(Debug, Default)]
pub struct FakeView {
    pub left: Vec<Item>,
    pub right: Vec<Item>,
    pub selected: HashSet<(Side, String)>,
    pub lines: Vec<Segment>,
    pub feedback: Option<(String, bool)>,
}

impl FakeView {
    pub fn new(left: &[&str], right: &[&str]) -> Self {
        Self {
            left: left.iter().map(|id| Item::new(*id, Side::Left, *id)).collect(),
            right: right.iter().map(|id| Item::new(*id, Side::Right, *id)).collect(),
            ..Default::default()
        }
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.selected.iter().map(|(_, id)| id.as_str()).collect();
        ids.sort();
        ids
    }

    fn column(&self, side: Side) -> &[Item] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl ViewAdapter for FakeView {
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
        let row = self.column(item.side).iter().position(|i| i.id == item.id)?;
        let left = match item.side {
            Side::Left => 0.0,
            Side::Right => 200.0,
        };
        let rect = Rect::new(left, row as f64 * ROW_HEIGHT, 100.0, ROW_HEIGHT);
        Some(rect.connection_anchor(item.side, Point::default()))
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
pub struct FakeSink {
    pub announced: Vec<bool>,
}

impl AnnouncementSink for FakeSink {
    fn announce(&mut self, is_correct: bool) {
        self.announced.push(is_correct);
    }
}
