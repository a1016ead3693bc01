use log::warn;

use crate::view::{Segment, Side, ViewAdapter};

use super::{MatchSet, Pair};

/// Geometry of the connector for one pair, or `None` when either end is missing from the view.
pub fn segment_for<V: ViewAdapter + ?Sized>(view: &V, pair: &Pair) -> Option<Segment> {
    let left = view.resolve_item(&pair.left, Side::Left)?;
    let right = view.resolve_item(&pair.right, Side::Right)?;

    Some(Segment {
        from: view.anchor_point(&left)?,
        to: view.anchor_point(&right)?,
    })
}

/// Clears and redraws every connector. Returns how many were drawn.
///
/// Pairs whose items or anchors cannot be resolved are skipped.
pub fn redraw<V: ViewAdapter + ?Sized>(view: &mut V, matches: &MatchSet) -> usize {
    let mut segments = Vec::with_capacity(matches.len());
    for pair in matches.entries() {
        match segment_for(view, pair) {
            Some(segment) => segments.push(segment),
            None => warn!(
                "Could not find elements for match: {} -> {}",
                pair.left, pair.right
            ),
        }
    }

    view.render_lines(&segments);
    segments.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::matching::test_view::FakeView;
    use crate::view::Point;

    #[test]
    fn draws_from_left_anchor_to_right_anchor() {
        let mut view = FakeView::new(&["apple"], &["fruit"]);
        let mut matches = MatchSet::new();
        matches.upsert(Pair::new("apple", "fruit"));

        assert_eq!(redraw(&mut view, &matches), 1);
        assert_eq!(
            view.lines,
            vec![Segment {
                from: Point::new(100.0, 10.0),
                to: Point::new(200.0, 10.0),
            }]
        );
    }

    #[test]
    fn stale_ids_are_skipped_not_fatal() {
        let mut view = FakeView::new(&["apple", "carrot"], &["fruit", "vegetable"]);
        let mut matches = MatchSet::new();
        matches.upsert(Pair::new("apple", "fruit"));
        matches.upsert(Pair::new("ghost", "vegetable"));
        matches.upsert(Pair::new("carrot", "vegetable"));

        assert_eq!(redraw(&mut view, &matches), 2);
        assert_eq!(view.lines.len(), 2);
    }

    #[test]
    fn redraw_replaces_rather_than_appends() {
        let mut view = FakeView::new(&["apple"], &["fruit"]);
        let mut matches = MatchSet::new();
        matches.upsert(Pair::new("apple", "fruit"));

        redraw(&mut view, &matches);
        redraw(&mut view, &matches);
        assert_eq!(view.lines.len(), 1);

        matches.clear();
        redraw(&mut view, &matches);
        assert!(view.lines.is_empty());
    }
}
