// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable path model.
//!
//! A `Path` is an ordered list of `AnchorPoint`s; consecutive anchors are
//! joined by cubic segments. Every mutation that goes through the path's
//! own methods bumps a revision counter and notifies the change listener,
//! which is how a renderer learns it has to redraw. Writes made through
//! `anchor_mut` bypass the notification and must be followed by
//! `raise_changed`.

pub mod anchor;
pub mod sampler;
pub mod segment;

pub use anchor::{AnchorId, AnchorPoint, HandleSide};
pub use sampler::{CurveSampler, Samples};
pub use segment::Segment;

use kurbo::{BezPath, Point, Vec2};
use std::fmt;

/// Callback invoked after every mutation with the current anchor list
pub type ChangeListener = Box<dyn FnMut(&[AnchorPoint])>;

/// An open piecewise cubic bezier path
#[derive(Default)]
pub struct Path {
    anchors: Vec<AnchorPoint>,
    listener: Option<ChangeListener>,
    revision: u64,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from initial geometry
    pub fn from_anchors(anchors: Vec<AnchorPoint>) -> Self {
        Self {
            anchors,
            listener: None,
            revision: 0,
        }
    }

    /// Install the change listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl FnMut(&[AnchorPoint]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Number of change notifications fired so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: AnchorId) -> Option<&AnchorPoint> {
        self.anchors.iter().find(|a| a.id == id)
    }

    pub fn index_of(&self, id: AnchorId) -> Option<usize> {
        self.anchors.iter().position(|a| a.id == id)
    }

    /// Mutable access without a change notification.
    ///
    /// Call `raise_changed` once the edit is done.
    pub fn anchor_mut(&mut self, id: AnchorId) -> Option<&mut AnchorPoint> {
        self.anchors.iter_mut().find(|a| a.id == id)
    }

    /// Append an anchor to the end of the path
    pub fn add(&mut self, anchor: AnchorPoint) {
        self.anchors.push(anchor);
        self.raise_changed();
    }

    /// Insert an anchor before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. Callers clamp the index first.
    pub fn insert(&mut self, index: usize, anchor: AnchorPoint) {
        self.anchors.insert(index, anchor);
        self.raise_changed();
    }

    /// Remove the first anchor with the given id.
    ///
    /// Notifies even when nothing matched.
    pub fn remove(&mut self, id: AnchorId) -> Option<AnchorPoint> {
        let removed = self
            .index_of(id)
            .map(|index| self.anchors.remove(index));
        self.raise_changed();
        removed
    }

    pub fn clear(&mut self) {
        self.anchors.clear();
        self.raise_changed();
    }

    /// Fire the change notification without mutating anything
    pub fn raise_changed(&mut self) {
        self.revision += 1;
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.anchors);
        }
    }

    /// Edit one anchor in place and notify once.
    ///
    /// Returns false (and does not notify) if the id is unknown.
    pub fn modify(&mut self, id: AnchorId, edit: impl FnOnce(&mut AnchorPoint)) -> bool {
        let Some(anchor) = self.anchor_mut(id) else {
            return false;
        };
        edit(anchor);
        self.raise_changed();
        true
    }

    pub fn set_position(&mut self, id: AnchorId, position: Point) -> bool {
        self.modify(id, |a| a.position = position)
    }

    pub fn set_handle(&mut self, id: AnchorId, side: HandleSide, offset: Vec2) -> bool {
        self.modify(id, |a| a.set_handle(side, offset))
    }

    /// Mark only `id` as selected; notifies if any flag changed
    pub fn select_only(&mut self, id: AnchorId) {
        let mut changed = false;
        for anchor in &mut self.anchors {
            let selected = anchor.id == id;
            if anchor.selected != selected {
                anchor.selected = selected;
                changed = true;
            }
        }
        if changed {
            self.raise_changed();
        }
    }

    /// Deselect every anchor; notifies if any flag changed
    pub fn clear_selection(&mut self) {
        let mut changed = false;
        for anchor in self.anchors.iter_mut().filter(|a| a.selected) {
            anchor.selected = false;
            changed = true;
        }
        if changed {
            self.raise_changed();
        }
    }

    pub fn selected(&self) -> Option<&AnchorPoint> {
        self.anchors.iter().find(|a| a.selected)
    }

    /// Closest anchor position within `tolerance` (inclusive).
    ///
    /// Equal distances resolve to the anchor that comes first.
    pub fn closest_anchor(&self, point: Point, tolerance: f64) -> Option<&AnchorPoint> {
        let mut best: Option<(&AnchorPoint, f64)> = None;
        for anchor in &self.anchors {
            let dist = anchor.position.distance(point);
            if dist > tolerance {
                continue;
            }
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((anchor, dist));
            }
        }
        best.map(|(anchor, _)| anchor)
    }

    /// Iterate over the cubic segments between consecutive anchors
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.anchors
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Segment::between(index, &pair[0], &pair[1]))
    }

    /// Convert this path to a kurbo BezPath for rendering
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        if let Some(first) = self.anchors.first() {
            bez.move_to(first.position);
        }
        for segment in self.segments() {
            bez.curve_to(segment.curve.p1, segment.curve.p2, segment.curve.p3);
        }
        bez
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("anchors", &self.anchors)
            .field("revision", &self.revision)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn counting_path() -> (Path, Rc<Cell<usize>>) {
        let mut path = Path::new();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        path.set_listener(move |_| seen.set(seen.get() + 1));
        (path, count)
    }

    fn positions(path: &Path) -> Vec<Point> {
        path.anchors().iter().map(|a| a.position).collect()
    }

    #[test]
    fn add_appends_and_notifies() {
        let (mut path, count) = counting_path();
        path.add(AnchorPoint::new(Point::new(1.0, 0.0)));
        path.add(AnchorPoint::new(Point::new(2.0, 0.0)));

        assert_eq!(positions(&path), vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)]);
        assert_eq!(count.get(), 2);
        assert_eq!(path.revision(), 2);
    }

    #[test]
    fn insert_places_at_index() {
        let (mut path, count) = counting_path();
        path.add(AnchorPoint::new(Point::new(0.0, 0.0)));
        path.add(AnchorPoint::new(Point::new(2.0, 0.0)));
        path.insert(1, AnchorPoint::new(Point::new(1.0, 0.0)));
        path.insert(3, AnchorPoint::new(Point::new(3.0, 0.0)));

        assert_eq!(
            positions(&path),
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 0.0)
            ]
        );
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn remove_by_identity() {
        let (mut path, _) = counting_path();
        let a = AnchorPoint::new(Point::new(0.0, 0.0));
        // Same position, different identity
        let b = AnchorPoint::new(Point::new(0.0, 0.0));
        let b_id = b.id;
        path.add(a.clone());
        path.add(b);

        let removed = path.remove(b_id).unwrap();
        assert_eq!(removed.id, b_id);
        assert_eq!(path.len(), 1);
        assert_eq!(path.anchors()[0].id, a.id);
    }

    #[test]
    fn remove_missing_still_notifies() {
        let (mut path, count) = counting_path();
        path.add(AnchorPoint::new(Point::ZERO));
        assert!(path.remove(AnchorId::next()).is_none());
        assert_eq!(path.len(), 1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn clear_and_raise_changed_notify() {
        let (mut path, count) = counting_path();
        path.add(AnchorPoint::new(Point::ZERO));
        path.clear();
        path.raise_changed();
        assert!(path.is_empty());
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn listener_sees_post_mutation_state() {
        let mut path = Path::new();
        let lens = Rc::new(RefCell::new(Vec::new()));
        let seen = lens.clone();
        path.set_listener(move |anchors| seen.borrow_mut().push(anchors.len()));

        path.add(AnchorPoint::new(Point::ZERO));
        path.add(AnchorPoint::new(Point::ZERO));
        path.clear();
        assert_eq!(*lens.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn anchor_mut_does_not_notify() {
        let (mut path, count) = counting_path();
        let anchor = AnchorPoint::new(Point::ZERO);
        let id = anchor.id;
        path.add(anchor);

        path.anchor_mut(id).unwrap().position = Point::new(5.0, 5.0);
        assert_eq!(count.get(), 1);
        path.raise_changed();
        assert_eq!(count.get(), 2);
        assert_eq!(path.get(id).unwrap().position, Point::new(5.0, 5.0));
    }

    #[test]
    fn routed_writes_notify_once() {
        let (mut path, count) = counting_path();
        let anchor = AnchorPoint::new(Point::ZERO);
        let id = anchor.id;
        path.add(anchor);

        assert!(path.set_position(id, Point::new(1.0, 1.0)));
        assert!(path.set_handle(id, HandleSide::In, Vec2::new(0.0, -5.0)));
        assert!(!path.set_position(AnchorId::next(), Point::ZERO));
        assert_eq!(count.get(), 3);

        let anchor = path.get(id).unwrap();
        assert_eq!(anchor.position, Point::new(1.0, 1.0));
        assert_eq!(anchor.handle_in, Vec2::new(0.0, -5.0));
        assert_eq!(anchor.handle_out, Vec2::new(30.0, 0.0));
    }

    #[test]
    fn closest_anchor_respects_tolerance() {
        let mut path = Path::new();
        path.add(AnchorPoint::new(Point::new(0.0, 0.0)));
        path.add(AnchorPoint::new(Point::new(50.0, 0.0)));

        let hit = path.closest_anchor(Point::new(48.0, 0.0), 5.0).unwrap();
        assert_eq!(hit.position, Point::new(50.0, 0.0));
        assert!(path.closest_anchor(Point::new(25.0, 0.0), 5.0).is_none());
        // Boundary is inclusive
        assert!(path.closest_anchor(Point::new(55.0, 0.0), 5.0).is_some());
    }

    #[test]
    fn closest_anchor_tie_prefers_first() {
        let mut path = Path::new();
        let first = AnchorPoint::new(Point::new(-4.0, 0.0));
        let first_id = first.id;
        path.add(first);
        path.add(AnchorPoint::new(Point::new(4.0, 0.0)));

        let hit = path.closest_anchor(Point::ZERO, 10.0).unwrap();
        assert_eq!(hit.id, first_id);
    }

    #[test]
    fn selection_is_exclusive() {
        let (mut path, count) = counting_path();
        let a = AnchorPoint::new(Point::ZERO);
        let b = AnchorPoint::new(Point::new(10.0, 0.0));
        let (a_id, b_id) = (a.id, b.id);
        path.add(a);
        path.add(b);

        path.select_only(a_id);
        path.select_only(b_id);
        assert_eq!(path.selected().unwrap().id, b_id);
        assert!(!path.get(a_id).unwrap().selected);

        // Re-selecting the same anchor changes nothing
        let before = count.get();
        path.select_only(b_id);
        assert_eq!(count.get(), before);

        path.clear_selection();
        assert!(path.selected().is_none());
        path.clear_selection();
        assert_eq!(count.get(), before + 1);
    }

    #[test]
    fn bezpath_has_one_curve_per_segment() {
        let path = Path::from_anchors(vec![
            AnchorPoint::new(Point::new(0.0, 0.0)),
            AnchorPoint::new(Point::new(100.0, 0.0)),
            AnchorPoint::new(Point::new(200.0, 50.0)),
        ]);
        let elements: Vec<_> = path.to_bezpath().elements().to_vec();

        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            elements[1],
            PathEl::CurveTo(
                Point::new(30.0, 0.0),
                Point::new(70.0, 0.0),
                Point::new(100.0, 0.0)
            )
        );
        assert_eq!(path.segments().count(), 2);
    }

    #[test]
    fn empty_path_has_empty_bezpath() {
        let path = Path::new();
        assert!(path.to_bezpath().elements().is_empty());
        assert_eq!(path.segments().count(), 0);
    }
}
