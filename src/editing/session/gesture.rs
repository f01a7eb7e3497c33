// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer gesture handling for EditSession - dragging anchors and
//! handles, creating anchors, and inserting on segments.
//!
//! Drags edit the path live for visual feedback and only push a command
//! when the pointer is released, built from the value captured at
//! pointer-down and the value the drag left behind.

use super::EditSession;
use crate::editing::commands::EditCommand;
use crate::editing::hit_test::HitTarget;
use crate::editing::mouse::Modifiers;
use crate::path::{AnchorId, AnchorPoint, HandleSide};
use kurbo::{CubicBez, Point, Vec2};

/// What an anchor drag moves, with the value it had before the drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragKind {
    Point {
        original: Point,
    },
    Handle {
        side: HandleSide,
        original: Vec2,
        /// Pre-drag value of the opposite handle, which mirroring may change
        opposite: Vec2,
    },
}

/// Pointer gesture state machine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Dragging an existing anchor or one of its handles
    DraggingAnchor { id: AnchorId, kind: DragKind },
    /// Pressed on empty canvas; dragging sets the new anchor's handles
    CreatingPoint { press: Point, handle: Vec2 },
}

/// The anchor a creation gesture would add if released now
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingAnchor {
    pub position: Point,
    pub handle_in: Vec2,
    pub handle_out: Vec2,
}

impl EditSession {
    /// Handle primary button press
    pub fn on_pointer_down(&mut self, pos: Point) {
        self.settle_gesture();

        let hit = self.hit_test(pos);
        match hit.map(|h| h.target) {
            Some(HitTarget::Anchor(id)) => self.begin_drag(id, None),
            Some(HitTarget::Handle(id, side)) => self.begin_drag(id, Some(side)),
            Some(HitTarget::Segment(index)) => self.insert_on_segment(index, pos),
            None => {
                self.path.clear_selection();
                self.gesture = Gesture::CreatingPoint {
                    press: pos,
                    handle: Vec2::ZERO,
                };
                tracing::debug!("Creating point at ({}, {})", pos.x, pos.y);
            }
        }
    }

    /// Handle pointer motion
    ///
    /// Anchor drags only follow the pointer while the primary button is
    /// held. Handle drags mirror the opposite handle unless the modifiers
    /// ask for independent handles.
    pub fn on_pointer_move(&mut self, pos: Point, primary_held: bool, mods: Modifiers) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::CreatingPoint { press, .. } => {
                self.gesture = Gesture::CreatingPoint {
                    press,
                    handle: pos - press,
                };
            }
            Gesture::DraggingAnchor { id, kind } => {
                if !primary_held {
                    return;
                }
                match kind {
                    DragKind::Point { .. } => {
                        self.path.set_position(id, pos);
                    }
                    DragKind::Handle { side, .. } => {
                        let mirror = !mods.independent_handles();
                        self.path.modify(id, |anchor| {
                            let offset = pos - anchor.position;
                            anchor.set_handle(side, offset);
                            if mirror {
                                anchor.set_handle(side.opposite(), -offset);
                            }
                        });
                    }
                }
            }
        }
    }

    /// Handle primary button release
    pub fn on_pointer_up(&mut self, pos: Point) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {
                tracing::debug!("Pointer up at ({}, {}) with no gesture", pos.x, pos.y);
            }
            Gesture::CreatingPoint { press, handle } => {
                let anchor = AnchorPoint::mirrored(press, handle);
                self.submit(EditCommand::AddPoint { anchor });
            }
            Gesture::DraggingAnchor { id, kind } => self.commit_drag(id, kind),
        }
    }

    /// The anchor being created, for preview drawing
    pub fn pending_anchor(&self) -> Option<PendingAnchor> {
        match self.gesture {
            Gesture::CreatingPoint { press, handle } => Some(PendingAnchor {
                position: press,
                handle_in: -handle,
                handle_out: handle,
            }),
            _ => None,
        }
    }

    /// Curve from the last anchor to the pending anchor, for preview drawing
    pub fn preview_segment(&self) -> Option<CubicBez> {
        let pending = self.pending_anchor()?;
        let last = self.path.anchors().last()?;
        Some(CubicBez::new(
            last.position,
            last.handle_out_absolute(),
            pending.position + pending.handle_in,
            pending.position,
        ))
    }

    /// Finish a gesture that never saw its pointer-up.
    ///
    /// A drag has already edited the path, so it is committed to keep
    /// history in step with the model. A creation never touched the path
    /// and is dropped.
    pub(super) fn settle_gesture(&mut self) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {}
            Gesture::DraggingAnchor { id, kind } => {
                tracing::warn!("Drag of {} ended without pointer up; committing", id);
                self.commit_drag(id, kind);
            }
            Gesture::CreatingPoint { press, .. } => {
                tracing::warn!(
                    "Point creation at ({}, {}) ended without pointer up; discarding",
                    press.x,
                    press.y
                );
            }
        }
    }

    // ===== PRIVATE HELPERS =====

    fn begin_drag(&mut self, id: AnchorId, side: Option<HandleSide>) {
        let Some(anchor) = self.path.get(id) else {
            return;
        };
        let kind = match side {
            None => DragKind::Point {
                original: anchor.position,
            },
            Some(side) => DragKind::Handle {
                side,
                original: anchor.handle(side),
                opposite: anchor.handle(side.opposite()),
            },
        };
        tracing::debug!("Begin drag of {}: {:?}", id, kind);
        self.gesture = Gesture::DraggingAnchor { id, kind };
        self.path.select_only(id);
    }

    fn insert_on_segment(&mut self, segment_index: usize, pos: Point) {
        let index = (segment_index + 1).min(self.path.len());
        tracing::debug!("Inserting point on segment {} at index {}", segment_index, index);
        self.submit(EditCommand::InsertPoint {
            index,
            anchor: AnchorPoint::new(pos),
        });
    }

    fn commit_drag(&mut self, id: AnchorId, kind: DragKind) {
        let Some(anchor) = self.path.get(id) else {
            tracing::warn!("Dragged {} is no longer in the path", id);
            return;
        };
        let command = match kind {
            DragKind::Point { original } => EditCommand::MovePoint {
                id,
                old: original,
                new: anchor.position,
            },
            DragKind::Handle {
                side,
                original,
                opposite,
            } => {
                let moved = EditCommand::MoveHandle {
                    id,
                    side,
                    old: original,
                    new: anchor.handle(side),
                };
                let opposite_now = anchor.handle(side.opposite());
                if opposite_now == opposite {
                    moved
                } else {
                    EditCommand::Group(vec![
                        moved,
                        EditCommand::MoveHandle {
                            id,
                            side: side.opposite(),
                            old: opposite,
                            new: opposite_now,
                        },
                    ])
                }
            }
        };
        self.submit(command);
    }
}
