// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Reversible path edits.
//!
//! Each variant holds plain old/new values plus the id of the anchor it
//! targets. Nothing here keeps a reference into the path, so a command
//! stays valid while its anchor is removed and restored by undo/redo.

use super::undo::Command;
use crate::path::{AnchorId, AnchorPoint, HandleSide, Path};
use kurbo::{Point, Vec2};

/// A single undoable edit of a `Path`
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Append `anchor` to the end of the path
    AddPoint { anchor: AnchorPoint },

    /// Insert `anchor` at `index`. Redo re-inserts at the same index.
    InsertPoint { index: usize, anchor: AnchorPoint },

    /// Set one handle of an anchor. The opposite handle is not touched.
    MoveHandle {
        id: AnchorId,
        side: HandleSide,
        old: Vec2,
        new: Vec2,
    },

    /// Set an anchor's position
    MovePoint { id: AnchorId, old: Point, new: Point },

    /// Several edits undone and redone as one step
    Group(Vec<EditCommand>),
}

impl EditCommand {
    /// Short name for logging
    pub fn label(&self) -> &'static str {
        match self {
            EditCommand::AddPoint { .. } => "add point",
            EditCommand::InsertPoint { .. } => "insert point",
            EditCommand::MoveHandle { .. } => "move handle",
            EditCommand::MovePoint { .. } => "move point",
            EditCommand::Group(_) => "group",
        }
    }
}

impl Command<Path> for EditCommand {
    fn apply(&self, path: &mut Path) {
        match self {
            EditCommand::AddPoint { anchor } => path.add(anchor.clone()),
            EditCommand::InsertPoint { index, anchor } => {
                // Edits made outside history can shorten the path before a redo
                path.insert((*index).min(path.len()), anchor.clone());
            }
            EditCommand::MoveHandle { id, side, new, .. } => {
                path.set_handle(*id, *side, *new);
            }
            EditCommand::MovePoint { id, new, .. } => {
                path.set_position(*id, *new);
            }
            EditCommand::Group(commands) => {
                for command in commands {
                    command.apply(path);
                }
            }
        }
    }

    fn revert(&self, path: &mut Path) {
        match self {
            EditCommand::AddPoint { anchor } | EditCommand::InsertPoint { anchor, .. } => {
                path.remove(anchor.id);
            }
            EditCommand::MoveHandle { id, side, old, .. } => {
                path.set_handle(*id, *side, *old);
            }
            EditCommand::MovePoint { id, old, .. } => {
                path.set_position(*id, *old);
            }
            EditCommand::Group(commands) => {
                for command in commands.iter().rev() {
                    command.revert(path);
                }
            }
        }
    }
}
