// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - owns the path, its undo history, and the pointer
//! gesture in progress

mod gesture;
mod hit_testing;

pub use gesture::{DragKind, Gesture, PendingAnchor};

use super::commands::EditCommand;
use super::shortcuts::Shortcut;
use super::undo::UndoState;
use crate::path::{AnchorPoint, Path};
use crate::settings::EditorSettings;

/// Editing session for a single path
///
/// The host routes raw input to `on_pointer_down`, `on_pointer_move`,
/// `on_pointer_up`, `on_key_undo` and `on_key_redo`, and redraws whenever
/// the path's change listener fires.
#[derive(Debug)]
pub struct EditSession {
    /// The path being edited
    path: Path,

    /// Command history
    undo: UndoState<EditCommand>,

    /// Hit radii and history limits
    settings: EditorSettings,

    /// Pointer gesture in progress
    gesture: Gesture,
}

impl EditSession {
    /// Create a session editing an empty path
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_path(Path::new(), settings)
    }

    /// Create a session editing existing geometry
    pub fn with_path(path: Path, settings: EditorSettings) -> Self {
        let undo = match settings.undo_limit {
            Some(depth) => UndoState::with_max_depth(depth),
            None => UndoState::new(),
        };
        Self {
            path,
            undo,
            settings,
            gesture: Gesture::Idle,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutable access for edits made outside the session.
    ///
    /// Such edits are not recorded in history. Writes through
    /// `Path::anchor_mut` must be followed by `Path::raise_changed`.
    pub fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    /// Install the observer notified after every path mutation
    pub fn set_change_listener(&mut self, listener: impl FnMut(&[AnchorPoint]) + 'static) {
        self.path.set_listener(listener);
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Undo the last edit
    pub fn on_key_undo(&mut self) -> bool {
        self.settle_gesture();
        let undone = self.undo.undo(&mut self.path);
        if undone {
            tracing::debug!("Undo: reverted last edit");
        }
        undone
    }

    /// Redo the last undone edit
    pub fn on_key_redo(&mut self) -> bool {
        self.settle_gesture();
        let redone = self.undo.redo(&mut self.path);
        if redone {
            tracing::debug!("Redo: re-applied edit");
        }
        redone
    }

    /// Dispatch a keyboard shortcut
    pub fn handle_shortcut(&mut self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::Undo => self.on_key_undo(),
            Shortcut::Redo => self.on_key_redo(),
        }
    }

    /// Run a command against the path and record it
    fn submit(&mut self, command: EditCommand) {
        tracing::debug!("Executing {}", command.label());
        self.undo.execute(command, &mut self.path);
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
