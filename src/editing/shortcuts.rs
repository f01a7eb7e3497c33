// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Default keyboard bindings for history navigation

use super::mouse::Modifiers;

/// Editor action triggered from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    /// Map a key press to an action.
    ///
    /// Cmd/Ctrl+Z undoes; Cmd/Ctrl+Y and Cmd/Ctrl+Shift+Z redo.
    pub fn from_key(key: &str, mods: Modifiers) -> Option<Self> {
        if !mods.command() {
            return None;
        }
        match key {
            "z" | "Z" if mods.shift => Some(Shortcut::Redo),
            "z" | "Z" => Some(Shortcut::Undo),
            "y" | "Y" => Some(Shortcut::Redo),
            _ => None,
        }
    }
}
