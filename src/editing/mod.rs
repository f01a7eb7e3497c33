// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod commands;
pub mod mouse;
pub mod session;
pub mod shortcuts;
pub mod undo;

pub use commands::EditCommand;
pub use hit_test::{HitTarget, HitTestResult};
pub use mouse::Modifiers;
pub use session::{DragKind, EditSession, Gesture, PendingAnchor};
pub use shortcuts::Shortcut;
pub use undo::{Command, UndoState};
