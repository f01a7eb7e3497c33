// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-based undo/redo.
//!
//! `UndoState` owns two stacks of reversible commands. Executing a new
//! command clears the redo stack, so history is strictly linear. Undo and
//! redo on an empty stack do nothing.

/// A reversible edit applied to some target
pub trait Command<T> {
    /// Perform the edit
    fn apply(&self, target: &mut T);

    /// Exactly invert `apply`
    fn revert(&self, target: &mut T);
}

/// Undo and redo stacks
#[derive(Debug, Clone)]
pub struct UndoState<C> {
    undo_stack: Vec<C>,
    redo_stack: Vec<C>,
    max_depth: Option<usize>,
}

impl<C> UndoState<C> {
    /// Create an empty history with no depth limit
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: None,
        }
    }

    /// Create an empty history that keeps at most `max_depth` undo entries
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth.max(1)),
            ..Self::new()
        }
    }

    /// Apply `command` to `target` and record it
    pub fn execute<T>(&mut self, command: C, target: &mut T)
    where
        C: Command<T>,
    {
        command.apply(target);
        self.push_undo(command);
        self.redo_stack.clear();
    }

    /// Revert the most recent command. Returns false if there was none.
    pub fn undo<T>(&mut self, target: &mut T) -> bool
    where
        C: Command<T>,
    {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        command.revert(target);
        self.redo_stack.push(command);
        true
    }

    /// Re-apply the most recently undone command. Returns false if there
    /// was none.
    pub fn redo<T>(&mut self, target: &mut T) -> bool
    where
        C: Command<T>,
    {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        command.apply(target);
        self.push_undo(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent undoable command
    pub fn last(&self) -> Option<&C> {
        self.undo_stack.last()
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, command: C) {
        self.undo_stack.push(command);
        if let Some(max) = self.max_depth
            && self.undo_stack.len() > max
        {
            let overflow = self.undo_stack.len() - max;
            self.undo_stack.drain(..overflow);
        }
    }
}

impl<C> Default for UndoState<C> {
    fn default() -> Self {
        Self::new()
    }
}
