// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input types shared by the host and the edit session

use serde::Deserialize;

/// Keyboard modifiers held during a pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Alt breaks handle mirroring so the two tangents move independently
    pub fn independent_handles(&self) -> bool {
        self.alt
    }

    /// Ctrl on Windows/Linux, Cmd on macOS
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}
