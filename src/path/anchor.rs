// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor points and their identifiers.
//!
//! Each `AnchorId` is taken from a global atomic counter and never reused
//! within a process, so commands and drag state can refer to an anchor by
//! id even after it has been removed and re-inserted by undo/redo.

use crate::settings;
use kurbo::{Point, Vec2};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity of an anchor within a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnchorId(u64);

static ANCHOR_COUNTER: AtomicU64 = AtomicU64::new(1);

impl AnchorId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        Self(ANCHOR_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "anchor#{}", self.0)
    }
}

/// Which of an anchor's two tangent handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Handle controlling the curve arriving at the anchor
    In,
    /// Handle controlling the curve leaving the anchor
    Out,
}

impl HandleSide {
    /// The handle on the other side of the anchor
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::In => HandleSide::Out,
            HandleSide::Out => HandleSide::In,
        }
    }
}

/// An on-curve point with two tangent handles.
///
/// Handles are stored as offsets from `position`, so moving the anchor
/// translates its handles with it. The two handles are independent
/// fields; keeping them mirrored is the edit session's job.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    pub id: AnchorId,
    pub position: Point,
    pub handle_in: Vec2,
    pub handle_out: Vec2,
    pub selected: bool,
}

impl AnchorPoint {
    /// Create an anchor with the default horizontal handle pair
    pub fn new(position: Point) -> Self {
        Self::with_handles(
            position,
            settings::handles::DEFAULT_IN,
            settings::handles::DEFAULT_OUT,
        )
    }

    /// Create an anchor with explicit handle offsets
    pub fn with_handles(position: Point, handle_in: Vec2, handle_out: Vec2) -> Self {
        Self {
            id: AnchorId::next(),
            position,
            handle_in,
            handle_out,
            selected: false,
        }
    }

    /// Create an anchor whose in handle is the negated out handle
    pub fn mirrored(position: Point, handle_out: Vec2) -> Self {
        Self::with_handles(position, -handle_out, handle_out)
    }

    /// In handle end in canvas coordinates
    pub fn handle_in_absolute(&self) -> Point {
        self.position + self.handle_in
    }

    /// Out handle end in canvas coordinates
    pub fn handle_out_absolute(&self) -> Point {
        self.position + self.handle_out
    }

    pub fn handle(&self, side: HandleSide) -> Vec2 {
        match side {
            HandleSide::In => self.handle_in,
            HandleSide::Out => self.handle_out,
        }
    }

    pub fn handle_absolute(&self, side: HandleSide) -> Point {
        self.position + self.handle(side)
    }

    pub fn set_handle(&mut self, side: HandleSide, offset: Vec2) {
        match side {
            HandleSide::In => self.handle_in = offset,
            HandleSide::Out => self.handle_out = offset,
        }
    }
}
