// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Cubic segments between consecutive anchors

use super::anchor::{AnchorId, AnchorPoint};
use kurbo::{CubicBez, Point};

/// The cubic curve joining anchor `index` to anchor `index + 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Index of the start anchor in the path
    pub index: usize,
    pub start: AnchorId,
    pub end: AnchorId,
    /// Control points: start position, start out handle, end in handle,
    /// end position
    pub curve: CubicBez,
}

impl Segment {
    pub fn between(index: usize, start: &AnchorPoint, end: &AnchorPoint) -> Self {
        Self {
            index,
            start: start.id,
            end: end.id,
            curve: CubicBez::new(
                start.position,
                start.handle_out_absolute(),
                end.handle_in_absolute(),
                end.position,
            ),
        }
    }

    /// Midpoint of the two anchor positions (not a point on the curve)
    pub fn anchor_midpoint(&self) -> Point {
        self.curve.p0.midpoint(self.curve.p3)
    }
}
