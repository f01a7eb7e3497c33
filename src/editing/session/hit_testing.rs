// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing methods for EditSession

use super::EditSession;
use crate::editing::hit_test::{self, HitTestResult};
use crate::path::AnchorId;
use kurbo::Point;

impl EditSession {
    /// Hit test anchors, handles, and segment midpoints at `pos`
    /// using the session's configured radii
    pub fn hit_test(&self, pos: Point) -> Option<HitTestResult> {
        let result = hit_test::hit_test(&self.path, pos, &self.settings.hit);

        match result {
            Some(ref hit) => tracing::debug!(
                "[hit_test] ({}, {}) -> {:?} at distance {}",
                pos.x,
                pos.y,
                hit.target,
                hit.distance
            ),
            None => tracing::debug!("[hit_test] ({}, {}) -> no hit", pos.x, pos.y),
        }

        result
    }

    /// Anchor whose position is within the point radius of `pos`
    pub fn anchor_at(&self, pos: Point) -> Option<AnchorId> {
        self.path
            .closest_anchor(pos, self.settings.hit.point)
            .map(|anchor| anchor.id)
    }
}
