// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Polyline sampling of a piecewise cubic path

use super::Path;
use super::anchor::AnchorPoint;
use super::segment::Segment;
use kurbo::{ParamCurve, Point};

/// Something that can be flattened into a sequence of points
pub trait CurveSampler {
    /// Sample `samples_per_segment` evenly spaced parameter values on every
    /// segment. The returned iterator is lazy and can be cloned to restart.
    /// Its size hint is exact whenever the point count fits in a `usize`.
    fn sample(&self, samples_per_segment: usize) -> Samples<'_>;
}

impl CurveSampler for Path {
    fn sample(&self, samples_per_segment: usize) -> Samples<'_> {
        Samples::new(self.anchors(), samples_per_segment)
    }
}

/// Iterator over sampled points.
///
/// Yields the first anchor position, then for every segment the points at
/// `t = k / n` for `k` in `1..=n`, so segment endpoints appear once.
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    anchors: &'a [AnchorPoint],
    steps: usize,
    segment: usize,
    step: usize,
    started: bool,
}

impl<'a> Samples<'a> {
    fn new(anchors: &'a [AnchorPoint], samples_per_segment: usize) -> Self {
        Self {
            anchors,
            steps: samples_per_segment.max(1),
            segment: 0,
            step: 0,
            started: false,
        }
    }

    /// Points still to come, or `None` if the count does not fit in a `usize`
    fn remaining(&self) -> Option<usize> {
        let segments = self.anchors.len().saturating_sub(1);
        let head = usize::from(!self.started && !self.anchors.is_empty());
        let total = segments.checked_mul(self.steps)?;
        // segment * steps + step never exceeds total
        let done = self.segment * self.steps + self.step;
        (total - done).checked_add(head)
    }
}

impl Iterator for Samples<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.started {
            self.started = true;
            return self.anchors.first().map(|a| a.position);
        }
        if self.segment + 1 >= self.anchors.len() {
            return None;
        }

        let segment = Segment::between(
            self.segment,
            &self.anchors[self.segment],
            &self.anchors[self.segment + 1],
        );
        self.step += 1;
        let point = if self.step == self.steps {
            // Exact endpoint rather than eval(1.0) rounding
            segment.curve.p3
        } else {
            segment.curve.eval(self.step as f64 / self.steps as f64)
        };
        if self.step == self.steps {
            self.step = 0;
            self.segment += 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            // Collectors reserve the lower bound up front
            None => (0, None),
        }
    }
}
