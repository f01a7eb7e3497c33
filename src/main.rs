// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezier Editor: replay gesture scripts against the editing core

fn main() -> anyhow::Result<()> {
    bezier_editor::run(std::env::args().skip(1))
}
