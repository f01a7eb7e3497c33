// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Scripted gesture replay.
//!
//! A script is a JSON array of pointer and keyboard events:
//!
//! ```json
//! [
//!   { "event": "down", "x": 0, "y": 0 },
//!   { "event": "move", "x": 40, "y": 10 },
//!   { "event": "up", "x": 40, "y": 10 },
//!   { "event": "key", "key": "z", "modifiers": { "ctrl": true } }
//! ]
//! ```
//!
//! Replaying drives an `EditSession` exactly as a host would, and the
//! resulting path can be summarised as a `ReplayReport`.

use crate::editing::{EditSession, Modifiers, Shortcut};
use crate::path::{AnchorPoint, CurveSampler};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a script
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read script {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed gesture script")]
    Parse(#[from] serde_json::Error),
}

/// One recorded input event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default = "primary_held")]
        primary: bool,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Up {
        x: f64,
        y: f64,
    },
    Undo,
    Redo,
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

fn primary_held() -> bool {
    true
}

/// Parse a script from JSON text
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, ReplayError> {
    Ok(serde_json::from_str(text)?)
}

/// Load a script from a JSON file
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ScriptEvent>, ReplayError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}

/// Feed every event to the session in order
pub fn replay(session: &mut EditSession, events: &[ScriptEvent]) {
    for event in events {
        match event {
            ScriptEvent::Down { x, y } => session.on_pointer_down(Point::new(*x, *y)),
            ScriptEvent::Move {
                x,
                y,
                primary,
                modifiers,
            } => session.on_pointer_move(Point::new(*x, *y), *primary, *modifiers),
            ScriptEvent::Up { x, y } => session.on_pointer_up(Point::new(*x, *y)),
            ScriptEvent::Undo => {
                session.on_key_undo();
            }
            ScriptEvent::Redo => {
                session.on_key_redo();
            }
            ScriptEvent::Key { key, modifiers } => match Shortcut::from_key(key, *modifiers) {
                Some(shortcut) => {
                    session.handle_shortcut(shortcut);
                }
                None => tracing::debug!("Ignoring unbound key {:?}", key),
            },
        }
    }
    tracing::info!(
        "Replayed {} events, path has {} anchors",
        events.len(),
        session.path().len()
    );
}

/// Serializable view of one anchor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorSummary {
    pub position: [f64; 2],
    pub handle_in: [f64; 2],
    pub handle_out: [f64; 2],
    pub selected: bool,
}

impl From<&AnchorPoint> for AnchorSummary {
    fn from(anchor: &AnchorPoint) -> Self {
        Self {
            position: point_pair(anchor.position),
            handle_in: vec_pair(anchor.handle_in),
            handle_out: vec_pair(anchor.handle_out),
            selected: anchor.selected,
        }
    }
}

/// Snapshot of a session after replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub anchors: Vec<AnchorSummary>,
    /// SVG path data of the whole curve
    pub svg: String,
    /// Flattened polyline
    pub samples: Vec<[f64; 2]>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl ReplayReport {
    pub fn from_session(session: &EditSession, samples_per_segment: usize) -> Self {
        let path = session.path();
        Self {
            anchors: path.anchors().iter().map(AnchorSummary::from).collect(),
            svg: path.to_bezpath().to_svg(),
            samples: path.sample(samples_per_segment).map(point_pair).collect(),
            can_undo: session.can_undo(),
            can_redo: session.can_redo(),
        }
    }
}

fn point_pair(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn vec_pair(v: Vec2) -> [f64; 2] {
    [v.x, v.y]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"[
        { "event": "down", "x": 0, "y": 0 },
        { "event": "up", "x": 0, "y": 0 },
        { "event": "down", "x": 100, "y": 0 },
        { "event": "move", "x": 130, "y": 0 },
        { "event": "up", "x": 130, "y": 0 },
        { "event": "down", "x": 50, "y": 0 },
        { "event": "up", "x": 50, "y": 0 }
    ]"#;

    #[test]
    fn parses_all_event_kinds() {
        let events = parse_script(
            r#"[
                { "event": "down", "x": 1, "y": 2 },
                { "event": "move", "x": 3, "y": 4, "primary": false, "modifiers": { "alt": true } },
                { "event": "up", "x": 5, "y": 6 },
                { "event": "undo" },
                { "event": "redo" },
                { "event": "key", "key": "z", "modifiers": { "ctrl": true } }
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 6);
        assert_eq!(events[0], ScriptEvent::Down { x: 1.0, y: 2.0 });
        assert_eq!(
            events[1],
            ScriptEvent::Move {
                x: 3.0,
                y: 4.0,
                primary: false,
                modifiers: Modifiers {
                    alt: true,
                    ..Modifiers::NONE
                },
            }
        );
        assert_eq!(events[3], ScriptEvent::Undo);
    }

    #[test]
    fn move_defaults_to_primary_held() {
        let events = parse_script(r#"[{ "event": "move", "x": 0, "y": 0 }]"#).unwrap();
        assert!(matches!(
            events[0],
            ScriptEvent::Move {
                primary: true,
                modifiers: Modifiers::NONE,
                ..
            }
        ));
    }

    #[test]
    fn unknown_event_is_parse_error() {
        let err = parse_script(r#"[{ "event": "teleport" }]"#).unwrap_err();
        assert!(matches!(err, ReplayError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_script("/no/such/script.json").unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
    }

    #[test]
    fn replay_builds_path() {
        let mut session = EditSession::default();
        replay(&mut session, &parse_script(SCRIPT).unwrap());

        let anchors = session.path().anchors();
        assert_eq!(anchors.len(), 3);
        assert_eq!(anchors[0].position, Point::new(0.0, 0.0));
        assert_eq!(anchors[1].position, Point::new(50.0, 0.0));
        assert_eq!(anchors[2].position, Point::new(100.0, 0.0));
        assert_eq!(anchors[2].handle_out, Vec2::new(30.0, 0.0));
    }

    #[test]
    fn key_events_use_shortcuts() {
        let mut session = EditSession::default();
        let mut events = parse_script(SCRIPT).unwrap();
        events.extend(
            parse_script(
                r#"[
                    { "event": "key", "key": "z", "modifiers": { "ctrl": true } },
                    { "event": "key", "key": "q", "modifiers": { "ctrl": true } }
                ]"#,
            )
            .unwrap(),
        );
        replay(&mut session, &events);

        assert_eq!(session.path().len(), 2);
        assert!(session.can_redo());
    }

    #[test]
    fn report_summarises_session() {
        let mut session = EditSession::default();
        replay(&mut session, &parse_script(SCRIPT).unwrap());
        let report = ReplayReport::from_session(&session, 4);

        assert_eq!(report.anchors.len(), 3);
        assert_eq!(report.anchors[1].position, [50.0, 0.0]);
        assert_eq!(report.samples.len(), 1 + 2 * 4);
        assert!(report.svg.starts_with('M'));
        assert_eq!(report.svg.matches('C').count(), 2);
        assert!(report.can_undo);
        assert!(!report.can_redo);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["anchors"][0]["handle_in"], serde_json::json!([0.0, 0.0]));
    }
}
