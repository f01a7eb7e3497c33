// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezier Editor: the model and interaction core of a cubic Bézier path
//! editor.
//!
//! A host feeds pointer and keyboard events to an [`EditSession`], which
//! hit tests the [`Path`], drags anchors and handles, creates and inserts
//! anchors, and records every committed edit as an undoable command.
//! Rendering is left to the host, which observes the path through its
//! change listener and reads geometry via [`Path::segments`] or
//! [`CurveSampler`].

use anyhow::{Context, bail};
use std::path::PathBuf;

pub mod editing;
pub mod path;
pub mod replay;
pub mod settings;

pub use editing::{EditCommand, EditSession, HitTarget, HitTestResult, Modifiers};
pub use path::{AnchorId, AnchorPoint, CurveSampler, HandleSide, Path, Segment};
pub use settings::EditorSettings;

const USAGE: &str = "Usage: bezier-editor <script.json> [--settings <file.toml>] [--samples <n>]";

/// Samples per segment in the replay report unless `--samples` is given
const DEFAULT_SAMPLES: usize = 16;

/// Largest accepted `--samples` value
const MAX_SAMPLES: usize = 4096;

/// Entry point for the replay tool
///
/// Replays a gesture script against an empty path and prints the
/// resulting report as JSON on stdout.
pub fn run(args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
    // Log level can be controlled via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bezier_editor=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    let options = Options::parse(args)?;

    let settings = match &options.settings {
        Some(path) => EditorSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => EditorSettings::default(),
    };

    let events = replay::load_script(&options.script)
        .with_context(|| format!("loading script {}", options.script.display()))?;
    tracing::info!(
        "Loaded {} events from {}",
        events.len(),
        options.script.display()
    );

    let mut session = EditSession::new(settings);
    replay::replay(&mut session, &events);

    let report = replay::ReplayReport::from_session(&session, options.samples);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Command-line options for the replay tool
#[derive(Debug, PartialEq)]
struct Options {
    script: PathBuf,
    settings: Option<PathBuf>,
    samples: usize,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut script = None;
        let mut settings = None;
        let mut samples = DEFAULT_SAMPLES;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--settings" => {
                    let value = args.next().context("--settings needs a file")?;
                    settings = Some(PathBuf::from(value));
                }
                "--samples" => {
                    let value = args.next().context("--samples needs a count")?;
                    samples = value
                        .parse()
                        .with_context(|| format!("invalid sample count {value:?}"))?;
                    if samples > MAX_SAMPLES {
                        bail!("sample count {samples} exceeds the maximum of {MAX_SAMPLES}");
                    }
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                _ if script.is_some() => bail!("more than one script given\n{USAGE}"),
                _ => script = Some(PathBuf::from(&arg)),
            }
        }

        let Some(script) = script else {
            bail!("{USAGE}");
        };
        Ok(Self {
            script,
            settings,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_script_only() {
        let options = Options::parse(args(&["gestures.json"])).unwrap();
        assert_eq!(options.script, PathBuf::from("gestures.json"));
        assert_eq!(options.settings, None);
        assert_eq!(options.samples, DEFAULT_SAMPLES);
    }

    #[test]
    fn parses_flags_in_any_order() {
        let options = Options::parse(args(&[
            "--samples",
            "4",
            "gestures.json",
            "--settings",
            "editor.toml",
        ]))
        .unwrap();
        assert_eq!(options.samples, 4);
        assert_eq!(options.settings, Some(PathBuf::from("editor.toml")));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Options::parse(args(&[])).is_err());
        assert!(Options::parse(args(&["a.json", "b.json"])).is_err());
        assert!(Options::parse(args(&["a.json", "--samples", "many"])).is_err());
        assert!(Options::parse(args(&["a.json", "--settings"])).is_err());
        assert!(Options::parse(args(&["a.json", "--verbose"])).is_err());
    }

    #[test]
    fn sample_count_is_bounded() {
        let max = MAX_SAMPLES.to_string();
        let options = Options::parse(args(&["a.json", "--samples", &max])).unwrap();
        assert_eq!(options.samples, MAX_SAMPLES);

        let over = (MAX_SAMPLES + 1).to_string();
        assert!(Options::parse(args(&["a.json", "--samples", &over])).is_err());
        let huge = usize::MAX.to_string();
        assert!(Options::parse(args(&["a.json", "--samples", &huge])).is_err());
    }
}
