//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! lifecycle transitions and submission races.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=lifecycle=debug,submission=info` - scoped filtering
//! - `RUST_LOG=inplace::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/inplace/logs/inplace.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{Phase, Session, WidgetModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/inplace/logs/inplace.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    tracing::debug!(log_file = ?crate::config_paths::log_file(), "tracing initialized");
}

/// Lightweight snapshot of lifecycle state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub session: Session,
    pub value: Option<String>,
}

impl SessionSnapshot {
    pub fn from_model(model: &WidgetModel) -> Self {
        Self {
            phase: model.phase(),
            session: model.session,
            value: model.editor.as_ref().map(|e| e.value().to_string()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.phase != other.phase {
            changes.push(format!("phase: {:?} → {:?}", self.phase, other.phase));
        }

        let flags = [
            (
                "submission_in_progress",
                self.session.submission_in_progress,
                other.session.submission_in_progress,
            ),
            (
                "button_mousedown",
                self.session.button_mousedown,
                other.session.button_mousedown,
            ),
            (
                "escape_keydown",
                self.session.escape_keydown,
                other.session.escape_keydown,
            ),
        ];
        for (name, before, after) in flags {
            if before != after {
                changes.push(format!("{}: {} → {}", name, before, after));
            }
        }

        if self.value != other.value && self.phase == other.phase {
            changes.push(format!("value: {:?} → {:?}", self.value, other.value));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TriggerId;

    fn snapshot(phase: Phase, submitting: bool) -> SessionSnapshot {
        SessionSnapshot {
            phase,
            session: Session {
                submission_in_progress: submitting,
                ..Session::default()
            },
            value: None,
        }
    }

    #[test]
    fn test_diff_reports_phase_and_flags() {
        let before = snapshot(Phase::Editing(TriggerId(0)), false);
        let after = snapshot(Phase::Submitting(TriggerId(0)), true);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("phase"));
        assert!(diff.contains("submission_in_progress: false → true"));
    }

    #[test]
    fn test_diff_none_when_unchanged() {
        let snap = snapshot(Phase::Idle, false);
        assert_eq!(snap.diff(&snap.clone()), None);
    }
}
