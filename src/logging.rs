// SPDX-License-Identifier: MPL-2.0
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: Sections that failed to mount, unreadable settings or content,
//!   links that could not be opened
//! - `info`: Startup, content reloads
//! - `debug`: Section mount/unmount, theme and menu changes
//! - `trace`: Every carousel tick and transition frame
//!
//! `RUST_LOG` overrides the level picked from the command line.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Dependencies that are chatty at `info` and below.
const NOISY_TARGETS: &[&str] = &["wgpu_core", "wgpu_hal", "naga", "iced_wgpu", "cosmic_text"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// - 0 (no `-v`): info level
    /// - 1 (`-v`): debug level
    /// - 2+ (`-vv`): trace level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed (e.g. by a test
/// harness); logging then goes to that subscriber.
pub fn init_logging(config: &LogConfig) -> bool {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .is_ok()
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Our crate at `level`, renderer internals capped at `warn`.
fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = format!("{level},podium={level}");
    for target in NOISY_TARGETS {
        directives.push_str(&format!(",{target}=warn"));
    }
    directives
}
