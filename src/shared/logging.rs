//! Opt-in file logging.
//!
//! The interactive picker owns stderr and stdout carries the result, so
//! diagnostics only ever go to a file under the cache directory.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use super::dirs;

const LOG_FILE_PREFIX: &str = "tmux-selector";
const LOG_FILE_SUFFIX: &str = "log";

/// Installs the global subscriber when `directive` is set.
///
/// Failures (bad directive, unwritable directory) leave logging disabled
/// rather than aborting the run.
pub fn init(directive: Option<&str>) {
    let Some(filter) = build_filter(directive) else {
        return;
    };
    let Some(dir) = dirs::log_dir() else {
        return;
    };
    let Some(appender) = build_appender(&dir) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init();
}

/// Parses the filter directive; `None` means logging stays off.
fn build_filter(directive: Option<&str>) -> Option<EnvFilter> {
    let directive = directive.map(str::trim).filter(|d| !d.is_empty())?;
    EnvFilter::try_new(directive).ok()
}

fn build_appender(dir: &Path) -> Option<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .ok()
}
