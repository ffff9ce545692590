//! Progress spinner for long-running fetches.
//!
//! Responsibilities:
//! - Show a spinner on STDERR (never stdout) while pages are being fetched, so
//!   machine-readable output is not contaminated.
//! - Allow global suppression via a caller-provided `enabled` boolean (driven by `--quiet`).
//!
//! Non-responsibilities:
//! - Printing command results; stdout remains reserved for results.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// A stderr spinner that becomes a no-op when disabled.
pub(crate) struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, message: impl Into<String>) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(ProgressStyle::default_spinner());
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Stop the spinner and leave a final message on STDERR.
    pub(crate) fn finish(&self, message: impl Into<String>) {
        if let Some(pb) = &self.pb {
            pb.finish_with_message(message.into());
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        // Clear an unfinished spinner so it does not interleave with error output.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_is_noop() {
        let spinner = Spinner::new(false, "Fetching alerts");
        assert!(spinner.pb.is_none());
        spinner.finish("done");
    }
}
