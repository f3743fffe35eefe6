//! Spinner shown while the tools wait on the API.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a steadily ticking spinner with the given message. The caller
/// clears it once the work is done.
pub fn spinner(message: &str) -> ProgressBar {
  let progress = ProgressBar::new_spinner();
  let style = ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner());
  progress.set_style(style);
  progress.set_message(message.to_string());
  progress.enable_steady_tick(Duration::from_millis(100));
  progress
}
