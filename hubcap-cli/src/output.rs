//! Formatted output helpers for user-facing messages.

use owo_colors::OwoColorize;

/// Print an error message to stderr.
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
  println!("{} {}", "✓".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
  println!("{} {}", "ℹ".blue().bold(), message);
}
