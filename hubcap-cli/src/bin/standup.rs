//! # Standup
//!
//! Prints a daily standup note template, optionally writing it to a file
//! named after today's date.

use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{ArgAction, Parser};

/// Skeleton filled out by hand after generation.
const TEMPLATE: &str = "Yesterday:\n* \n\nToday:\n* \n\nPRs:\n* \n\n";

#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "Generate a daily standup note template")]
#[command(disable_version_flag = true)]
struct Cli {
  /// Print version and build information
  #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
  version: bool,

  /// Write the template to a file named yyyy-mm-dd in the current directory
  #[arg(short = 'f', long = "file", action = ArgAction::SetTrue)]
  file: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.version {
    println!(
      "standup {} - git: {}",
      env!("CARGO_PKG_VERSION"),
      option_env!("GIT_HASH").unwrap_or("unknown")
    );
    return Ok(());
  }

  if cli.file {
    let today = Local::now().format("%Y-%m-%d").to_string();
    fs::write(&today, TEMPLATE).with_context(|| format!("failed to write {today}"))?;
    return Ok(());
  }

  print!("{TEMPLATE}");
  Ok(())
}
