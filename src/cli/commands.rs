use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::clipboard::copy_to_clipboard;
use crate::converter::{convert, convert_request, format_result};
use crate::export::{describe_entry, export_history, render_conversion_report};
use crate::history::HistoryStore;
use crate::models::{ConversionRequest, HistoryEntry, NumberBase, Theme};
use crate::storage::{FileStore, load_theme, save_theme};
use crate::utils::{format_path_with_tilde, format_timestamp, get_data_dir};

#[derive(Parser)]
#[command(name = "radix-converter")]
#[command(version = "0.1.0")]
#[command(
    about = "Convert numbers between binary, octal, decimal and hexadecimal",
    long_about = None
)]
pub struct Cli {
    /// Directory holding saved history and preferences
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a number from one base to another
    Convert {
        /// Number to convert, optionally prefixed with 0b/0o/0x
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source base: 2, 8, 10, 16 or bin, oct, dec, hex
        #[arg(short, long)]
        from: NumberBase,
        /// Target base: 2, 8, 10, 16 or bin, oct, dec, hex
        #[arg(short, long)]
        to: NumberBase,
        /// Save the conversion to history
        #[arg(long)]
        save: bool,
        /// Copy the formatted result to the clipboard
        #[arg(long)]
        copy: bool,
        /// Also write a plain-text report of the conversion to this file
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },
    /// Manage saved conversions
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
    /// Show or change the colour theme
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
    /// Open the interactive converter
    Ui,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List saved conversions, newest first
    List,
    /// Delete the entry at a position shown by `history list`
    Delete { index: usize },
    /// Delete every saved conversion
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Run a saved conversion again
    Use { index: usize },
    /// Write the history to a text file
    Export { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = get_data_dir(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), "Resolved data directory");

    match cli.command {
        Some(Commands::Convert { value, from, to, save, copy, report }) => {
            let request = ConversionRequest::new(value.trim(), from, to);
            run_convert(&data_dir, &request, save, copy, report.as_deref())?;
        }
        Some(Commands::History { action }) => run_history(&data_dir, action)?,
        Some(Commands::Theme { choice }) => run_theme(&data_dir, choice)?,
        Some(Commands::Ui) => {
            let store = open_history(&data_dir)?;
            let export_dir =
                std::env::current_dir().context("Failed to read current directory")?;
            crate::tui::run_interactive(store, export_dir)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn open_history(data_dir: &Path) -> Result<HistoryStore<FileStore>> {
    let storage = FileStore::open_in_dir(data_dir).with_context(|| {
        format!("Failed to open storage in {}", format_path_with_tilde(data_dir))
    })?;
    Ok(HistoryStore::open(storage)?)
}

/// Display positions are 1-based
fn to_position(index: usize) -> Option<usize> {
    index.checked_sub(1)
}

fn run_convert(
    data_dir: &Path,
    request: &ConversionRequest,
    save: bool,
    copy: bool,
    report: Option<&Path>,
) -> Result<()> {
    let (input, from, to) = (&request.raw_input, request.source_base, request.target_base);
    let result = convert_request(request)?;
    let formatted = format_result(&result.render(), to);
    println!("{}", formatted);

    if let Some(path) = report {
        let contents = render_conversion_report(input, from, to, &formatted, &Utc::now());
        fs::write(path, contents)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        eprintln!("Report written to {}", format_path_with_tilde(path));
    }

    // Saved before copying; a clipboard failure must not drop the entry
    if save {
        let mut store = open_history(data_dir)?;
        store.save(HistoryEntry::new(input.as_str(), from, to, formatted.as_str()))?;
        eprintln!("Saved to history!");
    }

    if copy {
        copy_to_clipboard(&formatted)?;
        eprintln!("Result copied to clipboard!");
    }

    Ok(())
}

fn run_history(data_dir: &Path, action: HistoryCommand) -> Result<()> {
    let mut store = open_history(data_dir)?;

    match action {
        HistoryCommand::List => {
            if store.is_empty() {
                println!("No conversion history yet");
                return Ok(());
            }
            for (idx, entry) in store.list().iter().enumerate() {
                println!(
                    "{:>2}. {}  ({})",
                    idx + 1,
                    describe_entry(entry),
                    format_timestamp(&entry.timestamp)
                );
            }
        }
        HistoryCommand::Delete { index } => match to_position(index).filter(|&i| i < store.len()) {
            Some(position) => {
                let removed = describe_entry(&store.list()[position]);
                store.delete(position)?;
                println!("Deleted: {}", removed);
            }
            None => eprintln!("No history entry at position {}", index),
        },
        HistoryCommand::Clear { yes } => {
            if store.is_empty() {
                println!("History is already empty");
                return Ok(());
            }
            if !yes && !confirm("Are you sure you want to clear all history?")? {
                println!("Cancelled");
                return Ok(());
            }
            let count = store.len();
            store.clear()?;
            println!("Cleared {} entries", count);
        }
        HistoryCommand::Use { index } => {
            let Some(entry) = to_position(index).and_then(|i| store.get(i)) else {
                bail!("No history entry at position {}", index);
            };
            let result = convert(&entry.input, entry.from_base, entry.to_base)?;
            println!(
                "{} ({}) → {} ({})",
                entry.input,
                entry.from_base,
                format_result(&result.render(), entry.to_base),
                entry.to_base
            );
        }
        HistoryCommand::Export { path } => {
            export_history(&store.list(), &path)?;
            println!("History exported to {}", format_path_with_tilde(&path));
        }
    }

    Ok(())
}

fn run_theme(data_dir: &Path, choice: Option<ThemeChoice>) -> Result<()> {
    let mut storage = FileStore::open_in_dir(data_dir)?;
    let current = load_theme(&storage)?;

    let theme = match choice {
        None => current,
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Toggle) => current.toggle(),
    };
    if choice.is_some() {
        save_theme(&mut storage, theme)?;
    }

    println!("Theme: {}", theme);
    Ok(())
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` is no
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer).context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_position() {
        assert_eq!(to_position(0), None);
        assert_eq!(to_position(1), Some(0));
        assert_eq!(to_position(50), Some(49));
    }

    #[test]
    fn test_cli_parses_negative_value() {
        let cli = Cli::try_parse_from([
            "radix-converter",
            "convert",
            "-5",
            "--from",
            "dec",
            "--to",
            "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Convert { value, from, to, .. }) => {
                assert_eq!(value, "-5");
                assert_eq!(from, NumberBase::Decimal);
                assert_eq!(to, NumberBase::Binary);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_base() {
        let result =
            Cli::try_parse_from(["radix-converter", "convert", "12", "--from", "3", "--to", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
