// TUI module for the interactive converter
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::history::HistoryStore;
use crate::storage::{KeyValueStore, load_theme};

/// Run the interactive converter until the user quits.
///
/// Exports land in `export_dir`. The terminal is restored even if the loop fails.
pub fn run_interactive<S: KeyValueStore>(
    history: HistoryStore<S>,
    export_dir: PathBuf,
) -> Result<()> {
    let theme = load_theme(history.storage())?;
    let mut app = App::new(history, theme, export_dir);

    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    drop(manager);

    res
}
