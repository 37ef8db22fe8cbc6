//! TUI application state and event handling.
//!
//! The converter screen mirrors the command line: type a number, pick the
//! source and target systems, convert, then save, copy or export. The history
//! panel lists saved conversions from the [`HistoryStore`] and lets the user
//! reuse, delete or clear them.
//!
//! `App` owns the store for the lifetime of the session; every history mutation
//! goes straight through it, so a crash loses nothing already confirmed in the
//! status bar.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::converter::{convert, format_result};
use crate::export::export_history;
use crate::history::{HistoryError, HistoryStore};
use crate::models::{HistoryEntry, NumberBase, Theme};
use crate::storage::{KeyValueStore, save_theme};
use crate::utils::strip_ansi_codes;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest accepted input; far above any u64 in any base
const MAX_INPUT_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which widget receives Left/Right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Source,
    Target,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Source,
            Focus::Source => Focus::Target,
            Focus::Target => Focus::Input,
        }
    }
}

/// The last successful conversion; this is what Save and Copy act on, even if
/// the input line has been edited since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub input: String,
    pub from: NumberBase,
    pub to: NumberBase,
    pub formatted: String,
}

pub struct App<S: KeyValueStore> {
    history: HistoryStore<S>,
    input: String,
    source_base: NumberBase,
    target_base: NumberBase,
    focus: Focus,
    converted: Option<Converted>,
    input_error: Option<String>,
    selected_idx: usize,
    theme: Theme,
    confirm_clear: bool,
    export_dir: PathBuf,
    // Clipboard writer, swapped out in tests
    copy: fn(&str) -> Result<()>,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(history: HistoryStore<S>, theme: Theme, export_dir: PathBuf) -> Self {
        Self {
            history,
            input: String::new(),
            source_base: NumberBase::Decimal,
            target_base: NumberBase::Binary,
            focus: Focus::Input,
            converted: None,
            input_error: None,
            selected_idx: 0,
            theme,
            confirm_clear: false,
            export_dir,
            copy: copy_to_clipboard,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn success(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let entries = self.history.list();
                terminal.draw(|f| {
                    let state = RenderState {
                        input: &self.input,
                        source_base: self.source_base,
                        target_base: self.target_base,
                        focus: self.focus,
                        converted: self.converted.as_ref(),
                        input_error: self.input_error.as_deref(),
                        entries: &entries,
                        selected_idx: self.selected_idx,
                        theme: self.theme,
                        confirm_clear: self.confirm_clear,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        if self.confirm_clear {
            self.resolve_clear_confirmation(action);
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Convert => self.convert_input(),
            Action::Save => self.save_conversion(),
            Action::CopyResult => self.copy_result(),
            Action::ToggleFocus => {
                self.focus = self.focus.next();
                self.needs_redraw = true;
            }
            Action::PreviousBase => self.cycle_base(false),
            Action::NextBase => self.cycle_base(true),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::UseSelected => self.use_selected(),
            Action::DeleteSelected => self.delete_selected(),
            Action::ClearHistory => {
                if self.history.is_empty() {
                    self.error("✗ History is already empty");
                } else {
                    self.confirm_clear = true;
                    self.needs_redraw = true;
                }
            }
            Action::ExportHistory => self.export(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Input(c) => self.push_char(c),
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::None => {}
        }
    }

    /// While the clear prompt is open, `y` confirms and any other key cancels
    fn resolve_clear_confirmation(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Input('y') | Action::Input('Y') => {
                self.confirm_clear = false;
                match self.history.clear() {
                    Ok(()) => {
                        self.selected_idx = 0;
                        self.success("✓ History cleared");
                    }
                    Err(e) => self.error(format!("✗ {}", e)),
                }
            }
            _ => {
                self.confirm_clear = false;
                self.needs_redraw = true;
            }
        }
    }

    fn convert_input(&mut self) {
        let input = self.input.trim().to_string();
        self.needs_redraw = true;

        match convert(&input, self.source_base, self.target_base) {
            Ok(result) => {
                self.input_error = None;
                self.converted = Some(Converted {
                    formatted: format_result(&result.render(), self.target_base),
                    input,
                    from: self.source_base,
                    to: self.target_base,
                });
            }
            Err(e) => {
                self.input_error = Some(e.to_string());
                self.converted = None;
            }
        }
    }

    fn save_conversion(&mut self) {
        let Some(converted) = self.converted.clone() else {
            self.error("✗ Convert a number first");
            return;
        };

        let entry =
            HistoryEntry::new(converted.input, converted.from, converted.to, converted.formatted);
        match self.history.save(entry) {
            Ok(()) => {
                self.selected_idx = 0;
                self.success("✓ Saved to history!");
            }
            Err(HistoryError::DuplicateEntry) => {
                self.error("✗ This conversion is already in history");
            }
            Err(e) => self.error(format!("✗ {}", e)),
        }
    }

    fn copy_result(&mut self) {
        let Some(formatted) = self.converted.as_ref().map(|c| c.formatted.clone()) else {
            self.error("✗ Convert a number first");
            return;
        };

        match (self.copy)(&formatted) {
            Ok(()) => self.success("✓ Result copied to clipboard!"),
            Err(e) => self.error(format!("✗ Clipboard error: {}", e)),
        }
    }

    fn cycle_base(&mut self, forward: bool) {
        let step = |base: NumberBase| if forward { base.next() } else { base.previous() };
        match self.focus {
            Focus::Source => self.source_base = step(self.source_base),
            Focus::Target => self.target_base = step(self.target_base),
            Focus::Input => return,
        }
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.history.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// Load the selected entry into the form and convert it again
    fn use_selected(&mut self) {
        let Some(entry) = self.history.get(self.selected_idx) else {
            self.error("✗ No history entry selected");
            return;
        };

        // Stored inputs come from an editable file
        self.input = clamp_input(&strip_ansi_codes(&entry.input));
        self.source_base = entry.from_base;
        self.target_base = entry.to_base;
        self.focus = Focus::Input;
        self.convert_input();
    }

    fn delete_selected(&mut self) {
        if self.selected_idx >= self.history.len() {
            self.error("✗ No history entry selected");
            return;
        }

        match self.history.delete(self.selected_idx) {
            Ok(()) => {
                // Keep the cursor on the entry that slid into place, or the new last one
                self.selected_idx = self.selected_idx.min(self.history.len().saturating_sub(1));
                self.success("✓ Entry deleted");
            }
            Err(e) => self.error(format!("✗ {}", e)),
        }
    }

    fn export(&mut self) {
        let filename = format!("conversion_history_{}.txt", Utc::now().timestamp_millis());
        let path = self.export_dir.join(filename);

        match export_history(&self.history.list(), &path) {
            Ok(()) => self.success(format!("✓ History exported to {}", path.display())),
            Err(e) => self.error(format!("✗ {}", e)),
        }
    }

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        match save_theme(self.history.storage_mut(), theme) {
            Ok(()) => {
                self.theme = theme;
                self.needs_redraw = true;
            }
            Err(e) => self.error(format!("✗ {}", e)),
        }
    }

    fn push_char(&mut self, c: char) {
        if self.focus != Focus::Input {
            self.focus = Focus::Input;
        }
        if self.input.len() < MAX_INPUT_LEN {
            self.input.push(c);
            self.needs_redraw = true;
        }
    }
}

/// Longest prefix of `text` that fits in the input line
fn clamp_input(text: &str) -> String {
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        if idx + ch.len_utf8() > MAX_INPUT_LEN {
            break;
        }
        end = idx + ch.len_utf8();
    }
    text[..end].to_string()
}
