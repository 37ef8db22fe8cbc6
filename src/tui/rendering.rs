use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{Converted, Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::converter::format_result;
use crate::models::{HistoryEntry, NumberBase, Theme};
use crate::utils::{format_timestamp, strip_ansi_codes};

/// Everything the renderer needs from `App` for one frame
pub struct RenderState<'a> {
    pub input: &'a str,
    pub source_base: NumberBase,
    pub target_base: NumberBase,
    pub focus: Focus,
    pub converted: Option<&'a Converted>,
    pub input_error: Option<&'a str>,
    pub entries: &'a [HistoryEntry],
    pub selected_idx: usize,
    pub theme: Theme,
    pub confirm_clear: bool,
    pub status_message: Option<&'a StatusMessage>,
}

/// Colours for one theme
#[derive(Debug, Clone, Copy)]
struct Palette {
    text: Color,
    muted: Color,
    accent: Color,
    accent_text: Color,
    background: Color,
    success: Color,
    danger: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::Rgb(250, 250, 250),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(16, 185, 129),
                accent_text: Color::Rgb(250, 250, 250),
                background: Color::Rgb(24, 24, 27),
                success: Color::Rgb(16, 185, 129),
                danger: Color::Rgb(239, 68, 68),
            },
            Theme::Light => Self {
                text: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(5, 150, 105),
                accent_text: Color::Rgb(255, 255, 255),
                background: Color::Rgb(244, 244, 245),
                success: Color::Rgb(5, 150, 105),
                danger: Color::Rgb(220, 38, 38),
            },
        }
    }

    fn border(&self, focused: bool) -> Style {
        if focused { Style::default().fg(self.accent) } else { Style::default().fg(self.muted) }
    }
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let palette = Palette::for_theme(state.theme);
    let layout = AppLayout::new(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    render_input(frame, layout.input_area, state, &palette);
    render_base_selector(
        frame,
        layout.source_area,
        " From ",
        state.source_base,
        state.focus == Focus::Source,
        &palette,
    );
    render_base_selector(
        frame,
        layout.target_area,
        " To ",
        state.target_base,
        state.focus == Focus::Target,
        &palette,
    );
    render_result(frame, layout.result_area, state, &palette);
    render_history(frame, layout.history_area, state.entries, state.selected_idx, &palette);
    render_status_bar(frame, layout.status_area, state, &palette);
}

fn render_input(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let focused = state.focus == Focus::Input;
    let title = match state.input_error {
        Some(_) => " Number (invalid) ",
        None => " Number ",
    };

    let paragraph = Paragraph::new(state.input).style(Style::default().fg(palette.text)).block(
        Block::default().borders(Borders::ALL).border_style(palette.border(focused)).title(title),
    );
    frame.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        let max_offset = area.width.saturating_sub(3);
        let offset = u16::try_from(state.input.chars().count()).unwrap_or(u16::MAX).min(max_offset);
        frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
    }
}

fn render_base_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    base: NumberBase,
    focused: bool,
    palette: &Palette,
) {
    let spans: Vec<Span> = NumberBase::ALL
        .iter()
        .flat_map(|candidate| {
            let style = if *candidate == base {
                Style::default()
                    .fg(palette.accent_text)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            [Span::styled(format!(" {} ", candidate.name()), style), Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default().borders(Borders::ALL).border_style(palette.border(focused)).title(title),
    );
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let line = match (state.input_error, state.converted) {
        (Some(error), _) => Line::from(Span::styled(error, Style::default().fg(palette.danger))),
        (None, Some(converted)) => Line::from(vec![
            Span::styled(
                converted.formatted.clone(),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} → {})", converted.from, converted.to),
                Style::default().fg(palette.muted),
            ),
        ]),
        (None, None) => Line::from(Span::styled(
            "Press Enter to convert",
            Style::default().fg(palette.muted),
        )),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false))
            .title(" Result "),
    );
    frame.render_widget(paragraph, area);
}

fn history_line(entry: &HistoryEntry) -> String {
    format!(
        "{} | {} ({}) → {} ({})",
        format_timestamp(&entry.timestamp),
        strip_ansi_codes(&entry.input),
        entry.from_base,
        format_result(&strip_ansi_codes(&entry.result), entry.to_base),
        entry.to_base
    )
}

fn render_history(
    frame: &mut Frame,
    area: Rect,
    entries: &[HistoryEntry],
    selected_idx: usize,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false))
        .title(format!(" History ({}) ", entries.len()));

    if entries.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No conversion history yet",
            Style::default().fg(palette.muted),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the selection visible when the list is taller than the panel
    let visible = area.height.saturating_sub(2) as usize;
    let skip = if visible > 0 && selected_idx >= visible { selected_idx + 1 - visible } else { 0 };

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(idx, entry)| {
            let style = if idx == selected_idx {
                Style::default()
                    .fg(palette.accent_text)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(history_line(entry)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let (text, style) = if state.confirm_clear {
        (
            " Are you sure you want to clear all history? (y/N) ".to_string(),
            Style::default()
                .fg(palette.accent_text)
                .bg(palette.danger)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(msg) = state.status_message {
        let bg = match msg.message_type {
            MessageType::Success => palette.success,
            MessageType::Error => palette.danger,
        };
        (format!(" {} ", msg.text), Style::default().fg(palette.accent_text).bg(bg))
    } else {
        let parts = [
            "Enter: convert",
            "Tab: focus",
            "←/→: base",
            "^S: save",
            "^Y: copy",
            "^U: reuse",
            "Del: delete",
            "^L: clear",
            "^E: export",
            "^T: theme",
            "Esc: quit",
        ];
        let style = Style::default().fg(palette.muted).bg(palette.background);
        (format!(" {} ", parts.join(" | ")), style)
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use chrono::{TimeZone, Utc};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn entry(input: &str) -> HistoryEntry {
        HistoryEntry::with_timestamp(
            input,
            NumberBase::Decimal,
            NumberBase::Hexadecimal,
            "FF",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn state<'a>(entries: &'a [HistoryEntry]) -> RenderState<'a> {
        RenderState {
            input: "255",
            source_base: NumberBase::Decimal,
            target_base: NumberBase::Hexadecimal,
            focus: Focus::Input,
            converted: None,
            input_error: None,
            entries,
            selected_idx: 0,
            theme: Theme::Dark,
            confirm_clear: false,
            status_message: None,
        }
    }

    fn rendered_text(width: u16, height: u16, state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_ui(f, state)).unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_empty_history() {
        let text = rendered_text(100, 20, &state(&[]));
        assert!(text.contains("No conversion history yet"));
        assert!(text.contains("Press Enter to convert"));
        assert!(text.contains("Hexadecimal"));
    }

    #[test]
    fn test_render_conversion_result() {
        let converted = Converted {
            input: "255".to_string(),
            from: NumberBase::Decimal,
            to: NumberBase::Hexadecimal,
            formatted: "0xFF".to_string(),
        };
        let mut state = state(&[]);
        state.converted = Some(&converted);

        let text = rendered_text(100, 20, &state);
        assert!(text.contains("0xFF"));
    }

    #[test]
    fn test_render_input_error() {
        let mut state = state(&[]);
        state.input_error = Some("Invalid characters for Decimal system");

        let text = rendered_text(100, 20, &state);
        assert!(text.contains("Invalid characters for Decimal system"));
        assert!(text.contains("Number (invalid)"));
    }

    #[test]
    fn test_render_history_entries() {
        let entries = vec![entry("255"), entry("\x1b[31m16")];
        let text = rendered_text(100, 20, &state(&entries));
        assert!(text.contains("History (2)"));
        assert!(text.contains("255 (Decimal) → 0xFF (Hexadecimal)"));
        assert!(text.contains("16 (Decimal)"));
    }

    #[test]
    fn test_render_selection_beyond_visible_rows() {
        let entries: Vec<_> = (0..30).map(|i| entry(&i.to_string())).collect();
        let mut state = state(&entries);
        state.selected_idx = 29;

        // Must not panic; last entry scrolled into view
        let text = rendered_text(100, 20, &state);
        assert!(text.contains("29 (Decimal)"));
    }

    #[test]
    fn test_render_clear_prompt() {
        let mut state = state(&[]);
        state.confirm_clear = true;
        let text = rendered_text(100, 20, &state);
        assert!(text.contains("clear all history?"));
    }

    #[test]
    fn test_render_status_message() {
        let msg = StatusMessage {
            text: "✓ Saved to history!".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now(),
        };
        let mut state = state(&[]);
        state.status_message = Some(&msg);

        let text = rendered_text(100, 20, &state);
        assert!(text.contains("Saved to history!"));
    }

    #[test]
    fn test_render_light_theme_and_tiny_terminal() {
        let mut state = state(&[]);
        state.theme = Theme::Light;
        state.focus = Focus::Target;
        // Must not panic on very small areas
        rendered_text(10, 5, &state);
        rendered_text(100, 20, &state);
    }
}
