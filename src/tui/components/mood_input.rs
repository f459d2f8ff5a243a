//! # MoodInput Component
//!
//! Single-line text field for the mood, with a "Generate" hint.
//!
//! The buffer is internal state; the parent mirrors it into `App::mood`
//! through `MoodEvent::Changed`. Submitting does not clear the buffer,
//! so the mood stays visible next to its playlist.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "How are you feeling?";

/// Borders take one column on each side.
const HORIZONTAL_OVERHEAD: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum MoodEvent {
    /// Buffer content changed.
    Changed(String),
    /// Enter pressed.
    Submit,
}

pub struct MoodInput {
    pub buffer: String,
    /// Cursor as a byte offset into `buffer`.
    cursor: usize,
    /// Width of text scrolled off the left edge, in columns.
    scroll: usize,
}

impl MoodInput {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<MoodEvent> {
        Some(MoodEvent::Changed(self.buffer.clone()))
    }

    fn cursor_col(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Keeps the cursor column inside the visible window.
    fn update_scroll(&mut self, visible_width: usize) {
        let cursor_col = self.cursor_col();
        if visible_width == 0 {
            self.scroll = 0;
        } else if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if cursor_col >= self.scroll + visible_width {
            self.scroll = cursor_col + 1 - visible_width;
        }
    }

    /// Buffer text starting at the first character at or after the scroll column.
    fn visible_text(&self) -> &str {
        let mut col = 0;
        for (idx, ch) in self.buffer.char_indices() {
            if col >= self.scroll {
                return &self.buffer[idx..];
            }
            col += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
        ""
    }
}

impl Default for MoodInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MoodInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.update_scroll(usize::from(inner_width));

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title_bottom(Line::from(" [Enter] Generate ").right_aligned())
            .style(Style::default().bg(Color::White).fg(Color::Black));

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.visible_text())
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        let cursor_col = u16::try_from(self.cursor_col().saturating_sub(self.scroll))
            .unwrap_or(u16::MAX);
        frame.set_cursor_position((
            area.x.saturating_add(1).saturating_add(cursor_col),
            area.y.saturating_add(1),
        ));
    }
}

impl EventHandler for MoodInput {
    type Event = MoodEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(MoodEvent::Submit),
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> MoodInput {
        let mut input = MoodInput::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_emits_changed() {
        let mut input = MoodInput::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('h')),
            Some(MoodEvent::Changed("h".into()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('i')),
            Some(MoodEvent::Changed("hi".into()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(MoodEvent::Changed("h".into()))
        );
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = typed("happy");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(MoodEvent::Submit));
        assert_eq!(input.buffer, "happy");
    }

    #[test]
    fn test_empty_submit_still_emits() {
        // The reducer decides what an empty mood means
        let mut input = MoodInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(MoodEvent::Submit));
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut input = typed("café");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caé");
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "ca");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_home_end() {
        let mut input = typed("blue");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('X'));
        assert_eq!(input.buffer, "Xblue");
        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "Xblue!");
    }

    #[test]
    fn test_backspace_at_start_is_none() {
        let mut input = MoodInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = MoodInput::new();
        input.handle_event(&TuiEvent::Paste("rainy\nday".into()));
        assert_eq!(input.buffer, "rainy day");
        assert_eq!(input.cursor(), input.buffer.len());
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut input = MoodInput::new();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("Generate"));
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        let mut input = typed("abcdefghijklmnop");
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("hijklmnop"));
        assert!(!text.contains("abc"));
    }

    #[test]
    fn test_mood_wider_than_u16_columns() {
        let mut terminal = Terminal::new(TestBackend::new(64, 3)).unwrap();
        let mut input = MoodInput::new();
        input.handle_event(&TuiEvent::Paste("a".repeat(70_000)));
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        for c in "0123456789".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
            terminal.draw(|f| input.render(f, f.area())).unwrap();
        }

        let text = screen_text(&terminal);
        assert!(text.contains("aaaa0123456789"));
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 64);
    }
}
