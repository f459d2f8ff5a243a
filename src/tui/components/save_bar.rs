//! # SaveBar Component
//!
//! One line under the playlist: either the save action(s) or, once a
//! playlist link is known, the link itself. Renders nothing otherwise.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const SAVE_LABEL: &str = " [Ctrl+S] Save to Spotify ";
pub const CREATE_LABEL: &str = " [Ctrl+P] Create with my account ";
pub const LINK_LABEL: &str = "Open Playlist on Spotify";

const BUTTON_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Rgb(0x16, 0xA3, 0x4A))
    .add_modifier(Modifier::BOLD);
const LINK_STYLE: Style = Style::new()
    .fg(Color::Rgb(0x1D, 0x4E, 0xD8))
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::UNDERLINED);

pub struct SaveBar<'a> {
    pub can_save: bool,
    pub can_create: bool,
    pub link: Option<&'a str>,
}

impl SaveBar<'_> {
    pub const HEIGHT: u16 = 1;

    fn line(&self) -> Option<Line<'_>> {
        if let Some(link) = self.link {
            return Some(Line::from(vec![
                Span::styled(LINK_LABEL, LINK_STYLE),
                Span::raw(" [Ctrl+O] "),
                Span::raw(link),
            ]));
        }
        if !self.can_save {
            return None;
        }
        let mut spans = vec![Span::styled(SAVE_LABEL, BUTTON_STYLE)];
        if self.can_create {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(CREATE_LABEL, BUTTON_STYLE));
        }
        Some(Line::from(spans))
    }
}

impl Component for SaveBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(line) = self.line() {
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bar: &SaveBar) -> Option<String> {
        bar.line().map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
    }

    #[test]
    fn test_hidden_without_playlist() {
        let bar = SaveBar { can_save: false, can_create: false, link: None };
        assert_eq!(text(&bar), None);
    }

    #[test]
    fn test_save_button() {
        let bar = SaveBar { can_save: true, can_create: false, link: None };
        let t = text(&bar).unwrap();
        assert!(t.contains("Save to Spotify"));
        assert!(!t.contains("Create"));
    }

    #[test]
    fn test_create_button_with_token() {
        let bar = SaveBar { can_save: true, can_create: true, link: None };
        assert!(text(&bar).unwrap().contains("Create with my account"));
    }

    #[test]
    fn test_link_replaces_button() {
        let bar = SaveBar {
            can_save: false,
            can_create: false,
            link: Some("https://open.spotify.com/playlist/abc"),
        };
        let t = text(&bar).unwrap();
        assert!(t.contains(LINK_LABEL));
        assert!(t.contains("https://open.spotify.com/playlist/abc"));
        assert!(!t.contains("Save to Spotify"));
    }
}
