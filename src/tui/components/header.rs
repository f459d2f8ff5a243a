//! # Header Component
//!
//! Title, tagline and the current status line.
//!
//! Stateless: everything comes in as props. When a playlist is showing the
//! header moves from centered to left-aligned, matching the rest of the
//! layout shift.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const TITLE: &str = "Mood Tune 🎵";
pub const TAGLINE: &str = "Discover niche playlists that match your vibe and brighten your day.";

/// Fixed title color, independent of the mood color.
const TITLE_COLOR: Color = Color::Rgb(0x2C, 0x2C, 0x2C);
const TAGLINE_COLOR: Color = Color::Rgb(0x4B, 0x55, 0x63);

pub struct Header<'a> {
    /// Left-aligned once a playlist is showing.
    pub compact: bool,
    pub status_message: &'a str,
}

impl Header<'_> {
    /// Title, tagline, status.
    pub const HEIGHT: u16 = 3;
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(TITLE_COLOR).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(TAGLINE_COLOR))),
            Line::from(Span::styled(
                self.status_message,
                Style::default().fg(TAGLINE_COLOR).add_modifier(Modifier::ITALIC),
            )),
        ];

        let alignment = if self.compact {
            Alignment::Left
        } else {
            Alignment::Center
        };

        frame.render_widget(Paragraph::new(lines).alignment(alignment), area);
    }
}
