//! # Alert Component
//!
//! Modal message box drawn over the whole view. While it is up, the event
//! loop routes every key to it; `Enter` or `Esc` dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MAX_WIDTH: u16 = 50;
/// Border (2) + message + blank + hint.
const HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    Dismiss,
}

pub struct Alert<'a> {
    pub message: &'a str,
}

impl Component for Alert<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(MAX_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        let lines = vec![
            Line::from(self.message),
            Line::default(),
            Line::from("[Enter] OK").style(Style::default().add_modifier(Modifier::DIM)),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .title(" Alert ")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .style(Style::default().fg(Color::Black).bg(Color::White));

        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}

impl EventHandler for Alert<'_> {
    type Event = AlertEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(AlertEvent::Dismiss),
            _ => None,
        }
    }
}
