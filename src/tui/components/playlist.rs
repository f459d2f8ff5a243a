//! # Playlist Component
//!
//! Scrollable, ordered list of song cards (title over artist).
//!
//! `PlaylistView` is created each frame with the songs as props and a
//! `&mut PlaylistState` for the scroll position, which outlives it in `TuiState`.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::backend::Song;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + title line + artist line.
pub const CARD_HEIGHT: u16 = 4;
/// Widest a card gets; narrower terminals use the full width.
pub const MAX_CARD_WIDTH: u16 = 56;

/// Height of `count` stacked cards, saturating at the largest canvas.
fn content_height(count: usize) -> u16 {
    CARD_HEIGHT.saturating_mul(u16::try_from(count).unwrap_or(u16::MAX))
}

pub struct PlaylistState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Total height of all cards at the last render
    pub content_height: u16,
}

impl Default for PlaylistState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
            content_height: 0,
        }
    }

    /// Back to the top, used when a new playlist replaces the old one.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Keep the offset inside the content so the list can't scroll past its end.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for PlaylistState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// A single song card.
struct SongCard<'a> {
    song: &'a Song,
    text_color: Color,
    card_color: Color,
}

impl Widget for SongCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.text_color).bg(self.card_color);
        let lines = vec![
            Line::from(self.song.title.as_str()).style(style.add_modifier(Modifier::BOLD)),
            Line::from(self.song.artist.as_str()).style(style.add_modifier(Modifier::DIM)),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
            .style(style)
            .render(area, buf);
    }
}

pub struct PlaylistView<'a> {
    pub state: &'a mut PlaylistState,
    pub songs: &'a [Song],
    pub text_color: Color,
    pub card_color: Color,
}

impl Component for PlaylistView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column
        let card_width = content_width.min(MAX_CARD_WIDTH);
        let card_x = (content_width - card_width) / 2;
        let total_height = content_height(self.songs.len());

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, song) in self.songs.iter().enumerate() {
            let y = content_height(i);
            if y.saturating_add(CARD_HEIGHT) > total_height {
                break;
            }
            let card = SongCard {
                song,
                text_color: self.text_color,
                card_color: self.card_color,
            };
            scroll_view.render_widget(card, Rect::new(card_x, y, card_width, CARD_HEIGHT));
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
