use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::LOADING_STATUS;
use crate::core::color::{TextColor, parse_rgb};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Alert, Header, MoodInput, PlaylistView, SaveBar};

/// Width of the mood form column.
const FORM_WIDTH: u16 = 64;
/// Left margin once a playlist is showing.
const PLAYLIST_MARGIN: u16 = 4;
/// How far song cards are lifted toward white over the mood color.
const CARD_TINT: f32 = 0.3;
const LOADING_COLOR: Color = Color::Rgb(0x37, 0x41, 0x51);

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    let background = mood_background(&app.mood_color);
    frame.render_widget(Block::default().style(Style::default().bg(background)), area);

    if app.has_playlist() {
        draw_with_playlist(frame, area, app, tui);
    } else {
        draw_centered(frame, area, app, tui);
    }

    if let Some(message) = &app.alert {
        Alert { message }.render(frame, area);
    }
}

/// Empty playlist: header and form centered on screen.
fn draw_centered(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::Length;

    let [column] = Layout::horizontal([Length(FORM_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [header_area, _, input_area, loading_area] = Layout::vertical([
        Length(Header::HEIGHT),
        Length(1),
        Length(MoodInput::HEIGHT),
        Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    Header {
        compact: false,
        status_message: &app.status_message,
    }
    .render(frame, header_area);
    tui.mood_input.render(frame, input_area);
    draw_loading(frame, loading_area, app, tui);
}

/// Playlist present: content pinned to the top with a left margin.
fn draw_with_playlist(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let inner = area.inner(Margin {
        horizontal: PLAYLIST_MARGIN,
        vertical: 1,
    });
    let [header_area, _, input_area, loading_area, list_area, save_area] = Layout::vertical([
        Length(Header::HEIGHT),
        Length(1),
        Length(MoodInput::HEIGHT),
        Length(1),
        Min(0),
        Length(SaveBar::HEIGHT),
    ])
    .areas(inner);
    let [input_area] = Layout::horizontal([Length(FORM_WIDTH.min(input_area.width))])
        .flex(Flex::Start)
        .areas(input_area);

    Header {
        compact: true,
        status_message: &app.status_message,
    }
    .render(frame, header_area);
    tui.mood_input.render(frame, input_area);
    draw_loading(frame, loading_area, app, tui);

    PlaylistView {
        state: &mut tui.playlist,
        songs: &app.playlist,
        text_color: to_color(app.text_color()),
        card_color: card_color(&app.mood_color),
    }
    .render(frame, list_area);

    SaveBar {
        can_save: app.can_save(),
        can_create: app.can_create_directly(),
        link: app.spotify_link.as_deref(),
    }
    .render(frame, save_area);
}

fn draw_loading(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    if !app.is_loading {
        return;
    }
    let modifier = if tui.pulse_value > 0.5 {
        Modifier::BOLD
    } else {
        Modifier::DIM
    };
    let span = Span::styled(
        LOADING_STATUS,
        Style::default().fg(LOADING_COLOR).add_modifier(modifier),
    );
    frame.render_widget(Paragraph::new(span).centered(), area);
}

/// Terminal color for a mood color. Unparseable colors leave the terminal default.
pub fn mood_background(mood_color: &str) -> Color {
    match parse_rgb(mood_color) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

pub fn to_color(text: TextColor) -> Color {
    let (r, g, b) = text.rgb();
    Color::Rgb(r, g, b)
}

/// Mood color mixed toward white, for the song cards.
fn card_color(mood_color: &str) -> Color {
    match parse_rgb(mood_color) {
        Some((r, g, b)) => {
            let tint = |c: u8| (c as f32 + (255.0 - c as f32) * CARD_TINT).round() as u8;
            Color::Rgb(tint(r), tint(g), tint(b))
        }
        None => Color::Reset,
    }
}
