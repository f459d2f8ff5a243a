//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view,
//! translates keyboard events into `core::Action` values and executes the
//! `Effect`s that `update()` returns.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Backend calls run as spawned tokio tasks and report back through an
//! `mpsc` channel of `Action`s, drained once per iteration. All state
//! mutation happens on the loop thread via `update()`.
//!
//! - **Loading**: redraws every ~80ms so the loading line can pulse.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::future::Future;
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::backend::{HttpBackend, MoodBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::launch::LaunchParams;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{Alert, AlertEvent, MoodEvent, MoodInput, PlaylistState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub mood_input: MoodInput,
    pub playlist: PlaylistState,
    /// Loading pulse, 0.0 to 1.0
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            mood_input: MoodInput::new(),
            playlist: PlaylistState::new(),
            pulse_value: 0.0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the loop should do after handling an action.
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
    /// Leave the application and hand the URL to the browser.
    Redirect(String),
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig, launch: LaunchParams) -> std::io::Result<()> {
    let backend = HttpBackend::new(config.backend_url.clone()).map_err(std::io::Error::other)?;
    info!("Using {} backend at {}", backend.name(), backend.base_url());

    let mut app = App::new(Arc::new(backend), launch).with_hex_parsing(config.hex_parsing);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;
    let mut flow = Flow::Continue;

    while flow == Flow::Continue {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for_event(&app, &mut tui, &event) else {
                continue;
            };
            flow = dispatch(&mut app, &mut tui, action, &tx, config.open_browser);
            if flow != Flow::Continue {
                break;
            }
        }

        // Results from background requests
        while flow == Flow::Continue
            && let Ok(action) = rx.try_recv()
        {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            flow = dispatch(&mut app, &mut tui, action, &tx, config.open_browser);
        }
    }

    drop(terminal_mode_guard);
    ratatui::restore();

    if let Flow::Redirect(url) = flow {
        leave_for(&url, config.open_browser);
    }
    Ok(())
}

/// Routes a terminal event to the component that owns it. Returns the
/// core action it turns into, if any.
fn action_for_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    // The alert is modal: nothing else sees events while it is up
    if let Some(message) = &app.alert {
        return match (Alert { message }).handle_event(event) {
            Some(AlertEvent::Dismiss) => Some(Action::DismissAlert),
            None => None,
        };
    }

    match event {
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::SaveToService => Some(Action::Save),
        TuiEvent::CreatePlaylist => Some(Action::CreatePlaylist),
        TuiEvent::OpenLink => Some(Action::OpenLink),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.playlist.handle_event(event);
            None
        }
        _ => match tui.mood_input.handle_event(event)? {
            MoodEvent::Changed(text) => Some(Action::MoodChanged(text)),
            MoodEvent::Submit => Some(Action::Submit),
        },
    }
}

/// Applies an action and runs the effect it asks for.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    tx: &mpsc::Sender<Action>,
    open_browser: bool,
) -> Flow {
    let new_playlist = matches!(action, Action::PlaylistReceived(_));
    let effect = update(app, action);
    if new_playlist {
        tui.playlist.reset();
    }

    match effect {
        Effect::None => Flow::Continue,
        Effect::Quit => Flow::Quit,
        Effect::Redirect(url) => Flow::Redirect(url),
        Effect::FetchPlaylist { mood } => {
            let backend = app.backend.clone();
            spawn_action("playlist", tx.clone(), async move {
                match backend.generate_playlist(&mood).await {
                    Ok(response) => Action::PlaylistReceived(response),
                    Err(e) => Action::PlaylistFailed(e.to_string()),
                }
            });
            Flow::Continue
        }
        Effect::SaveToService { songs, mood } => {
            let backend = app.backend.clone();
            spawn_action("save", tx.clone(), async move {
                match backend.save_to_service(&songs, &mood).await {
                    Ok(login_url) => Action::SaveRedirect(login_url),
                    Err(e) => Action::SaveFailed(e.to_string()),
                }
            });
            Flow::Continue
        }
        Effect::CreatePlaylist {
            access_token,
            songs,
            mood,
        } => {
            let backend = app.backend.clone();
            spawn_action("create", tx.clone(), async move {
                match backend.create_playlist(&access_token, &songs, &mood).await {
                    Ok(url) => Action::PlaylistCreated(url),
                    Err(e) => Action::CreateFailed(e.to_string()),
                }
            });
            Flow::Continue
        }
        Effect::OpenUrl(url) => {
            if !open_browser || webbrowser::open(&url).is_err() {
                warn!("Could not open {} in a browser", url);
                app.status_message = url;
            }
            Flow::Continue
        }
    }
}

/// Runs a backend call in the background and sends its resulting action back to the loop.
fn spawn_action<F>(label: &'static str, tx: mpsc::Sender<Action>, request: F)
where
    F: Future<Output = Action> + Send + 'static,
{
    info!("Spawning {} request", label);
    tokio::spawn(async move {
        let action = request.await;
        if tx.send(action).is_err() {
            warn!("Failed to send {} result: receiver dropped", label);
        }
    });
}

/// Hands the user over to `url` once the terminal has been restored.
fn leave_for(url: &str, open_browser: bool) {
    info!("Leaving for {}", url);
    if open_browser && webbrowser::open(url).is_ok() {
        println!("Continue in your browser: {url}");
    } else {
        println!("Open this URL to continue: {url}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{song, test_app};

    #[test]
    fn test_typing_updates_mood() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let action = action_for_event(&app, &mut tui, &TuiEvent::InputChar('h'));
        assert_eq!(action, Some(Action::MoodChanged("h".into())));

        let (tx, _rx) = mpsc::channel();
        let flow = dispatch(&mut app, &mut tui, Action::MoodChanged("h".into()), &tx, false);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.mood, "h");
    }

    #[test]
    fn test_alert_is_modal() {
        let mut app = test_app();
        app.alert = Some("oops".into());
        let mut tui = TuiState::new();

        assert_eq!(action_for_event(&app, &mut tui, &TuiEvent::InputChar('x')), None);
        assert!(tui.mood_input.buffer.is_empty());
        assert_eq!(action_for_event(&app, &mut tui, &TuiEvent::SaveToService), None);
        assert_eq!(
            action_for_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::DismissAlert)
        );
        assert_eq!(
            action_for_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_shortcuts_map_to_actions() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            action_for_event(&app, &mut tui, &TuiEvent::SaveToService),
            Some(Action::Save)
        );
        assert_eq!(
            action_for_event(&app, &mut tui, &TuiEvent::CreatePlaylist),
            Some(Action::CreatePlaylist)
        );
        assert_eq!(
            action_for_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Quit)
        );
        assert_eq!(action_for_event(&app, &mut tui, &TuiEvent::ScrollDown), None);
    }

    #[test]
    fn test_redirect_ends_loop() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        let flow = dispatch(
            &mut app,
            &mut tui,
            Action::SaveRedirect("https://accounts.spotify.com/authorize".into()),
            &tx,
            false,
        );
        assert_eq!(
            flow,
            Flow::Redirect("https://accounts.spotify.com/authorize".into())
        );
    }

    #[test]
    fn test_open_link_without_browser_shows_url() {
        let mut app = test_app();
        app.playlist = vec![song("A", "B")];
        app.spotify_link = Some("https://open.spotify.com/playlist/abc".into());
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        let flow = dispatch(&mut app, &mut tui, Action::OpenLink, &tx, false);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.status_message, "https://open.spotify.com/playlist/abc");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_submit_round_trip_through_backend() {
        let mut app = test_app();
        app.mood = "happy".into();
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();

        let flow = dispatch(&mut app, &mut tui, Action::Submit, &tx, false);
        assert_eq!(flow, Flow::Continue);
        assert!(app.is_loading);

        let action = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap()
            .unwrap();
        dispatch(&mut app, &mut tui, action, &tx, false);
        assert!(!app.is_loading);
        assert_eq!(app.mood_color, "#E5E7EB");
    }
}
