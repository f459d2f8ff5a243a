//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Created each frame from app state:
//! - `Header`: title, tagline, status line
//! - `SaveBar`: save actions or the known playlist link
//! - `Alert`: modal message box
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `MoodInput`: single-line mood field (owns its buffer and cursor)
//! - `PlaylistView` / `PlaylistState`: scrollable song cards (state owns the scroll)
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── header.rs
//! ├── mood_input.rs
//! ├── playlist.rs
//! ├── save_bar.rs
//! └── alert.rs
//! ```

pub mod alert;
pub mod header;
pub mod mood_input;
pub mod playlist;
pub mod save_bar;

pub use alert::{Alert, AlertEvent};
pub use header::Header;
pub use mood_input::{MoodEvent, MoodInput};
pub use playlist::{PlaylistState, PlaylistView};
pub use save_bar::SaveBar;
