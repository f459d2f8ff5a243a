//! # Core Application Logic
//!
//! MoodTune's client logic. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Effect (I/O asks)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Backend   │
//!            │  Adapter   │            │  Adapter   │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all client state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`color`]: Text contrast against the mood color
//! - [`launch`]: Parameters captured from the launch URL
//! - [`config`]: Config file and override resolution

pub mod action;
pub mod color;
pub mod config;
pub mod launch;
pub mod state;
