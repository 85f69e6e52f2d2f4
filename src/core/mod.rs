//! # Core Navigation Logic
//!
//! This module contains the navigation bar's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Model (menu config)  │
//!                    │  • Controller (state)   │
//!                    │  • Motion (timing data) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    Web     │
//!             │  Adapter   │          │  Adapter   │
//!             │ (ratatui)  │          │  (future)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `NavigationModel` — the static menu structure
//! - [`controller`]: `NavigationController` — open/closed state and derived views
//! - [`motion`]: transition durations, delays and the stagger rule
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum — everything that can happen in the app
//! - [`config`]: layered configuration (defaults → file → env → CLI)
//! - [`content`]: page sections shown under the bar
//! - [`error`]: `NavError`

pub mod action;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod model;
pub mod motion;
pub mod state;
