//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `NavBar`: Brand, menu labels (or hamburger) and the call-to-action slot
//! - `Dropdown`: One desktop panel, grid or sectioned
//! - `ContentBlocks`: The page sections under the bar
//! - `StatusBar`: Bottom line with the last effect and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames:
//! - `MobileMenu`: Accordion panel with its own scroll position
//!
//! ### Hit Registration
//!
//! Anything clickable or hoverable registers its screen rect in the
//! frame's [`HitMap`](crate::tui::ui::HitMap) while rendering. Input
//! handling hit-tests against the last drawn frame, so what the user
//! points at is exactly what they see.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── nav_bar.rs        (Top bar)
//! ├── dropdown.rs       (Desktop dropdown panel)
//! ├── mobile_menu.rs    (Mobile accordion panel)
//! ├── content_blocks.rs (Page sections)
//! └── status_bar.rs     (Bottom status line)
//! ```

pub mod content_blocks;
pub mod dropdown;
pub mod mobile_menu;
pub mod nav_bar;
mod status_bar;

pub use content_blocks::ContentBlocks;
pub use dropdown::Dropdown;
pub use mobile_menu::{MobileMenu, MobileMenuState};
pub use nav_bar::NavBar;
pub use status_bar::StatusBar;

use ratatui::style::{Color, Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Link hover/open color.
pub const ACCENT: Color = Color::Rgb(36, 92, 255);
/// Panel borders and separators.
pub const BORDER: Color = Color::DarkGray;

/// Below this opacity an element is not drawn at all.
const INVISIBLE: f32 = 0.05;

/// Terminal stand-in for CSS opacity: hidden, dimmed, or fully drawn.
pub fn faded(style: Style, opacity: f32) -> Option<Style> {
    if opacity < INVISIBLE {
        None
    } else if opacity < 1.0 {
        Some(style.add_modifier(Modifier::DIM))
    } else {
        Some(style)
    }
}

/// Truncate to `max_width` display columns, ending in "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
