//! # StatusBar Component
//!
//! Bottom line showing the last navigation effect and the keys that apply
//! to the current surface.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"desktop | RESOURCES › Blog | ←/→ menus  Esc close  q quit"`
//! 2. **Default**: `"desktop | ←/→ menus  Esc close  q quit"`
//!
//! When the line is too narrow, the key hints are cut first so the status
//! message stays readable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;
use crate::tui::ui::Surface;

const DESKTOP_HINTS: &str = "←/→ menus  Esc close  q quit";
const MOBILE_HINTS: &str = "m menu  1-9 sections  Esc close  q quit";
const SEPARATOR: &str = " | ";

/// Bottom status line.
///
/// # Props
///
/// - `status_message`: Last effect (link activated, call-to-action) or a
///   configuration error surfaced while rendering
/// - `surface`: Which interaction surface is drawn, selecting the key hints
pub struct StatusBar {
    pub status_message: String,
    pub surface: Surface,
}

impl StatusBar {
    fn hints(&self) -> &'static str {
        match self.surface {
            Surface::Desktop => DESKTOP_HINTS,
            Surface::Mobile => MOBILE_HINTS,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut head = self.surface.name().to_string();
        if !self.status_message.is_empty() {
            head.push_str(SEPARATOR);
            head.push_str(&self.status_message);
        }
        let head = truncate_to_width(&head, area.width as usize);

        let room = (area.width as usize).saturating_sub(head.width() + SEPARATOR.width());
        let mut spans = vec![Span::styled(head, Style::default().add_modifier(Modifier::BOLD))];
        if room > 0 {
            let dim = Style::default().add_modifier(Modifier::DIM);
            spans.push(Span::styled(SEPARATOR, dim));
            spans.push(Span::styled(truncate_to_width(self.hints(), room), dim));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
