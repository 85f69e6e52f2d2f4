//! # MobileMenu Component
//!
//! The collapsible panel under the mobile bar.
//!
//! ## Layout
//!
//! ```text
//! WHY CLIENTS HIRE US         ▾
//! EXPERIENCE AS A PLATFORM    ▾
//! RESOURCES                   ▴
//!     Blog
//!     Market Trend
//! VENTURE DESIGN LAB          ▾
//!
//! [ LET'S TALK ]
//! ```
//!
//! One header row per top-level label, the open section's links indented
//! underneath, then the call-to-action. The panel grows from zero rows to
//! its full height while opening (and shrinks while closing); an open or
//! closing section grows and shrinks the same way.
//!
//! ## Scrolling
//!
//! When the full accordion is taller than the body, it scrolls inside a
//! `ScrollView`. The offset lives in [`MobileMenuState`] so it survives
//! between frames; hit regions are registered in screen coordinates after
//! the offset is applied.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::controller::StaggeredItem;
use crate::core::motion;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::nav_bar::NavBar;
use crate::tui::components::{ACCENT, BORDER, faded, truncate_to_width};
use crate::tui::event::TuiEvent;
use crate::tui::ui::{HitMap, Target};

const ITEM_INDENT: &str = "    ";
const CHEVRON_CLOSED: &str = "▾";
const CHEVRON_OPEN: &str = "▴";

/// A section body that is open, opening or closing.
pub struct OpenSection<'a> {
    pub items: Vec<StaggeredItem<'a>>,
    /// Share of the body's rows that are revealed, in `[0, 1]`.
    pub height: f32,
    /// Time since the section opened; `None` while closing.
    pub item_elapsed: Option<Duration>,
}

impl OpenSection<'_> {
    fn visible_items(&self) -> usize {
        revealed(self.items.len(), self.height)
    }

    fn item_opacity(&self, item: &StaggeredItem) -> f32 {
        match self.item_elapsed {
            Some(elapsed) => motion::item_entrance(item.ordinal).progress(elapsed),
            None => self.height,
        }
    }
}

/// Rows of `total` shown at `progress`, rounding up so motion starts immediately.
fn revealed(total: usize, progress: f32) -> usize {
    ((total as f32 * progress.clamp(0.0, 1.0)).ceil() as usize).min(total)
}

/// Scroll position of the mobile panel.
/// Must be persisted in the parent TuiState.
pub struct MobileMenuState {
    pub scroll_state: ScrollViewState,
    /// Rows visible in the last frame
    pub viewport_height: u16,
    /// Rows of the whole accordion in the last frame
    pub content_height: u16,
}

impl Default for MobileMenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileMenuState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
            content_height: 0,
        }
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    /// Keep the offset inside the content.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        if self.offset() > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }
}

impl EventHandler for MobileMenuState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

enum Row<'s, 'a> {
    Header { label: &'a str, open: bool },
    Item { label: &'a str, item: &'s StaggeredItem<'a>, opacity: f32 },
    Blank,
    CallToAction,
}

pub struct MobileMenu<'a> {
    /// `(label, is_open, body)` per top-level entry, in bar order.
    pub sections: &'a [(&'a str, bool, Option<OpenSection<'a>>)],
    pub cta_label: &'a str,
    /// Panel reveal in `[0, 1]`.
    pub panel_progress: f32,
    pub state: &'a mut MobileMenuState,
    /// Only an open panel is interactive; a closing one is drawn but inert.
    pub hits: Option<&'a mut HitMap>,
}

impl<'a> MobileMenu<'a> {
    fn rows(&self) -> Vec<Row<'a, 'a>> {
        let mut rows = Vec::new();
        for (label, open, body) in self.sections {
            let label: &'a str = label;
            rows.push(Row::Header { label, open: *open });
            if let Some(body) = body {
                for item in body.items.iter().take(body.visible_items()) {
                    rows.push(Row::Item {
                        label,
                        item,
                        opacity: body.item_opacity(item),
                    });
                }
            }
        }
        rows.push(Row::Blank);
        rows.push(Row::CallToAction);
        rows
    }
}

impl Component for MobileMenu<'_> {
    /// `area` is the page body; the panel overlays it from the top.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self.rows();
        let total = rows.len() as u16;
        let shown = (revealed(rows.len(), self.panel_progress) as u16).min(area.height.saturating_sub(1));
        if shown == 0 {
            return;
        }

        let panel = Rect::new(area.x, area.y, area.width, shown + 1);
        frame.render_widget(Clear, panel);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(BORDER));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        self.state.viewport_height = inner.height;
        self.state.content_height = total;
        self.state.clamp_scroll();
        let offset = self.state.offset();

        // Leave the last column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let mut scroll_view = ScrollView::new(Size::new(content_width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let progress = self.panel_progress;
        let panel_style = |style: Style| faded(style, progress);
        for (index, row) in rows.iter().enumerate() {
            let y = index as u16;
            let line = Rect::new(0, y, content_width, 1);
            let target = match row {
                Row::Header { label, open } => {
                    let base = if *open {
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().add_modifier(Modifier::BOLD)
                    };
                    if let Some(style) = panel_style(base) {
                        let chevron = if *open { CHEVRON_OPEN } else { CHEVRON_CLOSED };
                        let text = truncate_to_width(label, content_width.saturating_sub(2) as usize);
                        scroll_view.render_widget(Span::styled(text, style), line);
                        let chevron_x = content_width.saturating_sub(1);
                        scroll_view.render_widget(Span::styled(chevron, style), Rect::new(chevron_x, y, 1, 1));
                    }
                    Some(Target::MobileSection(label.to_string()))
                }
                Row::Item { label, item, opacity } => {
                    if let Some(style) = faded(Style::default(), opacity.min(progress)) {
                        let text = truncate_to_width(&format!("{ITEM_INDENT}{}", item.text), content_width as usize);
                        scroll_view.render_widget(Span::styled(text, style), line);
                    }
                    Some(Target::Item {
                        label: label.to_string(),
                        item: item.text.to_string(),
                    })
                }
                Row::Blank => None,
                Row::CallToAction => {
                    if let Some(style) = panel_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)) {
                        let text = truncate_to_width(&NavBar::cta_text(self.cta_label), content_width as usize);
                        scroll_view.render_widget(Span::styled(text, style), line);
                    }
                    Some(Target::CallToAction)
                }
            };

            // Register only rows inside the viewport, in screen coordinates
            if let Some(target) = target
                && let Some(hits) = self.hits.as_deref_mut()
                && y >= offset
                && y < offset + inner.height
            {
                let screen = Rect::new(inner.x, inner.y + (y - offset), content_width, 1);
                hits.push(screen, target);
            }
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn body(items: &[&'static str], height: f32) -> OpenSection<'static> {
        OpenSection {
            items: items
                .iter()
                .enumerate()
                .map(|(ordinal, text)| StaggeredItem { text: *text, ordinal })
                .collect(),
            height,
            item_elapsed: Some(Duration::from_secs(1)),
        }
    }

    fn render(
        sections: &[(&str, bool, Option<OpenSection>)],
        progress: f32,
        state: &mut MobileMenuState,
        rows: u16,
    ) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(30, rows)).unwrap();
        let mut hits = HitMap::default();
        terminal
            .draw(|f| {
                MobileMenu {
                    sections,
                    cta_label: "LET'S TALK",
                    panel_progress: progress,
                    state: &mut *state,
                    hits: Some(&mut hits),
                }
                .render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, hits)
    }

    #[test]
    fn test_open_section_lists_items_under_its_header() {
        let sections = [
            ("A", true, Some(body(&["x", "y"], 1.0))),
            ("B", false, None),
        ];
        let mut state = MobileMenuState::new();
        let (text, hits) = render(&sections, 1.0, &mut state, 20);

        assert!(text.contains("    x"));
        assert!(text.contains(CHEVRON_OPEN));
        assert!(text.contains(CHEVRON_CLOSED));
        assert!(text.contains("[ LET'S TALK ]"));

        let a = hits.rect_of(&Target::MobileSection("A".into())).unwrap();
        let x = hits.rect_of(&Target::Item { label: "A".into(), item: "x".into() }).unwrap();
        let b = hits.rect_of(&Target::MobileSection("B".into())).unwrap();
        assert_eq!(x.y, a.y + 1);
        assert_eq!(b.y, a.y + 3);
        assert!(hits.rect_of(&Target::CallToAction).is_some());
    }

    #[test]
    fn test_section_height_reveals_items_progressively() {
        let sections = [("A", true, Some(body(&["x", "y", "z", "w"], 0.5)))];
        let mut state = MobileMenuState::new();
        let (_, hits) = render(&sections, 1.0, &mut state, 20);
        assert!(hits.rect_of(&Target::Item { label: "A".into(), item: "y".into() }).is_some());
        assert!(hits.rect_of(&Target::Item { label: "A".into(), item: "z".into() }).is_none());
    }

    #[test]
    fn test_collapsed_panel_draws_nothing() {
        let sections = [("A", false, None)];
        let mut state = MobileMenuState::new();
        let (text, hits) = render(&sections, 0.0, &mut state, 10);
        assert!(text.trim().is_empty());
        assert!(hits.rect_of(&Target::MobileSection("A".into())).is_none());
    }

    #[test]
    fn test_closing_panel_is_drawn_but_inert() {
        let sections = [("A", false, None)];
        let mut state = MobileMenuState::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|f| {
                MobileMenu {
                    sections: &sections,
                    cta_label: "LET'S TALK",
                    panel_progress: 0.9,
                    state: &mut state,
                    hits: None,
                }
                .render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.starts_with("A"));
        assert!(text.contains("[ LET'S TALK ]"));
    }

    #[test]
    fn test_scrolling_shifts_hit_regions() {
        let sections = [
            ("A", true, Some(body(&["1", "2", "3", "4", "5", "6"], 1.0))),
            ("B", false, None),
        ];
        let mut state = MobileMenuState::new();
        // 10 rows of content, 5 visible (plus the bottom border)
        let (_, hits) = render(&sections, 1.0, &mut state, 6);
        assert_eq!(hits.rect_of(&Target::MobileSection("A".into())).map(|r| r.y), Some(0));
        assert!(hits.rect_of(&Target::CallToAction).is_none());

        for _ in 0..20 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.offset(), 5);

        let (_, hits) = render(&sections, 1.0, &mut state, 6);
        assert!(hits.rect_of(&Target::MobileSection("A".into())).is_none());
        assert_eq!(hits.rect_of(&Target::CallToAction).map(|r| r.y), Some(4));
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut state = MobileMenuState::new();
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.offset(), 0);
    }
}
