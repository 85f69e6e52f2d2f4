//! # Dropdown Component
//!
//! One desktop dropdown panel, centered under its label.
//!
//! The panel is a transient component built from a [`DropdownView`]:
//! - `Grid` views fill `columns` columns row by row.
//! - `Sections` views get one column per section: a muted title row, the
//!   section's links, then its nested group indented behind a rule.
//!
//! Fading is approximated with the terminal's DIM attribute. Items of an
//! entering panel appear one by one following their stagger delay; items of
//! an exiting panel fade with the panel.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Clear, Padding};

use crate::core::controller::{DropdownLayout, DropdownView, SectionView, StaggeredItem};
use crate::core::motion;
use crate::tui::component::Component;
use crate::tui::components::{BORDER, faded, truncate_to_width};
use crate::tui::ui::{HitMap, Target};

/// Border (1) + padding (1) on each side.
const FRAME_OVERHEAD: u16 = 4;
/// Prefix for nested-group links.
const NESTED_RULE: &str = "│ ";

pub struct Dropdown<'a> {
    pub view: &'a DropdownView<'a>,
    /// The label's rect in the bar.
    pub anchor: Rect,
    /// Panel opacity in `[0, 1]`.
    pub opacity: f32,
    /// Time since mount for an entering panel; `None` while exiting.
    pub item_elapsed: Option<Duration>,
    /// Only the open panel is interactive.
    pub hits: Option<&'a mut HitMap>,
}

/// Rows of content inside the panel, excluding borders and padding.
pub fn content_height(view: &DropdownView) -> u16 {
    match &view.layout {
        DropdownLayout::Grid { columns, items } => {
            let columns = (*columns).max(1) as usize;
            items.len().div_ceil(columns) as u16
        }
        DropdownLayout::Sections(sections) => {
            sections.iter().map(section_height).max().unwrap_or(0)
        }
    }
}

fn section_height(section: &SectionView) -> u16 {
    let mut rows = 1 + section.items.len();
    if !section.nested.is_empty() {
        rows += 1; // gap
        if section.nested_title.is_some_and(|t| !t.is_empty()) {
            rows += 1;
        }
        rows += section.nested.len();
    }
    rows as u16
}

/// Screen rect of the panel: centered under the anchor, kept inside `bounds`.
pub fn panel_rect(view: &DropdownView, anchor: Rect, bounds: Rect) -> Rect {
    let width = view.width.columns().min(bounds.width);
    let height = (content_height(view) + FRAME_OVERHEAD).min(bounds.height);
    let center = anchor.x + anchor.width / 2;
    let x = center
        .saturating_sub(width / 2)
        .clamp(bounds.x, bounds.right().saturating_sub(width));
    Rect::new(x, bounds.y, width, height)
}

impl Dropdown<'_> {
    fn item_opacity(&self, item: &StaggeredItem) -> f32 {
        match self.item_elapsed {
            Some(elapsed) => motion::item_entrance(item.ordinal)
                .progress(elapsed)
                .min(self.opacity),
            None => self.opacity,
        }
    }

    fn render_item(&mut self, frame: &mut Frame, item: &StaggeredItem, rect: Rect, prefix: &str) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        // Links are clickable from mount, even before they fade in
        if let Some(hits) = self.hits.as_deref_mut() {
            hits.push(
                rect,
                Target::Item {
                    label: self.view.label.to_string(),
                    item: item.text.to_string(),
                },
            );
        }
        let Some(style) = faded(Style::default(), self.item_opacity(item)) else {
            return;
        };
        let text = truncate_to_width(&format!("{prefix}{}", item.text), rect.width as usize);
        frame.render_widget(Span::styled(text, style), rect);
    }

    fn render_section(&mut self, frame: &mut Frame, section: &SectionView, column: Rect) {
        let mut y = column.y;
        let bottom = column.bottom();
        let title_style = Style::default().fg(Color::Gray).add_modifier(Modifier::DIM);

        if let Some(style) = faded(title_style, self.opacity) {
            let title = truncate_to_width(&section.title.to_uppercase(), column.width as usize);
            frame.render_widget(Span::styled(title, style), Rect::new(column.x, y, column.width, 1));
        }
        y += 1;

        for item in &section.items {
            if y >= bottom {
                return;
            }
            self.render_item(frame, item, Rect::new(column.x, y, column.width, 1), "");
            y += 1;
        }

        if section.nested.is_empty() {
            return;
        }
        y += 1;
        if let Some(title) = section.nested_title.filter(|t| !t.is_empty()) {
            if y < bottom
                && let Some(style) = faded(title_style, self.opacity)
            {
                let text = truncate_to_width(&format!("{NESTED_RULE}{title}"), column.width as usize);
                frame.render_widget(Span::styled(text, style), Rect::new(column.x, y, column.width, 1));
            }
            y += 1;
        }
        for item in &section.nested {
            if y >= bottom {
                return;
            }
            self.render_item(frame, item, Rect::new(column.x, y, column.width, 1), NESTED_RULE);
            y += 1;
        }
    }
}

impl Component for Dropdown<'_> {
    /// `area` is the page body; the panel overlays its top edge.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = panel_rect(self.view, self.anchor, area);
        if panel.width == 0 || panel.height == 0 {
            return;
        }
        if let Some(hits) = self.hits.as_deref_mut() {
            hits.push(panel, Target::Panel(self.view.label.to_string()));
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::uniform(1));
        let inner = block.inner(panel);
        if let Some(border_style) = faded(Style::default().fg(BORDER), self.opacity) {
            frame.render_widget(Clear, panel);
            frame.render_widget(block.border_style(border_style), panel);
        }

        let view = self.view;
        match &view.layout {
            DropdownLayout::Grid { columns, items } => {
                let columns = (*columns).max(1);
                let col_width = inner.width / columns;
                for (index, item) in items.iter().enumerate() {
                    let row = index as u16 / columns;
                    let col = index as u16 % columns;
                    if row >= inner.height {
                        break;
                    }
                    let rect = Rect::new(
                        inner.x + col * col_width,
                        inner.y + row,
                        col_width.saturating_sub(1),
                        1,
                    );
                    self.render_item(frame, item, rect, "");
                }
            }
            DropdownLayout::Sections(sections) => {
                let count = sections.len().max(1) as u16;
                let col_width = inner.width / count;
                for (index, section) in sections.iter().enumerate() {
                    let column = Rect::new(
                        inner.x + index as u16 * col_width,
                        inner.y,
                        col_width.saturating_sub(2),
                        inner.height,
                    );
                    self.render_section(frame, section, column);
                }
            }
        }
    }
}
