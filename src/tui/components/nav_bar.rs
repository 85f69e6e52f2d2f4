//! # NavBar Component
//!
//! The sticky top bar.
//!
//! - **Desktop**: brand on the left, one `LABEL ▾` per bar entry, and the
//!   call-to-action button at the far right. Each label registers a
//!   [`Target::Label`] region; the dropdown anchors itself under it.
//! - **Mobile**: brand on the left and a hamburger button on the right that
//!   turns into a close glyph while the panel is open.
//!
//! Labels that don't fit the width are dropped from the right rather than
//! wrapped; the bar is always exactly one row plus its bottom border.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::{ACCENT, BORDER};
use crate::tui::ui::{HitMap, Surface, Target};

/// Columns between adjacent labels.
const LABEL_GAP: u16 = 3;
const CHEVRON: &str = " ▾";
const HAMBURGER: &str = "≡";
const CLOSE: &str = "×";

pub struct NavBar<'a> {
    pub brand: &'a str,
    pub labels: &'a [&'a str],
    pub cta_label: &'a str,
    pub surface: Surface,
    pub desktop_open: Option<&'a str>,
    pub mobile_menu_open: bool,
    pub hits: &'a mut HitMap,
}

impl NavBar<'_> {
    /// Button text for the call-to-action slot.
    pub fn cta_text(label: &str) -> String {
        format!("[ {label} ]")
    }

    /// Columns the desktop bar needs to show every label next to the brand and CTA.
    pub fn desktop_width(brand: &str, labels: &[&str], cta_label: &str) -> u16 {
        let labels_width: usize = labels.iter().map(|l| l.width() + CHEVRON.width()).sum();
        let gaps = LABEL_GAP as usize * (2 + labels.len().saturating_sub(1));
        let total = brand.width() + gaps + labels_width + Self::cta_text(cta_label).width() + 1;
        u16::try_from(total).unwrap_or(u16::MAX)
    }

    fn render_desktop(&mut self, frame: &mut Frame, row: Rect) {
        let cta = Self::cta_text(self.cta_label);
        let cta_width = cta.width() as u16;
        let right_edge = row.right().saturating_sub(cta_width + 1);

        let mut x = row.x + self.brand.width() as u16 + LABEL_GAP * 2;
        for label in self.labels {
            let text = format!("{label}{CHEVRON}");
            let width = text.width() as u16;
            if x + width > right_edge {
                break;
            }
            let rect = Rect::new(x, row.y, width, 1);
            let style = if self.desktop_open == Some(*label) {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            frame.render_widget(Span::styled(text, style), rect);
            self.hits.push(rect, Target::Label(label.to_string()));
            x += width + LABEL_GAP;
        }

        if cta_width < row.width {
            let rect = Rect::new(right_edge, row.y, cta_width, 1);
            frame.render_widget(
                Span::styled(cta, Style::default().add_modifier(Modifier::BOLD)),
                rect,
            );
            self.hits.push(rect, Target::CallToAction);
        }
    }

    fn render_mobile(&mut self, frame: &mut Frame, row: Rect) {
        let glyph = if self.mobile_menu_open { CLOSE } else { HAMBURGER };
        // Wider than the glyph so it is easy to hit
        let rect = Rect::new(row.right().saturating_sub(4), row.y, 3.min(row.width), 1);
        frame.render_widget(
            Span::styled(format!(" {glyph} "), Style::default().add_modifier(Modifier::BOLD)),
            rect,
        );
        self.hits.push(rect, Target::Hamburger);
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(BORDER));
        let row = block.inner(area);
        frame.render_widget(block, area);
        if row.height == 0 {
            return;
        }

        let brand_rect = Rect::new(row.x + 1, row.y, (self.brand.width() as u16).min(row.width), 1);
        frame.render_widget(
            Span::styled(self.brand, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            brand_rect,
        );

        match self.surface {
            Surface::Desktop => self.render_desktop(frame, row),
            Surface::Mobile => self.render_mobile(frame, row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_bar(surface: Surface, width: u16, open: Option<&str>, mobile_open: bool) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(width, 2)).unwrap();
        let mut hits = HitMap::default();
        let labels = ["ALPHA", "BETA"];
        terminal
            .draw(|f| {
                NavBar {
                    brand: "ACME",
                    labels: &labels,
                    cta_label: "LET'S TALK",
                    surface,
                    desktop_open: open,
                    mobile_menu_open: mobile_open,
                    hits: &mut hits,
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
    fn test_desktop_bar_shows_labels_and_cta() {
        let (text, hits) = render_bar(Surface::Desktop, 80, None, false);
        assert!(text.contains("ACME"));
        assert!(text.contains("ALPHA ▾"));
        assert!(text.contains("BETA ▾"));
        assert!(text.contains("[ LET'S TALK ]"));
        assert!(hits.rect_of(&Target::Label("ALPHA".into())).is_some());
        assert!(hits.rect_of(&Target::CallToAction).is_some());
        assert!(hits.rect_of(&Target::Hamburger).is_none());
    }

    #[test]
    fn test_labels_that_do_not_fit_are_dropped() {
        let (text, hits) = render_bar(Surface::Desktop, 34, None, false);
        assert!(text.contains("ALPHA"));
        assert!(!text.contains("BETA"));
        assert!(hits.rect_of(&Target::Label("BETA".into())).is_none());
    }

    #[test]
    fn test_desktop_width_is_exactly_enough() {
        let labels = ["ALPHA", "BETA"];
        let needed = NavBar::desktop_width("ACME", &labels, "LET'S TALK");
        let (_, hits) = render_bar(Surface::Desktop, needed, None, false);
        assert!(hits.rect_of(&Target::Label("BETA".into())).is_some());
        let (_, hits) = render_bar(Surface::Desktop, needed - 1, None, false);
        assert!(hits.rect_of(&Target::Label("BETA".into())).is_none());
    }

    #[test]
    fn test_label_rects_do_not_overlap() {
        let (_, hits) = render_bar(Surface::Desktop, 80, Some("ALPHA"), false);
        let alpha = hits.rect_of(&Target::Label("ALPHA".into())).unwrap();
        let beta = hits.rect_of(&Target::Label("BETA".into())).unwrap();
        assert!(alpha.right() < beta.x);
    }

    #[test]
    fn test_mobile_bar_toggles_glyph() {
        let (closed, hits) = render_bar(Surface::Mobile, 30, None, false);
        assert!(closed.contains(HAMBURGER));
        assert!(!closed.contains("ALPHA"));
        assert!(hits.rect_of(&Target::Hamburger).is_some());

        let (open, _) = render_bar(Surface::Mobile, 30, None, true);
        assert!(open.contains(CLOSE));
    }
}
