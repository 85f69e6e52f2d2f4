//! # ContentBlocks Component
//!
//! The page sections under the bar, drawn as a grid of bordered cards.
//!
//! Each card fades in on its own schedule (`ContentBlock::entrance`), so the
//! grid assembles left to right, top to bottom. Cards are rendered before the
//! bar and its panels, which then draw over them.

use std::time::Duration;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::content::ContentBlock;
use crate::tui::component::Component;
use crate::tui::components::{ACCENT, BORDER, faded};

/// Borders (2) + horizontal padding (2).
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Borders (2) + title row.
const VERTICAL_OVERHEAD: u16 = 3;
/// Blank columns between cards.
const GUTTER: u16 = 1;

pub struct ContentBlocks<'a> {
    blocks: &'a [ContentBlock],
    columns: u16,
    /// Time since the page was mounted.
    elapsed: Duration,
}

impl<'a> ContentBlocks<'a> {
    pub fn new(blocks: &'a [ContentBlock], columns: u16, elapsed: Duration) -> Self {
        Self {
            blocks,
            columns: columns.max(1),
            elapsed,
        }
    }

    /// How long after mount the last of `count` blocks finishes its entrance.
    pub fn settle_time(count: usize) -> Duration {
        match count.checked_sub(1) {
            Some(last) => {
                let t = ContentBlock::entrance(last);
                t.delay + t.duration
            }
            None => Duration::ZERO,
        }
    }
}

fn wrap_body(body: &str, width: u16) -> Vec<String> {
    let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
    if content_width == 0 || body.trim().is_empty() {
        return Vec::new();
    }
    let options = textwrap::Options::new(content_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(body.trim(), options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// One card.
struct Card<'a> {
    block: &'a ContentBlock,
    lines: Vec<String>,
    opacity: f32,
}

impl Card<'_> {
    /// Rows the card needs at `width`, including borders.
    fn calculate_height(block: &ContentBlock, width: u16) -> u16 {
        let image = u16::from(block.image.is_some());
        wrap_body(&block.body, width).len() as u16 + image + VERTICAL_OVERHEAD
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(border_style) = faded(Style::default().fg(BORDER), self.opacity) else {
            return;
        };
        let text_style = faded(Style::default(), self.opacity).unwrap_or_default();
        let title_style = text_style.fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::styled(self.block.title.clone(), title_style)];
        if let Some(image) = &self.block.image {
            lines.push(Line::styled(
                format!("[image: {image}]"),
                text_style.add_modifier(Modifier::ITALIC),
            ));
        }
        lines.extend(self.lines.into_iter().map(|l| Line::styled(l, text_style)));

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            )
            .render(area, buf);
    }
}

impl Component for ContentBlocks<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.blocks.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }
        let columns = self.columns.min(area.width);
        let card_width = area.width.saturating_sub(GUTTER * (columns - 1)) / columns;

        let mut y = area.y + 1;
        for (row, chunk) in self.blocks.chunks(columns as usize).enumerate() {
            let row_height = chunk
                .iter()
                .map(|b| Card::calculate_height(b, card_width))
                .max()
                .unwrap_or(0);
            if y >= area.bottom() {
                break;
            }
            let height = row_height.min(area.bottom() - y);

            for (col, block) in chunk.iter().enumerate() {
                let index = row * columns as usize + col;
                let x = area.x + col as u16 * (card_width + GUTTER);
                let card = Card {
                    block,
                    lines: wrap_body(&block.body, card_width),
                    opacity: ContentBlock::entrance(index).progress(self.elapsed),
                };
                frame.render_widget(card, Rect::new(x, y, card_width, height));
            }
            y += row_height + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(blocks: &[ContentBlock], columns: u16, elapsed: Duration) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|f| {
                ContentBlocks::new(blocks, columns, elapsed).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_settle_time_covers_last_block() {
        assert_eq!(ContentBlocks::settle_time(0), Duration::ZERO);
        assert_eq!(ContentBlocks::settle_time(3), Duration::from_millis(600));
    }

    #[test]
    fn test_card_height_counts_wrapped_body_and_image() {
        let mut block = ContentBlock::new("T", "one two three four");
        // 10 wide leaves 6 columns of text: "one", "two", "three", "four"
        assert_eq!(Card::calculate_height(&block, 10), 4 + VERTICAL_OVERHEAD);
        block.image = Some("hero.png".into());
        assert_eq!(Card::calculate_height(&block, 10), 5 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_settled_grid_shows_every_title() {
        let blocks = crate::core::content::default_blocks();
        let text = render(&blocks, 3, Duration::from_secs(2));
        for title in ["Design", "Technology", "Innovation"] {
            assert!(text.contains(title), "missing {title}");
        }
    }

    #[test]
    fn test_blocks_fade_in_one_after_another() {
        let blocks = vec![ContentBlock::new("First", "a"), ContentBlock::new("Second", "b")];
        // 40ms: block 0 is entering, block 1 waits for its 50ms delay
        let text = render(&blocks, 2, Duration::from_millis(40));
        assert!(text.contains("First"));
        assert!(!text.contains("Second"));
    }
}
