use std::time::Instant;

use log::error;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::LayoutMode;
use crate::core::error::NavError;
use crate::core::motion;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::presence::Mounted;
use crate::tui::components::mobile_menu::{self, MobileMenu};
use crate::tui::components::{ContentBlocks, Dropdown, NavBar, StatusBar};

/// Height of the top bar: one row of labels plus a bottom border.
pub const BAR_HEIGHT: u16 = 2;

/// Which interaction surface is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Desktop,
    Mobile,
}

impl Surface {
    pub fn name(self) -> &'static str {
        match self {
            Surface::Desktop => "desktop",
            Surface::Mobile => "mobile",
        }
    }
}

/// `bar_width` is what the desktop bar needs to fit every label; `auto`
/// stays on mobile below it even past the configured breakpoint.
pub fn surface_for(layout: LayoutMode, width: u16, desktop_min_width: u16, bar_width: u16) -> Surface {
    match layout {
        LayoutMode::Desktop => Surface::Desktop,
        LayoutMode::Mobile => Surface::Mobile,
        LayoutMode::Auto if width >= desktop_min_width.max(bar_width) => Surface::Desktop,
        LayoutMode::Auto => Surface::Mobile,
    }
}

/// Something on screen the pointer can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A top-level label in the desktop bar.
    Label(String),
    /// The body of an open desktop dropdown.
    Panel(String),
    Item { label: String, item: String },
    CallToAction,
    Hamburger,
    /// A top-level label row in the mobile accordion.
    MobileSection(String),
}

impl Target {
    /// The desktop hover container this target belongs to, if any.
    ///
    /// A dropdown is a child of its label's container, so pointing into the
    /// panel still counts as hovering the label.
    pub fn hover_label(&self) -> Option<&str> {
        match self {
            Target::Label(label) | Target::Panel(label) => Some(label),
            Target::Item { label, .. } => Some(label),
            _ => None,
        }
    }
}

/// Screen regions registered during the last draw, topmost last.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, target: Target) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    /// Topmost target under `(col, row)`.
    pub fn hit(&self, col: u16, row: u16) -> Option<&Target> {
        let position = Position { x: col, y: row };
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, target)| target)
    }

    /// Desktop labels drawn in the last frame, left to right.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().filter_map(|(_, target)| match target {
            Target::Label(label) => Some(label.as_str()),
            _ => None,
        })
    }

    pub fn rect_of(&self, target: &Target) -> Option<Rect> {
        self.regions.iter().find(|(_, t)| t == target).map(|(rect, _)| *rect)
    }
}

/// When the last item of a staggered list finishes fading in.
fn stagger_end(items: usize) -> std::time::Duration {
    match items.checked_sub(1) {
        Some(last) => {
            let t = motion::item_entrance(last);
            t.delay + t.duration
        }
        None => std::time::Duration::ZERO,
    }
}

/// Item clock for a mounted panel. A panel resumed mid-exit already shows
/// its items, so their stagger counts as played.
fn item_elapsed(mounted: &Mounted, items: usize, now: Instant) -> std::time::Duration {
    if mounted.from > 0.0 {
        stagger_end(items) + mounted.elapsed(now)
    } else {
        mounted.elapsed(now)
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let labels: Vec<&str> = app
        .controller
        .model()
        .bar_entries()
        .map(|e| e.label.as_str())
        .collect();
    let bar_width = NavBar::desktop_width(&app.brand, &labels, &app.cta_label);
    tui.surface = surface_for(tui.layout, area.width, tui.desktop_min_width, bar_width);
    tui.hits.clear();
    tui.sync_presence(app, now);

    let [bar_area, body_area, status_area] =
        Layout::vertical([Length(BAR_HEIGHT), Min(0), Length(1)]).areas(area);

    // Page sections sit underneath everything else
    let block_columns = match tui.surface {
        Surface::Desktop => 3,
        Surface::Mobile => 1,
    };
    let blocks_elapsed = now.saturating_duration_since(tui.mounted_at);
    ContentBlocks::new(&app.blocks, block_columns, blocks_elapsed).render(frame, body_area);
    tui.extend_animation(tui.mounted_at + ContentBlocks::settle_time(app.blocks.len()));

    NavBar {
        brand: &app.brand,
        labels: &labels,
        cta_label: &app.cta_label,
        surface: tui.surface,
        desktop_open: app.controller.state().desktop_open.as_deref(),
        mobile_menu_open: app.controller.is_mobile_menu_open(),
        hits: &mut tui.hits,
    }
    .render(frame, bar_area);

    let result = match tui.surface {
        Surface::Desktop => draw_dropdowns(frame, app, tui, body_area, now),
        Surface::Mobile => draw_mobile_menu(frame, app, tui, body_area, &labels, now),
    };
    report_config_error(tui, result);

    StatusBar {
        status_message: tui
            .config_error
            .clone()
            .unwrap_or_else(|| app.status_message.clone()),
        surface: tui.surface,
    }
    .render(frame, status_area);
}

/// Exiting panels first, then the open one on top of them.
fn draw_dropdowns(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    body: Rect,
    now: Instant,
) -> Result<(), NavError> {
    for leaving in tui.dropdown.exiting().to_vec() {
        let Some(anchor) = tui.hits.rect_of(&Target::Label(leaving.key.clone())) else {
            continue;
        };
        let view = app.controller.dropdown_for(&leaving.key)?;
        Dropdown {
            view: &view,
            anchor,
            opacity: tui.dropdown.exit_progress(&leaving, now),
            item_elapsed: None,
            hits: None,
        }
        .render(frame, body);
    }

    let Some(view) = app.controller.desktop_dropdown()? else {
        return Ok(());
    };
    let Some(mounted) = tui.dropdown.current().cloned() else {
        return Ok(());
    };
    let Some(anchor) = tui.hits.rect_of(&Target::Label(view.label.to_string())) else {
        return Ok(());
    };
    let elapsed = item_elapsed(&mounted, view.item_count(), now);
    tui.extend_animation(mounted.since + stagger_end(view.item_count()));
    Dropdown {
        view: &view,
        anchor,
        opacity: tui.dropdown.enter_progress(now),
        item_elapsed: Some(elapsed),
        hits: Some(&mut tui.hits),
    }
    .render(frame, body);
    Ok(())
}

fn draw_mobile_menu(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    body: Rect,
    labels: &[&str],
    now: Instant,
) -> Result<(), NavError> {
    // Panel height animates on open and close; nothing to draw once fully gone.
    let open = tui.mobile_panel.current().is_some();
    let panel_progress = if open {
        tui.mobile_panel.enter_progress(now)
    } else if let Some(leaving) = tui.mobile_panel.exiting().first() {
        tui.mobile_panel.exit_progress(leaving, now)
    } else {
        return Ok(());
    };

    let mut sections = Vec::new();
    for label in labels {
        let section = if let Some(mounted) = tui
            .mobile_section
            .current()
            .filter(|m| m.key == *label)
            .cloned()
        {
            let view = app.controller.mobile_section_for(label)?;
            tui.extend_animation(mounted.since + stagger_end(view.items.len()));
            let item_count = view.items.len();
            Some(mobile_menu::OpenSection {
                items: view.items,
                height: tui.mobile_section.enter_progress(now),
                item_elapsed: Some(item_elapsed(&mounted, item_count, now)),
            })
        } else if let Some(leaving) = tui
            .mobile_section
            .exiting()
            .iter()
            .find(|m| m.key == *label)
            .cloned()
        {
            let view = app.controller.mobile_section_for(label)?;
            Some(mobile_menu::OpenSection {
                items: view.items,
                height: tui.mobile_section.exit_progress(&leaving, now),
                item_elapsed: None,
            })
        } else {
            None
        };
        sections.push((*label, app.controller.is_mobile_section_open(label), section));
    }

    MobileMenu {
        sections: &sections,
        cta_label: &app.cta_label,
        panel_progress,
        state: &mut tui.mobile_menu,
        hits: if open { Some(&mut tui.hits) } else { None },
    }
    .render(frame, body);
    Ok(())
}

fn report_config_error(tui: &mut TuiState, result: Result<(), NavError>) {
    match result {
        Ok(()) => tui.config_error = None,
        Err(e) => {
            let message = e.to_string();
            if tui.config_error.as_deref() != Some(message.as_str()) {
                error!("Configuration error while rendering: {}", message);
            }
            tui.config_error = Some(message);
        }
    }
}
