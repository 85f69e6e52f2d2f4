//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the bar, and
//! translates mouse and keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Hover Synthesis
//!
//! Terminals report pointer positions, not enter/leave events. Every move
//! is hit-tested against the last drawn frame; when the hovered label
//! container changes, the old one gets a `PointerLeave` and the new one a
//! `PointerEnter`, in that order.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a panel, section or block is mid-transition): draws every
//!   ~33ms so fades and height changes look continuous.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
pub mod components;
mod event;
pub mod presence;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::LayoutMode;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::motion::{DROPDOWN_ENTER, DROPDOWN_EXIT, MOBILE_PANEL, MOBILE_SECTION_ENTER, MOBILE_SECTION_EXIT};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::MobileMenuState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::presence::Presence;
use crate::tui::ui::{HitMap, Surface, Target};

/// Presence key for the mobile panel as a whole.
const MOBILE_PANEL_KEY: &str = "menu";

const ANIMATING_POLL: Duration = Duration::from_millis(33);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    pub layout: LayoutMode,
    pub desktop_min_width: u16,
    /// Surface drawn in the last frame
    pub surface: Surface,
    /// Clickable regions of the last frame
    pub hits: HitMap,
    /// Desktop hover container under the pointer
    pub hovered: Option<String>,
    // Mount/exit tracking per animated surface
    pub dropdown: Presence,
    pub mobile_panel: Presence,
    pub mobile_section: Presence,
    pub mobile_menu: MobileMenuState,
    /// When the page was mounted (content block entrance)
    pub mounted_at: Instant,
    /// Latest instant any running transition finishes
    pub settle_at: Option<Instant>,
    /// Configuration error surfaced while rendering
    pub config_error: Option<String>,
}

impl TuiState {
    pub fn new(layout: LayoutMode, desktop_min_width: u16) -> Self {
        Self {
            layout,
            desktop_min_width,
            surface: Surface::Desktop,
            hits: HitMap::default(),
            hovered: None,
            dropdown: Presence::new(DROPDOWN_ENTER, DROPDOWN_EXIT),
            mobile_panel: Presence::new(MOBILE_PANEL, MOBILE_PANEL),
            mobile_section: Presence::new(MOBILE_SECTION_ENTER, MOBILE_SECTION_EXIT),
            mobile_menu: MobileMenuState::new(),
            mounted_at: Instant::now(),
            settle_at: None,
            config_error: None,
        }
    }

    /// Bring every presence tracker in line with the controller.
    pub fn sync_presence(&mut self, app: &App, now: Instant) {
        let state = app.controller.state();
        self.dropdown.sync(state.desktop_open.as_deref(), now);
        self.mobile_panel
            .sync(state.mobile_menu_open.then_some(MOBILE_PANEL_KEY), now);
        self.mobile_section.sync(state.mobile_open.as_deref(), now);

        let settles = [
            self.dropdown.settles_at(),
            self.mobile_panel.settles_at(),
            self.mobile_section.settles_at(),
        ];
        for at in settles.into_iter().flatten() {
            self.extend_animation(at);
        }
    }

    pub fn extend_animation(&mut self, until: Instant) {
        self.settle_at = Some(self.settle_at.map_or(until, |at| at.max(until)));
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.settle_at.is_some_and(|at| now < at)
    }

    /// Translate a terminal event into core actions, updating hover and scroll state.
    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Vec<Action> {
        match event {
            TuiEvent::Quit => vec![Action::Quit],
            TuiEvent::Resize => Vec::new(),
            TuiEvent::MouseMove(col, row) => {
                if self.surface != Surface::Desktop {
                    return Vec::new();
                }
                let next = self
                    .hits
                    .hit(*col, *row)
                    .and_then(Target::hover_label)
                    .map(str::to_string);
                self.track_hover(next)
            }
            TuiEvent::MouseClick(col, row) => match self.hits.hit(*col, *row).cloned() {
                Some(Target::Item { label, item }) => vec![Action::ActivateItem { label, item }],
                Some(Target::CallToAction) => vec![Action::CallToAction],
                Some(Target::Hamburger) => vec![Action::ToggleMobileMenu],
                // Sections only toggle inside an expanded panel
                Some(Target::MobileSection(label)) if app.controller.is_mobile_menu_open() => {
                    vec![Action::ToggleMobileSection(label)]
                }
                Some(Target::MobileSection(_)) => Vec::new(),
                // Touch screens click without hovering first
                Some(Target::Label(label)) => self.track_hover(Some(label)),
                Some(Target::Panel(_)) | None => Vec::new(),
            },
            TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
                self.mobile_menu.handle_event(event);
                Vec::new()
            }
            TuiEvent::PrevEntry | TuiEvent::NextEntry => {
                // Only labels that made it into the bar can be stepped to
                let labels: Vec<String> = self.hits.labels().map(str::to_string).collect();
                let current = app
                    .controller
                    .state()
                    .desktop_open
                    .as_deref()
                    .and_then(|open| labels.iter().position(|l| l == open));
                let next = step_index(current, labels.len(), matches!(event, TuiEvent::NextEntry));
                match next.and_then(|i| labels.get(i)) {
                    Some(label) => self.track_hover(Some(label.clone())),
                    None => Vec::new(),
                }
            }
            TuiEvent::Escape => {
                if let Some(open) = &app.controller.state().desktop_open {
                    self.hovered = None;
                    vec![Action::PointerLeave(open.clone())]
                } else if app.controller.is_mobile_menu_open() {
                    vec![Action::ToggleMobileMenu]
                } else {
                    Vec::new()
                }
            }
            TuiEvent::ToggleMenu => vec![Action::ToggleMobileMenu],
            TuiEvent::Section(index) => {
                if !app.controller.is_mobile_menu_open() {
                    return Vec::new();
                }
                app.controller
                    .model()
                    .bar_entries()
                    .nth(*index)
                    .map(|e| vec![Action::ToggleMobileSection(e.label.clone())])
                    .unwrap_or_default()
            }
        }
    }

    fn track_hover(&mut self, next: Option<String>) -> Vec<Action> {
        let actions = hover_transition(self.hovered.as_deref(), next.as_deref());
        if !actions.is_empty() {
            debug!("hover {:?} -> {:?}", self.hovered, next);
        }
        self.hovered = next;
        actions
    }
}

/// Leave the old hover container, then enter the new one.
pub fn hover_transition(prev: Option<&str>, next: Option<&str>) -> Vec<Action> {
    if prev == next {
        return Vec::new();
    }
    let mut actions = Vec::new();
    if let Some(prev) = prev {
        actions.push(Action::PointerLeave(prev.to_string()));
    }
    if let Some(next) = next {
        actions.push(Action::PointerEnter(next.to_string()));
    }
    actions
}

/// Wrapping step through `len` entries; starts at the first or last when nothing is open.
fn step_index(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    })
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.layout, config.desktop_min_width);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut last_surface = None;

    loop {
        let now = Instant::now();
        let animating = tui.is_animating(now);

        if needs_redraw || animating {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
            if last_surface != Some(tui.surface) {
                info!("Surface: {}", tui.surface.name());
                last_surface = Some(tui.surface);
            }
        }

        let timeout = if tui.is_animating(Instant::now()) {
            ANIMATING_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in tui.handle_event(&event, &app) {
                match update(&mut app, action) {
                    Effect::None => {}
                    Effect::Navigate { label, item } => {
                        info!("Navigate: {} › {} (#)", label, item);
                    }
                    Effect::CallToAction => info!("Call to action: {}", app.cta_label),
                    Effect::Quit => should_quit = true,
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_CTA_LABEL;
    use crate::core::model::NavigationModel;
    use crate::test_support::test_app;
    use crate::tui::components::NavBar;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn desktop_tui() -> TuiState {
        TuiState::new(LayoutMode::Desktop, 100)
    }

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> Terminal<TestBackend> {
        draw_at(app, tui, width, height, Instant::now())
    }

    fn draw_at(app: &App, tui: &mut TuiState, width: u16, height: u16, now: Instant) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui, now)).unwrap();
        terminal
    }

    fn apply(app: &mut App, actions: Vec<Action>) {
        for action in actions {
            update(app, action);
        }
    }

    #[test]
    fn test_hover_transition_orders_leave_before_enter() {
        assert_eq!(
            hover_transition(Some("A"), Some("B")),
            vec![Action::PointerLeave("A".into()), Action::PointerEnter("B".into())]
        );
        assert_eq!(hover_transition(None, Some("A")), vec![Action::PointerEnter("A".into())]);
        assert_eq!(hover_transition(Some("A"), None), vec![Action::PointerLeave("A".into())]);
        assert!(hover_transition(Some("A"), Some("A")).is_empty());
    }

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(None, 3, true), Some(0));
        assert_eq!(step_index(None, 3, false), Some(2));
        assert_eq!(step_index(Some(2), 3, true), Some(0));
        assert_eq!(step_index(Some(0), 3, false), Some(2));
        assert_eq!(step_index(None, 0, true), None);
    }

    #[test]
    fn test_pointer_over_label_opens_and_moving_away_closes() {
        let mut app = test_app();
        let mut tui = desktop_tui();
        draw(&app, &mut tui, 120, 30);

        let a = tui.hits.rect_of(&Target::Label("A".into())).unwrap();
        let actions = tui.handle_event(&TuiEvent::MouseMove(a.x, a.y), &app);
        apply(&mut app, actions);
        assert!(app.controller.is_desktop_open("A"));

        // Far below the panel
        let actions = tui.handle_event(&TuiEvent::MouseMove(0, 29), &app);
        apply(&mut app, actions);
        assert!(!app.controller.is_desktop_open("A"));
    }

    #[test]
    fn test_pointer_inside_open_panel_keeps_it_open() {
        let mut app = test_app();
        let mut tui = desktop_tui();
        draw(&app, &mut tui, 120, 30);
        let a = tui.hits.rect_of(&Target::Label("A".into())).unwrap();
        let actions = tui.handle_event(&TuiEvent::MouseMove(a.x, a.y), &app);
        apply(&mut app, actions);

        draw(&app, &mut tui, 120, 30);
        let panel = tui.hits.rect_of(&Target::Panel("A".into())).unwrap();
        let actions = tui.handle_event(&TuiEvent::MouseMove(panel.x + 1, panel.y + 1), &app);
        assert!(actions.is_empty());
        assert!(app.controller.is_desktop_open("A"));
    }

    #[test]
    fn test_reopening_during_exit_keeps_items_showing() {
        let mut app = test_app();
        let mut tui = desktop_tui();
        let start = Instant::now();
        update(&mut app, Action::PointerEnter("A".into()));
        draw_at(&app, &mut tui, 120, 30, start);
        draw_at(&app, &mut tui, 120, 30, start + Duration::from_millis(400));

        update(&mut app, Action::PointerLeave("A".into()));
        draw_at(&app, &mut tui, 120, 30, start + Duration::from_millis(420));
        update(&mut app, Action::PointerEnter("A".into()));
        let terminal = draw_at(&app, &mut tui, 120, 30, start + Duration::from_millis(440));

        let mounted = tui.dropdown.current().unwrap();
        assert!(mounted.from > 0.5);
        let x = tui.hits.rect_of(&Target::Item { label: "A".into(), item: "x".into() }).unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = (x.x..x.right()).map(|col| buffer[(col, x.y)].symbol()).collect();
        assert!(row.contains('x'));
    }

    #[test]
    fn test_keyboard_steps_through_entries() {
        let mut app = test_app();
        let mut tui = desktop_tui();
        draw(&app, &mut tui, 120, 30);
        let actions = tui.handle_event(&TuiEvent::NextEntry, &app);
        apply(&mut app, actions);
        assert!(app.controller.is_desktop_open("A"));

        let actions = tui.handle_event(&TuiEvent::NextEntry, &app);
        apply(&mut app, actions);
        assert!(app.controller.is_desktop_open("B"));

        let actions = tui.handle_event(&TuiEvent::Escape, &app);
        apply(&mut app, actions);
        assert_eq!(app.controller.state().desktop_open, None);
    }

    #[test]
    fn test_mobile_keys_toggle_panel_and_sections() {
        let mut app = test_app();
        let mut tui = TuiState::new(LayoutMode::Mobile, 100);

        // Sections are ignored while the panel is collapsed
        assert!(tui.handle_event(&TuiEvent::Section(0), &app).is_empty());

        let actions = tui.handle_event(&TuiEvent::ToggleMenu, &app);
        apply(&mut app, actions);
        let actions = tui.handle_event(&TuiEvent::Section(1), &app);
        apply(&mut app, actions);
        assert!(app.controller.is_mobile_section_open("B"));

        let actions = tui.handle_event(&TuiEvent::Escape, &app);
        apply(&mut app, actions);
        assert!(!app.controller.is_mobile_menu_open());
        assert_eq!(app.controller.state().mobile_open, None);
    }

    #[test]
    fn test_hamburger_click_opens_mobile_menu() {
        let mut app = test_app();
        let mut tui = TuiState::new(LayoutMode::Mobile, 100);
        draw(&app, &mut tui, 40, 20);

        let burger = tui.hits.rect_of(&Target::Hamburger).unwrap();
        let actions = tui.handle_event(&TuiEvent::MouseClick(burger.x, burger.y), &app);
        apply(&mut app, actions);
        assert!(app.controller.is_mobile_menu_open());

        // Pointer moves never hover on the mobile surface
        assert!(tui.handle_event(&TuiEvent::MouseMove(burger.x, burger.y), &app).is_empty());
    }

    #[test]
    fn test_closing_mobile_panel_ignores_section_clicks() {
        let mut app = test_app();
        let mut tui = TuiState::new(LayoutMode::Mobile, 100);
        let start = Instant::now();

        update(&mut app, Action::ToggleMobileMenu);
        draw_at(&app, &mut tui, 40, 20, start);
        draw_at(&app, &mut tui, 40, 20, start + Duration::from_millis(300));
        let header = tui.hits.rect_of(&Target::MobileSection("A".into())).unwrap();

        // A click landing on the last frame's header after the panel closed
        update(&mut app, Action::ToggleMobileMenu);
        assert!(tui.handle_event(&TuiEvent::MouseClick(header.x, header.y), &app).is_empty());

        // On the first frame of its exit the panel is still drawn but registers nothing
        draw_at(&app, &mut tui, 40, 20, start + Duration::from_millis(310));
        assert!(tui.mobile_panel.current().is_none());
        assert!(!tui.mobile_panel.exiting().is_empty());
        assert!(tui.hits.rect_of(&Target::MobileSection("A".into())).is_none());
        assert!(tui.hits.rect_of(&Target::CallToAction).is_none());
        let actions = tui.handle_event(&TuiEvent::MouseClick(header.x, header.y), &app);
        apply(&mut app, actions);

        app.controller.state().check_invariants().unwrap();
        update(&mut app, Action::ToggleMobileMenu);
        assert_eq!(app.controller.state().mobile_open, None);
    }

    #[test]
    fn test_auto_layout_follows_width() {
        let app = test_app();
        let mut tui = TuiState::new(LayoutMode::Auto, 100);
        draw(&app, &mut tui, 120, 20);
        assert_eq!(tui.surface, Surface::Desktop);
        draw(&app, &mut tui, 60, 20);
        assert_eq!(tui.surface, Surface::Mobile);
    }

    #[test]
    fn test_keyboard_does_nothing_before_the_bar_is_drawn() {
        let app = test_app();
        let mut tui = desktop_tui();
        assert!(tui.handle_event(&TuiEvent::NextEntry, &app).is_empty());
    }

    #[test]
    fn test_default_menu_switches_surface_where_the_bar_fits() {
        let app = App::new(NavigationModel::default(), DEFAULT_CTA_LABEL.to_string());
        let labels: Vec<&str> = app.controller.model().labels().collect();
        let needed = NavBar::desktop_width(&app.brand, &labels, &app.cta_label);
        let mut tui = TuiState::new(LayoutMode::Auto, 100);

        draw(&app, &mut tui, needed - 1, 40);
        assert_eq!(tui.surface, Surface::Mobile);

        draw(&app, &mut tui, needed, 40);
        assert_eq!(tui.surface, Surface::Desktop);
        assert_eq!(tui.hits.labels().collect::<Vec<_>>(), labels);
    }

    #[test]
    fn test_keyboard_reaches_last_entry_of_default_menu() {
        let mut app = App::new(NavigationModel::default(), DEFAULT_CTA_LABEL.to_string());
        let labels: Vec<&str> = app.controller.model().labels().collect();
        let needed = NavBar::desktop_width(&app.brand, &labels, &app.cta_label);
        let mut tui = TuiState::new(LayoutMode::Auto, 100);
        draw(&app, &mut tui, needed, 40);

        for _ in 0..4 {
            let actions = tui.handle_event(&TuiEvent::NextEntry, &app);
            apply(&mut app, actions);
        }
        assert!(app.controller.is_desktop_open("VENTURE DESIGN LAB"));

        draw(&app, &mut tui, needed, 40);
        assert!(tui.hits.rect_of(&Target::Panel("VENTURE DESIGN LAB".into())).is_some());
    }

    #[test]
    fn test_keyboard_skips_labels_cut_from_a_narrow_bar() {
        let mut app = App::new(NavigationModel::default(), DEFAULT_CTA_LABEL.to_string());
        let mut tui = desktop_tui();
        draw(&app, &mut tui, 110, 40);
        let drawn: Vec<String> = tui.hits.labels().map(str::to_string).collect();
        assert!(!drawn.iter().any(|l| l == "VENTURE DESIGN LAB"));

        for _ in 0..8 {
            let actions = tui.handle_event(&TuiEvent::NextEntry, &app);
            apply(&mut app, actions);
            assert!(!app.controller.is_desktop_open("VENTURE DESIGN LAB"));
        }
    }

    #[test]
    fn test_opening_starts_an_animation_window() {
        let mut app = test_app();
        let mut tui = desktop_tui();
        update(&mut app, Action::PointerEnter("A".into()));
        draw(&app, &mut tui, 120, 30);
        assert!(tui.is_animating(Instant::now()));
        assert!(!tui.is_animating(Instant::now() + Duration::from_secs(5)));
    }
}
