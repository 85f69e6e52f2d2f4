//! # Navigation Controller
//!
//! Owns the per-session [`InteractionState`] and turns it, together with the
//! [`NavigationModel`], into the views the rendering layer draws.
//!
//! Three small state machines live side by side. They are independent so a
//! resize mid-session can switch surfaces without losing either one:
//!
//! ```text
//! desktop   none ──enter(L)──▶ open(L) ──enter(M)──▶ open(M)
//!            ▲                  │
//!            └────leave(L)──────┘            leave(X≠current) is ignored
//!
//! mobile    collapsed ◀──toggle──▶ expanded
//!                                    └── accordion: none ◀─toggle(L)─▶ open(L)
//!                                        (forced to none on collapse)
//! ```
//!
//! Every mutation is synchronous. Timing lives in [`crate::core::motion`].

use std::time::Duration;

use log::debug;

use crate::core::error::NavError;
use crate::core::model::{ColumnCount, EntryVariant, NavigationEntry, NavigationModel};
use crate::core::motion;

/// Runtime open/closed state. Created empty on mount, dropped on unmount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub desktop_open: Option<String>,
    pub mobile_menu_open: bool,
    /// Only meaningful while `mobile_menu_open` is true.
    pub mobile_open: Option<String>,
}

impl InteractionState {
    /// The only cross-field invariant: a section can't be open inside a closed panel.
    pub fn check_invariants(&self) -> Result<(), NavError> {
        if !self.mobile_menu_open
            && let Some(label) = &self.mobile_open
        {
            return Err(NavError::InconsistentState(format!(
                "mobile section {label:?} open while the mobile menu is collapsed"
            )));
        }
        Ok(())
    }
}

/// Fixed dropdown widths, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelWidth {
    Narrow,
    Wide,
}

impl PanelWidth {
    pub fn pixels(self) -> u16 {
        match self {
            PanelWidth::Narrow => 480,
            PanelWidth::Wide => 680,
        }
    }

    /// Terminal columns at ten pixels per cell.
    pub fn columns(self) -> u16 {
        self.pixels() / 10
    }
}

/// Panel width is a pure function of the entry's shape.
pub fn panel_width(entry: &NavigationEntry) -> PanelWidth {
    match &entry.variant {
        EntryVariant::Simple { columns: ColumnCount::Two, .. } => PanelWidth::Narrow,
        EntryVariant::Simple { columns: ColumnCount::Three, .. } => PanelWidth::Wide,
        EntryVariant::Structured { .. } => PanelWidth::Wide,
    }
}

/// A leaf link with its position in the entrance cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggeredItem<'a> {
    pub text: &'a str,
    pub ordinal: usize,
}

impl StaggeredItem<'_> {
    pub fn delay(&self) -> Duration {
        motion::item_entrance(self.ordinal).delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub title: &'a str,
    pub items: Vec<StaggeredItem<'a>>,
    pub nested_title: Option<&'a str>,
    /// Drawn indented beneath `items`.
    pub nested: Vec<StaggeredItem<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownLayout<'a> {
    Grid { columns: u16, items: Vec<StaggeredItem<'a>> },
    Sections(Vec<SectionView<'a>>),
}

/// Everything needed to draw one desktop dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView<'a> {
    pub label: &'a str,
    pub width: PanelWidth,
    pub layout: DropdownLayout<'a>,
}

impl DropdownView<'_> {
    /// Number of leaf items in the panel (also one past the last ordinal).
    pub fn item_count(&self) -> usize {
        match &self.layout {
            DropdownLayout::Grid { items, .. } => items.len(),
            DropdownLayout::Sections(sections) => {
                sections.iter().map(|s| s.items.len() + s.nested.len()).sum()
            }
        }
    }
}

/// The flattened accordion body for one mobile section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileSectionView<'a> {
    pub label: &'a str,
    pub items: Vec<StaggeredItem<'a>>,
}

/// Build the dropdown view for an entry, numbering leaf items in reading order.
pub fn dropdown_view<'a>(entry: &'a NavigationEntry) -> DropdownView<'a> {
    let mut ordinal = 0;
    let mut next = |text: &'a str| -> StaggeredItem<'a> {
        let item = StaggeredItem { text, ordinal };
        ordinal += 1;
        item
    };

    let layout = match &entry.variant {
        EntryVariant::Simple { items, columns } => DropdownLayout::Grid {
            columns: columns.get(),
            items: items.iter().map(|s| next(s)).collect(),
        },
        EntryVariant::Structured { sections } => DropdownLayout::Sections(
            sections
                .iter()
                .filter(|s| s.is_renderable())
                .map(|section| SectionView {
                    title: &section.title,
                    items: section.items.iter().map(|s| next(s)).collect(),
                    nested_title: section.nested.as_ref().map(|n| n.title.as_str()),
                    nested: section
                        .nested
                        .iter()
                        .flat_map(|n| n.items.iter())
                        .map(|s| next(s))
                        .collect(),
                })
                .collect(),
        ),
    };

    DropdownView {
        label: &entry.label,
        width: panel_width(entry),
        layout,
    }
}

/// Build the mobile accordion body for an entry.
pub fn mobile_section_view(entry: &NavigationEntry) -> MobileSectionView<'_> {
    MobileSectionView {
        label: &entry.label,
        items: NavigationModel::flatten_for_mobile(entry)
            .into_iter()
            .enumerate()
            .map(|(ordinal, text)| StaggeredItem { text, ordinal })
            .collect(),
    }
}

/// Mediates every interaction transition for one page session.
#[derive(Debug, Clone)]
pub struct NavigationController {
    model: NavigationModel,
    state: InteractionState,
}

impl NavigationController {
    pub fn new(model: NavigationModel) -> Self {
        Self {
            model,
            state: InteractionState::default(),
        }
    }

    pub fn model(&self) -> &NavigationModel {
        &self.model
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Desktop (hover)
    // ------------------------------------------------------------------

    /// Last entered wins, no queuing.
    pub fn on_pointer_enter(&mut self, label: &str) {
        debug!("desktop enter {label:?} (was {:?})", self.state.desktop_open);
        self.state.desktop_open = Some(label.to_string());
    }

    /// Ignores a leave from a menu that was already superseded.
    pub fn on_pointer_leave(&mut self, label: &str) {
        if self.is_desktop_open(label) {
            debug!("desktop leave {label:?}");
            self.state.desktop_open = None;
        } else {
            debug!("stale desktop leave {label:?} ignored");
        }
    }

    pub fn is_desktop_open(&self, label: &str) -> bool {
        self.state.desktop_open.as_deref() == Some(label)
    }

    /// The mounted dropdown, if any.
    pub fn desktop_dropdown(&self) -> Result<Option<DropdownView<'_>>, NavError> {
        match &self.state.desktop_open {
            Some(label) => Ok(Some(dropdown_view(self.model.resolve(label)?))),
            None => Ok(None),
        }
    }

    /// Dropdown view for any label, open or not. Used while a panel plays its exit.
    pub fn dropdown_for(&self, label: &str) -> Result<DropdownView<'_>, NavError> {
        Ok(dropdown_view(self.model.resolve(label)?))
    }

    // ------------------------------------------------------------------
    // Mobile (tap)
    // ------------------------------------------------------------------

    /// Collapsing the panel also collapses whatever section was open.
    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
        if !self.state.mobile_menu_open {
            self.state.mobile_open = None;
        }
        debug!("mobile menu open={}", self.state.mobile_menu_open);
    }

    /// Expanding one section implicitly collapses any other.
    pub fn toggle_mobile_section(&mut self, label: &str) {
        if self.is_mobile_section_open(label) {
            self.state.mobile_open = None;
        } else {
            self.state.mobile_open = Some(label.to_string());
        }
        debug!("mobile section open={:?}", self.state.mobile_open);
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    pub fn is_mobile_section_open(&self, label: &str) -> bool {
        self.state.mobile_open.as_deref() == Some(label)
    }

    /// Accordion body for `label` when it is the open section.
    pub fn mobile_section(&self, label: &str) -> Result<Option<MobileSectionView<'_>>, NavError> {
        let entry = self.model.resolve(label)?;
        if self.is_mobile_section_open(label) {
            Ok(Some(mobile_section_view(entry)))
        } else {
            Ok(None)
        }
    }

    /// Accordion body for any label. Used while a section plays its exit.
    pub fn mobile_section_for(&self, label: &str) -> Result<MobileSectionView<'_>, NavError> {
        Ok(mobile_section_view(self.model.resolve(label)?))
    }
}
