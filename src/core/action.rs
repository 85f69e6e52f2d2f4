//! # Actions
//!
//! Everything that can happen in the navigation bar becomes an `Action`.
//! Pointer enters a label? That's `Action::PointerEnter(label)`.
//! Tap on the hamburger? That's `Action::ToggleMobileMenu`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//! No side effects here. Logging of effects happens in the adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PointerEnter(String),
    PointerLeave(String),
    ToggleMobileMenu,
    ToggleMobileSection(String),
    /// A leaf link was clicked.
    ActivateItem { label: String, item: String },
    CallToAction,
    Quit,
}

/// Work the adapter has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Follow the item's anchor. Destinations are placeholders (`#`).
    Navigate { label: String, item: String },
    CallToAction,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::PointerEnter(label) => {
            app.controller.on_pointer_enter(&label);
            Effect::None
        }
        Action::PointerLeave(label) => {
            app.controller.on_pointer_leave(&label);
            Effect::None
        }
        Action::ToggleMobileMenu => {
            app.controller.toggle_mobile_menu();
            Effect::None
        }
        Action::ToggleMobileSection(label) => {
            app.controller.toggle_mobile_section(&label);
            Effect::None
        }
        Action::ActivateItem { label, item } => {
            app.status_message = format!("{label} › {item}");
            Effect::Navigate { label, item }
        }
        Action::CallToAction => {
            app.status_message = app.cta_label.clone();
            Effect::CallToAction
        }
        Action::Quit => Effect::Quit,
    }
}
