//! # Application State
//!
//! Core state for the navigation bar. This module contains domain state
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── controller: NavigationController  // model + interaction state
//! ├── brand: String                     // logo text at the left of the bar
//! ├── cta_label: String                 // call-to-action button text
//! ├── blocks: Vec<ContentBlock>         // page sections under the bar
//! └── status_message: String            // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::content::ContentBlock;
use crate::core::controller::NavigationController;
use crate::core::model::NavigationModel;

pub struct App {
    pub controller: NavigationController,
    pub brand: String,
    pub cta_label: String,
    pub blocks: Vec<ContentBlock>,
    pub status_message: String,
}

impl App {
    pub fn new(model: NavigationModel, cta_label: String) -> Self {
        Self {
            controller: NavigationController::new(model),
            brand: crate::core::config::DEFAULT_BRAND.to_string(),
            cta_label,
            blocks: Vec::new(),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            controller: NavigationController::new(config.model.clone()),
            brand: config.brand.clone(),
            cta_label: config.cta_label.clone(),
            blocks: config.blocks.clone(),
            status_message: String::new(),
        }
    }
}
