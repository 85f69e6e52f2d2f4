//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::controller::NavigationController;
use crate::core::model::{ColumnCount, NavSection, NavigationEntry, NavigationModel, NestedGroup};
use crate::core::state::App;

/// Two entries: "A" simple 2-column `[x, y]`, "B" structured with one section `S: [z]`.
pub fn scenario_model() -> NavigationModel {
    NavigationModel::new(vec![
        NavigationEntry::simple("A", &["x", "y"], ColumnCount::Two),
        NavigationEntry::structured(
            "B",
            vec![NavSection {
                title: "S".to_string(),
                items: vec!["z".to_string()],
                nested: None,
            }],
        ),
    ])
    .unwrap()
}

pub fn scenario_controller() -> NavigationController {
    NavigationController::new(scenario_model())
}

/// Structured entry `[{items: [a, b]}, {items: [c], nested: {items: [d]}}]`.
pub fn nested_entry() -> NavigationEntry {
    NavigationEntry::structured(
        "N",
        vec![
            NavSection {
                title: String::new(),
                items: vec!["a".to_string(), "b".to_string()],
                nested: None,
            },
            NavSection {
                title: "S2".to_string(),
                items: vec!["c".to_string()],
                nested: Some(NestedGroup {
                    title: "More".to_string(),
                    items: vec!["d".to_string()],
                }),
            },
        ],
    )
}

/// Creates a test App over the scenario model.
pub fn test_app() -> App {
    App::new(scenario_model(), "LET'S TALK".to_string())
}
