//! # Navigation Model
//!
//! The static description of the menu bar: which labels exist, in which
//! order, and what each dropdown contains.
//!
//! ```text
//! NavigationModel
//! └── entries: Vec<NavigationEntry>     // display order
//!     ├── label: String                 // bar text + lookup key
//!     └── variant
//!         ├── Simple { items, columns } // one flat grid
//!         └── Structured { sections }   // one column per section
//!             └── NavSection { title, items, nested: Option<NestedGroup> }
//! ```
//!
//! The model is built once (from defaults or the config file) and never
//! mutated afterwards. Runtime open/closed state lives in
//! [`crate::core::controller`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::error::NavError;

/// Number of grid columns a simple dropdown lays its items out in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnCount {
    Two,
    #[default]
    Three,
}

impl ColumnCount {
    pub fn get(self) -> u16 {
        match self {
            ColumnCount::Two => 2,
            ColumnCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for ColumnCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ColumnCount::Two),
            3 => Ok(ColumnCount::Three),
            other => Err(format!("columns must be 2 or 3, got {other}")),
        }
    }
}

impl From<ColumnCount> for u8 {
    fn from(value: ColumnCount) -> Self {
        value.get() as u8
    }
}

/// A secondary sub-list drawn indented beneath a section's own items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedGroup {
    #[serde(default)]
    pub title: String,
    pub items: Vec<String>,
}

/// One titled column of a structured dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Empty means "untitled section".
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub nested: Option<NestedGroup>,
}

impl NavSection {
    /// Section items followed by the nested group's items.
    pub fn leaf_items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().chain(self.nested.iter().flat_map(|n| n.items.iter())).map(String::as_str)
    }

    pub fn is_renderable(&self) -> bool {
        self.leaf_items().next().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryVariant {
    Simple { items: Vec<String>, columns: ColumnCount },
    Structured { sections: Vec<NavSection> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: String,
    pub variant: EntryVariant,
}

impl NavigationEntry {
    pub fn simple(label: impl Into<String>, items: &[&str], columns: ColumnCount) -> Self {
        Self {
            label: label.into(),
            variant: EntryVariant::Simple {
                items: items.iter().map(|s| s.to_string()).collect(),
                columns,
            },
        }
    }

    pub fn structured(label: impl Into<String>, sections: Vec<NavSection>) -> Self {
        Self {
            label: label.into(),
            variant: EntryVariant::Structured { sections },
        }
    }

    /// Entries with no leaf items are kept in the model but never drawn in the bar.
    pub fn is_renderable(&self) -> bool {
        match &self.variant {
            EntryVariant::Simple { items, .. } => !items.is_empty(),
            EntryVariant::Structured { sections } => sections.iter().any(NavSection::is_renderable),
        }
    }
}

/// Immutable, ordered set of navigation entries with unique labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    entries: Vec<NavigationEntry>,
}

impl NavigationModel {
    /// Build a model, rejecting duplicate labels.
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self, NavError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.label.as_str()) {
                return Err(NavError::DuplicateLabel(entry.label.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Look up an entry by label.
    pub fn resolve(&self, label: &str) -> Result<&NavigationEntry, NavError> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .ok_or_else(|| NavError::UnknownLabel(label.to_string()))
    }

    /// The single flat list the mobile accordion shows for an entry.
    ///
    /// Structured entries concatenate, in section order, each section's
    /// items followed by its nested group's items.
    pub fn flatten_for_mobile(entry: &NavigationEntry) -> Vec<&str> {
        match &entry.variant {
            EntryVariant::Simple { items, .. } => items.iter().map(String::as_str).collect(),
            EntryVariant::Structured { sections } => {
                sections.iter().flat_map(NavSection::leaf_items).collect()
            }
        }
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Entries that get a slot in the bar, in display order.
    pub fn bar_entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.entries.iter().filter(|e| e.is_renderable())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavigationModel {
    /// The stock marketing-site menu.
    fn default() -> Self {
        let section = |title: &str, items: &[&str]| NavSection {
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            nested: None,
        };

        Self {
            entries: vec![
                NavigationEntry::simple(
                    "WHY CLIENTS HIRE US",
                    &[
                        "Use Cases & Sectors",
                        "Retail",
                        "ESG as a Service",
                        "Finance as a Service",
                        "Government / NGO",
                        "Energy",
                        "Technology",
                        "Venture Design Lab",
                    ],
                    ColumnCount::Three,
                ),
                NavigationEntry::simple(
                    "EXPERIENCE AS A PLATFORM",
                    &[
                        "Total Experience API",
                        "Platform",
                        "TPASS",
                        "HEMS Modules",
                        "TerraOne",
                        "e-Mobility",
                        "Digital Twin",
                        "Virtual Gas Plan",
                        "OneXperience",
                    ],
                    ColumnCount::Three,
                ),
                NavigationEntry::structured(
                    "RESOURCES",
                    vec![
                        section(
                            "",
                            &["Blog", "Market Trend", "Webinar", "Third Party Articles", "Press Release"],
                        ),
                        section(
                            "Why Clients Hire Us",
                            &["ESG + CSR + SGS", "Efficiency to Zero", "(Re)finance the Future"],
                        ),
                        section(
                            "",
                            &[
                                "Our Thinking",
                                "Vision",
                                "Goal",
                                "Value",
                                "Impact",
                                "Career",
                                "Mission",
                                "Philosophy",
                            ],
                        ),
                    ],
                ),
                NavigationEntry::simple(
                    "VENTURE DESIGN LAB",
                    &[
                        "Overview",
                        "Case Studies",
                        "Collaborations",
                        "Frameworks",
                        "Innovation Approach",
                        "Contact",
                    ],
                    ColumnCount::Two,
                ),
            ],
        }
    }
}
