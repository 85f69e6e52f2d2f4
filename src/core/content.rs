//! # Content Blocks
//!
//! The page sections below the navigation bar (feature grid, alternating
//! blocks, call-to-action banner) all reduce to the same contract: an
//! ordered list of records rendered statelessly, each fading in on first
//! sight with a small per-index delay.

use serde::{Deserialize, Serialize};

use crate::core::motion::{self, Transition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ContentBlock {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            image: None,
        }
    }

    /// Entrance for the block at `index` in its section.
    pub fn entrance(index: usize) -> Transition {
        motion::stagger(motion::BLOCK_ENTER, motion::BLOCK_STAGGER, index)
    }
}

/// Stock feature-grid copy shown when the config has no `[[blocks]]`.
pub fn default_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock::new(
            "Design",
            "Human-centered systems that translate brand and vision into clarity across every touchpoint.",
        ),
        ContentBlock::new(
            "Technology",
            "Composable platforms, APIs, and data flows that scale experiences with elegance.",
        ),
        ContentBlock::new(
            "Innovation",
            "R&D and venture design to incubate what's next, from concept to market impact.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_block_entrance_staggers_by_index() {
        assert_eq!(ContentBlock::entrance(0).delay, Duration::ZERO);
        assert_eq!(ContentBlock::entrance(2).delay, Duration::from_millis(100));
        assert_eq!(ContentBlock::entrance(2).duration, Duration::from_millis(500));
    }

    #[test]
    fn test_image_is_optional_in_toml() {
        let block: ContentBlock = toml::from_str("title = \"T\"\nbody = \"B\"\n").unwrap();
        assert_eq!(block.image, None);
    }
}
