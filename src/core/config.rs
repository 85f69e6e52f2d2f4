//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navbar/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The navigation menu itself is configuration too: `[[entries]]` replaces
//! the built-in menu wholesale when present.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::LayoutMode;
use crate::core::content::{ContentBlock, default_blocks};
use crate::core::error::NavError;
use crate::core::model::{ColumnCount, EntryVariant, NavSection, NavigationEntry, NavigationModel};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavbarConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub desktop_min_width: Option<u16>,
    pub cta_label: Option<String>,
    pub brand: Option<String>,
    pub layout: Option<LayoutMode>,
}

/// One `[[entries]]` table. Exactly one of `items` or `sections` must be set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EntryConfig {
    pub label: String,
    pub items: Option<Vec<String>>,
    pub columns: Option<ColumnCount>,
    pub sections: Option<Vec<NavSection>>,
}

impl EntryConfig {
    /// Decide the entry's variant from which keys are present.
    pub fn into_entry(self) -> Result<NavigationEntry, NavError> {
        let invalid = |reason: &str| NavError::InvalidEntry {
            label: self.label.clone(),
            reason: reason.to_string(),
        };

        let variant = match (self.items.clone(), self.sections.clone()) {
            (Some(items), None) => EntryVariant::Simple {
                items,
                columns: self.columns.unwrap_or_default(),
            },
            (None, Some(sections)) => {
                if self.columns.is_some() {
                    return Err(invalid("`columns` only applies to entries with `items`"));
                }
                EntryVariant::Structured { sections }
            }
            (Some(_), Some(_)) => return Err(invalid("set either `items` or `sections`, not both")),
            (None, None) => return Err(invalid("missing `items` or `sections`")),
        };

        Ok(NavigationEntry {
            label: self.label,
            variant,
        })
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DESKTOP_MIN_WIDTH: u16 = 100;
pub const DEFAULT_CTA_LABEL: &str = "LET'S TALK";
pub const DEFAULT_BRAND: &str = "INFINITY BLEU";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub desktop_min_width: u16,
    pub cta_label: String,
    pub brand: String,
    pub layout: LayoutMode,
    pub model: NavigationModel,
    pub blocks: Vec<ContentBlock>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("navigation config error: {0}")]
    Model(#[from] NavError),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.navbar/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navbar").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from `~/.navbar/config.toml`.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<NavbarConfig, ConfigError> {
    if let Some(path) = explicit {
        return parse_file(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavbarConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavbarConfig::default());
    }

    parse_file(&path)
}

fn parse_file(path: &Path) -> Result<NavbarConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: NavbarConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Navbar Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# desktop_min_width = 100            # Terminal columns; narrower uses the mobile menu
# cta_label = "LET'S TALK"
# brand = "INFINITY BLEU"
# layout = "auto"                    # "auto", "desktop", "mobile"

# Any [[entries]] replace the built-in menu. Order is display order.

# [[entries]]
# label = "VENTURE DESIGN LAB"
# columns = 2                        # 2 or 3
# items = ["Overview", "Case Studies", "Contact"]

# [[entries]]
# label = "RESOURCES"
# [[entries.sections]]
# title = ""                         # Empty title = untitled section
# items = ["Blog", "Webinar"]
# [[entries.sections]]
# title = "Company"
# items = ["Vision", "Career"]
# [entries.sections.nested]
# title = "More"
# items = ["Mission"]

# [[blocks]]
# title = "Design"
# body = "Human-centered systems."
# image = "design.png"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_layout` is from the CLI flag (None = not specified).
pub fn resolve(config: &NavbarConfig, cli_layout: Option<LayoutMode>) -> Result<ResolvedConfig, ConfigError> {
    // Breakpoint: env → config → default
    let desktop_min_width = std::env::var("NAVBAR_DESKTOP_MIN_WIDTH")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(config.general.desktop_min_width)
        .unwrap_or(DEFAULT_DESKTOP_MIN_WIDTH);

    // CTA label: env → config → default
    let cta_label = std::env::var("NAVBAR_CTA_LABEL")
        .ok()
        .or_else(|| config.general.cta_label.clone())
        .unwrap_or_else(|| DEFAULT_CTA_LABEL.to_string());

    // Layout: CLI → config → default
    let layout = cli_layout.or(config.general.layout).unwrap_or_default();

    let model = if config.entries.is_empty() {
        NavigationModel::default()
    } else {
        let entries = config
            .entries
            .iter()
            .cloned()
            .map(EntryConfig::into_entry)
            .collect::<Result<Vec<_>, _>>()?;
        NavigationModel::new(entries)?
    };

    let blocks = if config.blocks.is_empty() {
        default_blocks()
    } else {
        config.blocks.clone()
    };

    Ok(ResolvedConfig {
        desktop_min_width,
        cta_label,
        brand: config.general.brand.clone().unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        layout,
        model,
        blocks,
    })
}
