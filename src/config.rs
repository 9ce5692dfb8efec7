//! Overlay configuration, parsed from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration: all overrides installed, idiom-derived menu
//! layout, middle truncation for non-editing text fields, and no idiom
//! spoof (the host-detected value stays active until `set` is called).
//!
//! ```toml
//! [idiom]
//! spoof = "pad"
//!
//! [overrides]
//! resize_image = false
//!
//! [menu]
//! layout = "expanded"
//!
//! [text]
//! non_editing_linebreak = "truncate-middle"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::idiom::Idiom;
use crate::ops::{LineBreakMode, MenuLayout};

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    pub idiom: IdiomConfig,
    pub overrides: OverrideFlags,
    pub menu: MenuConfig,
    pub text: TextConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdiomConfig {
    /// Idiom to activate at install time; `None` keeps the detected one.
    pub spoof: Option<Idiom>,
}

/// Which overrides the installation phase registers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideFlags {
    pub query_idiom: bool,
    pub resize_image: bool,
    pub present_menu: bool,
    pub select_window: bool,
    pub bind_pointer_driver: bool,
    pub linebreak_mode: bool,
}

impl Default for OverrideFlags {
    fn default() -> Self {
        Self {
            query_idiom: true,
            resize_image: true,
            present_menu: true,
            select_window: true,
            bind_pointer_driver: true,
            linebreak_mode: true,
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// Fixed preferred layout; `None` derives it from the active idiom.
    pub layout: Option<MenuLayout>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Line-break mode applied to non-editing single-line text fields.
    pub non_editing_linebreak: LineBreakMode,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            non_editing_linebreak: LineBreakMode::TruncateMiddle,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl OverlayConfig {
    /// Parses a TOML string. Parse errors carry line/column context.
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&source)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
