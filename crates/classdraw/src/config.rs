//! Configuration types for Classdraw rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are drawn. All types implement [`serde::Deserialize`] for loading from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and font settings.
//! - [`StyleConfig`] - Arrowhead and dash geometry, corner radius, captions.
//! - [`FontConfig`] - Where the font used for all text comes from.
//!
//! # Example
//!
//! ```
//! # use classdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().corner_radius(), 4.0);
//! assert!(config.style().caption_color().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use classdraw_core::{
    color::Color,
    geometry::{ArrowheadGeometry, DashPattern},
};

/// Top-level configuration combining style and font settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Font configuration section.
    #[serde(default)]
    font: FontConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and font configurations.
    pub fn new(style: StyleConfig, font: FontConfig) -> Self {
        Self { style, font }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the font configuration.
    pub fn font(&self) -> &FontConfig {
        &self.font
    }
}

fn default_corner_radius() -> f32 {
    4.0
}

fn default_caption_font_size() -> f32 {
    10.0
}

/// Visual styling shared by every diagram.
///
/// | Setting | Default |
/// |---------|---------|
/// | `arrowhead.base_ratio` | `0.8` |
/// | `arrowhead.axis_offset` | `5.0` |
/// | `arrowhead.oblique_offset` | `6.0` |
/// | `dash.length` | `5.0` |
/// | `dash.gap_ratio` | `2.0` |
/// | `corner_radius` | `4.0` |
/// | `caption_font_size` | `10.0` |
/// | `caption_color` | `"black"` |
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    arrowhead: ArrowheadGeometry,

    #[serde(default)]
    dash: DashPattern,

    /// Corner radius of rounded rectangles.
    #[serde(default = "default_corner_radius")]
    corner_radius: f32,

    /// Font size of connector captions such as `<<use>>`.
    #[serde(default = "default_caption_font_size")]
    caption_font_size: f32,

    /// Caption [`Color`], as a color string.
    #[serde(default)]
    caption_color: Option<String>,
}

impl StyleConfig {
    /// Returns the arrowhead geometry.
    pub fn arrowhead(&self) -> &ArrowheadGeometry {
        &self.arrowhead
    }

    /// Returns the dash pattern used by dashed connectors.
    pub fn dash(&self) -> &DashPattern {
        &self.dash
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn caption_font_size(&self) -> f32 {
        self.caption_font_size
    }

    /// Returns the parsed caption [`Color`], black when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn caption_color(&self) -> Result<Color, String> {
        self.caption_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| format!("Invalid caption color in config: {err}"))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            arrowhead: ArrowheadGeometry::default(),
            dash: DashPattern::default(),
            corner_radius: default_corner_radius(),
            caption_font_size: default_caption_font_size(),
            caption_color: None,
        }
    }
}

/// The font resource used for all text.
///
/// When `path` is unset the system font database is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontConfig {
    /// Font file to load.
    #[serde(default)]
    path: Option<PathBuf>,

    /// Font family to request; defaults to the loaded face's family.
    #[serde(default)]
    family: Option<String>,
}

impl FontConfig {
    /// Creates a font configuration for a font file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            family: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}
