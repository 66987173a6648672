//! Diagram rasterization.
//!
//! Shapes are drawn first, in model order, then connectors in model order, so
//! connectors always paint over the boxes they join.

mod connector;
mod shape;
mod text_layout;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) use connector::ConnectorRenderer;
pub(crate) use shape::ShapeRenderer;
pub use text_layout::{PlacedText, ShapeLayout, layout_shape};

use classdraw_core::{
    color::Color,
    geometry::{ArrowheadGeometry, DashPattern},
};

use crate::{config::StyleConfig, error::ClassdrawError};

/// Style values resolved once from a [`StyleConfig`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RenderStyle {
    pub arrowhead: ArrowheadGeometry,
    pub dash: DashPattern,
    pub corner_radius: f32,
    pub caption_font_size: f32,
    pub caption_color: Color,
}

impl RenderStyle {
    pub fn from_config(style: &StyleConfig) -> Result<Self, ClassdrawError> {
        let caption_color = style.caption_color().map_err(ClassdrawError::Config)?;
        Ok(Self {
            arrowhead: *style.arrowhead(),
            dash: *style.dash(),
            corner_radius: style.corner_radius(),
            caption_font_size: style.caption_font_size(),
            caption_color,
        })
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        let style = StyleConfig::default();
        Self {
            arrowhead: *style.arrowhead(),
            dash: *style.dash(),
            corner_radius: style.corner_radius(),
            caption_font_size: style.caption_font_size(),
            caption_color: Color::black(),
        }
    }
}
