//! Stroke and line-style definitions.
//!
//! [`StrokeDefinition`] bundles the color, width and [`StrokeStyle`] used when
//! a line is drawn onto a [`Canvas`](crate::draw::Canvas). Dashed strokes carry
//! their own [`DashPattern`], so alternate diagram styles only need a
//! different pattern rather than a different drawing routine.

use crate::{color::Color, geometry::DashPattern};

/// Defines the visual style of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line laid out by the given pattern
    Dashed(DashPattern),
}

/// A stroke definition for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use classdraw_core::draw::{StrokeDefinition, StrokeStyle};
/// use classdraw_core::color::Color;
/// use classdraw_core::geometry::DashPattern;
///
/// let solid = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// assert_eq!(*solid.style(), StrokeStyle::Solid);
///
/// let dashed = StrokeDefinition::dashed(Color::new("blue").unwrap(), 1.0, DashPattern::default());
/// assert_eq!(*dashed.style(), StrokeStyle::Dashed(DashPattern::default()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke laid out by `pattern`.
    pub fn dashed(color: Color, width: f32, pattern: DashPattern) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed(pattern),
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let pattern = DashPattern {
            length: 3.0,
            gap_ratio: 3.0,
        };
        let dashed = StrokeDefinition::dashed(color, 1.5, pattern);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed(pattern));
    }
}
