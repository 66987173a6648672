//! Shape rendering.
//!
//! A class box is drawn as its outline primitive, then the text laid out by
//! [`layout_shape`] and the compartment separators.

use log::{debug, warn};

use classdraw_core::{
    draw::{Canvas, StrokeDefinition, TextEngine},
    geometry::Point,
    semantic::{PrimitiveKind, Shape},
};

use crate::render::{RenderStyle, text_layout::layout_shape};

/// Draws class boxes: the outline, then the text compartments.
pub(crate) struct ShapeRenderer<'a> {
    style: &'a RenderStyle,
    text: &'a dyn TextEngine,
}

impl<'a> ShapeRenderer<'a> {
    pub fn new(style: &'a RenderStyle, text: &'a dyn TextEngine) -> Self {
        Self { style, text }
    }

    pub fn render(&self, canvas: &mut Canvas, shape: &Shape) {
        debug!(name = shape.name(), kind:? = shape.kind(); "Drawing shape");

        let origin = shape.position();
        let size = shape.size();
        let outline = (shape.outline_weight() > 0.0)
            .then(|| StrokeDefinition::solid(shape.outline_color(), shape.outline_weight()));
        let fill = shape.fill_color();

        match shape.kind() {
            PrimitiveKind::Rectangle => {
                canvas.draw_rectangle(origin, size, fill, outline.as_ref());
            }
            PrimitiveKind::RoundedRectangle => {
                canvas.draw_rounded_rectangle(
                    origin,
                    size,
                    self.style.corner_radius,
                    fill,
                    outline.as_ref(),
                );
            }
            PrimitiveKind::Ellipse => {
                canvas.draw_ellipse(origin, size, fill, outline.as_ref());
            }
            PrimitiveKind::Unrecognized => {
                warn!(name = shape.name(); "Unrecognized shape kind, drawing a rectangle");
                canvas.draw_rectangle(origin, size, fill, outline.as_ref());
            }
        }

        let layout = layout_shape(shape, self.text);
        for line in layout.lines() {
            self.text.draw_text(
                canvas,
                line.text(),
                line.origin(),
                shape.font_size(),
                shape.text_color(),
            );
        }

        let separator = StrokeDefinition::solid(shape.outline_color(), 1.0);
        let right = origin.x() + size.width();
        for &y in layout.separators() {
            canvas.stroke_line(Point::new(origin.x(), y), Point::new(right, y), &separator);
        }
    }
}
