//! Font-free text engine for rendering tests.

use std::cell::RefCell;

use classdraw_core::{
    color::Color,
    draw::{Canvas, TextEngine, TextMeasure},
    geometry::{Point, Size},
};

/// A text call recorded by [`BlockTextEngine`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawnText {
    pub text: String,
    pub origin: Point,
    pub font_size: f32,
    pub color: Color,
}

/// Font-free text engine: every glyph is a solid block half the font size
/// wide and one font size tall.
#[derive(Debug, Default)]
pub(crate) struct BlockTextEngine {
    drawn: RefCell<Vec<DrawnText>>,
}

impl BlockTextEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawn(&self) -> Vec<DrawnText> {
        self.drawn.borrow().clone()
    }
}

impl TextMeasure for BlockTextEngine {
    fn measure(&self, content: &str, font_size: f32) -> Size {
        if content.is_empty() {
            return Size::default();
        }
        Size::new(content.chars().count() as f32 * font_size / 2.0, font_size)
    }
}

impl TextEngine for BlockTextEngine {
    fn draw_text(
        &self,
        canvas: &mut Canvas,
        content: &str,
        origin: Point,
        font_size: f32,
        color: Color,
    ) {
        let size = self.measure(content, font_size);
        canvas.draw_rectangle(origin, size, color, None);
        self.drawn.borrow_mut().push(DrawnText {
            text: content.to_string(),
            origin,
            font_size,
            color,
        });
    }
}
