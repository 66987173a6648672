//! Placement of the text lines inside a class box.
//!
//! A shape's text is laid out in compartments from its top edge down:
//!
//! ```text
//!        <<stereotype>>      stacked upward above the box
//! +--------------------+
//! |        Name        |     centered
//! +--------------------+     separator at y + name height
//! | + attribute        |
//! | + attribute        |
//! +--------------------+     separator after the last attribute
//! | + operation()      |
//! +--------------------+
//! ```
//!
//! Every member line advances the cursor by its own height plus one pixel.
//! Operations continue from the cursor the attributes left behind.

use classdraw_core::{
    draw::TextMeasure,
    geometry::{Point, Size},
    semantic::{Member, Shape},
};

/// Vertical spacing added after every member line.
const MEMBER_SPACING: f32 = 1.0;

/// A line of text with its top-left origin and measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    text: String,
    origin: Point,
    size: Size,
}

impl PlacedText {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Where every line of a shape's text goes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLayout {
    name: PlacedText,
    stereotypes: Vec<PlacedText>,
    attributes: Vec<PlacedText>,
    operations: Vec<PlacedText>,
    separators: Vec<f32>,
}

impl ShapeLayout {
    /// The centered name line.
    pub fn name(&self) -> &PlacedText {
        &self.name
    }

    /// Stereotype labels in model order; the last one sits directly above the box.
    pub fn stereotypes(&self) -> &[PlacedText] {
        &self.stereotypes
    }

    pub fn attributes(&self) -> &[PlacedText] {
        &self.attributes
    }

    pub fn operations(&self) -> &[PlacedText] {
        &self.operations
    }

    /// The y coordinates of the horizontal compartment separators, top to bottom.
    pub fn separators(&self) -> &[f32] {
        &self.separators
    }

    /// Iterates every placed line in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = &PlacedText> {
        std::iter::once(&self.name)
            .chain(&self.stereotypes)
            .chain(&self.attributes)
            .chain(&self.operations)
    }
}

/// Computes the text layout of `shape` using `measure` for every line.
///
/// Text that does not fit inside the shape is placed anyway; nothing is
/// clipped or wrapped.
pub fn layout_shape<M>(shape: &Shape, measure: &M) -> ShapeLayout
where
    M: TextMeasure + ?Sized,
{
    let origin = shape.position();
    let width = shape.size().width();
    let font_size = shape.font_size();

    let place_centered = |text: String, top: f32| {
        let size = measure.measure(&text, font_size);
        PlacedText {
            origin: Point::new(origin.x() + (width - size.width()) / 2.0, top),
            text,
            size,
        }
    };

    let name = place_centered(shape.name().to_string(), origin.y());
    let body_top = origin.y() + name.size.height();
    let mut separators = vec![body_top];

    let mut top = origin.y();
    let mut stereotypes: Vec<PlacedText> = shape
        .stereotypes()
        .iter()
        .rev()
        .map(|label| {
            let label = format!("<<{label}>>");
            let height = measure.measure(&label, font_size).height();
            top -= height;
            place_centered(label, top)
        })
        .collect();
    stereotypes.reverse();

    let mut cursor = 0.0;
    let attributes = place_members(shape.attributes(), origin.x(), body_top, &mut cursor, |text| {
        measure.measure(text, font_size)
    });
    if !attributes.is_empty() {
        separators.push(body_top + cursor);
    }
    let operations = place_members(shape.operations(), origin.x(), body_top, &mut cursor, |text| {
        measure.measure(text, font_size)
    });

    ShapeLayout {
        name,
        stereotypes,
        attributes,
        operations,
        separators,
    }
}

fn place_members(
    members: &[Member],
    left: f32,
    body_top: f32,
    cursor: &mut f32,
    measure: impl Fn(&str) -> Size,
) -> Vec<PlacedText> {
    members
        .iter()
        .map(|member| {
            let text = member.label();
            let size = measure(&text);
            let placed = PlacedText {
                origin: Point::new(left, body_top + *cursor),
                text,
                size,
            };
            *cursor += size.height() + MEMBER_SPACING;
            placed
        })
        .collect()
}
