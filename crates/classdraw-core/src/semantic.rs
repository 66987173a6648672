//! Semantic diagram model types.
//!
//! These types describe a fully positioned class diagram: every shape carries
//! its own coordinates and styling, every connector its polyline. They are
//! built by the host (or deserialized from JSON) and are read-only inputs to
//! rendering.
//!
//! # Overview
//!
//! - [`Diagram`] - Background plus ordered shapes and connectors
//! - [`Background`] - Canvas dimensions and fill color
//! - [`Shape`] - A class box with name, stereotypes, attributes and operations
//! - [`Connector`] - A typed relationship line between shapes
//!
//! Unknown shape and connector kinds deserialize into the
//! [`PrimitiveKind::Unrecognized`] and [`ConnectorKind::Unrecognized`]
//! variants instead of failing, so a diagram from a newer model version still
//! renders.

use serde::Deserialize;

use crate::{
    color::Color,
    geometry::{Point, Size},
};

fn default_weight() -> f32 {
    1.0
}

fn default_font_size() -> f32 {
    12.0
}

// =============================================================================
// Diagram
// =============================================================================

/// A complete diagram: background, then shapes and connectors in paint order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Diagram {
    background: Background,
    #[serde(default)]
    shapes: Vec<Shape>,
    #[serde(default)]
    connectors: Vec<Connector>,
}

impl Diagram {
    /// Creates an empty diagram on the given background.
    pub fn new(background: Background) -> Self {
        Self {
            background,
            shapes: Vec::new(),
            connectors: Vec::new(),
        }
    }

    /// Adds a shape, painted after all shapes added before it.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Adds a connector, painted after all connectors added before it.
    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connectors.push(connector);
        self
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }
}

/// Canvas dimensions and fill color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Background {
    width: u32,
    height: u32,
    #[serde(alias = "background_color")]
    color: Color,
}

impl Background {
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

// =============================================================================
// Shapes
// =============================================================================

/// The outline drawn around a shape.
///
/// Also accepts the numeric tags `"0"`, `"2"` and `"3"` used by older models.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PrimitiveKind {
    #[default]
    #[serde(alias = "0")]
    Rectangle,
    #[serde(alias = "2")]
    RoundedRectangle,
    #[serde(alias = "3")]
    Ellipse,
    /// Any other outline; rendered as a [`Rectangle`](Self::Rectangle).
    #[serde(other)]
    Unrecognized,
}

/// A visibility-qualified member line: an attribute or an operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    visibility: String,
    name: String,
}

impl Member {
    /// Creates a member; `visibility` is the short marker such as `+`, `-` or `#`.
    pub fn new(visibility: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            visibility: visibility.into(),
            name: name.into(),
        }
    }

    pub fn visibility(&self) -> &str {
        &self.visibility
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text shown in the compartment: `"{visibility} {name}"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.visibility, self.name)
    }
}

/// A class box positioned on the canvas.
///
/// `x`/`y` is the top-left corner. Text that does not fit inside the box is
/// drawn anyway.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shape {
    #[serde(default, alias = "primitive_shape_type")]
    kind: PrimitiveKind,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(default = "Color::white", alias = "bgcolor")]
    fill_color: Color,
    #[serde(default)]
    outline_color: Color,
    #[serde(default = "default_weight")]
    outline_weight: f32,
    #[serde(default)]
    text_color: Color,
    #[serde(default = "default_font_size")]
    font_size: f32,
    name: String,
    #[serde(default)]
    stereotypes: Vec<String>,
    #[serde(default)]
    attributes: Vec<Member>,
    #[serde(default)]
    operations: Vec<Member>,
}

impl Shape {
    /// Creates a shape with default styling: white fill, black 1px outline,
    /// black 12px text.
    pub fn new(kind: PrimitiveKind, position: Point, size: Size, name: impl Into<String>) -> Self {
        Self {
            kind,
            x: position.x(),
            y: position.y(),
            width: size.width(),
            height: size.height(),
            fill_color: Color::white(),
            outline_color: Color::default(),
            outline_weight: default_weight(),
            text_color: Color::default(),
            font_size: default_font_size(),
            name: name.into(),
            stereotypes: Vec::new(),
            attributes: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_outline(mut self, color: Color, weight: f32) -> Self {
        self.outline_color = color;
        self.outline_weight = weight.max(0.0);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_stereotype(mut self, stereotype: impl Into<String>) -> Self {
        self.stereotypes.push(stereotype.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Member) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_operation(mut self, operation: Member) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Top-left corner of the shape.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn outline_color(&self) -> Color {
        self.outline_color
    }

    pub fn outline_weight(&self) -> f32 {
        self.outline_weight
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stereotypes(&self) -> &[String] {
        &self.stereotypes
    }

    pub fn attributes(&self) -> &[Member] {
        &self.attributes
    }

    pub fn operations(&self) -> &[Member] {
        &self.operations
    }
}

// =============================================================================
// Connectors
// =============================================================================

/// The UML relationship a connector depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ConnectorKind {
    Generalization,
    Composition,
    Realization,
    Dependency,
    Association,
    Aggregation,
    Instantiation,
    Usage,
    Abstraction,
    BindingDependency,
    Import,
    Substitution,
    Permission,
    Derive,
    Merge,
    Access,
    Refine,
    Trace,
    /// Any other relationship; rendered as a plain association.
    #[serde(other)]
    Unrecognized,
}

/// How an association owns its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AggregationKind {
    Shared,
    Composited,
    /// Any other value, `"None"` included; draws no rhombus.
    #[serde(other)]
    Unrecognized,
}

/// A relationship line between two shapes.
///
/// `coordinates` is the polyline from the source shape to the target shape.
/// It needs at least two points to be drawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Connector {
    #[serde(alias = "tag")]
    kind: ConnectorKind,
    coordinates: Vec<Point>,
    #[serde(default)]
    color: Color,
    #[serde(default = "default_weight")]
    weight: f32,
    #[serde(default = "Color::white", alias = "bg_color")]
    fill_color: Color,
    #[serde(default, alias = "aggregation_kind")]
    aggregation: Option<AggregationKind>,
    #[serde(default)]
    caption_anchor: Option<Point>,
}

impl Connector {
    /// Creates a black, 1px connector with a white decoration fill.
    pub fn new(kind: ConnectorKind, coordinates: Vec<Point>) -> Self {
        Self {
            kind,
            coordinates,
            color: Color::default(),
            weight: default_weight(),
            fill_color: Color::white(),
            aggregation: None,
            caption_anchor: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_aggregation(mut self, aggregation: AggregationKind) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    pub fn with_caption_anchor(mut self, anchor: Point) -> Self {
        self.caption_anchor = Some(anchor);
        self
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }

    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Fill used by decorations that take the connector's background color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn aggregation(&self) -> Option<AggregationKind> {
        self.aggregation
    }

    pub fn caption_anchor(&self) -> Option<Point> {
        self.caption_anchor
    }
}
