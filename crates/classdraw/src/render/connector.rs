//! Connector rendering.
//!
//! Every [`ConnectorKind`] maps to a [`ConnectorStyle`]: a line style, an
//! optional decoration drawn at the end of the traversal, an optional caption
//! and a traversal direction. The decoration sits on the last segment of the
//! traversal with its point on the final point. Dependency-like kinds walk
//! the coordinates backwards, which puts their open arrowhead on the first
//! model coordinate.

use log::{debug, warn};

use classdraw_core::{
    color::Color,
    draw::{Canvas, StrokeDefinition, TextEngine},
    geometry::{Point, arrowhead, rhombus},
    semantic::{AggregationKind, Connector, ConnectorKind},
};

use crate::render::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Forward,
    Reverse,
}

/// Where a decoration's fill comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecorationFill {
    White,
    Black,
    /// The connector's own fill color.
    Connector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoration {
    Triangle(DecorationFill),
    OpenTriangle,
    Rhombus(DecorationFill),
}

/// How a connector kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConnectorStyle {
    line: LineStyle,
    decoration: Option<Decoration>,
    caption: Option<&'static str>,
    traversal: Traversal,
}

impl ConnectorStyle {
    fn solid(decoration: Option<Decoration>) -> Self {
        Self {
            line: LineStyle::Solid,
            decoration,
            caption: None,
            traversal: Traversal::Forward,
        }
    }

    fn dependency(caption: Option<&'static str>) -> Self {
        Self {
            line: LineStyle::Dashed,
            decoration: Some(Decoration::OpenTriangle),
            caption,
            traversal: Traversal::Reverse,
        }
    }

    fn of(kind: ConnectorKind, aggregation: Option<AggregationKind>) -> Self {
        use DecorationFill::{Black, White};

        match kind {
            ConnectorKind::Generalization => Self::solid(Some(Decoration::Triangle(White))),
            ConnectorKind::Realization => Self {
                line: LineStyle::Dashed,
                decoration: Some(Decoration::Triangle(DecorationFill::Connector)),
                caption: None,
                traversal: Traversal::Forward,
            },
            ConnectorKind::Composition => Self::solid(Some(Decoration::Rhombus(Black))),
            ConnectorKind::Aggregation => Self::solid(Some(Decoration::Rhombus(White))),
            ConnectorKind::Association => Self::solid(match aggregation {
                Some(AggregationKind::Shared) => Some(Decoration::Rhombus(White)),
                Some(AggregationKind::Composited) => Some(Decoration::Rhombus(Black)),
                Some(AggregationKind::Unrecognized) | None => None,
            }),
            ConnectorKind::Dependency => Self::dependency(None),
            ConnectorKind::Instantiation => Self::dependency(Some("<<instantiate>>")),
            ConnectorKind::Usage => Self::dependency(Some("<<use>>")),
            ConnectorKind::Abstraction => Self::dependency(Some("<<abstraction>>")),
            ConnectorKind::BindingDependency => Self::dependency(Some("<<bind>>")),
            ConnectorKind::Import => Self::dependency(Some("<<import>>")),
            ConnectorKind::Substitution => Self::dependency(Some("<<substitute>>")),
            ConnectorKind::Permission => Self::dependency(Some("<<permit>>")),
            ConnectorKind::Derive => Self::dependency(Some("<<derive>>")),
            ConnectorKind::Merge => Self::dependency(Some("<<merge>>")),
            ConnectorKind::Access => Self::dependency(Some("<<access>>")),
            ConnectorKind::Refine => Self::dependency(Some("<<refine>>")),
            ConnectorKind::Trace => Self::dependency(Some("<<trace>>")),
            ConnectorKind::Unrecognized => Self::solid(None),
        }
    }
}

/// Splits `points` into segments in traversal order without touching the
/// original sequence.
fn traversal_segments(points: &[Point], traversal: Traversal) -> Vec<(Point, Point)> {
    let forward = points.windows(2).map(|pair| (pair[0], pair[1]));
    match traversal {
        Traversal::Forward => forward.collect(),
        Traversal::Reverse => forward.rev().map(|(from, to)| (to, from)).collect(),
    }
}

/// Draws connectors: the polyline, its decoration and caption.
pub(crate) struct ConnectorRenderer<'a> {
    style: &'a RenderStyle,
    text: &'a dyn TextEngine,
}

impl<'a> ConnectorRenderer<'a> {
    pub fn new(style: &'a RenderStyle, text: &'a dyn TextEngine) -> Self {
        Self { style, text }
    }

    /// Draws `connector`. Connectors with fewer than two coordinates are
    /// skipped with a warning.
    pub fn render(&self, canvas: &mut Canvas, connector: &Connector) {
        let points = connector.coordinates();
        if points.len() < 2 {
            warn!(
                kind:? = connector.kind(),
                points = points.len();
                "Skipping connector with fewer than two coordinates"
            );
            return;
        }

        let style = ConnectorStyle::of(connector.kind(), connector.aggregation());
        debug!(
            kind:? = connector.kind(),
            points = points.len(),
            decoration:? = style.decoration;
            "Drawing connector"
        );
        if connector.kind() == ConnectorKind::Unrecognized && connector.aggregation().is_some() {
            debug!("Ignoring aggregation on unrecognized connector kind");
        }

        let line = match style.line {
            LineStyle::Solid => StrokeDefinition::solid(connector.color(), connector.weight()),
            LineStyle::Dashed => {
                StrokeDefinition::dashed(connector.color(), connector.weight(), self.style.dash)
            }
        };

        // The decorated segment is drawn first, then the rest of the polyline
        let segments = traversal_segments(points, style.traversal);
        for (index, &(tail, tip)) in segments.iter().rev().enumerate() {
            canvas.stroke_line(tail, tip, &line);
            if index > 0 {
                continue;
            }
            if let Some(decoration) = style.decoration {
                self.draw_decoration(canvas, connector, decoration, tail, tip);
            }
            if let Some(caption) = style.caption {
                self.draw_caption(canvas, connector, caption, tail, tip);
            }
        }
    }

    fn draw_decoration(
        &self,
        canvas: &mut Canvas,
        connector: &Connector,
        decoration: Decoration,
        tail: Point,
        tip: Point,
    ) {
        let outline = StrokeDefinition::solid(connector.color(), 1.0);
        let fill_color = |fill: DecorationFill| match fill {
            DecorationFill::White => Color::white(),
            DecorationFill::Black => Color::black(),
            DecorationFill::Connector => connector.fill_color(),
        };

        match decoration {
            Decoration::Triangle(fill) => {
                let Some(head) = arrowhead(tail, tip, &self.style.arrowhead) else {
                    return;
                };
                canvas.fill_polygon(
                    &[head.left(), head.right(), tip],
                    fill_color(fill),
                    Some(&outline),
                );
            }
            Decoration::OpenTriangle => {
                let Some(head) = arrowhead(tail, tip, &self.style.arrowhead) else {
                    return;
                };
                canvas.stroke_line(tip, head.left(), &outline);
                canvas.stroke_line(tip, head.right(), &outline);
            }
            Decoration::Rhombus(fill) => {
                let Some(vertices) = rhombus(tail, tip, &self.style.arrowhead) else {
                    return;
                };
                canvas.fill_polygon(&vertices, fill_color(fill), Some(&outline));
            }
        }
    }

    fn draw_caption(
        &self,
        canvas: &mut Canvas,
        connector: &Connector,
        caption: &str,
        tail: Point,
        tip: Point,
    ) {
        let anchor = connector
            .caption_anchor()
            .unwrap_or_else(|| tail.midpoint(tip));
        let font_size = self.style.caption_font_size;
        let size = self.text.measure(caption, font_size);

        // Left edge on the anchor, vertically centered on it
        let origin = Point::new(anchor.x(), anchor.y() - size.height() / 2.0);
        self.text
            .draw_text(canvas, caption, origin, font_size, self.style.caption_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::BlockTextEngine;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn render_connector(connector: &Connector) -> (Canvas, BlockTextEngine) {
        let style = RenderStyle::default();
        let engine = BlockTextEngine::new();
        let mut canvas = Canvas::new(120, 120, Color::white()).unwrap();
        ConnectorRenderer::new(&style, &engine).render(&mut canvas, connector);
        (canvas, engine)
    }

    fn inked_near(canvas: &Canvas, x: u32, y: u32) -> bool {
        (x - 1..=x + 1)
            .flat_map(|px| (y - 1..=y + 1).map(move |py| (px, py)))
            .any(|(px, py)| canvas.pixel(px, py) == Some(BLACK))
    }

    /// Ink in column `x` away from the connector line at y = 60.
    fn inked_off_line(canvas: &Canvas, x: u32) -> bool {
        (50..=70)
            .filter(|y| !(59..=61).contains(y))
            .any(|y| canvas.pixel(x, y) == Some(BLACK))
    }

    fn horizontal(kind: ConnectorKind) -> Connector {
        Connector::new(kind, vec![Point::new(0.0, 60.0), Point::new(100.0, 60.0)])
    }

    #[test]
    fn test_style_table() {
        let generalization = ConnectorStyle::of(ConnectorKind::Generalization, None);
        assert_eq!(generalization.line, LineStyle::Solid);
        assert_eq!(
            generalization.decoration,
            Some(Decoration::Triangle(DecorationFill::White))
        );
        assert_eq!(generalization.traversal, Traversal::Forward);

        let realization = ConnectorStyle::of(ConnectorKind::Realization, None);
        assert_eq!(realization.line, LineStyle::Dashed);
        assert_eq!(
            realization.decoration,
            Some(Decoration::Triangle(DecorationFill::Connector))
        );

        let dependency = ConnectorStyle::of(ConnectorKind::Dependency, None);
        assert_eq!(dependency.line, LineStyle::Dashed);
        assert_eq!(dependency.decoration, Some(Decoration::OpenTriangle));
        assert_eq!(dependency.traversal, Traversal::Reverse);
        assert_eq!(dependency.caption, None);

        let usage = ConnectorStyle::of(ConnectorKind::Usage, None);
        assert_eq!(usage.caption, Some("<<use>>"));
        assert_eq!(usage.traversal, Traversal::Reverse);

        assert_eq!(
            ConnectorStyle::of(ConnectorKind::Association, Some(AggregationKind::Composited))
                .decoration,
            Some(Decoration::Rhombus(DecorationFill::Black))
        );
        assert_eq!(
            ConnectorStyle::of(ConnectorKind::Association, None).decoration,
            None
        );
        assert_eq!(
            ConnectorStyle::of(ConnectorKind::Association, Some(AggregationKind::Unrecognized)),
            ConnectorStyle::of(ConnectorKind::Association, None)
        );
    }

    #[test]
    fn test_unrecognized_ignores_aggregation() {
        let unrecognized =
            ConnectorStyle::of(ConnectorKind::Unrecognized, Some(AggregationKind::Shared));
        assert_eq!(
            unrecognized,
            ConnectorStyle::of(ConnectorKind::Association, None)
        );
    }

    #[test]
    fn test_caption_kinds() {
        let expected = [
            (ConnectorKind::Instantiation, "<<instantiate>>"),
            (ConnectorKind::Usage, "<<use>>"),
            (ConnectorKind::Abstraction, "<<abstraction>>"),
            (ConnectorKind::BindingDependency, "<<bind>>"),
            (ConnectorKind::Import, "<<import>>"),
            (ConnectorKind::Substitution, "<<substitute>>"),
            (ConnectorKind::Permission, "<<permit>>"),
            (ConnectorKind::Derive, "<<derive>>"),
            (ConnectorKind::Merge, "<<merge>>"),
            (ConnectorKind::Access, "<<access>>"),
            (ConnectorKind::Refine, "<<refine>>"),
            (ConnectorKind::Trace, "<<trace>>"),
        ];
        for (kind, caption) in expected {
            let style = ConnectorStyle::of(kind, None);
            assert_eq!(style.caption, Some(caption), "{kind:?}");
            assert_eq!(style, ConnectorStyle::dependency(Some(caption)));
        }
    }

    #[test]
    fn test_traversal_segments() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert_eq!(
            traversal_segments(&points, Traversal::Forward),
            vec![(points[0], points[1]), (points[1], points[2])]
        );
        assert_eq!(
            traversal_segments(&points, Traversal::Reverse),
            vec![(points[2], points[1]), (points[1], points[0])]
        );
        assert!(traversal_segments(&points[..1], Traversal::Reverse).is_empty());
    }

    #[test]
    fn test_generalization_head_at_last_point() {
        let (canvas, _) = render_connector(&horizontal(ConnectorKind::Generalization));

        // Triangle base spans y 55..=65 at x = 80, the interior is filled white
        assert!(inked_near(&canvas, 80, 56));
        assert!(inked_near(&canvas, 80, 64));
        assert_eq!(canvas.pixel(84, 58), Some(WHITE));
        assert!(!inked_off_line(&canvas, 2));
    }

    #[test]
    fn test_composition_fills_rhombus_black() {
        let (canvas, _) = render_connector(&horizontal(ConnectorKind::Composition));

        // Rhombus spans x 60..100 around the line, widest at x = 80
        assert_eq!(canvas.pixel(80, 58), Some(BLACK));
        assert_eq!(canvas.pixel(70, 61), Some(BLACK));
        assert_eq!(canvas.pixel(40, 58), Some(WHITE));
    }

    #[test]
    fn test_realization_uses_connector_fill() {
        let yellow = Color::new("yellow").unwrap();
        let connector = horizontal(ConnectorKind::Realization).with_fill_color(yellow);
        let (canvas, _) = render_connector(&connector);

        assert_eq!(canvas.pixel(84, 58), Some(yellow.to_rgba8()));
    }

    #[test]
    fn test_dashes_use_connector_weight() {
        let ink_rows = |weight: f32| {
            let connector = horizontal(ConnectorKind::Dependency).with_weight(weight);
            let (canvas, _) = render_connector(&connector);
            // Dashes run back from x = 100, so x = 57 is inked and x = 52 is a gap
            let rows = (50..=70)
                .filter(|&y| canvas.pixel(57, y) == Some(BLACK))
                .count();
            let gap = (50..=70).any(|y| canvas.pixel(52, y) == Some(BLACK));
            (rows, gap)
        };

        let (thin, thin_gap) = ink_rows(1.0);
        let (thick, thick_gap) = ink_rows(4.0);
        assert!(thick >= 3);
        assert!(thick > thin);
        assert!(!thin_gap && !thick_gap);
    }

    #[test]
    fn test_dependency_head_at_first_point() {
        let connector = Connector::new(
            ConnectorKind::Dependency,
            vec![Point::new(10.0, 60.0), Point::new(110.0, 60.0)],
        );
        let original = connector.clone();
        let (canvas, engine) = render_connector(&connector);

        // Open head lines run from (10, 60) back to the base at x = 30
        assert!(inked_off_line(&canvas, 28));
        assert!(!inked_off_line(&canvas, 92));

        assert!(engine.drawn().is_empty());
        assert_eq!(connector, original);
    }

    #[test]
    fn test_caption_at_midpoint_or_anchor() {
        let connector = horizontal(ConnectorKind::Usage);
        let (_, engine) = render_connector(&connector);
        let drawn = engine.drawn();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].text, "<<use>>");
        assert_eq!(drawn[0].font_size, 10.0);
        assert_eq!(drawn[0].color, Color::black());
        assert_eq!(drawn[0].origin, Point::new(50.0, 55.0));

        let anchored = horizontal(ConnectorKind::Trace).with_caption_anchor(Point::new(20.0, 20.0));
        let (_, engine) = render_connector(&anchored);
        assert_eq!(engine.drawn()[0].origin, Point::new(20.0, 15.0));
    }

    #[test]
    fn test_short_connector_is_skipped() {
        let connector = Connector::new(ConnectorKind::Generalization, vec![Point::new(5.0, 5.0)]);
        let (canvas, _) = render_connector(&connector);
        assert_eq!(canvas, Canvas::new(120, 120, Color::white()).unwrap());
    }

    #[test]
    fn test_zero_length_segment_draws_no_decoration() {
        let connector = Connector::new(
            ConnectorKind::Generalization,
            vec![Point::new(50.0, 50.0), Point::new(50.0, 50.0)],
        );
        let (canvas, _) = render_connector(&connector);
        assert_eq!(canvas.pixel(45, 50), Some(WHITE));
    }
}
