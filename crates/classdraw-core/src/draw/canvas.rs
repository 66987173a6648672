//! RGBA raster canvas.
//!
//! [`Canvas`] wraps a [`tiny_skia::Pixmap`] and exposes the handful of
//! primitives diagram rendering needs: strokes (solid and dashed), filled
//! polygons, rectangle / rounded rectangle / ellipse outlines, and the
//! coverage spans text rasterization produces.
//!
//! Anti-aliasing is disabled so that the same input always yields the same
//! hard-edged pixels regardless of the order primitives overlap in.

use log::trace;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::{
    color::Color,
    draw::{DrawError, StrokeDefinition, StrokeStyle},
    geometry::{DashSegments, Point, Size},
};

/// An RGBA raster surface a diagram is painted onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a canvas of `width` × `height` pixels filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Canvas`] when either dimension is zero or the
    /// buffer is too large to allocate.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, DrawError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(DrawError::Canvas { width, height })?;
        pixmap.fill(background.into());
        Ok(Self { pixmap })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns the straight (non-premultiplied) RGBA value at `(x, y)`.
    /// Returns `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Consumes the canvas, handing the pixmap to an encoder.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Draws a line from `from` to `to`. Dashed strokes are split into dashes
    /// by [`DashSegments`].
    pub fn stroke_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        match stroke.style() {
            StrokeStyle::Solid => self.stroke_segment(from, to, stroke),
            StrokeStyle::Dashed(pattern) => {
                for (start, end) in DashSegments::new(from, to, pattern) {
                    self.stroke_segment(start, end, stroke);
                }
            }
        }
    }

    /// Fills the closed polygon through `points` and optionally outlines it.
    ///
    /// Degenerate polygons (fewer than three distinct points) draw nothing.
    pub fn fill_polygon(&mut self, points: &[Point], fill: Color, outline: Option<&StrokeDefinition>) {
        let Some(path) = polygon_path(points) else {
            trace!(points = points.len(); "Skipping degenerate polygon");
            return;
        };
        self.fill_and_outline(&path, fill, outline);
    }

    /// Draws an axis-aligned rectangle with its top-left corner at `origin`.
    pub fn draw_rectangle(
        &mut self,
        origin: Point,
        size: Size,
        fill: Color,
        outline: Option<&StrokeDefinition>,
    ) {
        let Some(rect) = to_rect(origin, size) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        self.fill_and_outline(&path, fill, outline);
    }

    /// Draws a rectangle whose corners are rounded by `radius`.
    ///
    /// The radius is clamped to half of the shorter side.
    pub fn draw_rounded_rectangle(
        &mut self,
        origin: Point,
        size: Size,
        radius: f32,
        fill: Color,
        outline: Option<&StrokeDefinition>,
    ) {
        let Some(path) = rounded_rect_path(origin, size, radius) else {
            return;
        };
        self.fill_and_outline(&path, fill, outline);
    }

    /// Draws the ellipse inscribed in the rectangle at `origin` with `size`.
    pub fn draw_ellipse(
        &mut self,
        origin: Point,
        size: Size,
        fill: Color,
        outline: Option<&StrokeDefinition>,
    ) {
        let Some(path) = to_rect(origin, size).and_then(PathBuilder::from_oval) else {
            return;
        };
        self.fill_and_outline(&path, fill, outline);
    }

    /// Blends a solid span of `color` over the `width` × `height` block at `(x, y)`.
    ///
    /// Text rasterizers report glyph coverage this way; the alpha channel of
    /// `color` carries the coverage.
    pub fn blend_span(&mut self, x: i32, y: i32, width: u32, height: u32, color: [u8; 4]) {
        let [r, g, b, a] = color;
        if a == 0 {
            return;
        }
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = false;
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn stroke_segment(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.x(), from.y());
        builder.line_to(to.x(), to.y());
        let Some(path) = builder.finish() else {
            return;
        };
        self.stroke_path(&path, stroke);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition) {
        if stroke.width() <= 0.0 {
            return;
        }
        let paint = solid_paint(stroke.color());
        let raster_stroke = Stroke {
            width: stroke.width(),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &raster_stroke, Transform::identity(), None);
    }

    fn fill_and_outline(&mut self, path: &Path, fill: Color, outline: Option<&StrokeDefinition>) {
        self.pixmap.fill_path(
            path,
            &solid_paint(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        if let Some(outline) = outline {
            self.stroke_path(path, outline);
        }
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = false;
    paint
}

fn to_rect(origin: Point, size: Size) -> Option<Rect> {
    Rect::from_xywh(origin.x(), origin.y(), size.width(), size.height())
}

fn polygon_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }
    let mut builder = PathBuilder::new();
    builder.move_to(first.x(), first.y());
    for point in rest {
        builder.line_to(point.x(), point.y());
    }
    builder.close();
    builder.finish()
}

fn rounded_rect_path(origin: Point, size: Size, radius: f32) -> Option<Path> {
    let (x, y) = (origin.x(), origin.y());
    let (w, h) = (size.width(), size.height());
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let r = radius.clamp(0.0, w.min(h) / 2.0);

    let mut builder = PathBuilder::new();
    builder.move_to(x + r, y);
    builder.line_to(x + w - r, y);
    builder.quad_to(x + w, y, x + w, y + r);
    builder.line_to(x + w, y + h - r);
    builder.quad_to(x + w, y + h, x + w - r, y + h);
    builder.line_to(x + r, y + h);
    builder.quad_to(x, y + h, x, y + h - r);
    builder.line_to(x, y + r);
    builder.quad_to(x, y, x + r, y);
    builder.close();
    builder.finish()
}
