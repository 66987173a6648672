//! Classdraw - Renders positioned class diagrams into raster images.
//!
//! A [`semantic::Diagram`] describes every class box and relationship line
//! with its final coordinates. [`DiagramRenderer`] paints that description
//! onto an RGBA [`draw::Canvas`]: shapes first, then connectors, each in
//! model order.

pub mod config;
pub mod render;

mod error;

pub use classdraw_core::{color, draw, geometry, semantic};

pub use error::ClassdrawError;

use log::{debug, info, trace};

use config::AppConfig;
use draw::{Canvas, FontTextEngine, TextEngine};
use render::{ConnectorRenderer, RenderStyle, ShapeRenderer};

/// Renders class diagrams.
///
/// The renderer owns its text capability, loaded once at construction and
/// reused for every diagram. Rendering the same diagram twice produces
/// identical pixels.
///
/// # Examples
///
/// ```rust,no_run
/// use classdraw::{DiagramRenderer, config::AppConfig};
///
/// let source = r#"{ "background": { "width": 200, "height": 100, "color": "white" } }"#;
///
/// let renderer = DiagramRenderer::new(AppConfig::default())
///     .expect("Failed to load fonts");
///
/// let diagram = renderer.parse(source)
///     .expect("Failed to parse");
///
/// let png = renderer.render_png(&diagram)
///     .expect("Failed to render");
/// ```
pub struct DiagramRenderer {
    style: RenderStyle,
    text: Box<dyn TextEngine>,
}

impl DiagramRenderer {
    /// Create a renderer that draws text with the font named in `config`.
    ///
    /// Without a configured font file the system font database is used.
    ///
    /// # Errors
    ///
    /// Returns [`ClassdrawError::Resource`] when no usable font can be loaded
    /// and [`ClassdrawError::Config`] for invalid style settings.
    pub fn new(config: AppConfig) -> Result<Self, ClassdrawError> {
        let font = config.font();
        let text = match font.path() {
            Some(path) => FontTextEngine::from_file(path, font.family())?,
            None => FontTextEngine::from_system(font.family())?,
        };
        Self::with_text_engine(config, Box::new(text))
    }

    /// Create a renderer that measures and draws text with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassdrawError::Config`] for invalid style settings.
    pub fn with_text_engine(
        config: AppConfig,
        text: Box<dyn TextEngine>,
    ) -> Result<Self, ClassdrawError> {
        let style = RenderStyle::from_config(config.style())?;
        debug!(style:?; "Resolved render style");
        Ok(Self { style, text })
    }

    /// Parse a JSON diagram model.
    ///
    /// # Errors
    ///
    /// Returns [`ClassdrawError::Model`] when `source` is not a valid model.
    pub fn parse(&self, source: &str) -> Result<semantic::Diagram, ClassdrawError> {
        info!("Parsing diagram model");
        let diagram: semantic::Diagram = serde_json::from_str(source)
            .map_err(|err| ClassdrawError::new_model_error(err, source))?;
        debug!(
            shapes = diagram.shapes().len(),
            connectors = diagram.connectors().len();
            "Diagram model parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");
        Ok(diagram)
    }

    /// Render a diagram onto a new canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ClassdrawError::Resource`] when the background dimensions
    /// cannot be allocated.
    pub fn render(&self, diagram: &semantic::Diagram) -> Result<Canvas, ClassdrawError> {
        let background = diagram.background();
        info!(
            width = background.width(),
            height = background.height();
            "Rendering diagram"
        );
        let mut canvas = Canvas::new(background.width(), background.height(), background.color())?;

        let shapes = ShapeRenderer::new(&self.style, self.text.as_ref());
        for shape in diagram.shapes() {
            shapes.render(&mut canvas, shape);
        }

        let connectors = ConnectorRenderer::new(&self.style, self.text.as_ref());
        for connector in diagram.connectors() {
            connectors.render(&mut canvas, connector);
        }

        info!(
            shapes = diagram.shapes().len(),
            connectors = diagram.connectors().len();
            "Diagram rendered successfully"
        );
        Ok(canvas)
    }

    /// Render a diagram and encode it as PNG.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`render`](Self::render), and
    /// [`ClassdrawError::Export`] when encoding fails.
    pub fn render_png(&self, diagram: &semantic::Diagram) -> Result<Vec<u8>, ClassdrawError> {
        let png = self
            .render(diagram)?
            .into_pixmap()
            .encode_png()
            .map_err(|err| ClassdrawError::Export(Box::new(err)))?;
        debug!(bytes = png.len(); "PNG encoded");
        Ok(png)
    }
}
