//! Text measurement and rasterization.
//!
//! Rendering needs two things from text: its size (to center names and stack
//! compartments) and its pixels. Both are expressed as capabilities so the
//! host decides where fonts come from:
//!
//! - [`TextMeasure`] - Measures a single line of text at a given font size
//! - [`TextEngine`] - Additionally draws text onto a [`Canvas`]
//! - [`FontTextEngine`] - The `cosmic-text` implementation, created once per
//!   renderer from a font file or the system font database
//!
//! # Quick Start
//!
//! ```no_run
//! # use std::path::Path;
//! # use classdraw_core::draw::{FontTextEngine, TextMeasure};
//! let engine = FontTextEngine::from_file(Path::new("assets/fonts/arial.ttf"), None)
//!     .expect("font should load");
//! let size = engine.measure("Customer", 12.0);
//! assert!(size.width() > 0.0);
//! ```

use std::{
    fmt,
    path::Path,
    sync::{Mutex, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, fontdb};
use log::{debug, info};

use crate::{
    color::Color,
    draw::{Canvas, DrawError},
    geometry::{Point, Size},
};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Measures rendered text.
pub trait TextMeasure {
    /// Returns the width and height of `content` rendered on a single line at
    /// `font_size` pixels.
    fn measure(&self, content: &str, font_size: f32) -> Size;
}

/// Measures and draws text.
pub trait TextEngine: TextMeasure {
    /// Draws `content` with its top-left corner at `origin`.
    fn draw_text(
        &self,
        canvas: &mut Canvas,
        content: &str,
        origin: Point,
        font_size: f32,
        color: Color,
    );
}

/// A [`TextEngine`] backed by `cosmic-text` shaping and `swash` rasterization.
///
/// The font system is loaded once and reused for every measurement and draw
/// call. It sits behind a mutex so the engine can be shared by reference.
pub struct FontTextEngine {
    font_system: Mutex<FontSystem>,
    swash_cache: Mutex<SwashCache>,
    family: Option<String>,
}

impl fmt::Debug for FontTextEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontTextEngine")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl FontTextEngine {
    /// Creates an engine from the fonts installed on the host.
    ///
    /// Text uses `family` when given, the generic sans-serif family otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::FontUnavailable`] when the host has no fonts.
    pub fn from_system(family: Option<&str>) -> Result<Self, DrawError> {
        info!("Initializing FontSystem from system fonts");
        let font_system = FontSystem::new();
        if font_system.db().faces().next().is_none() {
            return Err(DrawError::FontUnavailable(
                "the system font database is empty".to_string(),
            ));
        }
        Ok(Self::with_font_system(font_system, family.map(str::to_string)))
    }

    /// Creates an engine from a single font file.
    ///
    /// Text uses `family` when given, the family of the loaded face otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::FontFile`] when the file cannot be read and
    /// [`DrawError::FontUnavailable`] when it contains no usable face.
    pub fn from_file(path: &Path, family: Option<&str>) -> Result<Self, DrawError> {
        info!(path = path.display().to_string(); "Initializing FontSystem from font file");
        let mut db = fontdb::Database::new();
        db.load_font_file(path).map_err(|source| DrawError::FontFile {
            path: path.to_path_buf(),
            source,
        })?;

        let loaded_family = db
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone())
            .ok_or_else(|| {
                DrawError::FontUnavailable(format!("`{}` contains no font face", path.display()))
            })?;
        debug!(family = loaded_family; "Loaded font face");

        let family = family.map_or(loaded_family, str::to_string);
        let font_system = FontSystem::new_with_locale_and_db("en-US".to_string(), db);
        Ok(Self::with_font_system(font_system, Some(family)))
    }

    fn with_font_system(font_system: FontSystem, family: Option<String>) -> Self {
        Self {
            font_system: Mutex::new(font_system),
            swash_cache: Mutex::new(SwashCache::new()),
            family,
        }
    }

    fn attrs(&self) -> Attrs<'_> {
        match &self.family {
            Some(name) => Attrs::new().family(Family::Name(name)),
            None => Attrs::new().family(Family::SansSerif),
        }
    }
}

impl TextMeasure for FontTextEngine {
    fn measure(&self, content: &str, font_size: f32) -> Size {
        if content.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);
        buffer.set_size(None, None);
        buffer.set_text(content, &self.attrs(), Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        // Bounds come from the layout runs: rightmost glyph edge, one line height per run
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if total_height == 0.0 {
            max_width = content.chars().count() as f32 * font_size * 0.55;
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

impl TextEngine for FontTextEngine {
    fn draw_text(
        &self,
        canvas: &mut Canvas,
        content: &str,
        origin: Point,
        font_size: f32,
        color: Color,
    ) {
        if content.is_empty() {
            return;
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut swash_cache = self
            .swash_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);
        buffer.set_size(None, None);
        buffer.set_text(content, &self.attrs(), Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let [r, g, b, a] = color.to_rgba8();
        let left = origin.x().round() as i32;
        let top = origin.y().round() as i32;
        buffer.draw(
            &mut swash_cache,
            cosmic_text::Color::rgba(r, g, b, a),
            |x, y, width, height, coverage| {
                canvas.blend_span(
                    left + x,
                    top + y,
                    width,
                    height,
                    [coverage.r(), coverage.g(), coverage.b(), coverage.a()],
                );
            },
        );
    }
}
