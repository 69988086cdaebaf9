//! Text styles, text elements and text measurement.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable, centered text element
//! - [`TextMeasure`] - Measures the rendered size of a string
//!
//! Two measurers are provided. [`EstimatedTextMeasure`] uses fixed glyph
//! proportions and needs no fonts. [`FontTextMeasure`] shapes text with
//! `cosmic-text` against an explicit list of font files plus the bundled
//! [`FALLBACK_FONT`] face.
//!
//! ```
//! # use kinchart_core::draw::{EstimatedTextMeasure, TextDefinition, TextMeasure};
//! let mut style = TextDefinition::new();
//! style.set_font_size(13.0);
//!
//! let width = EstimatedTextMeasure::default().measure("Parents", &style).width();
//! assert!(width > 0.0);
//! ```

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight, fontdb};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Built-in face used when configured fonts are missing or lack a glyph.
pub const FALLBACK_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Family name of [`FALLBACK_FONT`].
pub const FALLBACK_FONT_FAMILY: &str = "DejaVu Sans";

/// Line height relative to the font size.
const LINE_HEIGHT_RATIO: f32 = 1.15;

/// Visual style of a text element.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `11` |
/// | Bold | `false` |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    bold: bool,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Selects the bold weight.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets the text color. `None` uses the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 11.0,
            bold: false,
            color: None,
        }
    }
}

/// A single line of text, horizontally centered on its position.
///
/// The position passed to [`Drawable::render_to_layers`] is the center of the
/// text baseline.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.is_bold() {
            rendered_text = rendered_text.set("font-weight", "bold");
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        rendered_text = rendered_text.add(SvgText::new(self.content));

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }
}

/// Measures rendered text.
///
/// Implementations must be shareable across threads so that independent
/// renders can run in parallel.
pub trait TextMeasure: Send + Sync + std::fmt::Debug {
    /// Returns the size of `text` rendered with `definition`. Empty text
    /// measures as [`Size::default`].
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size;
}

/// Font-independent text measurement from average glyph proportions.
#[derive(Debug, Clone, Copy)]
pub struct EstimatedTextMeasure {
    regular_advance: f32,
    bold_advance: f32,
}

impl Default for EstimatedTextMeasure {
    fn default() -> Self {
        Self {
            regular_advance: 0.5,
            bold_advance: 0.54,
        }
    }
}

impl TextMeasure for EstimatedTextMeasure {
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let advance = if definition.is_bold() {
            self.bold_advance
        } else {
            self.regular_advance
        };
        let width = text.chars().count() as f32 * definition.font_size() * advance;
        Size::new(width, definition.font_size() * LINE_HEIGHT_RATIO)
    }
}

/// Text measurement backed by `cosmic-text` shaping.
///
/// Only the font files handed to [`FontTextMeasure::from_files`] and the
/// bundled [`FALLBACK_FONT`] are loaded; system fonts are never probed.
pub struct FontTextMeasure {
    font_system: Mutex<FontSystem>,
}

impl std::fmt::Debug for FontTextMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontTextMeasure").finish_non_exhaustive()
    }
}

impl FontTextMeasure {
    /// Creates a measurer from font files.
    pub fn from_files(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut sources: Vec<_> = paths.into_iter().map(fontdb::Source::File).collect();
        info!(font_count = sources.len(); "Initializing FontSystem");
        sources.push(fontdb::Source::Binary(Arc::new(FALLBACK_FONT)));

        let mut font_system = FontSystem::new_with_fonts(sources);
        font_system.db_mut().set_sans_serif_family(FALLBACK_FONT_FAMILY);
        Self {
            font_system: Mutex::new(font_system),
        }
    }

    /// Creates a measurer that only knows the bundled fallback face.
    pub fn fallback() -> Self {
        Self::from_files(Vec::new())
    }
}

impl TextMeasure for FontTextMeasure {
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size = definition.font_size();
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_RATIO);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if definition.is_bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .family(Family::Name(definition.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width == 0.0 || total_height == 0.0 {
            // No usable face was loaded
            return EstimatedTextMeasure::default().measure(text, definition);
        }

        Size::new(max_width, total_height)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "sans-serif");
        assert_approx_eq!(f32, def.font_size(), 11.0);
        assert!(!def.is_bold());
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_family("DejaVu Sans");
        def.set_font_size(32.0);
        def.set_bold(true);
        def.set_color(Some(Color::new("white").unwrap()));

        assert_eq!(def.font_family(), "DejaVu Sans");
        assert_approx_eq!(f32, def.font_size(), 32.0);
        assert!(def.is_bold());
        assert!(def.color().is_some());
    }

    #[test]
    fn test_estimated_measure_empty() {
        let size = EstimatedTextMeasure::default().measure("", &TextDefinition::new());
        assert_eq!(size, Size::default());
    }

    #[test]
    fn test_estimated_measure_counts_characters_not_bytes() {
        let def = TextDefinition::new();
        let measure = EstimatedTextMeasure::default();

        let latin = measure.measure("Parents", &def);
        let cyrillic = measure.measure("Родители", &def);
        assert_approx_eq!(f32, latin.width(), 7.0 * 11.0 * 0.5);
        assert_approx_eq!(f32, cyrillic.width(), 8.0 * 11.0 * 0.5);
    }

    #[test]
    fn test_estimated_measure_bold_is_wider() {
        let mut bold = TextDefinition::new();
        bold.set_bold(true);
        let measure = EstimatedTextMeasure::default();

        assert!(
            measure.measure("Children", &bold).width()
                > measure.measure("Children", &TextDefinition::new()).width()
        );
    }

    #[test]
    fn test_font_measure_without_fonts_falls_back() {
        let measure = FontTextMeasure::from_files(Vec::new());
        let def = TextDefinition::new();

        assert_eq!(measure.measure("", &def), Size::default());
        assert!(measure.measure("Grandchildren", &def).width() > 0.0);
    }

    #[test]
    fn test_font_measure_shapes_with_bundled_face() {
        let measure = FontTextMeasure::fallback();
        let mut def = TextDefinition::new();
        def.set_font_family(FALLBACK_FONT_FAMILY);
        def.set_font_size(20.0);

        let narrow = measure.measure("iii", &def).width();
        let wide = measure.measure("WWW", &def).width();
        assert!(narrow > 0.0);
        assert!(wide > narrow);
        assert!(measure.measure("Родители", &def).width() > 0.0);
    }

    #[test]
    fn test_fallback_font_is_parseable() {
        let mut db = fontdb::Database::new();
        db.load_font_data(FALLBACK_FONT.to_vec());

        let families: Vec<_> = db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect();
        assert!(families.iter().any(|name| name == FALLBACK_FONT_FAMILY));
    }

    #[test]
    fn test_text_render_to_layers() {
        let mut def = TextDefinition::new();
        def.set_bold(true);
        def.set_color(Some(Color::new("white").unwrap()));
        let text = Text::new(&def, "Family Tree");
        assert_eq!(text.content(), "Family Tree");

        let output = text.render_to_layers(Point::new(100.0, 45.0));
        assert_eq!(output.layer_len(RenderLayer::Text), 1);

        let rendered = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect::<String>();
        assert!(rendered.contains("text-anchor=\"middle\""));
        assert!(rendered.contains("font-weight=\"bold\""));
        assert!(rendered.contains("Family Tree"));
    }
}
