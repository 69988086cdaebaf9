//! Configuration types for chart layout and rendering.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Card, gap and margin sizes in points.
//! - [`StyleConfig`] - Colors and font files.
//! - [`ContentConfig`] - Title, subtitle, optional card fields and locale.
//!
//! # Example
//!
//! ```
//! # use kinchart::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().palette().is_ok());
//! assert_eq!(config.layout().card_width(), 130.0);
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use kinchart_core::{color::Color, page::PageSpec};

use crate::locale::Locale;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    page: PageSpec,

    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    content: ContentConfig,
}

impl AppConfig {
    pub fn new(
        page: PageSpec,
        layout: LayoutConfig,
        style: StyleConfig,
        content: ContentConfig,
    ) -> Self {
        Self {
            page,
            layout,
            style,
            content,
        }
    }

    pub fn page(&self) -> PageSpec {
        self.page
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn content(&self) -> &ContentConfig {
        &self.content
    }

    /// Replaces the page format.
    pub fn set_page(&mut self, page: PageSpec) {
        self.page = page;
    }

    /// Mutable access to the content section, for per-request overrides.
    pub fn content_mut(&mut self) -> &mut ContentConfig {
        &mut self.content
    }
}

/// Card and spacing sizes, in points.
///
/// Vertical sizes are the unscaled values; the layout engine shrinks card
/// height and generation gap when a chart would overflow the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    card_width: f32,
    card_height: f32,
    card_gap: f32,
    generation_gap: f32,
    label_height: f32,
    header_height: f32,
    top_margin: f32,
    bottom_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 130.0,
            card_height: 145.0,
            card_gap: 25.0,
            generation_gap: 50.0,
            label_height: 25.0,
            header_height: 70.0,
            top_margin: 30.0,
            bottom_margin: 40.0,
        }
    }
}

impl LayoutConfig {
    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn card_height(&self) -> f32 {
        self.card_height
    }

    /// Horizontal space between neighbouring cards.
    pub fn card_gap(&self) -> f32 {
        self.card_gap
    }

    /// Vertical space between the bottom of one row and the next row label.
    pub fn generation_gap(&self) -> f32 {
        self.generation_gap
    }

    /// Height reserved above each row for its label.
    pub fn label_height(&self) -> f32 {
        self.label_height
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Space between the header band and the first row label.
    pub fn top_margin(&self) -> f32 {
        self.top_margin
    }

    /// Space kept free for the footer below the last row.
    pub fn bottom_margin(&self) -> f32 {
        self.bottom_margin
    }
}

/// Colors and fonts. Colors are CSS color strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background: String,
    primary: String,
    primary_light: String,
    accent: String,
    text: String,
    muted_text: String,
    header_text: String,
    subtitle: String,
    line: String,
    card_fill: String,
    card_border: String,
    card_shadow: String,
    avatar_fill: String,
    font_family: String,
    fonts: Vec<PathBuf>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#f8f6ff".to_string(),
            primary: "#5e43ec".to_string(),
            primary_light: "#8264ff".to_string(),
            accent: "#ff6b35".to_string(),
            text: "#1e1e1e".to_string(),
            muted_text: "#646464".to_string(),
            header_text: "white".to_string(),
            subtitle: "#e6e6f2".to_string(),
            line: "#a08cc8".to_string(),
            card_fill: "white".to_string(),
            card_border: "#b4a0dc".to_string(),
            card_shadow: "#d9d4e0".to_string(),
            avatar_fill: "#ebe6f5".to_string(),
            font_family: "sans-serif".to_string(),
            fonts: Vec::new(),
        }
    }
}

impl StyleConfig {
    /// Font family written into the SVG and used for measurement.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Font files used for text measurement and PDF conversion.
    pub fn fonts(&self) -> &[PathBuf] {
        &self.fonts
    }

    /// Parses every configured color.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field whose color string cannot be
    /// parsed.
    pub fn palette(&self) -> Result<Palette, String> {
        let parse = |field: &str, value: &str| {
            Color::new(value).map_err(|err| format!("Invalid {field} color in config: {err}"))
        };

        Ok(Palette {
            background: parse("background", &self.background)?,
            primary: parse("primary", &self.primary)?,
            primary_light: parse("primary_light", &self.primary_light)?,
            accent: parse("accent", &self.accent)?,
            text: parse("text", &self.text)?,
            muted_text: parse("muted_text", &self.muted_text)?,
            header_text: parse("header_text", &self.header_text)?,
            subtitle: parse("subtitle", &self.subtitle)?,
            line: parse("line", &self.line)?,
            card_fill: parse("card_fill", &self.card_fill)?,
            card_border: parse("card_border", &self.card_border)?,
            card_shadow: parse("card_shadow", &self.card_shadow)?,
            avatar_fill: parse("avatar_fill", &self.avatar_fill)?,
        })
    }
}

/// Parsed chart colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Header band, card accents, portrait rings, role captions and anchor dots.
    pub primary: Color,
    /// Header accent rule.
    pub primary_light: Color,
    /// Generation labels.
    pub accent: Color,
    /// Member names.
    pub text: Color,
    /// Birth dates, patronymics, footer and placeholder glyphs.
    pub muted_text: Color,
    /// Header title.
    pub header_text: Color,
    /// Header subtitle.
    pub subtitle: Color,
    /// Connectors and rules.
    pub line: Color,
    pub card_fill: Color,
    pub card_border: Color,
    pub card_shadow: Color,
    /// Placeholder avatar disc.
    pub avatar_fill: Color,
}

/// What is printed on a chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    title: Option<String>,
    subtitle: Option<String>,
    show_photos: bool,
    show_dates: bool,
    show_patronymic: bool,
    locale: Locale,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            show_photos: true,
            show_dates: true,
            show_patronymic: true,
            locale: Locale::default(),
        }
    }
}

impl ContentConfig {
    /// Chart title, falling back to the locale default.
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| self.locale.default_title())
    }

    /// Chart subtitle, falling back to the locale default.
    pub fn subtitle(&self) -> &str {
        self.subtitle
            .as_deref()
            .unwrap_or_else(|| self.locale.default_subtitle())
    }

    pub fn show_photos(&self) -> bool {
        self.show_photos
    }

    pub fn show_dates(&self) -> bool {
        self.show_dates
    }

    pub fn show_patronymic(&self) -> bool {
        self.show_patronymic
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_show_photos(&mut self, show: bool) {
        self.show_photos = show;
    }

    pub fn set_show_dates(&mut self, show: bool) {
        self.show_dates = show;
    }

    pub fn set_show_patronymic(&mut self, show: bool) {
        self.show_patronymic = show;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }
}

#[cfg(test)]
mod tests {
    use kinchart_core::page::{Orientation, PageSize};

    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page(), PageSpec::default());
        assert_eq!(config.layout(), &LayoutConfig::default());
        assert_eq!(config.style(), &StyleConfig::default());
        assert_eq!(config.content(), &ContentConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "page": {"size": "a3", "orientation": "portrait"},
                "layout": {"card_width": 150.0},
                "style": {"accent": "red", "fonts": ["/tmp/font.ttf"]},
                "content": {"show_dates": false, "locale": "ru"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.page(), PageSpec::new(PageSize::A3, Orientation::Portrait));
        assert_eq!(config.layout().card_width(), 150.0);
        assert_eq!(config.layout().card_height(), 145.0);
        assert_eq!(config.style().fonts().len(), 1);
        assert!(!config.content().show_dates());
        assert!(config.content().show_photos());
        assert_eq!(config.content().locale(), Locale::Ru);
    }

    #[test]
    fn test_default_palette() {
        let palette = StyleConfig::default().palette().unwrap();
        assert_eq!(palette.card_fill, Color::new("white").unwrap());
    }

    #[test]
    fn test_invalid_color_names_field() {
        let style: StyleConfig = serde_json::from_str(r#"{"line": "not-a-color"}"#).unwrap();
        let err = style.palette().unwrap_err();
        assert!(err.contains("line"));
    }

    #[test]
    fn test_title_fallback() {
        let mut content = ContentConfig::default();
        assert_eq!(content.title(), "FAMILY TREE");

        content.set_locale(Locale::Ru);
        assert_eq!(content.title(), "СЕМЕЙНОЕ ДРЕВО");

        content.set_title("  ");
        assert_eq!(content.title(), "СЕМЕЙНОЕ ДРЕВО");

        content.set_title("The Petrovs");
        assert_eq!(content.title(), "The Petrovs");
    }
}
