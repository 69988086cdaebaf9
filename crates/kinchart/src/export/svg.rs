//! SVG export backend.
//!
//! [`SvgBuilder`] collects the style, content options and collaborators a
//! render needs and produces an [`Svg`] renderer. [`Svg::render`] draws a
//! [`Diagram`] in one top-to-bottom pass:
//!
//! 1. page background and header band
//! 2. generation labels
//! 3. member cards with portraits
//! 4. connectors, above the cards
//! 5. footer
//!
//! Every element is placed on a [`RenderLayer`](kinchart_core::draw::RenderLayer)
//! so the z-order of the output does not depend on drawing order.

mod card;
mod chrome;
mod connector;

use chrono::NaiveDate;
use log::{debug, info};
use svg::Document;

use kinchart_core::{
    color::Color,
    draw::{LayeredOutput, TextDefinition, TextMeasure},
    geometry::Size,
};

use crate::{
    config::{ContentConfig, Palette, StyleConfig},
    diagram::Diagram,
    export::{self, DocumentWriter},
    portrait::PortraitRenderer,
};

/// Builder for [`Svg`] renderers.
#[derive(Debug)]
pub struct SvgBuilder<'a> {
    text_measure: &'a dyn TextMeasure,
    portraits: &'a dyn PortraitRenderer,
    style: Option<&'a StyleConfig>,
    content: Option<&'a ContentConfig>,
    generated_on: Option<NaiveDate>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new(text_measure: &'a dyn TextMeasure, portraits: &'a dyn PortraitRenderer) -> Self {
        Self {
            text_measure,
            portraits,
            style: None,
            content: None,
            generated_on: None,
        }
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_content(mut self, content: &'a ContentConfig) -> Self {
        self.content = Some(content);
        self
    }

    /// Sets the date printed in the footer. Defaults to today.
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Builds the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg<'a>, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);
        let palette = style.palette().map_err(export::Error::Render)?;

        Ok(Svg {
            palette,
            font_family: style.font_family().to_string(),
            content: self.content.cloned().unwrap_or_default(),
            text_measure: self.text_measure,
            portraits: self.portraits,
            generated_on: self
                .generated_on
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        })
    }
}

/// Draws diagrams into SVG documents.
#[derive(Debug)]
pub struct Svg<'a> {
    palette: Palette,
    font_family: String,
    content: ContentConfig,
    text_measure: &'a dyn TextMeasure,
    portraits: &'a dyn PortraitRenderer,
    generated_on: NaiveDate,
}

impl Svg<'_> {
    /// Draws `diagram` into a new SVG document sized to its page.
    pub fn render(&self, diagram: &Diagram<'_>) -> Document {
        let layout = diagram.layout();
        let page = layout.page();
        info!(
            width = page.width(),
            height = page.height(),
            cards = layout.positions().len(),
            connectors = diagram.connectors().len();
            "Rendering chart"
        );

        let mut output = LayeredOutput::new();
        output.merge(self.render_background(page));
        output.merge(self.render_header(page, layout.header_height()));

        for row in layout.rows() {
            output.merge(self.render_generation_label(row));
        }

        let card_width = layout.card_size().width();
        for (member, position) in diagram.cards() {
            output.merge(self.render_card(member, position, card_width));
        }

        for connector in diagram.connectors() {
            output.merge(self.render_connector(connector));
        }

        output.merge(self.render_footer(page));

        let document = output.render().into_iter().fold(
            Document::new()
                .set("viewBox", (0, 0, page.width(), page.height()))
                .set("width", page.width())
                .set("height", page.height()),
            |document, node| document.add(node),
        );
        debug!("SVG document rendered");
        document
    }

    fn text_style(&self, font_size: f32, bold: bool, color: Color) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.font_family);
        definition.set_font_size(font_size);
        definition.set_bold(bold);
        definition.set_color(Some(color));
        definition
    }
}

/// Serializes SVG documents as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgWriter;

impl DocumentWriter for SvgWriter {
    fn write_document(&self, _page: Size, document: &Document) -> Result<Vec<u8>, export::Error> {
        Ok(document.to_string().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use kinchart_core::{
        draw::EstimatedTextMeasure,
        family::{Member, Role},
        page::PageSpec,
    };

    use super::*;
    use crate::{
        layout::LayoutEngine,
        portrait::CircularPortrait,
        routing::route_connectors,
        structure::FamilyStructure,
    };

    fn render_members(members: &[Member], content: &ContentConfig) -> String {
        let structure = FamilyStructure::from_members(members);
        let layout = LayoutEngine::default().calculate(&structure, PageSpec::default().dimensions());
        let connectors = route_connectors(&layout, members);
        let diagram = Diagram::new(structure, layout, connectors);

        let measure = EstimatedTextMeasure::default();
        let portraits = CircularPortrait::default();
        let svg = SvgBuilder::new(&measure, &portraits)
            .with_content(content)
            .with_generated_on(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
            .build()
            .unwrap();
        svg.render(&diagram).to_string()
    }

    fn family() -> Vec<Member> {
        vec![
            Member::new("1", "Ivan", "Petrov", Role::Father).with_birth_date("01.02.1970"),
            Member::new("2", "Anna", "Petrova", Role::Mother).with_patronymic("Sergeevna"),
            Member::new("3", "Oleg", "Petrov", Role::Son)
                .with_father("1")
                .with_mother("2"),
        ]
    }

    #[test]
    fn test_render_contains_chart_parts() {
        let rendered = render_members(&family(), &ContentConfig::default());

        assert!(rendered.contains("FAMILY TREE"));
        assert!(rendered.contains("Parents"));
        assert!(rendered.contains("Children"));
        assert!(rendered.contains("Petrov Ivan"));
        assert!(rendered.contains("Sergeevna"));
        assert!(rendered.contains("01.02.1970"));
        assert!(rendered.contains("Created on: 09.03.2024"));
        assert_eq!(rendered.matches("data-member=").count(), 3);
        assert_eq!(rendered.matches("data-child=\"3\"").count(), 2);
    }

    #[test]
    fn test_layers_in_z_order() {
        let rendered = render_members(&family(), &ContentConfig::default());

        let card = rendered.find("data-layer=\"card\"").unwrap();
        let connector = rendered.find("data-layer=\"connector\"").unwrap();
        assert!(card < connector);
    }

    #[test]
    fn test_optional_fields_hidden() {
        let mut content = ContentConfig::default();
        content.set_show_dates(false);
        content.set_show_patronymic(false);
        let rendered = render_members(&family(), &content);

        assert!(!rendered.contains("01.02.1970"));
        assert!(!rendered.contains("Sergeevna"));
    }

    #[test]
    fn test_invalid_style_rejected() {
        let style: StyleConfig = serde_json::from_str(r#"{"primary": "nope"}"#).unwrap();
        let measure = EstimatedTextMeasure::default();
        let portraits = CircularPortrait::default();

        let result = SvgBuilder::new(&measure, &portraits).with_style(&style).build();
        assert!(matches!(result, Err(export::Error::Render(_))));
    }

    #[test]
    fn test_render_is_deterministic() {
        let members = family();
        let content = ContentConfig::default();
        assert_eq!(render_members(&members, &content), render_members(&members, &content));
    }
}
