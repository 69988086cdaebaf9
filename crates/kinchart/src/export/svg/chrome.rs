//! Page background, header, generation labels and footer.

use svg::node::element as svg_element;

use kinchart_core::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextMeasure},
    geometry::{Point, Size},
};

use super::Svg;
use crate::layout::RowLayout;

/// Horizontal inset of the header accent rule and the footer divider.
const RULE_INSET: f32 = 50.0;
/// Length of each rule flanking a generation label.
const LABEL_RULE_LENGTH: f32 = 70.0;
/// Gap between a generation label's text box and its rules.
const LABEL_RULE_GAP: f32 = 10.0;
/// Horizontal padding added to a measured generation label.
const LABEL_PADDING: f32 = 20.0;

impl Svg<'_> {
    pub(super) fn render_background(&self, page: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", page.width())
            .set("height", page.height())
            .set("fill", self.palette.background);
        output.add_to_layer(RenderLayer::Background, Box::new(background));
        output
    }

    /// Header band with its accent rule, title and subtitle.
    pub(super) fn render_header(&self, page: Size, height: f32) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let band = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", page.width())
            .set("height", height)
            .set("fill", self.palette.primary);
        output.add_to_layer(RenderLayer::Chrome, Box::new(band));

        let accent = StrokeDefinition::new(self.palette.primary_light, 3.0);
        let rule = apply_stroke!(
            svg_element::Line::new()
                .set("x1", RULE_INSET)
                .set("y1", height)
                .set("x2", page.width() - RULE_INSET)
                .set("y2", height),
            &accent
        );
        output.add_to_layer(RenderLayer::Chrome, Box::new(rule));

        let center = page.width() / 2.0;
        let title_style = self.text_style(32.0, true, self.palette.header_text);
        output.merge(
            Text::new(&title_style, self.content.title())
                .render_to_layers(Point::new(center, height - 25.0)),
        );

        let subtitle_style = self.text_style(11.0, false, self.palette.subtitle);
        output.merge(
            Text::new(&subtitle_style, self.content.subtitle())
                .render_to_layers(Point::new(center, height - 8.0)),
        );

        output
    }

    /// Centered row label flanked by two short rules.
    pub(super) fn render_generation_label(&self, row: &RowLayout) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let label = self.content.locale().generation_label(row.bucket());
        let style = self.text_style(13.0, true, self.palette.accent);
        let anchor = row.label_anchor();

        let half_width = (self.text_measure.measure(label, &style).width() + LABEL_PADDING) / 2.0;
        let stroke = StrokeDefinition::new(self.palette.line, 1.5);
        let inner = half_width + LABEL_RULE_GAP;
        for (from, to) in [
            (anchor.x() - inner - LABEL_RULE_LENGTH, anchor.x() - inner),
            (anchor.x() + inner, anchor.x() + inner + LABEL_RULE_LENGTH),
        ] {
            let rule = apply_stroke!(
                svg_element::Line::new()
                    .set("x1", from)
                    .set("y1", anchor.y())
                    .set("x2", to)
                    .set("y2", anchor.y()),
                &stroke
            );
            output.add_to_layer(RenderLayer::Chrome, Box::new(rule));
        }

        output.merge(Text::new(&style, label).render_to_layers(anchor.add_point(Point::new(0.0, 4.0))));
        output
    }

    /// Creation date and divider rule at the bottom of the page.
    pub(super) fn render_footer(&self, page: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let divider = apply_stroke!(
            svg_element::Line::new()
                .set("x1", RULE_INSET)
                .set("y1", page.height() - 30.0)
                .set("x2", page.width() - RULE_INSET)
                .set("y2", page.height() - 30.0),
            &StrokeDefinition::new(self.palette.line, 0.5)
        );
        output.add_to_layer(RenderLayer::Chrome, Box::new(divider));

        let footer = format!(
            "{}: {}",
            self.content.locale().created_on(),
            self.generated_on.format("%d.%m.%Y")
        );
        let style = self.text_style(9.0, false, self.palette.muted_text);
        output.merge(
            Text::new(&style, &footer)
                .render_to_layers(Point::new(page.width() / 2.0, page.height() - 15.0)),
        );

        output
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use kinchart_core::draw::EstimatedTextMeasure;

    use super::*;
    use crate::{config::ContentConfig, export::svg::SvgBuilder, portrait::CircularPortrait};

    fn rendered(output: LayeredOutput) -> String {
        output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_footer_date_format() {
        let measure = EstimatedTextMeasure::default();
        let portraits = CircularPortrait::default();
        let mut content = ContentConfig::default();
        content.set_locale(crate::locale::Locale::Ru);
        let svg = SvgBuilder::new(&measure, &portraits)
            .with_content(&content)
            .with_generated_on(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap())
            .build()
            .unwrap();

        let footer = rendered(svg.render_footer(Size::new(842.0, 595.0)));
        assert!(footer.contains("Дата создания: 01.12.2025"));
        assert!(footer.contains("y1=\"565\""));
    }

    #[test]
    fn test_header_uses_title() {
        let measure = EstimatedTextMeasure::default();
        let portraits = CircularPortrait::default();
        let mut content = ContentConfig::default();
        content.set_title("The Petrovs");
        let svg = SvgBuilder::new(&measure, &portraits)
            .with_content(&content)
            .build()
            .unwrap();

        let header = rendered(svg.render_header(Size::new(842.0, 595.0), 70.0));
        assert!(header.contains("The Petrovs"));
        assert!(header.contains("Created with Kinchart"));
        assert!(header.contains("y=\"45\""));
    }
}
