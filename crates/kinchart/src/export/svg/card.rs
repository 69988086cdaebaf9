//! Member cards.

use log::warn;
use svg::node::element as svg_element;

use kinchart_core::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text},
    family::Member,
    geometry::Point,
};

use super::Svg;
use crate::layout::CardPosition;

const CORNER_RADIUS: f32 = 10.0;
const SHADOW_OFFSET: f32 = 4.0;
const PORTRAIT_SIZE: f32 = 50.0;
/// Distance from the card top to the portrait top.
const PORTRAIT_TOP: f32 = 20.0;
/// Distance from the card top to the name baseline.
const NAME_BASELINE: f32 = 78.0;

/// Names longer than this many characters are shortened.
const NAME_LIMIT: usize = 16;
const NAME_KEEP: usize = 14;
const PATRONYMIC_LIMIT: usize = 18;
const PATRONYMIC_KEEP: usize = 16;

impl Svg<'_> {
    /// Draws one member card: shadow, body, border, top accent, portrait and
    /// text lines.
    pub(super) fn render_card(
        &self,
        member: &Member,
        position: &CardPosition,
        card_width: f32,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = position.bounds(card_width);
        let (x, y) = (bounds.min_x(), bounds.min_y());
        let (width, height) = (bounds.width(), bounds.height());

        let shadow = svg_element::Rectangle::new()
            .set("x", x + SHADOW_OFFSET)
            .set("y", y + SHADOW_OFFSET)
            .set("width", width)
            .set("height", height)
            .set("rx", CORNER_RADIUS)
            .set("fill", self.palette.card_shadow);
        output.add_to_layer(RenderLayer::Card, Box::new(shadow));

        let body = svg_element::Rectangle::new()
            .set("data-member", member.id().as_str())
            .set("x", x)
            .set("y", y)
            .set("width", width)
            .set("height", height)
            .set("rx", CORNER_RADIUS)
            .set("fill", self.palette.card_fill);
        output.add_to_layer(RenderLayer::Card, Box::new(body));

        let border = apply_stroke!(
            svg_element::Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", width)
                .set("height", height)
                .set("rx", CORNER_RADIUS)
                .set("fill", "none"),
            &StrokeDefinition::new(self.palette.card_border, 1.5)
        );
        output.add_to_layer(RenderLayer::Card, Box::new(border));

        // Top strip with rounded upper corners and a flat lower edge
        let r = CORNER_RADIUS;
        let accent = svg_element::Path::new()
            .set(
                "d",
                format!(
                    "M {x} {} A {r} {r} 0 0 1 {} {y} H {} A {r} {r} 0 0 1 {} {} Z",
                    y + r,
                    x + r,
                    x + width - r,
                    x + width,
                    y + r,
                ),
            )
            .set("fill", self.palette.primary);
        output.add_to_layer(RenderLayer::Card, Box::new(accent));

        let portrait_center = Point::new(
            position.x_center(),
            y + PORTRAIT_TOP + PORTRAIT_SIZE / 2.0,
        );
        output.merge(self.render_portrait(member, portrait_center));

        output.merge(self.render_card_text(member, position.x_center(), y));
        output
    }

    /// Draws the member's photo, or a placeholder avatar when there is none
    /// or it cannot be decoded.
    fn render_portrait(&self, member: &Member, center: Point) -> LayeredOutput {
        let photo = member.photo().filter(|_| self.content.show_photos());
        let Some(photo) = photo else {
            return self.render_placeholder(center);
        };

        match self.portraits.render(photo, PORTRAIT_SIZE) {
            Ok(portrait) => {
                let mut output = LayeredOutput::new();
                let radius = PORTRAIT_SIZE / 2.0;

                let ring = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", radius + 3.0)
                    .set("fill", self.palette.primary);
                let disc = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", radius)
                    .set("fill", self.palette.card_fill);
                let image = svg_element::Image::new()
                    .set("x", center.x() - radius)
                    .set("y", center.y() - radius)
                    .set("width", PORTRAIT_SIZE)
                    .set("height", PORTRAIT_SIZE)
                    .set("href", portrait.href());

                output.add_to_layer(RenderLayer::Portrait, Box::new(ring));
                output.add_to_layer(RenderLayer::Portrait, Box::new(disc));
                output.add_to_layer(RenderLayer::Portrait, Box::new(image));
                output
            }
            Err(err) => {
                warn!(member:% = member.id(), err:%; "Photo could not be rendered, using placeholder");
                self.render_placeholder(center)
            }
        }
    }

    fn render_placeholder(&self, center: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let radius = PORTRAIT_SIZE / 2.0;

        let disc = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", self.palette.avatar_fill);
        let outline = apply_stroke!(
            svg_element::Circle::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", radius)
                .set("fill", "none"),
            &StrokeDefinition::new(self.palette.card_border, 2.0)
        );
        let head = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y() - 8.0)
            .set("r", 8)
            .set("fill", self.palette.muted_text);
        let shoulders = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y() + 10.0)
            .set("rx", 12)
            .set("ry", 8)
            .set("fill", self.palette.muted_text);

        output.add_to_layer(RenderLayer::Portrait, Box::new(disc));
        output.add_to_layer(RenderLayer::Portrait, Box::new(outline));
        output.add_to_layer(RenderLayer::Portrait, Box::new(head));
        output.add_to_layer(RenderLayer::Portrait, Box::new(shoulders));
        output
    }

    /// Name, optional patronymic, role caption and optional birth date,
    /// stacked below the portrait.
    fn render_card_text(&self, member: &Member, x_center: f32, card_top: f32) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let mut baseline = card_top + NAME_BASELINE;

        let name = truncate(&member.display_name(), NAME_LIMIT, NAME_KEEP);
        let name_style = self.text_style(11.0, true, self.palette.text);
        output.merge(Text::new(&name_style, &name).render_to_layers(Point::new(x_center, baseline)));
        baseline += 13.0;

        let detail_style = self.text_style(9.0, false, self.palette.muted_text);
        if let Some(patronymic) = member.patronymic().filter(|_| self.content.show_patronymic()) {
            let patronymic = truncate(patronymic, PATRONYMIC_LIMIT, PATRONYMIC_KEEP);
            output.merge(
                Text::new(&detail_style, &patronymic)
                    .render_to_layers(Point::new(x_center, baseline)),
            );
            baseline += 11.0;
        }

        let role = self.content.locale().role_label(member.role());
        let role_style = self.text_style(9.0, true, self.palette.primary);
        output.merge(Text::new(&role_style, role).render_to_layers(Point::new(x_center, baseline)));
        baseline += 12.0;

        if let Some(birth_date) = member.birth_date().filter(|_| self.content.show_dates()) {
            output.merge(
                Text::new(&detail_style, birth_date).render_to_layers(Point::new(x_center, baseline)),
            );
        }

        output
    }
}

/// Shortens `text` to `keep` characters followed by `..` when it is longer
/// than `limit` characters.
fn truncate(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() > limit {
        let mut shortened: String = text.chars().take(keep).collect();
        shortened.push_str("..");
        shortened
    } else {
        text.to_string()
    }
}
