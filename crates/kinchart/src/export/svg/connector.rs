use svg::node::element as svg_element;

use kinchart_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
};

use super::Svg;
use crate::routing::Connector;

const CONNECTOR_WIDTH: f32 = 2.0;
const ANCHOR_RADIUS: f32 = 4.0;

impl Svg<'_> {
    /// Draws a connector path and its anchor dot on the child's card.
    pub(super) fn render_connector(&self, connector: &Connector) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let data = connector
            .path()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command} {} {}", point.x(), point.y())
            })
            .collect::<Vec<_>>()
            .join(" ");

        let path = apply_stroke!(
            svg_element::Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("data-parent", connector.parent().as_str())
                .set("data-child", connector.child().as_str()),
            &StrokeDefinition::new(self.palette.line, CONNECTOR_WIDTH)
        );
        output.add_to_layer(RenderLayer::Connector, Box::new(path));

        let anchor = connector.anchor();
        let dot = svg_element::Circle::new()
            .set("cx", anchor.x())
            .set("cy", anchor.y())
            .set("r", ANCHOR_RADIUS)
            .set("fill", self.palette.primary);
        output.add_to_layer(RenderLayer::Connector, Box::new(dot));

        output
    }
}
