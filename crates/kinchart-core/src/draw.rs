//! Drawing primitives for chart rendering.
//!
//! Everything drawn on a chart page ends up as SVG nodes grouped into
//! [`RenderLayer`]s. Elements that know how to place themselves implement
//! the [`Drawable`] trait.

mod layer;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{
    EstimatedTextMeasure, FALLBACK_FONT, FALLBACK_FONT_FAMILY, FontTextMeasure, Text, TextDefinition,
    TextMeasure,
};

use crate::geometry::Point;

/// An element that can render itself at a position.
///
/// The meaning of `position` is defined by the implementor (for
/// [`Text`] it is the horizontal center of the baseline).
pub trait Drawable: std::fmt::Debug {
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
