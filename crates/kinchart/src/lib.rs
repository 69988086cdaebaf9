//! Kinchart - printable family tree charts.
//!
//! Kinchart groups family members into generation rows, pairs partners,
//! lays the rows out on a page, routes parent to child connectors and draws
//! the result as SVG or PDF.
//!
//! The pipeline stages are available individually ([`FamilyStructure`],
//! [`LayoutEngine`], [`route_connectors`]); [`ChartBuilder`] runs them in
//! order.

pub mod config;
pub mod export;
pub mod locale;
pub mod portrait;
pub mod request;
pub mod store;

mod couple;
mod diagram;
mod error;
mod gender;
mod generation;
mod layout;
mod routing;
mod sequence;
mod structure;

pub use kinchart_core::{color, draw, family, geometry, page};

pub use couple::{Couple, find_couples};
pub use diagram::Diagram;
pub use error::KinchartError;
pub use gender::{GenderHint, gender_hint};
pub use generation::GenerationBucket;
pub use layout::{CardPosition, ChartLayout, LayoutEngine, RowLayout};
pub use routing::{Connector, route_connectors};
pub use sequence::order_generation;
pub use structure::{FamilyStructure, GenerationRow};

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info, trace};

use kinchart_core::{
    draw::{EstimatedTextMeasure, FontTextMeasure, TextMeasure},
    family::Member,
};

use config::AppConfig;
use export::{DocumentWriter, OutputFormat};
use portrait::{CircularPortrait, PortraitRenderer};

/// Builder for laying out and rendering family charts.
///
/// A builder is immutable once configured and can be shared between threads
/// to render independent charts in parallel.
///
/// # Examples
///
/// ```rust
/// use kinchart::{ChartBuilder, config::AppConfig};
/// use kinchart::family::{Member, Role};
///
/// let members = vec![
///     Member::new("1", "Ivan", "Petrov", Role::Father),
///     Member::new("2", "Anna", "Petrova", Role::Mother),
///     Member::new("3", "Oleg", "Petrov", Role::Son).with_father("1").with_mother("2"),
/// ];
///
/// let builder = ChartBuilder::new(AppConfig::default());
/// let diagram = builder.layout(&members).expect("Failed to lay out");
/// assert_eq!(diagram.connectors().len(), 2);
///
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    config: AppConfig,
    text_measure: Arc<dyn TextMeasure>,
    portraits: Arc<dyn PortraitRenderer>,
    generated_on: Option<NaiveDate>,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ChartBuilder {
    /// Creates a builder from `config`.
    ///
    /// Text is measured with the configured font files, or with glyph
    /// estimates when none are configured.
    pub fn new(config: AppConfig) -> Self {
        let fonts = config.style().fonts();
        let text_measure: Arc<dyn TextMeasure> = if fonts.is_empty() {
            Arc::new(EstimatedTextMeasure::default())
        } else {
            Arc::new(FontTextMeasure::from_files(fonts.iter().cloned()))
        };

        Self {
            config,
            text_measure,
            portraits: Arc::new(CircularPortrait::default()),
            generated_on: None,
        }
    }

    /// Replaces the text measurer.
    pub fn with_text_measure(mut self, text_measure: Arc<dyn TextMeasure>) -> Self {
        self.text_measure = text_measure;
        self
    }

    /// Replaces the portrait renderer.
    pub fn with_portrait_renderer(mut self, portraits: Arc<dyn PortraitRenderer>) -> Self {
        self.portraits = portraits;
        self
    }

    /// Fixes the footer date instead of using today's date.
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Groups, orders and positions `members` and routes their connectors.
    ///
    /// # Errors
    ///
    /// Returns [`KinchartError::EmptyInput`] when `members` is empty.
    pub fn layout<'a>(&self, members: &'a [Member]) -> Result<Diagram<'a>, KinchartError> {
        if members.is_empty() {
            return Err(KinchartError::EmptyInput);
        }

        info!(members = members.len(), page:% = self.config.page(); "Building family structure");
        let structure = FamilyStructure::from_members(members);

        let engine = LayoutEngine::new(self.config.layout().clone());
        let layout = engine.calculate(&structure, self.config.page().dimensions());

        let connectors = route_connectors(&layout, members);
        debug!(connectors = connectors.len(); "Diagram assembled");

        let diagram = Diagram::new(structure, layout, connectors);
        trace!(diagram:?; "Diagram");
        Ok(diagram)
    }

    /// Renders a laid-out diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`KinchartError::Config`] if a configured color is invalid.
    pub fn render_svg(&self, diagram: &Diagram<'_>) -> Result<String, KinchartError> {
        let document = self.render_document(diagram)?;
        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Renders a laid-out diagram in the given output format.
    ///
    /// # Errors
    ///
    /// Returns [`KinchartError::Config`] if a configured color is invalid and
    /// [`KinchartError::Export`] if the format is unavailable in this build
    /// or conversion fails.
    pub fn render(&self, diagram: &Diagram<'_>, format: OutputFormat) -> Result<Vec<u8>, KinchartError> {
        let document = self.render_document(diagram)?;
        let page = diagram.layout().page();

        let bytes = match format {
            OutputFormat::Svg => export::svg::SvgWriter.write_document(page, &document)?,
            #[cfg(feature = "pdf")]
            OutputFormat::Pdf => export::pdf::PdfWriter::new(self.config.style().fonts().to_vec())
                .with_font_family(self.config.style().font_family())
                .write_document(page, &document)?,
            #[cfg(not(feature = "pdf"))]
            OutputFormat::Pdf => return Err(export::Error::Unsupported(format).into()),
        };

        info!(format:% = format, bytes = bytes.len(); "Chart rendered");
        Ok(bytes)
    }

    /// Lays out and renders `members` in one call.
    ///
    /// # Errors
    ///
    /// See [`ChartBuilder::layout`] and [`ChartBuilder::render`].
    pub fn build(&self, members: &[Member], format: OutputFormat) -> Result<Vec<u8>, KinchartError> {
        let diagram = self.layout(members)?;
        self.render(&diagram, format)
    }

    fn render_document(&self, diagram: &Diagram<'_>) -> Result<::svg::Document, KinchartError> {
        let mut builder = export::svg::SvgBuilder::new(self.text_measure.as_ref(), self.portraits.as_ref())
            .with_style(self.config.style())
            .with_content(self.config.content());
        if let Some(date) = self.generated_on {
            builder = builder.with_generated_on(date);
        }

        let svg = builder.build().map_err(|err| KinchartError::Config(err.to_string()))?;
        Ok(svg.render(diagram))
    }
}
