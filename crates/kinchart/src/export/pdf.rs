//! PDF export backend.
//!
//! The chart is drawn as SVG first and converted with `svg2pdf`. Text needs
//! fonts at conversion time: the configured font files are loaded together
//! with the bundled fallback face, which also serves the generic
//! `sans-serif` family. System fonts are never loaded.

use std::path::PathBuf;

use log::{debug, info, warn};

use kinchart_core::{
    draw::{FALLBACK_FONT, FALLBACK_FONT_FAMILY},
    geometry::Size,
};

use crate::export::{self, DocumentWriter};

/// Converts SVG documents to single-page PDF files.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    fonts: Vec<PathBuf>,
    font_family: Option<String>,
}

impl PdfWriter {
    pub fn new(fonts: Vec<PathBuf>) -> Self {
        Self {
            fonts,
            font_family: None,
        }
    }

    /// Font family used for text whose family cannot be resolved.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    fn options(&self) -> svg2pdf::usvg::Options<'static> {
        let mut opt = svg2pdf::usvg::Options::default();
        let fontdb = opt.fontdb_mut();
        for path in &self.fonts {
            if let Err(err) = fontdb.load_font_file(path) {
                warn!(path:? = path, err:%; "Failed to load font file");
            }
        }
        fontdb.load_font_data(FALLBACK_FONT.to_vec());
        fontdb.set_sans_serif_family(FALLBACK_FONT_FAMILY);
        debug!(faces = fontdb.len(); "PDF font database ready");

        opt.font_family = self
            .font_family
            .clone()
            .unwrap_or_else(|| FALLBACK_FONT_FAMILY.to_string());
        opt
    }
}

impl DocumentWriter for PdfWriter {
    fn write_document(&self, page: Size, document: &::svg::Document) -> Result<Vec<u8>, export::Error> {
        info!(width = page.width(), height = page.height(); "Converting chart to PDF");

        let opt = self.options();
        let tree = svg2pdf::usvg::Tree::from_str(&document.to_string(), &opt)
            .map_err(|err| export::Error::Render(format!("invalid SVG: {err}")))?;

        svg2pdf::to_pdf(
            &tree,
            svg2pdf::ConversionOptions::default(),
            svg2pdf::PageOptions::default(),
        )
        .map_err(|err| export::Error::Render(format!("PDF conversion failed: {err:?}")))
    }
}
