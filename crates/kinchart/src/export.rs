//! Export of laid-out charts to output documents.
//!
//! # Pipeline Position
//!
//! ```text
//! Members
//!     ↓ structure
//! Generation rows
//!     ↓ layout + routing
//! Diagram (positions, connectors)
//!     ↓ export (this module)
//! SVG / PDF bytes
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - draws a [`Diagram`](crate::Diagram) into an SVG document and
//!   serializes it with [`svg::SvgWriter`]
//! - `pdf` - converts the SVG document to PDF (requires the `pdf` feature)
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`KinchartError::Export`](crate::KinchartError::Export) at the crate
//! boundary.

pub mod svg;

#[cfg(feature = "pdf")]
pub mod pdf;

use std::{fmt, path::Path};

use kinchart_core::geometry::Size;

/// Serializes a rendered SVG document into a file format.
pub trait DocumentWriter {
    /// Returns the bytes of `document`, a chart drawn on a page of `page`
    /// points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the document cannot be converted to the
    /// target format.
    fn write_document(&self, page: Size, document: &::svg::Document) -> Result<Vec<u8>, Error>;
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Pdf,
}

impl OutputFormat {
    /// Picks the format from a file extension, case-insensitively.
    ///
    /// ```
    /// # use kinchart::export::OutputFormat;
    /// # use std::path::Path;
    /// assert_eq!(OutputFormat::from_path(Path::new("tree.PDF")), Some(OutputFormat::Pdf));
    /// assert_eq!(OutputFormat::from_path(Path::new("tree")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "svg" => Some(Self::Svg),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => f.write_str("svg"),
            Self::Pdf => f.write_str("pdf"),
        }
    }
}

/// Errors that can occur during chart export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// The requested format was not compiled in.
    Unsupported(OutputFormat),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Unsupported(format) => {
                write!(f, "{format} output is not supported by this build")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out.svg")), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_path(Path::new("dir/out.Pdf")), Some(OutputFormat::Pdf));
        assert_eq!(OutputFormat::from_path(Path::new("out.png")), None);
    }

    #[test]
    fn test_error_display() {
        let err = Error::Unsupported(OutputFormat::Pdf);
        assert_eq!(err.to_string(), "pdf output is not supported by this build");
    }
}
