//! Target page formats.
//!
//! A chart is always laid out for one page. [`PageSpec`] combines an ISO
//! paper size with an orientation; the default is A4 landscape.
//!
//! ```
//! # use kinchart_core::page::{Orientation, PageSize, PageSpec};
//! let spec: PageSpec = "A3_LANDSCAPE".parse().unwrap();
//! assert_eq!(spec, PageSpec::new(PageSize::A3, Orientation::Landscape));
//!
//! let size = PageSpec::default().dimensions();
//! assert!(size.width() > size.height());
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Size;

/// Width of an A4 sheet in points.
const A4_WIDTH: f32 = 595.275_6;
/// Height of an A4 sheet in points.
const A4_HEIGHT: f32 = 841.889_8;
/// Height of an A3 sheet in points.
const A3_HEIGHT: f32 = 1_190.551_2;

/// ISO paper size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    #[serde(alias = "A4")]
    A4,
    #[serde(alias = "A3")]
    A3,
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Error returned when a page format name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid page format `{0}`, valid values: A4, A4_LANDSCAPE, A3, A3_LANDSCAPE")]
pub struct PageFormatError(String);

/// Paper size and orientation of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    size: PageSize,

    #[serde(default)]
    orientation: Orientation,
}

impl PageSpec {
    pub fn new(size: PageSize, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the page dimensions in points, with orientation applied.
    pub fn dimensions(&self) -> Size {
        let portrait = match self.size {
            PageSize::A4 => Size::new(A4_WIDTH, A4_HEIGHT),
            PageSize::A3 => Size::new(A4_HEIGHT, A3_HEIGHT),
        };

        match self.orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => portrait.transpose(),
        }
    }
}

impl FromStr for PageSpec {
    type Err = PageFormatError;

    /// Parses the format names `A4`, `A4_LANDSCAPE`, `A3` and
    /// `A3_LANDSCAPE` (case-insensitive, `-` accepted for `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        let (size, orientation) = match normalized.as_str() {
            "A4" | "A4_PORTRAIT" => (PageSize::A4, Orientation::Portrait),
            "A4_LANDSCAPE" => (PageSize::A4, Orientation::Landscape),
            "A3" | "A3_PORTRAIT" => (PageSize::A3, Orientation::Portrait),
            "A3_LANDSCAPE" => (PageSize::A3, Orientation::Landscape),
            _ => return Err(PageFormatError(s.to_string())),
        };
        Ok(Self::new(size, orientation))
    }
}

impl fmt::Display for PageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = match self.size {
            PageSize::A4 => "A4",
            PageSize::A3 => "A3",
        };
        match self.orientation {
            Orientation::Portrait => f.write_str(size),
            Orientation::Landscape => write!(f, "{size}_LANDSCAPE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_is_a4_landscape() {
        let spec = PageSpec::default();
        assert_eq!(spec.size(), PageSize::A4);
        assert_eq!(spec.orientation(), Orientation::Landscape);

        let size = spec.dimensions();
        assert_approx_eq!(f32, size.width(), A4_HEIGHT);
        assert_approx_eq!(f32, size.height(), A4_WIDTH);
    }

    #[test]
    fn test_a3_portrait_dimensions() {
        let size = PageSpec::new(PageSize::A3, Orientation::Portrait).dimensions();
        assert_approx_eq!(f32, size.width(), A4_HEIGHT);
        assert_approx_eq!(f32, size.height(), A3_HEIGHT);
    }

    #[test]
    fn test_parse_format_names() {
        for name in ["A4", "A4_LANDSCAPE", "A3", "A3_LANDSCAPE"] {
            let spec: PageSpec = name.parse().unwrap();
            assert_eq!(spec.to_string(), name);
        }

        assert_eq!(
            "a4-landscape".parse::<PageSpec>().unwrap(),
            PageSpec::default()
        );
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let err = "LETTER".parse::<PageSpec>().unwrap_err();
        assert!(err.to_string().contains("LETTER"));
    }

    #[test]
    fn test_deserialize_lowercase() {
        let spec: PageSpec =
            serde_json::from_str(r#"{"size": "a3", "orientation": "portrait"}"#).unwrap();
        assert_eq!(spec, PageSpec::new(PageSize::A3, Orientation::Portrait));

        let spec: PageSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec, PageSpec::default());
    }
}
