//! Error adapter for converting KinchartError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use kinchart::KinchartError;

/// Adapter exposing a [`KinchartError`] as a miette diagnostic.
///
/// Kinchart errors carry no source spans, so the adapter contributes an error
/// code and, for input errors, a hint about the expected document shape.
pub struct ErrorAdapter<'a>(pub &'a KinchartError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            KinchartError::EmptyInput => "kinchart::empty_input",
            KinchartError::Io(_) => "kinchart::io",
            KinchartError::Input(_) => "kinchart::input",
            KinchartError::Config(_) => "kinchart::config",
            KinchartError::Export(_) => "kinchart::export",
            KinchartError::Store(_) => "kinchart::store",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            KinchartError::EmptyInput => "add at least one member to the input file",
            KinchartError::Input(_) => {
                "expected a JSON array of members or an object with a `members` array"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
