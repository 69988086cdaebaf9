//! Error types for Kinchart operations.
//!
//! [`KinchartError`] is returned by every fallible [`ChartBuilder`] entry
//! point. Errors of the ambient layers (export, member store) convert into it
//! at the crate boundary.
//!
//! [`ChartBuilder`]: crate::ChartBuilder

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// The main error type for Kinchart operations.
#[derive(Debug, Error)]
pub enum KinchartError {
    /// A chart was requested for an empty member list.
    #[error("No family members to render")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<crate::export::Error> for KinchartError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
