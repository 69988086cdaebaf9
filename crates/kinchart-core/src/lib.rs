//! Kinchart Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Kinchart family
//! tree renderer. It includes:
//!
//! - **Family**: The member record and kinship roles ([`family`] module)
//! - **Page**: Target page formats and orientations ([`page`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG output, strokes and text ([`draw`] module)

pub mod color;
pub mod draw;
pub mod family;
pub mod geometry;
pub mod page;
