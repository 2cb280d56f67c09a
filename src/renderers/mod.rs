//! Renderers module
//!
//! Export logic for converting rendered scenes into portable output
//! formats. SVG is the only target format.

pub mod svg;

pub use svg::{export_scene, ExportWarning, SvgError, SvgExport};
