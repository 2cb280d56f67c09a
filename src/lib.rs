//! Gantt chart layout engine
//!
//! Turns a descriptor (a hierarchy of time ranges plus a list of work
//! items) into positioned grid geometry, composes that geometry into an
//! abstract scene of rectangles and text, and exports rendered scenes to
//! SVG. All passes are pure, synchronous and stateless: feed in a fresh
//! descriptor snapshot, get back a fresh display list.

pub mod io;
pub mod layout;
pub mod models;
pub mod render;
pub mod renderers;
pub mod scene;

// Re-export commonly used types
pub use layout::{ChartDisplayList, ChartLayoutEngine, HeaderCell, HeaderLayout};
pub use models::{GanttDescriptor, GanttRange, GanttWork, RangeId};
pub use renderers::{export_scene, SvgExport};
