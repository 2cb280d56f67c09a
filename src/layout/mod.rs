//! Grid layout engines
//!
//! Converts a `GanttDescriptor` into a display list: the header layout
//! engine flattens the range tree into positioned cells, the work row
//! mapper resolves each item to a column span, and the progress module
//! encodes completion fractions as bar fills.

pub mod display_list;
pub mod header;
pub mod progress;
pub mod work;

pub use display_list::{ChartDisplayList, ChartLayoutEngine, LayoutWarning, WorkRow};
pub use header::{layout_header, HeaderCell, HeaderLayout, StructuralError};
pub use progress::{progress_fill, FillSpec};
pub use work::{map_work_row, row_style, RowError, RowStyle, WorkSpan};
