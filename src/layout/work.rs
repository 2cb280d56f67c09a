//! Work row mapping
//!
//! Resolves a work item's start/end range references against the header
//! layout, producing the grid span its bar occupies. Bad references and
//! inverted spans are per-row conditions: the row still renders with its
//! label, only the bar is omitted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{GanttWork, RangeId};
use crate::scene::Color;

use super::header::HeaderLayout;

/// Per-row mapping failures. Recoverable: the caller keeps the row and
/// reports the condition as a warning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("work item '{work}' references unknown range '{reference}'")]
    DanglingReference { work: String, reference: RangeId },

    #[error("work item '{work}' ends before it starts (start column {start_column}, end column {end_column})")]
    InvertedRange {
        work: String,
        start_column: usize,
        end_column: usize,
    },
}

/// Grid placement of one work bar.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WorkSpan {
    /// First grid column covered by the bar
    pub start_column: usize,

    /// Number of columns covered, always ≥ 1
    pub column_span: usize,

    /// Grid row of the bar (work rows stack directly below the header)
    pub row: usize,
}

/// Background/foreground pair for a row-label cell.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RowStyle {
    pub background: Color,
    pub foreground: Color,
}

/// Row-label banding palette, cycled by row index so adjacent rows stay
/// distinguishable without per-item configuration.
pub const ROW_PALETTE: [RowStyle; 4] = [
    RowStyle {
        background: Color::rgb(0x1f, 0x3a, 0x5f),
        foreground: Color::rgb(0xff, 0xff, 0xff),
    },
    RowStyle {
        background: Color::rgb(0x2c, 0x52, 0x82),
        foreground: Color::rgb(0xff, 0xff, 0xff),
    },
    RowStyle {
        background: Color::rgb(0x3a, 0x6b, 0xa5),
        foreground: Color::rgb(0x00, 0x00, 0x00),
    },
    RowStyle {
        background: Color::rgb(0x4a, 0x86, 0xc8),
        foreground: Color::rgb(0x00, 0x00, 0x00),
    },
];

/// Banding style for the row at `row_index`.
pub fn row_style(row_index: usize) -> RowStyle {
    ROW_PALETTE[row_index % ROW_PALETTE.len()]
}

/// Map one work item to its bar placement.
///
/// `row_index` is the item's position in the descriptor's work list; the
/// bar lands on grid row `header.row_count + row_index`.
pub fn map_work_row(
    header: &HeaderLayout,
    work: &GanttWork,
    row_index: usize,
) -> Result<WorkSpan, RowError> {
    let start_cell = header.cell(&work.start).ok_or_else(|| RowError::DanglingReference {
        work: work.name.clone(),
        reference: work.start.clone(),
    })?;
    let end_cell = header.cell(&work.end).ok_or_else(|| RowError::DanglingReference {
        work: work.name.clone(),
        reference: work.end.clone(),
    })?;

    let start_column = start_cell.column;
    // The bar covers the end range's full footprint
    let end_column = end_cell.column + end_cell.column_span;

    if end_column <= start_column {
        return Err(RowError::InvertedRange {
            work: work.name.clone(),
            start_column,
            end_column,
        });
    }

    Ok(WorkSpan {
        start_column,
        column_span: end_column - start_column,
        row: header.row_count + row_index,
    })
}
