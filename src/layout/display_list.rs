//! Chart display list
//!
//! The aggregate output of one layout pass over a descriptor: positioned
//! header cells, one row entry per work item, grid totals, and the list of
//! per-row conditions encountered along the way. The structure is plain
//! data ready for any rendering surface; it carries no toolkit types.

use serde::{Deserialize, Serialize};

use crate::models::GanttDescriptor;

use super::header::{layout_header, HeaderCell, StructuralError};
use super::progress::{progress_fill, FillSpec};
use super::work::{map_work_row, row_style, RowStyle, WorkSpan};

/// One work item's rendering entry.
///
/// `span` and `fill` are absent when the item's references could not be
/// mapped; the row still renders its label with banding.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorkRow {
    pub name: String,

    /// Grid row (header rows come first)
    pub row: usize,

    /// Row-label banding colors
    pub style: RowStyle,

    /// Bar placement, if the references resolved
    pub span: Option<WorkSpan>,

    /// Bar fill, if the references resolved
    pub fill: Option<FillSpec>,
}

/// A recoverable condition attached to one work row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutWarning {
    /// Name of the affected work item
    pub work: String,

    /// Human-readable description of what went wrong
    pub message: String,
}

/// Everything a rendering surface needs to paint one chart.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChartDisplayList {
    /// Positioned header cells in pre-order (parents before children)
    pub header_cells: Vec<HeaderCell>,

    /// One entry per work item, in descriptor order
    pub rows: Vec<WorkRow>,

    /// Header columns, excluding the row-label column
    pub column_count: usize,

    /// Header rows only (work rows start at this index)
    pub header_row_count: usize,

    /// Total grid rows: header rows plus one per work item
    pub row_count: usize,

    /// Per-row conditions; never fatal to the pass
    pub warnings: Vec<LayoutWarning>,
}

/// Layout engine computing display lists from descriptors.
///
/// A pass is pure and retains no state between invocations, so the engine
/// may be re-invoked with a brand-new descriptor at any time.
pub struct ChartLayoutEngine;

impl ChartLayoutEngine {
    pub fn new() -> Self {
        ChartLayoutEngine
    }

    /// Compute the complete layout for one descriptor snapshot.
    ///
    /// Only structural problems with the range tree are fatal; bad work
    /// rows degrade to label-only rows with a warning each.
    pub fn compute_layout(
        &self,
        descriptor: &GanttDescriptor,
    ) -> Result<ChartDisplayList, StructuralError> {
        let header = layout_header(&descriptor.ranges)?;

        let mut header_cells: Vec<HeaderCell> = header.cells.values().cloned().collect();
        // HashMap order is arbitrary; restore reading order for renderers
        header_cells.sort_by_key(|c| (c.row, c.column));

        let mut rows = Vec::with_capacity(descriptor.work.len());
        let mut warnings = Vec::new();

        for (row_index, work) in descriptor.work.iter().enumerate() {
            let (span, fill) = match map_work_row(&header, work, row_index) {
                Ok(span) => (Some(span), Some(progress_fill(work.progress))),
                Err(err) => {
                    log::warn!("work row '{}' not drawn: {}", work.name, err);
                    warnings.push(LayoutWarning {
                        work: work.name.clone(),
                        message: err.to_string(),
                    });
                    (None, None)
                }
            };

            rows.push(WorkRow {
                name: work.name.clone(),
                row: header.row_count + row_index,
                style: row_style(row_index),
                span,
                fill,
            });
        }

        log::info!(
            "chart layout: {} header cells, {} rows, {} warnings",
            header_cells.len(),
            rows.len(),
            warnings.len()
        );

        Ok(ChartDisplayList {
            header_cells,
            rows,
            column_count: header.column_count,
            header_row_count: header.row_count,
            row_count: header.row_count + descriptor.work.len(),
            warnings,
        })
    }
}

impl Default for ChartLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GanttRange, GanttWork, RangeId};

    fn descriptor() -> GanttDescriptor {
        GanttDescriptor {
            ranges: vec![
                GanttRange::with_children(
                    "Y1",
                    vec![GanttRange::leaf("Q1"), GanttRange::leaf("Q2")],
                ),
                GanttRange::with_children("Y2", vec![GanttRange::leaf("Q3")]),
            ],
            work: vec![
                GanttWork {
                    name: "good".to_string(),
                    start: RangeId::from_name("Q1"),
                    end: RangeId::from_name("Q3"),
                    progress: 0.5,
                },
                GanttWork {
                    name: "dangling".to_string(),
                    start: RangeId::from_name("Q1"),
                    end: RangeId::from_name("missing"),
                    progress: 0.5,
                },
                GanttWork {
                    name: "inverted".to_string(),
                    start: RangeId::from_name("Q3"),
                    end: RangeId::from_name("Q1"),
                    progress: 0.5,
                },
            ],
        }
    }

    #[test]
    fn bad_rows_degrade_to_warnings() {
        let list = ChartLayoutEngine::new().compute_layout(&descriptor()).unwrap();

        assert_eq!(list.rows.len(), 3);
        assert_eq!(list.warnings.len(), 2);

        assert!(list.rows[0].span.is_some());
        assert!(list.rows[1].span.is_none());
        assert!(list.rows[2].span.is_none());

        // Labels survive even when the bar does not
        assert_eq!(list.rows[1].name, "dangling");
        assert_eq!(list.warnings[0].work, "dangling");
        assert_eq!(list.warnings[1].work, "inverted");
    }

    #[test]
    fn grid_totals_include_work_rows() {
        let list = ChartLayoutEngine::new().compute_layout(&descriptor()).unwrap();
        assert_eq!(list.column_count, 3);
        assert_eq!(list.header_row_count, 2);
        assert_eq!(list.row_count, 5);
    }

    #[test]
    fn header_cells_are_in_reading_order() {
        let list = ChartLayoutEngine::new().compute_layout(&descriptor()).unwrap();
        let names: Vec<&str> = list.header_cells.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Y1", "Y2", "Q1", "Q2", "Q3"]);
    }

    #[test]
    fn empty_descriptor_is_fine() {
        let list = ChartLayoutEngine::new()
            .compute_layout(&GanttDescriptor::default())
            .unwrap();
        assert_eq!(list, ChartDisplayList::default());
    }
}
