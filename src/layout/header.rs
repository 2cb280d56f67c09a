//! Header layout engine
//!
//! Flattens an arbitrary-depth range tree into positioned header cells.
//! The walk is pre-order, left to right: a parent starts at the same column
//! as its first descendant leaf and spans exactly the columns its subtree
//! produces, so multi-level time hierarchies (year → quarter → iteration)
//! stay visually aligned over their footprint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{GanttRange, RangeId};

/// Fatal problems that prevent header geometry from being computed at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("duplicate range id '{0}' in range tree")]
    DuplicateRangeId(RangeId),
}

/// Computed grid placement of one range in the header block.
///
/// Columns are 0-based grid columns; column 0 is reserved for the row-label
/// column, so the first header cell sits at column 1. Rows are 0-based tree
/// depth. Cells are value objects, rebuilt from scratch on every pass.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub id: RangeId,
    pub name: String,
    pub column: usize,
    pub column_span: usize,
    pub row: usize,
    pub row_span: usize,
}

/// Output of one header layout pass.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HeaderLayout {
    /// Placement of every range, keyed by range id
    pub cells: HashMap<RangeId, HeaderCell>,

    /// Total header columns (sum of top-level spans), excluding the
    /// row-label column
    pub column_count: usize,

    /// Total header rows (max tree depth + 1); 0 for an empty forest
    pub row_count: usize,
}

impl HeaderLayout {
    pub fn cell(&self, id: &RangeId) -> Option<&HeaderCell> {
        self.cells.get(id)
    }
}

/// Lay out a range forest into header cells.
///
/// Returns the placement of every range in the forest. The only fatal
/// condition is a duplicate range id, which would make lookups ambiguous.
pub fn layout_header(ranges: &[GanttRange]) -> Result<HeaderLayout, StructuralError> {
    let mut cells = Vec::new();
    let end_column = layout_level(ranges, 1, 0, &mut cells);

    let row_count = cells.iter().map(|c| c.row + 1).max().unwrap_or(0);
    let column_count = end_column - 1;

    let mut map = HashMap::with_capacity(cells.len());
    for cell in cells {
        let id = cell.id.clone();
        if map.insert(id.clone(), cell).is_some() {
            return Err(StructuralError::DuplicateRangeId(id));
        }
    }

    log::debug!(
        "header layout: {} cells, {} columns, {} rows",
        map.len(),
        column_count,
        row_count
    );

    Ok(HeaderLayout {
        cells: map,
        column_count,
        row_count,
    })
}

/// Lay out one sibling list starting at `column`/`row`, appending the cells
/// it produces, and return the column cursor after the last sibling.
fn layout_level(
    ranges: &[GanttRange],
    column: usize,
    row: usize,
    cells: &mut Vec<HeaderCell>,
) -> usize {
    let mut column = column;

    for range in ranges {
        let column_span = if range.is_leaf() {
            1
        } else {
            // Children occupy the next row down, starting at the parent's
            // own column; the parent spans whatever they produced.
            let child_end = layout_level(&range.children, column, row + 1, cells);
            child_end - column
        };

        cells.push(HeaderCell {
            id: range.id.clone(),
            name: range.name.clone(),
            column,
            column_span,
            row,
            row_span: 1,
        });

        column += column_span;
    }

    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttRange;

    fn cell<'a>(layout: &'a HeaderLayout, name: &str) -> &'a HeaderCell {
        layout
            .cell(&RangeId::from_name(name))
            .unwrap_or_else(|| panic!("no cell for '{}'", name))
    }

    #[test]
    fn empty_forest_yields_empty_layout() {
        let layout = layout_header(&[]).unwrap();
        assert!(layout.cells.is_empty());
        assert_eq!(layout.column_count, 0);
        assert_eq!(layout.row_count, 0);
    }

    #[test]
    fn flat_list_occupies_one_row() {
        let ranges = vec![
            GanttRange::leaf("Q1"),
            GanttRange::leaf("Q2"),
            GanttRange::leaf("Q3"),
        ];
        let layout = layout_header(&ranges).unwrap();

        assert_eq!(layout.row_count, 1);
        assert_eq!(layout.column_count, 3);
        assert_eq!(cell(&layout, "Q1").column, 1);
        assert_eq!(cell(&layout, "Q2").column, 2);
        assert_eq!(cell(&layout, "Q3").column, 3);
        assert!(layout.cells.values().all(|c| c.column_span == 1));
        assert!(layout.cells.values().all(|c| c.row == 0));
    }

    #[test]
    fn parent_spans_its_children() {
        let ranges = vec![
            GanttRange::with_children(
                "Y1",
                vec![GanttRange::leaf("Q1"), GanttRange::leaf("Q2")],
            ),
            GanttRange::with_children("Y2", vec![GanttRange::leaf("Q3")]),
        ];
        let layout = layout_header(&ranges).unwrap();

        assert_eq!(layout.column_count, 3);
        assert_eq!(layout.row_count, 2);

        let y1 = cell(&layout, "Y1");
        assert_eq!((y1.column, y1.column_span, y1.row), (1, 2, 0));
        let q1 = cell(&layout, "Q1");
        assert_eq!((q1.column, q1.column_span, q1.row), (1, 1, 1));
        let q2 = cell(&layout, "Q2");
        assert_eq!((q2.column, q2.column_span, q2.row), (2, 1, 1));
        let y2 = cell(&layout, "Y2");
        assert_eq!((y2.column, y2.column_span, y2.row), (3, 1, 0));
        let q3 = cell(&layout, "Q3");
        assert_eq!((q3.column, q3.column_span, q3.row), (3, 1, 1));
    }

    #[test]
    fn top_level_spans_sum_to_leaf_count() {
        let ranges = vec![
            GanttRange::with_children(
                "Y1",
                vec![
                    GanttRange::with_children(
                        "H1",
                        vec![GanttRange::leaf("Q1"), GanttRange::leaf("Q2")],
                    ),
                    GanttRange::leaf("H2"),
                ],
            ),
            GanttRange::leaf("Y2"),
        ];
        let layout = layout_header(&ranges).unwrap();

        let top_span_sum: usize = ["Y1", "Y2"]
            .iter()
            .map(|name| cell(&layout, name).column_span)
            .sum();
        // Leaves are Q1, Q2, H2, Y2
        assert_eq!(top_span_sum, 4);
        assert_eq!(layout.column_count, 4);
        assert_eq!(layout.row_count, 3);
    }

    #[test]
    fn duplicate_id_is_structural() {
        let ranges = vec![GanttRange::leaf("Q1"), GanttRange::leaf("Q1")];
        assert_eq!(
            layout_header(&ranges),
            Err(StructuralError::DuplicateRangeId(RangeId::from_name("Q1")))
        );
    }
}
