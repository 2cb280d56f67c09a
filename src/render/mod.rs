//! Chart scene composition
//!
//! Builds an abstract rendered scene from a chart display list: header
//! cells as filled boxes with labels, a bordered content grid, banded
//! row-label cells, and rounded work bars filled by the progress encoding.
//! The output is plain scene nodes, so it feeds the SVG exporter directly
//! and stands in for any concrete rendering surface.

use crate::layout::{ChartDisplayList, FillSpec};
use crate::scene::{Bounds, Color, GradientStop, Paint, SceneNode, StrokeWidth};

/// Visual parameters of the composed chart.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    /// Width of the row-label column
    pub label_width: f64,

    /// Width of one header column
    pub cell_width: f64,

    /// Height of one grid row
    pub cell_height: f64,

    pub font_family: String,
    pub font_size: f64,

    pub header_background: Color,
    pub header_foreground: Color,

    /// Stroke color of the content-grid cell borders
    pub grid_line: Color,

    /// Inset of a work bar inside its grid cells
    pub bar_margin: f64,

    /// Corner radius of a work bar
    pub bar_corner_radius: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            label_width: 160.0,
            cell_width: 80.0,
            cell_height: 28.0,
            font_family: "Segoe UI".to_string(),
            font_size: 12.0,
            header_background: Color::rgb(0x00, 0x00, 0xff),
            header_foreground: Color::rgb(0xff, 0xff, 0xff),
            grid_line: Color::rgb(0xd3, 0xd3, 0xd3),
            bar_margin: 5.0,
            bar_corner_radius: 3.0,
        }
    }
}

/// Convert a progress fill into a scene paint.
///
/// A split becomes a two-stop-pair gradient with both middle stops at the
/// split offset, so the transition is a hard edge rather than a blend.
pub fn fill_to_paint(fill: FillSpec) -> Paint {
    match fill {
        FillSpec::Flat(color) => Paint::Solid(color),
        FillSpec::Split {
            complete,
            incomplete,
            at,
        } => Paint::LinearGradient(vec![
            GradientStop { offset: 0.0, color: complete },
            GradientStop { offset: at, color: complete },
            GradientStop { offset: at, color: incomplete },
            GradientStop { offset: 1.0, color: incomplete },
        ]),
    }
}

/// Compose a display list into a rendered scene.
pub fn compose_chart(list: &ChartDisplayList, style: &ChartStyle) -> SceneNode {
    let width = style.label_width + list.column_count as f64 * style.cell_width;
    let height = list.row_count as f64 * style.cell_height;

    let mut children = Vec::new();

    // Blank label-column header block, top-left corner of the grid
    if list.header_row_count > 0 {
        children.push(
            SceneNode::rect(Bounds::new(
                0.0,
                0.0,
                style.label_width,
                list.header_row_count as f64 * style.cell_height,
            ))
            .with_fill(Paint::Solid(style.header_background)),
        );
    }

    for cell in &list.header_cells {
        let bounds = Bounds::new(
            cell_x(cell.column, style),
            cell.row as f64 * style.cell_height,
            cell.column_span as f64 * style.cell_width,
            style.cell_height,
        );
        let label = SceneNode::text(
            &cell.name,
            Bounds::new(4.0, 0.0, bounds.width - 8.0, bounds.height),
            &style.font_family,
            style.font_size,
        )
        .with_fill(Paint::Solid(style.header_foreground));

        children.push(
            SceneNode::rect(bounds)
                .with_fill(Paint::Solid(style.header_background))
                .with_children(vec![label]),
        );
    }

    for row in &list.rows {
        let row_y = row.row as f64 * style.cell_height;

        // Content grid borders behind the bar
        for column in 1..=list.column_count {
            children.push(
                SceneNode::rect(Bounds::new(
                    cell_x(column, style),
                    row_y,
                    style.cell_width,
                    style.cell_height,
                ))
                .with_stroke(Paint::Solid(style.grid_line), StrokeWidth::uniform(1.0)),
            );
        }

        // Banded row label
        let label = SceneNode::text(
            &row.name,
            Bounds::new(4.0, 0.0, style.label_width - 8.0, style.cell_height),
            &style.font_family,
            style.font_size,
        )
        .with_fill(Paint::Solid(row.style.foreground));
        children.push(
            SceneNode::rect(Bounds::new(0.0, row_y, style.label_width, style.cell_height))
                .with_fill(Paint::Solid(row.style.background))
                .with_children(vec![label]),
        );

        // The bar itself, when the item's references resolved
        if let (Some(span), Some(fill)) = (row.span, row.fill) {
            children.push(
                SceneNode::rect(Bounds::new(
                    cell_x(span.start_column, style) + style.bar_margin,
                    row_y + style.bar_margin,
                    span.column_span as f64 * style.cell_width - 2.0 * style.bar_margin,
                    style.cell_height - 2.0 * style.bar_margin,
                ))
                .with_corner_radius(style.bar_corner_radius)
                .with_fill(fill_to_paint(fill)),
            );
        }
    }

    SceneNode::rect(Bounds::new(0.0, 0.0, width, height))
        .with_fill(Paint::Solid(Color::rgb(0xff, 0xff, 0xff)))
        .with_children(children)
}

fn cell_x(column: usize, style: &ChartStyle) -> f64 {
    // Column 0 is the label column; header columns start at 1
    style.label_width + (column - 1) as f64 * style.cell_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ChartLayoutEngine;
    use crate::models::{GanttDescriptor, GanttRange, GanttWork, RangeId};
    use crate::scene::NodeKind;

    fn sample_scene() -> SceneNode {
        let descriptor = GanttDescriptor {
            ranges: vec![GanttRange::leaf("Q1"), GanttRange::leaf("Q2")],
            work: vec![GanttWork {
                name: "feature".to_string(),
                start: RangeId::from_name("Q1"),
                end: RangeId::from_name("Q2"),
                progress: 1.0,
            }],
        };
        let list = ChartLayoutEngine::new().compute_layout(&descriptor).unwrap();
        compose_chart(&list, &ChartStyle::default())
    }

    #[test]
    fn scene_is_sized_to_the_grid() {
        let scene = sample_scene();
        // 160 label + 2 * 80 columns; 2 rows of 28
        assert_eq!(scene.bounds.width, 320.0);
        assert_eq!(scene.bounds.height, 56.0);
    }

    #[test]
    fn split_fill_becomes_two_stop_pairs() {
        let paint = fill_to_paint(FillSpec::Split {
            complete: Color::rgb(0, 0, 0),
            incomplete: Color::rgb(255, 255, 255),
            at: 0.25,
        });
        match paint {
            Paint::LinearGradient(stops) => {
                let offsets: Vec<f64> = stops.iter().map(|s| s.offset).collect();
                assert_eq!(offsets, vec![0.0, 0.25, 0.25, 1.0]);
            }
            other => panic!("expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn complete_bar_is_rounded_and_solid() {
        let scene = sample_scene();
        let bar = scene
            .children
            .iter()
            .find(|n| matches!(n.kind, NodeKind::Rect { corner_radius } if corner_radius > 0.0))
            .expect("work bar present");
        assert!(matches!(bar.fill, Paint::Solid(_)));
        // margin 5 inside the two spanned cells
        assert_eq!(bar.bounds.x, 165.0);
        assert_eq!(bar.bounds.width, 150.0);
    }
}
