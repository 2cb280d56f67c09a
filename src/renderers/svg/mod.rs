//! SVG scene export
//!
//! Walks an abstract rendered scene breadth-first and serializes its
//! rectangle and text primitives into an SVG document. Every emitted
//! coordinate is absolute in the scene root's space: each node's local
//! bounds are offset through its ancestor chain during the walk.

mod document;
mod elements;

use std::collections::VecDeque;

use quick_xml::events::{BytesEnd, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::scene::{NodeKind, SceneNode};

/// Failures that abort an export outright (serialization problems only;
/// unsupported scene content degrades to warnings instead).
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("xml serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("exported document is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A node the exporter could not represent and skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportWarning {
    #[error("text node '{content}' has a non-solid fill and was skipped")]
    UnsupportedFill { content: String },
}

/// Result of one export pass: the document plus any skipped-node warnings.
#[derive(Debug)]
pub struct SvgExport {
    pub svg: String,
    pub warnings: Vec<ExportWarning>,
}

/// Serialize a rendered scene to an SVG document.
///
/// The walk is breadth-first from the root, so ancestors are always
/// emitted before (and therefore painted under) their descendants.
pub fn export_scene(root: &SceneNode) -> Result<SvgExport, SvgError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let mut warnings = Vec::new();

    writer.write_event(Event::Start(document::svg_root(
        root.bounds.width,
        root.bounds.height,
    )))?;

    // Queue entries carry the absolute origin of the node's parent
    let mut queue: VecDeque<(&SceneNode, f64, f64)> = VecDeque::new();
    queue.push_back((root, 0.0, 0.0));

    while let Some((node, origin_x, origin_y)) = queue.pop_front() {
        let bounds = node.bounds.offset_by(origin_x, origin_y);

        match &node.kind {
            NodeKind::Rect { .. } => {
                let elem = elements::rect_element(
                    &bounds,
                    &node.fill,
                    &node.stroke,
                    node.stroke_width.top,
                );
                writer.write_event(Event::Empty(elem))?;
            }
            NodeKind::Text {
                content,
                font_family,
                font_size,
            } => match node.fill.as_solid() {
                Some(color) => {
                    let elem = elements::text_element(&bounds, font_family, *font_size, color);
                    writer.write_event(Event::Start(elem))?;
                    writer.write_event(Event::Text(BytesText::new(content)))?;
                    writer.write_event(Event::End(BytesEnd::new("text")))?;
                }
                None => {
                    log::warn!("skipping text node '{}': non-solid fill", content);
                    warnings.push(ExportWarning::UnsupportedFill {
                        content: content.clone(),
                    });
                }
            },
        }

        for child in &node.children {
            queue.push_back((child, bounds.x, bounds.y));
        }
    }

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    Ok(SvgExport {
        svg: String::from_utf8(writer.into_inner())?,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Bounds, Color, Paint, StrokeWidth};

    #[test]
    fn nested_rect_emits_absolute_bounds() {
        let child = SceneNode::rect(Bounds::new(0.0, 0.0, 10.0, 5.0))
            .with_fill(Paint::Solid(Color::rgb(1, 2, 3)));
        let root = SceneNode::rect(Bounds::new(2.0, 2.0, 100.0, 50.0)).with_children(vec![child]);

        let export = export_scene(&root).unwrap();
        assert!(export.svg.contains(r#"<rect x="2" y="2" width="10" height="5""#));
        assert!(export.warnings.is_empty());
    }

    #[test]
    fn text_is_vertically_centered() {
        let text = SceneNode::text("Q1", Bounds::new(4.0, 10.0, 30.0, 20.0), "Segoe UI", 12.0)
            .with_fill(Paint::Solid(Color::rgb(255, 255, 255)));
        let root =
            SceneNode::rect(Bounds::new(0.0, 0.0, 100.0, 50.0)).with_children(vec![text]);

        let export = export_scene(&root).unwrap();
        assert!(export.svg.contains(r#"<text x="4" y="20""#));
        assert!(export.svg.contains(">Q1</text>"));
    }

    #[test]
    fn gradient_text_is_skipped_with_warning() {
        let text = SceneNode::text("bad", Bounds::new(0.0, 0.0, 10.0, 10.0), "Arial", 10.0)
            .with_fill(Paint::LinearGradient(vec![]));
        let root = SceneNode::rect(Bounds::new(0.0, 0.0, 20.0, 20.0)).with_children(vec![text]);

        let export = export_scene(&root).unwrap();
        assert!(!export.svg.contains("<text"));
        assert_eq!(
            export.warnings,
            vec![ExportWarning::UnsupportedFill {
                content: "bad".to_string()
            }]
        );
    }

    #[test]
    fn gradient_rect_fill_is_silently_omitted() {
        let root = SceneNode::rect(Bounds::new(0.0, 0.0, 20.0, 20.0))
            .with_fill(Paint::LinearGradient(vec![]))
            .with_stroke(Paint::Solid(Color::rgb(0, 0, 0)), StrokeWidth::uniform(1.0));

        let export = export_scene(&root).unwrap();
        assert!(!export.svg.contains("fill="));
        assert!(export.svg.contains(r#"stroke="rgba(0,0,0,1)""#));
        assert!(export.warnings.is_empty());
    }

    #[test]
    fn envelope_matches_scene_size() {
        let root = SceneNode::rect(Bounds::new(0.0, 0.0, 640.0, 480.0));
        let export = export_scene(&root).unwrap();
        assert!(export.svg.contains(r#"width="640""#));
        assert!(export.svg.contains(r#"height="480""#));
        assert!(export.svg.contains(r#"viewBox="0 0 640 480""#));
    }

    #[test]
    fn asymmetric_stroke_uses_top_width() {
        let root = SceneNode::rect(Bounds::new(0.0, 0.0, 10.0, 10.0)).with_stroke(
            Paint::Solid(Color::rgb(0, 0, 0)),
            StrokeWidth {
                top: 3.0,
                right: 1.0,
                bottom: 1.0,
                left: 1.0,
            },
        );

        let export = export_scene(&root).unwrap();
        assert!(export.svg.contains(r#"stroke-width="3""#));
    }
}
