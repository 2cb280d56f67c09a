//! SVG element construction
//!
//! Builds the `rect` and `text` elements the exporter emits. Attribute
//! values use plain decimal formatting; whole numbers print without a
//! fractional part.

use quick_xml::events::BytesStart;

use crate::scene::{Bounds, Color, Paint};

fn number(value: f64) -> String {
    format!("{}", value)
}

/// Build a `rect` element at absolute bounds.
///
/// Non-solid fills and strokes are omitted rather than rejected: borders
/// and backgrounds are visually secondary to the bars and labels.
pub(super) fn rect_element(
    bounds: &Bounds,
    fill: &Paint,
    stroke: &Paint,
    stroke_width: f64,
) -> BytesStart<'static> {
    let mut elem = BytesStart::new("rect");

    elem.push_attribute(("x", number(bounds.x).as_str()));
    elem.push_attribute(("y", number(bounds.y).as_str()));
    elem.push_attribute(("width", number(bounds.width).as_str()));
    elem.push_attribute(("height", number(bounds.height).as_str()));

    if let Some(color) = fill.as_solid() {
        elem.push_attribute(("fill", color.to_rgba_string().as_str()));
    }
    if let Some(color) = stroke.as_solid() {
        elem.push_attribute(("stroke", color.to_rgba_string().as_str()));
    }
    elem.push_attribute(("stroke-width", number(stroke_width).as_str()));

    elem
}

/// Build the opening tag of a `text` element, anchored at the vertical
/// center of the node's absolute bounds.
pub(super) fn text_element(
    bounds: &Bounds,
    font_family: &str,
    font_size: f64,
    fill: Color,
) -> BytesStart<'static> {
    let mut elem = BytesStart::new("text");

    elem.push_attribute(("x", number(bounds.x).as_str()));
    elem.push_attribute(("y", number(bounds.y + bounds.height / 2.0).as_str()));
    elem.push_attribute(("font-family", font_family));
    elem.push_attribute(("font-size", number(font_size).as_str()));
    elem.push_attribute(("fill", fill.to_rgba_string().as_str()));

    elem
}
