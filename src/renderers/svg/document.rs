//! SVG document envelope
//!
//! The root `svg` element is sized to the rendered scene and carries a
//! matching view box, so the document renders at native size but scales
//! cleanly when embedded.

use quick_xml::events::BytesStart;

/// Build the root `svg` element for a scene of the given rendered size.
pub(super) fn svg_root(width: f64, height: f64) -> BytesStart<'static> {
    let mut elem = BytesStart::new("svg");

    elem.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    elem.push_attribute(("width", format!("{}", width).as_str()));
    elem.push_attribute(("height", format!("{}", height).as_str()));
    elem.push_attribute((
        "viewBox",
        format!("0 0 {} {}", width, height).as_str(),
    ));

    elem
}
