//! SVG serialization of vector frames.
//!
//! The wire format is deliberately flat: a `viewBox`-carrying `<svg>` root, a
//! background `<rect>`, then one `<rect>` per screen cell in draw order.
//! Element order is the draw order, so this layer must never reorder cells.

use crate::{
    foundation::core::FrameSize,
    frame::sketch::VectorFrame,
};

/// Serialize `frame` as a standalone SVG document of `size` pixels.
pub fn frame_to_svg(frame: &VectorFrame, size: FrameSize) -> String {
    let vb = frame.view_box;
    let mut out = String::with_capacity(160 + frame.cells.len() * 96);

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"{} {} {} {}\">\n",
        size.width,
        size.height,
        vb.x0,
        vb.y0,
        vb.width(),
        vb.height()
    ));
    out.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        vb.x0,
        vb.y0,
        vb.width(),
        vb.height(),
        frame.background.to_hex()
    ));

    for cell in &frame.cells {
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.fill.to_hex()
        ));
    }

    out.push_str("</svg>\n");
    out
}
