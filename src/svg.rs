//! Serializes a computed [`Layout`] to SVG markup. Pure string building - no
//! I/O and no knowledge of the tree, only of placed shapes.
//!
//! Edges are written before nodes so circles paint over the connector ends.

use std::fmt;

use crate::layout::{Layout, NODE_RADIUS};

/// A [`Layout`] wrapped for display as a standalone SVG document.
///
/// # Examples
///
/// ```
/// use treeviz::{layout, svg, tree::Tree};
///
/// let mut tree = Tree::new();
/// tree.insert(7);
///
/// let markup = svg::SvgDocument(&layout::layout(&tree)).to_string();
/// assert!(markup.contains("<circle"));
/// assert!(markup.contains(">7</text>"));
/// ```
pub struct SvgDocument<'a>(pub &'a Layout);

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.0;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            layout.width, layout.height
        )?;
        for edge in &layout.edges {
            writeln!(
                f,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" />"#,
                edge.x1, edge.y1, edge.x2, edge.y2
            )?;
        }
        for node in &layout.nodes {
            writeln!(
                f,
                r#"  <circle cx="{}" cy="{}" r="{}" stroke="black" stroke-width="2" fill="lightblue" />"#,
                node.x, node.y, NODE_RADIUS
            )?;
            writeln!(
                f,
                r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="12px">{}</text>"#,
                node.x,
                node.y,
                Escaped(&node.label)
            )?;
        }
        write!(f, "</svg>")
    }
}

/// Renders a layout to an SVG string.
pub fn to_svg(layout: &Layout) -> String {
    SvgDocument(layout).to_string()
}

/// Text content with the XML-significant characters escaped. Keys are usually
/// integers, but the layout accepts any `Display` label.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                _ => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}
