//! Visual layout for a tree. The geometry here is recomputed from scratch for
//! the whole tree after every mutation - nothing is cached between calls, so
//! the picture can never drift from the structure.
//!
//! The scheme is the classic halving fan-out: the canvas is `2^height` slots
//! of 40px, the root sits centered on the first level, and every step down a
//! child is offset horizontally by `(width / 4) / 2^level`, which halves at
//! each level so subtrees never overlap on a tree of the computed height.

use std::fmt::Display;

use crate::tree::{Node, Tree};

/// Radius of a rendered node circle, in pixels.
pub const NODE_RADIUS: f64 = 15.0;

/// Vertical distance between levels, also used as the top and bottom margin.
pub const LEVEL_SPACING: f64 = 50.0;

/// Horizontal pixels reserved per leaf slot at the deepest level.
const SLOT_WIDTH: f64 = 40.0;

/// A node placed on the canvas: the key's display text and the circle center.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    /// The node's key, rendered to text.
    pub label: String,
    /// Center x of the node circle.
    pub x: f64,
    /// Center y of the node circle.
    pub y: f64,
}

/// A parent-to-child connector, from circle center to circle center.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Parent center x.
    pub x1: f64,
    /// Parent center y.
    pub y1: f64,
    /// Child center x.
    pub x2: f64,
    /// Child center y.
    pub y2: f64,
}

/// A computed layout: canvas dimensions plus every node and edge, positioned.
/// Nodes appear in pre-order (each parent before its children).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Canvas width: `2^height * 40`, or 0 for an empty tree.
    pub width: f64,
    /// Canvas height: the deepest level's y plus a bottom margin.
    pub height: f64,
    /// All placed nodes.
    pub nodes: Vec<PlacedNode>,
    /// All parent-child connectors.
    pub edges: Vec<Edge>,
}

/// Computes the layout for the current shape of `tree`. An empty tree yields
/// an empty layout with zero-sized canvas.
pub fn layout<K>(tree: &Tree<K>) -> Layout
where
    K: Display,
{
    let root = match tree.root() {
        Some(root) => root,
        None => return Layout::default(),
    };

    let width = 2f64.powi(tree.height() as i32) * SLOT_WIDTH;
    let mut out = Layout {
        width,
        height: 0.0,
        nodes: Vec::with_capacity(tree.len()),
        edges: Vec::new(),
    };
    place(root, width / 2.0, LEVEL_SPACING, width / 4.0, 1, &mut out);
    out
}

/// Places `node` at `(x, y)` and recurses into its children. `dx` is the
/// root-level horizontal span; `level` is the recursion depth used to halve
/// the child offset.
fn place<K>(node: &Node<K>, x: f64, y: f64, dx: f64, level: i32, out: &mut Layout)
where
    K: Display,
{
    out.nodes.push(PlacedNode {
        label: node.key().to_string(),
        x,
        y,
    });
    out.height = out.height.max(y + LEVEL_SPACING);

    let offset = dx / 2f64.powi(level);
    if let Some(left) = node.left() {
        let (cx, cy) = (x - offset, y + LEVEL_SPACING);
        out.edges.push(Edge {
            x1: x,
            y1: y,
            x2: cx,
            y2: cy,
        });
        place(left, cx, cy, dx, level + 1, out);
    }
    if let Some(right) = node.right() {
        let (cx, cy) = (x + offset, y + LEVEL_SPACING);
        out.edges.push(Edge {
            x1: x,
            y1: y,
            x2: cx,
            y2: cy,
        });
        place(right, cx, cy, dx, level + 1, out);
    }
}
