//! An unbalanced Binary Search Tree (BST) paired with the collaborators a
//! small visual sandbox needs: a layout pass that recomputes node geometry
//! after each mutation, an SVG writer, an input adapter, and a session that
//! wires them together.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! find, and delete stored keys. BSTs are typically defined recursively using
//! the notion of a `Node`. The important invariants of the tree in this crate
//! are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than *or equal to* its own key - equal keys always route right,
//!    so duplicate inserts land deterministically.
//!
//! The tree never rebalances. Its shape is exactly the insertion history,
//! which is the point for a visualizer: every mutation stays visible.
//!
//! ## Separation of concerns
//!
//! [`tree::Tree`] performs structural mutation only and reports plain
//! outcomes. Redrawing ([`layout`] + [`svg`]) and audio feedback are triggered
//! by the caller - see [`session::Session`] - never by the tree itself.

#![deny(missing_docs)]

pub mod input;
pub mod layout;
pub mod session;
pub mod svg;
pub mod tree;

#[cfg(test)]
mod test;
