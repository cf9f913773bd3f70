//! Wires the tree to its collaborators. The tree itself never touches
//! rendering or audio; this module is the caller that decides, per operation,
//! whether to recompute the layout and whether to fire feedback.
//!
//! There is deliberately no ambient global tree: a [`Session`] is an
//! explicitly constructed value that owns one tree and its two hooks.

use std::fmt;

use crate::input::{self, InputError};
use crate::layout::{self, Layout};
use crate::tree::Tree;

/// Hook fired once per successful insertion - the audio cue in the original
/// sandbox. Never fired for deletes or searches.
pub trait Feedback {
    /// A key was inserted.
    fn insertion(&mut self);
}

/// No feedback.
impl Feedback for () {
    fn insertion(&mut self) {}
}

/// Hook handed the freshly recomputed layout after every successful mutation:
/// every insert, and every delete that actually removed a node. A no-op
/// delete leaves the picture untouched and is not redrawn.
pub trait Renderer {
    /// The tree shape changed; redraw from this layout.
    fn redraw(&mut self, layout: &Layout);
}

/// No rendering.
impl Renderer for () {
    fn redraw(&mut self, _layout: &Layout) {}
}

/// The three operations a user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert the parsed key.
    Insert,
    /// Delete the parsed key, silently ignoring absence.
    Delete,
    /// Look the parsed key up and report the result.
    Search,
}

/// The outcome of a submitted action. Its `Display` is the user-facing
/// message; mutations display as the empty string, which clears any previous
/// message in a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The key was inserted.
    Inserted(i64),
    /// The key was found and removed.
    Deleted(i64),
    /// The key was not present; the tree is unchanged.
    Absent(i64),
    /// The key is in the tree.
    Found(i64),
    /// The key is not in the tree.
    NotFound(i64),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Inserted(_) | Response::Deleted(_) | Response::Absent(_) => Ok(()),
            Response::Found(key) => write!(f, "Node {key} found!"),
            Response::NotFound(key) => write!(f, "Node {key} not found."),
        }
    }
}

/// One tree plus its collaborators. UI event handlers (or tests) hold and
/// pass this value; nothing is process-wide.
#[derive(Debug, Default)]
pub struct Session<F = (), R = ()> {
    tree: Tree<i64>,
    feedback: F,
    renderer: R,
}

impl<F, R> Session<F, R>
where
    F: Feedback,
    R: Renderer,
{
    /// Creates an empty session around the given collaborators.
    pub fn new(feedback: F, renderer: R) -> Self {
        Self {
            tree: Tree::new(),
            feedback,
            renderer,
        }
    }

    /// Read access to the tree, e.g. for displaying its contents.
    pub fn tree(&self) -> &Tree<i64> {
        &self.tree
    }

    /// Parses `raw` and applies `action` to the tree. Malformed input is
    /// rejected before the tree is touched - no mutation, no redraw, no
    /// feedback. On success the collaborators fire per their contracts and
    /// the returned [`Response`] carries the user-facing result.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeviz::session::{Action, Response, Session};
    ///
    /// let mut session = Session::new((), ());
    /// session.submit(Action::Insert, "42")?;
    ///
    /// let reply = session.submit(Action::Search, " 42")?;
    /// assert_eq!(reply, Response::Found(42));
    /// assert_eq!(reply.to_string(), "Node 42 found!");
    /// # Ok::<(), treeviz::input::InputError>(())
    /// ```
    pub fn submit(&mut self, action: Action, raw: &str) -> Result<Response, InputError> {
        let key = input::parse_key(raw)?;
        Ok(match action {
            Action::Insert => {
                self.tree.insert(key);
                self.feedback.insertion();
                self.redraw();
                Response::Inserted(key)
            }
            Action::Delete => {
                if self.tree.delete(&key) {
                    self.redraw();
                    Response::Deleted(key)
                } else {
                    Response::Absent(key)
                }
            }
            Action::Search => match self.tree.search(&key) {
                Some(node) => Response::Found(*node.key()),
                None => Response::NotFound(key),
            },
        })
    }

    fn redraw(&mut self) {
        self.renderer.redraw(&layout::layout(&self.tree));
    }
}
