//! The core Binary Search Tree. Nodes are exclusively owned through `Box`ed
//! links, there are no parent pointers, and the tree never rebalances - the
//! shape is exactly the insertion history.
//!
//! Two details set this apart from a textbook map:
//!
//! 1. Nodes hold only a key. Equal keys are accepted and always routed to the
//!    right subtree, so the ordering invariant is `left < node <= right`.
//! 2. `delete` uses the "recursive rebuild" pattern: every recursive call
//!    returns the possibly-new root of its subtree and the caller reassigns
//!    its own link to that result.
//!
//! # Examples
//!
//! ```
//! use treeviz::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(1);
//! assert!(tree.search(&1).is_some());
//!
//! // Deleting reports whether a node was actually removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! ```

use std::cmp::Ordering;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree holding ordered keys. This can be used for inserting,
/// finding, and deleting keys. Operations that would modify the tree mutate it
/// in place and report a plain outcome; the tree itself never triggers
/// rendering or any other UI concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree is non-empty. All other nodes are reachable
    /// from here through [`Node::left`] and [`Node::right`].
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree, counted recursively.
    pub fn len(&self) -> usize {
        fn count<K>(link: &Link<K>) -> usize {
            match link {
                Some(node) => 1 + count(&node.left) + count(&node.right),
                None => 0,
            }
        }
        count(&self.root)
    }

    /// The number of levels on the longest root-to-leaf path. An empty tree
    /// has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// The keys of the tree in non-decreasing order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.collect_in_order(&mut keys);
        }
        keys
    }

    /// Places a new leaf holding `key` at its ordered position. Keys strictly
    /// less than a node descend left, everything else (including equal keys)
    /// descends right, so inserting never fails and duplicates land
    /// deterministically.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeviz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.in_order(), [&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(key),
            None => self.root = Some(Box::new(Node::new(key))),
        }
    }

    /// Potentially finds the node holding the given key. If no node has the
    /// corresponding key, `None` is returned. This is the normal "not found"
    /// result, not a fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeviz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| n.key()), Some(&1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root.as_deref().and_then(|root| root.find(key))
    }

    /// Deletes one node whose key equals `key`, returning whether a node was
    /// removed. Deleting an absent key is a silent structural no-op. A node
    /// with two children has its in-order successor's key copied in, after
    /// which that key is deleted from the right subtree.
    ///
    /// When duplicates exist, the standard descent removes the shallowest
    /// match; the tree does not track multiplicity.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeviz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.in_order(), [&1]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord + Clone,
    {
        let (root, removed) = Node::delete(self.root.take(), key);
        self.root = root;
        removed
    }
}

/// A `Node` holds one key and exclusively owns its two optional children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, holding keys strictly less than this node's key.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The right child, holding keys greater than or equal to this node's key.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Node::height);
        let right = self.right.as_deref().map_or(0, Node::height);
        left.max(right) + 1
    }

    fn collect_in_order<'a>(&'a self, keys: &mut Vec<&'a K>) {
        if let Some(left) = self.left.as_deref() {
            left.collect_in_order(keys);
        }
        keys.push(&self.key);
        if let Some(right) = self.right.as_deref() {
            right.collect_in_order(keys);
        }
    }

    fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        // Ties go right so `<` is the only comparison we need.
        if key < self.key {
            match self.left.as_deref_mut() {
                Some(left) => left.insert(key),
                None => self.left = Some(Box::new(Node::new(key))),
            }
        } else {
            match self.right.as_deref_mut() {
                Some(right) => right.insert(key),
                None => self.right = Some(Box::new(Node::new(key))),
            }
        }
    }

    fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(key)),
        }
    }

    /// Deletes `key` from the subtree rooted at `link`, returning the new
    /// subtree root and whether a node was removed.
    fn delete(link: Link<K>, key: &K) -> (Link<K>, bool)
    where
        K: Ord + Clone,
    {
        let mut node = match link {
            Some(node) => node,
            // Reached an empty slot: the key wasn't in the tree.
            None => return (None, false),
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::delete(node.left.take(), key);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete(node.right.take(), key);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => (right, true),
                (left @ Some(_), None) => (left, true),
                (left, Some(right)) => {
                    // Two children: overwrite this node's key with its
                    // in-order successor (the minimum of the right subtree),
                    // then excise that successor from the right subtree.
                    node.key = right.min_key().clone();
                    let (right, _) = Self::delete(Some(right), &node.key);
                    node.left = left;
                    node.right = right;
                    (Some(node), true)
                }
            },
        }
    }

    /// The smallest key in this subtree, found by descending left-most.
    fn min_key(&self) -> &K {
        match self.left.as_deref() {
            Some(left) => left.min_key(),
            None => &self.key,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// The seven-key tree used throughout: a perfect three-level shape.
    ///
    /// ```text
    ///        50
    ///      /    \
    ///    30      70
    ///   /  \    /  \
    ///  20  40  60  80
    /// ```
    fn sample_tree() -> Tree<i32> {
        let mut tree = Tree::new();
        for key in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn in_order_is_sorted() {
        let tree = sample_tree();
        assert_eq!(tree.in_order(), [&20, &30, &40, &50, &60, &70, &80]);
    }

    #[test]
    fn height_counts_levels() {
        let mut tree = Tree::new();
        assert_eq!(tree.height(), 0);

        tree.insert(1);
        assert_eq!(tree.height(), 1);

        assert_eq!(sample_tree().height(), 3);

        // A descending chain never rebalances.
        let mut chain = Tree::new();
        for key in [5, 4, 3, 2, 1] {
            chain.insert(key);
        }
        assert_eq!(chain.height(), 5);
    }

    #[test]
    fn insert_then_search_finds_the_key() {
        let mut tree = Tree::new();
        for key in [8, 3, 10, 1, 6] {
            tree.insert(key);
            assert_eq!(tree.search(&key).map(Node::key), Some(&key));
        }
    }

    #[test]
    fn search_on_empty_tree_misses() {
        let tree: Tree<i32> = Tree::new();
        assert!(tree.search(&0).is_none());
    }

    #[test]
    fn duplicates_route_right() {
        let mut tree = Tree::new();
        tree.insert(5);
        tree.insert(5);
        tree.insert(5);

        let root = tree.root().unwrap();
        assert!(root.left().is_none());
        let second = root.right().unwrap();
        assert_eq!(second.key(), &5);
        assert_eq!(second.right().unwrap().key(), &5);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn delete_leaf() {
        let mut tree = sample_tree();
        assert!(tree.delete(&20));
        assert_eq!(tree.in_order(), [&30, &40, &50, &60, &70, &80]);
        assert!(tree.search(&20).is_none());
    }

    #[test]
    fn delete_node_with_one_child() {
        let mut tree = Tree::new();
        for key in [5, 3, 7, 9] {
            tree.insert(key);
        }

        // 7 has only a right child; 9 takes its place.
        assert!(tree.delete(&7));
        assert_eq!(tree.root().unwrap().right().unwrap().key(), &9);
        assert_eq!(tree.in_order(), [&3, &5, &9]);
    }

    #[test]
    fn delete_node_with_two_children_promotes_successor() {
        let mut tree = sample_tree();
        assert!(tree.delete(&30));

        // 30's successor is 40, the minimum of its right subtree.
        assert_eq!(tree.root().unwrap().left().unwrap().key(), &40);
        assert!(tree.search(&30).is_none());
        assert!(tree.search(&40).is_some());
        assert_eq!(tree.in_order(), [&20, &40, &50, &60, &70, &80]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn delete_root_with_two_children() {
        let mut tree = sample_tree();
        assert!(tree.delete(&50));

        assert_eq!(tree.root().unwrap().key(), &60);
        assert_eq!(tree.in_order(), [&20, &30, &40, &60, &70, &80]);
    }

    #[test]
    fn delete_absent_key_is_a_structural_noop() {
        let mut tree = sample_tree();
        let before = tree.clone();

        assert!(!tree.delete(&999));
        assert_eq!(tree, before);
        assert_eq!(tree.in_order(), [&20, &30, &40, &50, &60, &70, &80]);
    }

    #[test]
    fn delete_on_empty_tree_is_a_noop() {
        let mut tree: Tree<i32> = Tree::new();
        assert!(!tree.delete(&1));
        assert!(tree.is_empty());
    }

    #[test]
    fn delete_lone_root() {
        let mut tree = Tree::new();
        tree.insert(5);

        assert!(tree.delete(&5));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn delete_with_duplicates_removes_one_node() {
        let mut tree = Tree::new();
        for key in [5, 5, 5] {
            tree.insert(key);
        }

        assert!(tree.delete(&5));
        assert_eq!(tree.len(), 2);
        assert!(tree.delete(&5));
        assert!(tree.delete(&5));
        assert!(!tree.delete(&5));
        assert!(tree.is_empty());
    }

    /// Walks the whole tree checking `left < node <= right` at every node.
    fn assert_ordered<K: Ord>(tree: &Tree<K>) {
        fn check<K: Ord>(node: &Node<K>, lower: Option<&K>, upper: Option<&K>) {
            if let Some(lower) = lower {
                assert!(lower <= node.key());
            }
            if let Some(upper) = upper {
                assert!(node.key() < upper);
            }
            if let Some(left) = node.left() {
                check(left, lower, Some(node.key()));
            }
            if let Some(right) = node.right() {
                check(right, Some(node.key()), upper);
            }
        }
        if let Some(root) = tree.root() {
            check(root, None, None);
        }
    }

    #[test]
    fn two_child_delete_preserves_ordering() {
        let mut tree = Tree::new();
        for key in [8, 4, 12, 2, 6, 10, 14, 5, 7, 9, 11] {
            tree.insert(key);
        }

        assert!(tree.delete(&4));
        assert_ordered(&tree);
        assert!(tree.delete(&8));
        assert_ordered(&tree);
        assert_eq!(tree.in_order(), [&2, &5, &6, &7, &9, &10, &11, &12, &14]);
    }
}
