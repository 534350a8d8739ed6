//! Path trie implementation.
//!
//! This module contains the main [`PathTrie`] wrapper. The wrapper owns the
//! root [`PathNode`], normalizes incoming paths, and delegates to the
//! recursive node operations.

use crate::iter::NodeIter;
use crate::node::PathNode;
use crate::path;
use crate::stats::{self, TrieStats};

/// A trie keyed by slash-delimited path segments.
///
/// Stores a hierarchical set of string paths, auto-creating missing
/// intermediate segments, with an optional payload per node. Shared prefixes
/// share ancestor nodes, so `/usr/bin/bash` and `/usr/bin/zsh` differ only
/// in their final node.
///
/// Trailing separators are insignificant: `/a/b`, `/a/b/`, and `/a/b///`
/// all name the same node. Sibling order is unspecified everywhere: leaf
/// listings and traversals over trees with branching must be compared as
/// sets.
///
/// ## Type Parameters
///
/// - `V`: the payload type. The trie places no constraints on it; nodes
///   without an explicitly supplied payload simply hold none.
///
/// ## Examples
///
/// ```rust
/// use path_trie::PathTrie;
///
/// let mut tree = PathTrie::<()>::new();
/// assert!(tree.insert("/usr/bin/bash"));
///
/// // Intermediate segments were created on the way down.
/// assert!(tree.contains("/usr"));
/// assert!(tree.contains("/usr/bin"));
///
/// // Only terminal paths show up in the leaf listing.
/// assert_eq!(tree.leaves(), vec!["/usr/bin/bash".to_string()]);
/// ```
///
/// Payloads are attached per path and read back through node handles:
///
/// ```rust
/// use path_trie::PathTrie;
///
/// let mut tree = PathTrie::new();
/// tree.insert_with("/etc/fstab", 42u32);
///
/// assert_eq!(tree.get("/etc/fstab"), Some(&42));
/// assert_eq!(tree.get("/etc"), None);
///
/// *tree.get_mut("/etc/fstab").unwrap() += 1;
/// assert_eq!(tree.get("/etc/fstab"), Some(&43));
/// ```
#[derive(Debug, Clone)]
pub struct PathTrie<V> {
    root: PathNode<V>,
}

impl<V> Default for PathTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PathTrie<V> {
    /// Create a new trie holding only the root.
    pub fn new() -> Self {
        Self {
            root: PathNode::root(),
        }
    }

    /// The root node, whose path is `/`. Always present.
    pub fn root(&self) -> &PathNode<V> {
        &self.root
    }

    /// True if nothing has been inserted below the root.
    pub fn is_empty(&self) -> bool {
        self.root.num_children() == 0
    }

    /// Insert a path, creating missing intermediate segments.
    ///
    /// Returns `true` if the final node was created. Re-inserting a path
    /// that already exists is a no-op returning `false`, as is a path that
    /// normalizes to empty or is not rooted at `/`.
    pub fn insert(&mut self, path: &str) -> bool {
        self.insert_opt(path, None)
    }

    /// Insert a path with a payload on its final node.
    ///
    /// The payload is stored only when the final node is created; if the
    /// path already exists the insert is a no-op returning `false` and the
    /// existing node's payload is left untouched. Use [`PathTrie::find_mut`]
    /// to change an existing node's payload.
    pub fn insert_with(&mut self, path: &str, payload: V) -> bool {
        self.insert_opt(path, Some(payload))
    }

    fn insert_opt(&mut self, path: &str, payload: Option<V>) -> bool {
        let path = path::strip_trailing(path);
        if path.is_empty() {
            return false;
        }
        self.root.insert(path, payload)
    }

    /// True if the path exists in the tree.
    ///
    /// An input that is all separators refers to the root and succeeds; the
    /// empty string does not name any node.
    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Look up the node at a path, to read its payload or inspect its
    /// children. Returns `None` for any unmatched path.
    pub fn find(&self, path: &str) -> Option<&PathNode<V>> {
        let stripped = path::strip_trailing(path);
        if stripped.is_empty() {
            // Only an input *reduced* to empty by stripping refers to the
            // root; the empty string itself matches nothing.
            return if path.is_empty() {
                None
            } else {
                Some(&self.root)
            };
        }
        self.root.find(stripped)
    }

    /// Look up the node at a path for mutation of its payload.
    pub fn find_mut(&mut self, path: &str) -> Option<&mut PathNode<V>> {
        let stripped = path::strip_trailing(path);
        if stripped.is_empty() {
            return if path.is_empty() {
                None
            } else {
                Some(&mut self.root)
            };
        }
        self.root.find_mut(stripped)
    }

    /// The payload stored at a path, if the path exists and has one.
    pub fn get(&self, path: &str) -> Option<&V> {
        self.find(path)?.payload()
    }

    /// Mutable access to the payload stored at a path.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut V> {
        self.find_mut(path)?.payload_mut()
    }

    /// Remove a path and its entire subtree.
    ///
    /// Returns `true` if the exact path was found and detached. The root
    /// itself is never removable; use [`PathTrie::clear`].
    pub fn remove(&mut self, path: &str) -> bool {
        let path = path::strip_trailing(path);
        if path.is_empty() {
            return false;
        }
        self.root.remove(path)
    }

    /// Reset to the initial state of a lone root.
    pub fn clear(&mut self) {
        self.root = PathNode::root();
    }

    /// Pre-order traversal: `action` sees each node before its descendants.
    pub fn prefix<F>(&self, mut action: F)
    where
        F: FnMut(&PathNode<V>),
    {
        self.root.prefix(&mut action);
    }

    /// Post-order traversal: `action` sees each node after its descendants.
    pub fn postfix<F>(&self, mut action: F)
    where
        F: FnMut(&PathNode<V>),
    {
        self.root.postfix(&mut action);
    }

    /// Invokes `action` with the full path of every leaf.
    ///
    /// This is the canonical way to list terminal "file" paths without the
    /// intermediate "directory" paths. On a tree with nothing inserted the
    /// root itself is the lone leaf.
    pub fn for_each_leaf<F>(&self, mut action: F)
    where
        F: FnMut(&str),
    {
        self.root.postfix(&mut |node| {
            if node.is_leaf() {
                action(node.full_path());
            }
        });
    }

    /// Collects the full paths of all leaves. Order is unspecified.
    pub fn leaves(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.for_each_leaf(|path| paths.push(path.to_owned()));
        paths
    }

    /// Iterate over every node, root included, in unspecified order.
    pub fn nodes(&self) -> NodeIter<'_, V> {
        NodeIter::new(&self.root)
    }

    /// Gather aggregate counts over the whole tree.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        stats::collect(&self.root, 0, &mut stats);
        stats
    }
}
