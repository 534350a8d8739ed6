//! A trie keyed by slash-delimited path segments.
//!
//! [`PathTrie`] records a hierarchical set of string paths (`/usr/bin/bash`),
//! auto-creating missing intermediate segments, with an optional payload per
//! node. It supports membership testing, payload lookup, subtree removal,
//! ordered traversal, leaf enumeration, and a compact persisted form that
//! records only leaf paths.
//!
//! Sibling order is unspecified throughout: traversals and leaf listings
//! over trees with branching must be treated as sets. The structure is
//! single-threaded; share it across threads behind external mutual
//! exclusion.
//!
//! ```rust
//! use path_trie::PathTrie;
//!
//! let mut tree = PathTrie::new();
//! tree.insert("/usr/bin/bash");
//! tree.insert_with("/etc/fstab", "config");
//!
//! assert!(tree.contains("/usr/bin"));
//! assert_eq!(tree.get("/etc/fstab"), Some(&"config"));
//!
//! tree.remove("/usr");
//! assert!(!tree.contains("/usr/bin/bash"));
//! ```

pub mod iter;
pub mod node;
mod path;
pub mod serialize;
pub mod stats;
pub mod tree;

pub use iter::NodeIter;
pub use node::PathNode;
pub use serialize::{DecodeError, EncodeError};
pub use stats::TrieStats;
pub use tree::PathTrie;
