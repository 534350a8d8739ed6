//! Path string helpers shared by every trie operation.
//!
//! Insert, lookup, and removal all descend the tree with the same
//! tokenization: strip the current node's full path off the front of the
//! target, drop any leading separators, and cut at the next separator.

pub(crate) const SEPARATOR: char = '/';

/// The root node's path (and segment).
pub(crate) const ROOT_PATH: &str = "/";

/// Strips all trailing separators from `path`.
///
/// An input consisting only of separators strips down to the empty string;
/// callers decide whether that refers to the root or is rejected.
pub(crate) fn strip_trailing(path: &str) -> &str {
    path.trim_end_matches(SEPARATOR)
}

/// Tokenizes the next segment of `target` below a node at `node_path`.
///
/// `target` must start with `node_path`. Returns the segment and whether it
/// is the final component of `target`.
pub(crate) fn next_segment<'a>(node_path: &str, target: &'a str) -> (&'a str, bool) {
    let sub = target[node_path.len()..].trim_start_matches(SEPARATOR);
    match sub.find(SEPARATOR) {
        Some(at) => (&sub[..at], false),
        None => (sub, true),
    }
}

/// Joins a child segment onto its parent's full path.
///
/// Only the root path ends with a separator, so the root's children do not
/// get a doubled one.
pub(crate) fn join(parent: &str, segment: &str) -> String {
    if parent.ends_with(SEPARATOR) {
        format!("{parent}{segment}")
    } else {
        format!("{parent}{SEPARATOR}{segment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing() {
        assert_eq!(strip_trailing("/a/b/"), "/a/b");
        assert_eq!(strip_trailing("/a/b///"), "/a/b");
        assert_eq!(strip_trailing("/a/b"), "/a/b");
        assert_eq!(strip_trailing("///"), "");
        assert_eq!(strip_trailing(""), "");
    }

    #[test]
    fn test_next_segment_at_root() {
        assert_eq!(next_segment("/", "/usr/bin/bash"), ("usr", false));
        assert_eq!(next_segment("/", "/usr"), ("usr", true));
    }

    #[test]
    fn test_next_segment_below_root() {
        assert_eq!(next_segment("/usr", "/usr/bin/bash"), ("bin", false));
        assert_eq!(next_segment("/usr/bin", "/usr/bin/bash"), ("bash", true));
    }

    #[test]
    fn test_next_segment_collapses_leading_separators() {
        assert_eq!(next_segment("/usr", "/usr//bin"), ("bin", true));
        assert_eq!(next_segment("/", "///usr"), ("usr", true));
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", "usr"), "/usr");
        assert_eq!(join("/usr", "bin"), "/usr/bin");
    }
}
