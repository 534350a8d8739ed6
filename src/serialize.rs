//! Leaf-list persistence.
//!
//! The persisted form records only leaf full paths, not the tree structure
//! and not payloads: a big-endian `i32` leaf count followed by each leaf
//! path as a big-endian `u16` byte length plus UTF-8 bytes. Reading rebuilds
//! intermediate nodes implicitly by re-inserting every leaf; anything in the
//! stream beyond the declared count is ignored.

use std::io::{self, Read, Write};

use thiserror::Error;

use crate::tree::PathTrie;

/// Failure while writing the leaf list.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("leaf path is {0} bytes, exceeding the {max}-byte length prefix", max = u16::MAX)]
    PathTooLong(usize),
    #[error("leaf count {0} exceeds the i32 count field")]
    TooManyLeaves(usize),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure while reading the leaf list.
///
/// Any error aborts reconstruction; no partially populated tree is handed
/// back.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("stream ended before the declared leaf list was read")]
    Truncated,
    #[error("negative leaf count {0}")]
    NegativeCount(i32),
    #[error("leaf path is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn read_exact<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<(), DecodeError> {
    input.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => DecodeError::Truncated,
        _ => DecodeError::Io(err),
    })
}

impl<V> PathTrie<V> {
    /// Write the leaf paths of this tree to `out`.
    ///
    /// Payloads are not persisted; a round-trip preserves the path set only.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), EncodeError> {
        let leaves = self.leaves();
        let count =
            i32::try_from(leaves.len()).map_err(|_| EncodeError::TooManyLeaves(leaves.len()))?;
        out.write_all(&count.to_be_bytes())?;
        for leaf in &leaves {
            let bytes = leaf.as_bytes();
            let len =
                u16::try_from(bytes.len()).map_err(|_| EncodeError::PathTooLong(bytes.len()))?;
            out.write_all(&len.to_be_bytes())?;
            out.write_all(bytes)?;
        }
        Ok(())
    }

    /// Read a leaf list from `input` and reconstruct a tree from it.
    ///
    /// Intermediate nodes are rebuilt by inserting each leaf path in
    /// sequence, without payloads. Bytes beyond the declared count are left
    /// unread in `input`.
    pub fn read_from<R: Read>(input: &mut R) -> Result<Self, DecodeError> {
        let mut count_buf = [0u8; 4];
        read_exact(input, &mut count_buf)?;
        let count = i32::from_be_bytes(count_buf);
        if count < 0 {
            return Err(DecodeError::NegativeCount(count));
        }

        let mut tree = PathTrie::new();
        for _ in 0..count {
            let mut len_buf = [0u8; 2];
            read_exact(input, &mut len_buf)?;
            let mut path_buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
            read_exact(input, &mut path_buf)?;
            let path = String::from_utf8(path_buf)?;
            tree.insert(&path);
        }
        Ok(tree)
    }

    /// Replace this tree's contents with a leaf list read from `input`.
    ///
    /// On error the tree is left exactly as it was.
    pub fn load_from<R: Read>(&mut self, input: &mut R) -> Result<(), DecodeError> {
        *self = Self::read_from(input)?;
        Ok(())
    }
}
