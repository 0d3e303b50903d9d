//! File System Types
//!
//! Core types for the virtual file system.

use std::fmt;

use chrono::{DateTime, Local};
use thiserror::Error;

/// Which ceiling an operation ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Children,
    Nodes,
    NameLength,
    Scrollback,
    InputLine,
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Capacity::Children => "directory entries",
            Capacity::Nodes => "filesystem nodes",
            Capacity::NameLength => "name length",
            Capacity::Scrollback => "scrollback lines",
            Capacity::InputLine => "input length",
        };
        f.write_str(what)
    }
}

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("no such file or directory '{path}'")]
    NotFound { path: String },

    #[error("not a directory '{path}'")]
    NotADirectory { path: String },

    #[error("is a directory '{path}'")]
    IsADirectory { path: String },

    #[error("parent directory not found for '{path}'")]
    ParentNotFound { path: String },

    #[error("capacity exceeded: {what} limited to {limit}")]
    CapacityExceeded { what: Capacity, limit: usize },

    #[error("file already exists '{path}'")]
    AlreadyExists { path: String },

    #[error("directory not empty '{path}'")]
    NotEmpty { path: String },

    #[error("invalid name '{name}'")]
    InvalidName { name: String },

    #[error("invalid argument, {operation} '{path}'")]
    InvalidArgument { path: String, operation: String },
}

/// Node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn is_directory(self) -> bool {
        self == NodeKind::Directory
    }
}

/// Handle into the node arena.
///
/// The generation changes whenever a slot is recycled, so an id held across a
/// delete stops resolving instead of pointing at an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

/// Listing entry returned by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
}

impl DirEntry {
    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FsError::CapacityExceeded { what: Capacity::Children, limit: 20 };
        assert_eq!(err.to_string(), "capacity exceeded: directory entries limited to 20");

        let err = FsError::NotFound { path: "/nope".to_string() };
        assert_eq!(err.to_string(), "no such file or directory '/nope'");
    }

    #[test]
    fn test_node_kind() {
        assert!(NodeKind::Directory.is_directory());
        assert!(!NodeKind::File.is_directory());
    }
}
