//! File System Module
//!
//! The in-memory hierarchical file system the shell runs against:
//! - VirtualFileSystem: arena-backed tree with path resolution
//! - BoundedVec: capacity-checked child lists
//! - format: listing helpers

pub mod bounded;
pub mod format;
pub mod types;
pub mod virtual_fs;

pub use bounded::BoundedVec;
pub use format::{format_size, format_time};
pub use types::*;
pub use virtual_fs::{Node, VirtualFileSystem, WELCOME_TEXT};
