//! microshell - a simulated single-user shell
//!
//! An in-memory hierarchical file system with hard capacity limits, and a
//! command shell that keeps a reflowing scrollback, command history and a
//! scrollable viewport. A host feeds key events in and draws the frames that
//! come back.

pub mod commands;
pub mod config;
pub mod fs;
pub mod shell;

pub use config::Config;
pub use fs::{FsError, VirtualFileSystem};
pub use shell::{CommandShell, ContentArea, Frame, HostRequest, KeyEvent, ShellError};
