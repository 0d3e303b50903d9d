//! Virtual File System
//!
//! A rooted tree of nodes kept in an arena. Children are owned through the
//! parent's child list; the parent link is a plain `NodeId` and never owns
//! anything. Paths are slash-separated, absolute or relative to the current
//! directory, and may contain `.` and `..`.

use chrono::{DateTime, Local};

use super::bounded::{BoundedVec, Full};
use super::types::*;
use crate::config::FsLimits;

/// Content of the sample file created by [`VirtualFileSystem::seeded`].
pub const WELCOME_TEXT: &str = "Welcome to MicroOS!\nType 'help' for commands.\n";

const DEFAULT_DIRECTORIES: [&str; 3] = ["/home", "/system", "/apps"];
const WELCOME_PATH: &str = "/home/welcome.txt";

/// A single tree element.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    created: DateTime<Local>,
    modified: DateTime<Local>,
    content: Vec<u8>,
    children: BoundedVec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    fn new(name: &str, kind: NodeKind, parent: Option<NodeId>, max_children: usize) -> Self {
        let now = Local::now();
        // Files get a zero-capacity child list so they can never hold children.
        let capacity = if kind.is_directory() { max_children } else { 0 };
        Self {
            name: name.to_string(),
            kind,
            created: now,
            modified: now,
            content: Vec::new(),
            children: BoundedVec::new(capacity),
            parent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// In-memory hierarchical file system.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
    root: NodeId,
    current_directory: NodeId,
    limits: FsLimits,
}

fn tokens(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|t| !t.is_empty())
}

impl VirtualFileSystem {
    /// Create a file system holding only the root directory.
    pub fn new(limits: FsLimits) -> Self {
        let root_node = Node::new("/", NodeKind::Directory, None, limits.max_children);
        let root = NodeId { index: 0, generation: 0 };
        Self {
            slots: vec![Slot { generation: 0, node: Some(root_node) }],
            free: Vec::new(),
            live: 1,
            root,
            current_directory: root,
            limits,
        }
    }

    /// Create a file system with the default directories and the welcome file.
    pub fn seeded(limits: FsLimits) -> Result<Self, FsError> {
        let mut fs = Self::new(limits);
        for dir in DEFAULT_DIRECTORIES {
            fs.create(dir, NodeKind::Directory)?;
        }
        fs.create(WELCOME_PATH, NodeKind::File)?;
        fs.write(WELCOME_PATH, WELCOME_TEXT.as_bytes())?;
        log::info!("filesystem seeded with {} nodes", fs.live);
        Ok(fs)
    }

    pub fn limits(&self) -> &FsLimits {
        &self.limits
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn current_directory(&self) -> NodeId {
        self.current_directory
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Look up a node. Ids of deleted nodes return `None`.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    // Ids reached through the tree itself (root, cwd, parent and child links)
    // are always live.
    fn live(&self, id: NodeId) -> &Node {
        match self.node(id) {
            Some(node) => node,
            None => unreachable!("tree holds a dangling node id {:?}", id),
        }
    }

    fn live_mut(&mut self, id: NodeId) -> &mut Node {
        match self.node_mut(id) {
            Some(node) => node,
            None => unreachable!("tree holds a dangling node id {:?}", id),
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId { index, generation: slot.generation }
            }
            None => {
                self.slots.push(Slot { generation: 0, node: Some(node) });
                NodeId { index: self.slots.len() - 1, generation: 0 }
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        let slot = &mut self.slots[id.index];
        if slot.generation == id.generation && slot.node.take().is_some() {
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index);
            self.live -= 1;
        }
    }

    fn start_for(&self, path: &str) -> NodeId {
        if path.starts_with('/') {
            self.root
        } else {
            self.current_directory
        }
    }

    fn child_named(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.live(dir)
            .children
            .iter()
            .copied()
            .find(|&child| self.live(child).name == name)
    }

    fn walk<'p>(&self, start: NodeId, tokens: impl IntoIterator<Item = &'p str>) -> Option<NodeId> {
        let mut current = start;
        for token in tokens {
            match token {
                "." => {}
                ".." => {
                    if let Some(parent) = self.live(current).parent {
                        current = parent;
                    }
                }
                name => current = self.child_named(current, name)?,
            }
        }
        Some(current)
    }

    /// Resolve a path to a node.
    pub fn resolve(&self, path: &str) -> Result<NodeId, FsError> {
        let found = self.walk(self.start_for(path), tokens(path));
        log::trace!("resolve '{}' -> {:?}", path, found);
        found.ok_or_else(|| FsError::NotFound { path: path.to_string() })
    }

    /// Resolve every token but the last to a directory; return it with the last token.
    fn resolve_parent<'p>(&self, path: &'p str) -> Result<(NodeId, &'p str), FsError> {
        let parts: Vec<&str> = tokens(path).collect();
        let Some((name, dirs)) = parts.split_last() else {
            return Err(FsError::InvalidName { name: path.to_string() });
        };
        let parent = self
            .walk(self.start_for(path), dirs.iter().copied())
            .ok_or_else(|| FsError::ParentNotFound { path: path.to_string() })?;
        if !self.live(parent).is_directory() {
            return Err(FsError::NotADirectory { path: path.to_string() });
        }
        Ok((parent, *name))
    }

    fn check_name(&self, name: &str) -> Result<(), FsError> {
        if name == "." || name == ".." {
            return Err(FsError::InvalidName { name: name.to_string() });
        }
        if name.len() > self.limits.max_name_len {
            return Err(FsError::CapacityExceeded {
                what: Capacity::NameLength,
                limit: self.limits.max_name_len,
            });
        }
        Ok(())
    }

    fn children_full(&self) -> FsError {
        FsError::CapacityExceeded { what: Capacity::Children, limit: self.limits.max_children }
    }

    /// Whether `id` is `ancestor` or lies below it.
    fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.live(node).parent;
        }
        false
    }

    /// Create a file or directory. Sibling names must be unique.
    pub fn create(&mut self, path: &str, kind: NodeKind) -> Result<NodeId, FsError> {
        let (parent, name) = self.resolve_parent(path)?;
        self.check_name(name)?;
        if self.child_named(parent, name).is_some() {
            return Err(FsError::AlreadyExists { path: path.to_string() });
        }
        if self.live(parent).children.is_full() {
            return Err(self.children_full());
        }
        if self.live >= self.limits.max_nodes {
            return Err(FsError::CapacityExceeded {
                what: Capacity::Nodes,
                limit: self.limits.max_nodes,
            });
        }

        let node = Node::new(name, kind, Some(parent), self.limits.max_children);
        let id = self.alloc(node);
        if let Err(Full(id)) = self.live_mut(parent).children.try_push(id) {
            self.release(id);
            return Err(self.children_full());
        }
        log::debug!("created {:?} '{}'", kind, path);
        Ok(id)
    }

    /// Read a file's content.
    pub fn read(&self, path: &str) -> Result<&[u8], FsError> {
        let node = self.live(self.resolve(path)?);
        if node.is_directory() {
            return Err(FsError::IsADirectory { path: path.to_string() });
        }
        Ok(&node.content)
    }

    /// Replace a file's content, truncated to the content capacity.
    ///
    /// Returns the number of bytes stored.
    pub fn write(&mut self, path: &str, content: &[u8]) -> Result<usize, FsError> {
        let id = self.resolve(path)?;
        let max = self.limits.max_content;
        let node = self.live_mut(id);
        if node.is_directory() {
            return Err(FsError::IsADirectory { path: path.to_string() });
        }
        let stored = content.len().min(max);
        if stored < content.len() {
            log::debug!("write '{}' truncated from {} to {} bytes", path, content.len(), stored);
        }
        node.content = content[..stored].to_vec();
        node.modified = Local::now();
        Ok(stored)
    }

    /// Change the current directory. Nothing changes on failure.
    pub fn change_directory(&mut self, path: &str) -> Result<(), FsError> {
        let id = self.resolve(path)?;
        if !self.live(id).is_directory() {
            return Err(FsError::NotADirectory { path: path.to_string() });
        }
        self.current_directory = id;
        Ok(())
    }

    /// Absolute path of a node, or `None` for a deleted id.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            names.push(current.name.as_str());
            current = self.live(parent);
        }
        names.reverse();
        Some(format!("/{}", names.join("/")))
    }

    /// Absolute path of the current directory.
    pub fn current_path(&self) -> String {
        self.path_of(self.current_directory)
            .unwrap_or_else(|| "/".to_string())
    }

    /// File: content length. Directory: recursive sum over children.
    /// Deleted ids count as 0.
    pub fn size(&self, id: NodeId) -> u64 {
        match self.node(id) {
            Some(node) if node.is_directory() => {
                node.children.iter().map(|&child| self.size(child)).sum()
            }
            Some(node) => node.content.len() as u64,
            None => 0,
        }
    }

    /// Size of the node at `path`.
    pub fn size_at(&self, path: &str) -> Result<u64, FsError> {
        Ok(self.size(self.resolve(path)?))
    }

    /// Children of a directory in creation order. Empty when the path does not
    /// resolve or names a file.
    pub fn list(&self, path: &str) -> Vec<DirEntry> {
        match self.resolve(path) {
            Ok(id) => self.list_node(id),
            Err(_) => Vec::new(),
        }
    }

    /// Children of a node in creation order.
    pub fn list_node(&self, id: NodeId) -> Vec<DirEntry> {
        let Some(dir) = self.node(id) else {
            return Vec::new();
        };
        dir.children
            .iter()
            .map(|&child| {
                let node = self.live(child);
                DirEntry {
                    id: child,
                    name: node.name.clone(),
                    kind: node.kind,
                    size: self.size(child),
                    created: node.created,
                    modified: node.modified,
                }
            })
            .collect()
    }

    /// Delete a node.
    ///
    /// A non-empty directory is refused with `NotEmpty` unless `recursive` is
    /// set, in which case the whole subtree goes. The current directory moves to
    /// the deleted node's parent when it was inside the deleted subtree.
    pub fn delete(&mut self, path: &str, recursive: bool) -> Result<(), FsError> {
        let id = self.resolve(path)?;
        let node = self.live(id);
        let Some(parent) = node.parent else {
            return Err(FsError::InvalidArgument {
                path: path.to_string(),
                operation: "delete".to_string(),
            });
        };
        if !node.children.is_empty() && !recursive {
            return Err(FsError::NotEmpty { path: path.to_string() });
        }

        if self.is_within(self.current_directory, id) {
            self.current_directory = parent;
        }
        self.live_mut(parent).children.remove_where(|&child| child == id);

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            pending.extend_from_slice(&self.live(next).children);
            self.release(next);
        }
        log::debug!("deleted '{}'", path);
        Ok(())
    }

    /// Rename or move a node.
    ///
    /// `to` names the destination the way `create` would: its parent must be a
    /// directory and its last token becomes the new name.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<NodeId, FsError> {
        let id = self.resolve(from)?;
        let Some(old_parent) = self.live(id).parent else {
            return Err(FsError::InvalidArgument {
                path: from.to_string(),
                operation: "rename".to_string(),
            });
        };
        let (new_parent, name) = self.resolve_parent(to)?;
        self.check_name(name)?;
        match self.child_named(new_parent, name) {
            Some(existing) if existing == id => return Ok(id),
            Some(_) => return Err(FsError::AlreadyExists { path: to.to_string() }),
            None => {}
        }
        if self.is_within(new_parent, id) {
            return Err(FsError::InvalidArgument {
                path: to.to_string(),
                operation: "rename".to_string(),
            });
        }

        if new_parent != old_parent {
            if self.live_mut(new_parent).children.try_push(id).is_err() {
                return Err(self.children_full());
            }
            self.live_mut(old_parent).children.remove_where(|&child| child == id);
        }
        let node = self.live_mut(id);
        node.name = name.to_string();
        node.parent = Some(new_parent);
        node.modified = Local::now();
        log::debug!("renamed '{}' -> '{}'", from, to);
        Ok(id)
    }
}
