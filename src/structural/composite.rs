//! Structural pattern: Composite
//! Example: files and folders treated through one type
//!
//! A tagged enum stands in for the component hierarchy: a `Folder` holds
//! children of the same type as its leaves.

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(String),
    Folder { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node::File(name.into())
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Node::Folder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Adds a child. Files cannot hold children, so this is a no-op on them
    /// and reports `false`.
    pub fn add(&mut self, child: Node) -> bool {
        match self {
            Node::Folder { children, .. } => {
                children.push(child);
                true
            }
            Node::File(_) => false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(name) | Node::Folder { name, .. } => name,
        }
    }

    /// Pre-order listing, one line per node.
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut Vec<String>) {
        match self {
            Node::File(name) => out.push(format!("File: {name}")),
            Node::Folder { name, children } => {
                out.push(format!("Folder: {name}"));
                for child in children {
                    child.render_into(out);
                }
            }
        }
    }

    pub fn file_count(&self) -> usize {
        match self {
            Node::File(_) => 1,
            Node::Folder { children, .. } => children.iter().map(Node::file_count).sum(),
        }
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut root = Node::folder("Root");
    root.add(Node::file("File1.txt"));
    root.add(Node::file("File2.txt"));

    let mut sub = Node::folder("SubFolder");
    sub.add(Node::file("File3.txt"));
    root.add(sub);

    console.lines(root.render())
}
