use std::{
    fmt::{Display, Write},
    mem,
};

use crate::stack::ensure_sufficient_stack;

/// Generic labeled tree element.
///
/// A node is one of:
/// - a tagged interior node (`"declaration"`, `"if"`, `"add"`, ...) whose
///   children are sub-constructs in syntactic order,
/// - a category wrapper (`"data_type"`, `"identifier"`, `"expression"`, ...)
///   with a single child carrying the concrete value,
/// - a leaf holding a literal text value and no children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub label: String,
    pub children: Vec<Node>,
    pub terminal_text: Option<String>,
}

impl Node {
    pub fn new(label: &str) -> Self {
        Node {
            label: String::from(label),
            children: vec![],
            terminal_text: None,
        }
    }

    pub fn leaf(text: &str) -> Self {
        Node {
            label: String::from(text),
            children: vec![],
            terminal_text: Some(String::from(text)),
        }
    }

    /// A category wrapper around a single child.
    pub fn wrap(label: &str, child: Node) -> Self {
        Node::new(label).with(child)
    }

    /// Appends `child` and returns a reference to it, so a wrapper and its
    /// value can be pushed in one chain.
    pub fn push(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn with(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given label.
    pub fn get(&self, label: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.label == label)
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.terminal_text.is_some()
    }

    /// Indented textual dump, one label per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let label = if self.label.is_empty() { "<empty>" } else { &self.label };
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), label);

        for child in &self.children {
            ensure_sufficient_stack(|| child.dump_into(out, depth + 1));
        }
    }

    pub fn dump_xml(&self) -> String {
        let mut out = String::new();
        self.dump_xml_into(&mut out);
        out
    }

    fn dump_xml_into(&self, out: &mut String) {
        if let Some(text) = &self.terminal_text {
            out.push_str(&escape_xml(text));
            return;
        }

        let tag = if self.label.is_empty() { "node" } else { &self.label };
        if self.children.is_empty() {
            let _ = write!(out, "<{}/>", tag);
            return;
        }

        let _ = write!(out, "<{}>", tag);
        for (i, child) in self.children.iter().enumerate() {
            // Keep adjacent leaves apart
            if i > 0 && child.is_leaf() && self.children[i - 1].is_leaf() {
                out.push(' ');
            }
            ensure_sufficient_stack(|| child.dump_xml_into(out));
        }
        let _ = write!(out, "</{}>", tag);
    }
}

// Children are unlinked one level at a time so a deep chain is freed
// without recursing.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dump())
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
