//! Dependency chains: the trees from true roots down to a selected entity.
//!
//! Chains can be as deep as the longest dependency path in the document, so
//! assembly, rendering, and teardown all walk the tree with explicit stacks.

use crate::traverse::collect_ancestor_set;
use indexmap::IndexSet;
use modgraph_core::graph::ModGraph;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::slice;

/// A node in a rendered dependency chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainNode {
    pub name: String,
    /// Indentation level; 0 at a root.
    pub depth: usize,
    /// Rendering hint: this is the entity the chain was built for.
    pub selected: bool,
    /// Set on the stand-in root emitted when no dependency-free root leads
    /// to the selected entity.
    pub synthetic_root: bool,
    pub children: Vec<ChainNode>,
}

impl Drop for ChainNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Serializes the node alone; [`Chain`] serializes the tree as a pre-order
/// list where `depth` carries the structure.
impl Serialize for ChainNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChainNode", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("depth", &self.depth)?;
        state.serialize_field("selected", &self.selected)?;
        state.serialize_field("synthetic_root", &self.synthetic_root)?;
        state.end()
    }
}

/// All chains leading to one selected entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub selected: String,
    pub roots: Vec<ChainNode>,
}

impl Chain {
    /// Every node, roots first, each followed by its subtree.
    pub fn preorder(&self) -> Vec<&ChainNode> {
        let mut nodes = Vec::new();
        let mut pending: Vec<&ChainNode> = self.roots.iter().rev().collect();
        while let Some(node) = pending.pop() {
            nodes.push(node);
            pending.extend(node.children.iter().rev());
        }
        nodes
    }

    /// Total number of rendered nodes across all roots.
    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }
}

impl Serialize for Chain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Chain", 2)?;
        state.serialize_field("selected", &self.selected)?;
        state.serialize_field("nodes", &self.preorder())?;
        state.end()
    }
}

/// Build the root-to-`name` dependency trees.
///
/// Roots are dependency-free entities that are ancestors of `name` (or `name`
/// itself). Each root expands into those of its dependents that are ancestors
/// of `name` or `name` itself; an entity is never its own child, and an entity
/// already on the current path is not expanded again. When no root qualifies
/// the chain holds a single synthetic root for `name`. Unknown names produce a
/// chain with no roots.
pub fn build_chain(graph: &ModGraph, name: &str) -> Chain {
    let mut chain = Chain {
        selected: name.to_string(),
        roots: Vec::new(),
    };
    if graph.get_entity(name).is_none() {
        return chain;
    }

    let mut builder = ChainBuilder {
        graph,
        selected: name,
        ancestors: collect_ancestor_set(graph, name),
        path: IndexSet::new(),
    };

    for root in graph.roots() {
        if builder.in_chain(&root.name) {
            builder.expand(&root.name, &mut chain.roots);
        }
    }

    if chain.roots.is_empty() {
        chain.roots.push(ChainNode {
            name: name.to_string(),
            depth: 0,
            selected: true,
            synthetic_root: true,
            children: Vec::new(),
        });
    }

    tracing::debug!(
        selected = name,
        ancestors = builder.ancestors.len(),
        roots = chain.roots.len(),
        "built dependency chain"
    );
    chain
}

struct ChainBuilder<'a> {
    graph: &'a ModGraph,
    selected: &'a str,
    ancestors: IndexSet<&'a str>,
    /// Names from the current root down to the node being expanded.
    path: IndexSet<&'a str>,
}

/// A node under construction and the dependents still to consider.
struct Frame<'a> {
    name: &'a str,
    depth: usize,
    dependents: slice::Iter<'a, String>,
    children: Vec<ChainNode>,
}

impl<'a> ChainBuilder<'a> {
    fn in_chain(&self, name: &str) -> bool {
        name == self.selected || self.ancestors.contains(name)
    }

    fn enter(&mut self, name: &'a str, depth: usize) -> Frame<'a> {
        let graph = self.graph;
        self.path.insert(name);
        Frame {
            name,
            depth,
            dependents: graph.direct_dependents(name).iter(),
            children: Vec::new(),
        }
    }

    /// Expand the tree under `root` and append it to `roots`.
    ///
    /// A dependent becomes a child when it is in the chain, is not the node
    /// itself, and is not already on the path from the root.
    fn expand(&mut self, root: &'a str, roots: &mut Vec<ChainNode>) {
        let mut stack = vec![self.enter(root, 0)];
        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.dependents.next() {
                let child = child.as_str();
                if child != frame.name && self.in_chain(child) && !self.path.contains(child) {
                    let depth = frame.depth + 1;
                    let next = self.enter(child, depth);
                    stack.push(next);
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            self.path.pop();
            let node = ChainNode {
                name: done.name.to_string(),
                depth: done.depth,
                selected: done.name == self.selected,
                synthetic_root: false,
                children: done.children,
            };
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => roots.push(node),
            }
        }
    }
}

/// Render a chain as an indented tree, one line per node.
pub fn format_chain(chain: &Chain) -> String {
    let mut output = String::new();
    for root in &chain.roots {
        output.push_str(&label(root));
        output.push('\n');

        // One entry per open level below the root: whether that level's node
        // was the last of its siblings.
        let mut last_flags: Vec<bool> = Vec::new();
        let mut stack = vec![root.children.iter().peekable()];
        while let Some(siblings) = stack.last_mut() {
            let Some(node) = siblings.next() else {
                stack.pop();
                last_flags.pop();
                continue;
            };
            let is_last = siblings.peek().is_none();

            for &ancestor_last in &last_flags {
                output.push_str(if ancestor_last { "    " } else { "│   " });
            }
            output.push_str(if is_last { "└── " } else { "├── " });
            output.push_str(&label(node));
            output.push('\n');

            last_flags.push(is_last);
            stack.push(node.children.iter().peekable());
        }
    }
    output
}

fn label(node: &ChainNode) -> String {
    let mut label = node.name.clone();
    if node.synthetic_root {
        label.push_str(" (root)");
    }
    if node.selected {
        label = format!("*{}*", label);
    }
    label
}
