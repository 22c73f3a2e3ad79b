//! Cycle-safe reachability over the dependency graph.
//!
//! All walks mark a node visited before expanding it, so each node is expanded
//! at most once and cycles (self-loops included) always terminate.

use indexmap::IndexSet;
use modgraph_core::graph::ModGraph;
use std::collections::VecDeque;

/// Every name that transitively depends on `name`, in BFS order.
/// `name` itself is never included. Unknown names have an empty closure,
/// including dangling names that other entities reference.
pub fn dependents_closure<'a>(graph: &'a ModGraph, name: &'a str) -> IndexSet<&'a str> {
    bfs_closure(name, |n| graph.direct_dependents(n))
}

/// Every name that `name` transitively depends on, in BFS order.
///
/// Dangling dependency names are included: they are visited before their
/// lookup fails, they just contribute no further edges.
pub fn ancestors_closure<'a>(graph: &'a ModGraph, name: &'a str) -> IndexSet<&'a str> {
    bfs_closure(name, |n| graph.direct_dependencies(n))
}

/// Number of entities transitively depending on `name`.
pub fn transitive_reach(graph: &ModGraph, name: &str) -> usize {
    dependents_closure(graph, name).len()
}

/// Number of names `name` transitively depends on, dangling names included.
pub fn transitive_ancestors(graph: &ModGraph, name: &str) -> usize {
    ancestors_closure(graph, name).len()
}

fn bfs_closure<'a, F>(start: &'a str, neighbors: F) -> IndexSet<&'a str>
where
    F: Fn(&str) -> &'a [String],
{
    let mut visited: IndexSet<&'a str> = IndexSet::new();
    let mut queue: VecDeque<&'a str> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        for next in neighbors(current) {
            if !visited.contains(next.as_str()) {
                queue.push_back(next);
            }
        }
    }

    visited.shift_remove(start);
    visited
}

/// Depth-first ancestor collection used for chain assembly.
///
/// Visits dependencies in declaration order, adding each to the set before
/// descending into it. The walk uses an explicit stack of dependency cursors,
/// which reproduces the recursive pre-order exactly without growing the call
/// stack. `name` ends up in the set only when it is reachable from one of its
/// own dependencies (a cycle or self-loop).
pub fn collect_ancestor_set<'a>(graph: &'a ModGraph, name: &str) -> IndexSet<&'a str> {
    let mut ancestors = IndexSet::new();
    let Some(entity) = graph.get_entity(name) else {
        return ancestors;
    };

    let mut stack = vec![entity.depends_on.iter()];
    while let Some(cursor) = stack.last_mut() {
        let Some(dep) = cursor.next() else {
            stack.pop();
            continue;
        };
        if ancestors.insert(dep.as_str())
            && let Some(next) = graph.get_entity(dep)
        {
            stack.push(next.depends_on.iter());
        }
    }
    ancestors
}
