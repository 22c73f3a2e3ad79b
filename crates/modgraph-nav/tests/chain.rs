use modgraph_core::graph::*;
use modgraph_nav::chain::{ChainNode, build_chain, format_chain};

fn make_entity(name: &str, deps: &[&str]) -> Entity {
    Entity {
        id: format!("urn:mod:{}", name.to_lowercase()),
        types: vec!["Trait".to_string()],
        name: name.to_string(),
        depends_on: deps.iter().map(|d| d.to_string()).collect(),
        ..Entity::default()
    }
}

fn names(nodes: &[ChainNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.name.as_str()).collect()
}

#[test]
fn test_linear_chain() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A"]),
        make_entity("C", &["B"]),
    ]);
    let chain = build_chain(&graph, "C");

    assert_eq!(names(&chain.roots), vec!["A"]);
    let a = &chain.roots[0];
    assert_eq!(a.depth, 0);
    assert!(!a.selected);
    let b = &a.children[0];
    assert_eq!((b.name.as_str(), b.depth), ("B", 1));
    let c = &b.children[0];
    assert_eq!((c.name.as_str(), c.depth), ("C", 2));
    assert!(c.selected);
    assert!(c.children.is_empty());
    assert_eq!(chain.node_count(), 3);
}

#[test]
fn test_root_entity_is_its_own_chain() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A"]),
        make_entity("Lone", &[]),
    ]);
    let chain = build_chain(&graph, "A");

    assert_eq!(chain.roots.len(), 1);
    let root = &chain.roots[0];
    assert_eq!(root.name, "A");
    assert_eq!(root.depth, 0);
    assert!(root.selected);
    assert!(!root.synthetic_root);
    assert!(root.children.is_empty(), "B is not an ancestor of A");
}

#[test]
fn test_unrelated_branches_are_pruned() {
    // Sword and Bow both depend on Steel; only Sword leads to Knight.
    let graph = ModGraph::from_entities(vec![
        make_entity("Steel", &[]),
        make_entity("Sword", &["Steel"]),
        make_entity("Bow", &["Steel"]),
        make_entity("Knight", &["Sword"]),
    ]);
    let chain = build_chain(&graph, "Knight");
    assert_eq!(names(&chain.roots), vec!["Steel"]);
    assert_eq!(names(&chain.roots[0].children), vec!["Sword"]);
    assert_eq!(names(&chain.roots[0].children[0].children), vec!["Knight"]);
}

#[test]
fn test_multiple_roots_in_document_order() {
    let graph = ModGraph::from_entities(vec![
        make_entity("Fire", &[]),
        make_entity("Steel", &[]),
        make_entity("Flame Blade", &["Steel", "Fire"]),
    ]);
    let chain = build_chain(&graph, "Flame Blade");
    assert_eq!(names(&chain.roots), vec!["Fire", "Steel"]);
    for root in &chain.roots {
        assert_eq!(names(&root.children), vec!["Flame Blade"]);
    }
}

#[test]
fn test_diamond_renders_shared_node_per_path() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A"]),
        make_entity("C", &["A"]),
        make_entity("D", &["B", "C"]),
    ]);
    let chain = build_chain(&graph, "D");
    let a = &chain.roots[0];
    assert_eq!(names(&a.children), vec!["B", "C"]);
    assert_eq!(names(&a.children[0].children), vec!["D"]);
    assert_eq!(names(&a.children[1].children), vec!["D"]);
}

#[test]
fn test_pure_cycle_gets_synthetic_root() {
    let graph = ModGraph::from_entities(vec![make_entity("Cursed", &["Cursed"])]);
    let chain = build_chain(&graph, "Cursed");
    assert_eq!(chain.roots.len(), 1);
    let root = &chain.roots[0];
    assert_eq!(root.name, "Cursed");
    assert!(root.synthetic_root);
    assert!(root.selected);
    assert!(root.children.is_empty());
}

#[test]
fn test_self_loop_with_root_is_not_its_own_child() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("X", &["A", "X"]),
    ]);
    let chain = build_chain(&graph, "X");
    assert_eq!(names(&chain.roots), vec!["A"]);
    let x = &chain.roots[0].children[0];
    assert_eq!(x.name, "X");
    assert!(x.children.is_empty());
}

#[test]
fn test_cycle_among_ancestors_terminates() {
    // B and C depend on each other; B also depends on the root A.
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A", "C"]),
        make_entity("C", &["B"]),
    ]);
    let chain = build_chain(&graph, "C");
    let a = &chain.roots[0];
    assert_eq!(a.name, "A");
    let b = &a.children[0];
    assert_eq!(b.name, "B");
    let c = &b.children[0];
    assert_eq!(c.name, "C");
    assert!(c.selected);
    assert!(c.children.is_empty(), "B is already on the path");
}

#[test]
fn test_dangling_dependency_only_yields_synthetic_root() {
    let graph = ModGraph::from_entities(vec![make_entity("Sword", &["GhostBuff"])]);
    let chain = build_chain(&graph, "Sword");
    assert_eq!(chain.roots.len(), 1);
    assert!(chain.roots[0].synthetic_root);
}

#[test]
fn test_unknown_entity_has_empty_chain() {
    let graph = ModGraph::from_entities(vec![make_entity("A", &[])]);
    let chain = build_chain(&graph, "Nobody");
    assert_eq!(chain.selected, "Nobody");
    assert!(chain.roots.is_empty());
    assert_eq!(format_chain(&chain), "");
}

#[test]
fn test_build_chain_is_idempotent() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A", "B"]),
        make_entity("C", &["B"]),
    ]);
    assert_eq!(build_chain(&graph, "C"), build_chain(&graph, "C"));
}

#[test]
fn test_format_chain_output() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A"]),
        make_entity("C", &["B"]),
    ]);
    let output = format_chain(&build_chain(&graph, "C"));
    assert_eq!(output, "A\n└── B\n    └── *C*\n");

    let cursed = ModGraph::from_entities(vec![make_entity("Cursed", &["Cursed"])]);
    assert_eq!(format_chain(&build_chain(&cursed, "Cursed")), "*Cursed (root)*\n");
}

#[test]
fn test_deep_linear_chain() {
    let depth = 50_000;
    let entities = (0..depth)
        .map(|i| {
            let deps = if i == 0 {
                Vec::new()
            } else {
                vec![format!("n{}", i - 1)]
            };
            Entity {
                name: format!("n{}", i),
                depends_on: deps,
                ..Entity::default()
            }
        })
        .collect();
    let graph = ModGraph::from_entities(entities);
    let leaf = format!("n{}", depth - 1);

    let chain = build_chain(&graph, &leaf);
    assert_eq!(names(&chain.roots), vec!["n0"]);
    assert_eq!(chain.node_count(), depth);

    let nodes = chain.preorder();
    let last = nodes[nodes.len() - 1];
    assert_eq!(last.name, leaf);
    assert_eq!(last.depth, depth - 1);
    assert!(last.selected);
}

#[test]
fn test_format_deep_chain() {
    let depth = 2_000;
    let entities = (0..depth)
        .map(|i| Entity {
            name: format!("n{}", i),
            depends_on: if i == 0 {
                Vec::new()
            } else {
                vec![format!("n{}", i - 1)]
            },
            ..Entity::default()
        })
        .collect();
    let graph = ModGraph::from_entities(entities);
    let output = format_chain(&build_chain(&graph, "n1999"));
    assert_eq!(output.lines().count(), depth);
    assert!(output.ends_with("└── *n1999*\n"));
}

#[test]
fn test_format_chain_sibling_branches() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A"]),
        make_entity("C", &["A", "B"]),
    ]);
    let output = format_chain(&build_chain(&graph, "C"));
    assert_eq!(output, "A\n├── B\n│   └── *C*\n└── *C*\n");
}

#[test]
fn test_chain_json_is_preorder() {
    let graph = ModGraph::from_entities(vec![
        make_entity("A", &[]),
        make_entity("B", &["A"]),
        make_entity("C", &["B"]),
    ]);
    let value = serde_json::to_value(build_chain(&graph, "C")).unwrap();
    assert_eq!(value["selected"], "C");
    let nodes = value["nodes"].as_array().unwrap();
    let layout: Vec<(&str, u64)> = nodes
        .iter()
        .map(|n| (n["name"].as_str().unwrap(), n["depth"].as_u64().unwrap()))
        .collect();
    assert_eq!(layout, vec![("A", 0), ("B", 1), ("C", 2)]);
    assert_eq!(nodes[2]["selected"], true);
}
