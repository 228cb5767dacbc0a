//! Integration tests for amity-graph
//!
//! Exercises real analysis scenarios end to end (chains, cliques,
//! connectors, roster loading).

use amity_graph::{cliques, connectors, parse_roster, read_roster, shortest_chain, SocialGraph};

fn network(members: &[(&str, Option<&str>)], friendships: &[(&str, &str)]) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for (name, school) in members {
        graph.add_member(name, *school).unwrap();
    }
    for (a, b) in friendships {
        graph.add_friendship(a, b).unwrap();
    }
    graph
}

#[test]
fn test_path_network() {
    // a—b—c—d: one chain, two cut vertices
    let graph = network(
        &[("a", None), ("b", None), ("c", None), ("d", None)],
        &[("a", "b"), ("b", "c"), ("c", "d")],
    );

    let chain = shortest_chain(&graph, "a", "d").unwrap();
    assert_eq!(
        chain,
        Some(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string()
        ])
    );

    let mut cuts = connectors(&graph);
    cuts.sort();
    assert_eq!(cuts, vec!["b".to_string(), "c".to_string()]);
}

#[test]
fn test_bridged_triangles_network() {
    // Two triangles a-b-c and d-e-f joined by c—d, all at school "x"
    let graph = network(
        &[
            ("a", Some("x")),
            ("b", Some("x")),
            ("c", Some("x")),
            ("d", Some("x")),
            ("e", Some("x")),
            ("f", Some("x")),
        ],
        &[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("d", "e"),
            ("e", "f"),
            ("f", "d"),
            ("c", "d"),
        ],
    );

    // One clique spanning the bridge
    let groups = cliques(&graph, "x");
    assert_eq!(groups.len(), 1);
    let mut names = groups[0].clone();
    names.sort();
    assert_eq!(names, vec!["a", "b", "c", "d", "e", "f"]);

    // Both bridge endpoints are connectors
    let mut cuts = connectors(&graph);
    cuts.sort();
    assert_eq!(cuts, vec!["c".to_string(), "d".to_string()]);
}

#[test]
fn test_disjoint_triangles_network() {
    let graph = network(
        &[
            ("a", Some("x")),
            ("b", Some("x")),
            ("c", Some("x")),
            ("d", Some("x")),
            ("e", Some("x")),
            ("f", Some("x")),
        ],
        &[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("d", "e"),
            ("e", "f"),
            ("f", "d"),
        ],
    );

    // Two separate cliques of three
    let groups = cliques(&graph, "x");
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|group| group.len() == 3));

    // No chain across the components
    assert_eq!(shortest_chain(&graph, "a", "f").unwrap(), None);

    // Triangles have no cut vertices
    assert!(connectors(&graph).is_empty());
}

#[test]
fn test_analyses_are_idempotent() {
    let graph = network(
        &[
            ("a", Some("x")),
            ("b", Some("x")),
            ("c", None),
            ("d", Some("x")),
        ],
        &[("a", "b"), ("b", "c"), ("c", "d")],
    );

    assert_eq!(
        shortest_chain(&graph, "a", "d").unwrap(),
        shortest_chain(&graph, "a", "d").unwrap()
    );
    assert_eq!(cliques(&graph, "x"), cliques(&graph, "x"));
    assert_eq!(connectors(&graph), connectors(&graph));
}

#[test]
fn test_empty_graph_analyses() {
    let graph = SocialGraph::new();

    assert!(cliques(&graph, "anywhere").is_empty());
    assert!(connectors(&graph).is_empty());
    // No members means any name fails lookup
    assert!(shortest_chain(&graph, "a", "b").is_err());
}

#[test]
fn test_roster_then_analyses() {
    let graph = parse_roster(
        "6\n\
         sam|y|rutgers\n\
         jane|y|rutgers\n\
         bob|y|rutgers\n\
         sergei|y|cornell\n\
         kaitlin|y|cornell\n\
         max|n\n\
         sam|jane\n\
         jane|bob\n\
         bob|sergei\n\
         sergei|kaitlin\n\
         kaitlin|max\n",
    )
    .unwrap();

    let chain = shortest_chain(&graph, "sam", "max").unwrap().unwrap();
    assert_eq!(chain.len(), 6);
    assert_eq!(chain.first().map(String::as_str), Some("sam"));
    assert_eq!(chain.last().map(String::as_str), Some("max"));

    let rutgers = cliques(&graph, "rutgers");
    assert_eq!(rutgers.len(), 1);
    assert_eq!(rutgers[0].len(), 3);

    // A path graph cuts at every interior member
    let cuts = connectors(&graph);
    assert_eq!(cuts.len(), 4);
    assert!(!cuts.contains(&"sam".to_string()));
    assert!(!cuts.contains(&"max".to_string()));
}

#[tokio::test]
async fn test_read_roster_from_disk() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("friends.txt");

    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "3\nsam|y|rutgers\njane|n\nbob|y|rutgers\nsam|jane\njane|bob\n"
    )
    .unwrap();
    drop(file);

    let graph = read_roster(&path).await.unwrap();
    assert_eq!(graph.num_members(), 3);
    assert_eq!(graph.num_friendships(), 2);

    let chain = shortest_chain(&graph, "sam", "bob").unwrap();
    assert_eq!(chain.map(|c| c.len()), Some(3));
}

#[tokio::test]
async fn test_read_roster_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_roster(dir.path().join("nope.txt")).await;
    assert!(result.is_err());
}
