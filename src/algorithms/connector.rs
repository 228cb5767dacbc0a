//! Connector detection (articulation points via iterative DFS)
//!
//! A connector is a person whose removal increases the number of connected
//! components of the network. Detection uses discovery-order numbering and
//! low-link values over a DFS forest; the traversal runs on an explicit
//! frame stack, so component depth is bounded by heap, not call stack.

use crate::storage::{PersonId, SocialGraph};

/// One suspended DFS visit: which node, where it came from, and how far
/// through its adjacency list it has advanced
struct Frame {
    node: usize,
    parent: Option<usize>,
    next_edge: usize,
}

/// Find every connector in the network
///
/// Works on disconnected graphs: each component gets its own DFS tree via
/// the outer loop over unvisited roots.
///
/// A non-root node is a connector when some DFS-tree child's subtree has no
/// back edge climbing above it (`low[child] >= discovery[node]`). A root is
/// a connector exactly when it has two or more DFS-tree children.
///
/// # Arguments
///
/// * `graph` - The friendship network
///
/// # Returns
///
/// Names of all connectors, each at most once, in member order; treat as an
/// unordered set. Empty graph → empty vector.
///
/// # Example
///
/// ```
/// use amity_graph::{connectors, SocialGraph};
///
/// // sam—jane—bob: only jane holds the chain together
/// let mut graph = SocialGraph::new();
/// graph.add_member("sam", None).unwrap();
/// graph.add_member("jane", None).unwrap();
/// graph.add_member("bob", None).unwrap();
/// graph.add_friendship("sam", "jane").unwrap();
/// graph.add_friendship("jane", "bob").unwrap();
///
/// assert_eq!(connectors(&graph), vec!["jane".to_string()]);
/// ```
#[must_use]
pub fn connectors(graph: &SocialGraph) -> Vec<String> {
    let n = graph.num_members();
    let mut visited = vec![false; n];
    let mut discovery = vec![0u32; n];
    let mut low = vec![0u32; n];
    let mut is_connector = vec![false; n];
    let mut clock = 0u32;

    for root in 0..n {
        if !visited[root] {
            explore_component(
                graph,
                root,
                &mut visited,
                &mut discovery,
                &mut low,
                &mut is_connector,
                &mut clock,
            );
        }
    }

    graph
        .members()
        .zip(is_connector)
        .filter(|&(_, cut)| cut)
        .map(|(person, _)| person.name().to_string())
        .collect()
}

/// DFS one component from `root`, marking connectors as subtrees finalize
fn explore_component(
    graph: &SocialGraph,
    root: usize,
    visited: &mut [bool],
    discovery: &mut [u32],
    low: &mut [u32],
    is_connector: &mut [bool],
    clock: &mut u32,
) {
    visited[root] = true;
    discovery[root] = *clock;
    low[root] = *clock;
    *clock += 1;

    let mut stack = vec![Frame {
        node: root,
        parent: None,
        next_edge: 0,
    }];
    let mut root_children = 0;

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let v = stack[top].node;
        let parent = stack[top].parent;

        #[allow(clippy::cast_possible_truncation)]
        let friends = graph.friends(PersonId(v as u32)).unwrap_or(&[]);

        if stack[top].next_edge < friends.len() {
            let w = friends[stack[top].next_edge] as usize;
            stack[top].next_edge += 1;

            if !visited[w] {
                visited[w] = true;
                discovery[w] = *clock;
                low[w] = *clock;
                *clock += 1;

                if v == root {
                    root_children += 1;
                }
                stack.push(Frame {
                    node: w,
                    parent: Some(v),
                    next_edge: 0,
                });
            } else if parent != Some(w) {
                // Back edge: v can climb to w's level
                low[v] = low[v].min(discovery[w]);
            }
        } else {
            // v's subtree is complete; fold its low-link into the parent
            stack.pop();
            if let Some(frame) = stack.last() {
                let p = frame.node;
                low[p] = low[p].min(low[v]);

                // No back edge out of v's subtree climbs above p
                if p != root && low[v] >= discovery[p] {
                    is_connector[p] = true;
                }
            }
        }
    }

    if root_children >= 2 {
        is_connector[root] = true;
    }
}
