//! School cliques: connected groups under same-school adjacency
//!
//! A clique here is a maximal connected component of the subgraph induced by
//! everyone at one school, not a complete subgraph.

use crate::storage::{PersonId, SocialGraph};
use std::collections::VecDeque;

/// Partition everyone at `school` into connected friend groups
///
/// Each group is a maximal set of people at the school who are mutually
/// reachable through friendships that stay inside the school. People at a
/// different school, or with no school attribute at all, are excluded
/// entirely (they cannot appear in a group, nor connect two groups).
///
/// # Arguments
///
/// * `graph` - The friendship network
/// * `school` - School name to filter on
///
/// # Returns
///
/// One `Vec<String>` of names per group. Groups appear in the order their
/// first member appears in the graph and names within a group in discovery
/// order; treat both as unordered. No one at the school → empty vector.
///
/// # Example
///
/// ```
/// use amity_graph::{cliques, SocialGraph};
///
/// let mut graph = SocialGraph::new();
/// graph.add_member("sam", Some("rutgers")).unwrap();
/// graph.add_member("jane", Some("rutgers")).unwrap();
/// graph.add_member("sergei", Some("cornell")).unwrap();
/// graph.add_friendship("sam", "jane").unwrap();
/// graph.add_friendship("jane", "sergei").unwrap();
///
/// let groups = cliques(&graph, "rutgers");
/// assert_eq!(groups, vec![vec!["sam".to_string(), "jane".to_string()]]);
/// assert!(cliques(&graph, "mit").is_empty());
/// ```
#[must_use]
pub fn cliques(graph: &SocialGraph, school: &str) -> Vec<Vec<String>> {
    let n = graph.num_members();
    let mut visited = vec![false; n];
    let mut groups = Vec::new();

    // One shared visited array across seeds keeps the groups a partition
    for seed in 0..n {
        if visited[seed] || !attends(graph, seed, school) {
            continue;
        }
        groups.push(collect_group(graph, seed, school, &mut visited));
    }

    groups
}

/// BFS from `seed` restricted to same-school neighbors
fn collect_group(
    graph: &SocialGraph,
    seed: usize,
    school: &str,
    visited: &mut [bool],
) -> Vec<String> {
    let mut group = Vec::new();
    let mut frontier = VecDeque::new();

    visited[seed] = true;
    frontier.push_back(seed);

    while let Some(current) = frontier.pop_front() {
        #[allow(clippy::cast_possible_truncation)]
        let id = PersonId(current as u32);

        if let Ok(person) = graph.member(id) {
            group.push(person.name().to_string());
        }

        if let Ok(friends) = graph.friends(id) {
            for &next in friends {
                let next_idx = next as usize;
                if !visited[next_idx] && attends(graph, next_idx, school) {
                    visited[next_idx] = true;
                    frontier.push_back(next_idx);
                }
            }
        }
    }

    group
}

/// Whether the member at `idx` has exactly this school attribute
fn attends(graph: &SocialGraph, idx: usize, school: &str) -> bool {
    #[allow(clippy::cast_possible_truncation)]
    let member = graph.member(PersonId(idx as u32));
    member.map_or(false, |person| person.school() == Some(school))
}
