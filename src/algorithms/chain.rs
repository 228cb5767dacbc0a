//! Shortest acquaintance chain (unweighted BFS with predecessor tracking)

use crate::storage::{GraphError, PersonId, SocialGraph};
use anyhow::Result;
use std::collections::VecDeque;

/// Find the shortest chain of people connecting `from` to `to`
///
/// The chain starts with `from`, ends with `to`, and every consecutive pair
/// is a direct friendship. BFS level order guarantees the minimum number of
/// hops; ties between equal-length chains go to whichever neighbor was
/// befriended first.
///
/// # Arguments
///
/// * `graph` - The friendship network
/// * `from` - Name of the person the chain originates with
/// * `to` - Name of the person the chain terminates at
///
/// # Returns
///
/// * `Ok(Some(names))` - shortest chain, in order from `from` to `to`
/// * `Ok(None)` - the two people are in different components
/// * `Ok(Some([from]))` when `from == to` (a trivial one-person chain)
///
/// # Errors
///
/// Returns [`GraphError::UnknownPerson`] if either name is not in the graph.
/// A typo and a disconnected pair should not look alike, so unknown names
/// fail fast instead of reporting "no chain".
///
/// # Example
///
/// ```
/// use amity_graph::{shortest_chain, SocialGraph};
///
/// let mut graph = SocialGraph::new();
/// graph.add_member("sam", None).unwrap();
/// graph.add_member("jane", None).unwrap();
/// graph.add_member("bob", None).unwrap();
/// graph.add_friendship("sam", "jane").unwrap();
/// graph.add_friendship("jane", "bob").unwrap();
///
/// let chain = shortest_chain(&graph, "sam", "bob").unwrap();
/// assert_eq!(chain, Some(vec!["sam".into(), "jane".into(), "bob".into()]));
/// ```
pub fn shortest_chain(graph: &SocialGraph, from: &str, to: &str) -> Result<Option<Vec<String>>> {
    let start = graph
        .lookup(from)
        .ok_or_else(|| GraphError::UnknownPerson(from.to_string()))?;
    let goal = graph
        .lookup(to)
        .ok_or_else(|| GraphError::UnknownPerson(to.to_string()))?;

    if start == goal {
        return Ok(Some(vec![graph.member(start)?.name().to_string()]));
    }

    let n = graph.num_members();
    let mut predecessor: Vec<Option<u32>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = VecDeque::new();

    visited[start.0 as usize] = true;
    frontier.push_back(start.0);

    while let Some(current) = frontier.pop_front() {
        for &next in graph.friends(PersonId(current))? {
            if visited[next as usize] {
                continue;
            }
            visited[next as usize] = true;
            predecessor[next as usize] = Some(current);

            // First discovery of the goal is on a shortest level
            if next == goal.0 {
                return Ok(Some(walk_back(graph, &predecessor, start, goal)?));
            }
            frontier.push_back(next);
        }
    }

    Ok(None)
}

/// Reconstruct the chain by walking predecessors from goal back to start
fn walk_back(
    graph: &SocialGraph,
    predecessor: &[Option<u32>],
    start: PersonId,
    goal: PersonId,
) -> Result<Vec<String>> {
    let mut chain = Vec::new();
    let mut current = goal.0;

    loop {
        chain.push(graph.member(PersonId(current))?.name().to_string());
        if current == start.0 {
            break;
        }
        match predecessor[current as usize] {
            Some(previous) => current = previous,
            None => break, // unreachable once the goal has a predecessor chain
        }
    }

    chain.reverse();
    Ok(chain)
}
