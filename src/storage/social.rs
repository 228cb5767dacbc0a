//! Social graph representation (member arena + name index)
//!
//! People are stored in a flat arena indexed `0..n`, with a name index for
//! O(1) lookup and per-person ordered adjacency lists.
//!
//! # Layout
//!
//! ```text
//! Network: sam—jane, jane—bob
//!
//! members: [ Person { name: "sam",  friends: [1]    },
//!            Person { name: "jane", friends: [0, 2] },
//!            Person { name: "bob",  friends: [1]    } ]
//! index:   { "sam" → 0, "jane" → 1, "bob" → 2 }
//! ```
//!
//! Friendships are undirected: inserting one adds the edge to both adjacency
//! lists, so `a ∈ friends(b)` always implies `b ∈ friends(a)`.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use thiserror::Error;

/// Person identifier (zero-indexed position in the member arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub u32);

/// Errors raised while building a [`SocialGraph`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A member with this name is already in the graph
    #[error("duplicate member: {0}")]
    DuplicateMember(String),

    /// A name that no member of the graph carries
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    /// Friendships connect two distinct people
    #[error("self-friendship rejected for {0}")]
    SelfFriendship(String),
}

/// A member of the network
///
/// Identity is the unique name; the school attribute is optional. Adjacency
/// entries are arena indices in insertion order.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    school: Option<String>,
    friends: Vec<u32>,
}

impl Person {
    /// The person's unique name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's school, if they have one
    #[must_use]
    pub fn school(&self) -> Option<&str> {
        self.school.as_deref()
    }

    /// Arena indices of this person's friends, in insertion order
    #[must_use]
    pub fn friends(&self) -> &[u32] {
        &self.friends
    }
}

/// Undirected friendship network
///
/// Built once, then treated as read-only by every analysis: all algorithm
/// entry points take `&SocialGraph` and allocate their own scratch state, so
/// concurrent queries against a shared graph are safe.
///
/// # Example
///
/// ```
/// use amity_graph::SocialGraph;
///
/// let mut graph = SocialGraph::new();
/// graph.add_member("sam", Some("rutgers")).unwrap();
/// graph.add_member("jane", None).unwrap();
/// graph.add_friendship("sam", "jane").unwrap();
///
/// assert_eq!(graph.num_members(), 2);
/// assert_eq!(graph.num_friendships(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// Member arena; `PersonId` values index into this
    members: Vec<Person>,

    /// Name → arena index (bijection onto `0..members.len()`)
    index: HashMap<String, u32>,
}

impl SocialGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member with an optional school attribute
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateMember`] if the name is already taken.
    pub fn add_member(&mut self, name: &str, school: Option<&str>) -> Result<PersonId, GraphError> {
        if self.index.contains_key(name) {
            return Err(GraphError::DuplicateMember(name.to_string()));
        }

        #[allow(clippy::cast_possible_truncation)] // Networks >4B members not supported
        let id = self.members.len() as u32;
        self.members.push(Person {
            name: name.to_string(),
            school: school.map(str::to_string),
            friends: Vec::new(),
        });
        self.index.insert(name.to_string(), id);

        Ok(PersonId(id))
    }

    /// Add an undirected friendship between two members, by name
    ///
    /// The edge is inserted into both adjacency lists. Re-adding an existing
    /// friendship is a no-op, keeping adjacency lists duplicate-free.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownPerson`] if either name is not in the
    /// graph, or [`GraphError::SelfFriendship`] if the names are equal.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let a_id = self
            .lookup(a)
            .ok_or_else(|| GraphError::UnknownPerson(a.to_string()))?;
        let b_id = self
            .lookup(b)
            .ok_or_else(|| GraphError::UnknownPerson(b.to_string()))?;

        if a_id == b_id {
            return Err(GraphError::SelfFriendship(a.to_string()));
        }

        if !self.members[a_id.0 as usize].friends.contains(&b_id.0) {
            self.members[a_id.0 as usize].friends.push(b_id.0);
            self.members[b_id.0 as usize].friends.push(a_id.0);
        }

        Ok(())
    }

    /// Look up a member's id by name
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<PersonId> {
        self.index.get(name).copied().map(PersonId)
    }

    /// Get a member by id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is out of bounds.
    pub fn member(&self, person: PersonId) -> Result<&Person> {
        self.members
            .get(person.0 as usize)
            .ok_or_else(|| anyhow!("Person ID {} out of bounds", person.0))
    }

    /// Get a member's adjacency slice (friend indices in insertion order)
    ///
    /// # Errors
    ///
    /// Returns an error if the id is out of bounds.
    pub fn friends(&self, person: PersonId) -> Result<&[u32]> {
        Ok(self.member(person)?.friends())
    }

    /// Iterate over all members in arena order
    pub fn members(&self) -> impl Iterator<Item = &Person> {
        self.members.iter()
    }

    /// Number of members
    #[must_use]
    pub fn num_members(&self) -> usize {
        self.members.len()
    }

    /// Number of (undirected) friendships
    #[must_use]
    pub fn num_friendships(&self) -> usize {
        self.members.iter().map(|p| p.friends.len()).sum::<usize>() / 2
    }

    /// Whether the graph has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
