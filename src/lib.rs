//! amity-graph: embedded social graph analysis
//!
//! # Overview
//!
//! amity-graph stores a friendship network (people, optional school
//! attributes, undirected friendships) and answers three structural
//! questions about it:
//!
//! - [`shortest_chain`]: the shortest acquaintance chain between two people
//! - [`cliques`]: groups of mutually reachable people at the same school
//! - [`connectors`]: people whose removal would disconnect part of the network
//!
//! # Quick Start
//!
//! ```
//! use amity_graph::{shortest_chain, SocialGraph};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = SocialGraph::new();
//! graph.add_member("sam", Some("rutgers"))?;
//! graph.add_member("jane", None)?;
//! graph.add_member("bob", Some("rutgers"))?;
//! graph.add_friendship("sam", "jane")?;
//! graph.add_friendship("jane", "bob")?;
//!
//! // Shortest chain walks through the mutual friend
//! let chain = shortest_chain(&graph, "sam", "bob")?;
//! assert_eq!(chain, Some(vec!["sam".into(), "jane".into(), "bob".into()]));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Graphs can also be loaded from roster files with
//! [`read_roster`]/[`parse_roster`]; see [`storage::roster`] for the format.
//!
//! # Architecture
//!
//! - **Storage**: member arena + name index, ordered symmetric adjacency
//! - **Input**: pipe-delimited roster text (async file loading via tokio)
//! - **Algorithms**: BFS chain search, school-filtered components, iterative
//!   articulation-point detection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod storage;

// Re-export core types
pub use algorithms::{cliques, connectors, shortest_chain};
pub use storage::{parse_roster, read_roster, GraphError, Person, PersonId, SocialGraph};

// Error type
pub use anyhow::{Error, Result};
