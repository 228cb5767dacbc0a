//! Graph analyses (acquaintance chains, school cliques, connectors)
//!
//! Each analysis is a pure function over a read-only [`crate::SocialGraph`]
//! with per-call scratch state; none of them mutate or share anything.

pub mod chain;
pub mod clique;
pub mod connector;

pub use chain::shortest_chain;
pub use clique::cliques;
pub use connector::connectors;
