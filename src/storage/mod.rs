//! Graph storage layer
//!
//! Provides the social graph representation (member arena + name index) and
//! the roster text format loader.

pub mod roster;
pub mod social;

pub use roster::{parse_roster, read_roster};
pub use social::{GraphError, Person, PersonId, SocialGraph};
