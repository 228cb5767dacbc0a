//! Roster text format for loading friendship networks
//!
//! # Format
//!
//! Pipe-delimited text, three sections:
//!
//! ```text
//! 4                   // member count
//! sam|y|rutgers       // member with a school
//! jane|n              // member without one
//! bob|y|rutgers
//! sergei|y|cornell
//! sam|jane            // friendship pairs until end of input
//! sam|bob
//! jane|sergei
//! ```
//!
//! Blank lines and surrounding whitespace are tolerated. There is no writer:
//! rosters are input data, the graph is never persisted back.

use super::SocialGraph;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Parse a roster from text
///
/// # Errors
///
/// Returns an error if the count header is missing or non-numeric, the
/// member section is truncated or malformed (bad `y`/`n` flag, missing
/// school field), or a friendship line names an unknown person, repeats a
/// member name, or pairs a person with themselves.
///
/// # Example
///
/// ```
/// use amity_graph::parse_roster;
///
/// let graph = parse_roster("2\nsam|y|rutgers\njane|n\nsam|jane\n").unwrap();
/// assert_eq!(graph.num_members(), 2);
/// assert_eq!(graph.num_friendships(), 1);
/// ```
pub fn parse_roster(text: &str) -> Result<SocialGraph> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines.next().context("empty roster")?;
    let count: usize = header
        .parse()
        .with_context(|| format!("roster header must be a member count, got {header:?}"))?;

    let mut graph = SocialGraph::new();

    for ordinal in 0..count {
        let line = lines
            .next()
            .with_context(|| format!("roster ended after {ordinal} of {count} members"))?;
        let (name, school) = parse_member(line)?;
        graph
            .add_member(name, school)
            .with_context(|| format!("invalid member line {line:?}"))?;
    }

    for line in lines {
        let (a, b) = line
            .split_once('|')
            .with_context(|| format!("friendship line must be name|name, got {line:?}"))?;
        graph
            .add_friendship(a.trim(), b.trim())
            .with_context(|| format!("invalid friendship line {line:?}"))?;
    }

    Ok(graph)
}

/// Decode one member line into (name, optional school)
fn parse_member(line: &str) -> Result<(&str, Option<&str>)> {
    let mut fields = line.split('|').map(str::trim);

    let name = fields
        .next()
        .filter(|name| !name.is_empty())
        .with_context(|| format!("member line missing name: {line:?}"))?;
    let flag = fields
        .next()
        .with_context(|| format!("member line missing y/n flag: {line:?}"))?;

    let school = match flag {
        "y" => Some(
            fields
                .next()
                .filter(|school| !school.is_empty())
                .with_context(|| format!("member line flagged y but missing school: {line:?}"))?,
        ),
        "n" => None,
        other => bail!("member flag must be y or n, got {other:?} in {line:?}"),
    };

    Ok((name, school))
}

/// Read a roster file from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or the text fails
/// [`parse_roster`].
pub async fn read_roster<P: AsRef<Path>>(path: P) -> Result<SocialGraph> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read roster {}", path.display()))?;

    parse_roster(&text).with_context(|| format!("invalid roster {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
4
sam|y|rutgers
jane|n
bob|y|rutgers
sergei|y|cornell
sam|jane
sam|bob
jane|sergei
";

    #[test]
    fn test_parse_sample_roster() {
        let graph = parse_roster(SAMPLE).unwrap();

        assert_eq!(graph.num_members(), 4);
        assert_eq!(graph.num_friendships(), 3);

        let sam = graph.lookup("sam").unwrap();
        assert_eq!(graph.member(sam).unwrap().school(), Some("rutgers"));
        let jane = graph.lookup("jane").unwrap();
        assert_eq!(graph.member(jane).unwrap().school(), None);
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_whitespace() {
        let text = "\n 2 \n\n sam | y | rutgers \njane|n\n\n sam | jane \n\n";
        let graph = parse_roster(text).unwrap();

        assert_eq!(graph.num_members(), 2);
        assert_eq!(graph.num_friendships(), 1);
        assert!(graph.lookup("sam").is_some());
    }

    #[test]
    fn test_parse_no_friendships_section() {
        let graph = parse_roster("1\nsam|n\n").unwrap();
        assert_eq!(graph.num_members(), 1);
        assert_eq!(graph.num_friendships(), 0);
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(parse_roster("").is_err());
        assert!(parse_roster("   \n  \n").is_err());
    }

    #[test]
    fn test_bad_header_rejected() {
        let err = parse_roster("three\nsam|n\n").unwrap_err();
        assert!(err.to_string().contains("member count"));
    }

    #[test]
    fn test_truncated_member_section_rejected() {
        let err = parse_roster("3\nsam|n\njane|n\n").unwrap_err();
        assert!(err.to_string().contains("roster ended"));
    }

    #[test]
    fn test_bad_member_flag_rejected() {
        assert!(parse_roster("1\nsam|maybe|rutgers\n").is_err());
    }

    #[test]
    fn test_missing_school_rejected() {
        assert!(parse_roster("1\nsam|y\n").is_err());
        assert!(parse_roster("1\nsam|y|\n").is_err());
    }

    #[test]
    fn test_unknown_person_in_friendship_rejected() {
        let err = parse_roster("1\nsam|n\nsam|ghost\n").unwrap_err();
        assert!(err.to_string().contains("invalid friendship"));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        assert!(parse_roster("2\nsam|n\nsam|y|rutgers\n").is_err());
    }
}
