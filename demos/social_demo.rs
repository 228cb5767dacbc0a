//! Simple example demonstrating amity-graph usage
//!
//! Run with: cargo run --example social_demo

use amity_graph::{cliques, connectors, read_roster, shortest_chain};

const ROSTER: &str = "\
7
sam|y|rutgers
jane|y|rutgers
bob|y|rutgers
sergei|y|cornell
kaitlin|y|cornell
aparna|n
max|y|rutgers
sam|jane
jane|bob
bob|sergei
sergei|kaitlin
kaitlin|aparna
jane|max
max|bob
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🦀 amity-graph Example\n");

    // 1. Load a roster from disk
    println!("📂 Loading roster...");
    let path = std::env::temp_dir().join("amity_demo_roster.txt");
    std::fs::write(&path, ROSTER)?;

    let graph = read_roster(&path).await?;
    println!(
        "  ✅ Network loaded: {} members, {} friendships\n",
        graph.num_members(),
        graph.num_friendships()
    );

    // 2. Shortest acquaintance chain
    println!("🔍 Shortest chain from sam to aparna...");
    match shortest_chain(&graph, "sam", "aparna")? {
        Some(chain) => println!("  {}", chain.join(" → ")),
        None => println!("  no chain exists"),
    }

    // 3. School cliques
    for school in ["rutgers", "cornell"] {
        println!("\n🏫 Cliques at {school}...");
        let groups = cliques(&graph, school);
        if groups.is_empty() {
            println!("  nobody here");
        }
        for (i, group) in groups.iter().enumerate() {
            println!("  group {}: {}", i + 1, group.join(", "));
        }
    }

    // 4. Connectors
    println!("\n🌉 Connectors holding the network together...");
    let cuts = connectors(&graph);
    if cuts.is_empty() {
        println!("  none - removing anyone leaves everyone else connected");
    } else {
        println!("  {}", cuts.join(", "));
    }

    std::fs::remove_file(&path).ok();
    Ok(())
}
