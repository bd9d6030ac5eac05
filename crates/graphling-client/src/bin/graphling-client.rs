//! graphling HTTP client binary

use clap::{Parser, Subcommand};
use graphling::PropertyMap;
use graphling_client::RestGraphDatabase;
use log::warn;

#[derive(Parser)]
#[command(name = "graphling-client")]
#[command(about = "graphling Client")]
#[command(version)]
struct Cli {
    #[arg(long, default_value = "localhost")]
    host: String,
    #[arg(short, long, default_value_t = 7470)]
    port: u16,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health,
    /// Show node and relationship counts
    Stats,
    /// Create a node with KEY=VALUE properties
    CreateNode {
        #[arg(short = 'P', long = "property")]
        properties: Vec<String>,
    },
    /// Fetch a node by id
    GetNode { id: u64 },
    /// Create a relationship between two nodes
    CreateRel {
        from: u64,
        to: u64,
        #[arg(short, long, default_value = "RELATED_TO")]
        rel_type: String,
    },
    /// Wipe all nodes and relationships
    Clean,
}

/// Parse KEY=VALUE pairs into a property map, skipping malformed entries.
fn parse_properties(pairs: Vec<String>) -> PropertyMap {
    pairs
        .iter()
        .filter_map(|pair| {
            let mut split = pair.splitn(2, '=');
            match (split.next(), split.next()) {
                (Some(key), Some(value)) => Some((
                    key.to_string(),
                    serde_json::Value::String(value.to_string()),
                )),
                _ => {
                    warn!("Invalid property format '{pair}', expected KEY=VALUE");
                    None
                }
            }
        })
        .collect()
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let data_url = format!("http://{}:{}/db/data/", cli.host, cli.port);
    let db = RestGraphDatabase::connect(data_url);

    match cli.command {
        Commands::Health => match db.health().await {
            Ok(health) => {
                println!("Server Status: {}", health.status);
                println!("Service: {}", health.service);
                println!("Timestamp: {}", health.timestamp);
            }
            Err(e) => println!("Failed to check server health: {e}"),
        },
        Commands::Stats => match db.stats().await {
            Ok(stats) => {
                println!("Nodes: {}", stats.node_count);
                println!("Relationships: {}", stats.relationship_count);
            }
            Err(e) => println!("Failed to fetch graph stats: {e}"),
        },
        Commands::CreateNode { properties } => {
            match db.create_node(parse_properties(properties)).await {
                Ok(node) => println!("Created node {} at {}", node.id, node.self_uri),
                Err(e) => println!("Failed to create node: {e}"),
            }
        }
        Commands::GetNode { id } => match db.node(id).await {
            Ok(node) => {
                println!("Node {}", node.id);
                for (key, value) in &node.properties {
                    println!("  {key}: {value}");
                }
            }
            Err(e) => println!("Failed to fetch node {id}: {e}"),
        },
        Commands::CreateRel { from, to, rel_type } => {
            match db
                .create_relationship(from, to, &rel_type, PropertyMap::new())
                .await
            {
                Ok(rel) => println!(
                    "Created relationship {} ({} -[{}]-> {})",
                    rel.id, rel.start, rel.rel_type, rel.end
                ),
                Err(e) => println!("Failed to create relationship: {e}"),
            }
        }
        Commands::Clean => match db.clean().await {
            Ok(clean) => println!(
                "Removed {} nodes and {} relationships",
                clean.nodes_removed, clean.relationships_removed
            ),
            Err(e) => println!("Failed to clean database: {e}"),
        },
    }
}
