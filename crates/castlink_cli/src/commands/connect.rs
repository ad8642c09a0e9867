//! Connect command implementation.

use castlink_core::{find_connection_bounded, IndexStore};
use std::path::Path;
use tracing::info;

/// Runs the connect command.
///
/// Exits with an error (and so a nonzero status) when either name is
/// unknown or no chain exists, so scripts can branch on the outcome.
pub fn run(
    data_dir: &Path,
    source: &str,
    dest: &str,
    max_degree: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = IndexStore::open_dir(data_dir)?;

    for name in [source, dest] {
        if !store.has_credits(name)? {
            println!("We couldn't find \"{name}\" in the movie database.");
            return Err("unknown person".into());
        }
    }

    info!(source, dest, max_degree, "searching for connection");
    match find_connection_bounded(&store, source, dest, max_degree)? {
        Some(chain) => {
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&chain)?);
            } else {
                println!("{chain}");
            }
            Ok(())
        }
        None => {
            println!("No path between those two people could be found.");
            Err("no connection found".into())
        }
    }
}
