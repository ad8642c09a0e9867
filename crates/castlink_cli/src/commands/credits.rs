//! Credits command implementation.

use castlink_core::IndexStore;
use std::path::Path;

/// Runs the credits command.
pub fn run(data_dir: &Path, name: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = IndexStore::open_dir(data_dir)?;

    match store.credits_of(name)? {
        Some(films) => {
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&films)?);
            } else {
                println!("{name} appears in {} film(s):", films.len());
                for film in films {
                    println!("  {film}");
                }
            }
            Ok(())
        }
        None => {
            println!("We couldn't find \"{name}\" in the movie database.");
            Err("unknown person".into())
        }
    }
}
