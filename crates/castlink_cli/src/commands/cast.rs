//! Cast command implementation.

use castlink_codec::Film;
use castlink_core::IndexStore;
use std::path::Path;

/// Runs the cast command.
pub fn run(
    data_dir: &Path,
    title: &str,
    year: u16,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = IndexStore::open_dir(data_dir)?;
    let film = Film::new(title, year);

    match store.cast_of(&film)? {
        Some(cast) => {
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&cast)?);
            } else {
                println!("{film} has {} cast member(s):", cast.len());
                for name in cast {
                    println!("  {name}");
                }
            }
            Ok(())
        }
        None => {
            println!("We couldn't find \"{film}\" in the movie database.");
            Err("unknown film".into())
        }
    }
}
