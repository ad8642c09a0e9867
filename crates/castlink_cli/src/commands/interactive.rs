//! Interactive command implementation.
//!
//! A prompt loop for repeated connection queries: ask for two people,
//! validating each against the index before searching, then print the
//! chain or a no-path message. An empty line (or end of input) quits.

use castlink_core::{find_connection, IndexStore};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Runs the interactive command.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = IndexStore::open_dir(data_dir)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(source) = prompt_for_person("Actor or actress", &store, &mut input)? else {
            break;
        };
        let Some(dest) = prompt_for_person("Another actor or actress", &store, &mut input)? else {
            break;
        };

        if source == dest {
            println!("Good one.  This is only interesting if you specify two different people.");
            continue;
        }

        match find_connection(&store, &source, &dest)? {
            Some(chain) => println!("{chain}"),
            None => println!("No path between those two people could be found."),
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Prompts until the user supplies a name the index knows, or an empty
/// line / end of input, which yields `None`.
fn prompt_for_person(
    prompt: &str,
    store: &IndexStore,
    input: &mut impl BufRead,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    loop {
        print!("{prompt} [or <enter> to quit]: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let name = line.trim_end_matches(['\n', '\r']).to_owned();
        if name.is_empty() {
            return Ok(None);
        }
        if store.has_credits(&name)? {
            return Ok(Some(name));
        }
        println!("We couldn't find \"{name}\" in the movie database. Please try again.");
    }
}
