//! Basic synchronous example demonstrating multireplace usage.
//!
//! Run with: cargo run --example basic_sync

use multireplace::{Needle, ReplaceArgs, replace_sync};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Every line starting with one of a, d, j, o or x gets a marker
    let args = ReplaceArgs::new(Needle::regex("^[adjox]", "gm")?, "ą|")
        .add_input("demos/data/notes/**/*.txt")
        .with_join_string("\n----\n");

    // No output path, so the joined result is only returned
    let results = replace_sync(args)?;

    for result in &results {
        println!("{}", result.content);
    }

    Ok(())
}
