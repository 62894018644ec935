//! Basic asynchronous example demonstrating multireplace usage.
//!
//! Run with: cargo run --example basic_async --features async

#[cfg(feature = "async")]
mod async_example {
    use multireplace::{Needle, ReplaceArgs, Replacement, replace_async};

    pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
        // Upper-case the first letter of every word
        let replacement = Replacement::with_fn(|caps| caps[0].to_uppercase());
        let args = ReplaceArgs::new(Needle::regex(r"\b\w", "g")?, replacement)
            .add_input("demos/data/notes/**/*.txt")
            .with_strategy("flatten")
            .with_output("target/demo-flat");

        // Reads overlap, results keep the glob order
        let written = replace_async(args).await?;

        println!("Wrote {} file(s):", written.len());
        for result in &written {
            println!("  - {}", result.path);
        }

        Ok(())
    }
}

#[cfg(feature = "async")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    async_example::run().await
}

#[cfg(not(feature = "async"))]
fn main() {
    eprintln!("This example requires the 'async' feature");
}
