//! Run a replace described by a YAML job file.
//!
//! Run with: cargo run --example from_job_config --features yaml

use std::path::Path;

use multireplace::{JobConfig, ReplaceBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let job = JobConfig::load(Path::new("demos/data/job.yaml"))?;
    let engine = ReplaceBuilder::new(job.into_args()?).build()?;

    println!(
        "strategy: {}, output: {:?}",
        engine.plan().strategy(),
        engine.plan().output()
    );

    for result in engine.run()? {
        println!("wrote {}", result.path);
    }

    Ok(())
}
