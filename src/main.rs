use clap::Parser;
use zhopkit::{init_logging, run, Args};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = Args::parse();
    let stats = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
