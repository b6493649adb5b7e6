use std::env;

use anyhow::Result;
use tracing::info;

use otello_cli::{USAGE, parse_args, run_match};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(settings) = parse_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    info!("otello starting");
    run_match(&settings)?;
    Ok(())
}
