//! snipvault - command-line front end
//!
//! Every invocation loads the library and filter state from the data
//! directory, applies one command, and writes the result back.

use color_eyre::Result;

mod cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::execute_cli(&args).map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    Ok(())
}
