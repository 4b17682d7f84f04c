mod cli;
mod core;
mod matching;
mod preprocess;

use colored::Colorize;
use structopt::StructOpt;

use crate::cli::Cli;
use crate::matching::execute_reconcile;

///
/// Main loop
///

fn main() -> anyhow::Result<()> {
    let cli = Cli::from_args();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let num_missing = execute_reconcile(
        &cli.io_args,
        &cli.preprocessing_options,
        &cli.match_options,
    )?;

    println!(
        "{} {} missing entries written to {}",
        "done:".green(),
        num_missing,
        cli.io_args.output_file
    );

    Ok(())
}
