use std::{fs, process::exit};

use clap::Parser;
use l10n_catalog::{
    CatalogError, LogVerbosity, cmd_args::StringsToJsonArgs, read_strings_file, setup_logger,
    strings_to_json,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn run(args: &StringsToJsonArgs) -> l10n_catalog::Result<()> {
    let map = read_strings_file(&args.input)?;
    let json = strings_to_json(&map)?;
    match &args.output {
        Some(output) => fs::write(output, json).map_err(|e| CatalogError::io(output, e)),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn main() {
    let args = StringsToJsonArgs::parse();
    setup_logger(LogVerbosity::from_flags(args.verbose, false));

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        exit(1);
    }
}
