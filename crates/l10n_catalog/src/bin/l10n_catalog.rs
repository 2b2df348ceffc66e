use std::process::exit;

use clap::Parser;
use l10n_catalog::{cmd_args::BuildArgs, run_build, setup_logger};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let args = BuildArgs::parse();
    setup_logger(args.verbosity());

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            exit(2);
        }
    };

    match run_build(&config) {
        Ok(report) => {
            println!(
                "Wrote {} with {} entries across {} locales.",
                report.output.display(),
                report.entry_count,
                report.locale_count
            );
            println!(
                "Source locale '{}' had {} input files.",
                config.source_locale, report.source_file_count
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}
