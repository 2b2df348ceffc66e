use std::process::exit;

use clap::Parser;
use l10n_catalog::{
    LogVerbosity, cmd_args::JsonToYamlArgs, convert_json_to_yaml, default_yaml_output,
    setup_logger,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let args = JsonToYamlArgs::parse();
    setup_logger(LogVerbosity::from_flags(args.verbose, false));

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_yaml_output(&args.input));

    match convert_json_to_yaml(&args.input, &output) {
        Ok(()) => println!(
            "Successfully converted {} to {}",
            args.input.display(),
            output.display()
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}
