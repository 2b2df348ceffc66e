use std::{path::Path, process::exit};

use clap::Parser;
use l10n_catalog::{
    CompletenessReport, LocaleMap, LogVerbosity, check_completeness, cmd_args::CheckArgs,
    loader::load_locale_file, setup_logger,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn load_or_exit(path: &Path, role: &str) -> LocaleMap {
    println!("Loading {} file: {}", role, path.display());
    match load_locale_file(path) {
        Ok(map) if !map.is_empty() => map,
        Ok(_) => {
            eprintln!("Error: {} localization file is empty.", role);
            exit(2);
        }
        Err(e) => {
            eprintln!("Error: {} localization file could not be loaded: {e}", role);
            exit(2);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_report(report: &CompletenessReport, compare: &Path) {
    let name = file_name(compare);
    println!();
    println!("=== LOCALIZATION COMPLETENESS CHECK ===");
    println!("Comparing with base: {}", compare.display());
    println!();

    if report.missing.is_empty() {
        println!("NO MISSING KEYS found in {name}");
    } else {
        println!("MISSING KEYS IN {name}:");
        for key in &report.missing {
            println!("  - {key}");
        }
        println!("\nTotal missing keys: {}", report.missing.len());
    }
    println!();

    if report.extraneous.is_empty() {
        println!("NO EXTRANEOUS KEYS found in {name}");
    } else {
        println!("EXTRANEOUS KEYS IN {name}:");
        for key in &report.extraneous {
            println!("  - {key}");
        }
        println!("\nTotal extraneous keys: {}", report.extraneous.len());
    }
    println!();

    if report.is_complete() {
        println!("Localization is complete and clean!");
    }
}

fn main() {
    let args = CheckArgs::parse();
    setup_logger(LogVerbosity::from_flags(args.verbose, false));

    let base = load_or_exit(&args.base, "base");
    let compare = load_or_exit(&args.compare, "comparison");

    let report = check_completeness(&base, &compare);
    if args.verbose {
        println!("\nBase file contains {} keys", report.base_key_count);
        println!("Comparison file contains {} keys", report.compare_key_count);
        println!("Common keys: {}", report.common_key_count);
    }

    print_report(&report, &args.compare);

    exit(if report.is_complete() { 0 } else { 1 });
}
