//! diaggen CLI
//!
//! `diaggen <header|source> <spec> <output> [options]`

use std::path::Path;

use diaggen::{Artifact, GeneratorConfig, KindSet, RendererPolicy};

fn main() {
    diaggen::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return;
    }

    if args.len() < 4 {
        print_usage();
        std::process::exit(2);
    }

    let artifact = match args[1].parse::<Artifact>() {
        Ok(artifact) => artifact,
        Err(msg) => usage_error(&msg),
    };

    let mut config = GeneratorConfig::default();
    for arg in &args[4..] {
        if let Some(policy) = arg.strip_prefix("--renderer=") {
            match policy.parse::<RendererPolicy>() {
                Ok(policy) => config = config.with_policy(policy),
                Err(msg) => usage_error(&msg),
            }
        } else if let Some(letters) = arg.strip_prefix("--kinds=") {
            match KindSet::from_letters(letters) {
                Ok(kinds) => config = config.with_kinds(kinds),
                Err(letter) => usage_error(&format!(
                    "unknown placeholder kind `{letter}` (expected letters from `tpcd`)"
                )),
            }
        } else {
            usage_error(&format!("unknown option `{arg}`"));
        }
    }

    if let Err(err) = diaggen::run(artifact, Path::new(&args[2]), Path::new(&args[3]), &config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("error: {msg}");
    eprintln!();
    print_usage();
    std::process::exit(2);
}

fn print_usage() {
    eprintln!("Usage: diaggen <header|source> <spec> <output> [options]");
    eprintln!();
    eprintln!("Artifacts:");
    eprintln!("  header              Kind enum, payload union, record type, prototypes");
    eprintln!("  source              Constructor bodies and the renderer");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --renderer=<policy> full (default) or fallback");
    eprintln!("  --kinds=<letters>   Recognized placeholders, subset of tpcd (default: tpcd)");
    eprintln!();
    eprintln!("Set RUST_LOG=diaggen=debug for progress output.");
}
