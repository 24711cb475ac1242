use clap::Parser;
use crossterm::style::Stylize;
use namegen_core::cli::Cli;
use namegen_core::core::types::{Config, GeneratedName};
use namegen_core::{words, NameEngine};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A missing or malformed word file aborts the run before any name is
    // generated; there is no partial output.
    let word_set = match words::load(&cli.data_dir, &cli.lang, &cli.mode) {
        Ok(ws) => ws,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let engine = NameEngine::new(
        word_set,
        Config {
            lang: cli.lang,
            mode: cli.mode,
            seed: cli.seed,
        },
    );

    for i in 0..cli.count {
        if cli.explain {
            print_explained(&engine.generate_explained(i));
        } else {
            println!("{}", engine.generate(i));
        }
    }

    ExitCode::SUCCESS
}

/// Prints a name plus the full audit trail: seed, pattern, and the raw
/// hash / index / pool size behind every word.
fn print_explained(result: &GeneratedName) {
    println!("{}", result.name.as_str().bold());
    println!("{}", "— explanation —".dim());
    println!("seed: {}", result.seed);

    let pattern: Vec<&str> = result.pattern.iter().map(|c| c.as_str()).collect();
    println!("pattern: [{}]", pattern.join(", "));

    for p in &result.parts {
        println!(
            "- {}: {:?} (hash={} index={}/{})",
            p.category, p.word, p.hash, p.index, p.pool_size,
        );
    }
    println!();
}
