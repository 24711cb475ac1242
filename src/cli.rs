// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Deterministic product/feature name generator.
#[derive(Parser, Debug)]
#[command(name = "namegen", version, about)]
pub struct Cli {
    /// Language of the word pools (en, de)
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Name style (minimal, startup, enterprise, bullshit)
    #[arg(long, default_value = "startup")]
    pub mode: String,

    /// Deterministic seed; omit for a date-based automatic seed
    #[arg(long)]
    pub seed: Option<String>,

    /// Number of names to generate
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Explain how each name was generated
    #[arg(long)]
    pub explain: bool,

    /// Directory containing the word pool files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["namegen"]);

        assert_eq!(cli.lang, "en");
        assert_eq!(cli.mode, "startup");
        assert_eq!(cli.seed, None);
        assert_eq!(cli.count, 1);
        assert!(!cli.explain);
        assert_eq!(cli.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn all_flags_parse() {
        let cli = Cli::parse_from([
            "namegen",
            "--lang",
            "de",
            "--mode",
            "bullshit",
            "--seed",
            "demo",
            "--count",
            "5",
            "--explain",
            "--data-dir",
            "/tmp/words",
        ]);

        assert_eq!(cli.lang, "de");
        assert_eq!(cli.mode, "bullshit");
        assert_eq!(cli.seed.as_deref(), Some("demo"));
        assert_eq!(cli.count, 5);
        assert!(cli.explain);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/words"));
    }
}
