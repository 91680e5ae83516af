//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Weft - Extract product and care attributes from product descriptions.
#[derive(Debug, Parser)]
#[command(name = "weft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file: a JSON array of records, or a .csv table
    #[arg(default_value = "hm_input.json")]
    pub input: PathBuf,

    /// Output file: a JSON array of records, or a .csv table
    #[arg(default_value = "hm_output.json")]
    pub output: PathBuf,

    /// Configuration file path (defaults to ~/.weft/config.toml if present)
    #[arg(short, long, env = "WEFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cli = Cli::try_parse_from(["weft"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("hm_input.json"));
        assert_eq!(cli.output, PathBuf::from("hm_output.json"));
        assert!(!cli.no_color);
    }

    #[test]
    fn test_explicit_paths_and_config() {
        let cli = Cli::try_parse_from([
            "weft",
            "products.csv",
            "annotated.csv",
            "--config",
            "weft.toml",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("products.csv"));
        assert_eq!(cli.output, PathBuf::from("annotated.csv"));
        assert_eq!(cli.config, Some(PathBuf::from("weft.toml")));
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["weft", "a.json", "b.json", "c.json"]).is_err());
    }
}
