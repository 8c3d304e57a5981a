use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Documentation folder to index
    #[arg(default_value = "docs")]
    pub docs_dir: PathBuf,

    /// TOML file overriding the built-in settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["docindex"]).unwrap();
        assert_eq!(cli.docs_dir, PathBuf::from("docs"));
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_explicit_args() {
        let cli = Cli::try_parse_from(["docindex", "manual", "--config", "idx.toml", "-vv"]).unwrap();
        assert_eq!(cli.docs_dir, PathBuf::from("manual"));
        assert_eq!(cli.config, Some(PathBuf::from("idx.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[rstest]
    #[case(&["docindex"], tracing::Level::WARN)]
    #[case(&["docindex", "-v"], tracing::Level::INFO)]
    #[case(&["docindex", "-vv"], tracing::Level::DEBUG)]
    #[case(&["docindex", "-vvvv"], tracing::Level::TRACE)]
    fn test_log_level(#[case] args: &[&str], #[case] expected: tracing::Level) {
        assert_eq!(Cli::try_parse_from(args).unwrap().log_level(), expected);
    }
}
