//! Command-line arguments

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use meteor_dodge::settings::DEFAULT_CONFIG_FILE;

pub const USAGE: &str = "\
Usage: meteor-dodge [OPTIONS]

Options:
  --config PATH      Settings file (default: meteor-dodge.json)
  --seed N           Override the lane/star seed
  --headless TICKS   Run TICKS frames with no input and no display, print the score
  -h, --help         Show this help

Controls: arrows/WASD move, Space/Enter restarts after a hit, Q/Esc quits";

/// Parsed command-line arguments
#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub config: PathBuf,
    pub seed: Option<u64>,
    pub headless: Option<u32>,
    pub show_help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            seed: None,
            headless: None,
            show_help: false,
        }
    }
}

impl CliArgs {
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from(argv: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = Self::default();
        let mut iter = argv.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => args.show_help = true,
                "--config" => {
                    let path = iter.next().context("--config needs a path")?;
                    args.config = PathBuf::from(path);
                }
                "--seed" => {
                    let value = iter.next().context("--seed needs a number")?;
                    args.seed = Some(value.parse().with_context(|| format!("bad seed '{value}'"))?);
                }
                "--headless" => {
                    let value = iter.next().context("--headless needs a tick count")?;
                    args.headless =
                        Some(value.parse().with_context(|| format!("bad tick count '{value}'"))?);
                }
                other => bail!("unknown argument '{other}'\n\n{USAGE}"),
            }
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<CliArgs> {
        CliArgs::parse_from(argv.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&["--config", "x.json", "--seed", "42", "--headless", "600"]).unwrap();
        assert_eq!(args.config, PathBuf::from("x.json"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.headless, Some(600));
        assert!(!args.show_help);
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--seed", "abc"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }
}
