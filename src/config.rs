// File: src/config.rs
use clap::Parser;
use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

/// Longest indent the pretty printer accepts.
const MAX_INDENT: usize = 10;

/// Run configuration. Every flag can also be given through the environment.
#[derive(Parser, Debug, Clone)]
#[clap(name = "moji_analyzer", version, about = "Decomposes a kaomoji corpus into a part dictionary")]
pub struct Config {
    /// Corpus file, one record per line.
    #[clap(short = 'i', long, env = "INPUT", default_value = "source_mojis.txt")]
    pub input: PathBuf,

    /// File the finished dictionary is written to.
    #[clap(short = 'o', long, env = "OUTPUT", default_value = "results.json")]
    pub output: PathBuf,

    /// Dictionary from an earlier run used as prior knowledge. Defaults to the output file.
    #[clap(short = 'p', long, env = "PREVIOUS")]
    pub previous: Option<PathBuf>,

    /// Pretty-print indent: a number of spaces, or a literal indent string.
    #[clap(short = 's', long, env = "SPACING")]
    pub spacing: Option<Spacing>,
}

impl Config {
    pub fn previous_path(&self) -> &PathBuf {
        self.previous.as_ref().unwrap_or(&self.output)
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing.clone().unwrap_or_default()
    }
}

/// Indent used when writing the dictionary. Empty means compact output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spacing(String);

impl Spacing {
    pub fn indent(&self) -> Option<&[u8]> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.as_bytes())
        }
    }
}

impl FromStr for Spacing {
    type Err = Infallible;

    /// `"4"` means four spaces (at most ten); anything else is used as the
    /// indent itself, cut to ten characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let indent = match s.parse::<usize>() {
            Ok(width) => " ".repeat(width.min(MAX_INDENT)),
            Err(_) => s.chars().take(MAX_INDENT).collect(),
        };
        Ok(Spacing(indent))
    }
}
