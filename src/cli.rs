use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use crate::error::ArgumentError;
use crate::pipeline::Options;

pub const DEFAULT_DELIMITER: &str = " ";

pub const USAGE_HINT: &str = "Run with first argument as path to .sln file";

// Options may repeat; the first occurrence wins, so each one is collected
// into a Vec and only its head is used.
#[derive(Parser, Debug)]
#[command(name = "proverit")]
#[command(about = "List the test assemblies a Visual Studio solution builds", long_about = None)]
pub struct Args {
    /// Path to the .sln file
    #[arg(value_name = "SOLUTION")]
    pub solution: Option<PathBuf>,

    /// Write the list to FILE instead of stdout
    #[arg(short = 'o', value_name = "FILE", allow_hyphen_values = true)]
    pub output_file: Vec<PathBuf>,

    /// Keep only paths containing TEXT (case-insensitive)
    #[arg(short = 'c', value_name = "TEXT", allow_hyphen_values = true)]
    pub contains: Vec<String>,

    /// Delimiter as comma-separated character codes, e.g. 13,10 (default: space)
    #[arg(short = 'd', value_name = "CODES", allow_hyphen_values = true)]
    pub delimiter: Vec<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.first().map(PathBuf::as_path)
    }

    pub fn filter(&self) -> &str {
        self.contains.first().map(String::as_str).unwrap_or_default()
    }

    pub fn delimiter(&self) -> Result<String, ArgumentError> {
        match self.delimiter.first() {
            Some(spec) => parse_delimiter(spec),
            None => Ok(DEFAULT_DELIMITER.to_string()),
        }
    }

    /// Resolved run options, or `None` when no solution was given.
    pub fn options(&self) -> Result<Option<Options>, ArgumentError> {
        let Some(solution) = &self.solution else {
            return Ok(None);
        };

        Ok(Some(Options {
            solution: solution.clone(),
            output_file: self.output_file().map(Path::to_path_buf),
            filter: self.filter().to_string(),
            delimiter: self.delimiter()?,
        }))
    }
}

pub fn usage() -> String {
    format!("{USAGE_HINT}\n\n{}", Args::command().render_help())
}

/// Builds a delimiter from decimal character codes: `13,10` is CRLF.
pub fn parse_delimiter(spec: &str) -> Result<String, ArgumentError> {
    spec.split(',')
        .map(|code| {
            code.trim()
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| ArgumentError::invalid_code_point(code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("proverit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_delimiter_crlf() {
        assert_eq!(parse_delimiter("13,10").unwrap(), "\r\n");
    }

    #[test]
    fn test_parse_delimiter_single_code() {
        assert_eq!(parse_delimiter("59").unwrap(), ";");
    }

    #[test]
    fn test_parse_delimiter_allows_spaces() {
        assert_eq!(parse_delimiter("44, 32").unwrap(), ", ");
    }

    #[test]
    fn test_parse_delimiter_unicode() {
        assert_eq!(parse_delimiter("8226").unwrap(), "\u{2022}");
    }

    #[test]
    fn test_parse_delimiter_rejects_garbage() {
        assert!(parse_delimiter("13,x").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("55296").is_err());
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["All.sln"]);
        assert_eq!(args.solution, Some(PathBuf::from("All.sln")));
        assert_eq!(args.output_file(), None);
        assert_eq!(args.filter(), "");
        assert_eq!(args.delimiter().unwrap(), " ");
    }

    #[test]
    fn test_options_anywhere_in_argument_list() {
        let args = parse(&["-c", "Release", "All.sln", "-o", "out.txt", "-d", "10"]);
        let options = args.options().unwrap().unwrap();
        assert_eq!(options.solution, PathBuf::from("All.sln"));
        assert_eq!(options.output_file, Some(PathBuf::from("out.txt")));
        assert_eq!(options.filter, "Release");
        assert_eq!(options.delimiter, "\n");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let args = parse(&["All.sln", "-c", "debug", "-c", "release", "-d", "59", "-d", "10"]);
        assert_eq!(args.filter(), "debug");
        assert_eq!(args.delimiter().unwrap(), ";");
    }

    #[test]
    fn test_filter_may_start_with_hyphen() {
        let args = parse(&["All.sln", "-c", "-x64"]);
        assert_eq!(args.filter(), "-x64");
    }

    #[test]
    fn test_output_file_may_start_with_hyphen() {
        let args = parse(&["All.sln", "-o", "-out.txt"]);
        assert_eq!(args.output_file(), Some(Path::new("-out.txt")));
    }

    #[test]
    fn test_hyphenated_delimiter_reaches_code_point_check() {
        let args = parse(&["All.sln", "-d", "-1"]);
        assert!(args.delimiter().is_err());
    }

    #[test]
    fn test_no_solution_yields_no_options() {
        let args = parse(&[]);
        assert!(args.options().unwrap().is_none());
    }

    #[test]
    fn test_usage_mentions_hint_and_options() {
        let text = usage();
        assert!(text.starts_with(USAGE_HINT));
        assert!(text.contains("-o"));
        assert!(text.contains("-d"));
    }
}
