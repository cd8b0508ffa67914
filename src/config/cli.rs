//! CLI argument parsing using clap

use super::toml::{merge_cli_with_file, parse_toml_file};
use super::validator::{self, RawConfig};
use super::Config;
use crate::error::GenError;
use crate::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const MISSING_VALUE: &str = "missing value for option";

const PDF_HELP: &str = "\
Probability density functions:
  beta       a = 0.5 and b = 0.5
  gamma      a = 1.0 and b = 2.0
  gaussian   x = 0.0 and std = 1.0
  poisson    rate = 1.0";

/// mst_gen - MST clustering kernel input data generator
///
/// Count options are taken as text and checked by the validator, so a
/// malformed number is reported like an out-of-range one.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mst_gen")]
#[command(version, about = "MST clustering kernel input data generator", long_about = None)]
#[command(args_override_self = true, after_help = PDF_HELP)]
pub struct Cli {
    /// Number of sampling intervals
    #[arg(long, value_name = "NUMBER", allow_negative_numbers = true)]
    pub nintervals: Option<String>,

    /// Number of data points
    #[arg(long, value_name = "NUMBER", allow_negative_numbers = true)]
    pub npoints: Option<String>,

    /// Probability density function for X-coordinates
    #[arg(long, value_name = "NAME")]
    pub pdf: Option<String>,

    /// Seed for the random number generator (OS entropy when unset)
    #[arg(long, env = "MST_GEN_SEED")]
    pub seed: Option<u64>,

    /// TOML file with default settings (command line takes precedence)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Outcome of command-line parsing
#[derive(Debug)]
pub enum Invocation {
    /// `--help` or `--version` was given; the clap error carries the text
    Info(clap::Error),
    /// Generate a point cloud with these arguments
    Generate(Cli),
}

impl Cli {
    /// Parse the process arguments
    pub fn parse_env() -> Result<Invocation> {
        Self::parse_invocation(std::env::args_os())
    }

    /// Parse an argument list (first item is the program name)
    ///
    /// A help request wins over every other argument, valid or not, on either
    /// side of it.
    pub fn parse_invocation<I, T>(args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        // clap stops at the first bad token, so a help flag anywhere replaces
        // the whole argument list before parsing
        if args.iter().skip(1).any(is_help_flag) {
            args.truncate(1);
            if args.is_empty() {
                args.push(OsString::from("mst_gen"));
            }
            args.push(OsString::from("--help"));
        }

        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Generate(cli)),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Invocation::Info(err)),
                _ => Err(convert_clap_error(&err)),
            },
        }
    }

    /// Settings given on the command line, before validation
    pub fn raw(&self) -> RawConfig {
        RawConfig {
            nintervals: self.nintervals.clone(),
            npoints: self.npoints.clone(),
            pdf: self.pdf.clone(),
            seed: self.seed,
        }
    }

    /// Merge the optional config file and validate
    pub fn resolve(&self) -> Result<Config> {
        let mut raw = self.raw();

        if let Some(ref path) = self.config {
            let file = parse_toml_file(path)?;
            raw = merge_cli_with_file(raw, file)?;
        }

        validator::validate(&raw)
    }
}

fn is_help_flag(arg: &OsString) -> bool {
    arg == "--help" || arg == "-h"
}

/// Map a clap parse failure onto the generator's error taxonomy
fn convert_clap_error(err: &clap::Error) -> GenError {
    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::NoEquals => GenError::invalid(MISSING_VALUE),
        ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => {
                GenError::invalid(format!("unrecognized option '{}'", arg))
            }
            _ => GenError::invalid("unrecognized option"),
        },
        _ => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            GenError::invalid(first.trim_start_matches("error: ").to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validator::{INVALID_NINTERVALS, INVALID_NPOINTS, UNSUPPORTED_PDF};
    use crate::config::Pdf;

    fn parse(args: &[&str]) -> Result<Invocation> {
        let mut argv = vec!["mst_gen"];
        argv.extend_from_slice(args);
        Cli::parse_invocation(argv)
    }

    fn parse_cli(args: &[&str]) -> Cli {
        match parse(args) {
            Ok(Invocation::Generate(cli)) => cli,
            other => panic!("expected arguments, got {:?}", other),
        }
    }

    fn invalid_message(result: Result<impl std::fmt::Debug>) -> String {
        match result {
            Err(GenError::InvalidArgument(msg)) => msg,
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_all_options() {
        let cli = parse_cli(&["--nintervals", "10", "--npoints", "5", "--pdf", "beta"]);
        assert_eq!(cli.nintervals.as_deref(), Some("10"));
        assert_eq!(cli.npoints.as_deref(), Some("5"));
        assert_eq!(cli.pdf.as_deref(), Some("beta"));
        assert!(!cli.debug);

        let config = cli.resolve().unwrap();
        assert_eq!(config.nintervals, 10);
        assert_eq!(config.npoints, 5);
        assert_eq!(config.pdf, Pdf::Beta);
    }

    #[test]
    fn test_cli_options_are_order_independent() {
        let a = parse_cli(&["--pdf", "gamma", "--npoints", "3", "--nintervals", "2"]);
        let b = parse_cli(&["--nintervals", "2", "--pdf", "gamma", "--npoints", "3"]);
        assert_eq!(a.resolve().unwrap(), b.resolve().unwrap());
    }

    #[test]
    fn test_cli_last_repeated_option_wins() {
        let cli = parse_cli(&[
            "--pdf", "beta", "--pdf", "poisson", "--nintervals", "1", "--npoints", "1",
        ]);
        assert_eq!(cli.resolve().unwrap().pdf, Pdf::Poisson);
    }

    #[test]
    fn test_cli_help_is_reported() {
        assert!(matches!(parse(&["--help"]), Ok(Invocation::Info(_))));
    }

    #[test]
    fn test_cli_help_ignores_other_state() {
        let result = parse(&["--npoints", "0", "--pdf", "nope", "--help"]);
        match result {
            Ok(Invocation::Info(err)) => assert_eq!(err.kind(), ErrorKind::DisplayHelp),
            other => panic!("expected help, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_help_wins_over_earlier_bad_arguments() {
        let cases: [&[&str]; 5] = [
            &["--frobnicate", "--help"],
            &["--npoints", "--help"],
            &["--seed", "abc", "--help"],
            &["--pdf", "-h"],
            &["--nintervals", "10", "--npoints", "5", "--pdf", "beta", "-h"],
        ];

        for args in cases {
            match parse(args) {
                Ok(Invocation::Info(err)) => assert_eq!(err.kind(), ErrorKind::DisplayHelp),
                other => panic!("{:?}: expected help, got {:?}", args, other),
            }
        }
    }

    #[test]
    fn test_cli_help_lists_every_pdf() {
        let text = match parse(&["--help"]) {
            Ok(Invocation::Info(err)) => err.to_string(),
            other => panic!("expected help, got {:?}", other),
        };
        for pdf in Pdf::ALL {
            assert!(text.contains(pdf.name()), "help text lacks {}", pdf);
            assert!(text.contains(pdf.parameters()), "help text lacks {} parameters", pdf);
        }
        assert!(text.contains("--nintervals"));
        assert!(text.contains("--npoints"));
    }

    #[test]
    fn test_cli_missing_value_is_rejected() {
        assert_eq!(invalid_message(parse(&["--nintervals", "10", "--pdf"])), MISSING_VALUE);
        assert_eq!(invalid_message(parse(&["--npoints"])), MISSING_VALUE);
    }

    #[test]
    fn test_cli_value_followed_by_option_is_missing() {
        assert_eq!(
            invalid_message(parse(&["--npoints", "--pdf", "beta"])),
            MISSING_VALUE
        );
    }

    #[test]
    fn test_cli_unknown_option_is_rejected() {
        let msg = invalid_message(parse(&["--nintervals", "1", "--frobnicate", "2"]));
        assert!(msg.contains("--frobnicate"), "unexpected message: {}", msg);
    }

    #[test]
    fn test_cli_negative_points_reach_validator() {
        let cli = parse_cli(&["--nintervals", "10", "--npoints", "-5", "--pdf", "beta"]);
        assert_eq!(cli.npoints.as_deref(), Some("-5"));
        assert_eq!(invalid_message(cli.resolve()), INVALID_NPOINTS);
    }

    #[test]
    fn test_cli_zero_counts_are_rejected() {
        let cli = parse_cli(&["--nintervals", "0", "--npoints", "5", "--pdf", "beta"]);
        assert_eq!(invalid_message(cli.resolve()), INVALID_NINTERVALS);

        let cli = parse_cli(&["--nintervals", "10", "--npoints", "0", "--pdf", "beta"]);
        assert_eq!(invalid_message(cli.resolve()), INVALID_NPOINTS);
    }

    #[test]
    fn test_cli_unknown_pdf_is_rejected() {
        let cli = parse_cli(&["--nintervals", "10", "--npoints", "5", "--pdf", "unknown_name"]);
        assert_eq!(invalid_message(cli.resolve()), UNSUPPORTED_PDF);
    }

    #[test]
    fn test_cli_seed_and_debug() {
        let cli = parse_cli(&[
            "--nintervals", "4", "--npoints", "4", "--pdf", "gaussian", "--seed", "99", "--debug",
        ]);
        assert!(cli.debug);
        assert_eq!(cli.resolve().unwrap().seed, Some(99));
    }

    #[test]
    fn test_cli_malformed_seed_is_rejected() {
        let result = parse(&["--seed", "abc"]);
        assert!(matches!(result, Err(GenError::InvalidArgument(_))));
    }
}
