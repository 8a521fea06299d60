//! Command-line argument parsing.
//!
//! Each command maps onto one or two of the app's triggers.

/// Which part of the countries list to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ListFilter {
    All,
    Search(String),
    /// Segment label such as `D...J`; unknown labels show the full list
    Segment(String),
    Letter(char),
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// List countries, sectioned by initial
    Countries(ListFilter),
    /// Show a country's profile headline and charts
    Profile { code: String },
    /// Show a country's indicator domains
    Explore { code: String },
    /// List favourites
    Favourites,
    /// Add or remove a country from favourites
    ToggleFavourite { code: String },
    RemoveFavourite { code: String },
    /// Compare the app version with the published one
    CheckVersion,
    /// Arguments could not be understood
    Invalid(String),
}

/// Parsed command plus global flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// Print the observed state as JSON instead of text
    pub json: bool,
}

pub const USAGE: &str = "\
Usage: who-drowning [--json] <command>

Commands:
  countries [--search TEXT | --segment LABEL | --letter C]
  profile CODE
  explore CODE
  favourites
  favourite toggle CODE
  favourite remove CODE
  check-version

Options:
  --json         Print results as JSON
  -V, --version  Show version
  -h, --help     Show this help

Segments: A...C, D...J, K...Q, R...Z";

/// Parse command-line arguments.
///
/// # Examples
///
/// ```
/// use who_drowning::cli::args::{parse_args, CliCommand, ListFilter};
///
/// let args = ["who-drowning", "countries", "--segment", "D...J"].map(String::from);
/// let parsed = parse_args(args.into_iter());
/// assert_eq!(parsed.command, CliCommand::Countries(ListFilter::Segment("D...J".to_string())));
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut json = false;
    let mut words = Vec::new();

    // Skip the program name
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                return CliArgs {
                    command: CliCommand::Version,
                    json,
                }
            }
            "--help" | "-h" => {
                return CliArgs {
                    command: CliCommand::Help,
                    json,
                }
            }
            "--json" => json = true,
            _ => words.push(arg),
        }
    }

    CliArgs {
        command: parse_command(&words),
        json,
    }
}

fn parse_command(words: &[String]) -> CliCommand {
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    match words.as_slice() {
        [] => CliCommand::Help,
        ["countries", rest @ ..] => parse_countries(rest),
        ["profile", code] => CliCommand::Profile {
            code: code.to_string(),
        },
        ["explore", code] => CliCommand::Explore {
            code: code.to_string(),
        },
        ["favourites"] => CliCommand::Favourites,
        ["favourite", "toggle", code] => CliCommand::ToggleFavourite {
            code: code.to_string(),
        },
        ["favourite", "remove", code] => CliCommand::RemoveFavourite {
            code: code.to_string(),
        },
        ["check-version"] => CliCommand::CheckVersion,
        [command, ..] => CliCommand::Invalid(format!("Unknown or incomplete command: {}", command)),
    }
}

fn parse_countries(rest: &[&str]) -> CliCommand {
    match rest {
        [] => CliCommand::Countries(ListFilter::All),
        ["--search", text] => CliCommand::Countries(ListFilter::Search(text.to_string())),
        ["--segment", label] => CliCommand::Countries(ListFilter::Segment(label.to_string())),
        ["--letter", letter] => {
            let mut chars = letter.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => CliCommand::Countries(ListFilter::Letter(c)),
                _ => CliCommand::Invalid(format!("--letter expects one character, got '{}'", letter)),
            }
        }
        _ => CliCommand::Invalid("countries accepts one of --search, --segment or --letter".to_string()),
    }
}
