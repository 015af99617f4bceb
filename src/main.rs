use anyhow::{Context, Result};
use charcomb::grammar::{Grammar, RuleName, Token};
use charcomb::parser::{ParseResult, Parser as _};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Parse source text with the toy statement grammar.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Source text to parse; read from stdin when neither this nor --file is given
    source: Option<String>,

    /// Read the source from a file
    #[arg(short, long, conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Grammar rule to start from: program, statement, builtin, assignment,
    /// expression or identifier
    #[arg(short, long, default_value_t = RuleName::Program)]
    rule: RuleName,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How a parse ended, and what the driver reports for it
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome<'code> {
    /// The whole input was consumed
    Accepted(Vec<Token<'code>>),
    /// The rule matched a prefix; `remainder` is what it left behind
    Partial { tokens: usize, remainder: &'code str },
    NoMatch,
}

impl<'code> Outcome<'code> {
    fn from_result(result: ParseResult<'code, Token<'code>>) -> Self {
        match result {
            Ok((output, remainder)) if remainder.is_eof() => Outcome::Accepted(output),
            Ok((output, remainder)) => Outcome::Partial {
                tokens: output.len(),
                remainder: remainder.rest(),
            },
            Err(_) => Outcome::NoMatch,
        }
    }

    fn status(&self) -> u8 {
        match self {
            Outcome::Accepted(_) => 0,
            Outcome::Partial { .. } => 1,
            Outcome::NoMatch => 2,
        }
    }

    /// Text for stdout; `None` when the outcome goes to stderr instead
    fn report(&self) -> Option<String> {
        match self {
            Outcome::Accepted(output) => Some(format!("Success:\n{:?}", output)),
            Outcome::Partial { remainder, .. } => {
                Some(format!("Program only partially consumed.\n{}", remainder))
            }
            Outcome::NoMatch => None,
        }
    }
}

fn parse_source<'code>(
    grammar: &Grammar<'code>,
    rule: RuleName,
    source: &'code str,
) -> Outcome<'code> {
    Outcome::from_result(grammar.rule(rule).parse_str(source))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(args: &Args) -> Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    if let Some(source) = &args.source {
        return Ok(source.clone());
    }

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    Ok(source)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = read_source(&args)?;
    tracing::info!(rule = %args.rule, bytes = source.len(), "parsing");

    let grammar = Grammar::new();
    let outcome = parse_source(&grammar, args.rule, &source);
    match &outcome {
        Outcome::Partial { tokens, remainder } => {
            tracing::debug!(tokens, offset = source.len() - remainder.len(), "partial parse");
        }
        Outcome::NoMatch => eprintln!("{}: input does not match", args.rule),
        Outcome::Accepted(_) => {}
    }
    if let Some(report) = outcome.report() {
        println!("{}", report);
    }

    Ok(ExitCode::from(outcome.status()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_program_is_accepted() {
        let grammar = Grammar::new();

        let outcome = parse_source(&grammar, RuleName::Program, "print(\"x\");");
        assert_eq!(outcome.status(), 0);
        assert_eq!(
            outcome.report().unwrap(),
            "Success:\n[\"print\", \"(\", \"\\\"\", \"x\", \"\\\"\", \")\", \";\"]"
        );
    }

    #[test]
    fn test_statement_without_semicolon_does_not_match() {
        let grammar = Grammar::new();

        let outcome = parse_source(&grammar, RuleName::Statement, "print(\"x\")");
        assert_eq!(outcome, Outcome::NoMatch);
        assert_eq!(outcome.status(), 2);
        assert_eq!(outcome.report(), None);
    }

    #[test]
    fn test_program_without_semicolon_is_partial() {
        let grammar = Grammar::new();

        let outcome = parse_source(&grammar, RuleName::Program, "print(\"x\")");
        assert_eq!(
            outcome,
            Outcome::Partial {
                tokens: 0,
                remainder: "print(\"x\")"
            }
        );
        assert_eq!(outcome.status(), 1);
        assert_eq!(
            outcome.report().unwrap(),
            "Program only partially consumed.\nprint(\"x\")"
        );
    }

    #[test]
    fn test_rule_flag_parses_rule_names() {
        let args = Args::try_parse_from(["charcomb", "--rule", "statement", "a=\"1\";"]).unwrap();
        assert_eq!(args.rule, RuleName::Statement);
        assert_eq!(args.source.as_deref(), Some("a=\"1\";"));

        let args = Args::try_parse_from(["charcomb", "x"]).unwrap();
        assert_eq!(args.rule, RuleName::Program);

        let err = Args::try_parse_from(["charcomb", "--rule", "nope", "x"]).unwrap_err();
        assert!(err.to_string().contains("unknown rule `nope`"));
    }

    #[test]
    fn test_file_conflicts_with_source() {
        let result = Args::try_parse_from(["charcomb", "--file", "a.txt", "x"]);

        assert!(result.is_err());
    }
}
