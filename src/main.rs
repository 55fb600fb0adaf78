use clap::{Parser as ClapParser, Subcommand};
use lox_syntax::StderrReporter;
use lox_syntax::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "loxs")]
#[command(about = "Scan and parse Lox expressions, printing the syntax tree")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print its tree
    Parse {
        /// Expression source (reads from stdin if not provided)
        source: Option<String>,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the token stream as JSON
    Tokens {
        /// Expression source (reads from stdin if not provided)
        source: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut reporter = StderrReporter::new();

    let result = match cli.command {
        Commands::Parse { source, json } => run_parse(source, json, &mut reporter),
        Commands::Tokens { source, pretty } => run_tokens(source, pretty, &mut reporter),
    };

    match result {
        // Diagnostics were already written by the reporter
        Err(CliError::Lex(_) | CliError::Parse(_)) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(()) if reporter.had_error() => std::process::exit(1),
        Ok(()) => {}
    }
}

fn read_source(source: Option<String>) -> Result<String, CliError> {
    match source {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Ok(cli::DEMO_SOURCE.to_string()),
    }
}

fn run_parse(
    source: Option<String>,
    json: bool,
    reporter: &mut StderrReporter,
) -> Result<(), CliError> {
    let options = CheckOptions {
        source: read_source(source)?,
        json,
    };

    match cli::execute_check(&options, reporter)? {
        CheckResult::Rendered(text) => println!("{}", text),
        CheckResult::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

fn run_tokens(
    source: Option<String>,
    pretty: bool,
    reporter: &mut StderrReporter,
) -> Result<(), CliError> {
    let source = read_source(source)?;
    let value = cli::execute_tokens(&source, reporter);
    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", json);
    Ok(())
}
