use std::error::Error;
use std::io::{self, IsTerminal, Write};

use clap::{CommandFactory, Parser};
use jo::Options;
use log::debug;

const EXAMPLES: &str = "\
Examples:
  # Simple key-value pairs
  jo name=John age=30 city=Boston

  # Nested objects using bracket notation
  jo user[name]=John user[age]=30 config[debug]=true

  # Reading from stdin
  echo -e \"name=John\\nage=30\" | jo

  # Combined stdin and command-line arguments
  echo \"database[host]=localhost\" | jo database[port]=5432 debug=true";

#[derive(Parser, Debug)]
#[command(
    name = "jo",
    version,
    about = "A command-line tool that converts key-value arguments to JSON output",
    long_about = "jo is a simple command-line tool that converts key-value arguments to JSON output.\n\
                  It supports both command-line arguments and stdin input, as well as nested objects\n\
                  using bracket notation. Lines read from stdin are applied before arguments.",
    after_help = EXAMPLES
)]
struct Args {
    /// Tokens of the form key=value or key[subkey]=value.
    #[arg(value_name = "key=value")]
    tokens: Vec<String>,

    /// Indentation size; 0 prints compact JSON.
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut tokens = Vec::new();
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        tokens.extend(jo::read_tokens(stdin.lock())?);
    }
    tokens.extend(args.tokens);

    if tokens.is_empty() {
        return print_help();
    }

    let (valid, skipped) = jo::split_valid(tokens);
    for token in &skipped {
        eprintln!(
            "Warning: Skipping invalid argument format '{token}'. Expected 'key=value' or 'key[subkey]=value'."
        );
    }
    if valid.is_empty() {
        return print_help();
    }
    debug!("{} valid tokens, {} skipped", valid.len(), skipped.len());

    let document = jo::process(&valid)?;
    let options = Options::new().with_indent(args.indent);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    jo::to_writer(&mut handle, &document, &options)?;
    writeln!(handle)?;
    Ok(())
}

fn print_help() -> Result<(), Box<dyn Error>> {
    Args::command().print_help()?;
    Ok(())
}
