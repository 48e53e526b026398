use bitexp::cli::{self, CheckOptions, CliError};
use clap::{ArgAction, Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "bitexp")]
#[command(about = "bitexp - parse, inspect, and re-render instruction-encoding formulas")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a formula and render it
    Check {
        /// The formula (reads from stdin if not provided)
        formula: Option<String>,

        /// Render variable NAME as TEXT
        #[arg(long = "var", value_name = "NAME=TEXT", value_parser = cli::parse_assignment)]
        variables: Vec<(String, String)>,

        /// Render function NAME as TEXT
        #[arg(long = "func", value_name = "NAME=TEXT", value_parser = cli::parse_assignment)]
        functions: Vec<(String, String)>,

        /// Suffix appended to every number
        #[arg(long, default_value = "")]
        imm_suffix: String,

        /// Show the token list
        #[arg(long)]
        tokens: bool,

        /// Show the tree as JSON
        #[arg(long)]
        json: bool,

        /// Show variable and call occurrence counts
        #[arg(long)]
        collect: bool,

        /// Pretty-print JSON sections
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'bitexp docs' to list topics)
        topic: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            formula,
            variables,
            functions,
            imm_suffix,
            tokens,
            json,
            collect,
            pretty,
        } => read_formula(formula).and_then(|formula| {
            let options = CheckOptions {
                formula,
                variables,
                functions,
                immediate_suffix: imm_suffix,
                tokens,
                json,
                collect,
            };
            run_check(&options, pretty)
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => cli::get_doc_topic(&topic).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_formula(formula: Option<String>) -> Result<String, CliError> {
    let formula = match formula {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };
    Ok(formula.trim_end_matches(['\n', '\r']).to_string())
}

fn run_check(options: &CheckOptions, pretty: bool) -> Result<(), CliError> {
    match cli::execute_check(options) {
        Ok(report) => {
            println!("{}", report.to_text(pretty));
            Ok(())
        }
        Err(CliError::Expression(e)) => {
            eprintln!("{}", cli::format_error(&options.formula, &e));
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}
