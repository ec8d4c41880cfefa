use anyhow::Context;
use clap::Parser as ClapParser;
use rusty_pascal::{Environment, PascalError};
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io, process};
use tracing::Level;

/// Runs a Pascal-like program and prints the final variable bindings.
#[derive(ClapParser, Debug)]
#[clap(name = "rpas", version, about)]
struct Args {
    /// Program file to run. Reads stdin when neither this nor --eval is given.
    script: Option<PathBuf>,

    /// Program text to run instead of a file.
    #[clap(short, long, conflicts_with = "script")]
    eval: Option<String>,

    /// Print the token stream instead of running the program.
    #[clap(long)]
    tokens: bool,

    /// Print the parsed program as an s-expression before running it.
    #[clap(long)]
    print_ast: bool,

    /// Increase log output. Repeat for more detail.
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(74);
        }
    };

    if let Err(e) = run(&args, &source) {
        report_error(&e);
        process::exit(65);
    }
}

fn init_logging(verbose: u64) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_source(args: &Args) -> anyhow::Result<String> {
    if let Some(source) = &args.eval {
        return Ok(source.clone());
    }

    match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read program from stdin")?;
            Ok(source)
        }
    }
}

fn run(args: &Args, source: &str) -> Result<(), PascalError> {
    if args.tokens {
        for token in rusty_pascal::tokenize(source)? {
            println!("{}", token);
        }
        return Ok(());
    }

    let program = rusty_pascal::parse(source)?;
    if args.print_ast {
        println!("{}", program.ast_string());
    }

    let mut env = Environment::new();
    rusty_pascal::evaluate(&program, &mut env)?;
    print_bindings(&env);
    Ok(())
}

fn print_bindings(env: &Environment) {
    for (name, value) in env.sorted_bindings() {
        println!("{} = {}", name, value);
    }
}

fn report_error(error: &PascalError) {
    eprintln!("An error: {}", error);
}
