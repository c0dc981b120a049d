use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{
    display_error, format_listing,
    lexer::{
        scanner::Scanner,
        symbols::SymbolTable,
        tokens::{Token, TokenKindTable, TOKEN_KINDS},
    },
};
use tracing_subscriber::EnvFilter;

/// Scans a source file and prints one line per token.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to scan
    source_file: PathBuf,

    /// Log filter, e.g. `warn` or `frontend=trace`
    #[arg(long, env = "FRONTEND_LOG", default_value = "warn")]
    log_level: String,

    /// Only report diagnostics, do not print tokens
    #[arg(short, long)]
    quiet: bool,

    /// Print the numbered source text after the token list
    #[arg(short, long)]
    listing: bool,
}

fn describe(token: &Token, kinds: &TokenKindTable) -> String {
    let label = if token.kind().is_variable_spelling() {
        token.spelling()
    } else {
        kinds.spelling_of(token.kind()).unwrap_or(token.spelling())
    };

    format!(
        "{}  left: {} right: {} line: {}",
        label,
        token.left_position(),
        token.right_position(),
        token.line_number()
    )
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    lazy_static::initialize(&TOKEN_KINDS);
    let mut symbols = SymbolTable::new(&TOKEN_KINDS);

    let start = Instant::now();
    let mut scanner = match Scanner::open(&args.source_file, &mut symbols) {
        Ok(scanner) => scanner,
        Err(err) => {
            eprintln!(
                "Error reading source file {}: {}",
                args.source_file.display(),
                err
            );
            return ExitCode::from(66); // EX_NOINPUT
        }
    };

    let mut count = 0usize;
    for token in scanner.by_ref() {
        count += 1;
        if !args.quiet {
            println!("{}", describe(&token, &TOKEN_KINDS));
        }
    }

    let diagnostics = scanner.take_diagnostics();
    drop(scanner);

    tracing::info!(tokens = count, symbols = symbols.len(), elapsed = ?start.elapsed(), "scanned");

    if args.listing {
        match fs::read_to_string(&args.source_file) {
            Ok(text) => print!("{}", format_listing(&text)),
            Err(err) => tracing::warn!(error = %err, "unable to re-read source for listing"),
        }
    }

    for error in &diagnostics {
        display_error(error, &args.source_file);
    }

    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(65) // EX_DATAERR
    }
}
