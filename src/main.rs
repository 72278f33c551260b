//! CLI tool to inspect and check Swiftlet token streams.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use swiftlet_lexer::{LexerConfig, Token, lex_with};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "swiftlet-lex",
    about = "Tokenize Swiftlet source files and report lexical errors",
    version
)]
struct Cli {
    /// JSON lexer configuration (keyword table, strict numbers).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `swiftlet::lexer=trace`. Overrides RUST_LOG.
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of each file.
    Tokens {
        /// Emit a JSON array per file instead of one token per line.
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Report lexical errors without printing tokens.
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn init_logging(filter: Option<&str>) {
    let filter = filter.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<LexerConfig, String> {
    let Some(path) = path else {
        return Ok(LexerConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    LexerConfig::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!(
            "{}\t{}\t{:?}",
            token.start,
            token.kind.name(),
            token.lexeme
        );
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let (files, json, check_only) = match &cli.command {
        Command::Tokens { json, files } => (files, *json, false),
        Command::Check { files } => (files, false, true),
    };

    let mut had_error = false;

    for path in files {
        let shown = path.display();
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{shown}: {e}");
                had_error = true;
                continue;
            }
        };

        info!(target: "swiftlet::cli", file = %shown, "tokenizing");
        let lexed = lex_with(&content, &config);

        if !check_only {
            if json {
                match serde_json::to_string_pretty(&lexed.tokens) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("{shown}: {e}");
                        had_error = true;
                    }
                }
            } else {
                print_tokens(&lexed.tokens);
            }
        }

        if lexed.diagnostics.is_empty() {
            if check_only {
                // EndOfInput is not counted
                let count = lexed.tokens.len().saturating_sub(1);
                eprintln!("{shown}: ok ({count} tokens)");
            }
        } else {
            for err in &lexed.diagnostics {
                eprintln!("{shown}:{}: {}", err.position, err.kind);
            }
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
