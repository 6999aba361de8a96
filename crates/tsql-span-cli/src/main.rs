//! tsql-span CLI
//!
//! Tokenizes T-SQL, splits it into statements and clauses, and breaks WHERE
//! clauses into predicates.

mod predicates;
mod render;

use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use tsql_span_core::{parse_statements_with, tokenize_with, Options, Statement, Token};

/// Lexer and clause splitter for T-SQL.
#[derive(Parser)]
#[command(name = "tsql-span")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Treat "double quoted" text as identifiers instead of strings.
    #[arg(short, long, env = "TSQL_SPAN_QUOTED_IDENTIFIERS")]
    quoted_identifiers: bool,

    /// Keep whitespace runs as tokens.
    #[arg(short, long, env = "TSQL_SPAN_WHITESPACE")]
    whitespace: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every token with its span and type.
    Tokens {
        /// Input file, or `-` for stdin.
        input: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print every statement and its clauses.
    Statements {
        /// Input file, or `-` for stdin.
        input: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Split the WHERE clause of each SELECT into predicates.
    Predicates {
        /// Input file, or `-` for stdin.
        input: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Flat token shape for JSON output.
#[derive(Serialize)]
struct TokenView<'a> {
    token_type: &'static str,
    begin_position: usize,
    end_position: usize,
    text: &'a str,
    is_complete: bool,
}

impl<'a> From<&'a Token> for TokenView<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            token_type: token.token_type().as_str(),
            begin_position: token.begin_position(),
            end_position: token.end_position(),
            text: token.text(),
            is_complete: token.is_complete(),
        }
    }
}

#[derive(Serialize)]
struct StatementPredicates {
    statement: usize,
    predicates: Vec<predicates::Predicate>,
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
    }
}

fn parse(text: &str, input: &str, options: &Options) -> anyhow::Result<Vec<Statement>> {
    let statements =
        parse_statements_with(text, options).with_context(|| format!("Failed to parse {input}"))?;
    info!("Parsed {} statement(s) from {}", statements.len(), input);
    Ok(statements)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = Options::new()
        .use_quoted_identifiers(cli.quoted_identifiers)
        .include_whitespace(cli.whitespace);
    debug!(?options, "lexer options");

    match cli.command {
        Commands::Tokens { input, json } => {
            let text = read_input(&input)?;
            let tokens = tokenize_with(&text, &options);
            info!("Read {} token(s) from {}", tokens.len(), input);

            if json {
                let views: Vec<TokenView<'_>> = tokens.iter().map(TokenView::from).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for token in &tokens {
                    println!("{}", render::token_line(token));
                }
            }
        }

        Commands::Statements { input, json } => {
            let text = read_input(&input)?;
            let statements = parse(&text, &input, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&statements)?);
            } else {
                for (index, statement) in statements.iter().enumerate() {
                    print!("{}", render::statement_block(index + 1, statement));
                }
            }
        }

        Commands::Predicates { input, json } => {
            let text = read_input(&input)?;
            let statements = parse(&text, &input, &options)?;

            let found: Vec<StatementPredicates> = statements
                .iter()
                .enumerate()
                .filter_map(|(index, statement)| {
                    let where_clause = statement.as_select()?.where_clause.as_ref()?;
                    Some(StatementPredicates {
                        statement: index + 1,
                        predicates: predicates::split(where_clause),
                    })
                })
                .collect();

            if found.is_empty() {
                info!("No SELECT statement with a WHERE clause in {}", input);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                for entry in &found {
                    println!("#{}", entry.statement);
                    for predicate in &entry.predicates {
                        println!("{}", render::predicate_line(predicate));
                    }
                }
            }
        }
    }

    Ok(())
}
