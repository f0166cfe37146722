//! Lex command implementation.
//!
//! Streams each input through the lexer and prints its tokens, with the
//! lexer's diagnostics going to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use argcli_lex::{Lexer, ReaderSource, TokenKind};
use argcli_util::Handler;

use crate::commands::common::{write_token, Input, OutputFormat};
use crate::config::LexConfig;
use crate::error::{ArgtError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Files to lex; empty means stdin.
    pub inputs: Vec<PathBuf>,
    /// How tokens are printed.
    pub format: OutputFormat,
    /// Print line and column with each token.
    pub show_positions: bool,
    /// Leave comment tokens out of the output.
    pub skip_comments: bool,
    /// Fail on unknown tokens or lexical errors.
    pub deny_unknown: bool,
}

impl LexArgs {
    /// Arguments with every option taken from `config`.
    pub fn from_config(inputs: Vec<PathBuf>, config: &LexConfig) -> Self {
        Self {
            inputs,
            format: config.format,
            show_positions: config.show_positions,
            skip_comments: config.skip_comments,
            deny_unknown: config.deny_unknown,
        }
    }
}

/// Counts gathered while lexing one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens produced, end of file excluded.
    pub tokens: usize,
    /// `Unknown` tokens among them.
    pub unknown: usize,
    /// Error diagnostics reported.
    pub errors: usize,
    /// Warning diagnostics reported.
    pub warnings: usize,
}

/// Runs the lex command over every input, in order.
///
/// Stops at the first input that cannot be read or, with `deny_unknown`,
/// that is rejected.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut diag_out = stderr.lock();

    for input in Input::from_args(&args.inputs) {
        let name = input.name();
        let reader = input.open()?;
        let summary = lex_stream(&name, reader, &args, &mut out, &mut diag_out)?;
        tracing::debug!(
            file = %name,
            tokens = summary.tokens,
            unknown = summary.unknown,
            errors = summary.errors,
            warnings = summary.warnings,
            "lexed input"
        );
        out.flush()?;

        if args.deny_unknown && (summary.unknown > 0 || summary.errors > 0) {
            return Err(ArgtError::Rejected {
                file: name,
                unknown: summary.unknown,
                errors: summary.errors,
            });
        }
    }

    out.flush()?;
    Ok(())
}

/// Lexes one input named `name`, writing tokens to `out` and rendered
/// diagnostics to `diag_out`.
pub fn lex_stream<R, W, E>(
    name: &str,
    reader: R,
    args: &LexArgs,
    out: &mut W,
    diag_out: &mut E,
) -> Result<LexSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let handler = Handler::new();
    let mut source = ReaderSource::new(reader);
    let mut summary = LexSummary::default();

    for token in Lexer::new(&mut source, &handler) {
        summary.tokens += 1;
        match token.kind {
            TokenKind::Unknown => summary.unknown += 1,
            TokenKind::Comment if args.skip_comments => continue,
            _ => {},
        }
        write_token(out, &token, args.format, args.show_positions)?;
    }

    summary.errors = handler.error_count();
    summary.warnings = handler.warning_count();
    for diagnostic in handler.take_diagnostics() {
        writeln!(diag_out, "{}", diagnostic.render(Some(name)))?;
    }

    source.finish().map_err(|source| ArgtError::Source {
        file: name.to_string(),
        source,
    })?;

    Ok(summary)
}
