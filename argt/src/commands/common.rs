//! Common types and utilities for argt commands.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use argcli_lex::{Token, TokenKind};
use argcli_util::Span;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// How tokens are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per token
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// A token as written in JSON output.
#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
}

/// Writes `token` as one line in `format`.
pub fn write_token<W: Write>(
    out: &mut W,
    token: &Token,
    format: OutputFormat,
    show_positions: bool,
) -> Result<()> {
    let span = token.span.filter(|_| show_positions);
    match format {
        OutputFormat::Text => {
            if let Some(span) = span {
                write!(out, "{}\t", span)?;
            }
            writeln!(out, "{}\t{:?}", token.kind.name(), token.text)?;
        },
        OutputFormat::Json => {
            let record = TokenRecord {
                kind: token.kind,
                text: &token.text,
                span,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

// ============================================================================
// Inputs
// ============================================================================

/// Where a lex run reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Input {
    /// Maps command-line operands to inputs; none at all, or `-`, is stdin.
    pub fn from_args(paths: &[PathBuf]) -> Vec<Input> {
        if paths.is_empty() {
            return vec![Input::Stdin];
        }
        paths
            .iter()
            .map(|path| {
                if path == Path::new("-") {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Opens the input for buffered reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        Ok(match self {
            Input::Stdin => Box::new(io::stdin().lock()),
            Input::File(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}
