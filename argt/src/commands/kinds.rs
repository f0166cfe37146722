//! Kinds command implementation.

use std::io::{self, Write};

use argcli_lex::TokenKind;

use crate::commands::common::OutputFormat;
use crate::error::Result;

/// Prints every token kind with its display name.
pub fn run_kinds(format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_kinds(&mut out, format)?;
    out.flush()?;
    Ok(())
}

fn write_kinds<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    for kind in TokenKind::ALL {
        match format {
            OutputFormat::Text => writeln!(out, "{}\t{}", kind.name(), kind.description())?,
            OutputFormat::Json => {
                let record = serde_json::json!({
                    "kind": kind,
                    "description": kind.description(),
                });
                writeln!(out, "{}", record)?;
            },
        }
    }
    Ok(())
}
