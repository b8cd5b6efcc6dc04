// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering command results for people or for scripts.

use std::io::{self, Write};

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<bool> for OutputFormat {
    /// Maps a `--json` flag.
    fn from(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// A result that serializes for `--json` and has its own text layout.
pub trait Report: Serialize {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub fn write_report<R: Report>(
    out: &mut dyn Write,
    format: OutputFormat,
    report: &R,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => report.write_text(out)?,
    }
    Ok(())
}

pub fn print_report<R: Report>(format: OutputFormat, report: &R) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, format, report)
}
