// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shelldeck generate`: produce a catalog from an API description.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sd_catalog::convert::{from_swagger2, parse_swagger2};
use tracing::info;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Swagger 2.0 JSON document to convert
    #[arg(long)]
    pub from_swagger2_json_path: PathBuf,

    /// Where to write the YAML catalog (stdout when omitted)
    #[arg(short = 'o', long = "output-path")]
    pub output: Option<PathBuf>,

    /// Category name for every generated view
    #[arg(long, default_value = "api")]
    pub set_category: String,
}

/// Convert and render the catalog as YAML.
pub fn render(args: &GenerateArgs) -> Result<String> {
    let path = &args.from_swagger2_json_path;
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let spec = parse_swagger2(&content).with_context(|| format!("parsing {}", path.display()))?;
    let doc = from_swagger2(&spec, &args.set_category)?;
    info!(
        commands = doc.commands.len(),
        inputs = doc.inputs.len(),
        "converted swagger document"
    );
    Ok(serde_yaml::to_string(&doc)?)
}

pub fn handle(args: GenerateArgs) -> Result<()> {
    let yaml = render(&args)?;
    match &args.output {
        Some(output) => std::fs::write(output, yaml)
            .with_context(|| format!("writing {}", output.display()))?,
        None => print!("{}", yaml),
    }
    Ok(())
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
