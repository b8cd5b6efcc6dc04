// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shelldeck check`: validate a catalog without serving it.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sd_catalog::{load_file, Catalog, ConfigDocument};
use serde::Serialize;

use crate::color::{paint, Tone};
use crate::exit_error::ExitError;
use crate::output::{print_report, Report};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Catalog file (.yaml, .yml, .json or .toml)
    #[arg(long)]
    pub config: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckSummary {
    pub source: String,
    pub inputs: usize,
    pub commands: usize,
    pub sequences: usize,
    pub categories: usize,
    pub views: usize,
    pub roles: usize,
    pub groups: usize,
    pub users: Vec<UserSummary>,
}

/// Allow-set sizes for one user.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub categories: usize,
    pub views: usize,
    pub commands: usize,
}

impl CheckSummary {
    pub fn new(source: impl Into<String>, doc: &ConfigDocument, catalog: &Catalog) -> Self {
        let users = catalog
            .user_ids()
            .into_iter()
            .filter_map(|id| {
                catalog.allow_sets(id).map(|sets| UserSummary {
                    id: id.to_string(),
                    categories: sets.categories.len(),
                    views: sets.views.len(),
                    commands: sets.commands.len(),
                })
            })
            .collect();
        Self {
            source: source.into(),
            inputs: doc.inputs.len(),
            commands: doc.commands.len(),
            sequences: doc.sequences.len(),
            categories: doc.categories.len(),
            views: doc.views.len(),
            roles: doc.roles.len(),
            groups: doc.groups.len(),
            users,
        }
    }
}

impl Report for CheckSummary {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} is {}", paint(Tone::Header, &self.source), paint(Tone::Ok, "valid"))?;
        for (label, count) in [
            ("inputs", self.inputs),
            ("commands", self.commands),
            ("sequences", self.sequences),
            ("categories", self.categories),
            ("views", self.views),
            ("roles", self.roles),
            ("groups", self.groups),
        ] {
            writeln!(out, "  {:<11}{}", label, count)?;
        }
        if self.users.is_empty() {
            return writeln!(out, "{}", paint(Tone::Muted, "no users: permissions grant nothing"));
        }
        writeln!(out, "users:")?;
        for user in &self.users {
            let sizes = format!(
                "{} categories, {} views, {} commands",
                user.categories, user.views, user.commands
            );
            writeln!(out, "  {:<16}{}", user.id, paint(Tone::Muted, sizes))?;
        }
        Ok(())
    }
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let source = args.config.display().to_string();
    let doc = load_file(&args.config).map_err(|e| ExitError::invalid_catalog(&source, e))?;
    let catalog = Catalog::build(&doc).map_err(|e| ExitError::invalid_catalog(&source, e))?;
    let summary = CheckSummary::new(source, &doc, &catalog);
    print_report(args.json.into(), &summary)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
