// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::info;

use crate::error::ConfigError;
use crate::link::{compile, Category, Command, Registries, View};
use crate::rbac::{compile_allow_sets, AllowSets};
use crate::schema::ConfigDocument;
use crate::validate::validate;

/// An immutable, fully linked catalog snapshot.
#[derive(Debug, Clone)]
pub struct Catalog {
    registries: Registries,
    allow_sets: HashMap<String, AllowSets>,
}

impl Catalog {
    /// Validate, link and compile allow-sets. Fails on the first error.
    pub fn build(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        validate(doc)?;
        let registries = compile(doc)?;
        let allow_sets = compile_allow_sets(doc, &registries)?;
        info!(
            commands = doc.commands.len(),
            sequences = doc.sequences.len(),
            categories = doc.categories.len(),
            views = doc.views.len(),
            users = doc.users.len(),
            "catalog compiled"
        );
        Ok(Self {
            registries,
            allow_sets,
        })
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Allow-sets for a listed user; `None` for anyone else.
    pub fn allow_sets(&self, user_id: &str) -> Option<&AllowSets> {
        self.allow_sets.get(user_id)
    }

    pub fn get_command(&self, slug: &str) -> Option<Arc<Command>> {
        self.registries.command(slug).cloned()
    }

    /// Look a view up by slug, falling back to its display name.
    pub fn get_view(&self, slug_or_name: &str) -> Option<Arc<View>> {
        self.registries
            .view(slug_or_name)
            .or_else(|| self.registries.view_by_name(slug_or_name))
            .cloned()
    }

    /// Views whose slug is in `allowed`, in source order.
    pub fn get_views_in(&self, allowed: &BTreeSet<String>) -> Vec<Arc<View>> {
        self.registries
            .views()
            .iter()
            .filter(|view| allowed.contains(&view.slug))
            .cloned()
            .collect()
    }

    /// Categories whose slug is in `allowed`, in source order.
    pub fn get_categories_in(&self, allowed: &BTreeSet<String>) -> Vec<&Category> {
        self.registries
            .categories()
            .iter()
            .filter(|category| allowed.contains(&category.info.slug))
            .collect()
    }

    pub fn get_allowed_views(&self, user_id: &str) -> BTreeSet<String> {
        self.allow_sets(user_id)
            .map(|sets| sets.views.clone())
            .unwrap_or_default()
    }

    pub fn get_allowed_categories(&self, user_id: &str) -> BTreeSet<String> {
        self.allow_sets(user_id)
            .map(|sets| sets.categories.clone())
            .unwrap_or_default()
    }

    pub fn get_allowed_commands(&self, user_id: &str) -> BTreeSet<String> {
        self.allow_sets(user_id)
            .map(|sets| sets.commands.clone())
            .unwrap_or_default()
    }

    /// Listed user ids, sorted.
    pub fn user_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.allow_sets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
