// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog snapshot holder and per-caller access scopes.

use std::sync::Arc;

use parking_lot::RwLock;
use sd_catalog::{AllowSets, Catalog, Category, Command, View};

/// Whether allow-sets restrict what callers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Every caller sees the full catalog.
    Open,
    /// Callers see only their allow-sets; unlisted users see nothing.
    Enforced,
}

/// Shared, swappable catalog snapshot.
///
/// Readers clone the current [`Arc`] and never block a reload for longer
/// than that clone. A replaced snapshot stays alive until its last reader
/// drops it.
pub struct Repository {
    current: RwLock<Arc<Catalog>>,
    policy: AccessPolicy,
}

impl Repository {
    pub fn new(catalog: Catalog, policy: AccessPolicy) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
            policy,
        }
    }

    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read())
    }

    /// Install a new snapshot. In-flight scopes keep the old one.
    pub fn replace(&self, catalog: Catalog) {
        *self.current.write() = Arc::new(catalog);
    }

    /// Resolve what `user_id` may see against the current snapshot.
    pub fn scope(&self, user_id: Option<&str>) -> Scope {
        let catalog = self.snapshot();
        let allowed = match self.policy {
            AccessPolicy::Open => None,
            AccessPolicy::Enforced => Some(
                user_id
                    .and_then(|id| catalog.allow_sets(id))
                    .cloned()
                    .unwrap_or_default(),
            ),
        };
        Scope { catalog, allowed }
    }
}

/// One caller's consistent view of one snapshot.
#[derive(Debug, Clone)]
pub struct Scope {
    catalog: Arc<Catalog>,
    /// `None` means unrestricted.
    allowed: Option<AllowSets>,
}

impl Scope {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn allowed(&self) -> Option<&AllowSets> {
        self.allowed.as_ref()
    }

    pub fn get_command(&self, slug: &str) -> Option<Arc<Command>> {
        self.catalog.get_command(slug)
    }

    pub fn get_view(&self, slug_or_name: &str) -> Option<Arc<View>> {
        self.catalog.get_view(slug_or_name)
    }

    pub fn may_run_command(&self, slug: &str) -> bool {
        self.allowed
            .as_ref()
            .map_or(true, |sets| sets.commands.contains(slug))
    }

    pub fn may_open_view(&self, slug: &str) -> bool {
        self.allowed
            .as_ref()
            .map_or(true, |sets| sets.views.contains(slug))
    }

    /// Visible views in source order.
    pub fn views(&self) -> Vec<Arc<View>> {
        match &self.allowed {
            None => self.catalog.registries().views().to_vec(),
            Some(sets) => self.catalog.get_views_in(&sets.views),
        }
    }

    /// Visible categories in source order.
    pub fn categories(&self) -> Vec<&Category> {
        match &self.allowed {
            None => self.catalog.registries().categories().iter().collect(),
            Some(sets) => self.catalog.get_categories_in(&sets.categories),
        }
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
