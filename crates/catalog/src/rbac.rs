// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-user allow-sets.
//!
//! Permissions are purely additive: user → groups → roles → views and
//! categories. A category grants every view in it, a view grants its own
//! category, and every granted view grants the commands it can run (all
//! step commands for a sequence view).

use std::collections::{BTreeSet, HashMap};

use crate::error::ConfigError;
use crate::link::Registries;
use crate::schema::{ConfigDocument, GroupDef, RoleDef};

/// Slugs one user may see or run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowSets {
    pub categories: BTreeSet<String>,
    pub views: BTreeSet<String>,
    pub commands: BTreeSet<String>,
}

impl AllowSets {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.views.is_empty() && self.commands.is_empty()
    }
}

/// Compute allow-sets for every user in the document.
pub fn compile_allow_sets(
    doc: &ConfigDocument,
    registries: &Registries,
) -> Result<HashMap<String, AllowSets>, ConfigError> {
    let roles: HashMap<&str, &RoleDef> = doc.roles.iter().map(|r| (r.slug.as_str(), r)).collect();
    let groups: HashMap<&str, &GroupDef> =
        doc.groups.iter().map(|g| (g.slug.as_str(), g)).collect();

    let mut allow_sets = HashMap::with_capacity(doc.users.len());
    for user in &doc.users {
        let mut sets = AllowSets::default();

        for group_slug in &user.groups {
            let group = groups.get(group_slug.as_str()).ok_or_else(|| {
                undefined(format!("users({})", user.id), "group", group_slug)
            })?;
            for role_slug in &group.roles {
                let role = roles.get(role_slug.as_str()).ok_or_else(|| {
                    undefined(format!("groups({})", group.slug), "role", role_slug)
                })?;
                grant_role(role, registries, &mut sets)?;
            }
        }

        // Every view now in scope grants its category and its commands.
        for view_slug in &sets.views {
            let view = registries.view(view_slug).ok_or_else(|| {
                undefined(format!("users({})", user.id), "view", view_slug)
            })?;
            sets.categories.insert(view.category.slug.clone());
            sets.commands.extend(
                view.executable
                    .command_slugs()
                    .into_iter()
                    .map(str::to_string),
            );
        }

        tracing::debug!(
            user = %user.id,
            categories = sets.categories.len(),
            views = sets.views.len(),
            commands = sets.commands.len(),
            "compiled allow-sets"
        );
        allow_sets.insert(user.id.clone(), sets);
    }
    Ok(allow_sets)
}

fn grant_role(
    role: &RoleDef,
    registries: &Registries,
    sets: &mut AllowSets,
) -> Result<(), ConfigError> {
    sets.views.extend(role.views.iter().cloned());
    for category_slug in &role.categories {
        let category = registries.category(category_slug).ok_or_else(|| {
            undefined(format!("roles({})", role.slug), "category", category_slug)
        })?;
        sets.categories.insert(category_slug.clone());
        sets.views
            .extend(category.views.iter().map(|view| view.slug.clone()));
    }
    Ok(())
}

fn undefined(location: String, entity: &'static str, slug: &str) -> ConfigError {
    ConfigError::UndefinedReference {
        location,
        entity,
        slug: slug.to_string(),
    }
}

#[cfg(test)]
#[path = "rbac_tests.rs"]
mod tests;
