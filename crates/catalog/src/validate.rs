// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Referential-integrity and uniqueness checks.
//!
//! Collections are checked in dependency order: inputs, commands, sequences,
//! categories, views, roles, groups, users. Within one collection every
//! element is checked for required fields, then identities for duplicates,
//! then references against the collections already checked. The first
//! violation aborts validation.

use std::collections::HashSet;

use sd_shell::Pattern;

use crate::error::ConfigError;
use crate::schema::{
    CategoryDef, CommandDef, ConfigDocument, GroupDef, InputDef, RoleDef, SequenceDef, UserDef,
    ViewDef,
};

type Defined = HashSet<String>;

/// Validate a whole catalog document.
pub fn validate(doc: &ConfigDocument) -> Result<(), ConfigError> {
    let inputs = validate_inputs(&doc.inputs)?;
    let commands = validate_commands(&doc.commands, &inputs)?;
    let sequences = validate_sequences(&doc.sequences, &commands)?;
    let categories = validate_categories(&doc.categories)?;
    let views = validate_views(&doc.views, &commands, &sequences, &categories)?;
    let roles = validate_roles(&doc.roles, &views, &categories)?;
    let groups = validate_groups(&doc.groups, &roles)?;
    validate_users(&doc.users, &groups)?;
    Ok(())
}

fn validate_inputs(inputs: &[InputDef]) -> Result<Defined, ConfigError> {
    for (i, input) in inputs.iter().enumerate() {
        let location = locate("inputs", i, &input.slug);
        require(&location, "slug", &input.slug)?;
        if let Some(validator) = &input.validator {
            if let Err(e) = Pattern::new(validator) {
                return Err(ConfigError::InvalidFormat {
                    location: format!("{}.validator", location),
                    message: format!("invalid pattern '{}': {}", validator, e),
                });
            }
        }
    }
    unique(
        "inputs",
        "slug",
        inputs.iter().map(|input| input.slug.clone()),
    )
}

fn validate_commands(commands: &[CommandDef], inputs: &Defined) -> Result<Defined, ConfigError> {
    for (i, command) in commands.iter().enumerate() {
        let location = locate("commands", i, &command.slug);
        require(&location, "slug", &command.slug)?;
        require(&location, "command", &command.command)?;
        for (j, input_ref) in command.inputs.iter().enumerate() {
            require(&format!("{}.inputs[{}]", location, j), "input", &input_ref.input)?;
        }
    }

    let defined = unique(
        "commands",
        "slug",
        commands.iter().map(|command| command.slug.clone()),
    )?;
    for (i, command) in commands.iter().enumerate() {
        let location = locate("commands", i, &command.slug);
        let prefix = format!("{}.inputs", location);
        unique(
            &prefix,
            "input",
            command.inputs.iter().map(|r| r.input.clone()),
        )?;
        unique(
            &prefix,
            "name",
            command.inputs.iter().map(|r| r.env_name().to_string()),
        )?;
    }

    for (i, command) in commands.iter().enumerate() {
        let location = locate("commands", i, &command.slug);
        for (j, input_ref) in command.inputs.iter().enumerate() {
            resolve(
                &format!("{}.inputs[{}]", location, j),
                "input",
                &input_ref.input,
                inputs,
            )?;
        }
    }
    Ok(defined)
}

fn validate_sequences(
    sequences: &[SequenceDef],
    commands: &Defined,
) -> Result<Defined, ConfigError> {
    for (i, sequence) in sequences.iter().enumerate() {
        let location = locate("sequences", i, &sequence.slug);
        require(&location, "slug", &sequence.slug)?;
        if sequence.steps.is_empty() {
            return Err(ConfigError::InvalidFormat {
                location,
                message: "no steps defined".to_string(),
            });
        }
        for (j, step) in sequence.steps.iter().enumerate() {
            let step_location = format!("{}.{}", location, locate("steps", j, &step.name));
            require(&step_location, "name", &step.name)?;
            require(&step_location, "command", &step.command)?;
        }
    }

    let defined = unique(
        "sequences",
        "slug",
        sequences.iter().map(|sequence| sequence.slug.clone()),
    )?;
    for (i, sequence) in sequences.iter().enumerate() {
        let location = locate("sequences", i, &sequence.slug);
        unique(
            &format!("{}.steps", location),
            "name",
            sequence.steps.iter().map(|step| step.name.clone()),
        )?;
    }

    for (i, sequence) in sequences.iter().enumerate() {
        let location = locate("sequences", i, &sequence.slug);
        for (j, step) in sequence.steps.iter().enumerate() {
            let step_location = format!("{}.{}", location, locate("steps", j, &step.name));
            resolve(
                &format!("{}.command", step_location),
                "command",
                &step.command,
                commands,
            )?;
        }
    }
    Ok(defined)
}

fn validate_categories(categories: &[CategoryDef]) -> Result<Defined, ConfigError> {
    for (i, category) in categories.iter().enumerate() {
        let location = locate("categories", i, &category.slug);
        require(&location, "slug", &category.slug)?;
        require(&location, "name", &category.name)?;
        require(&location, "color", &category.color)?;
    }
    unique(
        "categories",
        "slug",
        categories.iter().map(|category| category.slug.clone()),
    )
}

fn validate_views(
    views: &[ViewDef],
    commands: &Defined,
    sequences: &Defined,
    categories: &Defined,
) -> Result<Defined, ConfigError> {
    for (i, view) in views.iter().enumerate() {
        let location = locate("views", i, &view.name);
        require(&location, "name", &view.name)?;
        require(&location, "slug", &view.slug())?;
        require(&location, "category", &view.category)?;
        match (view.command_slug(), view.sequence_slug()) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidFormat {
                    location,
                    message: "command and sequence are both set".to_string(),
                });
            }
            (None, None) => {
                return Err(ConfigError::InvalidFormat {
                    location,
                    message: "neither command nor sequence is set".to_string(),
                });
            }
            _ => {}
        }
    }

    let defined = unique("views", "slug", views.iter().map(ViewDef::slug))?;
    unique("views", "name", views.iter().map(|view| view.name.clone()))?;

    for (i, view) in views.iter().enumerate() {
        let location = locate("views", i, &view.name);
        if let Some(command) = view.command_slug() {
            resolve(
                &format!("{}.command", location),
                "command",
                command,
                commands,
            )?;
        }
        if let Some(sequence) = view.sequence_slug() {
            resolve(
                &format!("{}.sequence", location),
                "sequence",
                sequence,
                sequences,
            )?;
        }
        resolve(
            &format!("{}.category", location),
            "category",
            &view.category,
            categories,
        )?;
    }
    Ok(defined)
}

fn validate_roles(
    roles: &[RoleDef],
    views: &Defined,
    categories: &Defined,
) -> Result<Defined, ConfigError> {
    for (i, role) in roles.iter().enumerate() {
        require(&locate("roles", i, &role.slug), "slug", &role.slug)?;
    }

    let defined = unique("roles", "slug", roles.iter().map(|role| role.slug.clone()))?;

    for (i, role) in roles.iter().enumerate() {
        let location = locate("roles", i, &role.slug);
        for (j, view) in role.views.iter().enumerate() {
            resolve(&format!("{}.views[{}]", location, j), "view", view, views)?;
        }
        for (j, category) in role.categories.iter().enumerate() {
            resolve(
                &format!("{}.categories[{}]", location, j),
                "category",
                category,
                categories,
            )?;
        }
    }
    Ok(defined)
}

fn validate_groups(groups: &[GroupDef], roles: &Defined) -> Result<Defined, ConfigError> {
    for (i, group) in groups.iter().enumerate() {
        require(&locate("groups", i, &group.slug), "slug", &group.slug)?;
    }

    let defined = unique(
        "groups",
        "slug",
        groups.iter().map(|group| group.slug.clone()),
    )?;

    for (i, group) in groups.iter().enumerate() {
        let location = locate("groups", i, &group.slug);
        for (j, role) in group.roles.iter().enumerate() {
            resolve(&format!("{}.roles[{}]", location, j), "role", role, roles)?;
        }
    }
    Ok(defined)
}

fn validate_users(users: &[UserDef], groups: &Defined) -> Result<(), ConfigError> {
    for (i, user) in users.iter().enumerate() {
        require(&locate("users", i, &user.id), "id", &user.id)?;
    }

    unique("users", "id", users.iter().map(|user| user.id.clone()))?;

    for (i, user) in users.iter().enumerate() {
        let location = locate("users", i, &user.id);
        for (j, group) in user.groups.iter().enumerate() {
            resolve(&format!("{}.groups[{}]", location, j), "group", group, groups)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `collection[index](identity)`, or `collection[index]` when the identity is empty.
fn locate(collection: &str, index: usize, identity: &str) -> String {
    if identity.is_empty() {
        format!("{}[{}]", collection, index)
    } else {
        format!("{}[{}]({})", collection, index, identity)
    }
}

fn require(location: &str, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty {
            location: location.to_string(),
            field,
        });
    }
    Ok(())
}

/// Collect identities, failing on the first repeat.
fn unique(
    collection: &str,
    field: &'static str,
    values: impl Iterator<Item = String>,
) -> Result<Defined, ConfigError> {
    let mut seen = HashSet::new();
    for (i, value) in values.enumerate() {
        if seen.contains(&value) {
            return Err(ConfigError::Duplicate {
                location: locate(collection, i, &value),
                field,
                value,
            });
        }
        seen.insert(value);
    }
    Ok(seen)
}

fn resolve(
    location: &str,
    entity: &'static str,
    slug: &str,
    defined: &Defined,
) -> Result<(), ConfigError> {
    if !defined.contains(slug) {
        return Err(ConfigError::UndefinedReference {
            location: location.to_string(),
            entity,
            slug: slug.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
