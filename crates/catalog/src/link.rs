// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Linked registries.
//!
//! [`compile`] resolves every slug reference in a validated document into a
//! shared [`Arc`] link, so a view holds the very command it names and no
//! lookup happens at query time.

use std::collections::HashMap;
use std::sync::Arc;

use sd_shell::{InputSpec, Pattern};

use crate::error::ConfigError;
use crate::schema::ConfigDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub slug: String,
    pub description: String,
    pub pattern: Option<Pattern>,
}

/// An input as used by one command, under its environment variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInput {
    pub name: String,
    pub input: Arc<Input>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub slug: String,
    pub template: String,
    pub description: String,
    pub display: String,
    pub inputs: Vec<CommandInput>,
}

impl Command {
    /// Declared inputs in the shape the execution path validates against.
    pub fn input_specs(&self) -> Vec<InputSpec> {
        self.inputs
            .iter()
            .map(|ci| InputSpec::new(ci.name.clone(), ci.input.pattern.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub command: Arc<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub slug: String,
    pub steps: Vec<Step>,
}

impl Sequence {
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name == name)
    }
}

/// Presentation attributes of a category, shared by its views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub slug: String,
    pub name: String,
    pub color: String,
}

/// A category with the views that point at it, in source view order.
#[derive(Debug, Clone)]
pub struct Category {
    pub info: Arc<CategoryInfo>,
    pub views: Vec<Arc<View>>,
}

/// What a view runs: exactly one command or one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Executable {
    Command(Arc<Command>),
    Sequence(Arc<Sequence>),
}

impl Executable {
    /// Slugs of every command this executable may run.
    pub fn command_slugs(&self) -> Vec<&str> {
        match self {
            Executable::Command(command) => vec![command.slug.as_str()],
            Executable::Sequence(sequence) => sequence
                .steps
                .iter()
                .map(|step| step.command.slug.as_str())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub slug: String,
    pub name: String,
    pub category: Arc<CategoryInfo>,
    pub executable: Executable,
    pub auto_execute: bool,
}

/// Slug-keyed registries built once from a validated document.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    inputs: HashMap<String, Arc<Input>>,
    commands: HashMap<String, Arc<Command>>,
    sequences: HashMap<String, Arc<Sequence>>,
    categories: Vec<Category>,
    category_index: HashMap<String, usize>,
    views: Vec<Arc<View>>,
    view_index: HashMap<String, usize>,
    view_names: HashMap<String, usize>,
}

impl Registries {
    pub fn input(&self, slug: &str) -> Option<&Arc<Input>> {
        self.inputs.get(slug)
    }

    pub fn command(&self, slug: &str) -> Option<&Arc<Command>> {
        self.commands.get(slug)
    }

    pub fn sequence(&self, slug: &str) -> Option<&Arc<Sequence>> {
        self.sequences.get(slug)
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.category_index.get(slug).map(|&i| &self.categories[i])
    }

    pub fn view(&self, slug: &str) -> Option<&Arc<View>> {
        self.view_index.get(slug).map(|&i| &self.views[i])
    }

    pub fn view_by_name(&self, name: &str) -> Option<&Arc<View>> {
        self.view_names.get(name).map(|&i| &self.views[i])
    }

    /// Categories in source order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Views in source order.
    pub fn views(&self) -> &[Arc<View>] {
        &self.views
    }

    pub fn commands(&self) -> impl Iterator<Item = &Arc<Command>> {
        self.commands.values()
    }
}

/// Link a validated document into registries.
///
/// References are resolved again here and reported as errors rather than
/// trusted, so an unvalidated document fails cleanly.
pub fn compile(doc: &ConfigDocument) -> Result<Registries, ConfigError> {
    let mut reg = Registries::default();

    for def in &doc.inputs {
        let pattern = match &def.validator {
            Some(source) => Some(Pattern::new(source).map_err(|e| ConfigError::InvalidFormat {
                location: format!("inputs({})", def.slug),
                message: format!("invalid pattern '{}': {}", source, e),
            })?),
            None => None,
        };
        reg.inputs.insert(
            def.slug.clone(),
            Arc::new(Input {
                slug: def.slug.clone(),
                description: def.description.clone(),
                pattern,
            }),
        );
    }

    for def in &doc.commands {
        let mut inputs = Vec::with_capacity(def.inputs.len());
        for input_ref in &def.inputs {
            let input = lookup(
                &reg.inputs,
                &input_ref.input,
                || format!("commands({})", def.slug),
                "input",
            )?;
            inputs.push(CommandInput {
                name: input_ref.env_name().to_string(),
                input,
            });
        }
        reg.commands.insert(
            def.slug.clone(),
            Arc::new(Command {
                slug: def.slug.clone(),
                template: def.command.clone(),
                description: def.description.clone(),
                display: def.display.clone(),
                inputs,
            }),
        );
    }

    for def in &doc.sequences {
        let mut steps = Vec::with_capacity(def.steps.len());
        for step in &def.steps {
            let command = lookup(
                &reg.commands,
                &step.command,
                || format!("sequences({}).steps({})", def.slug, step.name),
                "command",
            )?;
            steps.push(Step {
                name: step.name.clone(),
                command,
            });
        }
        reg.sequences.insert(
            def.slug.clone(),
            Arc::new(Sequence {
                slug: def.slug.clone(),
                steps,
            }),
        );
    }

    for def in &doc.categories {
        let info = Arc::new(CategoryInfo {
            slug: def.slug.clone(),
            name: def.name.clone(),
            color: def.color.clone(),
        });
        reg.category_index
            .insert(def.slug.clone(), reg.categories.len());
        reg.categories.push(Category {
            info,
            views: Vec::new(),
        });
    }

    for def in &doc.views {
        let location = || format!("views({})", def.name);
        let executable = match (def.command_slug(), def.sequence_slug()) {
            (Some(command), None) => Executable::Command(lookup(
                &reg.commands,
                command,
                location,
                "command",
            )?),
            (None, Some(sequence)) => Executable::Sequence(lookup(
                &reg.sequences,
                sequence,
                location,
                "sequence",
            )?),
            _ => {
                return Err(ConfigError::InvalidFormat {
                    location: location(),
                    message: "view must set exactly one of command or sequence".to_string(),
                });
            }
        };
        let category_pos = *reg.category_index.get(&def.category).ok_or_else(|| {
            ConfigError::UndefinedReference {
                location: location(),
                entity: "category",
                slug: def.category.clone(),
            }
        })?;

        let slug = def.slug();
        let view = Arc::new(View {
            slug: slug.clone(),
            name: def.name.clone(),
            category: Arc::clone(&reg.categories[category_pos].info),
            executable,
            auto_execute: def.execute.auto,
        });
        reg.categories[category_pos].views.push(Arc::clone(&view));
        reg.view_index.insert(slug, reg.views.len());
        reg.view_names.insert(def.name.clone(), reg.views.len());
        reg.views.push(view);
    }

    Ok(reg)
}

fn lookup<T>(
    map: &HashMap<String, Arc<T>>,
    slug: &str,
    location: impl FnOnce() -> String,
    entity: &'static str,
) -> Result<Arc<T>, ConfigError> {
    map.get(slug)
        .cloned()
        .ok_or_else(|| ConfigError::UndefinedReference {
            location: location(),
            entity,
            slug: slug.to_string(),
        })
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
