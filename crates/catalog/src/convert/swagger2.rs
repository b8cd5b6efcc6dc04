// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Swagger v2 → catalog conversion.
//!
//! Each `(path, method)` operation becomes one command and one view. The
//! command template calls `http` against `$HOST` and pipes through `jq`;
//! path and query parameters become environment inputs named by
//! upper-casing the parameter name.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use super::ConvertError;
use crate::schema::{
    CategoryDef, CommandDef, CommandInputDef, ConfigDocument, InputDef, ViewDef,
};
use crate::slug::slugify;

/// Color assigned to the generated category.
pub const DEFAULT_CATEGORY_COLOR: &str = "#ff0374";

const METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];

/// The subset of a Swagger v2 document the converter reads.
///
/// Path items keep document order; keys that are not HTTP methods
/// (`parameters`, `$ref`, vendor extensions) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Swagger2 {
    #[serde(default)]
    pub swagger: String,
    #[serde(default)]
    pub paths: IndexMap<String, IndexMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Operation {
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Parameter {
    #[serde(default)]
    name: String,
    #[serde(rename = "in", default)]
    location: String,
    #[serde(default)]
    description: String,
}

pub fn parse_swagger2(content: &str) -> Result<Swagger2, ConvertError> {
    let spec: Swagger2 = serde_json::from_str(content)?;
    if !spec.swagger.starts_with('2') {
        return Err(ConvertError::UnsupportedVersion(spec.swagger));
    }
    Ok(spec)
}

/// Convert a Swagger v2 document into a catalog placing every view in
/// `category`.
pub fn from_swagger2(spec: &Swagger2, category: &str) -> Result<ConfigDocument, ConvertError> {
    let category_slug = slugify(category);
    if category_slug.is_empty() {
        return Err(ConvertError::EmptyCategory(category.to_string()));
    }

    let operations = collect_operations(spec)?;

    let mut seen_inputs = IndexSet::new();
    let mut inputs = Vec::new();
    for (_, _, operation) in &operations {
        for parameter in &operation.parameters {
            let slug = input_slug(&parameter.name);
            if seen_inputs.insert(slug.clone()) {
                inputs.push(InputDef {
                    slug,
                    description: parameter.description.clone(),
                    validator: None,
                });
            }
        }
    }

    let mut commands = Vec::with_capacity(operations.len());
    let mut views = Vec::with_capacity(operations.len());
    for (path, method, operation) in &operations {
        let slug = command_slug(path, method);
        commands.push(CommandDef {
            slug: slug.clone(),
            command: command_template(path, method, &operation.parameters),
            description: operation.description.clone(),
            display: String::new(),
            inputs: operation
                .parameters
                .iter()
                .map(|p| CommandInputDef {
                    input: input_slug(&p.name),
                    name: None,
                })
                .collect(),
        });
        views.push(ViewDef {
            slug: Some(slug.clone()),
            name: format!("{} {}", method, path).trim().to_string(),
            command: Some(slug),
            sequence: None,
            category: category_slug.clone(),
            execute: Default::default(),
        });
    }

    Ok(ConfigDocument {
        inputs,
        commands,
        categories: vec![CategoryDef {
            slug: category_slug,
            name: category.to_string(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }],
        views,
        ..Default::default()
    })
}

/// Operations in document order. Parameters without a name are dropped.
fn collect_operations(spec: &Swagger2) -> Result<Vec<(&str, &str, Operation)>, ConvertError> {
    let mut operations = Vec::new();
    for (path, item) in &spec.paths {
        for (method, value) in item {
            if !METHODS.contains(&method.as_str()) {
                continue;
            }
            let mut operation: Operation =
                serde_json::from_value(value.clone()).map_err(|source| {
                    ConvertError::InvalidOperation {
                        path: path.clone(),
                        method: method.clone(),
                        source,
                    }
                })?;
            operation.parameters.retain(|p| !p.name.is_empty());
            operations.push((path.as_str(), method.as_str(), operation));
        }
    }
    Ok(operations)
}

fn input_slug(parameter: &str) -> String {
    parameter.to_uppercase()
}

fn command_slug(path: &str, method: &str) -> String {
    slugify(&format!("{}-{}", method, path))
}

/// `http <method> "$HOST<path>?<query>" | jq .`
fn command_template(path: &str, method: &str, parameters: &[Parameter]) -> String {
    let mut route = path.to_string();
    let mut query = String::from("?");
    for parameter in parameters {
        let var = format!("${}", input_slug(&parameter.name));
        match parameter.location.as_str() {
            "path" => route = route.replace(&format!("{{{}}}", parameter.name), &var),
            "query" => query.push_str(&format!("{}={}&", parameter.name, var)),
            _ => {}
        }
    }
    route.push_str(&query);
    let route = route.trim_end_matches(['&', '?']);
    format!("http {} \"$HOST{}\" | jq .", method, route)
}

#[cfg(test)]
#[path = "swagger2_tests.rs"]
mod tests;
