// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON shapes returned to dashboard clients.
//!
//! Field names are PascalCase on the wire. Every response carries an `Error`
//! object; on success both of its fields are empty strings.

use sd_catalog::{Category, CategoryInfo, Command, Executable, Sequence, View};
use sd_core::{ExecutionResult, ServiceError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseError {
    pub code: String,
    pub message: String,
}

impl ResponseError {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&ServiceError> for ResponseError {
    fn from(err: &ServiceError) -> Self {
        Self::new(err.kind().to_string(), err.public_message())
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ResponseError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteCommandResponse {
    pub output: ExecutionResult,
    pub error: ResponseError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetViewConfigsResponse {
    pub view_configs: Vec<ViewConfig>,
    pub error: ResponseError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCategoryConfigsResponse {
    pub category_configs: Vec<CategoryConfig>,
    pub error: ResponseError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewConfig {
    pub slug: String,
    pub name: String,
    pub execute: ExecuteConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<SequenceConfig>,
    pub category: CategoryConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteConfig {
    pub auto: bool,
}

/// A category without its views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryConfig {
    pub slug: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceConfig {
    pub slug: String,
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StepConfig {
    pub name: String,
    pub command: CommandConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandConfig {
    pub slug: String,
    pub command: String,
    pub display: String,
    pub description: String,
    pub inputs: Vec<CommandInputConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandInputConfig {
    pub name: String,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputConfig {
    pub slug: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,
}

impl From<&CategoryInfo> for CategoryConfig {
    fn from(info: &CategoryInfo) -> Self {
        Self {
            slug: info.slug.clone(),
            name: info.name.clone(),
            color: info.color.clone(),
        }
    }
}

impl From<&Category> for CategoryConfig {
    fn from(category: &Category) -> Self {
        Self::from(category.info.as_ref())
    }
}

impl From<&Command> for CommandConfig {
    fn from(command: &Command) -> Self {
        Self {
            slug: command.slug.clone(),
            command: command.template.clone(),
            display: command.display.clone(),
            description: command.description.clone(),
            inputs: command
                .inputs
                .iter()
                .map(|ci| CommandInputConfig {
                    name: ci.name.clone(),
                    input: InputConfig {
                        slug: ci.input.slug.clone(),
                        description: ci.input.description.clone(),
                        validator: ci.input.pattern.as_ref().map(|p| p.as_str().to_string()),
                    },
                })
                .collect(),
        }
    }
}

impl From<&Sequence> for SequenceConfig {
    fn from(sequence: &Sequence) -> Self {
        Self {
            slug: sequence.slug.clone(),
            steps: sequence
                .steps
                .iter()
                .map(|step| StepConfig {
                    name: step.name.clone(),
                    command: CommandConfig::from(step.command.as_ref()),
                })
                .collect(),
        }
    }
}

impl From<&View> for ViewConfig {
    fn from(view: &View) -> Self {
        let (command, sequence) = match &view.executable {
            Executable::Command(command) => (Some(CommandConfig::from(command.as_ref())), None),
            Executable::Sequence(sequence) => (None, Some(SequenceConfig::from(sequence.as_ref()))),
        };
        Self {
            slug: view.slug.clone(),
            name: view.name.clone(),
            execute: ExecuteConfig {
                auto: view.auto_execute,
            },
            command,
            sequence,
            category: CategoryConfig::from(view.category.as_ref()),
        }
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
