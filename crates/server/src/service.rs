// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Business operations behind the HTTP endpoints.
//!
//! Every operation resolves one [`crate::Scope`] up front, so a reload in the middle
//! of a request cannot mix two snapshots. Authorization is decided before
//! any lookup result is revealed and before any process is spawned.

use std::sync::Arc;

use sd_catalog::{Command, Executable};
use sd_core::{Entity, ExecutionResult, InputValue, ServiceError};
use sd_shell::{validate_values, CommandRunner, NameCheck};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::repository::Repository;
use crate::wire::{CategoryConfig, ViewConfig};

/// Run one command by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteCommandRequest {
    pub command: String,
    pub inputs: Vec<InputValue>,
}

/// Run the command behind a view, or one step of a sequence view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteViewRequest {
    /// View slug or display name.
    pub view: String,
    pub step: Option<String>,
    pub inputs: Vec<InputValue>,
}

#[derive(Clone)]
pub struct DeckService {
    repository: Arc<Repository>,
    runner: Arc<dyn CommandRunner>,
}

impl DeckService {
    pub fn new(repository: Arc<Repository>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { repository, runner }
    }

    pub fn repository(&self) -> &Arc<Repository> {
        &self.repository
    }

    /// Execute a command by slug. Undeclared value names are passed through.
    pub async fn execute_command(
        &self,
        user_id: Option<&str>,
        request: ExecuteCommandRequest,
        cancel: CancellationToken,
    ) -> Result<ExecutionResult, ServiceError> {
        if request.command.is_empty() {
            return Err(ServiceError::invalid("no command given"));
        }
        let scope = self.repository.scope(user_id);
        if !scope.may_run_command(&request.command) {
            return Err(ServiceError::unauthorized(format!(
                "user {:?} may not run command '{}'",
                user_id, request.command
            )));
        }
        let command = scope
            .get_command(&request.command)
            .ok_or_else(|| ServiceError::not_found(Entity::Command, &request.command))?;

        self.run(&command, &request.inputs, NameCheck::Lenient, cancel)
            .await
    }

    /// Execute a view. Only declared value names are accepted.
    pub async fn execute_view(
        &self,
        user_id: Option<&str>,
        request: ExecuteViewRequest,
        cancel: CancellationToken,
    ) -> Result<ExecutionResult, ServiceError> {
        if request.view.is_empty() {
            return Err(ServiceError::invalid("no view given"));
        }
        let scope = self.repository.scope(user_id);
        let view = match scope.get_view(&request.view) {
            Some(view) if scope.may_open_view(&view.slug) => view,
            found => {
                return Err(match (found, scope.allowed()) {
                    (None, None) => ServiceError::not_found(Entity::View, &request.view),
                    _ => ServiceError::unauthorized(format!(
                        "user {:?} may not open view '{}'",
                        user_id, request.view
                    )),
                });
            }
        };

        let step = request.step.as_deref().filter(|s| !s.is_empty());
        let command = match (&view.executable, step) {
            (Executable::Command(command), None) => Arc::clone(command),
            (Executable::Command(_), Some(step)) => {
                return Err(ServiceError::invalid(format!(
                    "view '{}' runs a single command; step '{}' given",
                    view.slug, step
                )));
            }
            (Executable::Sequence(sequence), Some(step)) => sequence
                .step(step)
                .map(|s| Arc::clone(&s.command))
                .ok_or_else(|| ServiceError::not_found(Entity::Step, step))?,
            (Executable::Sequence(sequence), None) => {
                return Err(ServiceError::invalid(format!(
                    "view '{}' runs sequence '{}'; a step is required",
                    view.slug, sequence.slug
                )));
            }
        };

        self.run(&command, &request.inputs, NameCheck::Strict, cancel)
            .await
    }

    /// Views visible to the caller, in catalog order.
    pub fn get_view_configs(&self, user_id: Option<&str>) -> Vec<ViewConfig> {
        self.repository
            .scope(user_id)
            .views()
            .iter()
            .map(|view| ViewConfig::from(view.as_ref()))
            .collect()
    }

    /// Categories visible to the caller, without their views.
    pub fn get_category_configs(&self, user_id: Option<&str>) -> Vec<CategoryConfig> {
        self.repository
            .scope(user_id)
            .categories()
            .into_iter()
            .map(CategoryConfig::from)
            .collect()
    }

    /// Stylesheet for the caller's visible categories.
    pub fn category_css(&self, user_id: Option<&str>) -> String {
        crate::http::css::render(&self.get_category_configs(user_id))
    }

    async fn run(
        &self,
        command: &Command,
        inputs: &[InputValue],
        check: NameCheck,
        cancel: CancellationToken,
    ) -> Result<ExecutionResult, ServiceError> {
        validate_values(&command.input_specs(), inputs, check)?;
        info!(command = %command.slug, inputs = inputs.len(), "executing command");
        Ok(self.runner.run(&command.template, inputs, cancel).await?)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
