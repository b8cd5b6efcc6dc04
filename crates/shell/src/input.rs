// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request value validation against declared inputs.

use sd_core::{InputValue, ServiceError};
use thiserror::Error;

use crate::pattern::Pattern;

/// A declared input as seen by the execution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub name: String,
    pub pattern: Option<Pattern>,
}

impl InputSpec {
    pub fn new(name: impl Into<String>, pattern: Option<Pattern>) -> Self {
        Self {
            name: name.into(),
            pattern,
        }
    }
}

/// Whether supplied value names must be declared.
///
/// Command-slug execution is lenient: the template reads whatever
/// environment it needs. Named-view execution is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    Strict,
    Lenient,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown input '{name}'")]
    UnknownName { name: String },

    #[error("input '{name}' does not match pattern '{pattern}'")]
    PatternMismatch { name: String, pattern: String },

    #[error("input '{name}' requires a value matching '{pattern}'")]
    MissingValue { name: String, pattern: String },

    #[error("input name {name:?} is not a valid environment variable name")]
    MalformedName { name: String },

    #[error("input '{name}' has a value containing a NUL byte")]
    MalformedValue { name: String },
}

impl From<InputError> for ServiceError {
    fn from(err: InputError) -> Self {
        ServiceError::invalid(err.to_string())
    }
}

/// Check supplied values against the declared inputs.
///
/// Names must be non-empty and free of `=` and NUL; values must be free of
/// NUL. Patterns apply in both modes. Every pattern-bearing input must
/// receive a value. The first violation is returned.
pub fn validate_values(
    specs: &[InputSpec],
    values: &[InputValue],
    check: NameCheck,
) -> Result<(), InputError> {
    for value in values {
        if value.name.is_empty() || value.name.contains(['=', '\0']) {
            return Err(InputError::MalformedName {
                name: value.name.clone(),
            });
        }
        if value.value.contains('\0') {
            return Err(InputError::MalformedValue {
                name: value.name.clone(),
            });
        }
        let spec = specs.iter().find(|s| s.name == value.name);
        match spec {
            None if check == NameCheck::Strict => {
                return Err(InputError::UnknownName {
                    name: value.name.clone(),
                });
            }
            Some(InputSpec {
                pattern: Some(pattern),
                ..
            }) if !pattern.is_match(&value.value) => {
                return Err(InputError::PatternMismatch {
                    name: value.name.clone(),
                    pattern: pattern.as_str().to_string(),
                });
            }
            _ => {}
        }
    }

    for spec in specs {
        if let Some(pattern) = &spec.pattern {
            if !values.iter().any(|v| v.name == spec.name) {
                return Err(InputError::MissingValue {
                    name: spec.name.clone(),
                    pattern: pattern.as_str().to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
