// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sd-catalog: the shelldeck configuration catalog.
//!
//! A catalog document is parsed ([`parser`]), checked for referential
//! integrity ([`validate`]), linked into immutable registries ([`link`]) and
//! compiled into per-user allow-sets ([`rbac`]). [`Catalog::build`] runs all
//! four and yields a snapshot that is never mutated afterwards.

mod catalog;
pub mod convert;
mod error;
pub mod link;
pub mod parser;
pub mod rbac;
mod schema;
mod slug;
pub mod validate;

pub use catalog::Catalog;
pub use error::ConfigError;
pub use link::{
    Category, CategoryInfo, Command, CommandInput, Executable, Input, Registries, Sequence, Step,
    View,
};
pub use parser::{format_for_path, load_file, parse_document, Format};
pub use rbac::AllowSets;
pub use schema::{
    CategoryDef, CommandDef, CommandInputDef, ConfigDocument, ExecuteDef, GroupDef, InputDef,
    RoleDef, SequenceDef, StepDef, UserDef, ViewDef,
};
pub use slug::slugify;

#[cfg(test)]
mod test_fixtures;
