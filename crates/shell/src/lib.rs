// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sd-shell: runs operator-authored shell templates as OS processes.
//!
//! Values reach the process only as environment variables; the template text
//! itself is never rewritten. Callers validate values first with
//! [`validate_values`], then hand the template to a [`CommandRunner`].

pub mod exec;
mod input;
mod pattern;

pub use exec::{CommandRunner, ExecError, ShellExecutor, DEFAULT_SHELL};
pub use input::{validate_values, InputError, InputSpec, NameCheck};
pub use pattern::Pattern;
