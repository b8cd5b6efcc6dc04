// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sd-core: shared vocabulary for the shelldeck crates

pub mod macros;

pub mod error;
pub mod request;

pub use error::{Entity, ErrorKind, ServiceError};
pub use request::{ExecutionResult, InputValue, OutputFormat, INPUT_PARAM_PREFIX};
