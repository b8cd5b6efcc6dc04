// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sd-server: the shelldeck HTTP service.
//!
//! [`Repository`] holds the current catalog snapshot and resolves a caller's
//! [`Scope`]. [`DeckService`] runs the four business operations against a
//! scope, and [`http::router`] exposes them over axum. [`lifecycle`] loads
//! the catalog, binds the listener and handles reload and shutdown signals.

pub mod env;
pub mod http;
pub mod lifecycle;
mod repository;
mod service;
pub mod wire;

pub use repository::{AccessPolicy, Repository, Scope};
pub use service::{DeckService, ExecuteCommandRequest, ExecuteViewRequest};

#[cfg(test)]
mod test_fixtures;
