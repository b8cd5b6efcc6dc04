// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod catalog;
mod execute;
mod permissions;
mod reload;
