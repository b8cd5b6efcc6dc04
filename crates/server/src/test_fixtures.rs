// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared catalog fixture for unit tests.
//!
//! Commands only use POSIX shell builtins and coreutils so they run anywhere.

use sd_catalog::{parse_document, Catalog, Format};

use crate::repository::{AccessPolicy, Repository};

/// Users: alice (ops: everything), bob (readers: the info category).
pub(crate) const FIXTURE_YAML: &str = r##"
inputs:
  - slug: NAME
    description: Who to greet
    validator: "[a-z]+"
  - slug: EXTRA
commands:
  - slug: hello
    command: echo "hello $NAME"
    inputs:
      - input: NAME
  - slug: date
    command: echo today
  - slug: both
    command: echo out; echo err >&2; exit 3
  - slug: free
    command: echo "$EXTRA"
    inputs:
      - input: EXTRA
  - slug: slow
    command: sleep 30
sequences:
  - slug: greet-twice
    steps:
      - name: first
        command: hello
      - name: second
        command: date
categories:
  - slug: info
    name: Info
    color: "#3366ff"
  - slug: ops
    name: Operations
    color: "#ff0374"
views:
  - slug: hello
    name: Hello
    command: hello
    category: info
    execute:
      auto: true
  - name: Today
    command: date
    category: info
  - slug: greet
    name: Greet
    sequence: greet-twice
    category: ops
  - slug: both
    name: Both
    command: both
    category: ops
roles:
  - slug: reader
    categories: [info]
  - slug: operator
    categories: [info, ops]
groups:
  - slug: readers
    roles: [reader]
  - slug: ops
    roles: [operator]
users:
  - id: alice
    groups: [ops]
  - id: bob
    groups: [readers]
"##;

pub(crate) fn catalog() -> Catalog {
    let doc = parse_document(FIXTURE_YAML, Format::Yaml).unwrap();
    Catalog::build(&doc).unwrap()
}

pub(crate) fn repository(policy: AccessPolicy) -> Repository {
    Repository::new(catalog(), policy)
}

/// Runner that records templates instead of spawning processes.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    pub(crate) calls: parking_lot::Mutex<Vec<(String, Vec<sd_core::InputValue>)>>,
}

impl RecordingRunner {
    pub(crate) fn templates(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(t, _)| t.clone()).collect()
    }
}

#[async_trait::async_trait]
impl sd_shell::CommandRunner for RecordingRunner {
    async fn run(
        &self,
        template: &str,
        values: &[sd_core::InputValue],
        _cancel: tokio_util::sync::CancellationToken,
    ) -> Result<sd_core::ExecutionResult, sd_shell::ExecError> {
        self.calls
            .lock()
            .push((template.to_string(), values.to_vec()));
        Ok(sd_core::ExecutionResult {
            stdout: format!("ran {}\n", template),
            stderr: String::new(),
            exit_code: 0,
        })
    }
}
