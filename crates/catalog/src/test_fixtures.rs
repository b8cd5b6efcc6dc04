// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared catalog fixture for unit tests.

use crate::parser::{parse_document, Format};
use crate::schema::ConfigDocument;

/// Users: alice (admins: everything), bob (support: the system category),
/// carol (no groups).
pub(crate) const FIXTURE_YAML: &str = r##"
inputs:
  - slug: HOST
    description: Target host
  - slug: SERVICE
    description: Systemd unit
    validator: "[a-z][a-z0-9-]*"
commands:
  - slug: uptime
    command: uptime
  - slug: disk-usage
    command: df -h
    display: pre
  - slug: ping
    command: ping -c 1 "$HOST"
    inputs:
      - input: HOST
  - slug: restart
    command: systemctl restart "$SERVICE"
    inputs:
      - input: SERVICE
  - slug: status
    command: systemctl status "$SERVICE"
    inputs:
      - input: SERVICE
sequences:
  - slug: deploy
    steps:
      - name: check
        command: status
      - name: restart
        command: restart
categories:
  - slug: system
    name: System
    color: "#3366ff"
  - slug: network
    name: Network
    color: "#00aa55"
  - slug: ops
    name: Operations
    color: "#ff0374"
views:
  - slug: uptime
    name: Uptime
    command: uptime
    category: system
    execute:
      auto: true
  - name: Disk Usage
    command: disk-usage
    category: system
  - slug: ping
    name: Ping
    command: ping
    category: network
  - slug: deploy
    name: Deploy
    sequence: deploy
    category: ops
roles:
  - slug: viewer
    categories: [system]
  - slug: networker
    views: [ping]
  - slug: deployer
    views: [deploy]
groups:
  - slug: support
    roles: [viewer]
  - slug: admins
    roles: [viewer, networker, deployer]
users:
  - id: alice
    groups: [admins]
  - id: bob
    groups: [support]
  - id: carol
    groups: []
"##;

pub(crate) fn fixture() -> ConfigDocument {
    parse_document(FIXTURE_YAML, Format::Yaml).unwrap()
}
