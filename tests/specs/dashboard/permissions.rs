// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Permission specs
//!
//! With a user-id header configured, callers only see and run what their
//! groups' roles grant.

use crate::prelude::*;

const CATALOG: &str = r##"
commands:
  - slug: uptime
    command: echo up
  - slug: restart
    command: echo restarted
  - slug: check
    command: echo checked
sequences:
  - slug: redeploy
    steps:
      - name: check
        command: check
      - name: restart
        command: restart
categories:
  - slug: system
    name: System
    color: "#3366ff"
  - slug: ops
    name: Ops
    color: "#ff0374"
views:
  - name: Uptime
    command: uptime
    category: system
  - name: Restart
    command: restart
    category: ops
  - name: Redeploy
    sequence: redeploy
    category: ops
roles:
  - slug: watcher
    categories: [system]
  - slug: deployer
    views: [redeploy]
groups:
  - slug: support
    roles: [watcher]
  - slug: release
    roles: [deployer]
users:
  - id: ulla
    groups: [support]
  - id: rex
    groups: [release]
  - id: nobody
    groups: []
"##;

#[tokio::test]
async fn category_grant_shows_its_views_only() {
    let deck = Deck::enforced(CATALOG);
    assert_eq!(
        deck.get_as("ulla", "/getViewConfigs").await.view_slugs(),
        vec!["uptime"]
    );
}

#[tokio::test]
async fn direct_view_grant_brings_its_category() {
    let deck = Deck::enforced(CATALOG);
    let body = deck.get_as("rex", "/getCategoryConfigs").await.json();
    assert_eq!(
        body["CategoryConfigs"],
        json!([{ "Slug": "ops", "Name": "Ops", "Color": "#ff0374" }])
    );
    assert_eq!(
        deck.get_as("rex", "/getViewConfigs").await.view_slugs(),
        vec!["redeploy"]
    );
}

#[tokio::test]
async fn ungranted_command_is_unauthorized() {
    let deck = Deck::enforced(CATALOG);
    let reply = deck.get_as("ulla", "/executeCommand?slug=restart").await;
    reply.status(403);
    assert_eq!(reply.error_code(), "Unauthorized");
}

#[tokio::test]
async fn same_command_runs_for_a_granted_user() {
    let deck = Deck::enforced(CATALOG);
    let output = deck
        .get_as("rex", "/executeCommand?slug=restart")
        .await
        .output();
    assert_eq!(output["Stdout"], json!("restarted\n"));
}

#[tokio::test]
async fn user_without_roles_sees_nothing() {
    let deck = Deck::enforced(CATALOG);
    assert!(deck
        .get_as("nobody", "/getViewConfigs")
        .await
        .view_slugs()
        .is_empty());
    deck.get_as("nobody", "/executeCommand?slug=uptime")
        .await
        .status(403);
}

#[tokio::test]
async fn unlisted_user_sees_nothing() {
    let deck = Deck::enforced(CATALOG);
    assert!(deck
        .get_as("stranger", "/getViewConfigs")
        .await
        .view_slugs()
        .is_empty());
}

#[tokio::test]
async fn missing_user_is_rejected_before_handlers() {
    let deck = Deck::enforced(CATALOG);
    deck.get("/getViewConfigs").await.status(401);
    deck.get("/executeCommand?slug=uptime").await.status(401);
    deck.get("/health").await.status(200);
}

#[tokio::test]
async fn default_user_applies_when_header_missing() {
    let deck = Deck::build(CATALOG, |config| {
        config.user_id_header = Some(USER_HEADER.to_string());
        config.default_user_id = Some("ulla".to_string());
    });
    assert_eq!(deck.get("/getViewConfigs").await.view_slugs(), vec!["uptime"]);
}

#[tokio::test]
async fn hidden_view_is_unauthorized() {
    let deck = Deck::enforced(CATALOG);
    deck.get_as("ulla", "/executeView?view=Restart")
        .await
        .status(403);
    let output = deck
        .get_as("rex", "/executeView?view=Redeploy&step=check")
        .await
        .output();
    assert_eq!(output["Stdout"], json!("checked\n"));
}

#[tokio::test]
async fn without_header_everything_is_visible() {
    let deck = Deck::open(CATALOG);
    assert_eq!(
        deck.get("/getViewConfigs").await.view_slugs(),
        vec!["uptime", "restart", "redeploy"]
    );
}
