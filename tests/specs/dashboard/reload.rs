// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reload specs
//!
//! A reload publishes a new snapshot only if the file is valid.

use crate::prelude::*;

const BEFORE: &str = r##"
commands:
  - slug: old
    command: echo old
categories:
  - slug: c
    name: C
    color: "#000000"
views:
  - name: Old
    command: old
    category: c
"##;

const AFTER: &str = r##"
commands:
  - slug: new
    command: echo new
categories:
  - slug: c
    name: C
    color: "#000000"
views:
  - name: New
    command: new
    category: c
"##;

#[tokio::test]
async fn valid_file_is_swapped_in() {
    let deck = Deck::open(BEFORE);
    deck.rewrite(AFTER);
    deck.reload().unwrap();
    assert_eq!(deck.get("/getViewConfigs").await.view_slugs(), vec!["new"]);
    deck.get("/executeCommand?slug=old").await.status(404);
}

#[tokio::test]
async fn invalid_file_keeps_the_live_catalog() {
    let deck = Deck::open(BEFORE);
    deck.rewrite("views:\n  - name: Broken\n    command: missing\n    category: c\n");
    let err = deck.reload().unwrap_err();
    assert!(err.to_string().contains("references unknown"));
    assert_eq!(deck.get("/getViewConfigs").await.view_slugs(), vec!["old"]);
    let output = deck.get("/executeCommand?slug=old").await.output();
    assert_eq!(output["Stdout"], json!("old\n"));
}
