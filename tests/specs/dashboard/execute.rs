// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution specs
//!
//! Commands run through `/bin/sh -c` with request values as environment
//! variables, never spliced into the template.

use crate::prelude::*;

const CATALOG: &str = r##"
inputs:
  - slug: FOO
  - slug: WORD
    validator: "[a-z]+"
commands:
  - slug: hello
    command: echo hello
  - slug: fail
    command: exit 1
  - slug: foo
    command: echo $FOO
    inputs:
      - input: FOO
  - slug: literal
    command: printf '%s' "$FOO"
    inputs:
      - input: FOO
  - slug: word
    command: echo "$WORD"
    inputs:
      - input: WORD
  - slug: stdin
    command: cat
  - slug: killed
    command: kill -9 $$
  - slug: late-touch
    command: sleep 1; touch "$MARK"
sequences:
  - slug: two-step
    steps:
      - name: greet
        command: hello
      - name: echo-word
        command: word
categories:
  - slug: main
    name: Main
    color: "#123456"
views:
  - name: Hello
    command: hello
    category: main
  - name: Two Step
    sequence: two-step
    category: main
"##;

#[tokio::test]
async fn echo_hello() {
    let deck = Deck::open(CATALOG);
    let output = deck.get("/executeCommand?slug=hello").await.output();
    assert_eq!(output, json!({ "Stdout": "hello\n", "Stderr": "", "ExitCode": 0 }));
}

#[tokio::test]
async fn nonzero_exit_is_not_a_request_error() {
    let deck = Deck::open(CATALOG);
    let output = deck.get("/executeCommand?slug=fail").await.output();
    assert_eq!(output, json!({ "Stdout": "", "Stderr": "", "ExitCode": 1 }));
}

#[tokio::test]
async fn values_arrive_as_environment() {
    let deck = Deck::open(CATALOG);
    let output = deck.get("/executeCommand?slug=foo&input_FOO=bar").await.output();
    assert_eq!(output["Stdout"], json!("bar\n"));
}

#[tokio::test]
async fn values_are_never_interpreted_by_the_shell() {
    let deck = Deck::open(CATALOG);
    let reply = deck
        .get("/executeCommand?slug=literal&input_FOO=%24(echo%20pwned)%3B%20echo%20x&format=raw")
        .await;
    reply.status(200);
    assert_eq!(reply.body, "$(echo pwned); echo x");
}

#[tokio::test]
async fn stdin_is_empty() {
    let deck = Deck::open(CATALOG);
    let output = deck.get("/executeCommand?slug=stdin").await.output();
    assert_eq!(output["Stdout"], json!(""));
    assert_eq!(output["ExitCode"], json!(0));
}

#[tokio::test]
async fn signal_death_reports_minus_one() {
    let deck = Deck::open(CATALOG);
    let output = deck.get("/executeCommand?slug=killed").await.output();
    assert_eq!(output["ExitCode"], json!(-1));
}

#[tokio::test]
async fn raw_format_is_plain_stdout() {
    let deck = Deck::open(CATALOG);
    let reply = deck.get("/executeCommand?slug=hello&format=raw").await;
    reply.status(200);
    assert_eq!(reply.content_type, "text/plain; charset=utf-8");
    assert_eq!(reply.body, "hello\n");
}

#[tokio::test]
async fn pattern_mismatch_never_runs() {
    let deck = Deck::open(CATALOG);
    let reply = deck.get("/executeCommand?slug=word&input_WORD=Bad1").await;
    reply.status(422);
    assert_eq!(reply.error_code(), "Invalid");
}

#[tokio::test]
async fn view_step_runs_its_command() {
    let deck = Deck::open(CATALOG);
    let output = deck
        .get("/executeView?view=two-step&step=echo-word&input_WORD=deck")
        .await
        .output();
    assert_eq!(output["Stdout"], json!("deck\n"));
}

#[tokio::test]
async fn view_rejects_undeclared_values() {
    let deck = Deck::open(CATALOG);
    let reply = deck.get("/executeView?view=Hello&input_FOO=x").await;
    reply.status(422);
}

#[tokio::test]
async fn command_slug_accepts_undeclared_values() {
    let deck = Deck::open(CATALOG);
    let output = deck
        .get("/executeCommand?slug=hello&input_ANYTHING=x")
        .await
        .output();
    assert_eq!(output["Stdout"], json!("hello\n"));
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let deck = Deck::open(CATALOG);
    let reply = deck.get("/executeCommand?slug=ghost").await;
    reply.status(404);
    assert_eq!(
        reply.json(),
        json!({ "Error": { "Code": "NotFound", "Message": "Failed to find Command with ID ghost" } })
    );
}

#[tokio::test]
async fn client_disconnect_kills_the_process() {
    let deck = Deck::open(CATALOG);
    let scratch = tempfile::tempdir().unwrap();
    let mark = scratch.path().join("touched");
    let uri = format!("/executeCommand?slug=late-touch&input_MARK={}", mark.display());

    let dropped =
        tokio::time::timeout(std::time::Duration::from_millis(200), deck.get(&uri)).await;
    assert!(dropped.is_err(), "request finished before the disconnect");

    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
    assert!(!mark.exists(), "command kept running after the client left");
}

#[tokio::test]
async fn nul_bytes_are_invalid_requests() {
    let deck = Deck::open(CATALOG);
    let value = deck.get("/executeCommand?slug=hello&input_EXTRA=a%00b").await;
    value.status(422);
    assert_eq!(value.error_code(), "Invalid");

    let name = deck.get("/executeCommand?slug=hello&input_A%00B=x").await;
    name.status(422);
    assert_eq!(name.error_code(), "Invalid");
}

#[tokio::test]
async fn names_with_equals_are_invalid_requests() {
    let deck = Deck::open(CATALOG);
    let reply = deck.get("/executeCommand?slug=hello&input_A%3DB=x").await;
    reply.status(422);
    assert_eq!(reply.error_code(), "Invalid");
}
