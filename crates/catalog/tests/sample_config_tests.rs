// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loads the sample catalog shipped in `config/` and checks the compiled
//! result end to end.

use std::path::PathBuf;

use sd_catalog::{load_file, parse_document, Catalog, ConfigError, Executable, Format};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/shelldeck.yaml")
}

#[test]
fn sample_config_builds() {
    let doc = load_file(&sample_path()).unwrap();
    let catalog = Catalog::build(&doc).unwrap();
    let reg = catalog.registries();

    assert_eq!(reg.views().len(), 6);
    assert!(reg.view("disk-usage").is_some());
    let restart = reg.view("restart").unwrap();
    assert!(matches!(restart.executable, Executable::Sequence(_)));
}

#[test]
fn sample_config_allow_sets() {
    let doc = load_file(&sample_path()).unwrap();
    let catalog = Catalog::build(&doc).unwrap();

    let bob = catalog.allow_sets("bob").unwrap();
    assert!(bob.views.contains("ping"));
    assert!(!bob.views.contains("restart"));
    assert!(!bob.commands.contains("unit-restart"));

    let alice = catalog.allow_sets("alice").unwrap();
    assert!(alice.commands.contains("unit-restart"));
    assert!(alice.commands.contains("unit-status"));
    assert!(alice.categories.contains("services"));
}

#[test]
fn same_catalog_in_json_builds_identically() {
    let yaml_doc = load_file(&sample_path()).unwrap();
    let json = serde_json::to_string(&yaml_doc).unwrap();
    let json_doc = parse_document(&json, Format::Json).unwrap();
    assert_eq!(yaml_doc, json_doc);
}

#[test]
fn broken_reference_fails_with_location() {
    let yaml = r#"
commands:
  - slug: a
    command: echo a
categories:
  - slug: c
    name: C
    color: red
views:
  - name: A
    command: b
    category: c
"#;
    let doc = parse_document(yaml, Format::Yaml).unwrap();
    let err = Catalog::build(&doc).unwrap_err();
    assert!(matches!(err, ConfigError::UndefinedReference { .. }));
    assert_eq!(
        err.to_string(),
        "views[0](A).command: references unknown command 'b'"
    );
}
