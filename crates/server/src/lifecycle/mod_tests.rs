// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::repository::Repository;
use crate::test_fixtures::FIXTURE_YAML;
use std::io::Write;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

fn config(source: CatalogSource) -> Config {
    Config {
        source,
        http_addr: "127.0.0.1:0".to_string(),
        user_id_header: None,
        default_user_id: None,
        basic_auth_username: None,
        basic_auth_password: None,
        cors_origin: None,
    }
}

fn yaml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn inline_source_loads() {
    let catalog = CatalogSource::Inline(FIXTURE_YAML.to_string()).load().unwrap();
    assert!(catalog.get_command("hello").is_some());
}

#[test]
fn file_source_loads() {
    let file = yaml_file(FIXTURE_YAML);
    let source = CatalogSource::File(file.path().to_path_buf());
    assert!(source.is_reloadable());
    assert!(source.load().unwrap().get_view("Greet").is_some());
}

#[test]
fn access_policy_follows_user_id_header() {
    let mut cfg = config(CatalogSource::Inline(String::new()));
    assert_eq!(cfg.access_policy(), AccessPolicy::Open);
    cfg.user_id_header = Some("X-User".to_string());
    assert_eq!(cfg.access_policy(), AccessPolicy::Enforced);
}

#[yare::parameterized(
    half_basic_auth = { None, Some("admin"), None, "basic-auth" },
    bad_header      = { Some("bad header"), None, None, "user-id-header" },
    bad_origin      = { None, None, Some("http://x\n"), "cors-origin" },
)]
fn http_config_rejects(
    header: Option<&str>,
    username: Option<&str>,
    origin: Option<&str>,
    setting: &str,
) {
    let mut cfg = config(CatalogSource::Inline(String::new()));
    cfg.user_id_header = header.map(String::from);
    cfg.basic_auth_username = username.map(String::from);
    cfg.cors_origin = origin.map(String::from);
    match cfg.http_config() {
        Err(LifecycleError::InvalidSetting { name, .. }) => assert_eq!(name, setting),
        other => panic!("expected InvalidSetting, got {:?}", other.map(|_| ())),
    }
}

#[yare::parameterized(
    empty_username = { "", "secret" },
    blank_username = { "  ", "secret" },
    empty_password = { "admin", "" },
    blank_password = { "admin", "\t" },
)]
fn http_config_rejects_blank_credentials(username: &str, password: &str) {
    let mut cfg = config(CatalogSource::Inline(String::new()));
    cfg.basic_auth_username = Some(username.to_string());
    cfg.basic_auth_password = Some(password.to_string());
    match cfg.http_config() {
        Err(LifecycleError::InvalidSetting { name, message }) => {
            assert_eq!(name, "basic-auth");
            assert!(message.contains("blank"));
        }
        other => panic!("expected InvalidSetting, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn http_config_accepts_full_settings() {
    let mut cfg = config(CatalogSource::Inline(String::new()));
    cfg.user_id_header = Some("X-Forwarded-User".to_string());
    cfg.default_user_id = Some("guest".to_string());
    cfg.basic_auth_username = Some("admin".to_string());
    cfg.basic_auth_password = Some("secret".to_string());
    cfg.cors_origin = Some("https://dash.example".to_string());
    let http = cfg.http_config().unwrap();
    assert_eq!(
        http.identity.header.as_ref().map(|h| h.as_str()),
        Some("x-forwarded-user")
    );
    assert_eq!(http.identity.default_user_id.as_deref(), Some("guest"));
    assert!(http.basic_auth.is_some());
}

#[tokio::test]
async fn startup_rejects_invalid_catalog() {
    let cfg = config(CatalogSource::Inline(
        "commands:\n  - slug: a\n    command: ''\n".to_string(),
    ));
    match startup(&cfg).await {
        Err(LifecycleError::Config(e)) => {
            assert_eq!(e.to_string(), "commands[0](a): command is empty")
        }
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("startup should fail"),
    }
}

#[tokio::test]
async fn startup_serves_and_shuts_down() {
    let server = startup(&config(CatalogSource::Inline(FIXTURE_YAML.to_string())))
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let task = tokio::spawn(server.serve(shutdown.clone()));

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.ends_with("ok"));

    shutdown.cancel();
    task.await.unwrap().unwrap();
}

#[test]
fn reload_swaps_on_success() {
    let file = yaml_file(FIXTURE_YAML);
    let source = CatalogSource::File(file.path().to_path_buf());
    let repository = Repository::new(source.load().unwrap(), AccessPolicy::Open);

    std::fs::write(
        file.path(),
        "commands:\n  - slug: fresh\n    command: echo fresh\n",
    )
    .unwrap();
    reload(&repository, &source).unwrap();

    let scope = repository.scope(None);
    assert!(scope.get_command("fresh").is_some());
    assert!(scope.get_command("hello").is_none());
}

#[test]
fn reload_keeps_snapshot_on_failure() {
    let file = yaml_file(FIXTURE_YAML);
    let source = CatalogSource::File(file.path().to_path_buf());
    let repository = Repository::new(source.load().unwrap(), AccessPolicy::Open);

    std::fs::write(file.path(), "views:\n  - name: Broken\n    category: nope\n").unwrap();
    assert!(matches!(
        reload(&repository, &source),
        Err(LifecycleError::Config(_))
    ));
    assert!(repository.scope(None).get_command("hello").is_some());
}
