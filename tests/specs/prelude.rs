// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for specs.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sd_server::lifecycle::{reload, CatalogSource, Config, LifecycleError};
use sd_server::{http, DeckService, Repository};
use sd_shell::ShellExecutor;
use tower::ServiceExt;

pub use serde_json::{json, Value};

/// Header used by specs that enforce permissions.
pub const USER_HEADER: &str = "X-Shelldeck-User";

/// A catalog file on disk served through the full router.
pub struct Deck {
    _dir: tempfile::TempDir,
    path: PathBuf,
    source: CatalogSource,
    repository: Arc<Repository>,
    router: Router,
}

impl Deck {
    /// Serve `yaml` with permissions off.
    pub fn open(yaml: &str) -> Self {
        Self::build(yaml, |_| {})
    }

    /// Serve `yaml` with permissions keyed on [`USER_HEADER`].
    pub fn enforced(yaml: &str) -> Self {
        Self::build(yaml, |config| {
            config.user_id_header = Some(USER_HEADER.to_string());
        })
    }

    pub fn build(yaml: &str, configure: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelldeck.yaml");
        std::fs::write(&path, yaml).unwrap();
        let source = CatalogSource::File(path.clone());

        let mut config = Config {
            source: source.clone(),
            http_addr: "127.0.0.1:0".to_string(),
            user_id_header: None,
            default_user_id: None,
            basic_auth_username: None,
            basic_auth_password: None,
            cors_origin: None,
        };
        configure(&mut config);

        let catalog = source.load().unwrap_or_else(|e| panic!("invalid catalog: {}", e));
        let repository = Arc::new(Repository::new(catalog, config.access_policy()));
        let service = DeckService::new(Arc::clone(&repository), Arc::new(ShellExecutor::new()));
        let router = http::router(service, config.http_config().unwrap());
        Self {
            _dir: dir,
            path,
            source,
            repository,
            router,
        }
    }

    /// Replace the catalog file on disk (not yet reloaded).
    pub fn rewrite(&self, yaml: &str) {
        std::fs::write(&self.path, yaml).unwrap();
    }

    pub fn reload(&self) -> Result<(), LifecycleError> {
        reload(&self.repository, &self.source)
    }

    pub async fn get(&self, uri: &str) -> Reply {
        self.request(uri, None).await
    }

    pub async fn get_as(&self, user: &str, uri: &str) -> Reply {
        self.request(uri, Some(user)).await
    }

    async fn request(&self, uri: &str, user: Option<&str>) -> Reply {
        let mut builder = Request::builder().uri(uri);
        if let Some(user) = user {
            builder = builder.header(USER_HEADER, user);
        }
        let resp = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        Reply {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// A buffered response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl Reply {
    pub fn status(&self, expected: u16) -> &Self {
        assert_eq!(
            self.status.as_u16(),
            expected,
            "unexpected status, body:\n{}",
            self.body
        );
        self
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}):\n{}", e, self.body))
    }

    /// `Output` of a successful execution.
    pub fn output(&self) -> Value {
        self.status(200);
        self.json()["Output"].clone()
    }

    /// `Error.Code` of a failed request.
    pub fn error_code(&self) -> String {
        self.json()["Error"]["Code"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    /// Slugs from a `getViewConfigs` response.
    pub fn view_slugs(&self) -> Vec<String> {
        self.status(200);
        self.json()["ViewConfigs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["Slug"].as_str().unwrap().to_string())
            .collect()
    }
}
