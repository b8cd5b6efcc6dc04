// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sd_shell::ShellExecutor;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::{watch_signals, CatalogSource, Config, LifecycleError};
use crate::http;
use crate::repository::Repository;
use crate::service::DeckService;

/// A started server: catalog published, listener bound.
pub struct Server {
    pub repository: Arc<Repository>,
    source: CatalogSource,
    listener: TcpListener,
    router: Router,
}

/// Load the catalog and bind the listener.
///
/// Nothing is bound unless the catalog and every setting are valid.
pub async fn startup(config: &Config) -> Result<Server, LifecycleError> {
    // 1. Load, validate and link the catalog
    let catalog = config.source.load()?;

    // 2. Request boundary
    let http_config = config.http_config()?;
    let policy = config.access_policy();
    let repository = Arc::new(Repository::new(catalog, policy));
    let service = DeckService::new(Arc::clone(&repository), Arc::new(ShellExecutor::new()));
    let router = http::router(service, http_config);

    // 3. Bind (LAST - only after all validation passes)
    let listener = TcpListener::bind(&config.http_addr)
        .await
        .map_err(|e| LifecycleError::BindFailed(config.http_addr.clone(), e))?;

    info!(
        source = %config.source,
        addr = %config.http_addr,
        policy = ?policy,
        "server started"
    );

    Ok(Server {
        repository,
        source: config.source.clone(),
        listener,
        router,
    })
}

impl Server {
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` is cancelled, draining in-flight requests.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<(), LifecycleError> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(LifecycleError::Serve)?;
        info!("server stopped");
        Ok(())
    }

    /// Serve with signal handling: SIGHUP reloads, SIGINT/SIGTERM stop.
    pub async fn run(self) -> Result<(), LifecycleError> {
        let shutdown = CancellationToken::new();
        let signals = tokio::spawn(watch_signals(
            Arc::clone(&self.repository),
            self.source.clone(),
            shutdown.clone(),
        ));
        let served = self.serve(shutdown.clone()).await;
        shutdown.cancel();
        match signals.await {
            Ok(result) => result?,
            Err(e) => tracing::warn!(error = %e, "signal task failed"),
        }
        served
    }
}
