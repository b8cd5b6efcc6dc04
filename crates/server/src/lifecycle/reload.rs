// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::{CatalogSource, LifecycleError};
use crate::repository::Repository;

/// Rebuild the catalog from `source` and publish it.
///
/// On error the current snapshot stays live.
pub fn reload(repository: &Repository, source: &CatalogSource) -> Result<(), LifecycleError> {
    let catalog = source.load()?;
    repository.replace(catalog);
    info!(source = %source, "catalog reloaded");
    Ok(())
}

/// Handle process signals until shutdown.
///
/// SIGHUP reloads a file source. SIGINT and SIGTERM cancel `shutdown`.
pub async fn watch_signals(
    repository: Arc<Repository>,
    source: CatalogSource,
    shutdown: CancellationToken,
) -> Result<(), LifecycleError> {
    let mut hangup = signal(SignalKind::hangup()).map_err(LifecycleError::Signal)?;
    let mut interrupt = signal(SignalKind::interrupt()).map_err(LifecycleError::Signal)?;
    let mut terminate = signal(SignalKind::terminate()).map_err(LifecycleError::Signal)?;

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            _ = hangup.recv() => {
                if !source.is_reloadable() {
                    warn!("SIGHUP ignored: inline catalog cannot be reloaded");
                    continue;
                }
                if let Err(e) = reload(&repository, &source) {
                    error!(error = %e, "reload failed, keeping current catalog");
                }
            }
            _ = interrupt.recv() => {
                info!("SIGINT received, shutting down");
                shutdown.cancel();
                return Ok(());
            }
            _ = terminate.recv() => {
                info!("SIGTERM received, shutting down");
                shutdown.cancel();
                return Ok(());
            }
        }
    }
}
