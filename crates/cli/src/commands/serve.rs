// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shelldeck serve`: run the dashboard API.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sd_server::env;
use sd_server::lifecycle::{startup, CatalogSource, Config, LifecycleError};

use crate::exit_error::ExitError;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Catalog file (.yaml, .yml, .json or .toml); falls back to SHELLDECK_CONFIG
    #[arg(long, conflicts_with = "config_yaml")]
    pub config: Option<PathBuf>,

    /// Catalog as inline YAML
    #[arg(long)]
    pub config_yaml: Option<String>,

    /// Address to listen on [default: 0.0.0.0:8000]
    #[arg(long)]
    pub http_addr: Option<String>,

    /// Header carrying the user id; activates permissions
    #[arg(long)]
    pub user_id_header: Option<String>,

    /// User id assumed when the header is missing or empty
    #[arg(long)]
    pub default_user_id: Option<String>,

    #[arg(long)]
    pub basic_auth_username: Option<String>,

    #[arg(long)]
    pub basic_auth_password: Option<String>,

    /// Allowed CORS origin [default: any]
    #[arg(long)]
    pub cors_origin: Option<String>,
}

impl ServeArgs {
    fn source(&self) -> Result<CatalogSource, ExitError> {
        if let Some(text) = &self.config_yaml {
            return Ok(CatalogSource::Inline(text.clone()));
        }
        self.config
            .clone()
            .or_else(env::config_path)
            .map(CatalogSource::File)
            .ok_or_else(|| ExitError::usage("no catalog given: pass --config or --config-yaml"))
    }

    /// Flags over environment over defaults.
    pub fn into_config(self) -> Result<Config, ExitError> {
        let mut config = Config::from_env(self.source()?);
        if let Some(addr) = self.http_addr {
            config.http_addr = addr;
        }
        config.user_id_header = self.user_id_header.or(config.user_id_header);
        config.default_user_id = self.default_user_id.or(config.default_user_id);
        config.basic_auth_username = self.basic_auth_username.or(config.basic_auth_username);
        config.basic_auth_password = self.basic_auth_password.or(config.basic_auth_password);
        config.cors_origin = self.cors_origin.or(config.cors_origin);
        Ok(config)
    }
}

pub async fn handle(args: ServeArgs) -> Result<()> {
    let config = args.into_config()?;
    let server = match startup(&config).await {
        Ok(server) => server,
        Err(LifecycleError::Config(e)) => {
            return Err(ExitError::invalid_catalog(&config.source, e).into());
        }
        Err(e) => return Err(e.into()),
    };
    server.run().await?;
    Ok(())
}

#[cfg(test)]
#[path = "serve_tests.rs"]
mod tests;
