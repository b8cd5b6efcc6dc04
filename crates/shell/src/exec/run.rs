// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;
use std::process::Stdio;
use std::time::Instant;

use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use sd_core::ExecutionResult;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn, Instrument};

use super::error::ExecError;

/// Spawn `<shell> -c <template>` and wait for it, or for `cancel`.
///
/// The child leads its own process group so cancellation reaches anything
/// the template started in the background of a pipeline.
pub(crate) async fn run_template<'a>(
    shell: &Path,
    env: impl Iterator<Item = (&'a str, &'a str)>,
    template: &str,
    cancel: &CancellationToken,
) -> Result<ExecutionResult, ExecError> {
    let start = Instant::now();
    let span = tracing::info_span!(
        "shell.exec",
        shell = %shell.display(),
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new(shell);
    process.arg("-c").arg(template);
    process.envs(env);
    process.stdin(Stdio::null());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());
    process.process_group(0);
    process.kill_on_drop(true);

    let mut child = process.spawn().map_err(|source| ExecError::SpawnFailed {
        shell: shell.display().to_string(),
        source,
    })?;
    let pid = child.id();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    async move {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                kill_group(pid);
                // Reap so the child does not linger as a zombie.
                let _ = child.wait().await;
                warn!(duration_ms = start.elapsed().as_millis() as u64, "execution cancelled");
                Err(ExecError::Cancelled)
            }
            (status, out, err) = async {
                tokio::join!(child.wait(), read_pipe(stdout), read_pipe(stderr))
            } => {
                let status = status.map_err(ExecError::WaitFailed)?;
                let stdout = out.map_err(|source| ExecError::ReadFailed { stream: "stdout", source })?;
                let stderr = err.map_err(|source| ExecError::ReadFailed { stream: "stderr", source })?;

                // Killed by a signal: no code to report.
                let exit_code = status.code().unwrap_or(-1);
                let duration_ms = start.elapsed().as_millis() as u64;
                tracing::Span::current().record("exit_code", exit_code);
                tracing::Span::current().record("duration_ms", duration_ms);
                info!(exit_code, duration_ms, "execution finished");

                Ok(ExecutionResult { stdout, stderr, exit_code })
            }
        }
    }
    .instrument(span)
    .await
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<String> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn kill_group(pid: Option<u32>) {
    let Some(pid) = pid.and_then(|p| i32::try_from(p).ok()) else {
        return;
    };
    if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
        warn!(pid, error = %e, "failed to kill process group");
    }
}
