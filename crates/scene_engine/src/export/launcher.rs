//! Launching the generated build script
//!
//! Launch and forget: the script runs as a detached process and only a
//! failure to start is reported. A helper thread reaps it when it exits.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Build script launch errors
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The script was not written where expected
    #[error("build script not found: {0}")]
    MissingScript(PathBuf),

    /// The process could not be started
    #[error("failed to start {script}: {source}")]
    Spawn {
        /// Script path
        script: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Starts a build script in its output directory
pub trait BuildLauncher: Send + Sync {
    /// Launch `script` inside `directory` without waiting for it
    fn launch(&self, directory: &Path, script: &str) -> Result<(), LaunchError>;
}

/// Runs scripts through `sh` as detached child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl BuildLauncher for ProcessLauncher {
    fn launch(&self, directory: &Path, script: &str) -> Result<(), LaunchError> {
        let script_path = directory.join(script);
        if !script_path.is_file() {
            return Err(LaunchError::MissingScript(script_path));
        }

        log::info!("Launching {} in {}", script, directory.display());
        Command::new("sh")
            .arg(script)
            .current_dir(directory)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|child| {
                reap_in_background(child);
            })
            .map_err(|source| LaunchError::Spawn {
                script: script_path,
                source,
            })
    }
}

/// Wait on the child from a helper thread so it is reaped without blocking
/// the caller. The exit status is only logged.
fn reap_in_background(mut child: Child) -> Option<JoinHandle<Option<ExitStatus>>> {
    let pid = child.id();
    log::debug!("Build script started as pid {pid}");
    let spawned = thread::Builder::new()
        .name(format!("build-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => {
                log::debug!("Build script {pid} exited: {status}");
                Some(status)
            }
            Err(err) => {
                log::warn!("Could not wait on build script {pid}: {err}");
                None
            }
        });
    match spawned {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("Build script {pid} will not be reaped: {err}");
            None
        }
    }
}
