//! Background export job
//!
//! At most one export runs at a time. Requests made while one is in flight
//! are dropped with a log line rather than queued.

use super::profile::TargetPlatform;
use super::ExportError;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

/// Lifecycle of the most recent export
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JobState {
    /// Nothing has been exported yet
    #[default]
    Idle,
    /// An export is in flight
    Running {
        /// Target being exported
        platform: TargetPlatform,
    },
    /// The last export wrote its documents
    Finished {
        /// Target exported
        platform: TargetPlatform,
        /// Directory the documents were written to
        output_dir: PathBuf,
    },
    /// The last export failed or panicked
    Failed {
        /// Target exported
        platform: TargetPlatform,
        /// Error description
        message: String,
    },
}

/// Single-slot background runner for exports
#[derive(Debug, Default)]
pub struct ExportJob {
    state: Arc<Mutex<JobState>>,
    worker: Option<JoinHandle<()>>,
}

impl ExportJob {
    /// Idle job
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` on a background thread unless an export is already running.
    ///
    /// Returns whether the request was accepted. Panics inside `work` are
    /// caught and reported as [`JobState::Failed`].
    pub fn try_start<F>(&mut self, platform: TargetPlatform, work: F) -> bool
    where
        F: FnOnce() -> Result<PathBuf, ExportError> + Send + 'static,
    {
        {
            let mut state = lock(&self.state);
            if let JobState::Running { platform: current } = *state {
                log::info!("Export already in progress ({current}), ignoring {platform} request");
                return false;
            }
            *state = JobState::Running { platform };
        }
        self.reap();

        let shared = Arc::clone(&self.state);
        let spawned = thread::Builder::new()
            .name(format!("export-{}", platform.as_str()))
            .spawn(move || {
                let outcome = match panic::catch_unwind(AssertUnwindSafe(work)) {
                    Ok(result) => result,
                    Err(payload) => Err(ExportError::Panicked(panic_message(payload.as_ref()))),
                };
                let next = match outcome {
                    Ok(output_dir) => {
                        log::info!("{platform} export complete: {}", output_dir.display());
                        JobState::Finished { platform, output_dir }
                    }
                    Err(err) => {
                        log::error!("{platform} export failed: {err}");
                        JobState::Failed {
                            platform,
                            message: err.to_string(),
                        }
                    }
                };
                *lock(&shared) = next;
            });

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                true
            }
            Err(err) => {
                log::error!("Could not start export thread: {err}");
                *lock(&self.state) = JobState::Failed {
                    platform,
                    message: err.to_string(),
                };
                false
            }
        }
    }

    /// Current state
    pub fn state(&self) -> JobState {
        lock(&self.state).clone()
    }

    /// An export is in flight
    pub fn is_busy(&self) -> bool {
        matches!(*lock(&self.state), JobState::Running { .. })
    }

    /// Block until the in-flight export, if any, has finished
    pub fn wait(&mut self) -> JobState {
        self.reap();
        self.state()
    }

    fn reap(&mut self) {
        if let Some(handle) = self.worker.take() {
            // The worker never unwinds past catch_unwind.
            let _ = handle.join();
        }
    }
}

fn lock(state: &Mutex<JobState>) -> MutexGuard<'_, JobState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_second_request_ignored_while_running() {
        let mut job = ExportJob::new();
        let (release, gate) = mpsc::channel::<()>();

        assert!(job.try_start(TargetPlatform::Desktop, move || {
            gate.recv().ok();
            Ok(PathBuf::from("out/Desktop_Build"))
        }));
        assert!(job.is_busy());
        assert!(!job.try_start(TargetPlatform::Android, || Ok(PathBuf::from("unused"))));

        release.send(()).unwrap();
        assert_eq!(
            job.wait(),
            JobState::Finished {
                platform: TargetPlatform::Desktop,
                output_dir: PathBuf::from("out/Desktop_Build"),
            }
        );
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut job = ExportJob::new();
        assert!(job.try_start(TargetPlatform::Android, || {
            Err(ExportError::EntryPointMissing { needle: "fn main() {" })
        }));
        match job.wait() {
            JobState::Failed { platform, message } => {
                assert_eq!(platform, TargetPlatform::Android);
                assert!(message.contains("fn main()"));
            }
            other => panic!("unexpected state {other:?}"),
        }

        assert!(job.try_start(TargetPlatform::Android, || Ok(PathBuf::from("retry"))));
        assert!(matches!(job.wait(), JobState::Finished { .. }));
    }

    #[test]
    fn test_panic_reported_as_failure() {
        let mut job = ExportJob::new();
        assert!(job.try_start(TargetPlatform::Desktop, || panic!("template exploded")));
        assert_eq!(
            job.wait(),
            JobState::Failed {
                platform: TargetPlatform::Desktop,
                message: "export panicked: template exploded".to_string(),
            }
        );
        assert!(!job.is_busy());
    }
}
