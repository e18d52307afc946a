//! Waiting for compiler output to appear on disk

use std::path::Path;
use std::process::Child;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use super::artifact::artifact_exists;
use crate::{
    config::WaitConfig,
    error::{Error, Result},
};

/// Shared flag that aborts a pending wait. Clones observe the same flag,
/// so a handle can be given to another thread or a signal handler.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Polling schedule: start at `initial_interval`, double after every miss
/// up to `max_interval`, give up after `timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub initial_interval: Duration,
    pub max_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::from(&WaitConfig::default())
    }
}

impl From<&WaitConfig> for WaitPolicy {
    fn from(config: &WaitConfig) -> Self {
        let initial_interval = Duration::from_millis(config.initial_poll_ms.max(1));
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            initial_interval,
            max_interval: Duration::from_millis(config.max_poll_ms).max(initial_interval),
        }
    }
}

impl WaitPolicy {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn next_interval(&self, current: Duration) -> Duration {
        (current * 2).min(self.max_interval)
    }

    /// Block until `artifact` exists.
    ///
    /// When the compiler process is given, the wait also lasts until that
    /// process has exited successfully, since the file can appear before
    /// the compiler has finished writing it. Both conditions share the same
    /// deadline and cancel check. An unsuccessful exit, or a clean exit that
    /// leaves no artifact behind, fails the wait immediately. On timeout or
    /// cancellation the compiler is killed.
    pub fn wait_for(
        &self,
        artifact: &Path,
        cancel: &CancelToken,
        mut compiler: Option<(&mut Child, &str)>,
    ) -> Result<Duration> {
        let started = Instant::now();
        let mut interval = self.initial_interval;
        let mut polls: u32 = 0;
        let mut seen = false;

        loop {
            polls += 1;

            if !seen && artifact_exists(artifact)? {
                seen = true;
                debug!("Artifact {:?} appeared after {:?} ({} polls)", artifact, started.elapsed(), polls);
            }

            match compiler {
                Some((ref mut child, command)) => {
                    if let Some(status) = child.try_wait()? {
                        // The compiler may have written the file between the two checks.
                        if status.success() && (seen || artifact_exists(artifact)?) {
                            return Ok(started.elapsed());
                        }
                        return Err(Error::CompileFailed {
                            command: command.to_string(),
                            status,
                            artifact: artifact.to_path_buf(),
                        });
                    }
                }
                None if seen => return Ok(started.elapsed()),
                None => {}
            }

            if cancel.is_cancelled() {
                stop_compiler(compiler);
                return Err(Error::Cancelled(artifact.to_path_buf()));
            }

            let elapsed = started.elapsed();
            if elapsed >= self.timeout {
                stop_compiler(compiler);
                return Err(Error::CompileTimeout {
                    artifact: artifact.to_path_buf(),
                    elapsed,
                });
            }

            trace!("Compile not finished, sleeping {:?}", interval);
            thread::sleep(interval.min(self.timeout - elapsed));
            interval = self.next_interval(interval);
        }
    }
}

fn stop_compiler(compiler: Option<(&mut Child, &str)>) {
    if let Some((child, command)) = compiler {
        if let Err(err) = child.kill() {
            warn!("Failed to stop `{}`: {}", command, err);
        }
        let _ = child.wait();
    }
}
