//! Sweep Sessions Use Case
//!
//! Periodically purges expired tokens from the session registry.
//! The background task lives as long as the server and stops when the
//! shutdown signal flips to `true` (or its sender is dropped).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sweep sessions use case
pub struct SweepSessionsUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    interval: Duration,
}

impl<S> SweepSessionsUseCase<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, interval: Duration) -> Self {
        Self {
            session_repo,
            interval,
        }
    }

    /// Run a single sweep
    pub async fn run_once(&self) -> AuthResult<usize> {
        let removed = self.session_repo.sweep().await?;

        if removed > 0 {
            tracing::info!(sessions_removed = removed, "Swept expired sessions");
        } else {
            tracing::debug!("Session sweep found nothing to remove");
        }

        Ok(removed)
    }

    /// Spawn the periodic sweep on the current runtime
    ///
    /// The first sweep runs one full interval after spawning.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            tracing::info!(interval_secs = self.interval.as_secs(), "Session sweeper started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = self.run_once().await {
                            tracing::error!(error = %e, "Session sweep failed");
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }

            tracing::info!("Session sweeper stopped");
        })
    }
}
