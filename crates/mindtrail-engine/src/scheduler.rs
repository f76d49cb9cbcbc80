//! Fixed-interval mining cycles on a tokio task.

use std::sync::Arc;
use std::time::Duration;

use mindtrail_core::constants::VERSION;
use mindtrail_core::errors::{EngineError, MindtrailError, MindtrailResult};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::engine::BehaviorEngine;

/// Starts the background cycle loop for a shared engine.
pub struct CycleScheduler;

impl CycleScheduler {
    /// Spawn the cycle loop on the current tokio runtime.
    ///
    /// The first cycle runs one full `cycle_interval_ms` after the call. A
    /// failed cycle is logged and the loop keeps going. The loop exits when
    /// [`SchedulerHandle::stop`] is called or the handle is dropped.
    pub fn spawn(engine: Arc<BehaviorEngine>) -> SchedulerHandle {
        let interval_ms = engine.config().cycle_interval_ms;
        let period = Duration::from_millis(interval_ms);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            info!(interval_ms, version = VERSION, "cycle scheduler starting");

            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => {
                        info!("cycle scheduler received shutdown signal");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = engine.run_cycle() {
                            warn!(error = %e, "scheduled cycle failed");
                        }
                    }
                }
            }

            info!("cycle scheduler stopped");
        });

        SchedulerHandle { shutdown_tx, task }
    }
}

/// Owner of a running cycle loop.
pub struct SchedulerHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signal shutdown and wait for the loop to exit. A cycle already in
    /// progress completes first.
    pub async fn stop(self) -> MindtrailResult<()> {
        if self.shutdown_tx.send(true).is_err() {
            debug!("cycle scheduler already exited");
        }
        self.task.await.map_err(|e| {
            MindtrailError::from(EngineError::SchedulerJoin {
                reason: e.to_string(),
            })
        })
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
