//! Polling loop that runs one cycle per interval until shutdown.

use crate::error::CycleError;
use crate::schedule::Schedule;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{error, info, warn};

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const ERROR_BACKOFF: Duration = Duration::from_secs(5);

pub trait Cycle {
    fn run_cycle(&mut self) -> Result<(), CycleError>;
}

/// Runs `cycle` immediately and then once per `interval`. A cycle that fails
/// or panics is reported here and retried after [`ERROR_BACKOFF`]. Returns
/// when `shutdown` resolves.
pub async fn run<C, F>(cycle: &mut C, interval: Duration, shutdown: F)
where
    C: Cycle,
    F: Future<Output = ()>,
{
    let mut schedule = Schedule::new(Instant::now(), interval);
    tokio::pin!(shutdown);

    loop {
        let pause = if schedule.is_due(Instant::now()) {
            match guarded(cycle) {
                Ok(()) => {
                    schedule.advance(Instant::now());
                    POLL_INTERVAL
                }
                Err(e) => {
                    error!("Cycle failed: {}", e);
                    ERROR_BACKOFF
                }
            }
        } else {
            POLL_INTERVAL.min(schedule.remaining(Instant::now()))
        };

        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, leaving scheduler loop");
                return;
            }
            _ = sleep(pause) => {}
        }
    }
}

fn guarded<C: Cycle>(cycle: &mut C) -> Result<(), CycleError> {
    panic::catch_unwind(AssertUnwindSafe(|| cycle.run_cycle()))
        .unwrap_or_else(|payload| Err(CycleError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
