//! Graceful shutdown handling.
//!
//! Ctrl+C stops the tick loop cooperatively: the tick in flight completes and
//! the loop exits at its next head.

use super::SimulationHandle;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    handle: SimulationHandle,
}

impl ShutdownManager {
    pub fn new(handle: SimulationHandle) -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            handle,
        }
    }

    /// Stops the simulation. Safe to call repeatedly.
    pub fn request_shutdown(&self) {
        if !self.shutdown_requested.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
            self.handle.stop();
        }
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Requests shutdown on the first Ctrl+C. Needs a tokio runtime.
    pub fn listen_for_ctrl_c(self: &Arc<Self>) {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivarium_core::config::AppConfig;

    fn handle() -> SimulationHandle {
        let mut config = AppConfig::default();
        config.world.initial_population = 5;
        config.world.seed = Some(1);
        SimulationHandle::new(config).expect("simulation")
    }

    #[test]
    fn test_shutdown_request_stops_the_loop() {
        let handle = handle();
        handle.start().expect("start");
        let manager = ShutdownManager::new(handle.clone());
        assert!(!manager.is_shutdown_requested());

        manager.request_shutdown();
        manager.request_shutdown();
        assert!(manager.is_shutdown_requested());
        handle.join().expect("join");
        assert!(!handle.is_running());
    }
}
