use std::sync::Arc;

use tokio::sync::watch;

/// Graceful shutdown signal shared by the signal handler and `axum::serve`.
///
/// The flag is sticky: a guard taken after [`ShutdownCoordinator::shutdown`]
/// resolves immediately.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    stopping: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (stopping, _) = watch::channel(false);
        Self {
            stopping: Arc::new(stopping),
        }
    }

    pub fn shutdown(&self) {
        log::info!("Shutdown requested, draining in-flight requests");
        self.stopping.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.stopping.borrow()
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard {
            stopping: self.stopping.subscribe(),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ShutdownGuard {
    stopping: watch::Receiver<bool>,
}

impl ShutdownGuard {
    /// Resolves once shutdown has been requested.
    pub async fn wait(&mut self) {
        let _ = self.stopping.wait_for(|stopping| *stopping).await;
    }
}
