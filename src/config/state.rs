// Application state module
// Shared, read-mostly state handed to every connection task

use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            active_connections: AtomicUsize::new(0),
        }
    }

    /// Reserve a connection slot, honouring `performance.max_connections`.
    ///
    /// Returns the number of connections that were active before this one,
    /// or `None` when the limit is reached.
    pub fn try_acquire_connection(&self) -> Option<usize> {
        // Increment counter first, then check limit (prevents race condition)
        let prev_count = self.active_connections.fetch_add(1, Ordering::SeqCst);

        if let Some(max_conn) = self.config.performance.max_connections {
            if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
                // Exceeded limit: rollback counter
                self.active_connections.fetch_sub(1, Ordering::SeqCst);
                return None;
            }
        }

        Some(prev_count)
    }

    pub fn release_connection(&self) {
        self.active_connections.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn active_connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
