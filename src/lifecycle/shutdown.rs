//! Process shutdown signalling.
//!
//! One broadcast pair: `main` holds the sender and fires it on ctrl-c,
//! the serve loop holds a receiver and drains in-flight proxied
//! requests before exiting.

use tokio::sync::broadcast;

/// Fans the one-shot shutdown signal out to the serve loop.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Hand out a receiver for the serve loop to wait on.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. A no-op when nothing subscribed yet.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
