//! Event delivery infrastructure for normalized domain events.
//!
//! Provides two consumption patterns:
//!
//! 1. **Streams**: subscribe via [`EventBus::subscribe`] and poll for events
//! 2. **Waiters**: one-shot predicate receivers via [`EventBus::register_waiter`]
//!
//! Waiters are checked first during [`emit`](EventBus::emit), ensuring
//! guaranteed delivery for wait-for patterns even when broadcast receivers
//! are lagging. Emission is synchronous and safe from any thread, including
//! the daemon's callback delivery path.

use parking_lot::Mutex;
use tokio::sync::{broadcast, oneshot};

struct WaiterEntry<E> {
    predicate: Box<dyn Fn(&E) -> bool + Send + Sync>,
    complete_tx: oneshot::Sender<E>,
}

/// Broadcast-based event dispatcher with predicate waiters.
pub struct EventBus<E: Clone + Send + 'static> {
    tx: broadcast::Sender<E>,
    waiters: Mutex<Vec<WaiterEntry<E>>>,
}

impl<E: Clone + Send + 'static> EventBus<E> {
    /// Creates a new bus with the given broadcast channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            waiters: Mutex::new(Vec::new()),
        }
    }

    /// Emits an event to all subscribers and matching waiters.
    ///
    /// Matching waiters receive the event first via their oneshot channel
    /// and are removed; the event is then broadcast to stream subscribers.
    pub fn emit(&self, event: E) {
        {
            let mut waiters = self.waiters.lock();
            let mut i = 0;
            while i < waiters.len() {
                if (waiters[i].predicate)(&event) {
                    let entry = waiters.swap_remove(i);
                    let _ = entry.complete_tx.send(event.clone());
                } else {
                    i += 1;
                }
            }
        }
        let _ = self.tx.send(event);
    }

    /// Subscribes to the event stream. Events emitted before subscription
    /// are not received.
    pub fn subscribe(&self) -> EventStream<E> {
        EventStream::new(self.tx.subscribe())
    }

    /// Registers a waiter completed by the first event matching `predicate`.
    pub fn register_waiter<F>(&self, predicate: F) -> oneshot::Receiver<E>
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        let (complete_tx, complete_rx) = oneshot::channel();
        self.waiters.lock().push(WaiterEntry {
            predicate: Box::new(predicate),
            complete_tx,
        });
        complete_rx
    }

    /// Number of registered waiters.
    pub fn waiter_count(&self) -> usize {
        self.waiters.lock().len()
    }
}

impl<E: Clone + Send + 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Wrapper around [`broadcast::Receiver`] with automatic lag handling.
///
/// Broadcast lag is logged and skipped rather than surfaced, so a slow
/// consumer never breaks its own receive loop.
///
/// [`broadcast::Receiver`]: tokio::sync::broadcast::Receiver
pub struct EventStream<E: Clone + Send + 'static> {
    rx: broadcast::Receiver<E>,
}

impl<E: Clone + Send + 'static> EventStream<E> {
    pub(crate) fn new(rx: broadcast::Receiver<E>) -> Self {
        Self { rx }
    }

    /// Receives the next event, waiting until one is available. Returns
    /// `None` when the bus is dropped.
    pub async fn recv(&mut self) -> Option<E> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(dropped = n, "event stream lagged, dropped events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Attempts to receive an event without blocking.
    pub fn try_recv(&mut self) -> Option<E> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    tracing::warn!(dropped = n, "event stream lagged, dropped events");
                }
                Err(
                    broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}
