// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host lifecycle messages and listener registration.
//!
//! Dispatch is synchronous: every listener runs on the dispatching thread,
//! in registration order, before the outermost `dispatch` returns.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use formscan_registry::Registry;
use strum::{Display, EnumString};

/// Lifecycle events the host broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum MessageType {
    /// All plugins have been loaded.
    PostLoad,
    /// Every `PostLoad` listener has run.
    PostPostLoad,
    /// Input handling is ready.
    InputLoaded,
    /// The form registry is fully populated and queryable.
    DataLoaded,
    NewGame,
    PreLoadGame,
    /// A save was loaded; the registry snapshot may have been rebuilt.
    PostLoadGame,
    SaveGame,
    DeleteGame,
}

/// A lifecycle message, optionally carrying the current registry snapshot.
///
/// Listeners must not keep the snapshot past the callback; the host may
/// replace it in a later phase.
#[derive(Debug, Clone)]
pub struct Message {
    kind: MessageType,
    registry: Option<Arc<Registry>>,
}

impl Message {
    pub fn new(kind: MessageType) -> Self {
        Self {
            kind,
            registry: None,
        }
    }

    pub fn with_registry(kind: MessageType, registry: Arc<Registry>) -> Self {
        Self {
            kind,
            registry: Some(registry),
        }
    }

    pub fn kind(&self) -> MessageType {
        self.kind
    }

    /// The registry snapshot, for messages sent after data has loaded.
    pub fn registry(&self) -> Option<&Registry> {
        self.registry.as_deref()
    }
}

type Listener = Box<dyn FnMut(&Message) + Send>;

/// Listener registry for lifecycle messages.
///
/// A listener may dispatch or register in turn. Such calls are deferred:
/// the nested message is delivered to every listener once the current one
/// has reached them all, and a nested registration takes effect right after
/// the current message.
#[derive(Default)]
pub struct Messaging {
    listeners: Mutex<Vec<Listener>>,
    registered: AtomicUsize,
    /// Thread currently running listeners.
    dispatcher: Mutex<Option<ThreadId>>,
    deferred: Mutex<Deferred>,
}

#[derive(Default)]
struct Deferred {
    messages: VecDeque<Message>,
    listeners: Vec<Listener>,
}

/// Clears the dispatcher mark even if a listener panics.
struct DispatchGuard<'a>(&'a Mutex<Option<ThreadId>>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        *lock(self.0) = None;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Messaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked for every dispatched message.
    pub fn register_listener<F>(&self, listener: F)
    where
        F: FnMut(&Message) + Send + 'static,
    {
        let count = self.registered.fetch_add(1, Ordering::SeqCst) + 1;
        if self.is_dispatching_here() {
            lock(&self.deferred).listeners.push(Box::new(listener));
            tracing::debug!(listeners = count, "deferred listener registration");
            return;
        }
        lock(&self.listeners).push(Box::new(listener));
        tracing::debug!(listeners = count, "registered lifecycle listener");
    }

    /// Deliver `message` to every listener, returning how many calls ran.
    ///
    /// The count includes messages that listeners dispatched meanwhile. A
    /// call made from inside a listener only queues its message and
    /// returns 0.
    pub fn dispatch(&self, message: &Message) -> usize {
        if self.is_dispatching_here() {
            lock(&self.deferred).messages.push_back(message.clone());
            tracing::trace!(kind = %message.kind(), "queued message sent from a listener");
            return 0;
        }

        let mut listeners = lock(&self.listeners);
        *lock(&self.dispatcher) = Some(thread::current().id());
        let _guard = DispatchGuard(&self.dispatcher);

        let mut calls = 0;
        let mut next = Some(message.clone());
        while let Some(current) = next {
            tracing::trace!(kind = %current.kind(), listeners = listeners.len(), "dispatching message");
            for listener in listeners.iter_mut() {
                listener(&current);
            }
            calls += listeners.len();

            let mut deferred = lock(&self.deferred);
            listeners.append(&mut deferred.listeners);
            next = deferred.messages.pop_front();
        }
        calls
    }

    pub fn listener_count(&self) -> usize {
        self.registered.load(Ordering::SeqCst)
    }

    fn is_dispatching_here(&self) -> bool {
        *lock(&self.dispatcher) == Some(thread::current().id())
    }
}

impl std::fmt::Debug for Messaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messaging")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_run_in_registration_order() {
        let messaging = Messaging::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = Arc::clone(&order);
            messaging.register_listener(move |_| order.lock().unwrap().push(tag));
        }

        let ran = messaging.dispatch(&Message::new(MessageType::PostLoad));
        assert_eq!(ran, 2);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn listeners_see_message_kind_and_snapshot() {
        let messaging = Messaging::new();
        let data_loaded = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&data_loaded);
        messaging.register_listener(move |message| {
            if message.kind() == MessageType::DataLoaded && message.registry().is_some() {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        messaging.dispatch(&Message::new(MessageType::PostLoad));
        messaging.dispatch(&Message::with_registry(
            MessageType::DataLoaded,
            Arc::new(Registry::default()),
        ));

        assert_eq!(data_loaded.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dispatch_without_listeners_is_a_no_op() {
        let messaging = Messaging::new();
        assert_eq!(messaging.dispatch(&Message::new(MessageType::SaveGame)), 0);
        assert_eq!(messaging.listener_count(), 0);
    }

    #[test]
    fn message_type_display() {
        assert_eq!(MessageType::DataLoaded.to_string(), "data-loaded");
        assert_eq!(MessageType::PostLoadGame.to_string(), "post-load-game");
        assert_eq!("post-post-load".parse::<MessageType>().unwrap(), MessageType::PostPostLoad);
    }

    #[test]
    fn dispatch_from_a_listener_is_delivered_after_the_current_message() {
        let messaging = Arc::new(Messaging::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let inner = Arc::clone(&messaging);
        messaging.register_listener(move |message| {
            if message.kind() == MessageType::DataLoaded {
                assert_eq!(inner.dispatch(&Message::new(MessageType::PostLoadGame)), 0);
            }
        });
        let sink = Arc::clone(&seen);
        messaging.register_listener(move |message| sink.lock().unwrap().push(message.kind()));

        let calls = messaging.dispatch(&Message::new(MessageType::DataLoaded));
        assert_eq!(calls, 4);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![MessageType::DataLoaded, MessageType::PostLoadGame]
        );
    }

    #[test]
    fn registration_from_a_listener_applies_to_later_messages() {
        let messaging = Arc::new(Messaging::new());
        let late_calls = Arc::new(AtomicUsize::new(0));

        let inner = Arc::clone(&messaging);
        let counter = Arc::clone(&late_calls);
        let mut registered = false;
        messaging.register_listener(move |_| {
            if !registered {
                registered = true;
                let counter = Arc::clone(&counter);
                inner.register_listener(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        messaging.dispatch(&Message::new(MessageType::PostLoad));
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);
        assert_eq!(messaging.listener_count(), 2);

        messaging.dispatch(&Message::new(MessageType::PostPostLoad));
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn other_threads_wait_for_the_running_dispatch() {
        let messaging = Arc::new(Messaging::new());
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        messaging.register_listener(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let messaging = Arc::clone(&messaging);
                std::thread::spawn(move || messaging.dispatch(&Message::new(MessageType::SaveGame)))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }
}
